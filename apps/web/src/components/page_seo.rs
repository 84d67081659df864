use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use site_core::metadata::{PageMetadata, RouteMetadata};

/// Applies the effective document metadata for the hosting page. Each page
/// mounts one of these with its own override; `leptos_meta` replaces the head
/// tags on navigation, so nothing stale survives a route change.
#[component]
pub fn PageSeo(#[prop(optional)] page: PageMetadata) -> impl IntoView {
    let meta = RouteMetadata::site_default().resolve(&page);

    view! {
        <Title text=meta.title.clone() />
        <Meta name="title" content=meta.title.clone() />
        <Meta name="description" content=meta.description.clone() />
        <Meta name="keywords" content=meta.keywords />
        <Link rel="canonical" href=meta.canonical_url.clone() />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=meta.canonical_url.clone() />
        <Meta property="og:title" content=meta.title.clone() />
        <Meta property="og:description" content=meta.description.clone() />
        <Meta property="og:image" content=meta.og_image.clone() />

        // Social card
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:url" content=meta.canonical_url />
        <Meta property="twitter:title" content=meta.title />
        <Meta property="twitter:description" content=meta.description />
        <Meta property="twitter:image" content=meta.og_image />

        <Meta name="robots" content="index, follow" />
        <Meta name="language" content="English" />
        <Meta name="author" content="KINDLIGHT" />
    }
}
