//! Per-route document metadata: a process-wide default merged with a
//! page-supplied partial override. Resolution is pure, so re-applying the
//! result on every navigation cannot accumulate stale tags.

pub const BRAND_NAME: &str = "KINDLIGHT";
pub const SITE_URL: &str = "https://kindlight.org";

/// The effective set of discoverability tags for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical_url: String,
    pub og_image: String,
}

/// Partial override a page supplies on mount. Unset fields fall back to the
/// site defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub canonical_url: Option<String>,
    pub og_image: Option<String>,
}

impl RouteMetadata {
    pub fn site_default() -> Self {
        Self {
            title: format!("{BRAND_NAME} - Connecting Hearts Globally"),
            description: "A global platform that connects people in need with people who \
                          want to help, bringing transparency, trust, and real impact to \
                          social giving."
                .into(),
            keywords: "social impact, charity, donate, help, verified causes, global \
                       giving, transparency, trust, community support"
                .into(),
            canonical_url: SITE_URL.into(),
            og_image: format!("{SITE_URL}/og-image.jpg"),
        }
    }

    /// Merges a page override over these defaults, field-wise, and applies the
    /// brand title composition rule to whichever title wins.
    pub fn resolve(&self, page: &PageMetadata) -> RouteMetadata {
        RouteMetadata {
            title: compose_title(page.title.as_deref().unwrap_or(&self.title)),
            description: page
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            keywords: page.keywords.clone().unwrap_or_else(|| self.keywords.clone()),
            canonical_url: page
                .canonical_url
                .clone()
                .unwrap_or_else(|| self.canonical_url.clone()),
            og_image: page.og_image.clone().unwrap_or_else(|| self.og_image.clone()),
        }
    }
}

/// Titles that already carry the brand name are used verbatim; anything else
/// gets the fixed "| BRAND" suffix.
fn compose_title(title: &str) -> String {
    if title.contains(BRAND_NAME) {
        title.to_string()
    } else {
        format!("{title} | {BRAND_NAME}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_win_for_unset_fields() {
        let default = RouteMetadata::site_default();
        let resolved = default.resolve(&PageMetadata {
            description: Some("Reach the team".into()),
            ..Default::default()
        });

        assert_eq!(resolved.description, "Reach the team");
        assert_eq!(resolved.title, default.title);
        assert_eq!(resolved.keywords, default.keywords);
        assert_eq!(resolved.canonical_url, default.canonical_url);
        assert_eq!(resolved.og_image, default.og_image);
    }

    #[test]
    fn empty_override_yields_the_defaults() {
        let default = RouteMetadata::site_default();
        assert_eq!(default.resolve(&PageMetadata::default()), default);
    }

    #[test]
    fn plain_title_gets_the_brand_suffix() {
        let resolved = RouteMetadata::site_default().resolve(&PageMetadata {
            title: Some("Contact Us".into()),
            ..Default::default()
        });
        assert_eq!(resolved.title, "Contact Us | KINDLIGHT");
    }

    #[test]
    fn branded_title_is_used_verbatim() {
        let resolved = RouteMetadata::site_default().resolve(&PageMetadata {
            title: Some("KINDLIGHT - Our Vision".into()),
            ..Default::default()
        });
        assert_eq!(resolved.title, "KINDLIGHT - Our Vision");
    }

    #[test]
    fn resolve_is_idempotent() {
        let default = RouteMetadata::site_default();
        let page = PageMetadata {
            title: Some("Our Platform".into()),
            canonical_url: Some("https://kindlight.org/platform".into()),
            ..Default::default()
        };

        let once = default.resolve(&page);
        let twice = default.resolve(&page);
        assert_eq!(once, twice);

        // Feeding a resolved title back through keeps it stable.
        let again = default.resolve(&PageMetadata {
            title: Some(once.title.clone()),
            ..Default::default()
        });
        assert_eq!(again.title, once.title);
    }
}
