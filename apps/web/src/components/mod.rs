mod footer;
mod header;
mod intro_screen;
mod page_seo;

pub use footer::Footer;
pub use header::Header;
pub use intro_screen::IntroScreen;
pub use page_seo::PageSeo;
