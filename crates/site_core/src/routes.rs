//! The declarative route table: five exact-match paths plus one fallback.
//! Navigation chrome iterates [`Route::ALL`] so the header, footer, and
//! router never drift apart.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Vision,
    Platform,
    Contact,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Vision,
        Route::Platform,
        Route::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Vision => "/vision",
            Route::Platform => "/platform",
            Route::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Vision => "Vision & Mission",
            Route::Platform => "Our Platform",
            Route::Contact => "Contact",
        }
    }

    /// Exact-match lookup. `None` means the caller should render the
    /// not-found fallback; no prefix matching is performed.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}
