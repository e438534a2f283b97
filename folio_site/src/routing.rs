// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static routes.
//!
//! Navigation is plain links with full page loads; the entry point reads the
//! path once and builds the matching page.

/// A page of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// The single-page home with every section.
    Home,
    /// The escrow platform case study.
    Nexcrow,
    /// The Space Monk art case study.
    CreationByObsession,
    /// Anything else.
    NotFound,
}

impl Route {
    /// Every routable page.
    pub const ALL: [Self; 3] = [Self::Home, Self::Nexcrow, Self::CreationByObsession];

    /// Resolves a location pathname. Trailing slashes and `index.html` are
    /// ignored.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = path.strip_suffix("index.html").unwrap_or(path);
        let path = path.trim_end_matches('/');
        match path {
            "" => Self::Home,
            "/case-studies/nexus-nexcrow" => Self::Nexcrow,
            "/case-studies/creation-by-obsession" => Self::CreationByObsession,
            _ => Self::NotFound,
        }
    }

    /// The canonical path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home | Self::NotFound => "/",
            Self::Nexcrow => "/case-studies/nexus-nexcrow",
            Self::CreationByObsession => "/case-studies/creation-by-obsession",
        }
    }

    /// Document title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "James Zetsu | Creative Developer",
            Self::Nexcrow => "Nexcrow by Nexus | Case Study",
            Self::CreationByObsession => "Creation by Obsession | Case Study",
            Self::NotFound => "Page not found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/index.html"), Route::Home);
        assert_eq!(Route::parse("/case-studies/nexus-nexcrow/"), Route::Nexcrow);
        assert_eq!(
            Route::parse("/case-studies/creation-by-obsession"),
            Route::CreationByObsession
        );
        assert_eq!(Route::parse("/blog"), Route::NotFound);
    }

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::parse(route.path()), route);
        }
    }

    #[test]
    fn published_links_are_routable() {
        for link in folio_core::catalog::PROJECTS.iter().filter_map(|p| p.link()) {
            assert_ne!(Route::parse(link), Route::NotFound, "{link}");
        }
    }
}
