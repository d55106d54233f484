//! Route table and navigation links.
//!
//! The table is an immutable value built once and handed to `AppState::new`;
//! there is no global registry.  Resolution never fails: anything the table
//! does not declare resolves to [`Page::NotFound`].

use crate::error::{Result, SiteError};

/// Every page the site can mount into the content slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Skills,
    Projects,
    NotFound,
}

impl Page {
    /// Human readable title, used for `document.title`.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Skills => "Skills",
            Page::Projects => "Projects",
            Page::NotFound => "Page Not Found",
        }
    }

    /// Stable identifier written to `data-page` / `data-testid`.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Skills => "skills",
            Page::Projects => "projects",
            Page::NotFound => "not-found",
        }
    }
}

/// A single `(path, page)` association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    page: Page,
}

impl Route {
    pub fn new(path: impl Into<String>, page: Page) -> Self {
        Self {
            path: path.into(),
            page,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn page(&self) -> Page {
        self.page
    }
}

/// One entry of the navigation list: where it goes and what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    path: String,
    label: String,
}

impl NavLink {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Outcome of resolving a requested path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Canonical path: the declared route's path when matched, otherwise the
    /// normalised request.
    pub path: String,
    pub page: Page,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
    index: Option<usize>,
}

impl RouteTable {
    /// Build a table, normalising each path.  Rejects empty tables, paths
    /// without a leading slash and duplicates (case-insensitive).
    pub fn new(routes: Vec<Route>) -> Result<Self> {
        if routes.is_empty() {
            return Err(SiteError::EmptyRouteTable);
        }

        let mut normalised: Vec<Route> = Vec::with_capacity(routes.len());
        for route in routes {
            if !route.path.starts_with('/') {
                return Err(SiteError::InvalidPath { path: route.path });
            }
            let path = normalize_path(&route.path);
            if normalised
                .iter()
                .any(|existing| existing.path.eq_ignore_ascii_case(&path))
            {
                return Err(SiteError::DuplicateRoute { path });
            }
            normalised.push(Route::new(path, route.page));
        }

        let index = normalised.iter().position(|r| r.path == "/");
        Ok(Self {
            routes: normalised,
            index,
        })
    }

    /// The site's fixed table: `/`, `/about`, `/skills`, `/projects`.
    pub fn site() -> Result<Self> {
        Self::new(vec![
            Route::new("/", Page::Home),
            Route::new("/about", Page::About),
            Route::new("/skills", Page::Skills),
            Route::new("/projects", Page::Projects),
        ])
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The index route (`/`), if declared.
    pub fn index(&self) -> Option<&Route> {
        self.index.map(|i| &self.routes[i])
    }

    pub fn resolve(&self, path: &str) -> Resolved {
        let wanted = normalize_path(path);
        match self
            .routes
            .iter()
            .find(|r| r.path.eq_ignore_ascii_case(&wanted))
        {
            Some(route) => Resolved {
                path: route.path.clone(),
                page: route.page,
            },
            None => Resolved {
                path: wanted,
                page: Page::NotFound,
            },
        }
    }

    pub fn recognizes(&self, path: &str) -> bool {
        self.resolve(path).page != Page::NotFound
    }

    /// Every link must point at a declared route.
    pub fn check_links(&self, links: &[NavLink]) -> Result<()> {
        match links.iter().find(|link| !self.recognizes(link.path())) {
            Some(link) => Err(SiteError::UnroutedLink {
                path: link.path().to_string(),
                label: link.label().to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// The navigation list in display order.
pub fn site_links() -> Vec<NavLink> {
    vec![
        NavLink::new("/", "Home"),
        NavLink::new("/about", "About"),
        NavLink::new("/skills", "Skills"),
        NavLink::new("/projects", "Projects"),
    ]
}

/// Drop query and fragment, force a leading slash and strip trailing
/// slashes (the root stays `/`).  Case is preserved; matching ignores it.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(|c: char| c == '?' || c == '#').unwrap_or(path.len());
    let path = path[..end].trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table() -> RouteTable {
        RouteTable::site().unwrap()
    }

    #[test]
    fn declared_paths_map_one_to_one() {
        let table = table();
        let cases = [
            ("/", Page::Home),
            ("/about", Page::About),
            ("/skills", Page::Skills),
            ("/projects", Page::Projects),
        ];
        for (path, page) in cases {
            let resolved = table.resolve(path);
            assert_eq!(resolved.page, page, "path {}", path);
            assert_eq!(resolved.path, path);
        }
        assert_eq!(table.routes().len(), 4);
    }

    #[test]
    fn index_is_home() {
        let table = table();
        let index = table.index().unwrap();
        assert_eq!(index.path(), "/");
        assert_eq!(index.page(), Page::Home);
    }

    #[test]
    fn unknown_path_resolves_to_not_found() {
        let resolved = table().resolve("/contact");
        assert_eq!(resolved.page, Page::NotFound);
        assert_eq!(resolved.path, "/contact");
    }

    #[test]
    fn normalisation_matches_loosely() {
        let table = table();
        assert_eq!(table.resolve("/About/").page, Page::About);
        assert_eq!(table.resolve("/About/").path, "/about");
        assert_eq!(table.resolve("/skills?tab=1").page, Page::Skills);
        assert_eq!(table.resolve("/projects#top").page, Page::Projects);
        assert_eq!(table.resolve("").page, Page::Home);
        assert_eq!(table.resolve("about").page, Page::About);
        assert_eq!(table.resolve("//").path, "/");
    }

    #[test]
    fn normalize_path_edge_cases() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("?q=1"), "/");
        assert_eq!(normalize_path("/Contact/"), "/Contact");
        assert_eq!(normalize_path("/a/b/"), "/a/b");
    }

    #[test]
    fn construction_rejects_bad_tables() {
        assert_eq!(RouteTable::new(vec![]), Err(SiteError::EmptyRouteTable));

        assert_eq!(
            RouteTable::new(vec![Route::new("about", Page::About)]),
            Err(SiteError::InvalidPath {
                path: "about".to_string()
            })
        );

        assert_eq!(
            RouteTable::new(vec![
                Route::new("/about", Page::About),
                Route::new("/About/", Page::Skills),
            ]),
            Err(SiteError::DuplicateRoute {
                path: "/About".to_string()
            })
        );
    }

    #[test]
    fn table_without_root_has_no_index() {
        let table = RouteTable::new(vec![Route::new("/about", Page::About)]).unwrap();
        assert!(table.index().is_none());
        assert_eq!(table.resolve("/").page, Page::NotFound);
    }

    #[test]
    fn site_links_are_fully_routed() {
        let links = site_links();
        let labels: Vec<&str> = links.iter().map(|l| l.label()).collect();
        assert_eq!(labels, ["Home", "About", "Skills", "Projects"]);
        assert_eq!(links[0].path(), "/");
        assert!(table().check_links(&links).is_ok());

        // 1:1 correspondence between links and routes
        let table = table();
        for (link, route) in links.iter().zip(table.routes()) {
            assert_eq!(link.path(), route.path());
        }
    }

    #[test]
    fn unrouted_link_is_reported() {
        let mut links = site_links();
        links.push(NavLink::new("/contact", "Contact"));
        assert_eq!(
            table().check_links(&links),
            Err(SiteError::UnroutedLink {
                path: "/contact".to_string(),
                label: "Contact".to_string()
            })
        );
    }

    proptest! {
        #[test]
        fn resolution_is_total_and_canonical(path in "[/a-zA-Z0-9?#._-]{0,24}") {
            let table = table();
            let first = table.resolve(&path);
            // Resolving the canonical path again is a fixed point
            let second = table.resolve(&first.path);
            prop_assert_eq!(&first, &second);
            prop_assert!(first.path.starts_with('/'));
        }

        #[test]
        fn unknown_segments_never_match(segment in "[a-z]{1,12}") {
            prop_assume!(!["about", "skills", "projects"].contains(&segment.as_str()));
            let resolved = table().resolve(&format!("/{}", segment));
            prop_assert_eq!(resolved.page, Page::NotFound);
        }
    }
}
