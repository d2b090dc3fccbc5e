//! Route table
//!
//! Static path → view mapping. Unknown paths redirect to `/404`.

/// Views the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Guest,
    Staff,
    Meal,
    Home,
    NotFound,
}

/// One entry of the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

pub const NOT_FOUND_PATH: &str = "/404";

const ROUTES: &[RouteRecord] = &[
    RouteRecord {
        path: "/login",
        name: "login",
        view: View::Login,
    },
    RouteRecord {
        path: "/guest",
        name: "guest",
        view: View::Guest,
    },
    RouteRecord {
        path: "/staff",
        name: "staff",
        view: View::Staff,
    },
    RouteRecord {
        path: "/meal",
        name: "meal",
        view: View::Meal,
    },
    RouteRecord {
        path: "/",
        name: "home",
        view: View::Home,
    },
    RouteRecord {
        path: NOT_FOUND_PATH,
        name: "404",
        view: View::NotFound,
    },
];

/// Result of resolving a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub route: RouteRecord,
    /// Original path when the catch-all redirect kicked in
    pub redirected_from: Option<String>,
}

impl Resolved {
    pub fn view(&self) -> View {
        self.route.view
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Router {
    routes: &'static [RouteRecord],
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self { routes: ROUTES }
    }

    pub fn routes(&self) -> &'static [RouteRecord] {
        self.routes
    }

    /// Look a route up by name
    pub fn by_name(&self, name: &str) -> Option<&'static RouteRecord> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Resolve a location (query and fragment ignored)
    pub fn resolve(&self, location: &str) -> Resolved {
        let path = normalize(location);
        if let Some(route) = self.routes.iter().find(|r| r.path == path) {
            return Resolved {
                route: *route,
                redirected_from: None,
            };
        }

        tracing::debug!(path, "No route matched, redirecting to {}", NOT_FOUND_PATH);
        let not_found = self
            .routes
            .iter()
            .find(|r| r.path == NOT_FOUND_PATH)
            .copied()
            .unwrap_or(RouteRecord {
                path: NOT_FOUND_PATH,
                name: "404",
                view: View::NotFound,
            });
        Resolved {
            route: not_found,
            redirected_from: Some(path.to_string()),
        }
    }
}

/// Strip query, fragment and a trailing slash; empty becomes `/`
fn normalize(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
