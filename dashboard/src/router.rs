//! Dashboard route table
//!
//! Maps request paths to the three dashboard views. Path parameters are
//! captured as raw strings; turning them into IDs is left to the view.

use std::collections::HashMap;

/// A dashboard view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    DeviceDetails,
    Logs,
}

/// A named route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    pub pattern: &'static str,
    pub view: View,
}

impl Route {
    fn match_path(&self, path: &str) -> Option<HashMap<String, String>> {
        let pattern_segments = segments(self.pattern);
        let path_segments = segments(path);
        if pattern_segments.len() != path_segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (pattern, actual) in pattern_segments.iter().zip(path_segments.iter()) {
            match pattern.strip_prefix(':') {
                Some(param) => {
                    params.insert(param.to_string(), actual.to_string());
                }
                None if pattern == actual => {}
                None => return None,
            }
        }
        Some(params)
    }
}

/// A route matched against a path, with its captured parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: Route,
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

pub const HOME: Route = Route {
    name: "Home",
    pattern: "/",
    view: View::Home,
};

pub const DEVICE_DETAILS: Route = Route {
    name: "DeviceDetails",
    pattern: "/device/:id",
    view: View::DeviceDetails,
};

pub const LOGS: Route = Route {
    name: "Logs",
    pattern: "/logs",
    view: View::Logs,
};

/// All routes, in match order
pub fn routes() -> [Route; 3] {
    [HOME, DEVICE_DETAILS, LOGS]
}

/// Resolve a request path to a route. The query string, if any, is ignored.
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if !path.starts_with('/') {
        return None;
    }

    routes().into_iter().find_map(|route| {
        route
            .match_path(path)
            .map(|params| RouteMatch { route, params })
    })
}

// "/device/7/" and "/device/7" both give ["device", "7"]; "/" gives []
fn segments(path: &str) -> Vec<&str> {
    path.trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}
