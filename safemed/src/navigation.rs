//! Navigation model: the application routes and the bottom-bar topology.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Login,
    Register,
    Home,
    Map,
    Scan,
    Chat,
    Profile,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Login,
        Route::Register,
        Route::Home,
        Route::Map,
        Route::Scan,
        Route::Chat,
        Route::Profile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Home => "home",
            Self::Map => "map",
            Self::Scan => "scan",
            Self::Chat => "chat",
            Self::Profile => "profile",
        }
    }

    /// Label shown on the bottom-bar item for this route.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Home => "Home",
            Self::Map => "Map",
            Self::Scan => "Scan",
            Self::Chat => "Chat",
            Self::Profile => "Profile",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route '{0}'")]
pub struct UnknownRouteError(pub String);

impl FromStr for Route {
    type Err = UnknownRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.as_str() == s)
            .ok_or_else(|| UnknownRouteError(s.to_string()))
    }
}

/// The bottom navigation bar topology: an ordered allow-set of routes.
///
/// The bar is shown on exactly these routes and nowhere else. Two
/// topologies were shipped at different times (a Chat tab or a Map tab);
/// which one is active is a configuration choice, so the set is data
/// rather than logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavTabs(Vec<Route>);

impl NavTabs {
    pub fn new(tabs: Vec<Route>) -> Self {
        Self(tabs)
    }

    /// Home, Scan, Chat, Profile.
    pub fn with_chat() -> Self {
        Self(vec![Route::Home, Route::Scan, Route::Chat, Route::Profile])
    }

    /// Home, Map, Scan, Profile.
    pub fn with_map() -> Self {
        Self(vec![Route::Home, Route::Map, Route::Scan, Route::Profile])
    }

    pub fn tabs(&self) -> &[Route] {
        &self.0
    }

    /// Whether the bottom bar is shown on `route`. Pure and total.
    pub fn contains(&self, route: Route) -> bool {
        self.0.contains(&route)
    }
}

impl Default for NavTabs {
    fn default() -> Self {
        Self::with_chat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_round_trips_through_its_identifier() {
        for route in Route::ALL {
            assert_eq!(Route::from_str(route.as_str()), Ok(route));
        }
        assert!(Route::from_str("settings").is_err());
    }

    #[test]
    fn bar_is_hidden_on_auth_and_standalone_routes() {
        for tabs in [NavTabs::with_chat(), NavTabs::with_map()] {
            assert!(!tabs.contains(Route::Login));
            assert!(!tabs.contains(Route::Register));
            assert!(tabs.contains(Route::Home));
            assert!(tabs.contains(Route::Profile));
        }
        assert!(NavTabs::with_chat().contains(Route::Chat));
        assert!(!NavTabs::with_chat().contains(Route::Map));
        assert!(NavTabs::with_map().contains(Route::Map));
        assert!(!NavTabs::with_map().contains(Route::Chat));
    }

    #[test]
    fn contains_is_pure() {
        let tabs = NavTabs::with_chat();
        assert_eq!(tabs.contains(Route::Home), tabs.contains(Route::Home));
        assert_eq!(tabs.contains(Route::Login), tabs.contains(Route::Login));
    }

    #[test]
    fn custom_topology_is_expressible() {
        let tabs = NavTabs::new(vec![Route::Home, Route::Scan]);
        assert!(tabs.contains(Route::Scan));
        assert!(!tabs.contains(Route::Chat));
        assert_eq!(tabs.tabs(), &[Route::Home, Route::Scan]);
    }
}
