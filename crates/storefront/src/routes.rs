//! Views and the guard that decides which one is shown.
//!
//! # Route Structure
//!
//! ```text
//! /          - Redirects by session state
//! /login     - Login form (public only)
//! /signup    - Signup form (public only)
//! /products  - Catalog (signed in)
//! /cart      - Cart and checkout (signed in)
//! ```

use std::fmt;

use serde::Serialize;

use crate::models::SessionState;

/// A navigable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Root,
    Login,
    Signup,
    Products,
    Cart,
}

impl Route {
    /// Path segment for the route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Products => "/products",
            Self::Cart => "/cart",
        }
    }

    /// Route for `path`, or `None` for an unknown path.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Root),
            "/login" => Some(Self::Login),
            "/signup" => Some(Self::Signup),
            "/products" => Some(Self::Products),
            "/cart" => Some(Self::Cart),
            _ => None,
        }
    }

    /// Only reachable with a signed-in session.
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        matches!(self, Self::Products | Self::Cart)
    }

    /// Only reachable without a signed-in session.
    #[must_use]
    pub const fn public_only(self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of guarding a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Resolution {
    /// Show the requested route.
    Render(Route),
    /// Navigate to another route instead.
    Redirect(Route),
}

impl Resolution {
    /// The route that ends up on screen.
    #[must_use]
    pub const fn route(self) -> Route {
        match self {
            Self::Render(r) | Self::Redirect(r) => r,
        }
    }
}

/// Decide what to show when `requested` is navigated to.
#[must_use]
pub const fn resolve(requested: Route, session: &SessionState) -> Resolution {
    let authenticated = session.is_authenticated();
    match requested {
        Route::Root if authenticated => Resolution::Redirect(Route::Products),
        Route::Root => Resolution::Redirect(Route::Login),
        r if r.public_only() && authenticated => Resolution::Redirect(Route::Products),
        r if r.requires_auth() && !authenticated => Resolution::Redirect(Route::Login),
        r => Resolution::Render(r),
    }
}
