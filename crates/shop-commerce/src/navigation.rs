//! Screen routes and the stack navigator.

use crate::catalog::Product;
use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Storefront screens, each with its own typed parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Route {
    /// Launch screen, shown once at start.
    Splash,
    /// Product listing.
    Home,
    /// Detail view for one product.
    Details { product: Product },
    /// Cart review.
    Cart,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Splash => "splash",
            Route::Home => "home",
            Route::Details { .. } => "details",
            Route::Cart => "cart",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Route::Splash => "Splash",
            Route::Home => "Home",
            Route::Details { .. } => "Details",
            Route::Cart => "Cart",
        }
    }
}

/// Stack navigator. Starts on the splash screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    /// Create a navigator showing the splash screen.
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Splash],
        }
    }

    /// Screen currently on top of the stack.
    pub fn current(&self) -> &Route {
        // The stack is never empty: `back` refuses to pop the last route.
        &self.stack[self.stack.len() - 1]
    }

    /// Number of routes on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether the splash screen is still showing.
    pub fn is_splash(&self) -> bool {
        matches!(self.current(), Route::Splash)
    }

    /// Replace the splash screen with the home screen.
    pub fn finish_splash(&mut self) -> Result<&Route, CommerceError> {
        if !self.is_splash() {
            return Err(CommerceError::InvalidNavigation {
                from: self.current().as_str().to_string(),
                to: Route::Home.as_str().to_string(),
            });
        }

        self.stack.clear();
        self.stack.push(Route::Home);
        Ok(self.current())
    }

    /// Push a screen.
    pub fn navigate(&mut self, route: Route) -> Result<&Route, CommerceError> {
        if self.is_splash() || route == Route::Splash {
            return Err(CommerceError::InvalidNavigation {
                from: self.current().as_str().to_string(),
                to: route.as_str().to_string(),
            });
        }

        self.stack.push(route);
        Ok(self.current())
    }

    /// Pop the current screen and return to the previous one.
    pub fn back(&mut self) -> Result<&Route, CommerceError> {
        if self.stack.len() <= 1 {
            return Err(CommerceError::EmptyHistory);
        }

        self.stack.pop();
        Ok(self.current())
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
