//! `Navigator` - the presentation layer's side of the hand-off.
//!
//! The router knows nothing about tabs, stacks or modals. It runs a route's
//! action and passes the output, tagged with the route's [`RoutingKind`], to
//! whatever implements this trait.

use crate::RoutingKind;

/// Consumes action outputs produced while evaluating routes.
///
/// # Example
///
/// ```
/// use pathway::{Navigator, RoutingKind};
///
/// #[derive(Default)]
/// struct Stack {
///     screens: Vec<String>,
/// }
///
/// impl Navigator<String> for Stack {
///     fn navigate(&mut self, kind: RoutingKind, output: String) {
///         if kind == RoutingKind::Push {
///             self.screens.push(output);
///         }
///     }
/// }
/// ```
pub trait Navigator<O> {
    /// Handle the output of one matched route's action.
    ///
    /// Called in match order (root to leaf), only for actions that produced
    /// an output.
    fn navigate(&mut self, kind: RoutingKind, output: O);

    /// Replace the set of top-level destinations (e.g. tabs).
    ///
    /// Called by [`Router::update_navigator`](crate::Router::update_navigator)
    /// with the outputs of the registered [`RoutingKind::Static`] routes.
    /// Ignored by default.
    fn set_tabs(&mut self, tabs: Vec<O>) {
        let _ = tabs;
    }
}

impl<O, N: Navigator<O> + ?Sized> Navigator<O> for &mut N {
    fn navigate(&mut self, kind: RoutingKind, output: O) {
        (**self).navigate(kind, output);
    }

    fn set_tabs(&mut self, tabs: Vec<O>) {
        (**self).set_tabs(tabs);
    }
}
