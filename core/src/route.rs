//! `Route` - one node of the route tree.

use crate::RoutingKind;
use std::fmt;
use std::sync::Arc;

/// Action bound to a route.
///
/// Receives the captured variable (if any) and returns an optional output for
/// the presentation layer. Shared so a route can be cloned cheaply.
pub type RouteAction<O> = Arc<dyn Fn(Option<&str>) -> Option<O> + Send + Sync>;

/// Index of a [`Route`] inside the [`RouteTree`](crate::RouteTree) that issued it.
///
/// Ids are plain indices: they are `Copy`, never dangle, and are meaningless
/// for any other tree. Lookups with a foreign id return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub(crate) usize);

impl RouteId {
    /// Position of the node in its arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the route tree.
///
/// # INV: unnamed ⇒ variable
///
/// `name` is `None` only when `kind` is [`RoutingKind::Variable`]. The tree
/// refuses to create any other unnamed node.
pub struct Route<O> {
    pub(crate) name: Option<String>,
    pub(crate) kind: RoutingKind,
    pub(crate) action: Option<RouteAction<O>>,
    pub(crate) children: Vec<RouteId>,
    pub(crate) parent: Option<RouteId>,
    pub(crate) registered: bool,
    pub(crate) example: Option<String>,
}

impl<O> Route<O> {
    pub(crate) fn new(
        name: Option<String>,
        kind: RoutingKind,
        action: Option<RouteAction<O>>,
        parent: Option<RouteId>,
    ) -> Self {
        Self {
            name,
            kind,
            action,
            children: Vec::new(),
            parent,
            registered: false,
            example: None,
        }
    }

    /// The token this route matches, `None` for variables.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// How the route's output is meant to be consumed.
    #[must_use]
    pub fn kind(&self) -> RoutingKind {
        self.kind
    }

    /// Returns `true` for variable (wildcard) routes.
    #[must_use]
    pub fn is_variable(&self) -> bool {
        self.kind.is_variable()
    }

    /// Direct children, in insertion order.
    #[must_use]
    pub fn children(&self) -> &[RouteId] {
        &self.children
    }

    /// The owning route, `None` for top-level routes and the root.
    #[must_use]
    pub fn parent(&self) -> Option<RouteId> {
        self.parent
    }

    /// Whether a [`Router::register`](crate::Router::register) walk has passed
    /// through this route, or it was added under a registered route.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Example locator documenting the route, e.g. `scheme://item/<variable>`.
    #[must_use]
    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }

    /// Returns `true` if an action is bound.
    #[must_use]
    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Run the bound action with `variable`.
    ///
    /// Returns `None` when no action is bound or the action produced nothing.
    pub fn execute(&self, variable: Option<&str>) -> Option<O> {
        self.action.as_ref().and_then(|action| action(variable))
    }
}

impl<O> fmt::Debug for Route<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("has_action", &self.action.is_some())
            .field("children", &self.children)
            .field("parent", &self.parent)
            .field("registered", &self.registered)
            .finish()
    }
}
