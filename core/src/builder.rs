//! `RouteBuilder` - chaining construction of route chains.

use crate::{Route, RouteAction, RouteDescriptor, RouteId, Router, RoutingKind};
use std::sync::Arc;

/// Grows a chain of routes inside a [`Router`]'s tree.
///
/// Every call that creates a route returns a builder positioned on the new
/// route, so a whole chain reads left to right. Finish with [`id`](Self::id)
/// and hand the leaf (or any link) to [`Router::register`].
///
/// # Example
///
/// ```
/// use pathway::{Router, RoutingKind};
///
/// let mut router: Router<String> = Router::new();
/// let leaf = router
///     .route("walmart.com", RoutingKind::Other)
///     .route("item", RoutingKind::Other)
///     .variable()
///     .route("something", RoutingKind::Push)
///     .action(|variable| variable.map(|v| format!("item {v}")))
///     .id();
/// router.register(leaf);
///
/// assert!(router.evaluate(&["walmart.com", "item", "12345", "something"]));
/// ```
pub struct RouteBuilder<'r, O> {
    router: &'r mut Router<O>,
    id: RouteId,
}

impl<'r, O> RouteBuilder<'r, O> {
    pub(crate) fn new(router: &'r mut Router<O>, id: RouteId) -> Self {
        Self { router, id }
    }

    /// Add a named child and move to it.
    #[must_use]
    pub fn route(self, name: impl Into<String>, kind: RoutingKind) -> Self {
        self.push(Some(name.into()), kind)
    }

    /// Add a variable child and move to it.
    #[must_use]
    pub fn variable(self) -> Self {
        self.push(None, RoutingKind::Variable)
    }

    /// Add a child described by `descriptor` and move to it.
    ///
    /// A descriptor of kind [`RoutingKind::Variable`] creates an unnamed
    /// variable; anything else creates a named route. The descriptor's
    /// example is kept on the new route.
    #[must_use]
    pub fn describe(self, descriptor: &RouteDescriptor) -> Self {
        let next = if descriptor.kind.is_variable() {
            self.variable()
        } else {
            self.route(descriptor.name.clone(), descriptor.kind)
        };
        match &descriptor.example {
            Some(example) => next.example(example.clone()),
            None => next,
        }
    }

    /// Bind `action` to the current route, replacing any previous action.
    #[must_use]
    pub fn action<F>(self, action: F) -> Self
    where
        F: Fn(Option<&str>) -> Option<O> + Send + Sync + 'static,
    {
        let action: RouteAction<O> = Arc::new(action);
        if let Some(route) = self.router.tree_mut().get_mut(self.id) {
            route.action = Some(action);
        }
        self
    }

    /// Attach an example locator to the current route.
    #[must_use]
    pub fn example(self, example: impl Into<String>) -> Self {
        if let Some(route) = self.router.tree_mut().get_mut(self.id) {
            route.example = Some(example.into());
        }
        self
    }

    /// The current route.
    #[must_use]
    pub fn id(&self) -> RouteId {
        self.id
    }

    /// Register the chain the current route belongs to and return the
    /// current route.
    pub fn register(self) -> RouteId {
        self.router.register(self.id);
        self.id
    }

    fn push(self, name: Option<String>, kind: RoutingKind) -> Self {
        let id = self
            .router
            .tree_mut()
            .insert(Some(self.id), Route::new(name, kind, None, Some(self.id)));
        Self {
            router: self.router,
            id,
        }
    }
}
