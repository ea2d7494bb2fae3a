//! `RouteTree` - index-based arena of route nodes.
//!
//! Every node lives in a single `Vec` owned by the tree. Parent and child
//! links are [`RouteId`] indices, so walking upward during registration needs
//! no back-pointers and nothing can form an ownership cycle. The tree is
//! append-only: nodes are never removed or re-parented.

use crate::{Route, RouteAction, RouteId, RouterError, RoutingKind, ROOT_ROUTE_NAME};
use std::fmt;

/// Arena of [`Route`] nodes rooted at a `MASTER` sentinel.
///
/// Nodes created with no parent are *detached*: they exist in the arena but
/// are not reachable from the root until [`attach_to_root`](Self::attach_to_root)
/// is called for them (normally through [`Router::register`](crate::Router::register)).
///
/// # Example
///
/// ```
/// use pathway::{RouteTree, RoutingKind};
///
/// let mut tree: RouteTree<()> = RouteTree::new();
/// let host = tree.add(None, Some("walmart.com".into()), RoutingKind::Other, None).unwrap();
/// let item = tree.add(Some(host), Some("item".into()), RoutingKind::Other, None).unwrap();
///
/// assert_eq!(tree.child_by_name(host, "item"), Some(item));
/// assert_eq!(tree.top_ancestor(item), Some(host));
/// ```
pub struct RouteTree<O> {
    nodes: Vec<Route<O>>,
}

impl<O> Default for RouteTree<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> RouteTree<O> {
    /// Create a tree holding only the root sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Route::new(
                Some(ROOT_ROUTE_NAME.to_string()),
                RoutingKind::Other,
                None,
                None,
            )],
        }
    }

    /// The root sentinel.
    #[must_use]
    pub fn root(&self) -> RouteId {
        RouteId(0)
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if only the root exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Look up a node.
    #[must_use]
    pub fn get(&self, id: RouteId) -> Option<&Route<O>> {
        self.nodes.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: RouteId) -> Option<&mut Route<O>> {
        self.nodes.get_mut(id.0)
    }

    /// Returns `true` if `id` was issued by this tree.
    #[must_use]
    pub fn contains(&self, id: RouteId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Create a node and append it to `parent`'s children.
    ///
    /// With `parent == None` the node is created detached (a chain head).
    ///
    /// # Errors
    ///
    /// - [`RouterError::UnnamedRoute`] if `name` is `None` and `kind` is not
    ///   [`RoutingKind::Variable`]
    /// - [`RouterError::UnknownRoute`] if `parent` was not issued by this tree
    /// - [`RouterError::RootParent`] if `parent` is the root
    pub fn add(
        &mut self,
        parent: Option<RouteId>,
        name: Option<String>,
        kind: RoutingKind,
        action: Option<RouteAction<O>>,
    ) -> Result<RouteId, RouterError> {
        if name.is_none() && !kind.is_variable() {
            return Err(RouterError::UnnamedRoute { kind });
        }
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(RouterError::UnknownRoute { id: parent });
            }
            if parent == self.root() {
                return Err(RouterError::RootParent);
            }
        }

        Ok(self.insert(parent, Route::new(name, kind, action, parent)))
    }

    /// Push `route` into the arena and link it under `parent`.
    ///
    /// Callers guarantee the name/kind invariant and never pass the root; an
    /// unknown `parent` leaves the route detached. A child of a registered
    /// route is registered too.
    pub(crate) fn insert(&mut self, parent: Option<RouteId>, mut route: Route<O>) -> RouteId {
        let id = RouteId(self.nodes.len());
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(p.0)) {
            parent.children.push(id);
            route.registered = parent.registered;
        }
        self.nodes.push(route);
        id
    }

    /// Attach an example locator to `id`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::UnknownRoute`] if `id` was not issued by this tree.
    pub fn set_example(
        &mut self,
        id: RouteId,
        example: impl Into<String>,
    ) -> Result<(), RouterError> {
        let route = self.get_mut(id).ok_or(RouterError::UnknownRoute { id })?;
        route.example = Some(example.into());
        Ok(())
    }

    /// Direct children of `id`, empty for unknown ids.
    #[must_use]
    pub fn children(&self, id: RouteId) -> &[RouteId] {
        self.get(id).map(Route::children).unwrap_or_default()
    }

    /// The parent of `id`, `None` for the root, chain heads and unknown ids.
    #[must_use]
    pub fn parent(&self, id: RouteId) -> Option<RouteId> {
        self.get(id).and_then(Route::parent)
    }

    // ───────────────────────────────────────────────────────────────────────────
    // Child lookup (one level only)
    // ───────────────────────────────────────────────────────────────────────────

    /// First direct child of `id` named `name`.
    #[must_use]
    pub fn child_by_name(&self, id: RouteId, name: &str) -> Option<RouteId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.name_of(child) == Some(name))
    }

    /// All direct children of `id` named `name`, in insertion order.
    ///
    /// Sibling names are not required to be unique.
    #[must_use]
    pub fn children_by_name(&self, id: RouteId, name: &str) -> Vec<RouteId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|&child| self.name_of(child) == Some(name))
            .collect()
    }

    /// All direct children of `id` with the given kind, in insertion order.
    #[must_use]
    pub fn children_by_kind(&self, id: RouteId, kind: RoutingKind) -> Vec<RouteId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|&child| self.kind_of(child) == Some(kind))
            .collect()
    }

    /// First direct child of `id` with the given kind.
    #[must_use]
    pub fn child_by_kind(&self, id: RouteId, kind: RoutingKind) -> Option<RouteId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.kind_of(child) == Some(kind))
    }

    // ───────────────────────────────────────────────────────────────────────────
    // Registration support
    // ───────────────────────────────────────────────────────────────────────────

    /// Walk `parent` links up from `id` to the chain head.
    ///
    /// Returns `id` itself when it has no parent, `None` for unknown ids.
    #[must_use]
    pub fn top_ancestor(&self, id: RouteId) -> Option<RouteId> {
        let mut current = self.get(id).map(|_| id)?;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        Some(current)
    }

    /// Ids from `id` up to and including its chain head.
    pub(crate) fn ancestor_chain(&self, id: RouteId) -> Vec<RouteId> {
        let mut chain = Vec::new();
        let mut current = self.get(id).map(|_| id);
        while let Some(node) = current {
            chain.push(node);
            current = self.parent(node);
        }
        chain
    }

    /// Append `id` to the root's children.
    ///
    /// No identity check is made: attaching the same node twice leaves two
    /// references under the root.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::UnknownRoute`] if `id` was not issued by this tree.
    pub fn attach_to_root(&mut self, id: RouteId) -> Result<(), RouterError> {
        if !self.contains(id) || id == self.root() {
            return Err(RouterError::UnknownRoute { id });
        }
        self.nodes[0].children.push(id);
        Ok(())
    }

    fn name_of(&self, id: RouteId) -> Option<&str> {
        self.get(id).and_then(Route::name)
    }

    fn kind_of(&self, id: RouteId) -> Option<RoutingKind> {
        self.get(id).map(Route::kind)
    }
}

impl<O> fmt::Debug for RouteTree<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTree")
            .field("nodes", &self.nodes.len())
            .field("top_level", &self.children(self.root()).len())
            .finish()
    }
}
