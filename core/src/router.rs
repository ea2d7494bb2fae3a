//! `Router` - owns a route tree, registers chains and evaluates token paths.

use crate::path_matcher::{attribute, match_path};
use crate::{
    DescribeRoute, MatchTrace, MatchedRoute, Navigator, Route, RouteAction, RouteBuilder, RouteId,
    RouteTree, RouterError, RoutingKind,
};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Path-component router.
///
/// A router owns one [`RouteTree`] and an alias table. Routers are plain
/// values: create one at startup and pass it to whoever needs it. Separate
/// routers share nothing.
///
/// # Lifecycle
///
/// 1. Build chains with [`route`](Self::route) / [`RouteBuilder`] (or
///    [`new_child`](Self::new_child)). New chains are detached.
/// 2. [`register`](Self::register) any link of a chain to attach its head to
///    the root.
/// 3. [`evaluate`](Self::evaluate) token sequences. Evaluation only reads the
///    tree, so repeated calls with the same tokens behave identically.
///
/// # Example
///
/// ```
/// use pathway::{Router, RoutingKind};
///
/// let mut router: Router<&'static str> = Router::new();
/// router.route("walmart.com", RoutingKind::Other).register();
///
/// assert!(router.evaluate(&["walmart.com"]));
/// assert!(!router.evaluate(&["target.com"]));
/// ```
pub struct Router<O> {
    tree: RouteTree<O>,
    translations: HashMap<String, String>,
}

impl<O> Default for Router<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Router<O> {
    /// Create a router with an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: RouteTree::new(),
            translations: HashMap::new(),
        }
    }

    /// The underlying tree.
    #[must_use]
    pub fn tree(&self) -> &RouteTree<O> {
        &self.tree
    }

    pub(crate) fn tree_mut(&mut self) -> &mut RouteTree<O> {
        &mut self.tree
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Building routes
    // ═══════════════════════════════════════════════════════════════════════════

    /// Start a new detached chain with a named head.
    pub fn route(&mut self, name: impl Into<String>, kind: RoutingKind) -> RouteBuilder<'_, O> {
        let id = self
            .tree
            .insert(None, Route::new(Some(name.into()), kind, None, None));
        RouteBuilder::new(self, id)
    }

    /// Start a detached variable with no parent.
    ///
    /// Such a chain has no addressable head, so registering it is a no-op.
    pub fn variable(&mut self) -> RouteBuilder<'_, O> {
        let id = self
            .tree
            .insert(None, Route::new(None, RoutingKind::Variable, None, None));
        RouteBuilder::new(self, id)
    }

    /// Continue building from an existing route.
    ///
    /// # Errors
    ///
    /// - [`RouterError::UnknownRoute`] if `id` is not in this router's tree
    /// - [`RouterError::RootParent`] if `id` is the root; top-level routes
    ///   come from [`register`](Self::register)
    pub fn extend(&mut self, id: RouteId) -> Result<RouteBuilder<'_, O>, RouterError> {
        if !self.tree.contains(id) {
            return Err(RouterError::UnknownRoute { id });
        }
        if id == self.tree.root() {
            return Err(RouterError::RootParent);
        }
        Ok(RouteBuilder::new(self, id))
    }

    /// Create a route under `parent` (or detached when `parent` is `None`).
    ///
    /// # Errors
    ///
    /// - [`RouterError::UnnamedRoute`] if `name` is `None` and `kind` is not
    ///   [`RoutingKind::Variable`]
    /// - [`RouterError::UnknownRoute`] if `parent` is not in this router's tree
    /// - [`RouterError::RootParent`] if `parent` is the root
    pub fn new_child(
        &mut self,
        parent: Option<RouteId>,
        name: Option<String>,
        kind: RoutingKind,
        action: Option<RouteAction<O>>,
    ) -> Result<RouteId, RouterError> {
        self.tree.add(parent, name, kind, action)
    }

    /// Attach an example locator to `id`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::UnknownRoute`] if `id` is not in this router's tree.
    pub fn set_example(
        &mut self,
        id: RouteId,
        example: impl Into<String>,
    ) -> Result<(), RouterError> {
        self.tree.set_example(id, example)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Registration
    // ═══════════════════════════════════════════════════════════════════════════

    /// Register the chain `id` belongs to.
    ///
    /// Walks up to the chain head and appends it to the root's children,
    /// marking every route on the walk as registered. Returns `false` (and
    /// changes nothing) when the head is unnamed or `id` is unknown.
    ///
    /// Registration does not deduplicate: registering a chain whose head is
    /// already attached appends a second reference to the same head. Matching
    /// is unaffected because the first reference is always found first.
    pub fn register(&mut self, id: RouteId) -> bool {
        let chain = self.tree.ancestor_chain(id);
        let Some(&head) = chain.last() else {
            debug!(route = %id, "register: route does not belong to this router");
            return false;
        };
        if head == self.tree.root() {
            debug!("register: the root cannot be registered");
            return false;
        }
        if self.tree.get(head).and_then(|route| route.name()).is_none() {
            debug!(route = %id, head = %head, "register: skipping chain with unnamed head");
            return false;
        }

        for &link in &chain {
            if let Some(route) = self.tree.get_mut(link) {
                route.registered = true;
            }
        }
        if self.tree.attach_to_root(head).is_err() {
            return false;
        }

        debug!(
            route = %id,
            head = %head,
            name = self.tree.get(head).and_then(|r| r.name()),
            depth = chain.len(),
            "registered route"
        );
        true
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Queries (one level under the root)
    // ═══════════════════════════════════════════════════════════════════════════

    /// Registered top-level routes, in registration order.
    #[must_use]
    pub fn routes(&self) -> &[RouteId] {
        self.tree.children(self.tree.root())
    }

    /// Registered top-level routes named `name`.
    #[must_use]
    pub fn routes_by_name(&self, name: &str) -> Vec<RouteId> {
        self.tree.children_by_name(self.tree.root(), name)
    }

    /// Registered top-level routes of the given kind.
    #[must_use]
    pub fn routes_by_kind(&self, kind: RoutingKind) -> Vec<RouteId> {
        self.tree.children_by_kind(self.tree.root(), kind)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Alias table
    // ═══════════════════════════════════════════════════════════════════════════

    /// Map the token `from` to `to` before matching.
    ///
    /// Every token of an evaluated path is rewritten, including tokens that
    /// end up captured by a variable: with `"wm" -> "walmart.com"`, the path
    /// `["item", "wm"]` hands `"walmart.com"` to the variable.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::TranslationConflict`] if `from` is already
    /// mapped. The existing mapping is kept.
    pub fn translate(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<(), RouterError> {
        let from = from.into();
        let to = to.into();
        if let Some(existing) = self.translations.get(&from) {
            return Err(RouterError::TranslationConflict {
                from,
                existing: existing.clone(),
                attempted: to,
            });
        }
        debug!(from = %from, to = %to, "added translation");
        self.translations.insert(from, to);
        Ok(())
    }

    /// The token `from` is rewritten to, if any.
    #[must_use]
    pub fn translation(&self, from: &str) -> Option<&str> {
        self.translations.get(from).map(String::as_str)
    }

    /// Rewrite each token through the alias table (single hop).
    #[must_use]
    pub fn translated<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|token| {
                let token = token.as_ref();
                self.translation(token).unwrap_or(token).to_owned()
            })
            .collect()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Matching
    // ═══════════════════════════════════════════════════════════════════════════

    /// Walk `tokens` as given (no translation) and return the matched routes.
    ///
    /// May be a prefix of the tokens; see [`match_path`](crate::match_path).
    #[must_use]
    pub fn match_path<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<RouteId> {
        match_path(&self.tree, tokens)
    }

    /// Routes for a full match of the translated `tokens`, empty otherwise.
    #[must_use]
    pub fn routes_for_components<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<RouteId> {
        self.resolve(tokens)
            .map(|matched| matched.into_iter().map(|m| m.id).collect())
            .unwrap_or_default()
    }

    /// Resolve the translated `tokens` without running any action.
    ///
    /// Returns `None` unless every token was consumed (an empty token list
    /// never resolves).
    #[must_use]
    pub fn resolve<S: AsRef<str>>(&self, tokens: &[S]) -> Option<Vec<MatchedRoute>> {
        let tokens = self.translated(tokens);
        let routes = match_path(&self.tree, &tokens);
        if tokens.is_empty() || routes.len() != tokens.len() {
            debug!(
                tokens = tokens.len(),
                matched = routes.len(),
                "no route for path"
            );
            return None;
        }
        Some(attribute(&self.tree, &routes, &tokens))
    }

    /// Walk the translated `tokens`, recording every decision.
    #[must_use]
    pub fn match_with_trace<S: AsRef<str>>(&self, tokens: &[S]) -> MatchTrace {
        MatchTrace::record(&self.tree, &self.translated(tokens))
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Evaluation
    // ═══════════════════════════════════════════════════════════════════════════

    /// Evaluate `tokens`, running every matched route's action.
    ///
    /// Returns `true` if the whole path matched. Actions run root to leaf;
    /// their outputs are discarded. Nothing runs on a partial match.
    pub fn evaluate<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        self.dispatch(tokens, |_, _| {})
    }

    /// Like [`evaluate`](Self::evaluate), handing every action output to
    /// `navigator` together with its route's kind.
    pub fn evaluate_with<S, N>(&self, tokens: &[S], navigator: &mut N) -> bool
    where
        S: AsRef<str>,
        N: Navigator<O> + ?Sized,
    {
        self.dispatch(tokens, |kind, output| navigator.navigate(kind, output))
    }

    /// Evaluate a sequence of route descriptors by their names.
    pub fn evaluate_descriptors<D: DescribeRoute>(&self, descriptors: &[D]) -> bool {
        let tokens: Vec<String> = descriptors.iter().map(|d| d.descriptor().name).collect();
        self.evaluate(&tokens)
    }

    /// Run every registered top-level [`RoutingKind::Static`] route and hand
    /// the outputs to [`Navigator::set_tabs`].
    ///
    /// Routes without an action or without output are skipped; if none
    /// produced output the navigator is left untouched. Returns the number of
    /// tabs handed over.
    pub fn update_navigator<N: Navigator<O> + ?Sized>(&self, navigator: &mut N) -> usize {
        let tabs: Vec<O> = self
            .routes_by_kind(RoutingKind::Static)
            .into_iter()
            .filter_map(|id| self.tree.get(id))
            .filter_map(|route| route.execute(None))
            .collect();

        let count = tabs.len();
        if count > 0 {
            navigator.set_tabs(tabs);
        }
        debug!(tabs = count, "updated navigator");
        count
    }

    fn dispatch<S, F>(&self, tokens: &[S], mut on_output: F) -> bool
    where
        S: AsRef<str>,
        F: FnMut(RoutingKind, O),
    {
        let Some(matched) = self.resolve(tokens) else {
            return false;
        };

        for step in &matched {
            let output = self
                .tree
                .get(step.id)
                .and_then(|route| route.execute(step.variable.as_deref()));
            if let Some(output) = output {
                on_output(step.kind, output);
            }
        }

        debug!(routes = matched.len(), "evaluated path");
        true
    }
}

impl<O> fmt::Debug for Router<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("tree", &self.tree)
            .field("translations", &self.translations.len())
            .finish()
    }
}
