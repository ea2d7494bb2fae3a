//! Path matching - walks token sequences against a [`RouteTree`].
//!
//! # Step rule
//!
//! At each token the walk looks at the current node's direct children:
//!
//! 1. A child *named* like the token wins (first in insertion order).
//! 2. Otherwise the variable children are candidates:
//!    - with a next token, the first variable that has a child named like the
//!      next token is taken (one-token lookahead);
//!    - on the last token, a lone variable child is taken;
//!    - anything else stops the walk.
//!
//! # INV: one route per consumed token
//!
//! Each step appends at most one route, so `result.len() <= tokens.len()` and
//! equality means every token was consumed.

use crate::{RouteId, RouteTree, RoutingKind, StepRule};
use tracing::trace;

/// One matched node with the value it receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute {
    /// The matched node.
    pub id: RouteId,
    /// The node's kind, passed through to the presentation layer.
    pub kind: RoutingKind,
    /// The captured variable handed to the node's action.
    pub variable: Option<String>,
}

/// Walk `tokens` from the root of `tree` and return the matched nodes.
///
/// The walk stops at the first token no child can consume; compare the
/// result's length with `tokens.len()` to tell a full match from a prefix.
///
/// # Example
///
/// ```
/// use pathway::{match_path, RouteTree, RoutingKind};
///
/// let mut tree: RouteTree<()> = RouteTree::new();
/// let item = tree.add(None, Some("item".into()), RoutingKind::Other, None).unwrap();
/// let var = tree.add(Some(item), None, RoutingKind::Variable, None).unwrap();
/// tree.attach_to_root(item).unwrap();
///
/// assert_eq!(match_path(&tree, &["item", "42"]), vec![item, var]);
/// assert!(match_path(&tree, &["nope", "42"]).is_empty());
/// ```
pub fn match_path<O, S: AsRef<str>>(tree: &RouteTree<O>, tokens: &[S]) -> Vec<RouteId> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut current = tree.root();

    for index in 0..tokens.len() {
        match select_step(tree, current, tokens, index) {
            (Some(next), rule) => {
                trace!(index, token = tokens[index].as_ref(), route = %next, ?rule, "step matched");
                result.push(next);
                current = next;
            }
            (None, rule) => {
                trace!(index, token = tokens[index].as_ref(), ?rule, "walk stopped");
                break;
            }
        }
    }

    result
}

/// Decide which child of `current` consumes `tokens[index]`.
///
/// Returns the chosen child (if any) together with the rule that decided.
pub(crate) fn select_step<O, S: AsRef<str>>(
    tree: &RouteTree<O>,
    current: RouteId,
    tokens: &[S],
    index: usize,
) -> (Option<RouteId>, StepRule) {
    let token = tokens[index].as_ref();

    if let Some(named) = tree.child_by_name(current, token) {
        return (Some(named), StepRule::Named);
    }

    let variables = tree.children_by_kind(current, RoutingKind::Variable);
    match tokens.get(index + 1).map(|next| next.as_ref()) {
        Some(next_token) => {
            let chosen = variables
                .iter()
                .copied()
                .find(|&variable| tree.child_by_name(variable, next_token).is_some());
            match chosen {
                Some(variable) => (Some(variable), StepRule::VariableLookahead),
                None => (
                    None,
                    StepRule::Unmatched {
                        variable_candidates: variables.len(),
                    },
                ),
            }
        }
        None if variables.len() == 1 => (Some(variables[0]), StepRule::TrailingVariable),
        None => (
            None,
            StepRule::Unmatched {
                variable_candidates: variables.len(),
            },
        ),
    }
}

/// The captured variable for `routes[index]`.
///
/// - a variable node captures its own token;
/// - a node right after a variable node inherits the variable's token;
/// - anything else captures nothing.
///
/// `routes` and `tokens` are expected to be aligned (a full match).
#[must_use]
pub fn captured_variable<'t, O, S: AsRef<str>>(
    tree: &RouteTree<O>,
    routes: &[RouteId],
    tokens: &'t [S],
    index: usize,
) -> Option<&'t str> {
    let is_variable = |id: RouteId| tree.get(id).is_some_and(|route| route.is_variable());

    let route = *routes.get(index)?;
    if is_variable(route) {
        return tokens.get(index).map(|token| token.as_ref());
    }
    if index > 0 && is_variable(routes[index - 1]) {
        return tokens.get(index - 1).map(|token| token.as_ref());
    }
    None
}

/// Pair every route of a full match with its kind and captured variable.
pub(crate) fn attribute<O, S: AsRef<str>>(
    tree: &RouteTree<O>,
    routes: &[RouteId],
    tokens: &[S],
) -> Vec<MatchedRoute> {
    routes
        .iter()
        .enumerate()
        .filter_map(|(index, &id)| {
            tree.get(id).map(|route| MatchedRoute {
                id,
                kind: route.kind(),
                variable: captured_variable(tree, routes, tokens, index).map(str::to_owned),
            })
        })
        .collect()
}
