//! Match trace types for debugging routing decisions.
//!
//! A [`MatchTrace`] records, token by token, which rule picked (or failed to
//! pick) a route. Use [`Router::match_with_trace`](crate::Router::match_with_trace)
//! to see why a deep link did or did not resolve.
//!
//! # Example
//!
//! ```ignore
//! let trace = router.match_with_trace(&["item", "12345", "reviews"]);
//! println!("matched: {}", trace.matched);
//! for step in &trace.steps {
//!     println!("  [{}] {:?} -> {:?} via {:?}", step.index, step.token, step.route, step.rule);
//! }
//! ```

use crate::path_matcher::select_step;
use crate::{RouteId, RouteTree};
use std::fmt;

/// Which rule decided a step of the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRule {
    /// A child was named exactly like the token.
    Named,
    /// A variable child was chosen because it has a child named like the
    /// next token.
    VariableLookahead,
    /// The token was the last one and the node had exactly one variable child.
    TrailingVariable,
    /// No child could consume the token; the walk stopped here.
    Unmatched {
        /// How many variable children were considered and rejected.
        variable_candidates: usize,
    },
}

impl StepRule {
    /// Returns `true` if the step consumed its token.
    #[must_use]
    pub fn consumed(self) -> bool {
        !matches!(self, Self::Unmatched { .. })
    }
}

/// One token's step in a trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchStep {
    /// Position of the token (0-based).
    pub index: usize,
    /// The token as matched (after translation).
    pub token: String,
    /// The route chosen for the token, `None` when the walk stopped.
    pub route: Option<RouteId>,
    /// The rule that decided.
    pub rule: StepRule,
}

/// Trace of a full match walk.
///
/// # INV: `routes` == `match_path()` result
///
/// The `routes` field always equals what [`match_path`](crate::match_path)
/// returns for the same tree and tokens.
#[derive(Clone, PartialEq, Eq)]
pub struct MatchTrace {
    /// The tokens that were walked.
    pub tokens: Vec<String>,
    /// Every step taken, including the final unmatched one (if any).
    pub steps: Vec<MatchStep>,
    /// Routes matched, in walk order.
    pub routes: Vec<RouteId>,
    /// `true` if every token was consumed (and there was at least one).
    pub matched: bool,
}

impl MatchTrace {
    /// Walk `tokens` against `tree`, recording every step.
    pub(crate) fn record<O, S: AsRef<str>>(tree: &RouteTree<O>, tokens: &[S]) -> Self {
        let mut steps = Vec::with_capacity(tokens.len());
        let mut routes = Vec::with_capacity(tokens.len());
        let mut current = tree.root();

        for index in 0..tokens.len() {
            let (route, rule) = select_step(tree, current, tokens, index);
            steps.push(MatchStep {
                index,
                token: tokens[index].as_ref().to_owned(),
                route,
                rule,
            });
            match route {
                Some(next) => {
                    routes.push(next);
                    current = next;
                }
                None => break,
            }
        }

        let matched = !tokens.is_empty() && routes.len() == tokens.len();
        Self {
            tokens: tokens.iter().map(|t| t.as_ref().to_owned()).collect(),
            steps,
            routes,
            matched,
        }
    }

    /// The step where the walk stopped, if it did not consume every token.
    #[must_use]
    pub fn stopped_at(&self) -> Option<&MatchStep> {
        self.steps.iter().find(|step| !step.rule.consumed())
    }
}

impl fmt::Debug for MatchTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchTrace")
            .field("matched", &self.matched)
            .field("tokens", &self.tokens)
            .field("steps", &self.steps)
            .finish()
    }
}
