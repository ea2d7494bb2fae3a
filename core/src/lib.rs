//! pathway - path-component router
//!
//! Maps an ordered sequence of string tokens (the components of a deep link,
//! URL path or similar locator) onto a registered tree of route nodes, then
//! runs the action bound to every matched node.
//!
//! # Architecture
//!
//! - [`RouteTree`] - Index-based arena of [`Route`] nodes under a `MASTER` root
//! - [`RouteBuilder`] - Chaining API that grows a route chain in the arena
//! - [`Router`] - Registration, queries, alias table and evaluation
//! - [`MatchTrace`] - Step-by-step record of a match walk, for debugging
//! - [`Navigator`] - Capability the presentation layer implements to consume
//!   action outputs; the router only passes the [`RoutingKind`] tag through
//!
//! # Key Design Insights
//!
//! 1. **Arena, not pointers**: nodes live in one `Vec` owned by the tree.
//!    `parent` and `children` are [`RouteId`] indices, so upward walks need no
//!    back-pointers and the tree can never form ownership cycles.
//!
//! 2. **Named match wins**: at each step an exact child name beats any
//!    variable child. Variables are disambiguated by looking one token ahead.
//!
//! 3. **All or nothing**: actions only run when every token was consumed by a
//!    node. A partial walk is a no-match, reported as `false`.
//!
//! # Example
//!
//! ```
//! use pathway::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let mut router: Router<()> = Router::new();
//! let leaf = router
//!     .route("item", RoutingKind::Other)
//!     .variable()
//!     .route("reviews", RoutingKind::Push)
//!     .action(move |variable| {
//!         sink.lock().unwrap().push(variable.map(str::to_owned));
//!         None
//!     })
//!     .id();
//! router.register(leaf);
//!
//! assert!(router.evaluate(&["item", "12345", "reviews"]));
//! assert_eq!(*seen.lock().unwrap(), vec![Some("12345".to_string())]);
//! assert!(!router.evaluate(&["item", "12345", "questions"]));
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod builder;
mod descriptor;
mod navigator;
mod path_matcher;
mod route;
mod route_tree;
mod router;
mod routing_kind;
mod trace;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

// Core types
pub use builder::RouteBuilder;
pub use descriptor::{descriptors_from_components, DescribeRoute, RouteDescriptor};
pub use navigator::Navigator;
pub use path_matcher::{captured_variable, match_path, MatchedRoute};
pub use route::{Route, RouteAction, RouteId};
pub use route_tree::RouteTree;
pub use router::Router;
pub use routing_kind::RoutingKind;

// Trace types
pub use trace::{MatchStep, MatchTrace, StepRule};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use pathway::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Descriptors
        descriptors_from_components,
        DescribeRoute,
        // Trace types
        MatchStep,
        MatchTrace,
        MatchedRoute,
        // Presentation hand-off
        Navigator,
        // Core types
        Route,
        RouteAction,
        RouteBuilder,
        RouteDescriptor,
        RouteId,
        RouteTree,
        Router,
        // Errors
        RouterError,
        RoutingKind,
        StepRule,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Name of the sentinel root node every tree is created with.
///
/// The root is never matched against a token and never registered; it only
/// anchors the top-level routes.
pub const ROOT_ROUTE_NAME: &str = "MASTER";

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from route construction and the alias table.
///
/// Evaluation never fails with an error: an unmatched token sequence is
/// reported as `false` (or an empty match list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// [`Router::translate`] was called for a source name that is already mapped.
    TranslationConflict {
        /// The source name that was mapped twice.
        from: String,
        /// The mapping that is kept.
        existing: String,
        /// The mapping that was rejected.
        attempted: String,
    },
    /// A route without a name was created with a kind other than
    /// [`RoutingKind::Variable`].
    UnnamedRoute {
        /// The kind that was requested.
        kind: RoutingKind,
    },
    /// A [`RouteId`] was not issued by this tree.
    UnknownRoute {
        /// The offending id.
        id: RouteId,
    },
    /// The root was used as a parent. Top-level routes are attached only by
    /// [`Router::register`].
    RootParent,
}

impl std::fmt::Display for RouterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TranslationConflict {
                from,
                existing,
                attempted,
            } => {
                write!(
                    f,
                    "a translation for \"{from}\" exists already (\"{existing}\"), \
                     refusing to remap it to \"{attempted}\""
                )
            }
            Self::UnnamedRoute { kind } => {
                write!(
                    f,
                    "only variable routes may be unnamed, got an unnamed {kind} route"
                )
            }
            Self::UnknownRoute { id } => {
                write!(f, "route {id} does not belong to this tree")
            }
            Self::RootParent => {
                write!(
                    f,
                    "routes cannot be added under the {ROOT_ROUTE_NAME} root, register a chain instead"
                )
            }
        }
    }
}

impl std::error::Error for RouterError {}
