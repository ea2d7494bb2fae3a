//! `RoutingKind` - how a matched route's output should be consumed.

use std::fmt;

/// Semantic tag attached to every route.
///
/// The matcher only ever looks at [`RoutingKind::Variable`]; the other kinds
/// are handed untouched to the [`Navigator`](crate::Navigator), which decides
/// what "push" or "modal" means for its platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoutingKind {
    /// A fixed top-level destination, e.g. a tab.
    Static,
    /// A named transition performed by the presentation layer.
    Segue,
    /// Pushed onto the current navigation stack.
    Push,
    /// Presented modally over the current screen.
    Modal,
    /// Positional wildcard that captures one token.
    Variable,
    /// Anything else (hosts, redirects, plain actions).
    Other,
}

impl RoutingKind {
    /// All kinds, in declaration order.
    pub const ALL: [RoutingKind; 6] = [
        Self::Static,
        Self::Segue,
        Self::Push,
        Self::Modal,
        Self::Variable,
        Self::Other,
    ];

    /// Lowercase label used in logs and error messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Segue => "segue",
            Self::Push => "push",
            Self::Modal => "modal",
            Self::Variable => "variable",
            Self::Other => "other",
        }
    }

    /// Returns `true` for [`RoutingKind::Variable`].
    #[must_use]
    pub fn is_variable(self) -> bool {
        self == Self::Variable
    }
}

impl fmt::Display for RoutingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
