//! Route descriptors - documented `(name, kind, example)` triples.
//!
//! Hosts usually keep their routes in an enum and describe each case with a
//! [`RouteDescriptor`]. A sequence of descriptors can then be evaluated
//! directly, without going through a locator string.
//!
//! ```
//! use pathway::{DescribeRoute, RouteDescriptor, RoutingKind};
//!
//! enum WishList {
//!     AddToList,
//!     DeleteFromList,
//! }
//!
//! impl DescribeRoute for WishList {
//!     fn descriptor(&self) -> RouteDescriptor {
//!         match self {
//!             Self::AddToList => RouteDescriptor::new("addToList", RoutingKind::Push)
//!                 .with_example("scheme://item/<variable>/addToList"),
//!             Self::DeleteFromList => RouteDescriptor::new("deleteFromList", RoutingKind::Push)
//!                 .with_example("scheme://item/<variable>/deleteFromList"),
//!         }
//!     }
//! }
//!
//! assert_eq!(WishList::AddToList.descriptor().name, "addToList");
//! assert_eq!(WishList::DeleteFromList.descriptor().kind, RoutingKind::Push);
//! ```

use crate::RoutingKind;

/// Name, kind and an optional example locator for one route.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteDescriptor {
    /// The token the route matches. For variables this is the captured value.
    pub name: String,
    /// How the route's output is meant to be consumed.
    pub kind: RoutingKind,
    /// Example locator, for documentation only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub example: Option<String>,
}

impl RouteDescriptor {
    /// Describe a route with no example.
    pub fn new(name: impl Into<String>, kind: RoutingKind) -> Self {
        Self {
            name: name.into(),
            kind,
            example: None,
        }
    }

    /// A variable segment carrying `value`.
    pub fn variable(value: impl Into<String>) -> Self {
        Self::new(value, RoutingKind::Variable)
    }

    /// A plain redirection to `name`; only the name matters when evaluated.
    pub fn redirection(name: impl Into<String>) -> Self {
        Self::new(name, RoutingKind::Other)
    }

    /// Attach an example locator (builder pattern).
    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// Something that can describe itself as a route.
pub trait DescribeRoute {
    /// The descriptor for this route.
    fn descriptor(&self) -> RouteDescriptor;
}

impl DescribeRoute for RouteDescriptor {
    fn descriptor(&self) -> RouteDescriptor {
        self.clone()
    }
}

impl<T: DescribeRoute + ?Sized> DescribeRoute for &T {
    fn descriptor(&self) -> RouteDescriptor {
        (**self).descriptor()
    }
}

/// Wrap raw path components as redirection descriptors.
pub fn descriptors_from_components<S: AsRef<str>>(components: &[S]) -> Vec<RouteDescriptor> {
    components
        .iter()
        .map(|component| RouteDescriptor::redirection(component.as_ref()))
        .collect()
}
