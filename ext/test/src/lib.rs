//! pathway-test: recording test domain for conformance testing
//!
//! Provides a [`Recorder`] whose actions log every invocation and a
//! [`RecordingNavigator`] that keeps whatever the router hands over. Together
//! they make evaluation observable without a real presentation layer.
//!
//! # Example
//!
//! ```
//! use pathway_test::prelude::*;
//!
//! let recorder = Recorder::new();
//! let mut router: Router<String> = Router::new();
//! router
//!     .route("item", RoutingKind::Other)
//!     .variable()
//!     .action(recorder.action("item"))
//!     .register();
//!
//! assert!(router.evaluate(&["item", "12345"]));
//! assert_eq!(recorder.invocations(), vec![Invocation::new("item", Some("12345"))]);
//! ```

use pathway::{Navigator, RoutingKind};
use std::sync::{Arc, Mutex, PoisonError};

#[cfg(feature = "fixtures")]
pub mod fixture;

/// One call of a recorded action.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "fixtures", derive(serde::Deserialize))]
pub struct Invocation {
    /// Label the action was created with.
    pub label: String,
    /// Variable the router passed in.
    #[cfg_attr(feature = "fixtures", serde(default))]
    pub variable: Option<String>,
}

impl Invocation {
    /// Create an invocation record.
    pub fn new(label: impl Into<String>, variable: Option<&str>) -> Self {
        Self {
            label: label.into(),
            variable: variable.map(str::to_owned),
        }
    }
}

/// Shared log of action invocations.
///
/// Cloning a recorder shares the log, so actions created from any clone
/// append to the same list.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    log: Arc<Mutex<Vec<Invocation>>>,
}

impl Recorder {
    /// Create a recorder with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An action that logs `(label, variable)` and outputs `label`.
    pub fn action(
        &self,
        label: impl Into<String>,
    ) -> impl Fn(Option<&str>) -> Option<String> + Send + Sync + 'static {
        let log = Arc::clone(&self.log);
        let label = label.into();
        move |variable| {
            log.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(Invocation::new(label.clone(), variable));
            Some(label.clone())
        }
    }

    /// Every invocation so far, oldest first.
    #[must_use]
    pub fn invocations(&self) -> Vec<Invocation> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Labels of every invocation so far, oldest first.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.invocations()
            .into_iter()
            .map(|invocation| invocation.label)
            .collect()
    }

    /// Forget every invocation.
    pub fn clear(&self) {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Navigator that keeps everything it is handed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNavigator {
    /// `(kind, output)` pairs in the order they were navigated.
    pub navigated: Vec<(RoutingKind, String)>,
    /// The last tab set, if any was handed over.
    pub tabs: Option<Vec<String>>,
}

impl RecordingNavigator {
    /// Create an empty navigator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Navigator<String> for RecordingNavigator {
    fn navigate(&mut self, kind: RoutingKind, output: String) {
        self.navigated.push((kind, output));
    }

    fn set_tabs(&mut self, tabs: Vec<String>) {
        self.tabs = Some(tabs);
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{Invocation, Recorder, RecordingNavigator};
    pub use pathway::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathway::Router;

    #[test]
    fn clones_share_the_log() {
        let recorder = Recorder::new();
        let clone = recorder.clone();
        let action = clone.action("a");

        assert_eq!(action(Some("1")), Some("a".to_string()));
        assert_eq!(recorder.invocations(), vec![Invocation::new("a", Some("1"))]);

        recorder.clear();
        assert!(clone.invocations().is_empty());
    }

    #[test]
    fn labels_follow_evaluation_order() {
        let recorder = Recorder::new();
        let mut router: Router<String> = Router::new();
        router
            .route("a", RoutingKind::Other)
            .action(recorder.action("a"))
            .route("b", RoutingKind::Push)
            .action(recorder.action("b"))
            .register();

        assert!(router.evaluate(&["a", "b"]));
        assert_eq!(recorder.labels(), vec!["a", "b"]);
    }

    #[test]
    fn navigator_records_kinds_and_tabs() {
        let recorder = Recorder::new();
        let mut router: Router<String> = Router::new();
        router
            .route("home", RoutingKind::Static)
            .action(recorder.action("home"))
            .register();
        router
            .route("detail", RoutingKind::Modal)
            .action(recorder.action("detail"))
            .register();

        let mut navigator = RecordingNavigator::new();
        assert!(router.evaluate_with(&["detail"], &mut navigator));
        assert_eq!(router.update_navigator(&mut navigator), 1);

        assert_eq!(
            navigator.navigated,
            vec![(RoutingKind::Modal, "detail".to_string())]
        );
        assert_eq!(navigator.tabs, Some(vec!["home".to_string()]));
    }
}
