//! Conformance test fixture runner
//!
//! Loads YAML fixtures, builds a [`Router`] from their route declarations
//! and checks every case against it.
//!
//! Every declared route gets a [`Recorder`] action labelled with its name
//! (variables are labelled `"<variable>"` unless a `label` is given), so a
//! case can assert exactly which actions ran and with which variable.

use crate::{Invocation, Recorder};
use pathway::prelude::*;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub description: String,
    pub routes: Vec<RouteDecl>,
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
    pub cases: Vec<TestCase>,
}

/// One route and its subtree.
#[derive(Debug, Deserialize)]
pub struct RouteDecl {
    /// Omitted for variable routes.
    #[serde(default)]
    pub name: Option<String>,
    /// Defaults to `variable` for unnamed routes and `other` otherwise.
    #[serde(default)]
    pub kind: Option<RoutingKind>,
    /// Label recorded when the route's action runs.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    /// Only read on top-level declarations.
    #[serde(default = "default_true")]
    pub register: bool,
    #[serde(default)]
    pub children: Vec<RouteDecl>,
}

fn default_true() -> bool {
    true
}

/// Test case
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub path: Vec<String>,
    pub expect: bool,
    /// Actions expected to run, in order. Unchecked when omitted.
    #[serde(default)]
    pub invoked: Option<Vec<Invocation>>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Builder: Convert declarations to a router
// ═══════════════════════════════════════════════════════════════════════════════

impl RouteDecl {
    fn kind(&self) -> RoutingKind {
        self.kind.unwrap_or(if self.name.is_some() {
            RoutingKind::Other
        } else {
            RoutingKind::Variable
        })
    }

    fn label(&self) -> String {
        self.label
            .clone()
            .or_else(|| self.name.clone())
            .unwrap_or_else(|| "<variable>".to_string())
    }

    fn build(
        &self,
        router: &mut Router<String>,
        parent: Option<RouteId>,
        recorder: &Recorder,
    ) -> Result<RouteId, RouterError> {
        let action: RouteAction<String> = Arc::new(recorder.action(self.label()));
        let id = router.new_child(parent, self.name.clone(), self.kind(), Some(action))?;
        if let Some(example) = &self.example {
            router.set_example(id, example.clone())?;
        }
        for child in &self.children {
            child.build(router, Some(id), recorder)?;
        }
        Ok(id)
    }
}

impl Fixture {
    /// Build a router from this fixture's routes and translations.
    ///
    /// # Errors
    ///
    /// Fails if a declaration is invalid (e.g. an unnamed non-variable route)
    /// or a translation conflicts.
    pub fn build(&self, recorder: &Recorder) -> Result<Router<String>, RouterError> {
        let mut router = Router::new();
        for decl in &self.routes {
            let head = decl.build(&mut router, None, recorder)?;
            if decl.register {
                router.register(head);
            }
        }
        for (from, to) in &self.translations {
            router.translate(from.clone(), to.clone())?;
        }
        Ok(router)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: bool,
    pub actual: bool,
    pub expected_invoked: Option<Vec<Invocation>>,
    pub actual_invoked: Vec<Invocation>,
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Run all test cases and return results
    ///
    /// # Errors
    ///
    /// Fails if the router cannot be built; see [`build`](Self::build).
    pub fn run(&self) -> Result<Vec<CaseResult>, RouterError> {
        let recorder = Recorder::new();
        let router = self.build(&recorder)?;

        Ok(self
            .cases
            .iter()
            .map(|case| {
                recorder.clear();
                let actual = router.evaluate(&case.path);
                let actual_invoked = recorder.invocations();
                let invoked_ok = case
                    .invoked
                    .as_ref()
                    .map_or(true, |expected| *expected == actual_invoked);
                CaseResult {
                    case_name: case.name.clone(),
                    passed: actual == case.expect && invoked_ok,
                    expected: case.expect,
                    actual,
                    expected_invoked: case.invoked.clone(),
                    actual_invoked,
                }
            })
            .collect())
    }

    /// Run all test cases and panic on first failure
    pub fn run_and_assert(&self) {
        let results = self
            .run()
            .unwrap_or_else(|e| panic!("Fixture '{}' failed to build: {e}", self.name));
        for result in results {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' failed: expected {} with {:?}, got {} with {:?}",
                self.name,
                result.case_name,
                result.expected,
                result.expected_invoked,
                result.actual,
                result.actual_invoked
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM: &str = r#"
name: item
description: variable between two named routes
routes:
  - name: item
    children:
      - label: id
        children:
          - name: reviews
            kind: push
cases:
  - name: full path
    path: [item, "42", reviews]
    expect: true
    invoked:
      - { label: item }
      - { label: id, variable: "42" }
      - { label: reviews, variable: "42" }
  - name: unknown leaf
    path: [item, "42", questions]
    expect: false
    invoked: []
"#;

    #[test]
    fn parses_defaults() {
        let fixture = Fixture::from_yaml(ITEM).unwrap();
        let item = &fixture.routes[0];
        assert_eq!(item.kind(), RoutingKind::Other);
        assert!(item.register);

        let variable = &item.children[0];
        assert_eq!(variable.kind(), RoutingKind::Variable);
        assert_eq!(variable.label(), "id");
        assert_eq!(variable.children[0].kind(), RoutingKind::Push);
        assert!(fixture.translations.is_empty());
    }

    #[test]
    fn runs_cases() {
        let fixture = Fixture::from_yaml(ITEM).unwrap();
        let results = fixture.run().unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed), "{results:?}");
    }

    #[test]
    fn examples_are_kept_on_built_routes() {
        let yaml = r#"
name: documented
description: example locators survive the build
routes:
  - name: item
    example: "scheme://item"
    children:
      - example: "scheme://item/<variable>"
cases: []
"#;
        let fixture = Fixture::from_yaml(yaml).unwrap();
        let router = fixture.build(&Recorder::new()).unwrap();
        let item = router.routes()[0];
        let variable = router.tree().children(item)[0];
        assert_eq!(router.tree().get(item).unwrap().example(), Some("scheme://item"));
        assert_eq!(
            router.tree().get(variable).unwrap().example(),
            Some("scheme://item/<variable>")
        );
    }

    #[test]
    fn unnamed_non_variable_fails_to_build() {
        let yaml = r#"
name: bad
description: unnamed push route
routes:
  - kind: push
cases: []
"#;
        let fixture = Fixture::from_yaml(yaml).unwrap();
        assert!(matches!(
            fixture.run(),
            Err(RouterError::UnnamedRoute { kind: RoutingKind::Push })
        ));
    }

    #[test]
    fn reports_wrong_invocations() {
        let yaml = r#"
name: wrong
description: expectation mismatch is reported
routes:
  - name: a
cases:
  - name: wrong label
    path: [a]
    expect: true
    invoked:
      - { label: b }
"#;
        let results = Fixture::from_yaml(yaml).unwrap().run().unwrap();
        assert!(!results[0].passed);
        assert!(results[0].actual);
        assert_eq!(results[0].actual_invoked, vec![Invocation::new("a", None)]);
    }
}
