//! Named fixture collections built by explicit registration.
//!
//! A [`Case`] replaces decorator-and-reflection discovery with a plain
//! registration call: `case.test(name, body)` appends a fixture and returns a
//! [`Declaration`] builder for its metadata. Registration order is execution
//! order, and a single `run()` always executes every fixture so one call
//! yields a complete result set.

use crate::error::Check;
use crate::fixture::{Fixture, Hook};
use crate::outcome::{Action, Intent, Outcome};
use crate::suite::Runnable;

/// An ordered, named bundle of fixtures sharing optional setup/teardown
/// hooks.
pub struct Case {
    name: String,
    before: Option<Hook>,
    after: Option<Hook>,
    fixtures: Vec<Fixture>,
}

impl Case {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            before: None,
            after: None,
            fixtures: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Installs the setup hook shared by every fixture in this case. Hooks
    /// may close over case-level state; resetting that state between
    /// fixtures is the hook's job.
    pub fn before(&mut self, hook: impl Fn() -> Check + 'static) -> &mut Self {
        self.before = Some(Box::new(hook));
        self
    }

    /// Installs the teardown hook shared by every fixture in this case.
    pub fn after(&mut self, hook: impl Fn() -> Check + 'static) -> &mut Self {
        self.after = Some(Box::new(hook));
        self
    }

    /// Registers a test and returns the builder for its metadata.
    ///
    /// Registration under an already-used name is idempotent: the existing
    /// fixture is returned instead of adding a second one, which keeps every
    /// result path unique within a run.
    pub fn test(&mut self, name: &str, body: impl Fn() -> Check + 'static) -> Declaration<'_> {
        if let Some(ix) = self.fixtures.iter().position(|f| f.name() == name) {
            return Declaration {
                fixture: &mut self.fixtures[ix],
            };
        }
        self.fixtures.push(Fixture::new(name, body));
        let ix = self.fixtures.len() - 1;
        Declaration {
            fixture: &mut self.fixtures[ix],
        }
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Runs every fixture in declaration order, never short-circuiting, and
    /// returns the conjunction of the verdicts.
    pub fn run(&mut self) -> bool {
        let mut ok = true;
        for fixture in &mut self.fixtures {
            ok &= fixture.run_with(self.before.as_ref(), self.after.as_ref());
        }
        ok
    }

    /// One outcome per fixture, in declaration order, path-qualified with
    /// this case's name.
    pub fn results(&self) -> Vec<Outcome> {
        self.fixtures
            .iter()
            .map(|fixture| {
                let mut outcome = fixture.outcome().clone();
                outcome.qualify(&self.name);
                outcome
            })
            .collect()
    }
}

impl Runnable for Case {
    fn name(&self) -> &str {
        Case::name(self)
    }

    fn run(&mut self) -> bool {
        Case::run(self)
    }

    fn results(&self) -> Vec<Outcome> {
        Case::results(self)
    }
}

/// Metadata builder returned by [`Case::test`].
///
/// Mirrors the declaration surface of the toolkit: intent via `must_pass` /
/// `must_fail`, action via `skip` / `skip_if` / `skip_if_not`, and a skip
/// reason via `because`.
pub struct Declaration<'a> {
    fixture: &'a mut Fixture,
}

impl Declaration<'_> {
    /// Declares that this test is expected to pass; anything else fails it.
    pub fn must_pass(self) -> Self {
        self.fixture.set_intent(Intent::MustPass);
        self
    }

    /// Declares that this test is expected to fail; completing cleanly
    /// fails it.
    pub fn must_fail(self) -> Self {
        self.fixture.set_intent(Intent::MustFail);
        self
    }

    /// Declares that this test should not run.
    pub fn skip(self) -> Self {
        self.fixture.set_action(Action::Skip(None));
        self
    }

    /// Skips the test when the condition holds.
    pub fn skip_if(self, condition: bool) -> Self {
        if condition {
            self.skip()
        } else {
            self
        }
    }

    /// Skips the test unless the condition holds.
    pub fn skip_if_not(self, condition: bool) -> Self {
        self.skip_if(!condition)
    }

    /// Attaches a reason to a declared skip. A no-op when the test is not
    /// skipped, so `skip_if(cond).because(..)` reads naturally either way.
    pub fn because(self, reason: &str) -> Self {
        self.fixture.set_reason(reason);
        self
    }
}
