//! Single-fixture execution: reconciling declared intent and action with the
//! observed result.
//!
//! A fixture runs its setup hook, its body, and its teardown hook inside one
//! failure-isolating scope and latches exactly one terminal state into its
//! [`Outcome`]. Failures arrive as `Err(Failure)` returns; panics from any of
//! the three steps are caught and folded in as defects, so a blowing-up body
//! can never take down sibling fixtures.
//!
//! Teardown policy: if setup fails, neither the body nor teardown runs. Once
//! setup has succeeded, teardown always runs, even after a failing body; the
//! body's failure takes precedence in the recorded message.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::error::{Check, Failure};
use crate::outcome::{Action, Intent, Outcome, State};

/// Setup/teardown hook, owned by a case and shared by its fixtures.
pub type Hook = Box<dyn Fn() -> Check>;

/// One executable test unit producing one [`Outcome`].
pub struct Fixture {
    name: String,
    body: Box<dyn Fn() -> Check>,
    intent: Intent,
    action: Action,
    outcome: Outcome,
}

impl Fixture {
    pub fn new(name: impl Into<String>, body: impl Fn() -> Check + 'static) -> Self {
        let name = name.into();
        let outcome = Outcome::new(name.as_str());
        Self {
            name,
            body: Box::new(body),
            intent: Intent::None,
            action: Action::Run,
            outcome,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub(crate) fn set_intent(&mut self, intent: Intent) {
        self.intent = intent;
    }

    pub(crate) fn set_action(&mut self, action: Action) {
        self.action = action;
    }

    /// Attaches a reason to a declared skip; a no-op while the action is
    /// still `Run`.
    pub(crate) fn set_reason(&mut self, reason: &str) {
        if let Action::Skip(r) = &mut self.action {
            *r = Some(reason.to_string());
        }
    }

    /// Executes the fixture without hooks. See [`Fixture::run_with`].
    pub fn run(&mut self) -> bool {
        self.run_with(None, None)
    }

    /// Executes the fixture at most once and returns the verdict (true iff
    /// the terminal state is not `Fail`). A second call returns the recorded
    /// verdict without re-executing anything.
    pub fn run_with(&mut self, before: Option<&Hook>, after: Option<&Hook>) -> bool {
        if self.outcome.state() != State::None {
            return self.outcome.ok();
        }
        match self.action.clone() {
            Action::Skip(reason) => {
                if self.intent == Intent::None {
                    self.outcome.skip(reason.as_deref());
                } else {
                    // skip + intent is contradictory metadata, reported
                    // rather than silently skipped
                    self.outcome
                        .fault("skipped test declares a pass/fail intent");
                }
            }
            Action::Run => self.execute(before, after),
        }
        self.outcome.ok()
    }

    fn execute(&mut self, before: Option<&Hook>, after: Option<&Hook>) {
        if let Some(hook) = before {
            if let Err(failure) = guard(|| hook()) {
                self.outcome.fail(self.intent, &failure);
                return;
            }
        }
        let body_result = guard(|| (self.body)());
        let after_result = match after {
            Some(hook) => guard(|| hook()),
            None => Ok(()),
        };
        // body failure wins over a teardown failure
        match body_result.and(after_result) {
            Ok(()) => self.outcome.pass(self.intent),
            Err(failure) => self.outcome.fail(self.intent, &failure),
        }
    }
}

impl fmt::Debug for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fixture")
            .field("name", &self.name)
            .field("intent", &self.intent)
            .field("action", &self.action)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

/// Runs one step of the setup/body/teardown sequence, converting a panic
/// into a defect failure.
fn guard(step: impl FnOnce() -> Check) -> Check {
    match panic::catch_unwind(AssertUnwindSafe(step)) {
        Ok(result) => result,
        Err(payload) => Err(Failure::defect(panic_text(payload.as_ref()))),
    }
}

fn panic_text(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "test body panicked".to_string()
    }
}
