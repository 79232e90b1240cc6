//! Fixture metadata enums and the latched outcome record.
//!
//! An [`Outcome`] starts out in [`State::None`] and is written exactly once
//! to a terminal state while its fixture runs. The one hard rule is the
//! fail latch: once the state is [`State::Fail`], every later write is a
//! no-op. That rule is what keeps assertion helpers honest when they keep
//! evaluating past a failing chain link.

use serde::Serialize;

use crate::error::{Failure, FailureKind};

/// Declared expectation about how a test should conclude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Intent {
    /// No expectation: passes pass, failures fail.
    #[default]
    None,
    /// The test is expected to pass; anything else is a failure.
    MustPass,
    /// The test is expected to fail; completing cleanly is a failure.
    MustFail,
}

/// Declared instruction on whether a test body runs at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Action {
    #[default]
    Run,
    /// Skip the body, optionally carrying a free-text reason.
    Skip(Option<String>),
}

/// The terminal state of one fixture's execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// Not yet executed.
    None,
    Pass,
    Fail,
    Skip,
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::None => "none",
            State::Pass => "pass",
            State::Fail => "fail",
            State::Skip => "skip",
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable-after-write record of one executed fixture.
///
/// The `path` is the fixture's own name at construction; each enclosing
/// case and suite prefixes its name as results bubble up, outermost last,
/// so a full run yields dotted paths like `Suite.MathCase.checksTrue`.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    path: String,
    state: State,
    message: Option<String>,
    kind: Option<FailureKind>,
}

impl Outcome {
    pub(crate) fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            state: State::None,
            message: None,
            kind: None,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn kind(&self) -> Option<FailureKind> {
        self.kind
    }

    /// The verdict `run()` reports: true iff the state is not `Fail`.
    pub fn ok(&self) -> bool {
        self.state != State::Fail
    }

    pub(crate) fn qualify(&mut self, prefix: &str) {
        self.path = format!("{}.{}", prefix, self.path);
    }

    /// Records a clean completion, reconciled against the declared intent.
    /// A `MustFail` test that completed cleanly missed its expected failure,
    /// which is itself a failure.
    pub(crate) fn pass(&mut self, intent: Intent) {
        if self.state == State::Fail {
            return;
        }
        if intent == Intent::MustFail {
            self.state = State::Fail;
            self.message = Some("expected a failure, but the test completed".to_string());
            self.kind = Some(FailureKind::Assertion);
        } else {
            self.state = State::Pass;
        }
    }

    /// Records a failure, reconciled against the declared intent. For a
    /// `MustFail` test the expected failure arrived, so the fixture passes;
    /// the message is still recorded either way.
    pub(crate) fn fail(&mut self, intent: Intent, failure: &Failure) {
        if self.state == State::Fail {
            return;
        }
        self.message = Some(failure.to_string());
        self.kind = Some(failure.kind());
        self.state = if intent == Intent::MustFail {
            State::Pass
        } else {
            State::Fail
        };
    }

    /// Records a skip. Intent does not enter into it; a skip that collides
    /// with an intent is routed through [`Outcome::fault`] by the fixture.
    pub(crate) fn skip(&mut self, reason: Option<&str>) {
        if self.state == State::Fail {
            return;
        }
        self.state = State::Skip;
        self.message = reason.map(str::to_string);
    }

    /// Records a configuration fault: an unconditional `Fail`, regardless of
    /// intent.
    pub(crate) fn fault(&mut self, message: &str) {
        if self.state == State::Fail {
            return;
        }
        self.state = State::Fail;
        self.message = Some(message.to_string());
        self.kind = Some(FailureKind::Config);
    }
}
