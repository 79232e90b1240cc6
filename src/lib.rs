//! Attest: a minimal fixture execution engine with a fluent, quantified
//! assertion builder.
//!
//! Tests are plain functions returning [`Check`]; assertion chains built
//! from [`that`], [`all`], or [`any`] signal failure through the `?`-able
//! error value, and the fixture executor reconciles each test's declared
//! intent (must-pass / must-fail / none) and action (run / skip) with what
//! actually happened.
//!
//! # Example
//!
//! ```
//! use attest::{that, Case, Check, Runnable, Suite};
//!
//! fn adds() -> Check {
//!     that(2 + 2).is().equal_to(4)
//! }
//!
//! let mut math = Case::new("MathCase");
//! math.test("checksTrue", adds);
//! math.test("divByZero", || that(1).is().equal_to(2)).must_fail();
//! math.test("slow", || Ok(())).skip().because("takes minutes");
//!
//! let mut suite = Suite::new("Suite");
//! suite.add(math);
//! assert!(suite.run());
//! assert_eq!(suite.results()[0].path(), "Suite.MathCase.checksTrue");
//! ```

pub use crate::assert::{all, any, that, Assertion, Chain, Quantifier, Truthy};
pub use crate::case::{Case, Declaration};
pub use crate::error::{Check, Failure, FailureKind};
pub use crate::fixture::{Fixture, Hook};
pub use crate::outcome::{Action, Intent, Outcome, State};
pub use crate::report::{Reporter, RunReport, Summary};
pub use crate::suite::{Runnable, Suite};

pub mod assert;
pub mod case;
pub mod error;
pub mod fixture;
pub mod outcome;
pub mod report;
pub mod suite;
