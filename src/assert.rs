//! Fluent assertion evaluator.
//!
//! A chain starts at [`that`] (one subject), [`all`], or [`any`] (many
//! subjects), passes through `is()`/`are()` and optionally `not()`, and ends
//! at a terminal. Every terminal reduces to the same contract: apply the
//! chain's quantifier to the subjects under one predicate, and compare the
//! quantified boolean against the expected boolean (true unless the chain
//! went through `not()`). A mismatch returns `Err(Failure::Assertion)`; that
//! error is the only channel by which a failing assertion reaches the
//! enclosing fixture.
//!
//! Equality comes in two strengths. `equal_to` is the loose form: it accepts
//! any type the subject has a `PartialEq` impl against, so a `String` can be
//! compared with a `&str`. `exact_to` demands the subject's own type, which
//! rules out cross-type comparisons at compile time. `different_from` and
//! `distinct_from` are their negated counterparts.

use std::fmt::Debug;

use regex::Regex;

use crate::error::{Check, Failure};

/// How a predicate is applied across the subjects of one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// Every subject must satisfy the predicate; vacuously true when there
    /// are no subjects.
    Every,
    /// At least one subject must satisfy it; vacuously false when there are
    /// no subjects.
    Any,
}

/// Starts a chain over a single subject (the degenerate one-element case of
/// "all must satisfy").
pub fn that<T>(subject: T) -> Assertion<T> {
    Assertion {
        subjects: vec![subject],
        quantifier: Quantifier::Every,
    }
}

/// Starts a chain requiring every subject to satisfy the terminal.
pub fn all<T>(subjects: impl IntoIterator<Item = T>) -> Assertion<T> {
    Assertion {
        subjects: subjects.into_iter().collect(),
        quantifier: Quantifier::Every,
    }
}

/// Starts a chain requiring at least one subject to satisfy the terminal.
pub fn any<T>(subjects: impl IntoIterator<Item = T>) -> Assertion<T> {
    Assertion {
        subjects: subjects.into_iter().collect(),
        quantifier: Quantifier::Any,
    }
}

/// Chain head produced by [`that`], [`all`], or [`any`].
pub struct Assertion<T> {
    subjects: Vec<T>,
    quantifier: Quantifier,
}

impl<T> Assertion<T> {
    /// Grammatical link for single-subject chains.
    pub fn is(self) -> Chain<T> {
        Chain {
            subjects: self.subjects,
            quantifier: self.quantifier,
            expected: true,
        }
    }

    /// Grammatical link for multi-subject chains; identical to [`Assertion::is`].
    pub fn are(self) -> Chain<T> {
        self.is()
    }
}

/// A chain ready for a terminal, carrying the expected boolean.
pub struct Chain<T> {
    subjects: Vec<T>,
    quantifier: Quantifier,
    expected: bool,
}

impl<T> Chain<T> {
    /// Inverts the expected boolean for whichever terminal ends the chain.
    pub fn not(mut self) -> Self {
        self.expected = !self.expected;
        self
    }

    /// The single evaluation point behind every terminal.
    fn check(&self, description: &str, pred: impl Fn(&T) -> bool) -> Check
    where
        T: Debug,
    {
        let observed = match self.quantifier {
            Quantifier::Every => self.subjects.iter().all(|s| pred(s)),
            Quantifier::Any => self.subjects.iter().any(|s| pred(s)),
        };
        if observed == self.expected {
            return Ok(());
        }
        let scope = if self.subjects.len() == 1 {
            "the subject"
        } else {
            match self.quantifier {
                Quantifier::Every => "every subject",
                Quantifier::Any => "any subject",
            }
        };
        let polarity = if self.expected { "" } else { "not " };
        Err(Failure::assertion(format!(
            "expected {}{} to {}, got {:?}",
            polarity, scope, description, self.subjects
        )))
    }

    /// Loose equality: any type the subject compares against.
    pub fn equal_to<U: Debug>(self, expected: U) -> Check
    where
        T: PartialEq<U> + Debug,
    {
        self.check(&format!("equal {:?}", expected), |s| *s == expected)
    }

    /// Strict equality: the subject's own type only.
    pub fn exact_to(self, expected: T) -> Check
    where
        T: PartialEq + Debug,
    {
        self.check(&format!("be exactly {:?}", expected), |s| *s == expected)
    }

    /// Loose inequality; negated counterpart of [`Chain::equal_to`].
    pub fn different_from<U: Debug>(self, expected: U) -> Check
    where
        T: PartialEq<U> + Debug,
    {
        self.check(&format!("differ from {:?}", expected), |s| *s != expected)
    }

    /// Strict inequality; negated counterpart of [`Chain::exact_to`].
    pub fn distinct_from(self, expected: T) -> Check
    where
        T: PartialEq + Debug,
    {
        self.check(&format!("be distinct from {:?}", expected), |s| {
            *s != expected
        })
    }

    pub fn greater_than<U: Debug>(self, threshold: U) -> Check
    where
        T: PartialOrd<U> + Debug,
    {
        self.check(&format!("be greater than {:?}", threshold), |s| {
            *s > threshold
        })
    }

    pub fn less_than<U: Debug>(self, threshold: U) -> Check
    where
        T: PartialOrd<U> + Debug,
    {
        self.check(&format!("be less than {:?}", threshold), |s| *s < threshold)
    }

    pub fn truthy(self) -> Check
    where
        T: Truthy + Debug,
    {
        self.check("be truthy", |s| s.truthy())
    }

    pub fn falsy(self) -> Check
    where
        T: Truthy + Debug,
    {
        self.check("be falsy", |s| !s.truthy())
    }

    /// Matches the subject's string form against a compiled regex.
    pub fn matches(self, pattern: &Regex) -> Check
    where
        T: AsRef<str> + Debug,
    {
        self.check(&format!("match /{}/", pattern.as_str()), |s| {
            pattern.is_match(s.as_ref())
        })
    }

    /// Applies a caller-supplied predicate.
    pub fn satisfies(self, pred: impl Fn(&T) -> bool) -> Check
    where
        T: Debug,
    {
        self.check("satisfy the predicate", pred)
    }
}

impl<U: Debug> Chain<Option<U>> {
    /// The subject holds a value.
    pub fn some(self) -> Check {
        self.check("hold a value", |s| s.is_some())
    }

    /// The subject is `None`.
    pub fn none(self) -> Check {
        self.check("be empty", |s| s.is_none())
    }
}

/// Truthiness for assertion subjects: zero, empty, and absent values are
/// falsy, everything else is truthy. `NaN` is falsy.
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

macro_rules! integer_truthy {
    ($($ty:ty),*) => {
        $(impl Truthy for $ty {
            fn truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

integer_truthy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for &str {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Option<T> {
    fn truthy(&self) -> bool {
        self.is_some()
    }
}

impl<T> Truthy for Vec<T> {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<'a, T> Truthy for &'a [T] {
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}
