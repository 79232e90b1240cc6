//! Fluent assertion chain tests: terminals, negation, quantifiers, and the
//! vacuous-truth edge cases.

use attest::{all, any, that, FailureKind};
use regex::Regex;

mod comparisons {
    use super::*;

    #[test]
    fn equality_terminals() {
        assert!(that(5).is().equal_to(5).is_ok());
        assert!(that(5).is().equal_to(6).is_err());
        assert!(that(5).is().not().equal_to(6).is_ok());
        assert!(that(5).is().exact_to(5).is_ok());
        assert!(that(5).is().exact_to(6).is_err());
    }

    #[test]
    fn loose_equality_accepts_cross_type_comparisons() {
        // String vs &str compiles under equal_to; exact_to would demand a
        // String on both sides.
        assert!(that(String::from("5")).is().equal_to("5").is_ok());
        assert!(that(String::from("5")).is().exact_to(String::from("5")).is_ok());
    }

    #[test]
    fn inequality_terminals() {
        assert!(that(5).is().different_from(6).is_ok());
        assert!(that(5).is().different_from(5).is_err());
        assert!(that("a").is().distinct_from("b").is_ok());
        assert!(that("a").is().not().distinct_from("a").is_ok());
    }

    #[test]
    fn ordering_terminals() {
        assert!(that(5).is().greater_than(4).is_ok());
        assert!(that(5).is().less_than(6).is_ok());
        assert!(that(5).is().greater_than(5).is_err());
        assert!(that(5).is().not().less_than(5).is_ok());
        assert!(that(1.5).is().greater_than(1.0).is_ok());
    }
}

mod quantifiers {
    use super::*;

    #[test]
    fn all_requires_every_subject() {
        assert!(all([2, 4, 6]).are().satisfies(|n| n % 2 == 0).is_ok());
        assert!(all([2, 3, 6]).are().satisfies(|n| n % 2 == 0).is_err());
    }

    #[test]
    fn any_requires_one_subject() {
        assert!(any([1, 3, 6]).are().satisfies(|n| n % 2 == 0).is_ok());
        assert!(any([1, 3, 5]).are().satisfies(|n| n % 2 == 0).is_err());
    }

    #[test]
    fn empty_all_is_vacuously_true() {
        assert!(all(Vec::<i32>::new()).are().equal_to(42).is_ok());
        assert!(all(Vec::<i32>::new()).are().satisfies(|_| false).is_ok());
    }

    #[test]
    fn empty_any_is_vacuously_false() {
        assert!(any(Vec::<i32>::new()).are().equal_to(42).is_err());
        assert!(any(Vec::<i32>::new()).are().satisfies(|_| true).is_err());
    }

    #[test]
    fn single_subject_is_the_degenerate_all() {
        assert!(that(3).is().greater_than(2).is_ok());
        assert!(all([3]).are().greater_than(2).is_ok());
    }
}

mod shapes {
    use super::*;

    #[test]
    fn truthiness_terminals() {
        assert!(that(true).is().truthy().is_ok());
        assert!(that(false).is().falsy().is_ok());
        assert!(that(false).is().not().truthy().is_ok());
        assert!(all(["a", "b"]).are().truthy().is_ok());
        assert!(any(["", "b"]).are().falsy().is_ok());
    }

    #[test]
    fn option_terminals() {
        assert!(that(Some(3)).is().some().is_ok());
        assert!(that(None::<i32>).is().none().is_ok());
        assert!(that(Some(3)).is().not().none().is_ok());
        assert!(that(None::<i32>).is().some().is_err());
        assert!(all([Some(1), Some(2)]).are().some().is_ok());
    }
}

mod patterns {
    use super::*;

    #[test]
    fn regex_matching() {
        let semver = Regex::new(r"^\d+\.\d+\.\d+$").unwrap();
        assert!(that("1.2.3").is().matches(&semver).is_ok());
        assert!(that("1.2").is().matches(&semver).is_err());
        assert!(that("one.two").is().not().matches(&semver).is_ok());
        assert!(all(["0.1.0", "2.0.11"]).are().matches(&semver).is_ok());
    }

    #[test]
    fn custom_predicates() {
        assert!(that("seven").is().satisfies(|s| s.len() == 5).is_ok());
        assert!(that(10).is().not().satisfies(|n| *n < 0).is_ok());
    }
}

mod failure_signal {
    use super::*;

    #[test]
    fn a_failed_terminal_raises_an_assertion_failure() {
        let err = that(5).is().equal_to(6).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Assertion);
        assert!(err.message().contains("equal 6"));
        assert!(err.message().contains("[5]"));
    }

    #[test]
    fn a_passing_terminal_returns_unit() {
        // success has no observable side effect beyond returning control
        that(5).is().equal_to(5).unwrap();
    }

    #[test]
    fn chains_compose_with_question_mark() {
        fn body() -> attest::Check {
            that(2).is().less_than(3)?;
            all([1, 2, 3]).are().greater_than(0)?;
            Ok(())
        }
        assert!(body().is_ok());
    }
}
