//! Composite aggregation of cases and nested suites.

use crate::outcome::Outcome;

/// The capability every runnable container exposes to an aggregator or
/// reporter: a name, a run yielding an overall verdict, and the flattened
/// outcome list.
pub trait Runnable {
    fn name(&self) -> &str;

    /// Runs every owned fixture or child unconditionally, in declaration
    /// order; true iff nothing failed.
    fn run(&mut self) -> bool;

    /// Flattened outcomes, path-qualified with this container's name.
    fn results(&self) -> Vec<Outcome>;
}

/// A named composite of [`Case`](crate::Case)s and/or nested suites.
pub struct Suite {
    name: String,
    children: Vec<Box<dyn Runnable>>,
}

impl Suite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Adds a child container. Membership is idempotent by name: adding a
    /// second child with an existing name is a no-op, which keeps every
    /// result path unique within one run.
    pub fn add(&mut self, child: impl Runnable + 'static) -> &mut Self {
        if self.children.iter().any(|c| c.name() == child.name()) {
            return self;
        }
        self.children.push(Box::new(child));
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Runnable for Suite {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&mut self) -> bool {
        let mut ok = true;
        for child in &mut self.children {
            // no short-circuit: a complete result set per run
            ok &= child.run();
        }
        ok
    }

    fn results(&self) -> Vec<Outcome> {
        let mut collected = Vec::new();
        for child in &self.children {
            for mut outcome in child.results() {
                outcome.qualify(&self.name);
                collected.push(outcome);
            }
        }
        collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::Case;
    use crate::error::Check;

    fn noop() -> Check {
        Ok(())
    }

    #[test]
    fn add_is_idempotent_by_name() {
        let mut suite = Suite::new("Suite");
        let mut first = Case::new("MathCase");
        first.test("checksTrue", noop);
        let mut second = Case::new("MathCase");
        second.test("shadowed", noop);

        suite.add(first);
        suite.add(second);
        assert_eq!(suite.len(), 1);

        suite.run();
        let paths: Vec<_> = suite.results().iter().map(|o| o.path().to_string()).collect();
        assert_eq!(paths, vec!["Suite.MathCase.checksTrue"]);
    }

    #[test]
    fn results_qualify_outermost_first() {
        let mut math = Case::new("MathCase");
        math.test("checksTrue", noop);

        let mut inner = Suite::new("Inner");
        inner.add(math);
        let mut suite = Suite::new("Suite");
        suite.add(inner);

        suite.run();
        let results = suite.results();
        assert_eq!(results[0].path(), "Suite.Inner.MathCase.checksTrue");
    }
}
