//! Safe-computation combinators over `Result`.
//!
//! `Ok`/`Err` play the success and failure slots and fallible
//! constructors return `Result` instead of panicking, so `map` and
//! `and_then` already propagate an existing failure untouched. This module
//! adds the per-element combinators used when a list of raw values has to be
//! converted one by one, e.g. raw foreign-key strings into identities.

/// Per-element combinators for a list-valued success slot.
pub trait EitherExt<T, E>: Sized {
    /// Apply `transform` to each element, stopping at the first failure.
    ///
    /// An existing failure is returned unchanged without calling
    /// `transform`.
    ///
    /// # Errors
    ///
    /// Returns the existing failure, or the first element failure.
    fn chain_each<U>(self, transform: impl FnMut(T) -> Result<U, E>) -> Result<Vec<U>, E>;

    /// Apply `transform` to every element and collect every failure.
    ///
    /// # Errors
    ///
    /// Returns all element failures in input order (or the existing failure
    /// alone) when anything failed.
    fn collect_each<U>(self, transform: impl FnMut(T) -> Result<U, E>) -> Result<Vec<U>, Vec<E>>;
}

impl<T, E> EitherExt<T, E> for Result<Vec<T>, E> {
    fn chain_each<U>(self, transform: impl FnMut(T) -> Result<U, E>) -> Result<Vec<U>, E> {
        self.and_then(|items| items.into_iter().map(transform).collect())
    }

    fn collect_each<U>(
        self,
        mut transform: impl FnMut(T) -> Result<U, E>,
    ) -> Result<Vec<U>, Vec<E>> {
        let items = self.map_err(|error| vec![error])?;
        let mut successes = Vec::with_capacity(items.len());
        let mut failures = Vec::new();
        for item in items {
            match transform(item) {
                Ok(value) => successes.push(value),
                Err(error) => failures.push(error),
            }
        }
        if failures.is_empty() {
            Ok(successes)
        } else {
            Err(failures)
        }
    }
}

#[cfg(test)]
mod tests {
    //! Combinator short-circuit and aggregation behaviour.

    use std::cell::Cell;

    use rstest::rstest;

    use super::*;

    fn parse(raw: &str) -> Result<u8, String> {
        raw.parse().map_err(|_| format!("bad {raw}"))
    }

    #[rstest]
    fn chain_each_converts_every_element() {
        let result = Ok::<_, String>(vec!["1", "2"]).chain_each(parse);
        assert_eq!(result, Ok(vec![1, 2]));
    }

    #[rstest]
    fn chain_each_stops_at_first_failure() {
        let calls = Cell::new(0);
        let result = Ok::<_, String>(vec!["x", "1", "y"]).chain_each(|raw| {
            calls.set(calls.get() + 1);
            parse(raw)
        });
        assert_eq!(result, Err("bad x".to_owned()));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn existing_failure_is_propagated_untouched() {
        let calls = Cell::new(0);
        let input: Result<Vec<&str>, String> = Err("upstream".to_owned());
        let result = input.chain_each(|raw| {
            calls.set(calls.get() + 1);
            parse(raw)
        });
        assert_eq!(result, Err("upstream".to_owned()));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn collect_each_reports_all_failures() {
        let result = Ok::<_, String>(vec!["x", "1", "y"]).collect_each(parse);
        assert_eq!(result, Err(vec!["bad x".to_owned(), "bad y".to_owned()]));
    }

    #[rstest]
    fn collect_each_keeps_successes() {
        let result = Ok::<_, String>(Vec::<&str>::new()).collect_each(parse);
        assert_eq!(result, Ok(Vec::new()));
    }
}
