use crate::{
    expr::{Connective, Predicate, combine},
    shape::Shaped,
};
use thiserror::Error as ThisError;

///
/// CriteriaError
///
/// Combining against an accumulator that holds nothing is caller misuse,
/// reported immediately rather than defaulted away.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum CriteriaError {
    #[error("criteria holds no accumulated predicate")]
    Empty,
}

///
/// Criteria
///
/// Append-only accumulator of predicate fragments for one shape. Each
/// added fragment narrows the result by AND; fragments can never be
/// removed, and addition order does not change what the accumulated
/// predicate matches.
///
/// The accumulator is an immutable builder value: `with` consumes and
/// returns, so there is no hidden state and no interior mutability to
/// serialize across threads.
///

pub struct Criteria<T: Shaped> {
    accumulated: Option<Predicate<T>>,
}

impl<T: Shaped> Clone for Criteria<T> {
    fn clone(&self) -> Self {
        Self {
            accumulated: self.accumulated.clone(),
        }
    }
}

impl<T: Shaped> std::fmt::Debug for Criteria<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Criteria")
            .field("accumulated", &self.accumulated)
            .finish()
    }
}

impl<T: Shaped> PartialEq for Criteria<T> {
    fn eq(&self, other: &Self) -> bool {
        self.accumulated == other.accumulated
    }
}

impl<T: Shaped> Eq for Criteria<T> {}

impl<T: Shaped> Criteria<T> {
    /// An accumulator holding nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self { accumulated: None }
    }

    /// Add one fragment, AND-ing it onto whatever is already held.
    #[must_use]
    pub fn with(self, fragment: Predicate<T>) -> Self {
        let accumulated = match self.accumulated {
            None => fragment,
            Some(current) => combine(Connective::And, &current, &fragment),
        };

        Self {
            accumulated: Some(accumulated),
        }
    }

    /// The accumulated predicate, or `None` while nothing has been added.
    ///
    /// Absence is explicit: callers decide what an empty criteria means
    /// (commonly match-everything); nothing is substituted here.
    #[must_use]
    pub const fn as_predicate(&self) -> Option<&Predicate<T>> {
        self.accumulated.as_ref()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.accumulated.is_none()
    }

    /// Combine this criteria with another under a logical AND.
    ///
    /// Pure: neither operand changes. Both operands must hold an
    /// accumulated predicate.
    pub fn and(&self, other: &Self) -> Result<Predicate<T>, CriteriaError> {
        self.join(Connective::And, other)
    }

    /// Combine this criteria with another under a logical OR.
    ///
    /// Pure: neither operand changes. Both operands must hold an
    /// accumulated predicate.
    pub fn or(&self, other: &Self) -> Result<Predicate<T>, CriteriaError> {
        self.join(Connective::Or, other)
    }

    fn join(&self, op: Connective, other: &Self) -> Result<Predicate<T>, CriteriaError> {
        let left = self.as_predicate().ok_or(CriteriaError::Empty)?;
        let right = other.as_predicate().ok_or(CriteriaError::Empty)?;

        Ok(combine(op, left, right))
    }
}

impl<T: Shaped> Default for Criteria<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Shaped> From<Predicate<T>> for Criteria<T> {
    fn from(predicate: Predicate<T>) -> Self {
        Self::new().with(predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::Customer;

    fn adult() -> Predicate<Customer> {
        Predicate::build(|c| c.field("age").gte(18))
    }

    fn named_ada() -> Predicate<Customer> {
        Predicate::build(|c| c.field("name").eq("ada"))
    }

    fn active() -> Predicate<Customer> {
        Predicate::build(|c| c.field("active").eq(true))
    }

    #[test]
    fn empty_holds_nothing() {
        let criteria = Criteria::<Customer>::new();

        assert!(criteria.is_empty());
        assert!(criteria.as_predicate().is_none());
    }

    #[test]
    fn combining_empty_is_an_error() {
        let empty = Criteria::<Customer>::new();
        let filled = Criteria::from(adult());

        assert_eq!(empty.and(&filled), Err(CriteriaError::Empty));
        assert_eq!(filled.and(&empty), Err(CriteriaError::Empty));
        assert_eq!(empty.or(&empty), Err(CriteriaError::Empty));
    }

    #[test]
    fn fragments_accumulate_by_and() {
        let criteria = Criteria::new().with(adult()).with(named_ada()).with(active());
        let predicate = criteria.as_predicate().unwrap();

        let ada = Customer::new(20, "ada", true);
        assert!(predicate.matches(&ada));
        assert!(!predicate.matches(&Customer::new(20, "ada", false)));
        assert!(!predicate.matches(&Customer::new(20, "bob", true)));
        assert!(!predicate.matches(&Customer::new(10, "ada", true)));
    }

    #[test]
    fn addition_order_is_irrelevant_to_matching() {
        let rows = [
            Customer::new(20, "ada", true),
            Customer::new(20, "bob", true),
            Customer::new(10, "ada", false),
        ];

        let forward = Criteria::new().with(adult()).with(named_ada());
        let backward = Criteria::new().with(named_ada()).with(adult());

        for row in &rows {
            assert_eq!(
                forward.as_predicate().unwrap().matches(row),
                backward.as_predicate().unwrap().matches(row),
            );
        }
    }

    #[test]
    fn and_or_leave_operands_unchanged() {
        let left = Criteria::from(adult());
        let right = Criteria::from(named_ada());

        let before_left = left.clone();
        let before_right = right.clone();

        let _ = left.and(&right).unwrap();
        let _ = left.or(&right).unwrap();

        assert_eq!(left, before_left);
        assert_eq!(right, before_right);
    }

    #[test]
    fn and_or_combine_accumulated_predicates() {
        let adults = Criteria::from(adult());
        let adas = Criteria::from(named_ada());

        let both = adults.and(&adas).unwrap();
        let either = adults.or(&adas).unwrap();

        let young_ada = Customer::new(10, "ada", true);
        let adult_bob = Customer::new(30, "bob", true);

        assert!(!both.matches(&young_ada));
        assert!(!both.matches(&adult_bob));
        assert!(either.matches(&young_ada));
        assert!(either.matches(&adult_bob));
    }
}
