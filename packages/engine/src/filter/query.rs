//! Query filter: `[?(@.path)]` and `[?(@.path <op> literal)]`
//!
//! Candidates are the direct children of each node, exactly as the wildcard
//! would produce them. A child is kept when the expression holds for it.

use std::borrow::Cow;
use std::cmp::Ordering;

use super::{FilterEvaluator, WorkingCollection};
use crate::access;
use crate::tokens::{ComparisonOp, QueryExpression};
use crate::value::{Scalar, Value};

impl<'a> FilterEvaluator<'a> {
    pub(crate) fn apply_query(
        &self,
        collection: &[Cow<'a, Value>],
        expression: &QueryExpression,
    ) -> WorkingCollection<'a> {
        collection
            .iter()
            .flat_map(access::children)
            .filter(|candidate| self.matches(candidate, expression))
            .collect()
    }

    fn matches(&self, candidate: &Cow<'a, Value>, expression: &QueryExpression) -> bool {
        match expression {
            QueryExpression::Exists(path) => {
                access::resolve_path(candidate, &path.segments, self.config())
                    .is_some_and(|value| value.is_truthy())
            }
            QueryExpression::Compare { path, op, literal } => {
                // Missing members never satisfy a comparison
                access::resolve_path(candidate, &path.segments, self.config())
                    .is_some_and(|value| compare_value(&value, *op, literal))
            }
        }
    }
}

fn compare_value(value: &Value, op: ComparisonOp, literal: &Scalar) -> bool {
    match value {
        Value::Scalar(scalar) => compare_scalar(scalar, op, literal),
        // Containers and host objects are never equal to a literal
        Value::Object(_) | Value::Array(_) | Value::Dynamic(_) => op == ComparisonOp::NotEqual,
    }
}

/// Compare two scalars
///
/// Numbers compare numerically and strings lexicographically. Booleans and
/// nulls only support equality. Values of different types are unequal and
/// unordered.
#[must_use]
pub fn compare_scalar(left: &Scalar, op: ComparisonOp, right: &Scalar) -> bool {
    let ordering = match (left, right) {
        (Scalar::Number(a), Scalar::Number(b)) => a.partial_cmp(b),
        (Scalar::String(a), Scalar::String(b)) => Some(a.cmp(b)),
        (Scalar::Bool(a), Scalar::Bool(b)) => {
            return equality(op, a == b);
        }
        (Scalar::Null, Scalar::Null) => return equality(op, true),
        _ => return equality(op, false),
    };

    match (op, ordering) {
        (_, None) => op == ComparisonOp::NotEqual,
        (ComparisonOp::Equal, Some(o)) => o == Ordering::Equal,
        (ComparisonOp::NotEqual, Some(o)) => o != Ordering::Equal,
        (ComparisonOp::Less, Some(o)) => o == Ordering::Less,
        (ComparisonOp::LessEq, Some(o)) => o != Ordering::Greater,
        (ComparisonOp::Greater, Some(o)) => o == Ordering::Greater,
        (ComparisonOp::GreaterEq, Some(o)) => o != Ordering::Less,
    }
}

#[inline]
fn equality(op: ComparisonOp, equal: bool) -> bool {
    match op {
        ComparisonOp::Equal => equal,
        ComparisonOp::NotEqual => !equal,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    fn num(n: f64) -> Scalar {
        Scalar::Number(Number::Float(n))
    }

    fn int(n: i64) -> Scalar {
        Scalar::Number(Number::Int(n))
    }

    fn text(s: &str) -> Scalar {
        Scalar::String(s.to_string())
    }

    #[test]
    fn numbers_compare_across_representations() {
        assert!(compare_scalar(&num(8.95), ComparisonOp::Less, &int(10)));
        assert!(!compare_scalar(&num(12.99), ComparisonOp::Less, &int(10)));
        assert!(compare_scalar(&int(10), ComparisonOp::LessEq, &num(10.0)));
        assert!(compare_scalar(&int(10), ComparisonOp::Equal, &num(10.0)));
    }

    #[test]
    fn strings_compare_lexicographically() {
        assert!(compare_scalar(&text("suburb"), ComparisonOp::Equal, &text("suburb")));
        assert!(compare_scalar(&text("city"), ComparisonOp::NotEqual, &text("suburb")));
        assert!(compare_scalar(&text("a"), ComparisonOp::Less, &text("b")));
    }

    #[test]
    fn mixed_types_are_unequal_and_unordered() {
        assert!(!compare_scalar(&text("10"), ComparisonOp::Equal, &int(10)));
        assert!(compare_scalar(&text("10"), ComparisonOp::NotEqual, &int(10)));
        assert!(!compare_scalar(&text("10"), ComparisonOp::Less, &int(11)));
        assert!(!compare_scalar(&Scalar::Null, ComparisonOp::GreaterEq, &int(0)));
    }

    #[test]
    fn booleans_and_nulls_support_equality_only() {
        assert!(compare_scalar(&Scalar::Bool(true), ComparisonOp::Equal, &Scalar::Bool(true)));
        assert!(!compare_scalar(&Scalar::Bool(true), ComparisonOp::Greater, &Scalar::Bool(false)));
        assert!(compare_scalar(&Scalar::Null, ComparisonOp::Equal, &Scalar::Null));
    }

    #[test]
    fn containers_only_satisfy_not_equal() {
        let array = Value::from(vec![1]);
        assert!(compare_value(&array, ComparisonOp::NotEqual, &int(1)));
        assert!(!compare_value(&array, ComparisonOp::Equal, &int(1)));
    }
}
