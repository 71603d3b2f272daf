//! Array filters: index lists and slices
//!
//! Both only apply to array nodes. Out-of-range positions are skipped rather
//! than reported.

use std::borrow::Cow;

use super::{FilterEvaluator, WorkingCollection};
use crate::access;
use crate::tokens::PathKey;
use crate::value::Value;

impl<'a> FilterEvaluator<'a> {
    /// `[i]`, `[i,j,...]`; indices are resolved in request order
    pub(crate) fn apply_index(
        &self,
        collection: &[Cow<'a, Value>],
        indices: &[i64],
    ) -> WorkingCollection<'a> {
        collection
            .iter()
            .filter(|node| node.as_array().is_some())
            .flat_map(|node| {
                indices.iter().filter_map(move |&index| {
                    access::child(node, &PathKey::Index(index), self.config())
                })
            })
            .collect()
    }

    /// `[start:end:step]`
    pub(crate) fn apply_slice(
        &self,
        collection: &[Cow<'a, Value>],
        start: Option<i64>,
        end: Option<i64>,
        step: Option<i64>,
    ) -> WorkingCollection<'a> {
        let mut results = Vec::new();
        for node in collection {
            let Some(items) = node.as_array() else {
                continue;
            };
            for position in slice_positions(items.len(), start, end, step) {
                let Ok(index) = i64::try_from(position) else {
                    break;
                };
                if let Some(item) = access::child(node, &PathKey::Index(index), self.config()) {
                    results.push(item);
                }
            }
        }
        results
    }
}

/// Positions selected by a slice over an array of `len` elements
///
/// Negative bounds count from the end; bounds are clamped into `[0, len]`.
/// Missing start is 0, missing end is `len`, missing step is 1. Non-positive
/// steps select nothing.
#[must_use]
pub fn slice_positions(
    len: usize,
    start: Option<i64>,
    end: Option<i64>,
    step: Option<i64>,
) -> Vec<usize> {
    let Ok(len_i) = i64::try_from(len) else {
        return Vec::new();
    };
    let normalize = |bound: i64| -> usize {
        let clamped = if bound < 0 {
            (len_i + bound).max(0)
        } else {
            bound.min(len_i)
        };
        usize::try_from(clamped).unwrap_or(0)
    };

    let step = match step.unwrap_or(1) {
        s if s > 0 => usize::try_from(s).unwrap_or(usize::MAX),
        _ => return Vec::new(),
    };
    let start = start.map_or(0, normalize);
    let end = end.map_or(len, normalize);

    (start..end).step_by(step).collect()
}

#[cfg(test)]
mod tests {
    use super::slice_positions;

    #[test]
    fn full_slice_selects_everything() {
        assert_eq!(slice_positions(4, None, None, None), vec![0, 1, 2, 3]);
    }

    #[test]
    fn step_skips_elements() {
        assert_eq!(slice_positions(4, Some(1), None, Some(2)), vec![1, 3]);
        assert_eq!(slice_positions(5, None, None, Some(2)), vec![0, 2, 4]);
    }

    #[test]
    fn negative_bounds_count_from_end() {
        assert_eq!(slice_positions(4, None, Some(-2), None), vec![0, 1]);
        assert_eq!(slice_positions(4, Some(-1), None, None), vec![3]);
        assert_eq!(slice_positions(4, Some(-10), Some(1), None), vec![0]);
    }

    #[test]
    fn end_is_exclusive_and_clamped() {
        assert_eq!(slice_positions(4, Some(0), Some(2), Some(1)), vec![0, 1]);
        assert_eq!(slice_positions(4, Some(2), Some(100), None), vec![2, 3]);
        assert!(slice_positions(4, Some(3), Some(1), None).is_empty());
        assert!(slice_positions(0, None, None, None).is_empty());
    }

    #[test]
    fn non_positive_step_selects_nothing() {
        assert!(slice_positions(4, None, None, Some(0)).is_empty());
        assert!(slice_positions(4, None, None, Some(-1)).is_empty());
    }
}
