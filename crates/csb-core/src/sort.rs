//! Divide-and-merge sort keyed by score.
//!
//! # Ordering of equal scores
//!
//! The merge step emits a left-half element only when its score is strictly
//! less than the right-half head. On equal scores the right-half element goes
//! first, so this is **not** a stable sort: within one merge, equal-score
//! elements that came from the right half precede those from the left half.
//! `[a:1, b:1]` sorts to `[b:1, a:1]`.
//!
//! Balancing results depend on this ordering (it decides which agent of a
//! shared threshold is seen first), so do not swap in `slice::sort_by`.

use crate::model::Scored;

/// Sort `items` ascending by score into a new vector.
///
/// The input slice is left untouched. O(n log n) comparisons and O(n)
/// auxiliary space per merge level.
#[must_use]
pub fn merge_sort_by_score<T: Scored + Clone>(items: &[T]) -> Vec<T> {
    if items.len() < 2 {
        return items.to_vec();
    }

    let (left, right) = items.split_at(items.len() / 2);
    merge(merge_sort_by_score(left), merge_sort_by_score(right))
}

fn merge<T: Scored>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l.score() < r.score(),
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
