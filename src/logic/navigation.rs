//! Navigation selection logic
//!
//! Pure functions for calculating selection indices: wrapping cursor
//! movement and contiguous range walks.

/// Calculate the next selection index with wrapping
///
/// Advances the selection to the next item in the list. If at the end,
/// wraps around to the beginning. If no item is selected, selects the first item.
///
/// # Examples
/// ```
/// use project_browser::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0, // Wrap to start
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// # Examples
/// ```
/// use project_browser::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1, // Wrap to end
        Some(i) => i.min(list_len) - 1,
    })
}

/// Indices visited walking from `from` to `to`, both ends included
///
/// The direction follows the comparison of the two indices, so the walk
/// order is also the order in which a range selection adds items.
///
/// # Examples
/// ```
/// use project_browser::logic::navigation::range_walk;
///
/// assert_eq!(range_walk(1, 3), vec![1, 2, 3]);
/// assert_eq!(range_walk(3, 1), vec![3, 2, 1]);
/// assert_eq!(range_walk(2, 2), vec![2]);
/// ```
pub fn range_walk(from: usize, to: usize) -> Vec<usize> {
    if from <= to {
        (from..=to).collect()
    } else {
        (to..=from).rev().collect()
    }
}
