//! Windowing of ordered catalog listings
//!
//! Controllers page through containers with an `(index, count)` pair. The
//! paginator only slices; ordering is decided by whoever produced the list.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SmapiError};
use crate::media::MediaEntity;

/// Requested sub-range of an ordered listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Window {
    pub index: usize,
    pub count: usize,
}

impl Window {
    /// Validate the signed `(index, count)` pair received on the wire
    pub fn new(index: i32, count: i32) -> Result<Self> {
        match (usize::try_from(index), usize::try_from(count)) {
            (Ok(index), Ok(count)) => Ok(Self { index, count }),
            _ => Err(SmapiError::InvalidWindow { index, count }),
        }
    }
}

/// One page of a listing plus the position it was cut from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult<T = MediaEntity> {
    pub items: Vec<T>,
    /// The requested index, echoed back even when past the end
    pub offset: usize,
    /// Length of the full listing
    pub total: usize,
}

impl<T> PageResult<T> {
    pub fn returned_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cut `window` out of `items`.
///
/// An index past the end yields an empty page, never an error.
pub fn paginate<T>(items: Vec<T>, window: Window) -> PageResult<T> {
    let total = items.len();
    let start = window.index.min(total);
    let end = start.saturating_add(window.count).min(total);

    let items = items.into_iter().skip(start).take(end - start).collect();

    PageResult {
        items,
        offset: window.index,
        total,
    }
}

/// Validate a wire `(index, count)` pair and cut it out of `items`
pub fn window<T>(items: Vec<T>, index: i32, count: i32) -> Result<PageResult<T>> {
    Ok(paginate(items, Window::new(index, count)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_inside_listing() {
        let page = window((0..10).collect(), 2, 3).unwrap();
        assert_eq!(page.items, vec![2, 3, 4]);
        assert_eq!(page.offset, 2);
        assert_eq!(page.returned_count(), 3);
        assert_eq!(page.total, 10);
    }

    #[test]
    fn test_window_truncated_at_end() {
        let page = window((0..10).collect(), 8, 100).unwrap();
        assert_eq!(page.items, vec![8, 9]);
        assert_eq!(page.total, 10);
    }

    #[test]
    fn test_index_past_end_is_empty() {
        let page = window((0..3).collect::<Vec<u32>>(), 7, 5).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.offset, 7);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn test_zero_count() {
        let page = window(vec!["a", "b"], 0, 0).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_huge_count_does_not_overflow() {
        let page = paginate(vec![1, 2, 3], Window { index: 1, count: usize::MAX });
        assert_eq!(page.items, vec![2, 3]);
    }

    #[test]
    fn test_negative_arguments_rejected() {
        assert!(matches!(
            window(vec![1], -1, 5),
            Err(SmapiError::InvalidWindow { index: -1, count: 5 })
        ));
        assert!(matches!(
            window(vec![1], 0, -5),
            Err(SmapiError::InvalidWindow { index: 0, count: -5 })
        ));
    }
}
