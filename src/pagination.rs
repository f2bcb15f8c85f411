//! Client-driven pagination for the news list.
//!
//! The cursor is a plain value owned by the caller (app state), not ambient
//! session state, so the arithmetic is testable without a UI harness. The
//! only mutation is [`Cursor::advance`], triggered by an explicit
//! "load more" action; a refresh re-fetches entries but leaves the cursor
//! alone.

/// Entries revealed on first render.
pub const INITIAL_VISIBLE: usize = 20;

/// Entries added per "load more" press.
pub const PAGE_INCREMENT: usize = 20;

/// Count of entries currently revealed to the user.
///
/// Invariants: non-negative (by type), monotonically non-decreasing within a
/// session. Advancing past the total is harmless — display clamps via
/// [`Cursor::visible_count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    visible: usize,
    step: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(INITIAL_VISIBLE)
    }
}

impl Cursor {
    /// Create a cursor revealing `page_size` entries initially, with the
    /// same increment per advance. `page_size` of 0 falls back to the
    /// default so a bad config value can't produce an empty first page.
    pub fn new(page_size: usize) -> Self {
        let step = if page_size == 0 {
            INITIAL_VISIBLE
        } else {
            page_size
        };
        Self {
            visible: step,
            step,
        }
    }

    /// Reveal one more page. Saturating, so a pathological number of
    /// presses can't wrap.
    #[must_use]
    pub fn advance(self) -> Self {
        Self {
            visible: self.visible.saturating_add(self.step),
            ..self
        }
    }

    /// How many of `total` entries are visible: `min(cursor, total)`.
    pub fn visible_count(&self, total: usize) -> usize {
        self.visible.min(total)
    }

    /// True once everything is shown; the "load more" control hides.
    pub fn exhausted(&self, total: usize) -> bool {
        self.visible >= total
    }

    /// Raw cursor position (may exceed the current total).
    pub fn position(&self) -> usize {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_reveals_twenty() {
        let cursor = Cursor::default();
        assert_eq!(cursor.position(), 20);
    }

    #[test]
    fn test_advance_adds_twenty() {
        let cursor = Cursor::default();
        assert_eq!(cursor.advance().position(), 40);
        assert_eq!(cursor.advance().advance().position(), 60);
    }

    #[test]
    fn test_advance_does_not_mutate_original() {
        // Rendering without "load more" never changes the cursor.
        let cursor = Cursor::default();
        let _ = cursor.advance();
        assert_eq!(cursor.position(), 20);
    }

    #[test]
    fn test_visible_count_clamps_to_total() {
        let cursor = Cursor::default();
        assert_eq!(cursor.visible_count(45), 20);
        assert_eq!(cursor.visible_count(5), 5);
        assert_eq!(cursor.visible_count(0), 0);
    }

    #[test]
    fn test_zero_page_size_falls_back_to_default() {
        let cursor = Cursor::new(0);
        assert_eq!(cursor.position(), INITIAL_VISIBLE);
        assert_eq!(cursor.advance().position(), INITIAL_VISIBLE * 2);
    }

    #[test]
    fn test_load_more_scenario_45_entries() {
        // 45 entries: 20 -> 40 -> 45 (clamped), then the control disappears.
        let total = 45;
        let cursor = Cursor::default();
        assert_eq!(cursor.visible_count(total), 20);
        assert!(!cursor.exhausted(total));

        let cursor = cursor.advance();
        assert_eq!(cursor.visible_count(total), 40);
        assert!(!cursor.exhausted(total));

        let cursor = cursor.advance();
        assert_eq!(cursor.position(), 60);
        assert_eq!(cursor.visible_count(total), 45);
        assert!(cursor.exhausted(total));
    }

    #[test]
    fn test_exhausted_when_total_fits_first_page() {
        let cursor = Cursor::default();
        assert!(cursor.exhausted(20));
        assert!(cursor.exhausted(3));
        assert!(cursor.exhausted(0));
        assert!(!cursor.exhausted(21));
    }

    #[test]
    fn test_advance_saturates() {
        let mut cursor = Cursor::new(usize::MAX);
        cursor = cursor.advance();
        assert_eq!(cursor.position(), usize::MAX);
    }

    proptest! {
        #[test]
        fn prop_visible_never_exceeds_total(total in 0usize..10_000, presses in 0usize..50) {
            let mut cursor = Cursor::default();
            for _ in 0..presses {
                cursor = cursor.advance();
            }
            prop_assert!(cursor.visible_count(total) <= total);
        }

        #[test]
        fn prop_advance_is_monotone(page in 1usize..1_000, presses in 0usize..50) {
            let mut cursor = Cursor::new(page);
            let mut prev = cursor.position();
            for _ in 0..presses {
                cursor = cursor.advance();
                prop_assert!(cursor.position() >= prev);
                prev = cursor.position();
            }
        }

        #[test]
        fn prop_exhausted_matches_visible_count(total in 0usize..10_000, presses in 0usize..50) {
            let mut cursor = Cursor::default();
            for _ in 0..presses {
                cursor = cursor.advance();
            }
            prop_assert_eq!(cursor.exhausted(total), cursor.visible_count(total) == total);
        }
    }
}
