// src/app/pagination.rs — sliding window of page numbers around the current page.

/// Number of page controls shown at a time.
pub const VISIBLE_PAGES: u32 = 7;

/// Seven consecutive page numbers starting at `max(1, current - 3)`.
/// No upper clamp: total page count is not tracked here, and Next stays
/// clickable past the last page (preserved behavior, see DESIGN.md).
pub fn page_window(current: u32) -> Vec<u32> {
    let start = current
        .saturating_sub(VISIBLE_PAGES / 2)
        .clamp(1, u32::MAX - (VISIBLE_PAGES - 1));
    (start..=start + (VISIBLE_PAGES - 1)).collect()
}

pub fn prev_enabled(current: u32) -> bool {
    current > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_near_the_start_is_anchored_at_one() {
        assert_eq!(page_window(1), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(page_window(2), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(page_window(4), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(page_window(5), vec![2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn window_is_centered_once_clear_of_the_start() {
        assert_eq!(page_window(10), vec![7, 8, 9, 10, 11, 12, 13]);
        assert_eq!(page_window(500), vec![497, 498, 499, 500, 501, 502, 503]);
    }

    #[test]
    fn window_always_contains_current_with_seven_entries() {
        for current in 1..200 {
            let w = page_window(current);
            assert_eq!(w.len(), VISIBLE_PAGES as usize);
            assert!(w.contains(&current), "window misses page {current}");
            assert!(w[0] >= 1);
            // consecutive run
            for pair in w.windows(2) {
                assert_eq!(pair[1], pair[0] + 1);
            }
        }
    }

    #[test]
    fn window_saturates_near_u32_max() {
        let w = page_window(u32::MAX);
        assert_eq!(w.len(), VISIBLE_PAGES as usize);
        assert!(w.contains(&u32::MAX));
        assert_eq!(w[0], u32::MAX - (VISIBLE_PAGES - 1));
        for pair in w.windows(2) {
            assert_eq!(pair[1], pair[0] + 1);
        }
    }

    #[test]
    fn prev_disabled_exactly_on_page_one() {
        assert!(!prev_enabled(1));
        for current in 2..50 {
            assert!(prev_enabled(current));
        }
    }
}
