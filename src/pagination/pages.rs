use serde::Serialize;

/// One entry of a page-number bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageLink {
    Page(u32),
    Ellipsis,
}

/// Page numbers to display for `(current, total)`.
///
/// Always shows the first and last page and a window of one page on either
/// side of `current`; every gap between shown pages becomes one ellipsis.
/// `current` is clamped into `1..=total`. Returns nothing when `total` is 0.
pub fn page_window(current: u32, total: u32) -> Vec<PageLink> {
    if total == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, total);
    let mut shown = vec![1, total];
    shown.extend((current.saturating_sub(1).max(1))..=current.saturating_add(1).min(total));
    shown.sort_unstable();
    shown.dedup();

    let mut links = Vec::with_capacity(shown.len() * 2);
    let mut previous: u32 = 0;
    for page in shown {
        if page > previous.saturating_add(1) {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page(page));
        previous = page;
    }
    links
}

#[cfg(test)]
mod tests {
    use super::PageLink::{Ellipsis, Page};
    use super::*;

    #[test]
    fn empty_when_no_pages() {
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn single_page() {
        assert_eq!(page_window(1, 1), vec![Page(1)]);
    }

    #[test]
    fn small_totals_have_no_ellipsis() {
        assert_eq!(page_window(2, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn middle_page_has_ellipses_on_both_sides() {
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn first_page_window() {
        assert_eq!(page_window(1, 10), vec![Page(1), Page(2), Ellipsis, Page(10)]);
    }

    #[test]
    fn last_page_window() {
        assert_eq!(page_window(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
    }

    #[test]
    fn single_gap_still_uses_ellipsis() {
        assert_eq!(
            page_window(4, 5),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn last_page_of_largest_total_does_not_overflow() {
        assert_eq!(
            page_window(u32::MAX, u32::MAX),
            vec![Page(1), Ellipsis, Page(u32::MAX - 1), Page(u32::MAX)]
        );
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(page_window(99, 3), page_window(3, 3));
        assert_eq!(page_window(0, 3), page_window(1, 3));
    }
}
