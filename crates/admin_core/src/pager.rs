//! Page arithmetic for the filtered view.

use std::ops::{Range, RangeInclusive};

/// `ceil(len / page_size)`; zero for an empty view.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Index range of a 1-indexed page, clamped to `len`.
///
/// Page 0 and pages past the end yield an empty range.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

pub fn paginate<T>(view: &[T], page: usize, page_size: usize) -> &[T] {
    &view[page_range(view.len(), page, page_size)]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
}

/// State of the pagination bar for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub current: usize,
    pub total: usize,
}

impl PageControls {
    pub fn new(current: usize, total: usize) -> Self {
        Self { current, total }
    }

    pub fn is_enabled(&self, nav: PageNav) -> bool {
        match nav {
            PageNav::First | PageNav::Previous => self.current != 1,
            PageNav::Next | PageNav::Last => self.current < self.total,
        }
    }

    /// Page the button leads to, or `None` while it is disabled.
    pub fn target(&self, nav: PageNav) -> Option<usize> {
        if !self.is_enabled(nav) {
            return None;
        }
        match nav {
            PageNav::First => Some(1),
            PageNav::Previous => self.current.checked_sub(1),
            PageNav::Next => Some(self.current + 1),
            PageNav::Last => Some(self.total),
        }
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total
    }

    pub fn is_current(&self, page: usize) -> bool {
        page == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_pages_with_ceiling_division() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(25, 0), 0);
    }

    #[test]
    fn page_slices_cover_the_view_exactly_once() {
        for len in [0usize, 1, 9, 10, 11, 25, 46] {
            let view: Vec<usize> = (0..len).collect();
            let pages = total_pages(len, 10);
            let mut rebuilt = Vec::new();
            for page in 1..=pages + 1 {
                let slice = paginate(&view, page, 10);
                assert!(slice.len() <= 10);
                rebuilt.extend_from_slice(slice);
            }
            assert_eq!(rebuilt, view, "len {len}");
        }
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let view: Vec<u8> = (0..25).collect();
        assert_eq!(paginate(&view, 3, 10).len(), 5);
        assert!(paginate(&view, 4, 10).is_empty());
        assert!(paginate(&view, 0, 10).is_empty());
        assert!(paginate(&view, usize::MAX, 10).is_empty());
    }

    #[test]
    fn last_button_is_disabled_only_on_the_last_page() {
        for page in 1..=3 {
            let controls = PageControls::new(page, 3);
            assert_eq!(controls.is_enabled(PageNav::Last), page != 3);
            assert_eq!(controls.is_enabled(PageNav::Next), page != 3);
            assert_eq!(controls.is_enabled(PageNav::First), page != 1);
            assert_eq!(controls.is_enabled(PageNav::Previous), page != 1);
        }
        assert_eq!(PageControls::new(2, 3).target(PageNav::Last), Some(3));
        assert_eq!(PageControls::new(2, 3).target(PageNav::Previous), Some(1));
        assert_eq!(PageControls::new(3, 3).target(PageNav::Next), None);
    }

    #[test]
    fn empty_view_has_no_page_buttons_and_inert_navigation() {
        let controls = PageControls::new(1, 0);
        assert_eq!(controls.page_numbers().count(), 0);
        for nav in [PageNav::First, PageNav::Previous, PageNav::Next, PageNav::Last] {
            assert_eq!(controls.target(nav), None, "{nav:?}");
        }
    }
}
