// SPDX-License-Identifier: MPL-2.0
//! Page index and horizontal swipe state of the paged viewer.
//!
//! Pages are laid out side by side, one container width apart. The strip
//! offset is the horizontal displacement of the current page; neighbours sit
//! at `offset ± width`.

use std::time::Duration;

/// Fraction of the container width a swipe must cross to change page.
pub const PAGE_SWIPE_FRACTION: f32 = 0.25;

/// A release this soon after the pan started counts as a fling.
pub const FLING_WINDOW: Duration = Duration::from_millis(250);

/// Minimum horizontal travel of a fling.
pub const FLING_DISTANCE: f32 = 40.0;

/// Drag damping applied when there is no page in the drag direction.
pub const EDGE_RESISTANCE: f32 = 0.35;

/// A page that exists in the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: usize,
    /// Position relative to the current page (`-1` previous, `1` next).
    pub slot: isize,
}

/// Outcome of releasing a swipe or stepping with the keyboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// The current page is unchanged; animate the strip from `from_offset` to 0.
    Stay { from_offset: f32 },
    /// The pager moved to `index`; animate the strip from `from_offset` to 0.
    Moved { index: usize, from_offset: f32 },
}

impl Release {
    #[must_use]
    pub fn from_offset(self) -> f32 {
        match self {
            Release::Stay { from_offset } | Release::Moved { from_offset, .. } => from_offset,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pager {
    len: usize,
    index: usize,
    drag_offset: f32,
}

impl Pager {
    /// Creates a pager over `len` images starting at `index` (clamped).
    #[must_use]
    pub fn new(len: usize, index: usize) -> Self {
        Self {
            len,
            index: index.min(len.saturating_sub(1)),
            drag_offset: 0.0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the page at `index`, or `None` when out of range.
    #[must_use]
    pub fn page(&self, index: usize) -> Option<Page> {
        (index < self.len).then(|| Page {
            index,
            slot: index as isize - self.index as isize,
        })
    }

    /// Current page and the neighbours that exist.
    pub fn visible_pages(&self) -> impl Iterator<Item = Page> + '_ {
        let first = self.index.saturating_sub(1);
        (first..=self.index + 1).filter_map(|index| self.page(index))
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len
    }

    /// Current horizontal swipe displacement.
    #[must_use]
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    /// Follows a horizontal swipe. Dragging toward a missing page is damped.
    pub fn drag(&mut self, translation_x: f32) {
        if !translation_x.is_finite() {
            return;
        }
        let toward_missing = (translation_x > 0.0 && !self.has_previous())
            || (translation_x < 0.0 && !self.has_next());
        self.drag_offset = if toward_missing {
            translation_x * EDGE_RESISTANCE
        } else {
            translation_x
        };
    }

    /// Abandons the swipe without changing page.
    pub fn cancel_drag(&mut self) -> Release {
        let from_offset = std::mem::take(&mut self.drag_offset);
        Release::Stay { from_offset }
    }

    /// Ends a swipe that travelled `translation_x` in `elapsed`.
    ///
    /// Moves to the neighbouring page when the swipe crossed a quarter of
    /// `page_width` or was a fling, and that neighbour exists.
    pub fn release(&mut self, translation_x: f32, elapsed: Duration, page_width: f32) -> Release {
        let from_offset = std::mem::take(&mut self.drag_offset);
        if !translation_x.is_finite() || page_width <= 0.0 {
            return Release::Stay { from_offset };
        }

        let crossed = translation_x.abs() > page_width * PAGE_SWIPE_FRACTION;
        let fling = elapsed <= FLING_WINDOW && translation_x.abs() >= FLING_DISTANCE;
        if !(crossed || fling) {
            return Release::Stay { from_offset };
        }

        let forward = translation_x < 0.0;
        match self.move_by(forward) {
            Some(index) => Release::Moved {
                index,
                from_offset: from_offset + direction(forward) * page_width,
            },
            None => Release::Stay { from_offset },
        }
    }

    /// Keyboard paging. Returns `None` when there is no page in that direction.
    pub fn step(&mut self, forward: bool, page_width: f32) -> Option<Release> {
        if self.drag_offset != 0.0 {
            return None;
        }
        self.move_by(forward).map(|index| Release::Moved {
            index,
            from_offset: direction(forward) * page_width.max(0.0),
        })
    }

    fn move_by(&mut self, forward: bool) -> Option<usize> {
        let target = if forward {
            self.has_next().then(|| self.index + 1)
        } else {
            self.has_previous().then(|| self.index - 1)
        }?;
        self.index = target;
        Some(target)
    }
}

fn direction(forward: bool) -> f32 {
    if forward {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const WIDTH: f32 = 400.0;
    const SLOW: Duration = Duration::from_millis(600);

    #[test]
    fn page_out_of_range_is_none() {
        let pager = Pager::new(12, 2);
        assert_eq!(pager.page(12), None);
        assert_eq!(pager.page(100), None);
        assert_eq!(pager.page(3), Some(Page { index: 3, slot: 1 }));
        assert_eq!(pager.page(0), Some(Page { index: 0, slot: -2 }));
    }

    #[test]
    fn initial_index_is_clamped() {
        assert_eq!(Pager::new(3, 10).index(), 2);
        assert_eq!(Pager::new(0, 4).index(), 0);
        assert!(Pager::new(0, 0).page(0).is_none());
    }

    #[test]
    fn visible_pages_include_existing_neighbours() {
        let first: Vec<usize> = Pager::new(5, 0).visible_pages().map(|p| p.index).collect();
        assert_eq!(first, vec![0, 1]);

        let middle: Vec<usize> = Pager::new(5, 2).visible_pages().map(|p| p.index).collect();
        assert_eq!(middle, vec![1, 2, 3]);
    }

    #[test]
    fn long_swipe_moves_to_next_page() {
        let mut pager = Pager::new(5, 1);
        pager.drag(-150.0);
        let release = pager.release(-150.0, SLOW, WIDTH);

        assert_eq!(pager.index(), 2);
        match release {
            Release::Moved { index, from_offset } => {
                assert_eq!(index, 2);
                assert_abs_diff_eq!(from_offset, WIDTH - 150.0);
            }
            other => panic!("expected a page change, got {:?}", other),
        }
        assert_eq!(pager.drag_offset(), 0.0);
    }

    #[test]
    fn short_slow_swipe_springs_back() {
        let mut pager = Pager::new(5, 1);
        pager.drag(60.0);
        let release = pager.release(60.0, SLOW, WIDTH);

        assert_eq!(pager.index(), 1);
        assert_eq!(release, Release::Stay { from_offset: 60.0 });
    }

    #[test]
    fn fling_moves_to_previous_page() {
        let mut pager = Pager::new(5, 3);
        pager.drag(50.0);
        let release = pager.release(50.0, Duration::from_millis(120), WIDTH);

        assert_eq!(pager.index(), 2);
        assert_eq!(
            release,
            Release::Moved {
                index: 2,
                from_offset: 50.0 - WIDTH
            }
        );
    }

    #[test]
    fn swiping_past_either_end_springs_back() {
        let mut first = Pager::new(3, 0);
        first.drag(300.0);
        assert_abs_diff_eq!(first.drag_offset(), 300.0 * EDGE_RESISTANCE);
        assert!(matches!(
            first.release(300.0, SLOW, WIDTH),
            Release::Stay { .. }
        ));
        assert_eq!(first.index(), 0);

        let mut last = Pager::new(3, 2);
        last.drag(-300.0);
        assert!(matches!(
            last.release(-300.0, SLOW, WIDTH),
            Release::Stay { .. }
        ));
        assert_eq!(last.index(), 2);
    }

    #[test]
    fn keyboard_steps_respect_bounds() {
        let mut pager = Pager::new(2, 0);
        assert!(pager.step(false, WIDTH).is_none());
        assert_eq!(
            pager.step(true, WIDTH),
            Some(Release::Moved {
                index: 1,
                from_offset: WIDTH
            })
        );
        assert!(pager.step(true, WIDTH).is_none());
    }

    #[test]
    fn cancel_drag_returns_to_current_page() {
        let mut pager = Pager::new(4, 1);
        pager.drag(-90.0);
        assert_eq!(pager.cancel_drag(), Release::Stay { from_offset: -90.0 });
        assert_eq!(pager.index(), 1);
    }
}
