//! # Navigation
//!
//! The slide cursor. `Navigator` owns the current index and is the only thing
//! that ever writes it.
//!
//! ```text
//!   previous()          next()
//!  ◄──────────  [ 0 .. current .. len-1 ]  ──────────►
//!   saturates at 0                 saturates at len-1
//! ```
//!
//! Moving past either end is a no-op, not an error: every operation reports
//! whether the index actually changed and callers decide what to do with that.

/// Bounded cursor over a deck of `len` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    len: usize,
}

impl Navigator {
    /// Start at the first slide. A zero length is treated as one so the index
    /// range is never empty; `Deck::new` already refuses empty decks.
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len: len.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false, see [`Navigator::new`].
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.len
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    /// Advance one slide. Returns false at the last slide.
    pub fn next(&mut self) -> bool {
        if self.can_go_next() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Step back one slide. Returns false at the first slide.
    pub fn previous(&mut self) -> bool {
        if self.can_go_previous() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a 0-based index. Out-of-range indices leave the cursor alone.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len && index != self.current {
            self.current = index;
            true
        } else {
            false
        }
    }

    pub fn first(&mut self) -> bool {
        self.go_to(0)
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.len - 1)
    }

    /// 1-based `(slide, total)` for display.
    pub fn position(&self) -> (usize, usize) {
        (self.current + 1, self.len)
    }

    /// Fraction of the deck reached, in `(0.0, 1.0]`.
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.len as f64
    }
}
