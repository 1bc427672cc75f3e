//! Browse cursor
//!
//! Index into the message list with wrap-around stepping.

/// Position in the message list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BrowseCursor {
    /// The list is empty
    #[default]
    Empty,
    /// Valid index, always below the list length it was last fitted to
    At(usize),
}

impl BrowseCursor {
    /// Index, or -1 for an empty list
    pub fn as_index(&self) -> i32 {
        match self {
            BrowseCursor::Empty => -1,
            BrowseCursor::At(i) => *i as i32,
        }
    }

    /// Index if valid
    pub fn index(&self) -> Option<usize> {
        match self {
            BrowseCursor::Empty => None,
            BrowseCursor::At(i) => Some(*i),
        }
    }

    /// 1-based position for display
    pub fn position(&self) -> Option<usize> {
        self.index().map(|i| i + 1)
    }

    /// Fit the cursor to a list of `len` entries
    ///
    /// Empty lists reset to the sentinel, a cursor coming back from empty
    /// starts at the first entry, and a list that shrank clamps to its
    /// last entry.
    pub fn fit(self, len: usize) -> Self {
        match (self, len) {
            (_, 0) => BrowseCursor::Empty,
            (BrowseCursor::Empty, _) => BrowseCursor::At(0),
            (BrowseCursor::At(i), len) if i >= len => BrowseCursor::At(len - 1),
            (cursor, _) => cursor,
        }
    }

    /// Move by `delta`, wrapping modulo `len`
    pub fn step(self, delta: i32, len: usize) -> Self {
        let BrowseCursor::At(i) = self.fit(len) else {
            return BrowseCursor::Empty;
        };
        let len = len as i64;
        let mut next = (i as i64 + delta as i64) % len;
        if next < 0 {
            next += len;
        }
        BrowseCursor::At(next as usize)
    }
}
