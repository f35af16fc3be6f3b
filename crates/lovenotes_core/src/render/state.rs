//! Render progress counter.

use std::ops::Range;

/// How many notes of a fixed-size source have been rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    shown: usize,
    total: usize,
}

impl RenderState {
    pub fn new(total: usize) -> Self {
        Self { shown: 0, total }
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn remaining(&self) -> usize {
        self.total - self.shown
    }

    pub fn is_exhausted(&self) -> bool {
        self.shown >= self.total
    }

    /// Claims the next `min(batch, remaining)` indices and advances `shown`.
    ///
    /// Returns an empty range once the source is exhausted.
    pub fn take_batch(&mut self, batch: usize) -> Range<usize> {
        let start = self.shown;
        let to_add = batch.min(self.remaining());
        self.shown += to_add;
        start..self.shown
    }
}
