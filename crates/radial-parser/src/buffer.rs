//! Fixed-capacity sample buffer for one radial.

/// Outcome of a write into a [`BoundedBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Every requested byte was written.
    Complete,
    /// The buffer filled up; only `written` of the requested repeats fit.
    Truncated { written: usize, requested: usize },
}

impl WriteOutcome {
    pub fn is_truncated(&self) -> bool {
        matches!(self, WriteOutcome::Truncated { .. })
    }
}

/// Append-only byte buffer that never grows past its capacity.
///
/// Writers check [`remaining_capacity`](Self::remaining_capacity) before each
/// write; an oversized write is clipped and reported instead of overflowing.
#[derive(Debug, Clone)]
pub struct BoundedBuffer {
    data: Vec<i8>,
    capacity: usize,
}

impl BoundedBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity.min(4096)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining_capacity(&self) -> usize {
        self.capacity - self.data.len()
    }

    /// Write `repeats` copies of the two-byte expansion of `code`.
    ///
    /// Each repeat stores `code` twice. If fewer than `repeats` pairs fit,
    /// as many whole pairs as possible are written and the outcome is
    /// [`WriteOutcome::Truncated`].
    pub fn push_pairs(&mut self, code: i8, repeats: usize) -> WriteOutcome {
        let fit = self.remaining_capacity() / 2;
        let written = repeats.min(fit);

        for _ in 0..written {
            self.data.push(code);
            self.data.push(code);
        }

        if written < repeats {
            WriteOutcome::Truncated {
                written,
                requested: repeats,
            }
        } else {
            WriteOutcome::Complete
        }
    }

    pub fn as_slice(&self) -> &[i8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<i8> {
        self.data
    }
}
