//! Core types and shared building blocks for Adasort.
//!
//! This module defines:
//! - [`Shape`] and [`detect_shape`]: the single-pass sorted/reverse classifier.
//! - The tuning constants shared by every strategy.
//! - `Frame`/`WorkStack`: the partition controller's explicit work list.
//! - `Decorated`: internal (key, origin) pair used by the cached key sort.

use cuneiform::cuneiform;
use std::cmp::Ordering;

/// Ranges at or below this length are finished with binary insertion sort.
pub const INSERTION_THRESHOLD: usize = 20;

/// Depth budget multiplier for the partition controller.
///
/// A top-level call may split at most `DEPTH_FACTOR * ceil(log2(n))` times
/// along any path before the remaining range is handed to heap sort, which
/// caps the worst case at O(n log n).
pub const DEPTH_FACTOR: u32 = 2;

/// Classification of a range produced by one adjacent-pair scan.
///
/// Both flags are `true` for ranges of length 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    /// No adjacent pair is out of ascending order.
    pub non_decreasing: bool,
    /// No adjacent pair is out of descending order.
    pub non_increasing: bool,
}

/// Scans `v` once and reports whether it is non-decreasing and/or
/// non-increasing under `compare`.
///
/// The scan exits early once both answers are known to be `false`.
/// Read-only; `compare` must implement a strict weak ordering.
///
/// # Examples
///
/// ```
/// use adasort::detect_shape;
///
/// let shape = detect_shape(&[3, 3, 3], i32::cmp);
/// assert!(shape.non_decreasing && shape.non_increasing);
///
/// let shape = detect_shape(&[9, 4, 1], i32::cmp);
/// assert!(!shape.non_decreasing && shape.non_increasing);
/// ```
pub fn detect_shape<T, F>(v: &[T], mut compare: F) -> Shape
where
    F: FnMut(&T, &T) -> Ordering,
{
    scan_shape(v, &mut |a, b| compare(a, b) == Ordering::Less)
}

pub(crate) fn scan_shape<T, F>(v: &[T], is_less: &mut F) -> Shape
where
    F: FnMut(&T, &T) -> bool,
{
    let mut shape = Shape {
        non_decreasing: true,
        non_increasing: true,
    };

    for pair in v.windows(2) {
        if is_less(&pair[1], &pair[0]) {
            shape.non_decreasing = false;
        }
        if is_less(&pair[0], &pair[1]) {
            shape.non_increasing = false;
        }
        if !shape.non_decreasing && !shape.non_increasing {
            break;
        }
    }

    shape
}

/// One pending sub-range of the partition controller: the `[lo, hi)` view
/// into the slice being sorted plus its remaining split budget.
#[derive(Clone, Copy, Default)]
pub(crate) struct Frame {
    pub lo: usize,
    pub hi: usize,
    pub depth: u32,
}

/// Inline capacity of the explicit work stack, enough for every realistic
/// pivot sequence (the controller pushes only the smaller half of each
/// split, and the depth budget caps how many splits a frame may perform).
const INLINE_FRAMES: usize = usize::BITS as usize;

// Cache-aligned two-tier LIFO for pending frames. The inline tier keeps
// the controller allocation-free; pathological pivot sequences that
// outgrow it spill to the heap, still capped at O(log^2 n) frames by the
// depth budget.
#[cuneiform]
pub(crate) struct WorkStack {
    inline: [Frame; INLINE_FRAMES],
    len: usize,
    spill: Vec<Frame>,
}

impl WorkStack {
    pub fn new() -> Self {
        WorkStack {
            inline: [Frame::default(); INLINE_FRAMES],
            len: 0,
            spill: Vec::new(),
        }
    }

    pub fn push(&mut self, frame: Frame) {
        if self.len < INLINE_FRAMES {
            self.inline[self.len] = frame;
            self.len += 1;
        } else {
            self.spill.push(frame);
        }
    }

    // Spill entries are always newer than every inline entry, so draining
    // them first preserves LIFO order.
    pub fn pop(&mut self) -> Option<Frame> {
        if let Some(frame) = self.spill.pop() {
            return Some(frame);
        }
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.inline[self.len])
    }
}

/// Key/origin pair built by `sort_by_key*`; lives only for the duration of
/// one call, one entry per element.
pub(crate) struct Decorated<K> {
    pub key: K,
    pub index: usize,
}
