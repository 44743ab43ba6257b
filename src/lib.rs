//! # Adasort
//!
//! `adasort` is an adaptive, comparison-based, in-place sorting library for
//! mutable slices. It measures the shape of its input and picks a strategy
//! accordingly, so the common easy cases cost one linear pass while the
//! worst case stays at O(n log n).
//!
//! ## Key Features
//!
//! - **Shape Detection**: A single O(n) pre-scan recognizes already-sorted
//!   input (returned untouched) and reverse-sorted input (fixed with one
//!   in-place reversal).
//! - **Three-Way Partitioning**: Dutch-national-flag partitioning groups
//!   pivot-equal elements and drops them from further work, so
//!   duplicate-heavy input collapses to near-linear time.
//! - **Bounded Everything**: The partition driver is iterative with an
//!   explicit O(log n) work stack and a depth budget; when the budget runs
//!   out it falls back to heap sort, so no input degrades to O(n²) and no
//!   input overflows the native stack.
//! - **Cached Key Sort**: [`sort_by_key`] decorates once, sorts the
//!   decoration and permutes the slice back with a single cycle walk —
//!   the key function runs exactly once per element.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use adasort::sort;
//!
//! let mut data = vec![5, 2, 8, 1, 9, 3];
//! sort(&mut data);
//!
//! assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
//! ```
//!
//! ### Custom Orderings and Derived Keys
//!
//! ```rust
//! use adasort::{sort_by, sort_by_key};
//!
//! let mut data = vec![-3i64, 7, -1, 4];
//! sort_by(&mut data, |a, b| b.cmp(a));
//! assert_eq!(data, vec![7, 4, -1, -3]);
//!
//! // Key computed once per element, not once per comparison.
//! let mut rows = vec![("widget", 7usize), ("gadget", 2), ("gizmo", 5)];
//! sort_by_key(&mut rows, |row| row.1);
//! assert_eq!(rows[0], ("gadget", 2));
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Best Case**: O(n) for sorted, reverse-sorted and all-equal input.
//! - **Worst Case**: O(n log n), guaranteed by the heap-sort fallback.
//! - **Memory Overhead**: O(1) for [`sort`]/[`sort_by`]; [`sort_by_key`]
//!   allocates one `(key, index)` pair per element and nothing else.
//!
//! ## Contract and Panic Safety
//!
//! Comparators must implement a strict weak ordering and key functions
//! must be idempotent; neither is validated. All mutation happens through
//! in-slice swaps and moves, so if a comparator or key function panics
//! mid-call, the slice still holds exactly the original multiset of
//! elements — reordered, never duplicated or lost.
//!
//! Not stable: equal elements may be reordered. Calls are single-threaded
//! and run to completion; `&mut [T]` gives each call the exclusive access
//! it needs, and sorting disjoint slices from different threads is safe.

pub mod algo;
pub mod core;
pub use crate::algo::{sort, sort_by, sort_by_key, sort_by_key_with, sort_with};
pub use crate::core::{detect_shape, Shape, DEPTH_FACTOR, INSERTION_THRESHOLD};

pub mod prelude {
    pub use crate::algo::{sort, sort_by, sort_by_key, sort_by_key_with, sort_with};
    pub use crate::core::{detect_shape, Shape, DEPTH_FACTOR, INSERTION_THRESHOLD};
}
