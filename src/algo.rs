//! Sorting strategies and public entry points.
//!
//! Strategy selection works in layers:
//! - a single O(n) pre-scan short-circuits already-sorted input and turns
//!   reverse-sorted input into one in-place reversal,
//! - short ranges go straight to binary insertion sort,
//! - everything else runs through a depth-limited, iterative three-way
//!   quicksort that excludes the run of pivot-equal elements from further
//!   work and falls back to heap sort once the depth budget is spent.
//!
//! The main entry points are [`sort`], [`sort_by`], [`sort_with`] and
//! [`sort_by_key`].

use crate::core::{scan_shape, Decorated, Frame, WorkStack, DEPTH_FACTOR, INSERTION_THRESHOLD};
use std::cmp::Ordering;

/// Sorts a slice in ascending order, in place.
///
/// Adaptive and unstable: already-sorted input returns after one O(n)
/// scan, reverse-sorted input is reversed in place, duplicate-heavy input
/// collapses to near-linear work, and the worst case is O(n log n).
///
/// # Examples
///
/// ```
/// use adasort::sort;
///
/// let mut data = vec![5, 2, 8, 1, 9, 3];
/// sort(&mut data);
///
/// assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
/// ```
pub fn sort<T: Ord>(v: &mut [T]) {
    sort_impl(v, &mut |a, b| a < b, true);
}

/// Sorts a slice in place with a caller-supplied comparator.
///
/// `compare` must implement a strict weak ordering; this is not validated,
/// and a violating comparator yields some unspecified permutation of the
/// input rather than a sorted one.
///
/// # Examples
///
/// ```
/// use adasort::sort_by;
///
/// let mut data = vec![5, 2, 8, 1, 9, 3];
/// sort_by(&mut data, |a, b| b.cmp(a)); // descending
///
/// assert_eq!(data, vec![9, 8, 5, 3, 2, 1]);
/// ```
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_impl(v, &mut |a, b| compare(a, b) == Ordering::Less, true);
}

/// Full-control entry point: sorts with `compare` and an explicit switch
/// for the sorted/reverse pre-scan.
///
/// [`sort`] and [`sort_by`] delegate here with the scan enabled. Passing
/// `detect_shape = false` skips the O(n) detection pass, which can help
/// when the caller already knows the input is unordered.
pub fn sort_with<T, F>(v: &mut [T], mut compare: F, detect_shape: bool)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_impl(v, &mut |a, b| compare(a, b) == Ordering::Less, detect_shape);
}

/// Sorts a slice in place by a derived key, computing each key exactly once.
///
/// Unlike comparing through `key_fn` on every comparison, this decorates
/// the slice with `(key, origin)` pairs, sorts the decoration, and applies
/// the resulting permutation with one cycle walk. Worth it whenever the
/// key function is expensive relative to comparing two keys.
///
/// `key_fn` is invoked exactly once per element, in original order, and
/// must be idempotent for the result to be meaningful.
///
/// # Examples
///
/// ```
/// use adasort::sort_by_key;
///
/// let mut pairs = vec![(2, "b"), (3, "a"), (1, "c")];
/// sort_by_key(&mut pairs, |item| item.0);
///
/// assert_eq!(pairs, vec![(1, "c"), (2, "b"), (3, "a")]);
/// ```
pub fn sort_by_key<T, K, F>(v: &mut [T], key_fn: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_by_key_with(v, key_fn, K::cmp);
}

/// Like [`sort_by_key`], but with a caller-supplied comparator over keys.
///
/// # Examples
///
/// ```
/// use adasort::sort_by_key_with;
///
/// let mut words = vec!["pear", "fig", "banana"];
/// sort_by_key_with(&mut words, |w| w.len(), |a, b| b.cmp(a)); // longest first
///
/// assert_eq!(words, vec!["banana", "pear", "fig"]);
/// ```
pub fn sort_by_key_with<T, K, Fk, Fc>(v: &mut [T], mut key_fn: Fk, mut compare: Fc)
where
    Fk: FnMut(&T) -> K,
    Fc: FnMut(&K, &K) -> Ordering,
{
    if v.is_empty() {
        return;
    }

    // Decorate: one key per element, computed in original order.
    let mut decorated: Vec<Decorated<K>> = v
        .iter()
        .enumerate()
        .map(|(index, item)| Decorated {
            key: key_fn(item),
            index,
        })
        .collect();

    sort_impl(
        &mut decorated,
        &mut |a, b| compare(&a.key, &b.key) == Ordering::Less,
        true,
    );

    // Undecorate: decorated[i].index names the slot holding the element
    // that belongs at position i. Resolve each permutation cycle with
    // swaps, marking finished slots by pointing their index at themselves
    // so no cycle is walked twice.
    for i in 0..decorated.len() {
        let mut current = i;
        while decorated[current].index != i {
            let next = decorated[current].index;
            v.swap(current, next);
            decorated[current].index = current;
            current = next;
        }
        decorated[current].index = current;
    }
}

/// Strategy selector shared by every entry point.
fn sort_impl<T, F>(v: &mut [T], is_less: &mut F, detect_shape: bool)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() <= 1 {
        return;
    }

    if detect_shape {
        let shape = scan_shape(v, is_less);
        if shape.non_decreasing {
            return;
        }
        if shape.non_increasing {
            v.reverse();
            return;
        }
    }

    if v.len() <= INSERTION_THRESHOLD {
        insertion_sort(v, is_less);
        return;
    }

    introsort(v, is_less);
}

/// Insertion sort with a binary search for each insertion point:
/// O(n log n) comparisons, up to O(n^2) moves. Only used at or below
/// `INSERTION_THRESHOLD`, where the moves stay cache-resident.
fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        // Upper bound: first slot in the sorted prefix whose element is
        // strictly greater than v[i].
        let mut lo = 0;
        let mut hi = i;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if is_less(&v[i], &v[mid]) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        v[lo..=i].rotate_right(1);
    }
}

/// Index of the median of `v[a]`, `v[b]`, `v[c]`, decided with at most
/// three comparisons. Ties fall wherever the decision tree lands them;
/// that only affects pivot quality, never correctness.
fn median_of_three<T, F>(v: &[T], a: usize, b: usize, c: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(&v[a], &v[b]) {
        if is_less(&v[b], &v[c]) {
            b // a < b < c
        } else if is_less(&v[a], &v[c]) {
            c // a < c <= b
        } else {
            a // c <= a < b
        }
    } else if is_less(&v[c], &v[b]) {
        b // c < b <= a
    } else if is_less(&v[c], &v[a]) {
        c // b <= c < a
    } else {
        a // b <= a <= c
    }
}

/// Dutch national flag partition around the median of the first, middle
/// and last element.
///
/// Returns `(lt, gt_end)` such that `v[..lt]` compares less than the
/// pivot, `v[lt..gt_end]` equal and `v[gt_end..]` greater. The equal run
/// needs no further sorting, which is what collapses duplicate-heavy
/// input to near-linear work.
fn partition_three_way<T, F>(v: &mut [T], is_less: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> bool,
{
    let pivot_at = median_of_three(v, 0, v.len() / 2, v.len() - 1, is_less);
    v.swap(0, pivot_at);

    // The pivot stays parked in slot 0 while the tail is partitioned;
    // one swap afterwards folds it into the equal run.
    let (lt, gt) = {
        let (head, rest) = v.split_at_mut(1);
        let pivot = &head[0];

        let mut lt = 0;
        let mut i = 0;
        let mut gt = rest.len();
        while i < gt {
            if is_less(&rest[i], pivot) {
                rest.swap(lt, i);
                lt += 1;
                i += 1;
            } else if is_less(pivot, &rest[i]) {
                gt -= 1;
                rest.swap(i, gt);
            } else {
                i += 1;
            }
        }
        (lt, gt)
    };

    // rest[..lt] sits at v[1..lt + 1]; swapping the pivot with the last
    // less-than element closes the gap and puts it at the head of the
    // equal run. With nothing less than the pivot, the run starts at 0.
    if lt == 0 {
        (0, gt + 1)
    } else {
        v.swap(0, lt);
        (lt, gt + 1)
    }
}

fn sift_down<T, F>(v: &mut [T], mut root: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= v.len() {
            break;
        }
        // Prefer the greater child.
        if child + 1 < v.len() && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }
        if !is_less(&v[root], &v[child]) {
            break;
        }
        v.swap(root, child);
        root = child;
    }
}

/// Classic in-place binary max-heap sort: bottom-up heapify, then repeated
/// swap-max-to-end over the shrinking heap. O(n log n) on any input and
/// O(1) extra space; only reached when a frame's depth budget runs out.
fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in (0..v.len() / 2).rev() {
        sift_down(v, i, is_less);
    }
    for i in (1..v.len()).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0, is_less);
    }
}

/// Iterative, depth-limited three-way quicksort.
///
/// Sub-ranges live on an explicit stack instead of the call stack; after
/// every split the smaller side is pushed and the larger side is iterated
/// in place, so pending frames stay logarithmic and the native stack
/// stays flat even on adversarial input.
fn introsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // ceil(log2(n)); n > INSERTION_THRESHOLD here, so n - 1 is nonzero.
    let max_depth = DEPTH_FACTOR * (usize::BITS - (v.len() - 1).leading_zeros());

    let mut pending = WorkStack::new();
    pending.push(Frame {
        lo: 0,
        hi: v.len(),
        depth: max_depth,
    });

    while let Some(frame) = pending.pop() {
        let Frame {
            mut lo,
            mut hi,
            mut depth,
        } = frame;

        while hi - lo > INSERTION_THRESHOLD {
            if depth == 0 {
                heapsort(&mut v[lo..hi], is_less);
                lo = hi;
                break;
            }
            depth -= 1;

            let (lt, gt_end) = partition_three_way(&mut v[lo..hi], is_less);
            let (lt, gt_end) = (lo + lt, lo + gt_end);

            // Push the smaller side, keep iterating on the larger one.
            if lt - lo < hi - gt_end {
                if lt - lo > 1 {
                    pending.push(Frame { lo, hi: lt, depth });
                }
                lo = gt_end;
            } else {
                if hi - gt_end > 1 {
                    pending.push(Frame {
                        lo: gt_end,
                        hi,
                        depth,
                    });
                }
                hi = lt;
            }
        }

        insertion_sort(&mut v[lo..hi], is_less);
    }
}
