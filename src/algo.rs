//! Step-generating sorting algorithms.
//!
//! Each algorithm sorts a [`Sequence`] in place while reporting every
//! comparison and every mutation to a [`StepSink`], so an external consumer
//! can visualize the sort without the algorithms knowing anything about
//! rendering or pacing.
//!
//! The main entry point is [`sort_steps`]. The per-algorithm functions are
//! exposed for callers that dispatch themselves.
//!
//! Event traces are part of the contract: insertion's final key placement
//! and merge's drain loop deliberately emit no compare event, and quicksort
//! emits a swap even when both indices coincide. Consumers that pin traces
//! rely on these quirks staying put.

use crate::core::{Algorithm, Sequence, SortError, Step, StepSink};

/// Runs the selected algorithm over `seq`, reporting steps to `sink`.
///
/// The sequence is sorted in place. A sink error aborts the run immediately,
/// leaving the sequence in its last-mutated state.
///
/// # Preconditions
///
/// At most one run may be active over a given sequence; the exclusive borrow
/// enforces this within one thread. The sink must not mutate the sequence.
///
/// # Examples
///
/// ```
/// use stepsort::core::{Algorithm, Sequence, SortError, Step};
/// use stepsort::algo::sort_steps;
///
/// let mut seq = Sequence::from_values(vec![4, 1, 3, 2]);
/// let mut swaps = 0;
/// sort_steps(Algorithm::Quick, &mut seq, &mut |_: &Sequence, step: Step| {
///     if let Step::Swap(..) = step {
///         swaps += 1;
///     }
///     Ok::<(), SortError>(())
/// })
/// .unwrap();
///
/// assert_eq!(seq.values(), &[1, 2, 3, 4]);
/// assert!(swaps > 0);
/// ```
pub fn sort_steps<S: StepSink>(
    algorithm: Algorithm,
    seq: &mut Sequence,
    sink: &mut S,
) -> Result<(), SortError> {
    match algorithm {
        Algorithm::Bubble => bubble(seq, sink),
        Algorithm::Selection => selection(seq, sink),
        Algorithm::Insertion => insertion(seq, sink),
        Algorithm::Merge => merge(seq, sink),
        Algorithm::Quick => quick(seq, sink),
    }
}

/// Bubble sort. After each outer pass the largest remaining value has
/// settled at `n - i - 1`, reported via [`Step::MarkSorted`].
pub fn bubble<S: StepSink>(seq: &mut Sequence, sink: &mut S) -> Result<(), SortError> {
    let n = seq.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            sink.on_step(seq, Step::Compare(j, j + 1))?;
            if seq.get(j)? > seq.get(j + 1)? {
                seq.swap(j, j + 1)?;
                sink.on_step(seq, Step::Swap(j, j + 1))?;
            }
        }
        sink.on_step(seq, Step::MarkSorted(n - i - 1))?;
    }
    Ok(())
}

/// Selection sort. Comparisons are reported against the *running* minimum,
/// not the pass's starting index.
pub fn selection<S: StepSink>(seq: &mut Sequence, sink: &mut S) -> Result<(), SortError> {
    let n = seq.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            sink.on_step(seq, Step::Compare(min_idx, j))?;
            if seq.get(j)? < seq.get(min_idx)? {
                min_idx = j;
            }
        }
        if min_idx != i {
            seq.swap(i, min_idx)?;
            sink.on_step(seq, Step::Swap(i, min_idx))?;
        }
        sink.on_step(seq, Step::MarkSorted(i))?;
    }
    Ok(())
}

/// Insertion sort. Each shift is reported as a single-index swap; the final
/// placement of the held key emits nothing.
pub fn insertion<S: StepSink>(seq: &mut Sequence, sink: &mut S) -> Result<(), SortError> {
    let n = seq.len();
    for i in 1..n {
        let key = seq.get(i)?;
        let mut slot = i;
        while slot > 0 && seq.get(slot - 1)? > key {
            sink.on_step(seq, Step::Compare(slot - 1, slot))?;
            let shifted = seq.get(slot - 1)?;
            seq.set_at(slot, shifted)?;
            sink.on_step(seq, Step::Swap(slot, slot))?;
            slot -= 1;
        }
        // Unreported on purpose: the key settling into its slot draws no
        // event of its own.
        seq.set_at(slot, key)?;
    }
    Ok(())
}

/// Merge sort. Stable: ties take the left buffer's head.
pub fn merge<S: StepSink>(seq: &mut Sequence, sink: &mut S) -> Result<(), SortError> {
    if seq.len() > 1 {
        merge_recurse(seq, 0, seq.len() - 1, sink)?;
    }
    Ok(())
}

fn merge_recurse<S: StepSink>(
    seq: &mut Sequence,
    l: usize,
    r: usize,
    sink: &mut S,
) -> Result<(), SortError> {
    if l >= r {
        return Ok(());
    }
    let m = l + (r - l) / 2;
    merge_recurse(seq, l, m, sink)?;
    merge_recurse(seq, m + 1, r, sink)?;
    merge_halves(seq, l, m, r, sink)
}

fn merge_halves<S: StepSink>(
    seq: &mut Sequence,
    l: usize,
    m: usize,
    r: usize,
    sink: &mut S,
) -> Result<(), SortError> {
    let left = seq.values()[l..=m].to_vec();
    let right = seq.values()[m + 1..=r].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = l;
    while i < left.len() && j < right.len() {
        sink.on_step(seq, Step::Compare(k, k))?;
        if left[i] <= right[j] {
            seq.set_at(k, left[i])?;
            i += 1;
        } else {
            seq.set_at(k, right[j])?;
            j += 1;
        }
        sink.on_step(seq, Step::Swap(k, k))?;
        k += 1;
    }
    // Drain writes report the mutation only, no compare.
    while i < left.len() {
        seq.set_at(k, left[i])?;
        sink.on_step(seq, Step::Swap(k, k))?;
        i += 1;
        k += 1;
    }
    while j < right.len() {
        seq.set_at(k, right[j])?;
        sink.on_step(seq, Step::Swap(k, k))?;
        j += 1;
        k += 1;
    }
    Ok(())
}

/// Quicksort with Lomuto partitioning, pivot at `seq[high]`.
///
/// Swaps are emitted even when both indices coincide, so an equal-element
/// pass still animates its (no-op) exchanges.
pub fn quick<S: StepSink>(seq: &mut Sequence, sink: &mut S) -> Result<(), SortError> {
    if seq.len() > 1 {
        quick_recurse(seq, 0, seq.len() - 1, sink)?;
    }
    Ok(())
}

fn quick_recurse<S: StepSink>(
    seq: &mut Sequence,
    low: usize,
    high: usize,
    sink: &mut S,
) -> Result<(), SortError> {
    if low < high {
        let p = partition(seq, low, high, sink)?;
        if p > low {
            quick_recurse(seq, low, p - 1, sink)?;
        }
        quick_recurse(seq, p + 1, high, sink)?;
    }
    Ok(())
}

/// Lomuto partition over `[low, high]`; returns the pivot's final index.
fn partition<S: StepSink>(
    seq: &mut Sequence,
    low: usize,
    high: usize,
    sink: &mut S,
) -> Result<usize, SortError> {
    let pivot = seq.get(high)?;
    let mut i = low;
    for j in low..high {
        sink.on_step(seq, Step::Compare(j, high))?;
        if seq.get(j)? < pivot {
            seq.swap(i, j)?;
            sink.on_step(seq, Step::Swap(i, j))?;
            i += 1;
        }
    }
    seq.swap(i, high)?;
    sink.on_step(seq, Step::Swap(i, high))?;
    Ok(i)
}
