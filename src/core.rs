//! Core types for Stepsort.
//!
//! This module defines:
//! - [`Sequence`]: The array model holding bar heights, with bounds-checked mutation.
//! - [`Step`]: One observable state transition of a running sort.
//! - [`Role`] / [`Highlights`]: The index-to-role set handed to a renderer.
//! - [`Algorithm`]: Selector for the five sorting strategies.
//! - [`StepSink`]: The trait consumers implement to observe steps.
//! - [`SortError`]: The crate-wide error type.

use std::fmt;
use std::str::FromStr;

/// Smallest value a generated bar may take, so every bar stays visible.
pub const MIN_BAR_VALUE: u32 = 5;

/// One observable transition of a running sort.
///
/// Steps carry only the indices involved; the consumer reads the current
/// [`Sequence`] state as needed. Single-bar events (insertion's shift writes,
/// merge's output writes) report the same index in both fields, mirroring a
/// one-bar highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Two positions were compared.
    Compare(usize, usize),
    /// Two positions were exchanged, or one position was overwritten
    /// (both indices equal).
    Swap(usize, usize),
    /// A position reached its final sorted place.
    MarkSorted(usize),
}

/// Highlight tag a renderer attaches to an index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Comparing,
    Swapping,
    Sorted,
}

/// A small index-to-[`Role`] set describing which bars to highlight.
///
/// At most two entries during a run, or one entry per index for the final
/// all-sorted frame. A pair naming the same index twice collapses to a
/// single entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Highlights {
    entries: Vec<(usize, Role)>,
}

impl Highlights {
    /// An empty highlight set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Highlights a single index.
    pub fn single(index: usize, role: Role) -> Self {
        Self {
            entries: vec![(index, role)],
        }
    }

    /// Highlights a pair of indices with the same role.
    ///
    /// Collapses to one entry when `i == j`.
    pub fn pair(i: usize, j: usize, role: Role) -> Self {
        if i == j {
            Self::single(i, role)
        } else {
            Self {
                entries: vec![(i, role), (j, role)],
            }
        }
    }

    /// The terminal frame: every index in `0..len` marked [`Role::Sorted`].
    pub fn all_sorted(len: usize) -> Self {
        Self {
            entries: (0..len).map(|i| (i, Role::Sorted)).collect(),
        }
    }

    /// Builds the highlight set for a [`Step`].
    pub fn for_step(step: Step) -> Self {
        match step {
            Step::Compare(i, j) => Self::pair(i, j, Role::Comparing),
            Step::Swap(i, j) => Self::pair(i, j, Role::Swapping),
            Step::MarkSorted(i) => Self::single(i, Role::Sorted),
        }
    }

    /// Returns the role assigned to `index`, if any.
    pub fn role_of(&self, index: usize) -> Option<Role> {
        self.entries
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, role)| *role)
    }

    /// Iterates over `(index, role)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Role)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of highlighted indices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is highlighted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Selects which step-generation strategy runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    /// All variants, in the order a host would list them in a selector.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// The user-facing identifier, round-trippable through [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bubble" => Ok(Algorithm::Bubble),
            "selection" => Ok(Algorithm::Selection),
            "insertion" => Ok(Algorithm::Insertion),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            other => Err(SortError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Error type for Stepsort operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortError {
    /// An index outside the sequence was reached. Bounds are checked on
    /// every mutation so an algorithm bug fails fast instead of corrupting
    /// the sequence.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the sequence at the time of the access.
        len: usize,
    },
    /// Generation was asked for an empty value range (`min > max`).
    InvalidRange {
        /// Lower bound after clamping.
        min: u32,
        /// Upper bound after clamping.
        max: u32,
    },
    /// No algorithm is registered under the given identifier.
    UnknownAlgorithm(String),
    /// The run was cancelled at a pause point. [`SortSession::run`] converts
    /// this into [`RunStatus::Cancelled`]; callers driving [`sort_steps`]
    /// with their own sink may do the same.
    ///
    /// [`SortSession::run`]: crate::session::SortSession::run
    /// [`RunStatus::Cancelled`]: crate::session::RunStatus::Cancelled
    /// [`sort_steps`]: crate::algo::sort_steps
    Cancelled,
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for sequence of length {len}")
            }
            SortError::InvalidRange { min, max } => {
                write!(f, "invalid value range: min {min} > max {max}")
            }
            SortError::UnknownAlgorithm(name) => {
                write!(f, "unknown algorithm identifier: {name:?}")
            }
            SortError::Cancelled => f.write_str("run cancelled at a pause point"),
        }
    }
}

impl std::error::Error for SortError {}

/// The array model: an ordered, mutable collection of bar heights.
///
/// Length is fixed for the duration of one sort; no ordering invariant holds
/// until a sort completes. All mutation goes through bounds-checked methods
/// so algorithm bugs surface as [`SortError::IndexOutOfBounds`] rather than
/// panics or silent corruption.
///
/// # Examples
///
/// ```
/// use stepsort::core::Sequence;
///
/// let seq = Sequence::generate(40, 5, 400).unwrap();
/// assert_eq!(seq.len(), 40);
/// assert!(seq.values().iter().all(|&v| (5..=400).contains(&v)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<u32>,
}

impl Sequence {
    /// Generates `size` independent uniformly-random values in `[min, max]`.
    ///
    /// Bounds below [`MIN_BAR_VALUE`] are clamped up so no bar degenerates
    /// to zero height. Returns [`SortError::InvalidRange`] if `min > max`
    /// after clamping.
    pub fn generate(size: usize, min: u32, max: u32) -> Result<Self, SortError> {
        use rand::Rng;

        let min = min.max(MIN_BAR_VALUE);
        let max = max.max(MIN_BAR_VALUE);
        if min > max {
            return Err(SortError::InvalidRange { min, max });
        }

        let mut rng = rand::rng();
        let values = (0..size).map(|_| rng.random_range(min..=max)).collect();
        Ok(Self { values })
    }

    /// Wraps caller-supplied values without clamping.
    pub fn from_values(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the sequence holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reads the value at `index`.
    pub fn get(&self, index: usize) -> Result<u32, SortError> {
        self.values
            .get(index)
            .copied()
            .ok_or(SortError::IndexOutOfBounds {
                index,
                len: self.values.len(),
            })
    }

    /// Exchanges the values at two indices.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), SortError> {
        self.check(i)?;
        self.check(j)?;
        self.values.swap(i, j);
        Ok(())
    }

    /// Writes `value` at `index` directly (insertion/merge write path).
    pub fn set_at(&mut self, index: usize, value: u32) -> Result<(), SortError> {
        self.check(index)?;
        self.values[index] = value;
        Ok(())
    }

    /// Borrows the values as a slice.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Returns `true` if the values are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    fn check(&self, index: usize) -> Result<(), SortError> {
        if index < self.values.len() {
            Ok(())
        } else {
            Err(SortError::IndexOutOfBounds {
                index,
                len: self.values.len(),
            })
        }
    }
}

impl From<Vec<u32>> for Sequence {
    fn from(values: Vec<u32>) -> Self {
        Self::from_values(values)
    }
}

/// A consumer of sort steps.
///
/// [`sort_steps`] calls `on_step` synchronously after every comparison and
/// after every mutation, with `seq` already reflecting the mutation. The
/// sink must not mutate the sequence; returning an error aborts the run,
/// leaving the sequence in its last-mutated state.
///
/// Any `FnMut(&Sequence, Step) -> Result<(), SortError>` closure is a sink.
///
/// [`sort_steps`]: crate::algo::sort_steps
///
/// # Examples
///
/// Collecting a trace:
///
/// ```
/// use stepsort::core::{Algorithm, Sequence, SortError, Step};
/// use stepsort::algo::sort_steps;
///
/// let mut seq = Sequence::from_values(vec![3, 1, 2]);
/// let mut trace = Vec::new();
/// sort_steps(Algorithm::Bubble, &mut seq, &mut |_: &Sequence, step: Step| {
///     trace.push(step);
///     Ok::<(), SortError>(())
/// })
/// .unwrap();
///
/// assert!(seq.is_sorted());
/// assert!(!trace.is_empty());
/// ```
pub trait StepSink {
    /// Observes one step. `seq` reflects any mutation the step describes.
    fn on_step(&mut self, seq: &Sequence, step: Step) -> Result<(), SortError>;
}

impl<F> StepSink for F
where
    F: FnMut(&Sequence, Step) -> Result<(), SortError>,
{
    fn on_step(&mut self, seq: &Sequence, step: Step) -> Result<(), SortError> {
        self(seq, step)
    }
}
