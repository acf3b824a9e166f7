//! # Stepsort
//!
//! `stepsort` is a step-animated sorting engine for bar-chart visualizers.
//! It decomposes five classic comparison sorts — bubble, selection,
//! insertion, merge, and quick — into discrete, observable steps (compare,
//! swap, mark-sorted), each followed by a configurable pause, so a host can
//! draw the sort as it happens without the algorithms knowing anything
//! about rendering.
//!
//! ## Key Features
//!
//! - **Step-level observability**: Every comparison and every mutation is
//!   reported through the [`StepSink`] trait before the run proceeds, with
//!   the sequence already reflecting the mutation.
//! - **Decoupled pacing**: Algorithms only generate steps; [`SortSession`]
//!   owns rendering, delays, and suspension, so the same step stream drives
//!   a terminal UI, a GUI, or a headless trace collector.
//! - **Cooperative cancellation**: An optional [`CancelToken`] is polled at
//!   every pause point; a cancelled run stops cleanly, leaving the sequence
//!   partially sorted.
//! - **Defensive array model**: [`Sequence`] bounds-checks every mutation,
//!   so an algorithm bug fails fast instead of corrupting state.
//!
//! ## Usage
//!
//! ### Animated run
//!
//! Wire a renderer and a delay to a [`SortSession`]; the session pauses
//! after each compare and swap frame and renders the all-sorted frame once
//! at the end.
//!
//! ```rust
//! use stepsort::prelude::*;
//! use std::time::Duration;
//!
//! let mut seq = Sequence::generate(40, 5, 400).unwrap();
//! let renderer = |seq: &Sequence, highlights: &Highlights| {
//!     // Draw seq.values() as bars, tinting the highlighted indices.
//!     let _ = (seq, highlights);
//! };
//!
//! let mut session = SortSession::new(renderer, FixedDelay(Duration::from_millis(25)))
//!     .with_pacer(NoopPacer); // drop the pacer override to animate for real
//! let report = session.run(Algorithm::Quick, &mut seq).unwrap();
//!
//! assert_eq!(report.status, RunStatus::Completed);
//! assert!(seq.is_sorted());
//! ```
//!
//! ### Raw step stream
//!
//! For a host with its own event loop, drive [`sort_steps`] directly with a
//! closure sink and do the pacing yourself.
//!
//! ```rust
//! use stepsort::prelude::*;
//!
//! let mut seq = Sequence::from_values(vec![5, 3, 8, 1]);
//! let mut steps = Vec::new();
//! sort_steps(Algorithm::Insertion, &mut seq, &mut |_: &Sequence, step: Step| {
//!     steps.push(step);
//!     Ok::<(), SortError>(())
//! })
//! .unwrap();
//!
//! assert_eq!(seq.values(), &[1, 3, 5, 8]);
//! ```
//!
//! ## Preconditions
//!
//! At most one run may be active over a given [`Sequence`]; the exclusive
//! borrow taken by [`SortSession::run`] and [`sort_steps`] enforces this in
//! safe code. Renderers and sinks must not mutate the sequence. Hosts are
//! expected to disable controls that would regenerate or resize the
//! sequence while a run is active, as the reference UI does.
//!
//! [`StepSink`]: crate::core::StepSink
//! [`SortSession`]: crate::session::SortSession
//! [`SortSession::run`]: crate::session::SortSession::run
//! [`CancelToken`]: crate::session::CancelToken
//! [`Sequence`]: crate::core::Sequence
//! [`sort_steps`]: crate::algo::sort_steps

pub mod algo;
pub mod core;
pub mod session;

pub use crate::algo::sort_steps;
pub use crate::core::{Algorithm, Highlights, Role, Sequence, SortError, Step, StepSink};
pub use crate::session::{CancelToken, RunReport, RunStatus, SortSession};

pub mod prelude {
    pub use crate::algo::sort_steps;
    pub use crate::core::{
        Algorithm, Highlights, MIN_BAR_VALUE, Role, Sequence, SortError, Step, StepSink,
    };
    pub use crate::session::{
        CancelToken, DelaySource, FixedDelay, MIN_DELAY, NoopPacer, Pacer, Renderer, RunReport,
        RunStatus, SortSession, ThreadPacer, delay_for_speed,
    };
}
