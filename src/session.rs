//! The animated driver: pacing, rendering, and cancellation for one run.
//!
//! [`SortSession`] wires a [`Renderer`] and a [`DelaySource`] to the step
//! layer in [`crate::algo`], pausing through a [`Pacer`] after every compare
//! and swap frame. Marking an index sorted draws without a pause, and the
//! terminal all-sorted frame is rendered exactly once per run.
//!
//! Scheduling is single-threaded and cooperative: the sorter suspends only
//! at pause points, never mid-computation. The session borrows the sequence
//! mutably for the whole run, so no second run (or host-side mutation) can
//! race it within safe code.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::debug;

use crate::algo::sort_steps;
use crate::core::{Algorithm, Highlights, Sequence, SortError, Step, StepSink};

/// Floor applied to every delay so a zero-delay configuration cannot
/// degenerate into a pause-free loop.
pub const MIN_DELAY: Duration = Duration::from_millis(1);

/// Maps a speed setting to a pause duration, higher speed meaning a shorter
/// pause. Speeds are clamped to `1..=500`, yielding delays of 500ms down to
/// [`MIN_DELAY`].
pub fn delay_for_speed(speed: u32) -> Duration {
    let speed = speed.clamp(1, 500);
    Duration::from_millis(u64::from(501 - speed)).max(MIN_DELAY)
}

/// Receives a frame after every step: the current sequence plus the indices
/// to highlight. Called synchronously before any wait.
///
/// Renderers must not mutate the sequence and should not fail; drawing
/// problems are the host's concern, not the run's.
///
/// Any `FnMut(&Sequence, &Highlights)` closure is a renderer.
pub trait Renderer {
    /// Draws the current state of `seq` with `highlights` applied.
    fn render(&mut self, seq: &Sequence, highlights: &Highlights);
}

impl<F> Renderer for F
where
    F: FnMut(&Sequence, &Highlights),
{
    fn render(&mut self, seq: &Sequence, highlights: &Highlights) {
        self(seq, highlights)
    }
}

/// Supplies the pause length, re-read at every pause point so a host can
/// change speed mid-run.
pub trait DelaySource {
    /// Returns the next pause duration.
    fn next_delay(&mut self) -> Duration;
}

/// A constant pause length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl DelaySource for FixedDelay {
    fn next_delay(&mut self) -> Duration {
        self.0
    }
}

impl<F> DelaySource for F
where
    F: FnMut() -> Duration,
{
    fn next_delay(&mut self) -> Duration {
        self()
    }
}

/// The suspension mechanism used at pause points.
pub trait Pacer {
    /// Suspends the run for `duration`, yielding control to the host.
    fn pause(&mut self, duration: Duration);
}

/// Pauses by sleeping the current thread. The default for hosts that run
/// the session on a dedicated thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Skips pauses entirely. Useful for headless runs, tests, and benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPacer;

impl Pacer for NoopPacer {
    fn pause(&mut self, _duration: Duration) {}
}

/// Shared flag polled at every pause point.
///
/// Cloning hands out another handle to the same flag, so a host can keep one
/// and give one to the session. Cancellation is edge-free: once set, the
/// run stops at its next pause point and the sequence stays in its
/// partially-sorted state.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// A fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// The sequence is fully sorted and the terminal frame was rendered.
    Completed,
    /// The run stopped at a pause point; the sequence is partially sorted.
    Cancelled,
}

/// Outcome of one [`SortSession::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Whether the run completed or was cancelled.
    pub status: RunStatus,
    /// Number of compare steps observed.
    pub comparisons: u64,
    /// Number of swap/write steps observed.
    pub swaps: u64,
}

/// A visualization session: one renderer, one delay source, one pacer,
/// created per run and discarded after completion or cancellation.
///
/// # Examples
///
/// ```
/// use stepsort::core::{Algorithm, Highlights, Sequence};
/// use stepsort::session::{FixedDelay, NoopPacer, RunStatus, SortSession};
/// use std::time::Duration;
///
/// let mut seq = Sequence::from_values(vec![3, 1, 2]);
/// let mut frames = 0usize;
/// let renderer = |_: &Sequence, _: &Highlights| frames += 1;
///
/// let mut session =
///     SortSession::new(renderer, FixedDelay(Duration::from_millis(1))).with_pacer(NoopPacer);
/// let report = session.run(Algorithm::Bubble, &mut seq).unwrap();
///
/// assert_eq!(report.status, RunStatus::Completed);
/// assert!(seq.is_sorted());
/// assert!(frames > 0);
/// ```
pub struct SortSession<R, D, P = ThreadPacer> {
    renderer: R,
    delay: D,
    pacer: P,
    cancel: Option<CancelToken>,
}

impl<R, D> SortSession<R, D, ThreadPacer>
where
    R: Renderer,
    D: DelaySource,
{
    /// Creates a session that pauses by sleeping the current thread.
    pub fn new(renderer: R, delay: D) -> Self {
        Self {
            renderer,
            delay,
            pacer: ThreadPacer,
            cancel: None,
        }
    }
}

impl<R, D, P> SortSession<R, D, P>
where
    R: Renderer,
    D: DelaySource,
    P: Pacer,
{
    /// Replaces the suspension mechanism.
    pub fn with_pacer<Q: Pacer>(self, pacer: Q) -> SortSession<R, D, Q> {
        SortSession {
            renderer: self.renderer,
            delay: self.delay,
            pacer,
            cancel: self.cancel,
        }
    }

    /// Attaches a cancellation token, polled at every pause point.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Runs `algorithm` over `seq` to completion or cancellation.
    ///
    /// Renders a frame after every step, pausing after compare and swap
    /// frames. On completion, renders the all-sorted frame exactly once
    /// (without a pause). On cancellation the sequence keeps whatever
    /// partial order it reached.
    ///
    /// A [`SortError::IndexOutOfBounds`] from the step layer aborts the
    /// run and is returned as-is; the sequence stays in its last-mutated
    /// state and the session can simply be restarted on a fresh sequence.
    pub fn run(
        &mut self,
        algorithm: Algorithm,
        seq: &mut Sequence,
    ) -> Result<RunReport, SortError> {
        debug!("starting {algorithm} run over {} elements", seq.len());

        let mut driver = Driver {
            renderer: &mut self.renderer,
            delay: &mut self.delay,
            pacer: &mut self.pacer,
            cancel: self.cancel.as_ref(),
            comparisons: 0,
            swaps: 0,
        };

        let status = match sort_steps(algorithm, seq, &mut driver) {
            Ok(()) => RunStatus::Completed,
            Err(SortError::Cancelled) => RunStatus::Cancelled,
            Err(err) => return Err(err),
        };
        let (comparisons, swaps) = (driver.comparisons, driver.swaps);

        if status == RunStatus::Completed {
            self.renderer.render(seq, &Highlights::all_sorted(seq.len()));
            debug!("{algorithm} run completed: {comparisons} comparisons, {swaps} swaps");
        } else {
            debug!("{algorithm} run cancelled after {comparisons} comparisons, {swaps} swaps");
        }

        Ok(RunReport {
            status,
            comparisons,
            swaps,
        })
    }
}

/// Adapts the step stream to render-then-pause frames.
struct Driver<'a, R, D, P> {
    renderer: &'a mut R,
    delay: &'a mut D,
    pacer: &'a mut P,
    cancel: Option<&'a CancelToken>,
    comparisons: u64,
    swaps: u64,
}

impl<R, D, P> Driver<'_, R, D, P>
where
    D: DelaySource,
    P: Pacer,
{
    fn pause_point(&mut self) -> Result<(), SortError> {
        if let Some(token) = self.cancel
            && token.is_cancelled()
        {
            return Err(SortError::Cancelled);
        }
        let duration = self.delay.next_delay().max(MIN_DELAY);
        self.pacer.pause(duration);
        Ok(())
    }
}

impl<R, D, P> StepSink for Driver<'_, R, D, P>
where
    R: Renderer,
    D: DelaySource,
    P: Pacer,
{
    fn on_step(&mut self, seq: &Sequence, step: Step) -> Result<(), SortError> {
        self.renderer.render(seq, &Highlights::for_step(step));
        match step {
            Step::Compare(..) => {
                self.comparisons += 1;
                self.pause_point()
            }
            Step::Swap(..) => {
                self.swaps += 1;
                self.pause_point()
            }
            // Sorted markers draw without an extra pause.
            Step::MarkSorted(_) => Ok(()),
        }
    }
}
