//! Frame clock and timer scheduler
//!
//! The clock is driven by host frame timestamps (`requestAnimationFrame` on the
//! web, a fixed-rate loop natively). On every frame it:
//! - fires queued one-shot tasks whose delay has elapsed (earliest first)
//! - runs every registered interval in registration order
//!
//! Per-frame intervals receive a [`FrameTime`]; periodic intervals run roughly
//! every `period_ms` of clock time and receive nothing. All callbacks get the
//! context they mutate plus a [`Timers`] handle for queueing follow-up work.
//!
//! Clock time starts at 0 on the first frame and advances by the frame delta,
//! so behaviour is fully deterministic for a given timestamp sequence. Work
//! queued from host events between frames should call [`Clock::sync`] with the
//! event timestamp first, so delays count from the event and not the last frame.
//!
//! Callbacks return a [`CallbackResult`]; an `Err` is logged and the rest of
//! the frame carries on. That is the isolation that holds on wasm32, where
//! panics abort instead of unwinding.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Shortest period accepted by [`Clock::add_interval_every`]
pub const MIN_PERIOD_MS: f64 = 1.0;

/// Error a callback reports instead of panicking
pub type CallbackError = Box<dyn std::error::Error>;
pub type CallbackResult = Result<(), CallbackError>;

/// Timing handed to per-frame callbacks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Host timestamp of this frame (ms)
    pub timestamp: f64,
    /// Milliseconds since the previous frame (0 on the first frame)
    pub delta_time: f32,
}

/// Handle returned when registering an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalId(u32);

impl fmt::Display for IntervalId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "interval #{}", self.0)
    }
}

pub type FrameFn<C> = Box<dyn FnMut(&mut C, &mut Timers<C>, FrameTime) -> CallbackResult>;
pub type PeriodicFn<C> = Box<dyn FnMut(&mut C, &mut Timers<C>) -> CallbackResult>;
pub type TaskFn<C> = Box<dyn FnOnce(&mut C, &mut Timers<C>) -> CallbackResult>;

/// A one-shot task waiting for its due time
struct Pending<C> {
    due: f64,
    seq: u64,
    task: TaskFn<C>,
}

impl<C> PartialEq for Pending<C> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<C> Eq for Pending<C> {}

impl<C> PartialOrd for Pending<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C> Ord for Pending<C> {
    // Reversed: BinaryHeap is a max-heap, we want the earliest due (then FIFO) on top
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .total_cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Queue of one-shot deferred tasks, keyed by due time
pub struct Timers<C> {
    now: f64,
    next_seq: u64,
    pending: BinaryHeap<Pending<C>>,
}

impl<C> Default for Timers<C> {
    fn default() -> Self {
        Self {
            now: 0.0,
            next_seq: 0,
            pending: BinaryHeap::new(),
        }
    }
}

impl<C> Timers<C> {
    /// Schedule `task` to run once, no earlier than `delay_ms` from now
    pub fn queue<F>(&mut self, delay_ms: f64, task: F)
    where
        F: FnOnce(&mut C, &mut Timers<C>) -> CallbackResult + 'static,
    {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            due: self.now + delay_ms.max(0.0),
            seq,
            task: Box::new(task),
        });
    }

    /// Current clock time (ms since the first frame)
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Number of tasks still waiting to fire
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Pop the next due task, skipping anything queued at or after `horizon`
    fn pop_due(&mut self, horizon: u64) -> Option<TaskFn<C>> {
        let top = self.pending.peek()?;
        if top.due > self.now || top.seq >= horizon {
            return None;
        }
        self.pending.pop().map(|p| p.task)
    }
}

enum Cadence<C> {
    EveryFrame(FrameFn<C>),
    Every {
        period_ms: f64,
        next_due: f64,
        callback: PeriodicFn<C>,
    },
}

struct Interval<C> {
    id: IntervalId,
    cadence: Cadence<C>,
}

/// Cooperative single-threaded scheduler for a context `C`
pub struct Clock<C> {
    intervals: Vec<Interval<C>>,
    timers: Timers<C>,
    last_timestamp: Option<f64>,
    /// Clock time of the last frame; `timers.now` may run ahead via `sync`
    frame_now: f64,
    next_interval_id: u32,
}

impl<C> Default for Clock<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Clock<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Clock")
            .field("now", &self.timers.now)
            .field("intervals", &self.intervals.len())
            .field("pending", &self.timers.pending.len())
            .finish()
    }
}

impl<C> Clock<C> {
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
            timers: Timers::default(),
            last_timestamp: None,
            frame_now: 0.0,
            next_interval_id: 1,
        }
    }

    fn next_id(&mut self) -> IntervalId {
        let id = IntervalId(self.next_interval_id);
        self.next_interval_id += 1;
        id
    }

    /// Run `callback` once per rendered frame
    pub fn add_interval<F>(&mut self, callback: F) -> IntervalId
    where
        F: FnMut(&mut C, &mut Timers<C>, FrameTime) -> CallbackResult + 'static,
    {
        let id = self.next_id();
        self.intervals.push(Interval {
            id,
            cadence: Cadence::EveryFrame(Box::new(callback)),
        });
        log::debug!("Registered {} (every frame)", id);
        id
    }

    /// Run `callback` roughly every `period_ms` of clock time
    pub fn add_interval_every<F>(&mut self, period_ms: f64, callback: F) -> IntervalId
    where
        F: FnMut(&mut C, &mut Timers<C>) -> CallbackResult + 'static,
    {
        let period_ms = period_ms.max(MIN_PERIOD_MS);
        let id = self.next_id();
        self.intervals.push(Interval {
            id,
            cadence: Cadence::Every {
                period_ms,
                next_due: self.timers.now + period_ms,
                callback: Box::new(callback),
            },
        });
        log::debug!("Registered {} (every {}ms)", id, period_ms);
        id
    }

    /// Schedule a one-shot task (see [`Timers::queue`])
    pub fn queue<F>(&mut self, delay_ms: f64, task: F)
    where
        F: FnOnce(&mut C, &mut Timers<C>) -> CallbackResult + 'static,
    {
        self.timers.queue(delay_ms, task);
    }

    /// Timer handle for code running outside a callback (input handlers)
    pub fn timers_mut(&mut self) -> &mut Timers<C> {
        &mut self.timers
    }

    /// Bring clock time up to a host event `timestamp` between frames.
    ///
    /// Only moves forward and runs nothing; frame deltas are unaffected.
    /// Ignored before the first frame.
    pub fn sync(&mut self, timestamp: f64) {
        let Some(prev) = self.last_timestamp else {
            return;
        };
        let at = self.frame_now + (timestamp - prev).max(0.0);
        self.timers.now = self.timers.now.max(at);
    }

    /// Current clock time (ms since the first frame)
    pub fn now(&self) -> f64 {
        self.timers.now
    }

    /// Number of queued one-shot tasks
    pub fn pending(&self) -> usize {
        self.timers.pending()
    }

    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Advance to the host `timestamp` and run everything that is due
    pub fn frame(&mut self, ctx: &mut C, timestamp: f64) -> FrameTime {
        // Non-monotonic timestamps count as a zero-length frame
        let delta = match self.last_timestamp {
            Some(prev) => (timestamp - prev).max(0.0),
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp);
        self.frame_now += delta;
        self.timers.now = self.timers.now.max(self.frame_now);
        let now = self.timers.now;

        let frame = FrameTime {
            timestamp,
            delta_time: delta as f32,
        };

        // Tasks queued while this frame runs wait for the next one
        let horizon = self.timers.next_seq;
        while let Some(task) = self.timers.pop_due(horizon) {
            let timers = &mut self.timers;
            guarded(&"queued task", || task(ctx, timers));
        }

        for interval in &mut self.intervals {
            let timers = &mut self.timers;
            match &mut interval.cadence {
                Cadence::EveryFrame(callback) => {
                    guarded(&interval.id, || callback(ctx, timers, frame));
                }
                Cadence::Every {
                    period_ms,
                    next_due,
                    callback,
                } => {
                    if now < *next_due {
                        continue;
                    }
                    // Fell behind by a whole period: fire once and re-anchor
                    *next_due = if now >= *next_due + *period_ms {
                        now + *period_ms
                    } else {
                        *next_due + *period_ms
                    };
                    guarded(&interval.id, || callback(ctx, timers));
                }
            }
        }

        frame
    }
}

/// Run one callback, logging an `Err` or a caught panic so the frame proceeds.
///
/// On targets that abort on panic (wasm32-unknown-unknown) only the `Err`
/// path applies; the panic hook reports anything else.
fn guarded<F: FnOnce() -> CallbackResult>(what: &dyn fmt::Display, f: F) {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => log::error!("Clock callback failed ({}): {}", what, e),
        Err(_) => log::error!("Clock callback panicked: {}", what),
    }
}
