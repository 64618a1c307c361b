use std::time::Duration;

/// Target cadence used when none is configured.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Frame timing snapshot for an accepted tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameTime {
    /// Time elapsed since the previously accepted tick. Not clamped.
    pub delta: Duration,

    /// Timestamp of the tick, relative to the caller's time origin.
    pub now: Duration,

    /// Monotonic counter of accepted ticks.
    pub frame_index: u64,
}

/// Outcome of offering a tick to the gate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tick {
    /// First tick seen; it becomes the reference and nothing is rendered.
    Primed,
    /// Enough time has passed; render with this frame time.
    Accepted(FrameTime),
    /// Too early; no side effect.
    Dropped,
}

impl Tick {
    /// `true` for ticks that moved the reference timestamp.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Tick::Dropped)
    }
}

/// Leaky fixed-cadence throttle.
///
/// A tick is accepted iff `now - reference > interval`, after which the
/// reference moves to `now`. There is no catch-up and no lower bound on the
/// achieved rate: a long stall produces one large delta.
#[derive(Debug, Clone)]
pub struct FrameGate {
    interval: Duration,
    reference: Option<Duration>,
    frame_index: u64,
}

impl FrameGate {
    /// Creates a gate targeting `frame_rate` accepted ticks per second.
    ///
    /// A rate of zero is treated as 1.
    pub fn new(frame_rate: u32) -> Self {
        Self::with_interval(Duration::from_secs_f64(1.0 / f64::from(frame_rate.max(1))))
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            reference: None,
            frame_index: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of accepted ticks so far.
    pub fn accepted_frames(&self) -> u64 {
        self.frame_index
    }

    /// Forgets the reference timestamp; the next tick primes the gate again.
    pub fn reset(&mut self) {
        self.reference = None;
    }

    /// Offers a tick at `now`.
    pub fn tick(&mut self, now: Duration) -> Tick {
        let Some(reference) = self.reference else {
            self.reference = Some(now);
            return Tick::Primed;
        };

        let delta = now.saturating_sub(reference);
        if delta <= self.interval {
            return Tick::Dropped;
        }

        self.reference = Some(now);
        let ft = FrameTime {
            delta,
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);

        Tick::Accepted(ft)
    }
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_RATE)
    }
}
