/// Frame driver timing
///
/// Splits variable-length frames into fixed logical ticks and schedules the
/// periodic hotplug pass. Input edge sampling and commit run once per tick;
/// the hotplug pass runs at most once per frame.
use std::time::{Duration, Instant};

/// Target logical tick rate (60 ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of ticks per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Work due in one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameSchedule {
    /// Logical ticks to run
    pub ticks: u32,

    /// Whether the hotplug pass is due
    pub reconcile: bool,
}

/// Frame timing state
pub struct GameLoop {
    /// Accumulated time for fixed ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Length of one logical tick
    timestep: Duration,

    /// Time between hotplug passes
    reconcile_interval: Duration,

    /// Time since the last hotplug pass, `None` before the first one
    since_reconcile: Option<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total ticks executed
    update_count: u64,
}

impl GameLoop {
    /// Create a frame driver with the default timestep
    pub fn new(reconcile_interval: Duration) -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            timestep: FIXED_TIMESTEP_DURATION,
            reconcile_interval,
            since_reconcile: None,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Use a custom tick length
    pub fn with_timestep(mut self, timestep: Duration) -> Self {
        debug_assert!(!timestep.is_zero(), "timestep must be positive");
        self.timestep = timestep;
        self
    }

    /// Begin a new frame measured against the wall clock
    pub fn begin_frame(&mut self) -> FrameSchedule {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Begin a new frame of the given length
    pub fn advance(&mut self, frame_time: Duration) -> FrameSchedule {
        self.frame_count += 1;

        // The first frame always reconciles, then once per interval
        let reconcile = match self.since_reconcile {
            None => true,
            Some(elapsed) => elapsed + frame_time >= self.reconcile_interval,
        };
        self.since_reconcile = Some(match (reconcile, self.since_reconcile) {
            (false, Some(elapsed)) => elapsed + frame_time,
            _ => Duration::ZERO,
        });

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= self.timestep && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.timestep;
            ticks += 1;
        }
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= self.timestep {
            // Drop the backlog instead of bursting next frame
            log::debug!("Frame {} dropped {:?} of backlog", self.frame_count, self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        self.update_count += ticks as u64;
        FrameSchedule { ticks, reconcile }
    }

    /// Get the tick length in seconds
    pub fn fixed_timestep(&self) -> f32 {
        self.timestep.as_secs_f32()
    }

    pub fn reconcile_interval(&self) -> Duration {
        self.reconcile_interval
    }

    /// Get total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of ticks executed
    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}
