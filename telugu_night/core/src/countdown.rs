const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// Remaining time split into display buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    /// Floors a millisecond delta into days, hours, minutes and seconds.
    ///
    /// Returns `None` once the delta is no longer positive, so callers can
    /// decide what to keep showing after the target has passed.
    pub fn from_remaining_millis(remaining: i64) -> Option<Self> {
        if remaining <= 0 {
            return None;
        }
        let remaining = remaining as u64;

        Some(TimeLeft {
            days: remaining / MILLIS_PER_DAY,
            hours: (remaining % MILLIS_PER_DAY) / MILLIS_PER_HOUR,
            minutes: (remaining % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
            seconds: (remaining % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND,
        })
    }

    /// Total duration represented by the four fields, in milliseconds.
    pub fn as_millis(&self) -> u64 {
        self.days * MILLIS_PER_DAY
            + self.hours * MILLIS_PER_HOUR
            + self.minutes * MILLIS_PER_MINUTE
            + self.seconds * MILLIS_PER_SECOND
    }

    /// Labelled fields in display order.
    pub fn units(&self) -> [(&'static str, u64); 4] {
        [
            ("days", self.days),
            ("hours", self.hours),
            ("minutes", self.minutes),
            ("seconds", self.seconds),
        ]
    }
}

/// Ticking countdown towards a fixed instant.
///
/// Once the target has passed the last computed snapshot is kept; there is no
/// separate "started" state.
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    target_millis: i64,
    current: TimeLeft,
}

impl Countdown {
    /// Creates a countdown to `target_millis` (milliseconds since the epoch).
    pub fn new(target_millis: i64) -> Self {
        Countdown {
            target_millis,
            current: TimeLeft::default(),
        }
    }

    pub fn target_millis(&self) -> i64 {
        self.target_millis
    }

    /// Recomputes the snapshot for `now_millis` and returns it.
    pub fn tick(&mut self, now_millis: i64) -> TimeLeft {
        let remaining = self.target_millis.saturating_sub(now_millis);
        if let Some(left) = TimeLeft::from_remaining_millis(remaining) {
            self.current = left;
        }
        self.current
    }

    pub fn current(&self) -> TimeLeft {
        self.current
    }
}
