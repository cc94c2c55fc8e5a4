use jiff::Timestamp;
use parking_lot::Mutex;

pub trait Clock: Send + Sync {
    /// Returns the current time of the clock
    fn now(&self) -> Timestamp;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Hands out creation timestamps that never move backward.
///
/// Timestamps are truncated to whole seconds so they survive a round trip
/// through the SQLite `created` column unchanged. If the wrapped clock steps
/// back, the last issued value is repeated until it catches up.
#[derive(Debug, Default)]
pub struct MonotonicClock<C: Clock = SystemClock> {
    clock: C,
    last: Mutex<Option<Timestamp>>,
}

impl MonotonicClock<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> MonotonicClock<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            last: Mutex::new(None),
        }
    }

    /// Returns the next creation timestamp, never earlier than the previous one.
    pub fn tick(&self) -> Timestamp {
        let now = self.clock.now();
        let now = Timestamp::from_second(now.as_second()).unwrap_or(now);

        let mut last = self.last.lock();
        let next = match *last {
            Some(prev) if prev > now => prev,
            _ => now,
        };
        *last = Some(next);
        next
    }
}


#[cfg(test)]
mod tests {
    use super::test_clock::TestClock;
    use super::*;

    fn at(second: i64) -> Timestamp {
        Timestamp::from_second(second).unwrap()
    }

    #[test]
    fn follows_the_clock_forward() {
        let clock = TestClock::new(at(100));
        let monotonic = MonotonicClock::with_clock(clock.clone());

        assert_eq!(monotonic.tick(), at(100));
        clock.set(at(105));
        assert_eq!(monotonic.tick(), at(105));
    }

    #[test]
    fn holds_when_clock_steps_back() {
        let clock = TestClock::new(at(200));
        let monotonic = MonotonicClock::with_clock(clock.clone());

        assert_eq!(monotonic.tick(), at(200));
        clock.set(at(150));
        assert_eq!(monotonic.tick(), at(200));
        clock.set(at(201));
        assert_eq!(monotonic.tick(), at(201));
    }

    #[test]
    fn truncates_to_whole_seconds() {
        let clock = TestClock::new(Timestamp::new(300, 750_000_000).unwrap());
        let monotonic = MonotonicClock::with_clock(clock);

        assert_eq!(monotonic.tick(), at(300));
    }
}
