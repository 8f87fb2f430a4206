use std::time::{Duration, Instant};

pub trait Stopper {
    fn stop(&mut self) -> bool;
    fn init(&mut self);
    fn elapsed(&self) -> Duration;
}

pub struct Timer {
    timer: Instant,
    duration: Duration,
}

impl Timer {
    pub fn new(duration: Duration) -> Self {
        Self {
            timer: Instant::now(),
            duration,
        }
    }
}

impl Stopper for Timer {
    fn stop(&mut self) -> bool {
        self.timer.elapsed() >= self.duration
    }

    fn init(&mut self) {
        self.timer = Instant::now();
    }

    fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }
}

/// Never stops, only keeps track of the elapsed time.
pub struct Unlimited {
    timer: Instant,
}

impl Default for Unlimited {
    fn default() -> Self {
        Self {
            timer: Instant::now(),
        }
    }
}

impl Stopper for Unlimited {
    fn stop(&mut self) -> bool {
        false
    }

    fn init(&mut self) {
        self.timer = Instant::now();
    }

    fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }
}

/// Stops after a fixed number of polls. Makes cutoffs reproducible in tests.
pub struct PollLimit {
    polls: usize,
    limit: usize,
    timer: Instant,
}

impl PollLimit {
    pub fn new(limit: usize) -> Self {
        Self {
            polls: 0,
            limit,
            timer: Instant::now(),
        }
    }
}

impl Stopper for PollLimit {
    fn stop(&mut self) -> bool {
        self.polls += 1;
        self.polls > self.limit
    }

    fn init(&mut self) {
        self.polls = 0;
        self.timer = Instant::now();
    }

    fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }
}
