use std::time::{Duration, Instant};

/// A measurement of a monotonically nondecreasing clock.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(Instant);

impl Timestamp {
    #[inline]
    pub fn now() -> Timestamp {
        Timestamp(Instant::now())
    }

    #[inline]
    pub fn elapsed(self) -> Duration {
        self.0.elapsed()
    }
}

impl std::ops::Sub for Timestamp {
    type Output = Duration;

    fn sub(self, rhs: Timestamp) -> Self::Output {
        if self.0 > rhs.0 {
            self.0 - rhs.0
        } else {
            Duration::new(0, 0)
        }
    }
}

impl std::ops::Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Self::Output {
        Timestamp(self.0 + rhs)
    }
}
