use std::time::Duration;

use rand::Rng;

/// Simulated round-trip delay applied before each mock service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    min: Duration,
    max: Duration,
}

impl Latency {
    /// Uniformly jittered delay in `[min, max]`. Bounds are swapped if inverted.
    pub fn between(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn fixed(delay: Duration) -> Self {
        Self {
            min: delay,
            max: delay,
        }
    }

    pub fn none() -> Self {
        Self::fixed(Duration::ZERO)
    }

    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        let min = self.min.as_millis() as u64;
        let max = self.max.as_millis() as u64;
        Duration::from_millis(rand::thread_rng().gen_range(min..=max))
    }

    /// Suspend the caller for one sampled delay.
    pub async fn wait(&self) {
        let delay = self.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::between(Duration::from_millis(500), Duration::from_millis(800))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_stays_in_range() {
        let latency = Latency::between(Duration::from_millis(10), Duration::from_millis(20));
        for _ in 0..100 {
            let d = latency.sample();
            assert!(d >= Duration::from_millis(10) && d <= Duration::from_millis(20));
        }
    }

    #[test]
    fn inverted_bounds_are_swapped() {
        let latency = Latency::between(Duration::from_millis(30), Duration::from_millis(10));
        assert_eq!(
            latency,
            Latency::between(Duration::from_millis(10), Duration::from_millis(30))
        );
    }

    #[tokio::test]
    async fn fixed_delay_suspends_caller() {
        let start = std::time::Instant::now();
        Latency::fixed(Duration::from_millis(20)).wait().await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
