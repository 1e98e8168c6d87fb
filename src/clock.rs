use std::time::Instant;

/// Seconds elapsed since the animation started. Never runs backwards and is never reset.
#[derive(Debug, Copy, Clone)]
pub struct AnimationClock {
    start: Instant,
}

impl AnimationClock {
    pub fn start() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { start }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.start).as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn elapsed_from_start() {
        let start = Instant::now();
        let clock = AnimationClock::starting_at(start);

        assert_eq!(clock.elapsed_at(start), 0.0);
        assert_eq!(clock.elapsed_at(start + Duration::from_millis(1500)), 1.5);
    }

    #[test]
    fn never_negative() {
        let start = Instant::now() + Duration::from_secs(10);
        let clock = AnimationClock::starting_at(start);

        assert_eq!(clock.elapsed_at(Instant::now()), 0.0);
    }

    #[test]
    fn non_decreasing() {
        let clock = AnimationClock::start();

        let mut last = 0.0;
        for _ in 0..1000 {
            let t = clock.elapsed();
            assert!(t >= last);
            last = t;
        }
    }
}
