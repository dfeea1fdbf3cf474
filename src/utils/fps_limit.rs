use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Weight of the latest frame in the smoothed frame time.
const SMOOTHING: f64 = 0.1;

/// Sleeps away whatever is left of the frame budget.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl Default for FpsLimiter {
    /// No limit: `delay` never sleeps.
    fn default() -> Self {
        Self {
            target_frametime: Duration::ZERO,
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }
}

impl FpsLimiter {
    pub fn new(max_fps: f64) -> Self {
        let mut limiter = Self::default();
        limiter.set_max_fps(max_fps);
        limiter
    }

    /// Non-positive or non-finite rates remove the limit.
    pub fn set_max_fps(&mut self, max_fps: f64) {
        self.target_frametime = if max_fps.is_finite() && max_fps > 0. {
            Duration::from_secs_f64(1. / max_fps)
        } else {
            Duration::ZERO
        };
        self.frametime_smoothed = self.target_frametime.as_secs_f64();
    }

    pub fn target_frametime(&self) -> Duration {
        self.target_frametime
    }

    /// Smoothed frame rate; infinite until the first frame of an unlimited limiter.
    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// Blocks until a full frame has passed since the previous call and
    /// returns the time the finished frame actually took.
    pub fn delay(&mut self) -> Duration {
        let before_wait = self.frame_timer.elapsed();

        if self.target_frametime > before_wait {
            sleep(self.target_frametime - before_wait);
        }

        let frametime = self.frame_timer.elapsed();
        self.frametime_smoothed += (frametime.as_secs_f64() - self.frametime_smoothed) * SMOOTHING;
        self.frame_timer = Instant::now();
        frametime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_waits_for_frame_budget() {
        let mut limiter = FpsLimiter::new(50.);
        assert_eq!(limiter.target_frametime(), Duration::from_millis(20));
        limiter.delay();
        let started = Instant::now();
        let frametime = limiter.delay();
        assert!(frametime >= Duration::from_millis(20));
        assert!(started.elapsed() >= Duration::from_millis(15));
        assert!(limiter.fps() <= 50.5);
    }

    #[test]
    fn test_unlimited() {
        for rate in [0., -1., f64::INFINITY, f64::NAN] {
            let mut limiter = FpsLimiter::new(rate);
            assert_eq!(limiter.target_frametime(), Duration::ZERO);
            assert!(limiter.delay() < Duration::from_millis(500));
        }
    }
}
