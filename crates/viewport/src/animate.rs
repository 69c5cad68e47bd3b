use std::time::Duration;

/// Frame-sampled smooth scroll from one offset to another.
///
/// The browser's `behavior: "smooth"` is platform-defined; here it is pinned
/// to an ease-in-out cubic over a fixed duration so every frame (and every
/// test) sees the same trajectory. Time is passed in, never read from a
/// clock.
#[derive(Clone, Copy, Debug)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Duration,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, started_at: Duration, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at `now`. Clamps to the endpoints outside the time window.
    pub fn sample(&self, now: Duration) -> f32 {
        if now <= self.started_at || self.duration.is_zero() {
            return if self.duration.is_zero() { self.to } else { self.from };
        }
        let elapsed = now - self.started_at;
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    pub fn finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.started_at) >= self.duration
    }
}

fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}
