use std::time::Instant;

/// Longest frame delta fed into the simulation accumulator. Stalls (window
/// drags, debugger pauses) otherwise turn into a burst of catch-up ticks.
const MAX_FRAME_DT: f32 = 0.25;

pub struct FrameTimer {
    last: Instant,
    pub dt: f32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            dt: 0.0,
        }
    }

    pub fn tick(&mut self) {
        let now = Instant::now();
        self.dt = now.duration_since(self.last).as_secs_f32().min(MAX_FRAME_DT);
        self.last = now;
    }
}
