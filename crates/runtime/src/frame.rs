use foundation::time::Time;

/// Deterministic frame metadata.
///
/// This is the primary timebase for the viewer loop. It is intentionally
/// small and pure so a run can be recorded and replayed: no wall clock is
/// consulted anywhere.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Fixed delta time (seconds).
    pub dt_s: f64,
    /// Engine time at the start of the frame (seconds).
    pub time: Time,
}

impl Frame {
    pub fn new(index: u64, dt_s: f64) -> Self {
        Self {
            index,
            dt_s,
            time: Time(index as f64 * dt_s),
        }
    }

    pub fn next(self) -> Self {
        Self::new(self.index + 1, self.dt_s)
    }
}

/// Fixed-rate frame sequencer for headless loops.
///
/// `step()` returns the frame to run and advances the sequence, so a loop
/// body reads as `let frame = steps.step();`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedTimestep {
    upcoming: Frame,
}

impl FixedTimestep {
    pub fn new(hz: f64) -> Self {
        Self {
            upcoming: Frame::new(0, 1.0 / hz),
        }
    }

    pub fn step(&mut self) -> Frame {
        let frame = self.upcoming;
        self.upcoming = frame.next();
        frame
    }
}
