use serde::Serialize;

/// Seconds spent on the current level. The surrounding application calls `tick`
/// once per second; nothing here schedules itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LevelTimer {
    elapsed_secs: u64,
    running: bool,
}

impl LevelTimer {
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stops the timer and zeroes it.
    pub fn reset(&mut self) {
        *self = LevelTimer::default();
    }

    /// Adds one second if running. Returns whether the value changed.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.elapsed_secs += 1;
        }
        self.running
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn format(&self) -> String {
        format!("{:02}:{:02}", self.elapsed_secs / 60, self.elapsed_secs % 60)
    }
}
