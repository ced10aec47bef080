// src/utils/app_time.rs

pub type AppInstant = std::time::Instant;

pub fn now() -> AppInstant {
    std::time::Instant::now()
}

/// Millisecond timeline for the frame loop, counted from app start.
/// Animations and the poll timer run on this instead of wall time.
#[derive(Debug, Clone, Copy)]
pub struct AppClock {
    origin: AppInstant,
}

impl AppClock {
    pub fn start() -> Self {
        Self { origin: now() }
    }

    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

impl Default for AppClock {
    fn default() -> Self {
        Self::start()
    }
}
