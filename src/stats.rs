use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct Stats {
    total_cycles: u64,
    fetch_failures: u64,
    total_new_projects: u64,
    start_time: NaiveDateTime,
}

impl Stats {
    pub fn new(start_time: NaiveDateTime) -> Self {
        Self {
            total_cycles: 0,
            fetch_failures: 0,
            total_new_projects: 0,
            start_time,
        }
    }

    pub fn incr_total_cycles(&mut self) {
        self.total_cycles += 1;
    }

    pub fn incr_fetch_failures(&mut self) {
        self.fetch_failures += 1;
    }

    pub fn add_new_projects(&mut self, value: u64) {
        self.total_new_projects += value;
    }

    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    pub fn fetch_failures(&self) -> u64 {
        self.fetch_failures
    }

    pub fn total_new_projects(&self) -> u64 {
        self.total_new_projects
    }

    /// Elapsed time since start in seconds
    pub fn elapsed_time(&self, now: NaiveDateTime) -> i64 {
        (now - self.start_time).num_seconds()
    }
}
