//! Score display boundary

/// Receives the running total whenever it changes
pub trait ScoreSink {
    fn on_score_changed(&mut self, total: u64);
}

/// Score display that writes to the log
#[derive(Debug, Clone, Default)]
pub struct LogScoreSink {
    pub last: u64,
}

impl ScoreSink for LogScoreSink {
    fn on_score_changed(&mut self, total: u64) {
        self.last = total;
        log::info!("Score: {}", total);
    }
}

impl ScoreSink for Vec<u64> {
    fn on_score_changed(&mut self, total: u64) {
        self.push(total);
    }
}
