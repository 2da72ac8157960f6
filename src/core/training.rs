use std::collections::VecDeque;

use chrono::NaiveTime;

/// Recent training progress reported by the node.
#[must_use]
#[derive(Debug)]
pub struct TrainingLog {
    losses: VecDeque<f64>,
    lines: VecDeque<LogLine>,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    pub time: NaiveTime,
    pub message: String,
}

impl Default for TrainingLog {
    fn default() -> Self {
        Self {
            losses: VecDeque::with_capacity(Self::MAX_LOSSES),
            lines: VecDeque::with_capacity(Self::MAX_LINES),
        }
    }
}

impl TrainingLog {
    pub const MAX_LOSSES: usize = 50;
    pub const MAX_LINES: usize = 10;

    pub fn record(&mut self, epoch: u64, loss: f64, time: NaiveTime) {
        if self.losses.len() == Self::MAX_LOSSES {
            self.losses.pop_front();
        }
        self.losses.push_back(loss);

        if self.lines.len() == Self::MAX_LINES {
            self.lines.pop_back();
        }
        let message = format!("Epoch {epoch} | Loss: {loss:.6}");
        self.lines.push_front(LogLine { time, message });
    }

    /// Loss history, oldest first.
    pub fn losses(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.losses.iter().copied()
    }

    /// Log lines, newest first.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &LogLine> {
        self.lines.iter()
    }
}
