/// Aggregate completion over the current level list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Completed share in percent (0 when there are no levels)
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    /// Completed share in 0.0..=1.0 for progress bars
    pub fn fraction(&self) -> f32 {
        (self.percentage() / 100.0) as f32
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} levels completed ({:.1}%)",
            self.completed,
            self.total,
            self.percentage()
        )
    }
}
