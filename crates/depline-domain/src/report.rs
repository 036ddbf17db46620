use crate::classify::Classification;

/// Line tallies for one batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineCounts {
    pub lines: u32,
    pub dependencies: u32,
    /// Ignored lines, rejected ones included.
    pub ignored: u32,
    pub parse_errors: u32,
    pub rules_registered: u32,
    pub rules_dropped: u32,
}

impl LineCounts {
    pub fn record(&mut self, outcome: &Classification) {
        self.lines += 1;
        match outcome {
            Classification::RuleRegistered { .. } => self.rules_registered += 1,
            Classification::RuleDropped { .. } => self.rules_dropped += 1,
            Classification::Ignored(_) => self.ignored += 1,
            Classification::DependencyFound(_) => self.dependencies += 1,
            Classification::Rejected(_) => {
                self.ignored += 1;
                self.parse_errors += 1;
            }
        }
    }

    pub fn merge(&mut self, other: &LineCounts) {
        self.lines += other.lines;
        self.dependencies += other.dependencies;
        self.ignored += other.ignored;
        self.parse_errors += other.parse_errors;
        self.rules_registered += other.rules_registered;
        self.rules_dropped += other.rules_dropped;
    }
}
