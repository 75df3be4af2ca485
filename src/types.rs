//! Evaluation result types - leak status, combined findings, presentation interface.

/// Leak status of a password, derived from a range lookup.
///
/// `Unknown` is distinct from `Clear`: a failed or unusable lookup must never
/// read as "no leaks".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeakStatus {
    /// The lookup failed or returned unusable data.
    Unknown,
    /// Confirmed absent from the leak records.
    Clear,
    /// Found fewer times than the critical threshold.
    Few(u64),
    /// Found at least the critical threshold number of times.
    Many(u64),
}

impl LeakStatus {
    /// Derives the leak status from an occasion count.
    ///
    /// # Arguments
    /// * `occasions` - `Some(count)` for a confirmed count, `None` for a failed lookup
    /// * `critical_threshold` - occasion count from which leaks count as numerous
    pub fn from_occasions(occasions: Option<u64>, critical_threshold: u64) -> Self {
        match occasions {
            None => LeakStatus::Unknown,
            Some(0) => LeakStatus::Clear,
            Some(count) if count < critical_threshold => LeakStatus::Few(count),
            Some(count) => LeakStatus::Many(count),
        }
    }

    /// User-facing message for this leak status.
    pub fn message(&self) -> &'static str {
        match self {
            LeakStatus::Unknown => "Error: could not check the password for leaks",
            LeakStatus::Clear => "No leaks found",
            LeakStatus::Few(_) => "Several leaks found",
            LeakStatus::Many(_) => "Numerous leaks found",
        }
    }
}

/// Overall indication rendered by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indication {
    Neutral,
    Success,
    Warning,
}

/// Combined result of one password evaluation.
///
/// A new value replaces the previous one entirely; findings are never merged
/// across evaluations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Findings {
    /// Leak status from the range lookup.
    pub leak: LeakStatus,
    /// User-facing weakness reasons from the heuristic evaluator.
    pub weaknesses: Vec<String>,
}

impl Findings {
    pub fn new(leak: LeakStatus, weaknesses: Vec<String>) -> Self {
        Findings { leak, weaknesses }
    }

    /// True if any heuristic weakness fired.
    pub fn is_weak(&self) -> bool {
        !self.weaknesses.is_empty()
    }

    /// Indication to present: `Success` only for a confirmed-clear password
    /// with no weaknesses.
    pub fn indication(&self) -> Indication {
        if self.leak == LeakStatus::Clear && !self.is_weak() {
            Indication::Success
        } else {
            Indication::Warning
        }
    }

    /// Ordered user-facing messages: the leak message first, then weaknesses.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = Vec::with_capacity(1 + self.weaknesses.len());
        messages.push(self.leak.message().to_string());
        messages.extend(self.weaknesses.iter().cloned());
        messages
    }
}

/// Presentation adapter driven by the check orchestrator.
///
/// Implementations own the page wiring (result area, styling); the core only
/// hands them an indication and an ordered message list.
pub trait Presenter {
    /// Resets the indication to neutral and hides the result area.
    fn clear(&mut self);

    /// Renders the result of one evaluation.
    fn present(&mut self, indication: Indication, messages: &[String]);
}
