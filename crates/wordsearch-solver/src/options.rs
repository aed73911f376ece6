use std::time::{Duration, Instant};

/// Which occurrences of a word a search reports.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Scan views top to bottom and report only the first confirmed hit.
    ///
    /// Within a row only the leftmost occurrence is considered; if it cannot be
    /// confirmed the scan moves on to the next row.
    #[default]
    FirstOccurrence,
    /// Report every confirmed occurrence in every row.
    ///
    /// A word read in both directions (a palindrome, or a single letter) is
    /// reported once per distinct coordinate sequence.
    AllOccurrences,
}

/// Settings for a search.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use wordsearch_solver::{MatchPolicy, SearchOptions};
///
/// let options = SearchOptions::new()
///     .with_min_length(-3)
///     .with_policy(MatchPolicy::AllOccurrences)
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(options.min_length(), 0);
/// assert!(options.deadline().is_some());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    min_length: usize,
    policy: MatchPolicy,
    deadline: Option<Instant>,
}

impl SearchOptions {
    /// Creates the default options: no minimum length, first occurrence only,
    /// no deadline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips words shorter than `min_length` characters.
    ///
    /// Negative values are clamped to zero.
    #[must_use]
    pub fn with_min_length(mut self, min_length: isize) -> Self {
        self.min_length = usize::try_from(min_length).unwrap_or(0);
        self
    }

    /// Sets the occurrence policy.
    #[must_use]
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Fails the search if it is still running at `deadline`.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Fails the search if it runs longer than `timeout` from now.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Returns the minimum word length.
    #[must_use]
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Returns the occurrence policy.
    #[must_use]
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
