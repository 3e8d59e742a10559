//! Lifecycle shared by every form that performs one network call per submit.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

/// Where a form is in its submit cycle.
///
/// `Failed` accepts a new submit just like `Idle`; only `Submitting` blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitPhase {
    /// `true` while a request is in flight; drives the button spinner.
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Submitting)
    }
}
