use std::error::Error;

/// A set of configuration values whose validity has not been checked yet. The
/// checked configuration can only be obtained once checking has completed, so
/// estimators and optimizers never run with an invalid learning rate, batch
/// size or stopping criterion.
///
/// The validation done in `check_ref()` and `check()` must be identical.
pub trait ParamGuard {
    /// The checked configuration
    type Checked;
    /// Error type resulting from failed checking
    type Error: Error;

    /// Checks the configuration and returns a reference to the checked values if
    /// successful
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Checks the configuration and returns the checked values if successful
    fn check(self) -> Result<Self::Checked, Self::Error>;

    /// Calls `check()` and unwraps the result
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        self.check().unwrap()
    }
}
