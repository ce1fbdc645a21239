//! Verifier configuration.

/// Tolerance used when the default is not overridden.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Settings for a [`Verifier`](crate::Verifier).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerifierConfig {
    /// Allowed discrepancy between the two sides of an identity.
    ///
    /// Passed to [`ApproxEq`](numera_rings::ApproxEq); exact types ignore it.
    pub tolerance: f64,
}

impl VerifierConfig {
    /// Creates a configuration with the default tolerance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Sets the comparison tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self::new()
    }
}
