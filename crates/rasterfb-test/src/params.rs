//! Regression test parameters and operations

use crate::error::TestError;
use rasterfb_core::CanonicalColor;
use tracing::{error, info};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Report failures only (default)
    #[default]
    Compare,
    /// Also log every comparison that passes
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the name of a regression test, the index of the current check,
/// and every failure seen so far. Checks never panic; call
/// [`cleanup`](Self::cleanup) at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "codec")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// Installs the test log subscriber and reads the mode from
    /// `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        crate::init_logging();
        let mode = RegTestMode::from_env();
        info!(test = test_name, ?mode, "starting {test_name}_reg");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn pass(&self, what: &str) -> bool {
        if self.display() {
            info!(test = %self.test_name, index = self.index, "{what} ok");
        }
        true
    }

    fn fail(&mut self, err: TestError) -> bool {
        error!(test = %self.test_name, "Failure in {}_reg: {err}", self.test_name);
        self.failures.push(err);
        false
    }

    /// Compare two numeric values
    ///
    /// # Returns
    ///
    /// `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        if (expected - actual).abs() > delta {
            let index = self.index;
            return self.fail(TestError::ValueMismatch {
                index,
                expected,
                actual,
                delta,
            });
        }
        self.pass("value comparison")
    }

    /// Compare two colors for exact equality
    pub fn compare_colors(&mut self, expected: CanonicalColor, actual: CanonicalColor) -> bool {
        self.index += 1;
        if expected != actual {
            let index = self.index;
            return self.fail(TestError::ColorMismatch {
                index,
                expected: expected.to_array(),
                actual: actual.to_array(),
            });
        }
        self.pass("color comparison")
    }

    /// Compare two byte arrays for exact equality
    pub fn compare_bytes(&mut self, expected: &[u8], actual: &[u8]) -> bool {
        self.index += 1;
        let first_diff = expected
            .iter()
            .zip(actual)
            .position(|(a, b)| a != b)
            .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())));
        if let Some(offset) = first_diff {
            let index = self.index;
            return self.fail(TestError::BytesMismatch { index, offset });
        }
        self.pass("byte comparison")
    }

    /// Record a boolean condition
    pub fn check(&mut self, condition: bool) -> bool {
        self.compare_values(1.0, if condition { 1.0 } else { 0.0 }, 0.0)
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            info!("SUCCESS: {}_reg ({} checks)", self.test_name, self.index);
            true
        } else {
            error!(
                "FAILURE: {}_reg ({} of {} checks failed)",
                self.test_name,
                self.failures.len(),
                self.index
            );
            false
        }
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }
}
