//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use geodesic_core::{Grid, Pixel};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare results silently (default)
    #[default]
    Compare,
    /// Also dump every compared grid to stderr
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
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and recorded failures.
pub struct RegParams {
    /// Name of the test (e.g., "reconstruct")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, error: TestError) {
        eprintln!("Failure in {}_reg: {}", self.test_name, error);
        self.failures.push(error);
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        if (expected - actual).abs() > delta {
            self.fail(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
            false
        } else {
            true
        }
    }

    /// Compare two grids for exact equality
    ///
    /// On mismatch the coordinates of the first differing element are
    /// recorded.
    pub fn compare_grids<T: Pixel>(&mut self, expected: &Grid<T>, actual: &Grid<T>) -> bool {
        self.index += 1;
        if self.display() {
            eprintln!("[{}] expected {:?}", self.index, expected.data());
            eprintln!("[{}] actual   {:?}", self.index, actual.data());
        }

        if !expected.same_shape(actual) {
            self.fail(TestError::DimensionMismatch {
                index: self.index,
                expected: expected.dims().to_vec(),
                actual: actual.dims().to_vec(),
            });
            return false;
        }

        let diff = expected
            .data()
            .iter()
            .zip(actual.data())
            .position(|(a, b)| a != b);
        match diff {
            Some(i) => {
                let mut coords = vec![0usize; expected.ndim()];
                expected.shape().coords_of(i, &mut coords);
                self.fail(TestError::GridMismatch {
                    index: self.index,
                    coords,
                    expected: format!("{:?}", expected.get_linear(i)),
                    actual: format!("{:?}", actual.get_linear(i)),
                });
                false
            }
            None => true,
        }
    }

    /// Record a boolean property
    pub fn check(&mut self, ok: bool, what: &str) -> bool {
        self.index += 1;
        if !ok {
            self.fail(TestError::CheckFailed {
                index: self.index,
                what: what.to_string(),
            });
        }
        ok
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        let success = self.is_success();
        if success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();
        success
    }

    /// Report results as a [`TestResult`]
    ///
    /// # Errors
    ///
    /// Returns [`TestError::Failed`] carrying the number of failed checks.
    pub fn into_result(self) -> TestResult<()> {
        let count = self.failures.len();
        let test_name = self.test_name.clone();
        if self.cleanup() {
            Ok(())
        } else {
            Err(TestError::Failed { test_name, count })
        }
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }
}
