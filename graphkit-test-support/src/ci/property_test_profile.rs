//! Property-test run profile parsing for CI and local overrides.
//!
//! Every property suite in the workspace reads its case count and fork mode
//! through [`ProptestRunProfile`], so one pair of environment variables tunes
//! all of them.

use std::env;
use std::num::ParseIntError;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const GRAPHKIT_PBT_FORK_ENV_KEY: &str = "GRAPHKIT_PBT_FORK";

/// Reasons an override is ignored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverrideError {
    /// The case count is not an unsigned integer.
    #[error("case count is not a number: {0}")]
    NotANumber(#[from] ParseIntError),
    /// The case count is zero.
    #[error("case count must be greater than zero")]
    ZeroCases,
    /// The fork flag is not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off, got {0:?}")]
    NotABool(String),
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the environment, falling back to the defaults
    /// for unset or malformed variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphkit_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: read_override(PROPTEST_CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: read_override(GRAPHKIT_PBT_FORK_ENV_KEY, parse_bool).unwrap_or(default_fork),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub fn fork(&self) -> bool { self.fork }
}

fn read_override<T>(key: &'static str, parser: fn(&str) -> Result<T, OverrideError>) -> Option<T> {
    let raw = env::var(key).ok()?;
    parser(&raw)
        .inspect_err(|reason| {
            ::tracing::warn!(
                env = key,
                raw = %raw,
                reason = %reason,
                "invalid property-test profile override; using default",
            );
        })
        .ok()
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>()? {
        0 => Err(OverrideError::ZeroCases),
        cases => Ok(cases),
    }
}

fn parse_bool(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool(raw.to_owned())),
    }
}
