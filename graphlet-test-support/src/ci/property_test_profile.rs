//! Property-test run profile parsing for CI and local overrides.
//!
//! Suites share one reading of `PROGTEST_CASES` and `GRAPHLET_PBT_FORK` so a
//! CI job can scale every proptest block at once.

use std::env;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const GRAPHLET_PBT_FORK_ENV_KEY: &str = "GRAPHLET_PBT_FORK";

/// Reasons an override value is ignored.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum OverrideError {
    /// The case count was not an unsigned integer.
    #[error("case count is not an unsigned integer: {reason}")]
    UnparsableCases {
        /// Parser message.
        reason: String,
    },
    /// The case count was zero.
    #[error("case count must be greater than zero")]
    ZeroCases,
    /// The fork flag was not a recognised boolean spelling.
    #[error("expected one of true/false/1/0/yes/no/on/off")]
    UnrecognisedFlag,
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the process environment, falling back to the
    /// given defaults for missing or invalid overrides.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphlet_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Builds a profile from an arbitrary key lookup.
    ///
    /// Invalid overrides are logged at `WARN` and replaced by the defaults.
    #[must_use]
    pub fn from_lookup<F>(default_cases: u32, default_fork: bool, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cases = resolve(
            PROGTEST_CASES_ENV_KEY,
            lookup(PROGTEST_CASES_ENV_KEY),
            default_cases,
            parse_cases,
        );
        let fork = resolve(
            GRAPHLET_PBT_FORK_ENV_KEY,
            lookup(GRAPHLET_PBT_FORK_ENV_KEY),
            default_fork,
            parse_flag,
        );
        Self { cases, fork }
    }

    #[rustfmt::skip]
    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 { self.cases }

    #[rustfmt::skip]
    /// Whether proptest cases run in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool { self.fork }
}

fn resolve<T>(
    key: &'static str,
    raw: Option<String>,
    default: T,
    parse: fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Some(raw) = raw else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        tracing::warn!(
            env = key,
            raw = %raw,
            %error,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(error) => Err(OverrideError::UnparsableCases {
            reason: error.to_string(),
        }),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::UnrecognisedFlag),
    }
}
