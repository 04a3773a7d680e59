//! Property-test case counts taken from the environment.
//!
//! Suites ask for a default case count and let `PROGTEST_CASES` raise or lower
//! it, so CI can run deeper sweeps without touching the tests.

use std::env;

/// Environment variable overriding proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";

/// Case-count profile for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
}

impl ProptestRunProfile {
    /// Reads `PROGTEST_CASES`, falling back to `default_cases` when it is
    /// unset or malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use graphmark_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        Self::from_override(env::var(PROGTEST_CASES_ENV_KEY).ok().as_deref(), default_cases)
    }

    fn from_override(raw: Option<&str>, default_cases: u32) -> Self {
        let Some(raw) = raw else {
            return Self {
                cases: default_cases,
            };
        };
        let cases = match parse_cases(raw) {
            Ok(cases) => cases,
            Err(reason) => {
                tracing::warn!(
                    env = PROGTEST_CASES_ENV_KEY,
                    raw = %raw,
                    reason = %reason,
                    "ignoring invalid property-test case override",
                );
                default_cases
            }
        };
        Self { cases }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}
