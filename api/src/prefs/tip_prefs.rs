use std::env;
use std::time::Duration;

use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;

/// How long the simulated transfer takes unless configured otherwise.
pub const DEFAULT_SEND_DELAY: Duration = Duration::from_millis(1500);

/// Settings for the tip flow.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TipPrefs {
    /// Duration of the simulated transfer.
    pub send_delay: Duration,

    /// Makes the simulated transfer fail, to exercise the failure path.
    pub simulate_failure: bool,
}

impl TipPrefs {
    /// Creates a TipPrefs instance from environment variables,
    /// with a conservative in-code default.
    ///
    /// Each variable is looked up in the runtime environment first, then in
    /// the value baked in at compile time. A browser has no runtime
    /// environment, so web builds only ever see the baked values.
    ///
    /// # Environment Variables
    /// - `CIRCLES_SEND_DELAY_MS`: simulated transfer time in milliseconds.
    ///   defaults to 1500
    /// - `CIRCLES_SIMULATE_FAILURE`: "true" or "1" (case-insensitive) makes
    ///   every send fail. defaults to false
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok().or_else(|| compiled_in(key)))
    }

    /// Builds prefs from an arbitrary key lookup. Unparseable values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let send_delay = lookup("CIRCLES_SEND_DELAY_MS")
            .and_then(|val| match val.trim().parse::<u64>() {
                Ok(ms) => Some(Duration::from_millis(ms)),
                Err(e) => {
                    warn!("ignoring CIRCLES_SEND_DELAY_MS={:?}: {}", val, e);
                    None
                }
            })
            .unwrap_or(DEFAULT_SEND_DELAY);

        let simulate_failure = lookup("CIRCLES_SIMULATE_FAILURE")
            .map(|val| val.eq_ignore_ascii_case("true") || val == "1")
            .unwrap_or(false);

        Self {
            send_delay,
            simulate_failure,
        }
    }
}

fn compiled_in(key: &str) -> Option<String> {
    let value = match key {
        "CIRCLES_SEND_DELAY_MS" => option_env!("CIRCLES_SEND_DELAY_MS"),
        "CIRCLES_SIMULATE_FAILURE" => option_env!("CIRCLES_SIMULATE_FAILURE"),
        _ => None,
    };
    value.map(str::to_string)
}

impl Default for TipPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let prefs = TipPrefs::from_lookup(|_| None);
        assert_eq!(prefs.send_delay, DEFAULT_SEND_DELAY);
        assert!(!prefs.simulate_failure);
    }

    #[test]
    fn reads_values() {
        let prefs = TipPrefs::from_lookup(lookup_from(&[
            ("CIRCLES_SEND_DELAY_MS", "20"),
            ("CIRCLES_SIMULATE_FAILURE", "TRUE"),
        ]));
        assert_eq!(prefs.send_delay, Duration::from_millis(20));
        assert!(prefs.simulate_failure);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let prefs = TipPrefs::from_lookup(lookup_from(&[
            ("CIRCLES_SEND_DELAY_MS", "soon"),
            ("CIRCLES_SIMULATE_FAILURE", "maybe"),
        ]));
        assert_eq!(prefs.send_delay, DEFAULT_SEND_DELAY);
        assert!(!prefs.simulate_failure);
    }
}
