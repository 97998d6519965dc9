//! Typed helpers for reading configuration values.
//!
//! Each helper follows the pattern: look up key → parse → fall back to default.
//! Lookups go through a caller-supplied function so tests can inject values
//! without touching the process environment.

use std::path::PathBuf;
use std::str::FromStr;

/// Key → value lookup used by the helpers below.
pub trait Lookup: Fn(&str) -> Option<String> {}

impl<F: Fn(&str) -> Option<String>> Lookup for F {}

/// Lookup backed by the real process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get a trimmed, non-empty string. Blank values count as unset.
#[inline]
pub fn env_string_opt(lookup: &impl Lookup, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Get a String, with default fallback.
#[inline]
pub fn env_string(lookup: &impl Lookup, key: &str, default: &str) -> String {
    env_string_opt(lookup, key).unwrap_or_else(|| default.to_string())
}

/// Get any `FromStr` value, with default fallback on absence or parse failure.
#[inline]
pub fn env_parse<T: FromStr>(lookup: &impl Lookup, key: &str, default: T) -> T {
    env_string_opt(lookup, key)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Get a bool, with default fallback.
///
/// Recognizes: "true", "1", "yes", "on" (case-insensitive) as true.
/// Any other set value is false.
#[inline]
pub fn env_bool(lookup: &impl Lookup, key: &str, default: bool) -> bool {
    env_string_opt(lookup, key)
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes" | "on"))
        .unwrap_or(default)
}

/// Get a PathBuf, with default fallback.
#[inline]
pub fn env_path(lookup: &impl Lookup, key: &str, default: &str) -> PathBuf {
    env_string_opt(lookup, key)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Lookup {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_env_string_default() {
        let lookup = lookup_from(&[]);
        assert_eq!(env_string(&lookup, "NAME", "default"), "default");
    }

    #[test]
    fn test_env_string_blank_is_unset() {
        let lookup = lookup_from(&[("API_KEY", "   ")]);
        assert_eq!(env_string_opt(&lookup, "API_KEY"), None);
    }

    #[test]
    fn test_env_parse_falls_back_on_garbage() {
        let lookup = lookup_from(&[("PORT", "eighty")]);
        assert_eq!(env_parse::<u16>(&lookup, "PORT", 3000), 3000);

        let lookup = lookup_from(&[("PORT", "8080")]);
        assert_eq!(env_parse::<u16>(&lookup, "PORT", 3000), 8080);
    }

    #[test]
    fn test_env_bool_variants() {
        let lookup = lookup_from(&[("A", "YES"), ("B", "0"), ("C", "on")]);
        assert!(env_bool(&lookup, "A", false));
        assert!(!env_bool(&lookup, "B", true));
        assert!(env_bool(&lookup, "C", false));
        assert!(env_bool(&lookup, "UNSET", true));
    }

    #[test]
    fn test_env_path_default() {
        let lookup = lookup_from(&[]);
        assert_eq!(
            env_path(&lookup, "SNAPSHOT_PATH", "data/index.json"),
            PathBuf::from("data/index.json")
        );
    }
}
