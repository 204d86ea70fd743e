use std::env;
use std::str::FromStr;

/// Keys the platform cannot store. `std::env` may panic on these.
fn is_representable(key: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0'])
}

/// Look up `key` in the process environment.
///
/// A variable set to the empty string is present. Non-UTF-8 values are
/// converted lossily.
pub fn lookup_env(key: &str) -> Option<String> {
    if !is_representable(key) {
        return None;
    }
    env::var_os(key).map(|val| val.to_string_lossy().into_owned())
}

/// Value of `key`, or `fallback` when it is unset.
pub fn get_env(key: &str, fallback: &str) -> String {
    lookup_env(key).unwrap_or_else(|| fallback.to_string())
}

/// Parsed value of `key`, or `fallback` when it is unset or does not parse.
pub fn get_env_parsed<T: FromStr>(key: &str, fallback: T) -> T {
    let Some(raw) = lookup_env(key) else {
        return fallback;
    };
    match raw.trim().parse() {
        Ok(val) => val,
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment value");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every test owns its variable name; the process environment is shared
    // across the test harness threads.
    fn set(key: &str, value: &str) {
        unsafe { env::set_var(key, value) }
    }

    #[test]
    fn test_get_env_unset_returns_fallback() {
        let key = "SATCHEL_TEST_ENV_UNSET_7f3a";
        assert_eq!(get_env(key, "fallback"), "fallback");
        assert_eq!(get_env(key, ""), "");
    }

    #[test]
    fn test_get_env_set_returns_value() {
        let key = "SATCHEL_TEST_ENV_SET_91c2";
        set(key, "value");
        assert_eq!(get_env(key, "fallback"), "value");
    }

    #[test]
    fn test_get_env_empty_value_is_present() {
        let key = "SATCHEL_TEST_ENV_EMPTY_04be";
        set(key, "");
        assert_eq!(get_env(key, "fallback"), "");
        assert_eq!(lookup_env(key), Some(String::new()));
    }

    #[test]
    fn test_get_env_unrepresentable_keys() {
        assert_eq!(get_env("", "fallback"), "fallback");
        assert_eq!(get_env("A=B", "fallback"), "fallback");
        assert_eq!(get_env("A\0B", "fallback"), "fallback");
    }

    #[test]
    fn test_get_env_parsed() {
        let key = "SATCHEL_TEST_ENV_PARSED_5d10";
        set(key, " 42 ");
        assert_eq!(get_env_parsed(key, 7u64), 42);
    }

    #[test]
    fn test_get_env_parsed_invalid_falls_back() {
        let key = "SATCHEL_TEST_ENV_PARSED_BAD_e8a1";
        set(key, "forty-two");
        assert_eq!(get_env_parsed(key, 7u64), 7);
    }

    #[test]
    fn test_get_env_parsed_unset_falls_back() {
        assert!(get_env_parsed("SATCHEL_TEST_ENV_PARSED_UNSET_2b77", true));
    }
}
