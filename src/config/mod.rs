// src/config/mod.rs
// All tunables load from environment variables with typed defaults.
// The config is built once in main() and carried in AppState - no globals.

use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct BfhlConfig {
    // ── Server
    pub host: String,
    pub port: u16,

    // ── Identification (stamped into every response envelope)
    pub official_email: String,

    // ── Gemini API
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_timeout_secs: u64,

    // ── Logging
    pub log_level: String,

    // ── Per-operation abuse limits
    pub limits: Limits,
}

/// Static size/range caps applied before any operation runs.
#[derive(Debug, Clone)]
pub struct Limits {
    pub fibonacci_max: i64,
    pub prime_max_len: usize,
    pub lcm_max_len: usize,
    pub hcf_max_len: usize,
    pub question_max_chars: usize,
    pub request_payload_max_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            fibonacci_max: 1000,
            prime_max_len: 10_000,
            lcm_max_len: 100,
            hcf_max_len: 100,
            question_max_chars: 1000,
            request_payload_max_bytes: 10 * 1024,
        }
    }
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => match val.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                default
            }
        },
        Err(_) => default,
    }
}

/// Read an optional secret. Empty values count as unset.
fn env_var_opt(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(val) if !val.trim().is_empty() => Some(val.trim().to_string()),
        _ => None,
    }
}

impl BfhlConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_var_or("HOST", "0.0.0.0".to_string()),
            port: env_var_or("PORT", 4000),
            official_email: env_var_or("OFFICIAL_EMAIL", "official@example.com".to_string()),
            gemini_api_key: env_var_opt("GEMINI_API_KEY"),
            gemini_model: env_var_or("GEMINI_MODEL", "gemini-1.5-flash".to_string()),
            gemini_timeout_secs: env_var_or("GEMINI_TIMEOUT_SECS", 30),
            log_level: env_var_or("LOG_LEVEL", "info".to_string()),
            limits: Limits::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_match_documented_caps() {
        let limits = Limits::default();
        assert_eq!(limits.fibonacci_max, 1000);
        assert_eq!(limits.prime_max_len, 10_000);
        assert_eq!(limits.lcm_max_len, 100);
        assert_eq!(limits.hcf_max_len, 100);
        assert_eq!(limits.question_max_chars, 1000);
        assert_eq!(limits.request_payload_max_bytes, 10_240);
    }
}
