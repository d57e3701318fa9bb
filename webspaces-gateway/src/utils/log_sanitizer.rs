//! Log sanitization utilities
//!
//! Prevents credentials (login password, root password, SSH keys) and very
//! large bodies from being written to debug/error logs.

use serde_json::Value;

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// JSON keys whose values are never logged.
const SECRET_KEYS: [&str; 3] = ["password", "confirm", "ssh"];

const REDACTED: &str = "***";

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` characters with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Render a JSON body for logging with every secret field replaced.
pub fn redact_for_log(body: &Value) -> String {
    let mut copy = body.clone();
    redact_in_place(&mut copy);
    truncate_for_log(&copy.to_string())
}

fn redact_in_place(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map.iter_mut() {
                if SECRET_KEYS.contains(&key.as_str()) {
                    *inner = Value::String(REDACTED.to_string());
                } else {
                    redact_in_place(inner);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_in_place),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "你".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn nested_secrets_are_redacted() {
        let body = json!({"details": {"password": "hunter2", "confirm": "hunter2", "ssh": "ssh-ed25519 AAAA"}});
        let logged = redact_for_log(&body);
        assert!(!logged.contains("hunter2"));
        assert!(!logged.contains("ssh-ed25519"));
        assert!(logged.contains(REDACTED));
    }

    #[test]
    fn non_secret_fields_kept() {
        let body = json!({"email": "a@b.com", "password": "x"});
        let logged = redact_for_log(&body);
        assert!(logged.contains("a@b.com"));
        assert!(!logged.contains("\"x\""));
    }
}
