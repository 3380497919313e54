use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static BEARER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bearer\s+[a-zA-Z0-9\-_\.=]+").expect("valid bearer pattern"));

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"["']?(?:access_token|accessToken|api_key|apikey|token|secret|value)["']?\s*[:=]\s*["']?[a-zA-Z0-9\-_\.=/+]{8,}["']?"#,
    )
    .expect("valid token pattern")
});

static PASSWORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)["']?password["']?\s*[:=]\s*["']?[^"'\s,;}]+["']?"#)
        .expect("valid password pattern")
});

/// Scrubs credentials out of text that came back from upstream services
///
/// Error messages from the vault and the credential chain end up in logs and
/// in fatal startup errors; tokens and key-like values must not.
#[derive(Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    /// Create a new scrubber
    pub const fn new() -> Self {
        Self
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = BEARER_PATTERN.replace_all(message, "Bearer [TOKEN_REDACTED]");
        let scrubbed = TOKEN_PATTERN.replace_all(&scrubbed, |caps: &regex::Captures| {
            let full_match = &caps[0];
            if let Some(colon_pos) = full_match.find(':') {
                format!("{}:[REDACTED]", &full_match[..colon_pos])
            } else if let Some(eq_pos) = full_match.find('=') {
                format!("{}=[REDACTED]", &full_match[..eq_pos])
            } else {
                "[REDACTED]".to_string()
            }
        });
        PASSWORD_PATTERN
            .replace_all(&scrubbed, "password=[REDACTED]")
            .into_owned()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
