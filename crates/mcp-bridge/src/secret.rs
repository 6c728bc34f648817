//! API token handling with automatic zeroization

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Hyperfabric API bearer token - automatically zeroed when dropped
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ApiToken {
    value: String,
}

impl ApiToken {
    /// Wrap a token as given, rejecting empty or whitespace-only values
    pub fn new(value: String) -> Option<Self> {
        if value.trim().is_empty() {
            return None;
        }
        Some(Self { value })
    }

    /// Get the raw token (use carefully)
    pub fn expose(&self) -> &str {
        &self.value
    }

    /// First and last four characters, safe to log
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.value.chars().collect();
        if chars.len() <= 8 {
            return "****".to_string();
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiToken")
            .field("value", &"[REDACTED]")
            .finish()
    }
}
