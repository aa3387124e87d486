//! Authentication scheme detection.
//!
//! Closed set of indicators; the first one found anywhere in the tree
//! wins, and absence is reported as [`AuthScheme::NotDetected`] rather
//! than an error.

use crate::core::AuthScheme;

const INDICATORS: &[(&str, AuthScheme)] = &[
    ("AddIdentity", AuthScheme::Identity),
    ("IdentityUser", AuthScheme::Identity),
    ("AddJwtBearer", AuthScheme::JwtBearer),
    ("AddCookie", AuthScheme::Cookie),
];

/// Scan one file's text for an authentication indicator.
pub fn detect_in_text(text: &str) -> Option<AuthScheme> {
    INDICATORS
        .iter()
        .find(|(marker, _)| text.contains(marker))
        .map(|(_, scheme)| *scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_indicators_win_over_later_ones() {
        let text = "services.AddIdentity<AppUser, Role>(); services.AddCookie();";
        assert_eq!(detect_in_text(text), Some(AuthScheme::Identity));
    }

    #[test]
    fn jwt_and_cookie_detection() {
        assert_eq!(detect_in_text("auth.AddJwtBearer(o => {})"), Some(AuthScheme::JwtBearer));
        assert_eq!(detect_in_text("auth.AddCookie()"), Some(AuthScheme::Cookie));
    }

    #[test]
    fn plain_code_detects_nothing() {
        assert_eq!(detect_in_text("public class Order {}"), None);
    }
}
