use sha2::{Digest, Sha256};

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar";

/// Gravatar URL for an email: 200px, "pg" rating, mystery-man fallback.
///
/// Gravatar hashes the trimmed, lowercased address, so differently cased
/// spellings of one email map to the same URL. Gravatar accepts MD5 or
/// SHA-256 hashes; SHA-256 is used here.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Sha256::digest(normalized.as_bytes());
    format!("{GRAVATAR_BASE}/{}?s=200&r=pg&d=mm", hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_email_same_url() {
        assert_eq!(gravatar_url("ann@example.com"), gravatar_url("ann@example.com"));
    }

    #[test]
    fn case_and_whitespace_do_not_matter() {
        assert_eq!(
            gravatar_url("  Ann@Example.COM "),
            gravatar_url("ann@example.com")
        );
    }

    #[test]
    fn different_emails_differ() {
        assert_ne!(gravatar_url("ann@example.com"), gravatar_url("bob@example.com"));
    }

    #[test]
    fn url_carries_size_rating_and_default() {
        let url = gravatar_url("ann@example.com");
        assert!(url.starts_with("https://www.gravatar.com/avatar/"));
        assert!(url.ends_with("?s=200&r=pg&d=mm"));
        // 64 hex chars of sha256
        let hash = url
            .trim_start_matches("https://www.gravatar.com/avatar/")
            .split('?')
            .next()
            .unwrap();
        assert_eq!(hash.len(), 64);
    }
}
