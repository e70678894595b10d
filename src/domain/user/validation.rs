//! User validation utilities

/// Check whether a candidate string has a plausible email shape
///
/// Syntactic check only: a non-empty local part, a single "@", and a domain
/// containing a "." with characters on both sides. Deliverability is not
/// verified.
pub fn is_email_valid(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_email_valid("a@b.com"));
        assert!(is_email_valid("first.last@example.org"));
        assert!(is_email_valid("user+tag@sub.domain.io"));
        assert!(is_email_valid("x@y.z"));
    }

    #[test]
    fn test_missing_at_sign() {
        assert!(!is_email_valid(""));
        assert!(!is_email_valid("plainaddress"));
        assert!(!is_email_valid("a.b.com"));
    }

    #[test]
    fn test_missing_dot_in_domain() {
        assert!(!is_email_valid("a@bcom"));
        assert!(!is_email_valid("a@"));
    }

    #[test]
    fn test_empty_local_part() {
        assert!(!is_email_valid("@b.com"));
    }

    #[test]
    fn test_malformed_domain() {
        assert!(!is_email_valid("a@.com"));
        assert!(!is_email_valid("a@b."));
        assert!(!is_email_valid("a@b@c.com"));
    }
}
