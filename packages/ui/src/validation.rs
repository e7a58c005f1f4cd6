//! Client-side field validation.
//!
//! These rules mirror what the backend enforces; they exist so a doomed
//! request never leaves the browser. Validation failures short-circuit
//! before any network call.

/// Requirement text shown next to the username inputs.
pub const USERNAME_REQUIREMENTS: &str = "Username must be 3-50 characters, only letters, \
     numbers, dots, underscores; no consecutive dots/underscores.";

/// Requirement text shown next to the password inputs.
pub const PASSWORD_REQUIREMENTS: &str = "Password must be 8-50 characters and include at \
     least one uppercase, lowercase, number, and special character.";

/// Requirement text shown next to the email inputs.
pub const EMAIL_REQUIREMENTS: &str = "Please enter a valid email address.";

/// 3-50 characters from `[A-Za-z0-9._]`, with no separator doubled.
pub fn is_valid_username(username: &str) -> bool {
    let len = username.chars().count();
    if !(3..=50).contains(&len) {
        return false;
    }
    let mut prev = None;
    for c in username.chars() {
        if !(c.is_ascii_alphanumeric() || c == '.' || c == '_') {
            return false;
        }
        if (c == '.' || c == '_') && prev == Some(c) {
            return false;
        }
        prev = Some(c);
    }
    true
}

/// One `@`, a non-empty local part, and a domain with a 2+-letter TLD.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || domain.contains('@')
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
        || !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// 8-50 characters covering all four classes: upper, lower, digit, special.
pub fn is_valid_password(password: &str) -> bool {
    let len = password.chars().count();
    (8..=50).contains(&len)
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_accepts_letters_digits_separators() {
        assert!(is_valid_username("abc_123"));
        assert!(is_valid_username("a.b_c"));
        assert!(is_valid_username("abc"));
    }

    #[test]
    fn username_rejects_out_of_range_lengths() {
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username(&"a".repeat(51)));
        assert!(is_valid_username(&"a".repeat(50)));
    }

    #[test]
    fn username_rejects_doubled_separators() {
        assert!(!is_valid_username("a..b"));
        assert!(!is_valid_username("a__b"));
        // Mixed separators are allowed; only a repeat of the same one is not.
        assert!(is_valid_username("a._b"));
    }

    #[test]
    fn username_rejects_foreign_characters() {
        assert!(!is_valid_username("has space"));
        assert!(!is_valid_username("emoji🙂name"));
        assert!(!is_valid_username("semi;colon"));
    }

    #[test]
    fn email_accepts_ordinary_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!is_valid_email("invalidemail"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("two@@example.com"));
    }

    #[test]
    fn password_requires_all_four_classes() {
        assert!(is_valid_password("Goodpass1!"));
        assert!(!is_valid_password("short"));
        assert!(!is_valid_password("alllowercase1!"));
        assert!(!is_valid_password("ALLUPPERCASE1!"));
        assert!(!is_valid_password("NoDigits!!"));
        assert!(!is_valid_password("NoSpecial11"));
    }

    #[test]
    fn password_enforces_length_bounds() {
        assert!(!is_valid_password("Aa1!"));
        let long = format!("Aa1!{}", "x".repeat(47));
        assert_eq!(long.chars().count(), 51);
        assert!(!is_valid_password(&long));
    }
}
