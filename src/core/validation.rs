//! Password strength rules for account signup
//!
//! The same predicate runs in the browser before the signup call and again in
//! the server relay, so both sides agree on what a strong password is.

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Symbols a password may (and must at least once) contain
pub const PASSWORD_SYMBOLS: &[char] = &['@', '$', '!', '%', '*', '#', '?', '&'];

/// HTML `pattern` attribute equivalent of [`is_strong_password`]
pub const PASSWORD_PATTERN: &str =
    r"(?=.*[A-Za-z])(?=.*\d)(?=.*[@$!%*#?&])[A-Za-z\d@$!%*#?&]{8,}";

/// Human readable summary of the password rule
pub const PASSWORD_RULE_HINT: &str = "Use at least 8 characters with a letter, a number and one of @ $ ! % * # ? &";

/// Reason a password was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordIssue {
    #[error("Password must be at least 8 characters")]
    TooShort,

    #[error("Password must contain at least one letter")]
    MissingLetter,

    #[error("Password must contain at least one digit")]
    MissingDigit,

    #[error("Password must contain at least one of @ $ ! % * # ? &")]
    MissingSymbol,

    #[error("Password contains a character that is not allowed: '{0}'")]
    InvalidCharacter(char),
}

fn is_password_symbol(c: char) -> bool {
    PASSWORD_SYMBOLS.contains(&c)
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_password_symbol(c)
}

/// Check a password and report the first rule it breaks.
///
/// Characters outside letters, digits and [`PASSWORD_SYMBOLS`] fail the whole
/// input, so only ASCII passes and the character count equals the byte length.
pub fn check_password(password: &str) -> Result<(), PasswordIssue> {
    if let Some(c) = password.chars().find(|c| !is_allowed_char(*c)) {
        return Err(PasswordIssue::InvalidCharacter(c));
    }

    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(PasswordIssue::TooShort);
    }

    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(PasswordIssue::MissingLetter);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordIssue::MissingDigit);
    }

    if !password.chars().any(is_password_symbol) {
        return Err(PasswordIssue::MissingSymbol);
    }

    Ok(())
}

/// Whether `password` satisfies the signup strength rule
pub fn is_strong_password(password: &str) -> bool {
    check_password(password).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_letters_digit_and_symbol() {
        assert!(is_strong_password("Passw0rd!"));
        assert!(is_strong_password("abcdefg1@"));
        assert!(is_strong_password("12345678a#"));
        assert!(is_strong_password("a1&aaaaa"));
    }

    #[test]
    fn test_rejects_short_password() {
        assert_eq!(check_password("abc123"), Err(PasswordIssue::TooShort));
        assert_eq!(check_password("a1!"), Err(PasswordIssue::TooShort));
        assert_eq!(check_password(""), Err(PasswordIssue::TooShort));
    }

    #[test]
    fn test_rejects_letters_only() {
        assert_eq!(check_password("abcdefgh"), Err(PasswordIssue::MissingDigit));
    }

    #[test]
    fn test_rejects_missing_classes() {
        assert_eq!(check_password("12345678!"), Err(PasswordIssue::MissingLetter));
        assert_eq!(check_password("abcdefg!?"), Err(PasswordIssue::MissingDigit));
        assert_eq!(check_password("abcdefg12"), Err(PasswordIssue::MissingSymbol));
    }

    #[test]
    fn test_rejects_characters_outside_allowed_set() {
        assert_eq!(
            check_password("password with spaces1!"),
            Err(PasswordIssue::InvalidCharacter(' '))
        );
        assert_eq!(
            check_password("Passw0rd!^"),
            Err(PasswordIssue::InvalidCharacter('^'))
        );
        // Non-ASCII letters are not part of [A-Za-z]
        assert!(!is_strong_password("pässw0rd!"));
        assert!(!is_strong_password("Passw0rd!\n"));
    }

    #[test]
    fn test_exactly_minimum_length() {
        assert!(is_strong_password("Abcde1@x"));
        assert!(!is_strong_password("Abcd1@x"));
    }

    #[test]
    fn test_every_symbol_counts() {
        for symbol in PASSWORD_SYMBOLS {
            let password = format!("abcdef1{symbol}");
            assert!(is_strong_password(&password), "{password} should pass");
        }
    }

    #[test]
    fn test_issue_messages() {
        assert_eq!(
            PasswordIssue::TooShort.to_string(),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            PasswordIssue::InvalidCharacter(' ').to_string(),
            "Password contains a character that is not allowed: ' '"
        );
    }
}
