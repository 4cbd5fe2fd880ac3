//! Password policy enforcement for new passwords.

use zxcvbn::Score;

use tgle_core::config::AuthConfig;
use tgle_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
    min_score: Score,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let min_score = match config.password_min_score {
            0 => Score::Zero,
            1 => Score::One,
            2 => Score::Two,
            3 => Score::Three,
            _ => Score::Four,
        };

        Self {
            min_length: config.password_min_length,
            min_score,
        }
    }

    /// Validates a password.
    ///
    /// `user_inputs` (email, nickname) are penalized by the strength estimate.
    pub fn validate(&self, password: &str, user_inputs: &[&str]) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        let estimate = zxcvbn::zxcvbn(password, user_inputs);
        if estimate.score() < self.min_score {
            return Err(AppError::validation(
                "Password is too weak. Use a longer or less predictable password.",
            ));
        }

        Ok(())
    }

    /// Validates that the password and its confirmation match.
    pub fn validate_confirmation(&self, password: &str, confirm: &str) -> Result<(), AppError> {
        if password != confirm {
            return Err(AppError::validation("Passwords do not match"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig::default())
    }

    #[test]
    fn test_too_short() {
        let err = validator().validate("a1!", &[]).unwrap_err();
        assert!(err.message.contains("at least"));
    }

    #[test]
    fn test_too_weak() {
        assert!(validator().validate("password", &[]).is_err());
        assert!(validator().validate("12345678", &[]).is_err());
    }

    #[test]
    fn test_strong_enough() {
        assert!(
            validator()
                .validate("violet-harbor-concert-91", &["fan@tgle.ml"])
                .is_ok()
        );
    }

    #[test]
    fn test_confirmation() {
        assert!(validator().validate_confirmation("a", "a").is_ok());
        assert!(validator().validate_confirmation("a", "b").is_err());
    }
}
