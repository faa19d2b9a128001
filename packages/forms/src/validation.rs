//! Field rules shared by the wizard, the page editor and the auth forms.
//!
//! Every check returns the trimmed value it accepted, so callers store what was
//! validated rather than what was typed.

use api::ImageFile;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 30;
pub const DISPLAY_NAME_MIN: usize = 3;
pub const DISPLAY_NAME_MAX: usize = 50;
pub const BIO_MAX: usize = 150;
pub const NAME_MIN: usize = 2;
pub const PASSWORD_MIN: usize = 8;

/// A field that failed a local rule. Shown inline; no request is sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Username must be between 3 and 30 characters long")]
    UsernameLength,
    #[error("Username can only contain letters, numbers, and underscores.")]
    UsernameCharacters,
    #[error("Display name must be between 3 and 50 characters long")]
    DisplayNameLength,
    #[error("Bio must not exceed 150 characters")]
    BioTooLong,
    #[error("Name must be at least 2 characters.")]
    NameTooShort,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 8 characters.")]
    PasswordTooShort,
    #[error("Passwords don't match")]
    PasswordMismatch,
    #[error("You must agree to the terms and conditions.")]
    TermsNotAccepted,
    #[error("Page slug is required")]
    SlugRequired,
    #[error("Slug can only contain lowercase letters, numbers, hyphens, and underscores.")]
    SlugCharacters,
    #[error("Please upload a {allowed} image.")]
    ImageType { allowed: &'static str },
    #[error("File size must be less than {limit}.")]
    ImageTooLarge { limit: &'static str },
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn username(input: &str) -> Result<String, ValidationError> {
    let value = input.trim();
    let len = char_len(value);
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&len) {
        return Err(ValidationError::UsernameLength);
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::UsernameCharacters);
    }
    Ok(value.to_string())
}

pub fn display_name(input: &str) -> Result<String, ValidationError> {
    let value = input.trim();
    let len = char_len(value);
    if !(DISPLAY_NAME_MIN..=DISPLAY_NAME_MAX).contains(&len) {
        return Err(ValidationError::DisplayNameLength);
    }
    Ok(value.to_string())
}

/// Bios are optional; an empty bio is valid.
pub fn bio(input: &str) -> Result<String, ValidationError> {
    let value = input.trim();
    if char_len(value) > BIO_MAX {
        return Err(ValidationError::BioTooLong);
    }
    Ok(value.to_string())
}

pub fn name(input: &str) -> Result<String, ValidationError> {
    let value = input.trim();
    if char_len(value) < NAME_MIN {
        return Err(ValidationError::NameTooShort);
    }
    Ok(value.to_string())
}

/// `local@domain.tld` with no whitespace and a dot inside the domain.
pub fn email(input: &str) -> Result<String, ValidationError> {
    let value = input.trim();
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
        }
        None => false,
    };
    if !valid {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(value.to_string())
}

pub fn login_password(input: &str) -> Result<String, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(input.to_string())
}

pub fn new_password(input: &str, confirmation: &str) -> Result<String, ValidationError> {
    if char_len(input) < PASSWORD_MIN {
        return Err(ValidationError::PasswordTooShort);
    }
    if input != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(input.to_string())
}

/// Slugs name the non-default pages: `/:username/:slug`.
pub fn slug(input: &str) -> Result<String, ValidationError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(ValidationError::SlugRequired);
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(ValidationError::SlugCharacters);
    }
    Ok(value.to_string())
}

const MB: usize = 1024 * 1024;

/// Accepted image types and size ceiling for one upload site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePolicy {
    pub content_types: &'static [&'static str],
    pub max_bytes: usize,
    /// Whether a file of exactly `max_bytes` is accepted.
    pub inclusive: bool,
    allowed_label: &'static str,
    limit_label: &'static str,
}

impl ImagePolicy {
    /// Setup wizard avatar: JPEG or PNG, under 5 MB.
    pub const WIZARD_AVATAR: ImagePolicy = ImagePolicy {
        content_types: &["image/jpeg", "image/png"],
        max_bytes: 5 * MB,
        inclusive: false,
        allowed_label: "JPEG or PNG",
        limit_label: "5MB",
    };

    /// Profile settings avatar: JPEG, PNG or GIF, at most 2 MB.
    pub const SETTINGS_AVATAR: ImagePolicy = ImagePolicy {
        content_types: &["image/jpeg", "image/jpg", "image/png", "image/gif"],
        max_bytes: 2 * MB,
        inclusive: true,
        allowed_label: "JPG, PNG, or GIF",
        limit_label: "2MB",
    };

    /// Page backgrounds go to the general upload endpoint.
    pub const BACKGROUND: ImagePolicy = ImagePolicy {
        content_types: &["image/jpeg", "image/png", "image/gif", "image/webp"],
        max_bytes: 5 * MB,
        inclusive: false,
        allowed_label: "JPEG, PNG, GIF or WebP",
        limit_label: "5MB",
    };

    pub fn check(&self, file: &ImageFile) -> Result<(), ValidationError> {
        let content_type = file.content_type.to_ascii_lowercase();
        if !self.content_types.contains(&content_type.as_str()) {
            return Err(ValidationError::ImageType {
                allowed: self.allowed_label,
            });
        }
        let too_large = if self.inclusive {
            file.size() > self.max_bytes
        } else {
            file.size() >= self.max_bytes
        };
        if too_large {
            return Err(ValidationError::ImageTooLarge {
                limit: self.limit_label,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(content_type: &str, size: usize) -> ImageFile {
        ImageFile {
            name: "avatar".to_string(),
            content_type: content_type.to_string(),
            bytes: vec![0; size],
        }
    }

    #[test]
    fn test_username_length_bounds() {
        assert_eq!(username("ab"), Err(ValidationError::UsernameLength));
        assert!(username("abc").is_ok());
        assert!(username(&"a".repeat(30)).is_ok());
        assert_eq!(username(&"a".repeat(31)), Err(ValidationError::UsernameLength));
    }

    #[test]
    fn test_username_characters() {
        assert_eq!(username("ok_1"), Ok("ok_1".to_string()));
        assert_eq!(username("jane-doe"), Err(ValidationError::UsernameCharacters));
        assert_eq!(username("jane doe"), Err(ValidationError::UsernameCharacters));
        assert_eq!(username("jané"), Err(ValidationError::UsernameCharacters));
    }

    #[test]
    fn test_display_name_and_bio() {
        assert_eq!(display_name("  Jo "), Err(ValidationError::DisplayNameLength));
        assert_eq!(display_name(" Jane Doe "), Ok("Jane Doe".to_string()));
        assert_eq!(bio(""), Ok(String::new()));
        assert!(bio(&"x".repeat(150)).is_ok());
        assert_eq!(bio(&"x".repeat(151)), Err(ValidationError::BioTooLong));
    }

    #[test]
    fn test_email() {
        assert!(email("jane@example.com").is_ok());
        assert_eq!(email("jane@example"), Err(ValidationError::InvalidEmail));
        assert_eq!(email("@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(email("ja ne@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(email("jane"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_passwords() {
        assert_eq!(login_password(""), Err(ValidationError::PasswordRequired));
        assert_eq!(new_password("short", "short"), Err(ValidationError::PasswordTooShort));
        assert_eq!(
            new_password("longenough", "different"),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(new_password("longenough", "longenough").is_ok());
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("  "), Err(ValidationError::SlugRequired));
        assert_eq!(slug("Work"), Err(ValidationError::SlugCharacters));
        assert_eq!(slug("side-project_2"), Ok("side-project_2".to_string()));
    }

    #[test]
    fn test_wizard_avatar_policy() {
        let policy = ImagePolicy::WIZARD_AVATAR;
        assert!(policy.check(&image("image/png", 10)).is_ok());
        assert!(policy.check(&image("image/jpeg", 5 * MB - 1)).is_ok());
        assert_eq!(
            policy.check(&image("image/jpeg", 5 * MB)),
            Err(ValidationError::ImageTooLarge { limit: "5MB" })
        );
        assert!(matches!(
            policy.check(&image("image/gif", 10)),
            Err(ValidationError::ImageType { .. })
        ));
    }

    #[test]
    fn test_settings_avatar_policy() {
        let policy = ImagePolicy::SETTINGS_AVATAR;
        assert!(policy.check(&image("image/gif", 2 * MB)).is_ok());
        assert!(policy.check(&image("image/gif", 2 * MB + 1)).is_err());
        assert_eq!(
            policy.check(&image("image/gif", 2 * MB + 1)).unwrap_err().to_string(),
            "File size must be less than 2MB."
        );
    }
}
