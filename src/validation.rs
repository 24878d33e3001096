use serde::Serialize;

pub const MAX_LINK_LEN: usize = 55;
pub const INSTAGRAM_PREFIX: &str = "https://www.instagram.com/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkValidation {
    pub valid: bool,
    pub message: String,
}

impl LinkValidation {
    fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Checks a profile link. An empty link counts as "not entered yet" and is valid.
pub fn validate_link(link: &str) -> LinkValidation {
    if link.is_empty() {
        return LinkValidation::ok();
    }

    if link.chars().count() > MAX_LINK_LEN {
        return LinkValidation::rejected(format!(
            "El enlace no puede tener más de {MAX_LINK_LEN} caracteres"
        ));
    }

    if !link.starts_with(INSTAGRAM_PREFIX) {
        return LinkValidation::rejected(format!("El enlace debe comenzar con {INSTAGRAM_PREFIX}"));
    }

    LinkValidation::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_link_is_valid_without_message() {
        let result = validate_link("");
        assert!(result.valid);
        assert!(result.message.is_empty());
    }

    #[test]
    fn profile_link_is_valid() {
        assert!(validate_link("https://www.instagram.com/fit_team").valid);
    }

    #[test]
    fn long_link_is_rejected_before_prefix_check() {
        let link = format!("http://{}", "a".repeat(60));
        let result = validate_link(&link);
        assert!(!result.valid);
        assert!(result.message.contains("55 caracteres"));
    }

    #[test]
    fn exactly_max_length_is_accepted() {
        let link = format!(
            "{INSTAGRAM_PREFIX}{}",
            "u".repeat(MAX_LINK_LEN - INSTAGRAM_PREFIX.len())
        );
        assert_eq!(link.chars().count(), MAX_LINK_LEN);
        assert!(validate_link(&link).valid);
    }

    #[test]
    fn wrong_scheme_or_host_is_rejected() {
        let result = validate_link("http://instagram.com/x");
        assert!(!result.valid);
        assert!(result.message.contains("debe comenzar con"));

        assert!(!validate_link("https://instagram.com/x").valid);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let link = format!("{INSTAGRAM_PREFIX}{}", "ñ".repeat(29));
        assert_eq!(link.chars().count(), MAX_LINK_LEN);
        assert!(validate_link(&link).valid);
    }
}
