use crate::utils::error::{FormatError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();
    if raw.is_empty() {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Suffixes are matched against the end of a file name, so each one must
/// carry its leading dot and nothing that could span a path separator.
pub fn validate_suffixes<'a, I>(field_name: &str, suffixes: I) -> Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut seen_any = false;
    for suffix in suffixes {
        seen_any = true;
        if !suffix.starts_with('.') || suffix.len() < 2 {
            return Err(FormatError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: suffix.clone(),
                reason: "Suffix must start with '.' followed by at least one character"
                    .to_string(),
            });
        }
        if suffix.contains('/') || suffix.contains('\\') {
            return Err(FormatError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: suffix.clone(),
                reason: "Suffix cannot contain path separators".to_string(),
            });
        }
    }

    if !seen_any {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one suffix is required".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("roots", Path::new("./source")).is_ok());
        assert!(validate_path("roots", Path::new("")).is_err());
    }

    #[test]
    fn test_validate_suffixes() {
        let good = vec![".cpp".to_string(), ".h".to_string()];
        assert!(validate_suffixes("suffixes", &good).is_ok());

        let missing_dot = vec!["cpp".to_string()];
        assert!(validate_suffixes("suffixes", &missing_dot).is_err());

        let bare_dot = vec![".".to_string()];
        assert!(validate_suffixes("suffixes", &bare_dot).is_err());

        let separator = vec![".d/x.h".to_string()];
        assert!(validate_suffixes("suffixes", &separator).is_err());

        let empty: Vec<String> = vec![];
        assert!(validate_suffixes("suffixes", &empty).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("tool", "clang-format").is_ok());
        assert!(validate_non_empty_string("tool", "   ").is_err());
    }
}
