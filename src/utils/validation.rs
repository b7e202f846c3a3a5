use crate::utils::error::{EtlError, Result};
use std::collections::HashSet;

pub const OUTPUT_FORMATS: [&str; 3] = ["text", "csv", "json"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extensions(field_name: &str, files: &[String], allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        match std::path::Path::new(file).extension().and_then(|ext| ext.to_str()) {
            Some(extension) if allowed_set.contains(extension) => {}
            Some(extension) => {
                return Err(EtlError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
            None => {
                return Err(EtlError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: "File has no extension or invalid filename".to_string(),
                });
            }
        }
    }

    Ok(())
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    for format in formats {
        if !OUTPUT_FORMATS.contains(&format.as_str()) {
            return Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    OUTPUT_FORMATS.join(", ")
                ),
            });
        }
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| EtlError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./reports").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extensions() {
        let files = vec!["sales.csv".to_string()];
        assert!(validate_file_extensions("input", &files, &["csv"]).is_ok());

        let invalid_files = vec!["sales.xlsx".to_string()];
        assert!(validate_file_extensions("input", &invalid_files, &["csv"]).is_err());

        let no_extension = vec!["sales".to_string()];
        assert!(validate_file_extensions("input", &no_extension, &["csv"]).is_err());
    }

    #[test]
    fn test_validate_output_formats() {
        let formats = vec!["text".to_string(), "json".to_string()];
        assert!(validate_output_formats("output_formats", &formats).is_ok());

        let formats = vec!["xml".to_string()];
        assert!(validate_output_formats("output_formats", &formats).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("sales.csv".to_string());
        assert_eq!(validate_required_field("source.path", &present).unwrap(), "sales.csv");

        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("source.path", &missing),
            Err(EtlError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("pipeline.name", "sales").is_ok());
        assert!(validate_non_empty_string("pipeline.name", "   ").is_err());
    }
}
