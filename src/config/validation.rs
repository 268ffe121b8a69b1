use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty and must look like a URL or domain name
/// - HTTP timeout must be at least one second
/// - Output directory cannot be empty
/// - If log file path is provided, it cannot be empty and its parent directory
///   must exist or be creatable
pub fn validate_config(
    api_domain: &str,
    http_timeout_seconds: u64,
    output_dir: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // Without a scheme it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if output_dir.trim().is_empty() {
        return Err(AppError::config_error("Output directory cannot be empty"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_config() {
        assert!(validate_config("https://stats.nba.com/stats", 30, ".", &None).is_ok());
        assert!(validate_config("stats.nba.com/stats", 30, "out", &None).is_ok());
        assert!(validate_config("localhost:8080", 5, ".", &None).is_ok());
    }

    #[test]
    fn test_invalid_api_domain() {
        assert!(validate_config("", 30, ".", &None).is_err());
        assert!(validate_config("not-a-domain", 30, ".", &None).is_err());
    }

    #[test]
    fn test_zero_timeout() {
        assert!(validate_config("https://stats.nba.com/stats", 0, ".", &None).is_err());
    }

    #[test]
    fn test_empty_output_dir() {
        assert!(validate_config("https://stats.nba.com/stats", 30, "  ", &None).is_err());
    }

    #[test]
    fn test_log_path_parent_is_created() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("run.log");
        let log_path = Some(log_path.to_string_lossy().to_string());

        assert!(validate_config("https://stats.nba.com/stats", 30, ".", &log_path).is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }

    #[test]
    fn test_empty_log_path() {
        assert!(
            validate_config("https://stats.nba.com/stats", 30, ".", &Some(String::new())).is_err()
        );
    }
}
