use crate::utils::error::{Result, UploadError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 檢查檔名副檔名（不分大小寫）
pub fn validate_file_extension(file_name: &str, allowed_extensions: &[&str]) -> Result<()> {
    let lower = file_name.to_lowercase();
    let accepted = allowed_extensions
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext.to_lowercase())));

    if accepted {
        Ok(())
    } else {
        Err(UploadError::UnsupportedFileType {
            file_name: file_name.to_string(),
        })
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// `#rrggbb` 形式的顏色
pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());

    if !valid {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected a colour like #6366f1".to_string(),
        });
    }
    Ok(())
}

/// 下限不得大於上限
pub fn validate_ordered<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    min: T,
    max: T,
) -> Result<()> {
    if min > max {
        return Err(UploadError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("Minimum {} is greater than maximum {}", min, max),
        });
    }
    Ok(())
}

/// 拒絕 NaN 與無限大
pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(UploadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("orders.csv", &["csv"]).is_ok());
        assert!(validate_file_extension("ORDERS.CSV", &["csv"]).is_ok());
        assert!(validate_file_extension("orders.txt", &["csv"]).is_err());
        assert!(validate_file_extension("csv", &["csv"]).is_err());
    }

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("color", "#6366f1").is_ok());
        assert!(validate_hex_color("color", "6366f1").is_err());
        assert!(validate_hex_color("color", "#63g6f1").is_err());
    }

    #[test]
    fn test_validate_ordered_and_range() {
        assert!(validate_ordered("fallback", 100, 199).is_ok());
        assert!(validate_ordered("fallback", 200, 199).is_err());
        assert!(validate_range("delay", 1500u64, 0, 60_000).is_ok());
        assert!(validate_range("delay", 90_000u64, 0, 60_000).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("processing_time_max", 4.0).is_ok());
        assert!(validate_finite("processing_time_max", f64::INFINITY).is_err());
        assert!(validate_finite("processing_time_min", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.path", "./summary.json").is_ok());
        assert!(validate_path("output.path", "").is_err());
    }
}
