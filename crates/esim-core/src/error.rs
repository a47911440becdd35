//! Error types for the eSIM shop

use thiserror::Error;

/// Main error type for eSIM shop operations
#[derive(Error, Debug)]
pub enum ShopError {
    /// General I/O error (catalog or config file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog or config JSON could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two countries share the same code
    #[error("Duplicate country code: {0}")]
    DuplicateCountry(String),

    /// Two packages share the same id
    #[error("Duplicate package id: {0}")]
    DuplicatePackage(String),

    /// Package references a country that is not in the catalog
    #[error("Package {package} references unknown country {country}")]
    OrphanPackage { package: String, country: String },

    /// Country was not found in the catalog
    #[error("Country not found: {0}")]
    UnknownCountry(String),

    /// Package was not found in the catalog
    #[error("Package not found: {0}")]
    UnknownPackage(String),

    /// Tab id is not part of the tab bar
    #[error("Tab not found: {0}")]
    UnknownTab(String),

    /// Two tabs share an id or a route
    #[error("Duplicate tab: {0}")]
    DuplicateTab(String),

    /// Config value out of range
    #[error("Invalid config: {0}")]
    Config(String),
}

/// Result type alias using ShopError
pub type ShopResult<T> = Result<T, ShopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShopError::UnknownCountry("XX".to_string());
        assert_eq!(format!("{}", err), "Country not found: XX");

        let err = ShopError::OrphanPackage {
            package: "jp-1".to_string(),
            country: "JP".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Package jp-1 references unknown country JP"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let shop_err: ShopError = io_err.into();
        assert!(matches!(shop_err, ShopError::Io(_)));
    }
}
