//! Warehouse configuration loaded from a TOML file
//!
//! Mirrors the layout of the driver's `dwh.toml`: a `[cluster]` section with
//! the connection details the external driver uses, and an `[iam_role]`
//! section whose ARN is substituted into the COPY statements. Only the ARN
//! is consumed by this crate; the cluster block is carried for the driver.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Warehouse cluster connection details, used by the external driver only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    pub host: String,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub db_port: u16,
}

/// IAM role authorizing the COPY bulk loads to read from S3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IamRoleConfig {
    /// Role ARN, e.g. `arn:aws:iam::123456789012:role/dwhRole`.
    ///
    /// The contents are not validated here; a bad ARN surfaces as a COPY
    /// failure at the warehouse engine.
    pub arn: String,
}

/// Full warehouse configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseConfig {
    pub cluster: ClusterConfig,
    pub iam_role: IamRoleConfig,
}

impl WarehouseConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let config: WarehouseConfig = toml::from_str(text)?;
        Ok(config)
    }

    /// Load a configuration from a TOML file on disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), "loaded warehouse configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[cluster]
host = "dwhcluster.abc123.us-west-2.redshift.amazonaws.com"
db_name = "dwh"
db_user = "dwhuser"
db_password = "Passw0rd"
db_port = 5439

[iam_role]
arn = "arn:aws:iam::123456789012:role/dwhRole"
"#;

    #[test]
    fn test_parse_sample_config() {
        let config = WarehouseConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.cluster.db_name, "dwh");
        assert_eq!(config.cluster.db_port, 5439);
        assert_eq!(config.iam_role.arn, "arn:aws:iam::123456789012:role/dwhRole");
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = WarehouseConfig::from_path(file.path()).unwrap();
        assert_eq!(config.iam_role.arn, "arn:aws:iam::123456789012:role/dwhRole");
    }

    #[test]
    fn test_missing_iam_role_is_parse_error() {
        let text = r#"
[cluster]
host = "h"
db_name = "d"
db_user = "u"
db_password = "p"
db_port = 5439
"#;
        let err = WarehouseConfig::from_toml(text).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = WarehouseConfig::from_path(Path::new("/nonexistent/dwh.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
