use std::{path::PathBuf, time::Duration};

use fractic_server_error::ServerError;
use serde_derive::Deserialize;

use crate::errors::{DataSourceError, InvalidConfig};

/// Where the dashboard reads its tables from and how long a loaded table
/// stays fresh. Written in RON, every field optional:
///
/// ```ron
/// (
///     loans_csv: "dataset/personal-loan.csv",
///     borrowers_csv: "dataset/borrower-profile.csv",
///     cache_ttl_secs: 3600,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub loans_csv: PathBuf,
    pub borrowers_csv: PathBuf,
    pub cache_ttl_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            loans_csv: PathBuf::from("dataset/personal-loan.csv"),
            borrowers_csv: PathBuf::from("dataset/borrower-profile.csv"),
            cache_ttl_secs: 3600,
        }
    }
}

impl DashboardConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidConfig::with_debug(&e))
    }

    pub fn from_ron_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ServerError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DataSourceError::with_debug(&path.to_string_lossy(), &e))?;
        Self::from_ron_str(&contents)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = DashboardConfig::from_ron_str("(cache_ttl_secs: 60)").unwrap();
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.loans_csv, PathBuf::from("dataset/personal-loan.csv"));
    }

    #[test]
    fn paths_are_read_from_ron() {
        let config = DashboardConfig::from_ron_str(
            r#"(loans_csv: "/data/loans.csv", borrowers_csv: "/data/borrowers.csv")"#,
        )
        .unwrap();
        assert_eq!(config.loans_csv, PathBuf::from("/data/loans.csv"));
        assert_eq!(config.borrowers_csv, PathBuf::from("/data/borrowers.csv"));
        assert_eq!(config.cache_ttl_secs, 3600);
    }

    #[test]
    fn malformed_config_is_rejected() {
        assert!(DashboardConfig::from_ron_str("(cache_ttl_secs: \"soon\")").is_err());
    }
}
