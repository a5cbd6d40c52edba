use crate::domain::payment::{PaymentRequest, Price};
use crate::domain::selection::SelectionPolicy;
use crate::error::{PaymentError, Result};
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime configuration, usually loaded from a TOML file.
///
/// ```toml
/// selection = "exactly-one"
/// manifest_dir = "services"
///
/// [order]
/// product = "Q币充值"
/// price = "100.00"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// How to choose among discovered providers.
    pub selection: SelectionPolicy,
    /// Directory of provider manifests. The built-in table is used when unset.
    /// A relative path in a config file is relative to that file's directory.
    pub manifest_dir: Option<PathBuf>,
    pub order: OrderConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrderConfig {
    pub product: String,
    pub price: Price,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            selection: SelectionPolicy::default(),
            manifest_dir: None,
            order: OrderConfig::default(),
        }
    }
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            product: "Q币充值".to_string(),
            price: Price::new(dec!(100.00)),
        }
    }
}

impl OrderConfig {
    pub fn to_request(&self) -> PaymentRequest {
        PaymentRequest::new(self.product.clone(), self.price)
    }
}

impl AppConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| PaymentError::ConfigError(e.to_string()))
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            PaymentError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let mut config = Self::from_toml(&text)?;
        if let (Some(dir), Some(base)) = (config.manifest_dir.as_mut(), path.parent())
            && dir.is_relative()
        {
            *dir = base.join(&*dir);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_demo_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.order.to_request().product_name, "Q币充值");
        assert_eq!(config.order.price.to_string(), "100.00");
    }

    #[test]
    fn test_full_config() {
        let config = AppConfig::from_toml(
            r#"
            selection = "priority"
            manifest_dir = "services"

            [order]
            product = "月卡"
            price = "30.50"
            "#,
        )
        .unwrap();

        assert_eq!(config.selection, SelectionPolicy::Priority);
        assert_eq!(config.manifest_dir, Some(PathBuf::from("services")));
        assert_eq!(config.order.product, "月卡");
        assert_eq!(config.order.price, Price::new(dec!(30.50)));
    }

    #[test]
    fn test_unknown_policy_is_config_error() {
        let err = AppConfig::from_toml("selection = \"random\"").unwrap_err();
        assert!(matches!(err, PaymentError::ConfigError(_)));
    }

    #[test]
    fn test_load_resolves_manifest_dir_against_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paylink.toml");
        std::fs::write(&path, "manifest_dir = \"services\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.manifest_dir, Some(dir.path().join("services")));
    }

    #[test]
    fn test_load_keeps_absolute_manifest_dir() {
        let dir = tempfile::tempdir().unwrap();
        let services = dir.path().join("elsewhere");
        let path = dir.path().join("paylink.toml");
        std::fs::write(&path, format!("manifest_dir = {:?}\n", services.display().to_string())).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.manifest_dir, Some(services));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(dir.path().join("paylink.toml")).unwrap_err();
        assert!(matches!(err, PaymentError::ConfigError(ref m) if m.contains("paylink.toml")));
    }
}
