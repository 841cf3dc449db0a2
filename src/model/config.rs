use serde::{Deserialize, Serialize};

/// Configuration from config.toml in the data directory.
/// Every field has a default; the file itself is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub portfolio: PortfolioConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// chrono format string applied to createdAt at render time
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            date_format: default_date_format(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Filter used when `atl portfolio` is run without a category
    #[serde(default = "default_filter")]
    pub default_filter: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        PortfolioConfig {
            default_filter: default_filter(),
        }
    }
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_filter() -> String {
    "all".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.display.date_format, "%Y-%m-%d %H:%M");
        assert_eq!(config.portfolio.default_filter, "all");
    }

    #[test]
    fn partial_toml_fills_missing_fields() {
        let config: Config = toml::from_str("[portfolio]\ndefault_filter = \"web\"\n").unwrap();
        assert_eq!(config.portfolio.default_filter, "web");
        assert_eq!(config.display.date_format, "%Y-%m-%d %H:%M");
    }
}
