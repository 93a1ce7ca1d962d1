use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppCfg {
    #[serde(default)]
    pub fusion: FusionCfg,
    #[serde(default)]
    pub news: NewsCfg,
}

/// Calibration constants for the fusion engine. Larger steepness flattens
/// the score-to-probability curve for that signal.
#[derive(Debug, Deserialize, Clone)]
pub struct FusionCfg {
    #[serde(rename = "kMarket", default = "default_k_market")]
    pub k_market: f64,
    #[serde(rename = "kIndustry", default = "default_k_industry")]
    pub k_industry: f64,
    #[serde(rename = "kStock", default = "default_k_stock")]
    pub k_stock: f64,
    #[serde(rename = "kTiming", default = "default_k_timing")]
    pub k_timing: f64,
    /// Default input-trust multiplier used when the caller has no better
    /// estimate of its data quality.
    #[serde(rename = "dataQuality", default = "default_data_quality")]
    pub data_quality: f64,
}

impl Default for FusionCfg {
    fn default() -> Self {
        Self {
            k_market: default_k_market(),
            k_industry: default_k_industry(),
            k_stock: default_k_stock(),
            k_timing: default_k_timing(),
            data_quality: default_data_quality(),
        }
    }
}
fn default_k_market() -> f64 {
    12.0
}
fn default_k_industry() -> f64 {
    12.0
}
fn default_k_stock() -> f64 {
    10.0
}
fn default_k_timing() -> f64 {
    10.0
}
fn default_data_quality() -> f64 {
    1.0
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewsCfg {
    /// Minimum relevance for an article to drive a sentiment flag.
    #[serde(rename = "relevanceThreshold", default = "default_relevance_threshold")]
    pub relevance_threshold: f64,
}

impl Default for NewsCfg {
    fn default() -> Self {
        Self {
            relevance_threshold: default_relevance_threshold(),
        }
    }
}
fn default_relevance_threshold() -> f64 {
    0.3
}

impl AppCfg {
    pub fn load(path: &str) -> Result<Self> {
        let cfg = Config::builder()
            .add_source(File::with_name(path))
            .add_source(config::Environment::default().separator("__"))
            .build()
            .context("building config")?;

        let app: AppCfg = cfg.try_deserialize().context("deserializing config")?;
        app.validate()?;
        Ok(app)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, k) in [
            ("fusion.kMarket", self.fusion.k_market),
            ("fusion.kIndustry", self.fusion.k_industry),
            ("fusion.kStock", self.fusion.k_stock),
            ("fusion.kTiming", self.fusion.k_timing),
        ] {
            anyhow::ensure!(k.is_finite() && k > 0.0, "{name} must be finite and > 0");
        }
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.fusion.data_quality),
            "fusion.dataQuality must be within [0,1]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.news.relevance_threshold),
            "news.relevanceThreshold must be within [0,1]"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let cfg = AppCfg::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.fusion.k_market, 12.0);
        assert_eq!(cfg.fusion.k_industry, 12.0);
        assert_eq!(cfg.fusion.k_stock, 10.0);
        assert_eq!(cfg.fusion.k_timing, 10.0);
        assert_eq!(cfg.fusion.data_quality, 1.0);
        assert_eq!(cfg.news.relevance_threshold, 0.3);
    }

    #[test]
    fn test_zero_steepness_rejected() {
        let cfg = AppCfg {
            fusion: FusionCfg {
                k_stock: 0.0,
                ..FusionCfg::default()
            },
            ..AppCfg::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_env_var_override() {
        unsafe {
            std::env::set_var("FUSION__K_MARKET", "15.0");
        }

        let cfg = Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .build()
            .unwrap();

        let val = cfg.get_float("fusion.k_market").unwrap();
        assert_eq!(val, 15.0);

        unsafe {
            std::env::remove_var("FUSION__K_MARKET");
        }
    }
}
