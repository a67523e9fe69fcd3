use anyhow::{Context, Result};
use ledgerlens_core::DEFAULT_TIMEZONE;
use ledgerlens_finance::UnparseableDates;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::{ensure_ledgerlens_home, ledgerlens_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSection {
    /// IANA timezone that decides "today" for unparseable dates
    pub timezone: String,
    pub unparseable_dates: UnparseableDates,
    /// Label "Others" rows from their description before analysing
    pub auto_categorize: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub path: PathBuf,
    pub pretty: bool,
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.name().to_string(),
            unparseable_dates: UnparseableDates::Fallback,
            auto_categorize: false,
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from("output.json"),
            pretty: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ledgerlens_home()?.join("config.toml"))
}

pub fn parse_config(s: &str) -> Result<Config> {
    toml::from_str(s).context("parse config.toml")
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = ensure_ledgerlens_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let cfg = parse_config("[analysis]\nunparseable_dates = \"exclude\"\n").unwrap();
        assert_eq!(cfg.analysis.unparseable_dates, UnparseableDates::Exclude);
        assert_eq!(cfg.analysis.timezone, "Asia/Kolkata");
        assert_eq!(cfg.output, OutputSection::default());
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let s = toml::to_string_pretty(&Config::default()).unwrap();
        assert_eq!(parse_config(&s).unwrap(), Config::default());
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(parse_config("[analysis]\nunparseable_dates = \"guess\"\n").is_err());
    }
}
