use anyhow::{Context, Result};
use palletcalc_core::{CalcOptions, CycleInput, INFEASIBLE_TIME, Parameter};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Configuration for the palletcalc tool
///
/// Unknown tables and keys are an error at every level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// How degenerate inputs are reported
    #[serde(default)]
    pub calculation: CalculationConfig,

    /// Machine parameters, missing keys take the built-in defaults
    #[serde(default)]
    pub parameters: CycleInput,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Hostname/address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind the server to
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculationConfig {
    /// Seconds charged to a move with non-positive speed or acceleration
    #[serde(default = "default_infeasible_time")]
    pub infeasible_time_s: f64,
}

impl Default for CalculationConfig {
    fn default() -> Self {
        Self {
            infeasible_time_s: default_infeasible_time(),
        }
    }
}

impl CalculationConfig {
    pub fn options(&self) -> CalcOptions {
        CalcOptions {
            infeasible_time: self.infeasible_time_s,
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_infeasible_time() -> f64 {
    INFEASIBLE_TIME
}

impl Config {
    /// Load configuration from a file, auto-detecting TOML or JSON format
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        let extension = path.extension().and_then(|s| s.to_str());

        match extension {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            _ => {
                // Try TOML first (preferred), fall back to JSON
                Self::from_toml(&content).or_else(|_| Self::from_json(&content))
            }
        }
    }

    /// Load a config file if one was given, otherwise use the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse config as TOML")
    }

    /// Parse configuration from JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("failed to parse config as JSON")
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to serialize config as TOML")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize config as JSON")
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            anyhow::bail!("server.host cannot be empty");
        }

        let sentinel = self.calculation.infeasible_time_s;
        if !sentinel.is_finite() || sentinel <= 0.0 {
            anyhow::bail!("calculation.infeasible_time_s must be a positive number, got {sentinel}");
        }

        for parameter in Parameter::ALL {
            let value = parameter.get(&self.parameters);
            if !value.is_finite() {
                anyhow::bail!("parameters.{parameter} must be a finite number, got {value}");
            }
        }

        Ok(())
    }

    /// Apply `key=value` overrides on top of the configured parameters
    pub fn apply_overrides<S: AsRef<str>>(&mut self, overrides: &[S]) -> Result<()> {
        for entry in overrides {
            let (parameter, value) = parse_override(entry.as_ref())?;
            tracing::debug!(%parameter, value, "parameter override");
            parameter.set(&mut self.parameters, value);
        }
        Ok(())
    }
}

/// Parse a `key=value` override.
///
/// The key may be a parameter key or its symbol. A value that is not a
/// finite number is taken as 0.
pub fn parse_override(entry: &str) -> Result<(Parameter, f64)> {
    let (key, raw) = entry
        .split_once('=')
        .with_context(|| format!("invalid override '{entry}', expected KEY=VALUE"))?;

    let parameter: Parameter = key
        .parse()
        .with_context(|| format!("invalid override '{entry}'"))?;

    let value = match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            tracing::warn!(%parameter, value = raw, "not a number, using 0");
            0.0
        }
    };

    Ok((parameter, value))
}
