// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration for operator construction.
//!
//! Configuration is loaded from multiple sources with the following priority
//! (later sources override earlier ones):
//!
//! 1. Built-in defaults
//! 2. qswalk.yaml file
//! 3. Environment variables (QSWALK_*)
//!
//! Nothing here is global: callers read a [`Config`] once and pass
//! `config.epsilon` explicitly to the builders.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::{Error, Result};
use crate::operators::sparse::{is_hermitian, SparseMatrix};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Significance threshold for adjacency entries. `None` uses the machine
    /// epsilon of the adjacency scalar type.
    #[serde(default)]
    pub epsilon: Option<f64>,

    /// Absolute per-entry tolerance used by [`Config::is_hermitian`].
    #[serde(default = "default_hermiticity_tolerance")]
    pub hermiticity_tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: None,
            hermiticity_tolerance: default_hermiticity_tolerance(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(path) = config_path {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                config = serde_yaml::from_str(&content)?;
            }
        } else {
            for path in &["qswalk.yaml", "qswalk.yml"] {
                let path = Path::new(path);
                if path.exists() {
                    let content = std::fs::read_to_string(path)?;
                    config = serde_yaml::from_str(&content)?;
                    break;
                }
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("QSWALK_EPSILON") {
            if let Ok(eps) = val.parse() {
                self.epsilon = Some(eps);
            }
        }
        if let Ok(val) = env::var("QSWALK_HERMITICITY_TOLERANCE") {
            if let Ok(tol) = val.parse() {
                self.hermiticity_tolerance = tol;
            }
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if let Some(eps) = self.epsilon {
            if !eps.is_finite() || eps < 0.0 {
                return Err(Error::Config(format!(
                    "epsilon must be finite and nonnegative, got {}",
                    eps
                )));
            }
        }
        if !self.hermiticity_tolerance.is_finite() || self.hermiticity_tolerance < 0.0 {
            return Err(Error::Config(format!(
                "hermiticity_tolerance must be finite and nonnegative, got {}",
                self.hermiticity_tolerance
            )));
        }
        Ok(())
    }

    /// Whether `m` is Hermitian within `hermiticity_tolerance`.
    pub fn is_hermitian(&self, m: &SparseMatrix) -> bool {
        is_hermitian(m, self.hermiticity_tolerance)
    }
}

fn default_hermiticity_tolerance() -> f64 {
    1e-12
}
