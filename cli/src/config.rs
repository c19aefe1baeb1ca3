// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use color_eyre::Result;
use eyre::{eyre, WrapErr};
use nu_ansi_term::{Color, Style};
use numkit_core::{Checker, Policy, Primality};
use serde_derive::{Deserialize, Serialize};
use std::env;
use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::PathBuf;

pub fn config_toml_path() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| eyre!("Could not find config directory"))?;
    path.push("numkit");
    path.push("config.toml");
    Ok(path)
}

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub numbers: Numbers,
    pub output: Output,
    pub colors: Colors,
}

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Numbers {
    /// How 0, 1 and negative numbers are treated.
    pub policy: Policy,
    /// Which trial division loop is used for primality checks.
    pub primality: Primality,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Plain,
    Json,
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Output {
    /// Plain text or one JSON object per line.
    pub format: Format,
    /// Which prompt to render when run interactively.
    pub prompt: String,
}

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Colors {
    /// Whether colored output is enabled. Unset means enabled unless
    /// `NO_COLOR` is present.
    pub enabled: Option<bool>,
}

/// Styles applied to plain text output.
#[derive(Clone, Copy, Default)]
pub struct Theme {
    pub error: Style,
    pub number: Style,
    pub prime: Style,
}

impl Default for Output {
    fn default() -> Self {
        Output {
            format: Format::Plain,
            prompt: "> ".to_owned(),
        }
    }
}

impl Config {
    pub fn checker(&self) -> Checker {
        Checker::new(self.numbers.policy).with_primality(self.numbers.primality)
    }

    pub fn get_theme(&self) -> Theme {
        let default_enable_colors = env::var("NO_COLOR") == Err(env::VarError::NotPresent);
        let colors_enabled = self.colors.enabled.unwrap_or(default_enable_colors);

        if colors_enabled {
            Theme {
                error: Style::new().fg(Color::Red),
                number: Style::new().fg(Color::Cyan),
                prime: Style::new().fg(Color::Green).bold(),
            }
        } else {
            Theme::default()
        }
    }
}

pub fn read_config(override_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = override_path {
        PathBuf::from(path)
    } else {
        config_toml_path()?
    };
    match read_to_string(&path) {
        // Hard fail if the file has invalid TOML.
        Ok(result) => {
            tracing::info!("Reading config from {}", path.display());
            toml::from_str(&result).wrap_err("While parsing config.toml")
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            if let Some(override_path) = override_path {
                // Hard fail if user-provided config path doesn't exist
                Err(eyre!(err).wrap_err(format!(
                    "Failed to read provided config file `{}`",
                    override_path
                )))
            } else {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Config::default())
            }
        }
        // Hard fail for other IO errors (e.g. permissions).
        Err(err) => Err(eyre!(err).wrap_err("Failed to read config.toml")),
    }
}
