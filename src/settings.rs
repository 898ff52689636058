use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    wordlist::DEFAULT_MAX_LINE_LENGTH,
};

/// Prefix of the environment variables that override the settings file.
pub const ENV_PREFIX: &str = "DICEWARE";

/// Tunables read from the settings file and the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Longest accepted wordlist line in bytes, the newline included.
    pub max_line_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl Settings {
    fn from_config(config: &config::Config) -> Result<Settings> {
        let max_line_length = config.get_int("max_line_length")?;
        // "\t\n" is the shortest line that parses
        if max_line_length < 2 {
            return Err(Error::InvalidArgument("max_line_length must be at least 2"));
        }

        Ok(Settings {
            max_line_length: usize::try_from(max_line_length)
                .map_err(|_| Error::InvalidArgument("max_line_length is too large"))?,
        })
    }
}

/// Location of the settings file, without checking that it exists.
pub fn settings_file_raw(xdg_config_home: &Option<PathBuf>, home: &Option<PathBuf>) -> Option<PathBuf> {
    match (xdg_config_home, home) {
        (Some(config_home), _) => Some(config_home.join("diceware").join("settings.toml")),
        (None, Some(home)) => Some(home.join(".config").join("diceware").join("settings.toml")),
        (None, None) => None,
    }
}

fn default_settings_file() -> Option<PathBuf> {
    let xdg_config_home = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let home = std::env::var_os("HOME").map(PathBuf::from);

    settings_file_raw(&xdg_config_home, &home)
}

/// Reads the settings.
///
/// Defaults are overridden by the settings file and then by `DICEWARE_*`
/// environment variables. An explicitly given `settings_file` must exist, the
/// default one is optional.
pub fn read_config(settings_file: Option<&Path>) -> Result<Settings> {
    read_config_with_prefix(settings_file, ENV_PREFIX)
}

pub(crate) fn read_config_with_prefix(settings_file: Option<&Path>, env_prefix: &str) -> Result<Settings> {
    let mut settings = config::Config::default();
    settings.set_default("max_line_length", DEFAULT_MAX_LINE_LENGTH as i64)?;

    match settings_file {
        Some(file) => {
            settings.merge(config::File::from(file).required(true))?;
        }
        None => {
            if let Some(file) = default_settings_file() {
                settings.merge(config::File::from(file.as_path()).required(false))?;
            }
        }
    }

    settings.merge(config::Environment::with_prefix(env_prefix))?;

    Settings::from_config(&settings)
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod settings_tests;
