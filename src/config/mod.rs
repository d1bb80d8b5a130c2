//! User settings for Pontifex.
//!
//! Settings are stored in `~/.pontifex/config.toml`. Every field is optional
//! in the file; missing fields (or a missing file) fall back to defaults.
//!
//! ```toml
//! deck = "/home/alice/secret.deck"
//! filler = "X"
//! output = "encrypted.txt"
//! group_output = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cipher::CipherConfig;
use crate::text::validate_filler;
use crate::FILLER;

/// Default file the encrypt command writes to.
pub const DEFAULT_OUTPUT: &str = "encrypted.txt";

/// Errors that can occur when loading or saving settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("No deck file given and none configured")]
    NoDeck,

    #[error("Invalid filler '{0}': must be a letter A-Z")]
    InvalidFiller(char),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// Settings stored in TOML format.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Deck file used when no `--deck` is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck: Option<PathBuf>,

    /// Padding letter.
    pub filler: char,

    /// File the encrypt command writes and the decrypt command reads.
    pub output: PathBuf,

    /// Write ciphertext in five-letter groups.
    pub group_output: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            deck: None,
            filler: FILLER,
            output: PathBuf::from(DEFAULT_OUTPUT),
            group_output: false,
        }
    }
}

impl Settings {
    /// Load settings from the default location.
    ///
    /// Returns defaults if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load settings from a specific file, returning defaults if it is absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to the default location.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save settings to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;

        // The config may name the secret deck file
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Get the path to the settings file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Pick the deck file: an explicit path wins over the configured one.
    pub fn resolve_deck(&self, explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.deck.clone())
            .ok_or(ConfigError::NoDeck)
    }

    /// Cipher settings derived from this configuration.
    pub fn cipher_config(&self) -> CipherConfig {
        CipherConfig {
            filler: self.filler.to_ascii_uppercase(),
            grouped: self.group_output,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        validate_filler(self.filler).map_err(|_| ConfigError::InvalidFiller(self.filler))?;
        Ok(())
    }
}

/// Get the Pontifex config directory (`~/.pontifex`).
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".pontifex"))
        .ok_or(ConfigError::NoConfigDir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_config() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        (temp_dir, config_path)
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.deck, None);
        assert_eq!(settings.filler, 'X');
        assert_eq!(settings.output, PathBuf::from("encrypted.txt"));
        assert!(!settings.group_output);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let (_dir, path) = setup_test_config();
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file() {
        let (_dir, path) = setup_test_config();
        fs::write(&path, "filler = \"Q\"\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.filler, 'Q');
        assert_eq!(settings.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_save_and_load() {
        let (_dir, path) = setup_test_config();
        let settings = Settings {
            deck: Some(PathBuf::from("/keys/secret.deck")),
            filler: 'Z',
            output: PathBuf::from("out.txt"),
            group_output: true,
        };
        settings.save_to(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("group_output = true"));

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_invalid_filler_rejected() {
        let (_dir, path) = setup_test_config();
        fs::write(&path, "filler = \"7\"\n").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(ConfigError::InvalidFiller('7'))
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let (_dir, path) = setup_test_config();
        fs::write(&path, "filler = = \n").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(ConfigError::TomlParseError(_))
        ));
    }

    #[test]
    fn test_resolve_deck() {
        let mut settings = Settings::default();
        assert!(matches!(
            settings.resolve_deck(None),
            Err(ConfigError::NoDeck)
        ));

        settings.deck = Some(PathBuf::from("configured.deck"));
        assert_eq!(
            settings.resolve_deck(None).unwrap(),
            PathBuf::from("configured.deck")
        );
        assert_eq!(
            settings.resolve_deck(Some(Path::new("cli.deck"))).unwrap(),
            PathBuf::from("cli.deck")
        );
    }

    #[test]
    fn test_cipher_config() {
        let settings = Settings {
            filler: 'q',
            group_output: true,
            ..Default::default()
        };
        let config = settings.cipher_config();
        assert_eq!(config.filler, 'Q');
        assert!(config.grouped);
    }
}
