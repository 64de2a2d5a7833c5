//! Config file loading.
//!
//! Reads line-oriented `key=value` pairs from `config.txt` in the base
//! directory. The base directory is an explicit startup parameter resolved
//! once at process entry (by default, the directory containing the
//! executable).
//!
//! A missing config file is fatal: the caller prints the
//! `Config file not found at: <path>` message and exits with status 1.
//! Any line that does not split into exactly one key and one value on `=`
//! (blank lines included) is a [`ConfigError::MalformedLine`].

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

/// File name looked up inside the base directory.
const CONFIG_FILE_NAME: &str = "config.txt";

/// Loaded configuration. Built once, read-only for the rest of the run.
#[derive(Debug, Clone)]
pub struct Config {
    values: HashMap<String, String>,
}

impl Config {
    /// Load `config.txt` from `base_dir`.
    pub fn load(base_dir: &Path) -> ConfigResult<Self> {
        Self::load_file(&base_dir.join(CONFIG_FILE_NAME))
    }

    /// Load a specific config file.
    pub fn load_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ConfigError::NotFound { path: path.to_path_buf() }
            } else {
                ConfigError::IoError(e)
            }
        })?;

        Self::parse(&content)
    }

    /// Parse `key=value` lines into a config.
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let mut values = HashMap::new();

        for (idx, line) in content.lines().enumerate() {
            let mut split = line.trim().split('=');
            match (split.next(), split.next(), split.next()) {
                (Some(key), Some(value), None) => {
                    values.insert(key.trim().to_string(), value.trim().to_string());
                }
                _ => {
                    return Err(ConfigError::MalformedLine {
                        line: idx + 1,
                        content: line.to_string(),
                    });
                }
            }
        }

        Ok(Self { values })
    }

    /// Raw value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Path value for a key, falling back to `default` when the key is
    /// absent. Relative paths resolve against the working directory.
    fn path_or(&self, key: &str, default: &str) -> PathBuf {
        PathBuf::from(self.get(key).unwrap_or(default))
    }

    /// Input CSV of sample ids and trial values.
    pub fn sample_data(&self) -> PathBuf {
        self.path_or("sample_data", "normal_data.csv")
    }

    /// Output CSV of normalized row-per-trial records.
    pub fn transformation_file(&self) -> PathBuf {
        self.path_or("transformation_file", "transformed_data.csv")
    }

    /// Input CSV of measurement rows keyed by filename.
    pub fn file_with_wavelengths(&self) -> PathBuf {
        self.path_or("file_with_wavelengths", "reformed.csv")
    }

    /// Final merged output CSV.
    pub fn final_file(&self) -> PathBuf {
        self.path_or("final_file", "final.csv")
    }
}
