use crate::error::{HrisError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SHEET_FILE: &str = "hris.csv";
const DEFAULT_JSON_FILE: &str = "records.json";
const DEFAULT_MIN_AGE: u32 = 18;

/// Keys accepted by [`HrisConfig::get`] and [`HrisConfig::set`], in display order.
pub const CONFIG_KEYS: [&str; 6] = [
    "backend",
    "sheet-file",
    "json-file",
    "min-age",
    "job-positions",
    "departments",
];

/// Where the record collection is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Worksheet layout: header row plus one row per record (CSV file).
    #[default]
    Sheet,
    /// A JSON array of records.
    Json,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Sheet => write!(f, "sheet"),
            Backend::Json => write!(f, "json"),
        }
    }
}

impl FromStr for Backend {
    type Err = HrisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sheet" => Ok(Backend::Sheet),
            "json" => Ok(Backend::Json),
            other => Err(HrisError::Config(format!(
                "Unknown backend '{}' (expected 'sheet' or 'json')",
                other
            ))),
        }
    }
}

/// Configuration for hris, stored as `config.json` in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HrisConfig {
    #[serde(default)]
    pub backend: Backend,

    /// Worksheet file used by the sheet backend
    #[serde(default = "default_sheet_file")]
    pub sheet_file: String,

    /// Records file used by the json backend
    #[serde(default = "default_json_file")]
    pub json_file: String,

    /// Youngest age accepted for a date of birth
    #[serde(default = "default_min_age")]
    pub min_age: u32,

    #[serde(default = "default_job_positions")]
    pub job_positions: Vec<String>,

    #[serde(default = "default_departments")]
    pub departments: Vec<String>,
}

fn default_sheet_file() -> String {
    DEFAULT_SHEET_FILE.to_string()
}

fn default_json_file() -> String {
    DEFAULT_JSON_FILE.to_string()
}

fn default_min_age() -> u32 {
    DEFAULT_MIN_AGE
}

fn default_job_positions() -> Vec<String> {
    ["Manager", "Developer", "Analyst", "Designer"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_departments() -> Vec<String> {
    ["Sales", "Marketing", "Finance", "HR", "IT"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for HrisConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            sheet_file: default_sheet_file(),
            json_file: default_json_file(),
            min_age: DEFAULT_MIN_AGE,
            job_positions: default_job_positions(),
            departments: default_departments(),
        }
    }
}

impl HrisConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HrisError::Io)?;
        let config: HrisConfig =
            serde_json::from_str(&content).map_err(HrisError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(HrisError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(HrisError::Serialization)?;
        fs::write(config_path, content).map_err(HrisError::Io)?;
        Ok(())
    }

    pub fn rules(&self) -> FieldRules {
        FieldRules {
            min_age: self.min_age,
            job_positions: self.job_positions.clone(),
            departments: self.departments.clone(),
        }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "backend" => self.backend.to_string(),
            "sheet-file" => self.sheet_file.clone(),
            "json-file" => self.json_file.clone(),
            "min-age" => self.min_age.to_string(),
            "job-positions" => self.job_positions.join(","),
            "departments" => self.departments.join(","),
            other => return Err(unknown_key(other)),
        };
        Ok(value)
    }

    /// Sets one key from its textual form. Lists are comma separated.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "backend" => self.backend = value.parse()?,
            "sheet-file" => self.sheet_file = non_empty(key, value)?,
            "json-file" => self.json_file = non_empty(key, value)?,
            "min-age" => {
                self.min_age = value.trim().parse().map_err(|_| {
                    HrisError::Config(format!("min-age must be a whole number, got '{}'", value))
                })?
            }
            "job-positions" => self.job_positions = parse_list(key, value)?,
            "departments" => self.departments = parse_list(key, value)?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

/// The subset of configuration the field prompts need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    pub min_age: u32,
    pub job_positions: Vec<String>,
    pub departments: Vec<String>,
}

impl Default for FieldRules {
    fn default() -> Self {
        HrisConfig::default().rules()
    }
}

fn unknown_key(key: &str) -> HrisError {
    HrisError::Config(format!(
        "Unknown config key '{}' (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(HrisError::Config(format!("{} cannot be empty", key)));
    }
    Ok(value.to_string())
}

fn parse_list(key: &str, value: &str) -> Result<Vec<String>> {
    let items: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if items.is_empty() {
        return Err(HrisError::Config(format!("{} needs at least one entry", key)));
    }
    Ok(items)
}
