use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Directory that relative campus file names resolve against.
    #[serde(default = "default_catalog_dir")]
    pub dir: PathBuf,
    /// Institutions in aggregation order.
    #[serde(default = "default_campuses")]
    pub campuses: Vec<CampusConfig>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: default_catalog_dir(),
            campuses: default_campuses(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CampusConfig {
    /// Display name stamped onto every course from this campus.
    pub name: String,
    /// JSON catalog file, absolute or relative to `catalog.dir`.
    pub file: PathBuf,
}

impl CampusConfig {
    fn new(name: &str, file: &str) -> Self {
        Self {
            name: name.to_string(),
            file: PathBuf::from(file),
        }
    }
}

impl CatalogConfig {
    pub fn path_for(&self, campus: &CampusConfig) -> PathBuf {
        self.dir.join(&campus.file)
    }
}

fn default_catalog_dir() -> PathBuf {
    PathBuf::from("./data/json_format")
}

fn default_campuses() -> Vec<CampusConfig> {
    vec![
        CampusConfig::new("Hawai‘i Community College", "hawaiicc_courses.json"),
        CampusConfig::new("University of Hawai‘i at Hilo", "hilo_courses.json"),
        CampusConfig::new("Honolulu Community College", "honolulucc_courses.json"),
        CampusConfig::new("Kapi‘olani Community College", "kapiolani_courses.json"),
        CampusConfig::new("Kaua‘i Community College", "kauai_courses.json"),
        CampusConfig::new("Leeward Community College", "leeward_courses.json"),
        CampusConfig::new("University of Hawai‘i at Mānoa", "manoa_courses.json"),
        CampusConfig::new("University of Hawai‘i Maui College", "maui_courses.json"),
        CampusConfig::new(
            "Pacific Center for Advanced Technology Training (PCATT)",
            "pcatt_courses.json",
        ),
        CampusConfig::new("University of Hawai‘i – West O‘ahu", "west_oahu_courses.json"),
    ]
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    if config.server.bind.trim().is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    if config.catalog.campuses.is_empty() {
        anyhow::bail!("catalog.campuses must list at least one campus");
    }

    let mut seen = HashSet::new();
    for campus in &config.catalog.campuses {
        let name = campus.name.trim();
        if name.is_empty() {
            anyhow::bail!("catalog.campuses: name must not be empty");
        }
        if campus.file.as_os_str().is_empty() {
            anyhow::bail!("catalog.campuses: file must not be empty for '{}'", name);
        }
        if !seen.insert(name.to_lowercase()) {
            anyhow::bail!("catalog.campuses: duplicate campus name '{}'", name);
        }
    }

    Ok(config)
}
