use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("recymap.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub locations: Option<Locations>,
    pub search: Option<Search>,
    pub classifier: Option<Classifier>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Locations {
    pub file: Option<PathBuf>,
}

impl Default for Locations {
    fn default() -> Self {
        Config::default()
            .locations
            .expect("Locations configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Search {
    pub radius_km: Option<f64>,
    pub limit: Option<usize>,
}

impl Default for Search {
    fn default() -> Self {
        Config::default().search.expect("Search configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Classifier {
    pub url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

impl Default for Classifier {
    fn default() -> Self {
        Config::default()
            .classifier
            .expect("Classifier configuration")
    }
}
