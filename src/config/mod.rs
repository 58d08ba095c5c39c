use anyhow::{anyhow, Result};
use recymap_core::util::validate::{is_valid_limit, is_valid_radius};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "recymap.toml";

const ENV_NAME_LOCATIONS_FILE: &str = "RECYMAP_LOCATIONS_FILE";
const ENV_NAME_CLASSIFIER_URL: &str = "RECYMAP_CLASSIFIER_URL";

pub struct Config {
    pub locations: Locations,
    pub search: Search,
    pub classifier: Classifier,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(file) = env::var(ENV_NAME_LOCATIONS_FILE) {
            cfg.locations.file = Some(file.into());
        }
        if let Ok(url) = env::var(ENV_NAME_CLASSIFIER_URL) {
            cfg.classifier.url = Some(url);
        }
        Ok(cfg)
    }
}

pub struct Locations {
    /// JSON seed file, an empty store is used if missing.
    pub file: Option<PathBuf>,
}

/// Defaults for search requests.
pub struct Search {
    pub radius_km: f64,
    pub limit: usize,
}

pub struct Classifier {
    pub url: Option<String>,
    pub timeout: Duration,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            locations,
            search,
            classifier,
        } = from;

        let raw::Locations { file } = locations.unwrap_or_default();
        let locations = Locations { file };

        let raw::Search { radius_km, limit } = search.unwrap_or_default();
        let defaults = raw::Search::default();
        let radius_km = radius_km
            .or(defaults.radius_km)
            .ok_or_else(|| anyhow!("Missing default search radius"))?;
        if !is_valid_radius(radius_km) {
            return Err(anyhow!("Invalid default search radius: {radius_km} km"));
        }
        let limit = limit
            .or(defaults.limit)
            .ok_or_else(|| anyhow!("Missing default search limit"))?;
        if !is_valid_limit(limit) {
            return Err(anyhow!("Invalid default search limit: {limit}"));
        }
        let search = Search { radius_km, limit };

        let raw::Classifier { url, timeout } = classifier.unwrap_or_default();
        let timeout = timeout
            .or(raw::Classifier::default().timeout)
            .ok_or_else(|| anyhow!("Missing classifier timeout"))?;
        if let Some(url) = &url {
            log::info!("Use classifier at {url}");
        }
        let classifier = Classifier { url, timeout };

        Ok(Self {
            locations,
            search,
            classifier,
        })
    }
}
