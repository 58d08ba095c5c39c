use crate::{
    adapters::json,
    config::{self, Config},
    store::{LocationStore, SeedError},
};
use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use recymap_core::{entities::WasteCategory, usecases, util::validate::SearchArea};
use recymap_gateways::classifier::HttpClassifier;
use serde::Serialize;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

#[derive(Parser, Debug)]
#[command(name = "recymap", version, about = "Find recycling drop-off points nearby", long_about = None)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON file with the locations to search in
    #[arg(long, value_name = "FILE")]
    pub locations: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct AreaArgs {
    /// Latitude of the search center in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude of the search center in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,

    /// Search radius in kilometers
    #[arg(long)]
    pub radius: Option<f64>,
}

impl AreaArgs {
    fn to_area(self, defaults: &config::Search) -> SearchArea {
        let Self { lat, lng, radius } = self;
        SearchArea {
            lat,
            lng,
            radius_km: radius.unwrap_or(defaults.radius_km),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the nearest drop-off points
    Search {
        #[command(flatten)]
        area: AreaArgs,

        /// Only locations that accept this kind of waste
        #[arg(long, value_name = "CATEGORY")]
        waste_type: Option<WasteCategory>,

        /// Only locations with a name containing this text
        #[arg(long)]
        name: Option<String>,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Recommend the nearest drop-off points for every recyclable category
    Recommend {
        #[command(flatten)]
        area: AreaArgs,
    },
    /// Classify images and find drop-off points for the recognized waste
    Classify {
        /// One or more image files
        #[arg(required = true, value_name = "IMAGE")]
        images: Vec<PathBuf>,

        #[command(flatten)]
        area: AreaArgs,

        /// Maximum number of results per image
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show a single location
    Show { id: String },
    /// List all waste categories
    Categories,
}

pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        config,
        locations,
        command,
    } = cli;

    let cfg = Config::try_load_from_file_or_default(config.as_ref())?;

    match command {
        Command::Search {
            area,
            waste_type,
            name,
            limit,
        } => {
            let store = load_store(locations, &cfg)?;
            let area = area.to_area(&cfg.search);
            let criteria = usecases::SearchCriteria {
                waste_type,
                name,
                ..usecases::SearchCriteria::new(area, limit.unwrap_or(cfg.search.limit))
            };
            let candidates = usecases::search_nearby(&store, &criteria)?;
            print_json(&json::search_result(&criteria, candidates))
        }
        Command::Recommend { area } => {
            let store = load_store(locations, &cfg)?;
            let area = area.to_area(&cfg.search);
            let recommendation = usecases::recommend_by_category(&store, area)?;
            print_json(&json::recommendation(area, recommendation))
        }
        Command::Classify {
            images,
            area,
            limit,
        } => {
            let url = cfg
                .classifier
                .url
                .clone()
                .ok_or_else(|| anyhow!("No classifier URL configured"))?;
            let classifier = HttpClassifier::new(url, cfg.classifier.timeout)?;
            let store = load_store(locations, &cfg)?;
            let area = area.to_area(&cfg.search);
            let limit = limit.unwrap_or(cfg.search.limit);
            if let [path] = images.as_slice() {
                let item = batch_item(path)?;
                item.ensure_image()?;
                let result =
                    usecases::classify_and_search(&store, &classifier, &item.image, area, limit)?;
                return print_json(&json::classified_search(result));
            }
            let items = images
                .iter()
                .map(|path| batch_item(path))
                .collect::<Result<Vec<_>>>()?;
            let results =
                usecases::batch_classify_and_search(&store, &classifier, &items, area, limit)?;
            print_json(&json::batch_result(area, results))
        }
        Command::Show { id } => {
            let store = load_store(locations, &cfg)?;
            let location = usecases::get_location(&store, &id)?;
            print_json(&json::Location::from(location))
        }
        Command::Categories => print_json(&json::waste_category_infos(
            usecases::waste_category_infos(),
        )),
    }
}

fn load_store(locations: Option<PathBuf>, cfg: &Config) -> Result<LocationStore> {
    let Some(path) = locations.or_else(|| cfg.locations.file.clone()) else {
        log::warn!("No locations file configured: start with an empty store");
        return Ok(LocationStore::new());
    };
    log::info!("Load locations from {}", path.display());
    match LocationStore::load_json_file(&path) {
        Ok(store) => Ok(store),
        Err(SeedError::Io(err)) if err.kind() == ErrorKind::NotFound => {
            log::warn!(
                "{} not found => start with an empty store",
                path.display()
            );
            Ok(LocationStore::new())
        }
        Err(err) => Err(err)
            .with_context(|| format!("Unable to load locations from {}", path.display())),
    }
}

fn batch_item(path: &Path) -> Result<usecases::BatchItem> {
    let image =
        fs::read(path).with_context(|| format!("Unable to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(usecases::BatchItem {
        name,
        content_type: content_type(path),
        image,
    })
}

/// Guess the MIME type from the file extension.
fn content_type(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let content_type = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    };
    Some(content_type.to_owned())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
