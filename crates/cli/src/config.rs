use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use sunseo_core::{
    BrandMap, DescLength, GenderMode, GenerationRequest, SeoDensity, StyleTag,
};

use crate::cli::GenerationArgs;

pub const DATA_DIR_ENV: &str = "SUNSEO_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "sunseo-data";

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub defaults: GenerationDefaults,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerationDefaults {
    pub style: Option<String>,
    pub length: Option<String>,
    pub seo: Option<String>,
    pub gender: Option<String>,
    pub collection: Option<String>,
    pub safe_mode: Option<bool>,
    pub strict_mode: Option<bool>,
}

pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&contents).map_err(|e| anyhow!("invalid config: {e}"))
}

/// Flag, then `SUNSEO_DATA_DIR`, then the config file, then `./sunseo-data`.
pub fn data_dir(flag: Option<&Path>, config: &AppConfig) -> PathBuf {
    pick_data_dir(flag, env::var_os(DATA_DIR_ENV).map(PathBuf::from), config)
}

fn pick_data_dir(flag: Option<&Path>, from_env: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or(from_env.filter(|dir| !dir.as_os_str().is_empty()))
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Command line values win over config defaults, which win over built-ins.
pub fn resolve_request(
    args: &GenerationArgs,
    defaults: &GenerationDefaults,
    brand_names: BrandMap,
) -> GenerationRequest {
    let style = args
        .style
        .as_deref()
        .or(defaults.style.as_deref())
        .map(StyleTag::parse)
        .unwrap_or_default();
    let length = args
        .length
        .as_deref()
        .or(defaults.length.as_deref())
        .map(DescLength::parse)
        .unwrap_or_default();
    let seo = args
        .seo
        .as_deref()
        .or(defaults.seo.as_deref())
        .map(SeoDensity::parse)
        .unwrap_or_default();
    let gender = args
        .gender
        .as_deref()
        .or(defaults.gender.as_deref())
        .map(GenderMode::parse)
        .unwrap_or_default();
    let collection = args
        .collection
        .clone()
        .or_else(|| defaults.collection.clone())
        .unwrap_or_default();
    GenerationRequest::builder(args.brand.as_str())
        .shape(args.shape.as_str())
        .lens(args.lens.as_str())
        .collection(collection)
        .style(style)
        .length(length)
        .seo(seo)
        .gender(gender)
        .safe_mode(args.safe_mode().or(defaults.safe_mode).unwrap_or(true))
        .strict_mode(args.strict_mode().or(defaults.strict_mode).unwrap_or(true))
        .brand_names(brand_names)
        .build()
}
