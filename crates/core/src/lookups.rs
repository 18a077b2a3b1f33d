use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::pools::{DEFAULT_BRANDS, DEFAULT_LENSES, DEFAULT_SHAPES};
use crate::text::{capitalize_first, normalize_key};

pub const BRANDS_FILE: &str = "brands.txt";
pub const SHAPES_FILE: &str = "shapes.txt";
pub const LENSES_FILE: &str = "lenses.txt";
pub const BRAND_NAMES_FILE: &str = "brands_ru.json";

/// Normalized brand key → localized display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandMap {
    names: BTreeMap<String, String>,
}

impl BrandMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `display` under the normalized form of `brand`.
    pub fn insert(&mut self, brand: &str, display: &str) {
        self.names
            .insert(normalize_key(brand), display.trim().to_string());
    }

    pub fn get(&self, brand: &str) -> Option<&str> {
        self.names.get(&normalize_key(brand)).map(String::as_str)
    }

    /// Localized name when one is known, the raw brand otherwise.
    pub fn display_name(&self, brand: &str) -> String {
        match self.get(brand) {
            Some(name) if !name.is_empty() => name.trim().to_string(),
            _ => brand.trim().to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for BrandMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BrandMap::new();
        for (brand, display) in iter {
            map.insert(brand.as_ref(), display.as_ref());
        }
        map
    }
}

/// Read-only snapshot of the reference data taken at run start.
#[derive(Debug, Clone, Default)]
pub struct Lookups {
    pub brands: Vec<String>,
    pub shapes: Vec<String>,
    pub lenses: Vec<String>,
    pub brand_names: BrandMap,
}

impl Lookups {
    pub fn is_known_shape(&self, shape: &str) -> bool {
        contains_label(&self.shapes, shape)
    }

    pub fn is_known_lens(&self, lens: &str) -> bool {
        contains_label(&self.lenses, lens)
    }
}

fn contains_label(labels: &[String], value: &str) -> bool {
    let value = value.trim();
    labels.iter().any(|label| label == value)
}

/// Plain-file reference data kept in one directory.
#[derive(Debug, Clone)]
pub struct LookupStore {
    dir: PathBuf,
}

impl LookupStore {
    /// Opens `dir`, creating it and seeding default catalogs when missing.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        let store = Self { dir };
        store.seed(BRANDS_FILE, &DEFAULT_BRANDS.join("\n"))?;
        store.seed(SHAPES_FILE, &DEFAULT_SHAPES.join("\n"))?;
        store.seed(LENSES_FILE, &DEFAULT_LENSES.join("\n"))?;
        store.seed(BRAND_NAMES_FILE, "{}")?;
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn seed(&self, name: &str, contents: &str) -> Result<()> {
        let path = self.dir.join(name);
        if !path.exists() {
            fs::write(path, contents)?;
        }
        Ok(())
    }

    pub fn load(&self) -> Result<Lookups> {
        Ok(Lookups {
            brands: read_list(&self.dir.join(BRANDS_FILE))?,
            shapes: read_list(&self.dir.join(SHAPES_FILE))?,
            lenses: read_list(&self.dir.join(LENSES_FILE))?,
            brand_names: self.brand_names(),
        })
    }

    /// The brand map degrades to empty when the file is unreadable.
    pub fn brand_names(&self) -> BrandMap {
        let path = self.dir.join(BRAND_NAMES_FILE);
        read_brand_names(&path).unwrap_or_else(|err| {
            warn!("ignoring brand names in {}: {err}", path.display());
            BrandMap::new()
        })
    }

    /// Registers a brand and its display name. A blank display name falls
    /// back to the transliteration guess.
    pub fn add_brand(&self, brand: &str, display: Option<&str>) -> Result<String> {
        let brand = brand.trim();
        if brand.is_empty() {
            return Ok(String::new());
        }
        let display = display
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| guess_display_name(brand));
        self.append(BRANDS_FILE, brand)?;
        let mut names = self.brand_names();
        names.insert(brand, &display);
        let path = self.dir.join(BRAND_NAMES_FILE);
        fs::write(path, serde_json::to_string_pretty(&names)?)?;
        Ok(display)
    }

    pub fn add_shape(&self, shape: &str) -> Result<bool> {
        self.append(SHAPES_FILE, shape)
    }

    pub fn add_lens(&self, lens: &str) -> Result<bool> {
        self.append(LENSES_FILE, lens)
    }

    fn append(&self, name: &str, value: &str) -> Result<bool> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(false);
        }
        let path = self.dir.join(name);
        let mut items = read_list(&path)?;
        if items.iter().any(|item| item == value) {
            return Ok(false);
        }
        items.push(value.to_string());
        fs::write(path, items.join("\n"))?;
        Ok(true)
    }
}

/// Trimmed non-empty lines, first occurrence wins.
pub fn read_list(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)?;
    let mut seen = HashSet::new();
    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(line.to_string()))
        .map(str::to_string)
        .collect())
}

pub fn read_brand_names(path: &Path) -> Result<BrandMap> {
    if !path.exists() {
        return Ok(BrandMap::new());
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

const TRANSLIT_RULES: &[(&str, &str)] = &[
    ("sch", "ш"),
    ("sh", "ш"),
    ("ch", "ч"),
    ("ya", "я"),
    ("yu", "ю"),
    ("yo", "ё"),
    ("kh", "х"),
    ("ts", "ц"),
    ("ph", "ф"),
    ("th", "т"),
    ("a", "а"),
    ("b", "б"),
    ("c", "к"),
    ("d", "д"),
    ("e", "е"),
    ("f", "ф"),
    ("g", "г"),
    ("h", "х"),
    ("i", "и"),
    ("j", "дж"),
    ("k", "к"),
    ("l", "л"),
    ("m", "м"),
    ("n", "н"),
    ("o", "о"),
    ("p", "п"),
    ("q", "к"),
    ("r", "р"),
    ("s", "с"),
    ("t", "т"),
    ("u", "у"),
    ("v", "в"),
    ("w", "в"),
    ("x", "кс"),
    ("y", "и"),
    ("z", "з"),
];

/// Rough Cyrillic spelling of a latin brand, offered as a starting point.
pub fn guess_display_name(brand: &str) -> String {
    let lowered = brand.trim().to_lowercase().replace('-', " ");
    let words: Vec<String> = lowered
        .split_whitespace()
        .map(|word| {
            let spelled = TRANSLIT_RULES
                .iter()
                .fold(word.to_string(), |acc, (from, to)| acc.replace(from, to));
            capitalize_first(&spelled)
        })
        .collect();
    if words.is_empty() {
        brand.to_string()
    } else {
        words.join(" ")
    }
}
