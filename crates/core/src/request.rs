use serde::{Deserialize, Serialize};

use crate::filter::FilterSet;
use crate::lookups::BrandMap;

/// Tone of the opening hook sentence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StyleTag {
    Neutral,
    #[default]
    Premium,
    Mass,
    Social,
}

impl StyleTag {
    /// Unrecognised names fall back to the neutral tone.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "premium" => Self::Premium,
            "mass" => Self::Mass,
            "social" => Self::Social,
            _ => Self::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Premium => "premium",
            Self::Mass => "mass",
            Self::Social => "social",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DescLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl DescLength {
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "short" => Self::Short,
            "long" => Self::Long,
            _ => Self::Medium,
        }
    }

    /// Advisory length in characters. Composition does not enforce it; the
    /// only hard bound is the description cap.
    pub fn soft_target(&self) -> usize {
        match self {
            Self::Short => 650,
            Self::Medium => 1000,
            Self::Long => 1500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

/// How many SEO keyword phrases close the description.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeoDensity {
    Low,
    #[default]
    Normal,
    High,
}

impl SeoDensity {
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Normal,
        }
    }

    pub fn keyword_count(&self) -> usize {
        match self {
            Self::Low => 2,
            Self::Normal => 4,
            Self::High => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenderMode {
    #[default]
    Auto,
    Female,
    Male,
    Unisex,
}

impl GenderMode {
    /// Accepts both the English names and the Russian form labels.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "female" | "женские" => Self::Female,
            "male" | "мужские" => Self::Male,
            "unisex" | "унисекс" => Self::Unisex,
            _ => Self::Auto,
        }
    }

    /// Word inserted into the description; empty for `Auto`.
    pub fn phrase(&self) -> &'static str {
        match self {
            Self::Auto => "",
            Self::Female => "женские",
            Self::Male => "мужские",
            Self::Unisex => "унисекс",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Female => "female",
            Self::Male => "male",
            Self::Unisex => "unisex",
        }
    }
}

/// Parameters of one fill run. Built once and never changed during the run.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub brand: String,
    pub shape: String,
    pub lens: String,
    pub collection: String,
    pub style: StyleTag,
    pub length: DescLength,
    pub seo: SeoDensity,
    pub gender: GenderMode,
    pub safe_mode: bool,
    pub strict_mode: bool,
    pub brand_names: BrandMap,
}

impl GenerationRequest {
    pub fn builder<S: Into<String>>(brand: S) -> GenerationRequestBuilder {
        GenerationRequestBuilder::new(brand)
    }

    pub fn filters(&self) -> FilterSet {
        FilterSet::new(self.safe_mode, self.strict_mode)
    }
}

#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder {
    request: GenerationRequest,
}

impl GenerationRequestBuilder {
    pub fn new<S: Into<String>>(brand: S) -> Self {
        Self {
            request: GenerationRequest {
                brand: brand.into().trim().to_string(),
                safe_mode: true,
                strict_mode: true,
                ..GenerationRequest::default()
            },
        }
    }

    pub fn shape<S: Into<String>>(mut self, shape: S) -> Self {
        self.request.shape = shape.into().trim().to_string();
        self
    }

    pub fn lens<S: Into<String>>(mut self, lens: S) -> Self {
        self.request.lens = lens.into().trim().to_string();
        self
    }

    pub fn collection<S: Into<String>>(mut self, collection: S) -> Self {
        self.request.collection = collection.into().trim().to_string();
        self
    }

    pub fn style(mut self, style: StyleTag) -> Self {
        self.request.style = style;
        self
    }

    pub fn length(mut self, length: DescLength) -> Self {
        self.request.length = length;
        self
    }

    pub fn seo(mut self, seo: SeoDensity) -> Self {
        self.request.seo = seo;
        self
    }

    pub fn gender(mut self, gender: GenderMode) -> Self {
        self.request.gender = gender;
        self
    }

    pub fn safe_mode(mut self, enabled: bool) -> Self {
        self.request.safe_mode = enabled;
        self
    }

    pub fn strict_mode(mut self, enabled: bool) -> Self {
        self.request.strict_mode = enabled;
        self
    }

    pub fn brand_names(mut self, names: BrandMap) -> Self {
        self.request.brand_names = names;
        self
    }

    pub fn build(self) -> GenerationRequest {
        self.request
    }
}

/// Title and description produced for a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedItem {
    pub title: String,
    pub description: String,
}
