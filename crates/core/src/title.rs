use crate::lookups::BrandMap;
use crate::pools::{SLOGANS, SUN_TERMS};
use crate::random::{choose, RandomSource};
use crate::text::{capitalize_first, collapse_spaces, cut_at_word_boundary};

pub const TITLE_MAX_CHARS: usize = 60;

const BRAND_CHANCE: f64 = 0.5;
const SHAPE_CHANCE: f64 = 0.6;
const LENS_CHANCE: f64 = 0.5;

/// Builds a listing title: slogan and sunglasses term always, localized
/// brand, shape and lens each with their own chance.
pub fn generate_title<R: RandomSource + ?Sized>(
    rng: &mut R,
    brand: &str,
    shape: &str,
    lens: &str,
    brand_names: &BrandMap,
) -> String {
    let display_brand = brand_names.display_name(brand);
    let mut parts = vec![
        choose(rng, SLOGANS).to_string(),
        choose(rng, SUN_TERMS).to_string(),
    ];
    if rng.chance(BRAND_CHANCE) {
        parts.push(display_brand);
    }
    if !shape.is_empty() && rng.chance(SHAPE_CHANCE) {
        parts.push(shape.to_string());
    }
    if !lens.is_empty() && rng.chance(LENS_CHANCE) {
        parts.push(lens.to_string());
    }
    let joined = parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let title = capitalize_first(&collapse_spaces(joined.trim()));
    cut_at_word_boundary(&title, TITLE_MAX_CHARS)
}
