use std::collections::HashSet;

use crate::pools::{
    CLOSINGS, HOOKS_MASS, HOOKS_NEUTRAL, HOOKS_PREMIUM, HOOKS_SOCIAL, SCENARIOS, SEO_KEYS,
};
use crate::random::{choose, RandomSource};
use crate::request::{GenderMode, SeoDensity, StyleTag};
use crate::text::{capitalize_first, collapse_spaces, cut_at_word_boundary};

pub const DESCRIPTION_MAX_CHARS: usize = 2000;
pub const SCENARIO_COUNT: usize = 4;

/// Attributes the description template is filled from.
#[derive(Debug, Clone, Copy)]
pub struct DescriptionInput<'a> {
    pub brand: &'a str,
    pub shape: &'a str,
    pub lens: &'a str,
    pub collection: &'a str,
    pub style: StyleTag,
    pub seo: SeoDensity,
    pub gender: GenderMode,
}

pub fn hook_pool(style: StyleTag) -> &'static [&'static str] {
    match style {
        StyleTag::Premium => HOOKS_PREMIUM,
        StyleTag::Mass => HOOKS_MASS,
        StyleTag::Social => HOOKS_SOCIAL,
        StyleTag::Neutral => HOOKS_NEUTRAL,
    }
}

/// Shuffles the de-duplicated keyword pool and keeps the density prefix.
pub fn seo_keywords<R: RandomSource + ?Sized>(rng: &mut R, seo: SeoDensity) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    let pool: Vec<&'static str> = SEO_KEYS
        .iter()
        .copied()
        .filter(|key| seen.insert(*key))
        .collect();
    rng.permutation(pool.len())
        .into_iter()
        .take(seo.keyword_count())
        .map(|idx| pool[idx])
        .collect()
}

fn scenarios<R: RandomSource + ?Sized>(rng: &mut R) -> Vec<&'static str> {
    rng.sample(SCENARIOS.len(), SCENARIO_COUNT)
        .into_iter()
        .map(|idx| SCENARIOS[idx])
        .collect()
}

pub fn generate_description<R: RandomSource + ?Sized>(
    rng: &mut R,
    input: &DescriptionInput<'_>,
) -> String {
    let gender = input.gender.phrase();
    let hook = choose(rng, hook_pool(input.style));
    let scenes = scenarios(rng);
    let keywords = seo_keywords(rng, input.seo);

    let mut sentences: Vec<String> = vec![hook.to_string()];
    if !input.brand.is_empty() {
        let prefix = if gender.is_empty() {
            String::new()
        } else {
            format!("{gender} ")
        };
        sentences.push(format!(
            "Очки {} — {prefix}аксессуар, который легко носить каждый день.",
            input.brand
        ));
    } else {
        let prefix = if gender.is_empty() {
            String::new()
        } else {
            format!("{} ", capitalize_first(gender))
        };
        sentences.push(format!("{prefix}очки — удобный аксессуар на сезон."));
    }
    if !input.shape.is_empty() {
        sentences.push(format!(
            "Форма {} смотрится актуально и помогает сбалансировать черты лица.",
            input.shape
        ));
    }
    if !input.lens.is_empty() {
        sentences.push(format!(
            "Линзы {} дают комфорт при ярком солнце и подходят для активного дня.",
            input.lens
        ));
    }
    if !input.collection.is_empty() {
        sentences.push(format!(
            "Модель хорошо заходит на сезон {} — для города и отдыха.",
            input.collection
        ));
    }
    sentences.push(format!("Идеи, куда носить: {}.", scenes.join(", ")));
    sentences.push(choose(rng, CLOSINGS).to_string());
    sentences.push(format!("{}.", keywords.join(" ")));

    let text = collapse_spaces(&sentences.join(" ")).trim().to_string();
    cut_at_word_boundary(&text, DESCRIPTION_MAX_CHARS)
}
