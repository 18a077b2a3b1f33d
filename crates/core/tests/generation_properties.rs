use proptest::prelude::*;
use sunseo_core::{
    cut_at_word_boundary, DescLength, GenderMode, GenerationRequest, ListingGenerator,
    RngSource, SeoDensity, StyleTag, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS,
};

proptest! {
    #[test]
    fn items_stay_within_limits(
        seed in any::<u64>(),
        brand in phrase("[A-Za-z&-]{1,10}", 8),
        shape in phrase("[а-я]{1,10}", 8),
        lens in phrase("[A-Za-z0-9а-я]{1,10}", 12),
        collection in phrase("[а-яА-Я0-9–]{1,12}", 400),
        safe in any::<bool>(),
        strict in any::<bool>(),
        style in style_tag(),
        seo in seo_density(),
        gender in gender_mode(),
    ) {
        let request = GenerationRequest::builder(brand)
            .shape(shape)
            .lens(lens)
            .collection(collection)
            .style(style)
            .length(DescLength::Long)
            .seo(seo)
            .gender(gender)
            .safe_mode(safe)
            .strict_mode(strict)
            .build();
        let mut generator = ListingGenerator::new(&request);
        let mut rng = RngSource::seeded(seed);
        for _ in 0..3 {
            let item = generator.next_item(&mut rng);
            prop_assert!(!item.title.is_empty());
            prop_assert!(item.title.chars().count() <= TITLE_MAX_CHARS);
            prop_assert!(item.description.chars().count() <= DESCRIPTION_MAX_CHARS);
            prop_assert!(!item.description.contains("  "));
        }
    }

    #[test]
    fn cut_returns_a_word_prefix(words in prop::collection::vec("[a-zа-я]{1,12}", 1..40), limit in 1usize..120) {
        let text = words.join(" ");
        let cut = cut_at_word_boundary(&text, limit);
        prop_assert!(cut.chars().count() <= limit);
        prop_assert!(text.starts_with(&cut));
        let rest = &text[cut.len()..];
        let single_long_word = words[0].chars().count() > limit && !cut.contains(' ');
        prop_assert!(rest.is_empty() || rest.starts_with(' ') || single_long_word);
    }
}

/// Space-joined words, mixing free-form ones with words the filters rewrite
/// or remove.
fn phrase(word: &'static str, max_words: usize) -> impl Strategy<Value = String> {
    let word = prop_oneof![
        3 => word.prop_map(|w| w.to_string()),
        1 => prop::sample::select(vec!["реплика", "копия", "люкс", "лучшие", "100%", "всегда"])
            .prop_map(str::to_string),
    ];
    prop::collection::vec(word, 0..max_words).prop_map(|words| words.join(" "))
}

fn style_tag() -> impl Strategy<Value = StyleTag> {
    prop_oneof![
        Just(StyleTag::Premium),
        Just(StyleTag::Neutral),
        Just(StyleTag::Mass),
        Just(StyleTag::Social),
    ]
}

fn seo_density() -> impl Strategy<Value = SeoDensity> {
    prop_oneof![
        Just(SeoDensity::Low),
        Just(SeoDensity::Normal),
        Just(SeoDensity::High),
    ]
}

fn gender_mode() -> impl Strategy<Value = GenderMode> {
    prop_oneof![
        Just(GenderMode::Auto),
        Just(GenderMode::Female),
        Just(GenderMode::Male),
        Just(GenderMode::Unisex),
    ]
}
