//! Static phrase catalogs the generators draw from.

pub const SLOGANS: &[&str] = &[
    "Красивые",
    "Крутые",
    "Стильные",
    "Модные",
    "Молодёжные",
    "Дизайнерские",
    "Эффектные",
    "Трендовые",
    "Лаконичные",
    "Яркие",
    "Современные",
    "Премиальные",
    "Универсальные",
    "Актуальные",
    "Выразительные",
    "Элегантные",
    "Минималистичные",
    "Смелые",
    "Классные",
    "Городские",
    "Лёгкие",
    "Комфортные",
    "Популярные",
    "Эксклюзивные",
    "Фирменные",
    "Невероятные",
    "Супер-стильные",
    "Изящные",
    "Брутальные",
    "Ультрамодные",
];

pub const SUN_TERMS: &[&str] = &["солнцезащитные очки", "солнечные очки"];

pub const SCENARIOS: &[&str] = &[
    "город",
    "путешествия",
    "отпуск",
    "прогулки",
    "вождение",
    "пляж",
    "активный отдых",
    "повседневные дела",
    "поездки",
    "летние мероприятия",
];

pub const HOOKS_PREMIUM: &[&str] = &[
    "Это тот самый аксессуар, который собирает образ в одну линию — спокойно, дорого и уверенно.",
    "Лёгкий акцент, который выглядит «брендово» без лишнего шума.",
    "Форма и посадка продуманы так, чтобы очки смотрелись гармонично в любой стилизации.",
];

pub const HOOKS_NEUTRAL: &[&str] = &[
    "Модель легко вписывается в повседневный гардероб и подчёркивает индивидуальность.",
    "Очки комфортны на каждый день и подходят под разные стили.",
    "Надёжный вариант на сезон: удобно, практично и стильно.",
];

pub const HOOKS_MASS: &[&str] = &[
    "Удобные очки на каждый день: сочетаются с одеждой и не перегружают образ.",
    "Хороший выбор, если хочется стильный аксессуар без сложностей.",
    "Берёшь — и сразу готовый лук: просто и со вкусом.",
];

pub const HOOKS_SOCIAL: &[&str] = &[
    "Тот самый вайб для фото и сторис — выглядит дорого и актуально 😎",
    "С этими очками образ становится «как в подборках» — просто надень и готово.",
    "Лёгкий апгрейд стиля: лайк за форму, лайк за настроение ✨",
];

pub const CLOSINGS: &[&str] = &[
    "Отличный вариант на тёплый сезон: стильно, удобно и практично.",
    "Подходят и для города, и для отдыха — аккуратный акцент в образе.",
    "Выбирай как обновление гардероба к сезону — очки легко комбинируются с одеждой.",
];

pub const SEO_KEYS: &[&str] = &[
    "очки солнцезащитные",
    "солнечные очки",
    "солнцезащитные очки",
    "брендовые очки",
    "модные очки",
    "очки женские",
    "очки мужские",
    "инста очки",
    "очки из tiktok",
];

/// Absolute claims and promises removed in strict mode, applied in order.
pub const STRICT_DROP: &[&str] = &[
    "лучшие",
    "самые лучшие",
    "идеальные",
    "100%",
    "гарантия",
    "гарантируем",
    "вылечит",
    "лечит",
    "абсолютно",
    "безусловно",
    "никогда",
    "всегда",
];

/// Risk words and their replacements for safe mode, applied in order.
pub const SAFE_REPLACE: &[(&str, &str)] = &[
    ("реплика", "стиль в духе бренда"),
    ("копия", "вдохновлённый дизайн"),
    ("люкс", "премиальный стиль"),
];

/// Default catalog contents seeded into a fresh data directory.
pub const DEFAULT_BRANDS: &[&str] = &["Gucci", "Prada", "Miu Miu", "Ray-Ban", "Cazal"];
pub const DEFAULT_SHAPES: &[&str] = &[
    "авиаторы",
    "квадратные",
    "овальные",
    "кошачий глаз",
    "круглые",
];
pub const DEFAULT_LENSES: &[&str] = &[
    "UV400",
    "поляризационные",
    "фотохромные",
    "градиентные",
    "зеркальные",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_pool_can_supply_four_distinct_items() {
        let mut unique = SCENARIOS.to_vec();
        unique.sort_unstable();
        unique.dedup();
        assert!(unique.len() >= 4);
    }

    #[test]
    fn seo_pool_covers_high_density() {
        assert!(SEO_KEYS.len() >= 6);
    }
}
