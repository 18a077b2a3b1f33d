mod dedup;
mod description;
mod error;
mod fill;
mod filter;
mod lookups;
mod pools;
mod random;
mod request;
mod sheet;
mod text;
mod title;

pub use dedup::{RunState, DESCRIPTION_RETRIES, TITLE_ATTEMPTS};
pub use description::{
    generate_description, hook_pool, seo_keywords, DescriptionInput, DESCRIPTION_MAX_CHARS,
    SCENARIO_COUNT,
};
pub use error::{FillError, Result};
pub use fill::{fill_sheet, fill_workbook, output_path, FillOutcome, ListingGenerator, OUTPUT_SUFFIX};
pub use filter::{apply_safe, apply_strict, FilterSet};
pub use lookups::{
    guess_display_name, BrandMap, LookupStore, Lookups, BRANDS_FILE, BRAND_NAMES_FILE,
    LENSES_FILE, SHAPES_FILE,
};
pub use random::{RandomSource, RngSource};
pub use request::{
    DescLength, GenderMode, GeneratedItem, GenerationRequest, GenerationRequestBuilder,
    SeoDensity, StyleTag,
};
pub use sheet::{
    find_header, locate_target, SheetGrid, SheetTarget, DESCRIPTION_LABELS, FIRST_WRITABLE_ROW,
    HEADER_SCAN_ROWS, TITLE_LABELS,
};
pub use text::cut_at_word_boundary;
pub use title::{generate_title, TITLE_MAX_CHARS};
