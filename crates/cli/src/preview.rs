use anyhow::{Context, Result};
use sunseo_core::{GeneratedItem, GenerationRequest, ListingGenerator, LookupStore, RandomSource, RngSource};

use crate::cli::PreviewArgs;
use crate::config::{self, AppConfig};

pub fn run(args: PreviewArgs, config: &AppConfig) -> Result<()> {
    let data_dir = config::data_dir(args.generation.data_dir.as_deref(), config);
    let store = LookupStore::open(&data_dir)
        .with_context(|| format!("failed to open lookup data in {}", data_dir.display()))?;
    let request = config::resolve_request(&args.generation, &config.defaults, store.brand_names());
    let mut rng = args
        .generation
        .seed
        .map(RngSource::seeded)
        .unwrap_or_else(RngSource::from_entropy);
    for (idx, item) in preview_items(&request, args.count, &mut rng)
        .iter()
        .enumerate()
    {
        println!("#{} {}", idx + 1, item.title);
        println!("{}", item.description);
        println!();
    }
    Ok(())
}

/// Items exactly as a fill run would emit them for its first `count` rows.
pub fn preview_items<R: RandomSource + ?Sized>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
) -> Vec<GeneratedItem> {
    let mut generator = ListingGenerator::new(request);
    (0..count).map(|_| generator.next_item(rng)).collect()
}
