use anyhow::{Context, Result};
use sunseo_core::{LookupStore, BRANDS_FILE, LENSES_FILE, SHAPES_FILE};

use crate::cli::{LookupsArgs, LookupsCommand};
use crate::config::{self, AppConfig};

pub fn run(args: LookupsArgs, config: &AppConfig) -> Result<()> {
    let data_dir = config::data_dir(args.data_dir.as_deref(), config);
    let store = LookupStore::open(&data_dir)
        .with_context(|| format!("failed to open lookup data in {}", data_dir.display()))?;
    for line in execute(&store, args.command)? {
        println!("{line}");
    }
    Ok(())
}

fn execute(store: &LookupStore, command: LookupsCommand) -> Result<Vec<String>> {
    let lines = match command {
        LookupsCommand::List => {
            let lookups = store.load().context("failed to load lookup data")?;
            let mut lines = vec![format!("data dir: {}", store.dir().display())];
            lines.push(format!("{BRANDS_FILE}:"));
            for brand in &lookups.brands {
                lines.push(format!("  {brand} -> {}", lookups.brand_names.display_name(brand)));
            }
            lines.push(format!("{SHAPES_FILE}:"));
            lines.extend(lookups.shapes.iter().map(|shape| format!("  {shape}")));
            lines.push(format!("{LENSES_FILE}:"));
            lines.extend(lookups.lenses.iter().map(|lens| format!("  {lens}")));
            lines
        }
        LookupsCommand::AddBrand { latin, display } => {
            let display = store
                .add_brand(&latin, display.as_deref())
                .with_context(|| format!("failed to add brand {latin}"))?;
            vec![format!("{} -> {display}", latin.trim())]
        }
        LookupsCommand::AddShape { value } => {
            let added = store
                .add_shape(&value)
                .with_context(|| format!("failed to add shape {value}"))?;
            vec![added_line(SHAPES_FILE, &value, added)]
        }
        LookupsCommand::AddLens { value } => {
            let added = store
                .add_lens(&value)
                .with_context(|| format!("failed to add lens {value}"))?;
            vec![added_line(LENSES_FILE, &value, added)]
        }
    };
    Ok(lines)
}

fn added_line(file: &str, value: &str, added: bool) -> String {
    if added {
        format!("added {:?} to {file}", value.trim())
    } else {
        format!("{:?} already in {file} or blank", value.trim())
    }
}
