use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sunseo", about = "Fills marketplace sunglasses templates with titles and descriptions")]
pub struct Cli {
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,
    #[arg(long, global = true, default_value = "sunseo.toml")]
    pub config: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill the title and description columns of a template workbook.
    Fill(FillArgs),
    /// Print generated items without touching a workbook.
    Preview(PreviewArgs),
    /// Inspect or extend the brand, shape and lens catalogs.
    Lookups(LookupsArgs),
}

#[derive(Args, Debug)]
pub struct FillArgs {
    pub input: PathBuf,
    #[command(flatten)]
    pub generation: GenerationArgs,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    #[arg(long, default_value_t = 3)]
    pub count: usize,
    #[command(flatten)]
    pub generation: GenerationArgs,
}

#[derive(Args, Debug, Default, Clone)]
pub struct GenerationArgs {
    #[arg(long, default_value = "")]
    pub brand: String,
    #[arg(long, default_value = "")]
    pub shape: String,
    #[arg(long, default_value = "")]
    pub lens: String,
    #[arg(long)]
    pub collection: Option<String>,
    /// premium, neutral, mass or social
    #[arg(long)]
    pub style: Option<String>,
    /// short, medium or long
    #[arg(long)]
    pub length: Option<String>,
    /// low, normal or high
    #[arg(long)]
    pub seo: Option<String>,
    /// auto, female, male or unisex
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "no_safe")]
    pub safe: bool,
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_safe: bool,
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "no_strict")]
    pub strict: bool,
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_strict: bool,
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GenerationArgs {
    pub fn safe_mode(&self) -> Option<bool> {
        flag_pair(self.safe, self.no_safe)
    }

    pub fn strict_mode(&self) -> Option<bool> {
        flag_pair(self.strict, self.no_strict)
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Args, Debug)]
pub struct LookupsArgs {
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: LookupsCommand,
}

#[derive(Subcommand, Debug)]
pub enum LookupsCommand {
    List,
    AddBrand {
        latin: String,
        /// Display name; guessed from the Latin spelling when omitted.
        #[arg(long)]
        display: Option<String>,
    },
    AddShape {
        value: String,
    },
    AddLens {
        value: String,
    },
}
