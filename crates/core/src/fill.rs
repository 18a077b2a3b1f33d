use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::dedup::RunState;
use crate::description::{generate_description, DescriptionInput, DESCRIPTION_MAX_CHARS};
use crate::error::{FillError, Result};
use crate::random::RandomSource;
use crate::request::{GeneratedItem, GenerationRequest};
use crate::sheet::{locate_target, open_workbook, save_workbook, SheetGrid};
use crate::text::cut_at_word_boundary;
use crate::title::{generate_title, TITLE_MAX_CHARS};

/// Appended to the input file stem to name the filled copy.
pub const OUTPUT_SUFFIX: &str = "_ready";
const DEFAULT_EXTENSION: &str = "xlsx";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillOutcome {
    pub output_path: PathBuf,
    pub rows: usize,
}

fn title_for<R: RandomSource + ?Sized>(request: &GenerationRequest, rng: &mut R) -> String {
    generate_title(
        rng,
        &request.brand,
        &request.shape,
        &request.lens,
        &request.brand_names,
    )
}

fn description_for<R: RandomSource + ?Sized>(request: &GenerationRequest, rng: &mut R) -> String {
    generate_description(
        rng,
        &DescriptionInput {
            brand: &request.brand,
            shape: &request.shape,
            lens: &request.lens,
            collection: &request.collection,
            style: request.style,
            seo: request.seo,
            gender: request.gender,
        },
    )
}

/// Produces filtered, run-unique items for one request.
pub struct ListingGenerator<'a> {
    request: &'a GenerationRequest,
    state: RunState,
}

impl<'a> ListingGenerator<'a> {
    pub fn new(request: &'a GenerationRequest) -> Self {
        debug!(
            "description soft target {} chars ({})",
            request.length.soft_target(),
            request.length.as_str()
        );
        Self {
            request,
            state: RunState::new(),
        }
    }

    /// Next item: de-duplicated against this run, then filtered. Safe
    /// replacements can lengthen the text, so both caps are applied again.
    pub fn next_item<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> GeneratedItem {
        let request = self.request;
        let title = self.state.accept_title(|| title_for(request, rng));
        let description = self
            .state
            .accept_description(|| description_for(request, rng));
        self.state.record_row();
        let filters = request.filters();
        GeneratedItem {
            title: cut_at_word_boundary(&filters.apply(&title), TITLE_MAX_CHARS),
            description: cut_at_word_boundary(
                &filters.apply(&description),
                DESCRIPTION_MAX_CHARS,
            ),
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }
}

/// Fills every data row of `grid` and reports progress in percent after
/// each row. Returns the number of rows written.
pub fn fill_sheet<G, R, P>(
    grid: &mut G,
    request: &GenerationRequest,
    rng: &mut R,
    mut progress: P,
) -> Result<usize>
where
    G: SheetGrid + ?Sized,
    R: RandomSource + ?Sized,
    P: FnMut(f64),
{
    let target = locate_target(grid)?;
    let total = target.total_rows();
    info!(
        "filling rows {}..={} (title column {}, description column {})",
        target.first_row, target.last_row, target.title_column, target.description_column
    );
    let mut generator = ListingGenerator::new(request);
    for row in target.rows() {
        let item = generator.next_item(rng);
        grid.set_text(row, target.title_column, &item.title);
        grid.set_text(row, target.description_column, &item.description);
        let processed = generator.state().processed();
        debug!("row {row}: {}", item.title);
        progress(processed as f64 / total as f64 * 100.0);
    }
    Ok(generator.state().processed())
}

/// `<stem>_ready.<ext>` next to the input.
pub fn output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = input
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.{extension}"))
}

/// Loads the workbook, fills its active sheet and saves the copy. Nothing is
/// written to disk unless every row was filled.
pub fn fill_workbook<R, P>(
    request: &GenerationRequest,
    input: &Path,
    rng: &mut R,
    progress: P,
) -> Result<FillOutcome>
where
    R: RandomSource + ?Sized,
    P: FnMut(f64),
{
    if input.as_os_str().is_empty() {
        return Err(FillError::NoInput);
    }
    info!("loading {}", input.display());
    let mut book = open_workbook(input)?;
    let rows = fill_sheet(book.get_active_sheet_mut(), request, rng, progress)?;
    let output_path = output_path(input);
    save_workbook(&book, &output_path)?;
    info!("saved {} rows to {}", rows, output_path.display());
    Ok(FillOutcome { output_path, rows })
}
