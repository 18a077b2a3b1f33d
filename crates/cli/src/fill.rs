use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use sunseo_core::{
    fill_workbook, FillOutcome, GenerationRequest, LookupStore, Lookups, RngSource,
    LENSES_FILE, SHAPES_FILE,
};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task;
use tracing::{debug, warn};

use crate::cli::FillArgs;
use crate::config::{self, AppConfig};
use crate::logging;

/// Messages posted by the fill worker.
#[derive(Debug)]
pub enum RunEvent {
    Progress(u8),
    Done(FillOutcome),
    Failed(String),
}

pub fn run(args: FillArgs, config: &AppConfig) -> Result<()> {
    let data_dir = config::data_dir(args.generation.data_dir.as_deref(), config);
    let store = LookupStore::open(&data_dir)
        .with_context(|| format!("failed to open lookup data in {}", data_dir.display()))?;
    let lookups = store.load().context("failed to load lookup data")?;
    warn_unknown_labels(&lookups, &args.generation.shape, &args.generation.lens);
    let request = config::resolve_request(
        &args.generation,
        &config.defaults,
        lookups.brand_names.clone(),
    );
    let runtime = Runtime::new().context("failed to start tokio runtime")?;
    let outcome = runtime.block_on(run_in_background(
        request,
        args.input,
        args.generation.seed,
        |percent| logging::stage("fill", format!("{percent}%")),
    ))?;
    println!(
        "output={} rows={}",
        outcome.output_path.display(),
        outcome.rows
    );
    Ok(())
}

fn warn_unknown_labels(lookups: &Lookups, shape: &str, lens: &str) {
    if !shape.trim().is_empty() && !lookups.is_known_shape(shape) {
        warn!("shape {shape:?} is not listed in {SHAPES_FILE}");
    }
    if !lens.trim().is_empty() && !lookups.is_known_lens(lens) {
        warn!("lens {lens:?} is not listed in {LENSES_FILE}");
    }
}

/// Runs the fill on a blocking worker and relays its progress to
/// `on_progress` each time the whole percentage changes.
pub async fn run_in_background<F>(
    request: GenerationRequest,
    input: PathBuf,
    seed: Option<u64>,
    mut on_progress: F,
) -> Result<FillOutcome>
where
    F: FnMut(u8),
{
    let (tx, mut rx) = mpsc::unbounded_channel();
    let worker = task::spawn_blocking(move || {
        let mut rng = seed
            .map(RngSource::seeded)
            .unwrap_or_else(RngSource::from_entropy);
        let mut last = None;
        let progress_tx = tx.clone();
        let result = fill_workbook(&request, &input, &mut rng, |value| {
            let percent = value.clamp(0.0, 100.0).floor() as u8;
            if last != Some(percent) {
                last = Some(percent);
                // The receiver outlives every sender.
                progress_tx.send(RunEvent::Progress(percent)).ok();
            }
        });
        let event = match result {
            Ok(outcome) => RunEvent::Done(outcome),
            Err(err) => RunEvent::Failed(err.to_string()),
        };
        if tx.send(event).is_err() {
            debug!("fill result dropped: receiver closed");
        }
    });

    let mut finished = None;
    while let Some(event) = rx.recv().await {
        match event {
            RunEvent::Progress(percent) => on_progress(percent),
            RunEvent::Done(outcome) => finished = Some(Ok(outcome)),
            RunEvent::Failed(message) => finished = Some(Err(anyhow!(message))),
        }
    }
    worker.await.context("fill worker stopped unexpectedly")?;
    finished.unwrap_or_else(|| Err(anyhow!("fill worker exited without a result")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use sunseo_core::SheetGrid;

    fn write_template(path: &Path, rows: u32) {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_active_sheet_mut();
        sheet.set_text(1, 1, "Наименование");
        sheet.set_text(1, 2, "Описание");
        for row in 2..=rows {
            sheet.set_text(row, 3, &format!("SKU-{row}"));
        }
        umya_spreadsheet::writer::xlsx::write(&book, path).unwrap();
    }

    fn request() -> GenerationRequest {
        GenerationRequest::builder("Prada")
            .shape("квадратные")
            .lens("UV400")
            .build()
    }

    #[test]
    fn worker_reports_progress_and_result() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cards.xlsx");
        write_template(&input, 14);

        let runtime = Runtime::new().unwrap();
        let mut seen = Vec::new();
        let outcome = runtime
            .block_on(run_in_background(request(), input, Some(3), |p| seen.push(p)))
            .unwrap();
        assert_eq!(outcome.rows, 10);
        assert_eq!(outcome.output_path, dir.path().join("cards_ready.xlsx"));
        assert_eq!(seen.len(), 10);
        assert_eq!(seen.last().copied(), Some(100));
        assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn worker_failure_becomes_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.xlsx");
        let runtime = Runtime::new().unwrap();
        let mut seen = Vec::new();
        let err = runtime
            .block_on(run_in_background(request(), input, None, |p| seen.push(p)))
            .unwrap_err();
        assert!(err.to_string().contains("workbook error"));
        assert!(seen.is_empty());
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.xlsx");
        let second = dir.path().join("b.xlsx");
        write_template(&first, 8);
        write_template(&second, 8);
        let runtime = Runtime::new().unwrap();
        let a = runtime
            .block_on(run_in_background(request(), first, Some(11), |_| {}))
            .unwrap();
        let b = runtime
            .block_on(run_in_background(request(), second, Some(11), |_| {}))
            .unwrap();
        let a = umya_spreadsheet::reader::xlsx::read(&a.output_path).unwrap();
        let b = umya_spreadsheet::reader::xlsx::read(&b.output_path).unwrap();
        for row in 5..=8 {
            assert_eq!(
                a.get_active_sheet().cell_text(row, 2),
                b.get_active_sheet().cell_text(row, 2)
            );
        }
    }
}
