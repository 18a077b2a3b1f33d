use std::collections::HashSet;

use tracing::warn;

/// Generations tried per title before a repeat is accepted.
pub const TITLE_ATTEMPTS: usize = 20;
/// Regenerations allowed after a colliding first description.
pub const DESCRIPTION_RETRIES: usize = 10;

/// Per-run memory of emitted text. Uniqueness is best effort: once the
/// budget is spent the last candidate is accepted as is.
#[derive(Debug, Default)]
pub struct RunState {
    titles: HashSet<String>,
    descriptions: HashSet<String>,
    processed: usize,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept_title<F>(&mut self, generate: F) -> String
    where
        F: FnMut() -> String,
    {
        accept_fresh(&mut self.titles, TITLE_ATTEMPTS, generate, "title")
    }

    pub fn accept_description<F>(&mut self, generate: F) -> String
    where
        F: FnMut() -> String,
    {
        accept_fresh(
            &mut self.descriptions,
            DESCRIPTION_RETRIES + 1,
            generate,
            "description",
        )
    }

    pub fn record_row(&mut self) -> usize {
        self.processed += 1;
        self.processed
    }

    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn distinct_titles(&self) -> usize {
        self.titles.len()
    }

    pub fn distinct_descriptions(&self) -> usize {
        self.descriptions.len()
    }
}

fn accept_fresh<F>(seen: &mut HashSet<String>, attempts: usize, mut generate: F, kind: &str) -> String
where
    F: FnMut() -> String,
{
    let mut candidate = generate();
    let mut attempt = 1;
    while seen.contains(&candidate) && attempt < attempts {
        candidate = generate();
        attempt += 1;
    }
    if seen.contains(&candidate) {
        warn!("{kind} repeated after {attempts} attempts");
    }
    seen.insert(candidate.clone());
    candidate
}
