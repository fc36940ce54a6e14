// file: src/runner.rs
// description: sequential search loop with progress reporting and statistics
// reference: uses indicatif for progress bars and tracks per-run metrics

use crate::crm::{CompanySearchClient, SearchResponse};
use crate::error::{Result, SearchError};
use crate::models::CompanyRecord;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

/// What to do with a match that is missing a requested property.
/// `Abort` fails the whole run on the first malformed match; `Skip`
/// logs it and drops that one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedPolicy {
    Abort,
    Skip,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub names_queried: usize,
    pub records_matched: usize,
    pub names_rejected: usize,
    pub hits_skipped: usize,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug)]
pub struct SearchOutcome {
    pub records: Vec<CompanyRecord>,
    pub stats: SearchStats,
}

pub struct SearchRunner {
    client: CompanySearchClient,
    policy: MalformedPolicy,
    colored: bool,
}

impl SearchRunner {
    pub fn new(client: CompanySearchClient, policy: MalformedPolicy) -> Self {
        Self {
            client,
            policy,
            colored: true,
        }
    }

    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Queries each name in input order, one request at a time. Matches
    /// are appended before the next name fires, so output order mirrors
    /// input order. A rejected name contributes zero records and one
    /// warning; a transport failure aborts immediately, leaving later
    /// names unqueried and nothing written.
    pub async fn run(&self, names: &[String]) -> Result<SearchOutcome> {
        let mut records = Vec::new();
        let mut stats = SearchStats::new();

        let bar = create_progress_bar(names.len() as u64, self.colored);

        for name in names {
            bar.set_message(name.clone());
            stats.names_queried += 1;

            let step = match self.client.search_company(name).await {
                Ok(response) => {
                    collect_records(name, response, self.policy, &mut records, &mut stats)
                }
                Err(err) => absorb_failure(err, &mut stats),
            };

            if let Err(fatal) = step {
                bar.abandon();
                return Err(fatal);
            }

            bar.inc(1);
        }

        bar.finish_with_message("Search complete");

        Ok(SearchOutcome { records, stats })
    }
}

/// Folds one successful response into the accumulated records, applying
/// the malformed-match policy hit by hit.
fn collect_records(
    queried_name: &str,
    response: SearchResponse,
    policy: MalformedPolicy,
    records: &mut Vec<CompanyRecord>,
    stats: &mut SearchStats,
) -> Result<()> {
    for hit in response.results {
        match hit.into_record(queried_name) {
            Ok(record) => {
                stats.records_matched += 1;
                records.push(record);
            }
            Err(err) => match policy {
                MalformedPolicy::Abort => return Err(err),
                MalformedPolicy::Skip => {
                    warn!("Skipping malformed match: {}", err);
                    stats.hits_skipped += 1;
                }
            },
        }
    }
    Ok(())
}

/// A rejected name is absorbed with one notice; anything else is fatal
/// and propagates to the caller.
fn absorb_failure(err: SearchError, stats: &mut SearchStats) -> Result<()> {
    match err {
        SearchError::Rejected { name, status } => {
            warn!("Failed to search for company: {}. Status code: {}", name, status);
            stats.names_rejected += 1;
            Ok(())
        }
        fatal => Err(fatal),
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    if colored {
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .expect("Failed to create progress bar template")
                .progress_chars("█▓▒░"),
        );
    } else {
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}")
                .expect("Failed to create progress bar template")
                .progress_chars("=>-"),
        );
    }
    bar
}
