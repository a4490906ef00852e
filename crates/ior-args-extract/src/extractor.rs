use crate::classify::assign_steps;
use crate::decode::decode_command_line;
use crate::discovery::{OutputDiscovery, OutputFile};
use crate::io::extract_command_records;
use crate::Result;
use ior_args_core::Config;
use ior_args_types::{DatasetEntry, Invocation, Step};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Counters describing one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub files_scanned: usize,
    pub files_failed: usize,
    pub records_found: usize,
    /// Records dropped because of a decode failure or a missing step flag
    pub records_skipped: usize,
    /// Repeats of a configuration already counted, excluding skipped records
    pub duplicates: usize,
    /// Distinct configurations dropped because their (dataset, step) was taken
    pub conflicts: usize,
}

/// Result of an extraction run
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// One entry per (dataset, step), ordered by dataset key then step
    pub entries: Vec<DatasetEntry>,
    pub stats: ExtractStats,
}

/// Walks a results tree and turns recorded IOR command lines into table rows.
///
/// Bad files and bad records are logged and skipped; only a missing results
/// root stops the run.
pub struct Extractor<'a> {
    config: &'a Config,
}

impl<'a> Extractor<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn extract(&self, root: &Path) -> Result<Extraction> {
        let files = OutputDiscovery::new(self.config).scan(root)?;
        let mut stats = ExtractStats::default();
        let mut invocations = Vec::new();

        for file in &files {
            stats.files_scanned += 1;
            match self.extract_file(file, &mut stats) {
                Ok(found) => invocations.extend(found),
                Err(err) => {
                    stats.files_failed += 1;
                    warn!(
                        path = %file.path.display(),
                        error = %err,
                        "skipping unreadable output file"
                    );
                }
            }
        }

        let entries = self.build_entries(invocations, &mut stats);
        info!(
            files = stats.files_scanned,
            records = stats.records_found,
            skipped = stats.records_skipped,
            entries = entries.len(),
            "extraction finished"
        );

        Ok(Extraction { entries, stats })
    }

    /// Decode every `Command line` record in one output file
    pub fn extract_file(
        &self,
        file: &OutputFile,
        stats: &mut ExtractStats,
    ) -> Result<Vec<Invocation>> {
        let records = extract_command_records(&file.path)?;
        debug!(path = %file.path.display(), records = records.len(), "read output file");

        if records.is_empty() {
            warn!(path = %file.path.display(), "no command line recorded");
        }

        let mut invocations = Vec::with_capacity(records.len());
        for record in records {
            stats.records_found += 1;
            match decode_command_line(&record.text) {
                Ok(decoded) => invocations.push(Invocation {
                    dataset_key: file.dataset_key.clone(),
                    ior_version: decoded.ior_version,
                    arguments: decoded.arguments,
                    source: file.path.clone(),
                    line_number: record.line_number,
                }),
                Err(err) => {
                    stats.records_skipped += 1;
                    warn!(
                        path = %file.path.display(),
                        line = record.line_number,
                        error = %err,
                        "skipping command line"
                    );
                }
            }
        }

        Ok(invocations)
    }

    /// Collapse invocations into one entry per (dataset, step).
    ///
    /// Distinct configurations are visited in (dataset, version, arguments)
    /// order and the first one claims its slot, so the outcome does not
    /// depend on file order.
    pub fn build_entries(
        &self,
        invocations: Vec<Invocation>,
        stats: &mut ExtractStats,
    ) -> Vec<DatasetEntry> {
        // Each distinct configuration with the number of records that carried it
        let mut distinct: BTreeMap<(String, String, Vec<String>), (Invocation, usize)> =
            BTreeMap::new();
        for inv in invocations {
            let key = (
                inv.dataset_key.clone(),
                inv.ior_version.clone(),
                inv.arguments.clone(),
            );
            distinct.entry(key).or_insert((inv, 0)).1 += 1;
        }

        let (distinct, counts): (Vec<Invocation>, Vec<usize>) = distinct.into_values().unzip();
        let steps = assign_steps(&distinct);

        let mut slots: BTreeMap<(String, Step), Invocation> = BTreeMap::new();
        for ((inv, step), count) in distinct.into_iter().zip(steps).zip(counts) {
            let Some(step) = step else {
                stats.records_skipped += count;
                warn!(
                    path = %inv.source.display(),
                    line = inv.line_number,
                    records = count,
                    args = %inv.argument_string(),
                    "no -w or -r flag, cannot tell the step"
                );
                continue;
            };
            stats.duplicates += count - 1;

            let slot = (inv.dataset_key.clone(), step);
            if let Some(kept) = slots.get(&slot) {
                stats.conflicts += 1;
                warn!(
                    dataset = %inv.dataset_key,
                    step = %step,
                    kept = %kept.argument_string(),
                    dropped = %inv.argument_string(),
                    "more than one configuration for the same step"
                );
                continue;
            }
            slots.insert(slot, inv);
        }

        slots
            .into_iter()
            .map(|((dataset_key, step), inv)| {
                let name = self.config.dataset_display(&dataset_key).to_string();
                let version = self.config.version_display(&inv.ior_version).to_string();
                DatasetEntry::new(dataset_key, name, version, step, inv.arguments)
            })
            .collect()
    }
}

/// Extract table entries from a results tree
pub fn extract(root: &Path, config: &Config) -> Result<Extraction> {
    Extractor::new(config).extract(root)
}
