use crate::presentation::table::dataset_groups;
use anyhow::Result;
use ior_args_types::DatasetEntry;

/// Pretty JSON array of entries in table order
pub fn render(entries: &[DatasetEntry]) -> Result<String> {
    let ordered: Vec<&DatasetEntry> = dataset_groups(entries).into_iter().flatten().collect();
    let mut json = serde_json::to_string_pretty(&ordered)?;
    json.push('\n');
    Ok(json)
}
