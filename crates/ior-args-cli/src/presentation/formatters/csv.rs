use crate::presentation::table::dataset_groups;
use anyhow::Result;
use ior_args_types::DatasetEntry;

/// CSV with the same columns as the markdown table
pub fn render(entries: &[DatasetEntry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Dataset", "IOR version", "Step", "Arguments"])?;

    for entry in dataset_groups(entries).into_iter().flatten() {
        writer.write_record([
            entry.dataset_name.as_str(),
            entry.ior_version.as_str(),
            entry.step.as_str(),
            entry.argument_string().as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("{}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}
