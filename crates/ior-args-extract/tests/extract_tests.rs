use anyhow::Result;
use ior_args_core::Config;
use ior_args_extract::{Extractor, extract};
use ior_args_testing::fixtures::{self, REFERENCE_ROWS, REFERENCE_SWEEP, SWEEP_NODES};
use ior_args_types::Step;
use tempfile::TempDir;

const GLIOR: &str = "/global/src/glior-3.3/install.cgpu/bin/ior";

fn results_with_sweep() -> Result<TempDir> {
    let dir = TempDir::new()?;
    fixtures::write_reference_sweep(dir.path())?;
    Ok(dir)
}

fn write(dir: &TempDir, relative: &str, command_line: &str) -> Result<()> {
    fixtures::write_output(&dir.path().join(relative), &fixtures::ior_output(command_line))
}

#[test]
fn test_reference_sweep_rows() -> Result<()> {
    let dir = results_with_sweep()?;
    let config = Config::builtin();

    let extraction = extract(dir.path(), &config)?;
    let rows: Vec<(String, String, String, String)> = extraction
        .entries
        .iter()
        .map(|e| {
            (
                e.dataset_name.clone(),
                e.ior_version.clone(),
                e.step.to_string(),
                e.argument_string(),
            )
        })
        .collect();
    let expected: Vec<(String, String, String, String)> = REFERENCE_ROWS
        .iter()
        .map(|(d, v, s, a)| (d.to_string(), v.to_string(), s.to_string(), a.to_string()))
        .collect();

    assert_eq!(rows, expected);
    Ok(())
}

#[test]
fn test_reference_sweep_stats() -> Result<()> {
    let dir = results_with_sweep()?;
    let config = Config::builtin();

    let stats = extract(dir.path(), &config)?.stats;
    let runs = REFERENCE_SWEEP.len() * SWEEP_NODES.len();
    assert_eq!(stats.files_scanned, runs);
    assert_eq!(stats.files_failed, 0);
    assert_eq!(stats.records_found, runs);
    assert_eq!(stats.records_skipped, 0);
    assert_eq!(stats.duplicates, runs - REFERENCE_SWEEP.len());
    assert_eq!(stats.conflicts, 0);
    Ok(())
}

#[test]
fn test_extraction_is_deterministic() -> Result<()> {
    let dir = results_with_sweep()?;
    let config = Config::builtin();

    let first = extract(dir.path(), &config)?.entries;
    let second = extract(dir.path(), &config)?.entries;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_each_dataset_step_appears_once() -> Result<()> {
    let dir = results_with_sweep()?;
    let config = Config::builtin();

    let entries = extract(dir.path(), &config)?.entries;
    let mut keys: Vec<(&str, Step)> = entries.iter().map(|e| e.key()).collect();
    let before = keys.len();
    keys.dedup();
    assert_eq!(keys.len(), before);
    Ok(())
}

#[test]
fn test_corrupt_gzip_is_counted_and_skipped() -> Result<()> {
    let dir = TempDir::new()?;
    write(&dir, "randio/ior-n1p8.out", &format!("{GLIOR} -w -z"))?;
    std::fs::write(dir.path().join("randio/ior-n2p8.out.gz"), b"not gzip")?;

    let extraction = extract(dir.path(), &Config::builtin())?;
    assert_eq!(extraction.stats.files_scanned, 2);
    assert_eq!(extraction.stats.files_failed, 1);
    assert_eq!(extraction.entries.len(), 1);
    Ok(())
}

#[test]
fn test_record_without_step_flag_is_skipped() -> Result<()> {
    let dir = TempDir::new()?;
    write(&dir, "randio/ior-n1p8.out", &format!("{GLIOR} -w -z"))?;
    write(&dir, "randio/ior-n2p8.out", &format!("{GLIOR} -C -z"))?;

    let extraction = extract(dir.path(), &Config::builtin())?;
    assert_eq!(extraction.stats.records_skipped, 1);
    assert_eq!(extraction.entries.len(), 1);
    assert_eq!(extraction.entries[0].step, Step::Write);
    Ok(())
}

#[test]
fn test_repeated_unclassifiable_records_all_count_as_skipped() -> Result<()> {
    let dir = TempDir::new()?;
    write(&dir, "randio/ior-n1p8.out", &format!("{GLIOR} -C -z"))?;
    write(&dir, "randio/ior-n2p8.out", &format!("{GLIOR} -C -z"))?;
    write(&dir, "randio/ior-n4p8.out", &format!("{GLIOR} -w -z"))?;

    let stats = extract(dir.path(), &Config::builtin())?.stats;
    assert_eq!(stats.records_found, 3);
    assert_eq!(stats.records_skipped, 2);
    assert_eq!(stats.duplicates, 0);
    Ok(())
}

#[test]
fn test_conflicting_configurations_keep_first_in_order() -> Result<()> {
    let dir = TempDir::new()?;
    write(&dir, "randio/ior-n1p8.out", &format!("{GLIOR} -w -b 1g -e"))?;
    write(&dir, "randio/ior-n2p8.out", &format!("{GLIOR} -w -b 1g -a"))?;

    let extraction = extract(dir.path(), &Config::builtin())?;
    assert_eq!(extraction.stats.conflicts, 1);
    assert_eq!(extraction.entries.len(), 1);
    assert_eq!(extraction.entries[0].arguments, vec!["-a", "-w"]);
    Ok(())
}

#[test]
fn test_pre_read_needs_a_plain_read() -> Result<()> {
    let dir = TempDir::new()?;
    write(&dir, "aged/ior-n1p8.out", &format!("{GLIOR} -r -k"))?;
    write(&dir, "aged/ior-n2p8.out", &format!("{GLIOR} -r"))?;
    write(&dir, "fresh/ior-n1p8.out", &format!("{GLIOR} -r -k"))?;

    let entries = extract(dir.path(), &Config::builtin())?.entries;
    let steps: Vec<(&str, Step)> = entries
        .iter()
        .map(|e| (e.dataset_key.as_str(), e.step))
        .collect();
    assert_eq!(
        steps,
        vec![("aged", Step::PreRead), ("aged", Step::Read), ("fresh", Step::Read)]
    );
    Ok(())
}

#[test]
fn test_unknown_datasets_use_directory_name() -> Result<()> {
    let dir = TempDir::new()?;
    write(&dir, "mdtest-easy/ior-n1p8.out", "/usr/bin/ior -w")?;

    let entries = extract(dir.path(), &Config::builtin())?.entries;
    assert_eq!(entries[0].dataset_name, "mdtest-easy");
    assert_eq!(entries[0].ior_version, "/usr/bin/ior");
    Ok(())
}

#[test]
fn test_other_files_are_ignored() -> Result<()> {
    let dir = TempDir::new()?;
    write(&dir, "randio/ior-n1p8.out", &format!("{GLIOR} -w"))?;
    write(&dir, "randio/ior-n1p8.log", &format!("{GLIOR} -r"))?;

    let extraction = Extractor::new(&Config::builtin()).extract(dir.path())?;
    assert_eq!(extraction.stats.files_scanned, 1);
    assert_eq!(extraction.entries.len(), 1);
    Ok(())
}

#[test]
fn test_missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = extract(&dir.path().join("nope"), &Config::builtin()).unwrap_err();
    assert!(err.to_string().starts_with("Results directory not found"));
}
