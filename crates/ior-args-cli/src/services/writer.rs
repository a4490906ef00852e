use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write rendered output to `path`, or to stdout when no path is given.
///
/// Files are written whole; missing parent directories are created.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    let Some(path) = path else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_dirs() -> Result<()> {
        let temp = TempDir::new()?;
        let path = temp.path().join("docs").join("ior-args.md");

        write_output(Some(&path), "| Dataset |\n")?;
        assert_eq!(fs::read_to_string(&path)?, "| Dataset |\n");
        Ok(())
    }
}
