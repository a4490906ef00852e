use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

// Sweep parameters (block size, transfer size, segments, tasks) vary between
// runs of one configuration and are dropped.
static SWEEP_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" -[btsp]\s+\S+").unwrap());
static STATUS_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" -O stoneWallingStatusFile=\S+").unwrap());
static OPTION_FLAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" -O ").unwrap());
static LAYOUT_FLAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" -l ").unwrap());
static DEADLINE_FLAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" -D ").unwrap());
static TEST_FILE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" -o \S+").unwrap());
static OUTPUT_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/ior-n\S+.out ").unwrap());
static INSTALLED_EXE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+/([^/]+)/([^/]+)/bin/(ior|IOR)").unwrap());

/// A command line split into the IOR build that ran and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCommand {
    pub ior_version: String,
    /// Tokens in sorted order
    pub arguments: Vec<String>,
}

/// Normalize the text of a `Command line` record.
///
/// Returns the executable and the argument string with run-specific values
/// removed and `-O key=value` options spelled `--key=value`.
pub fn normalize_command_line(record: &str) -> Result<(String, String)> {
    let (_, line) = record
        .split_once(':')
        .ok_or_else(|| Error::MalformedRecord("missing ':' separator".to_string()))?;

    // Patterns anchor on a leading space, so keep the one after the colon
    let line = format!("{} ", line.trim_end());
    let line = SWEEP_PARAM.replace_all(&line, "");
    let line = STATUS_FILE.replace_all(&line, "");
    let line = OPTION_FLAG.replace_all(&line, " --");
    let line = LAYOUT_FLAG.replace_all(&line, " -l=");
    let line = DEADLINE_FLAG.replace_all(&line, " -D=");
    let line = TEST_FILE.replace_all(&line, "");
    let line = OUTPUT_FRAGMENT.replace_all(&line, " ");

    let mut parts = line.trim().splitn(2, char::is_whitespace);
    let exe = parts
        .next()
        .filter(|exe| !exe.is_empty())
        .ok_or_else(|| Error::MalformedRecord("no executable".to_string()))?;
    let args = parts.next().map(str::trim).unwrap_or_default();
    if args.is_empty() {
        return Err(Error::MalformedRecord(format!("no arguments after {}", exe)));
    }

    Ok((ior_version_from_exe(exe), args.to_string()))
}

/// Collapse `<prefix>/<source>/<install>/bin/ior` to `<source>`.
/// Paths of any other shape are returned unchanged.
pub fn ior_version_from_exe(exe: &str) -> String {
    INSTALLED_EXE.replace_all(exe, "$1").trim().to_string()
}

/// Decode a `Command line` record into version and sorted argument tokens
pub fn decode_command_line(record: &str) -> Result<DecodedCommand> {
    let (ior_version, args) = normalize_command_line(record)?;
    let mut arguments: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    arguments.sort();

    Ok(DecodedCommand {
        ior_version,
        arguments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAIVE_WRITE: &str = "Command line        : /global/u2/g/glock/src/git/n10/vast-eval/results/ior-scaling-rdma.vast.v4/../../src/ior+incompress/install.cgpu/bin/ior -v -v -F -C -e -g -k -w -D 45 -O stoneWallingWearOut=1 -O stoneWallingStatusFile=/vast/glock/ior.stonewall -b 64g -t 4m -o /vast/glock/ior-n16p8.dat";

    #[test]
    fn test_decodes_bandwidth_write() {
        let decoded = decode_command_line(NAIVE_WRITE).unwrap();
        assert_eq!(decoded.ior_version, "ior+incompress");
        assert_eq!(
            decoded.arguments.join(" "),
            "--stoneWallingWearOut=1 -C -D=45 -F -e -g -k -v -v -w"
        );
    }

    #[test]
    fn test_normalize_keeps_argument_order() {
        let (exe, args) = normalize_command_line(
            "Command line : /opt/src/glior-3.3/install/bin/ior -z -l random -vv -r -s 1000 -t 4k",
        )
        .unwrap();
        assert_eq!(exe, "glior-3.3");
        assert_eq!(args, "-z -l=random -vv -r");
    }

    #[test]
    fn test_odirect_option_becomes_long_flag() {
        let decoded = decode_command_line(
            "Command line : /opt/src/glior-3.3/install/bin/IOR -O posix.odirect=1 -w -p 8",
        )
        .unwrap();
        assert_eq!(decoded.arguments, vec!["--posix.odirect=1", "-w"]);
    }

    #[test]
    fn test_output_fragment_is_removed() {
        let (_, args) = normalize_command_line(
            "Command line : ior -w /results/randio/ior-n4p16t4k.out -C",
        )
        .unwrap();
        assert_eq!(args, "-w /results/randio -C");
    }

    #[test]
    fn test_uninstalled_exe_is_kept_verbatim() {
        assert_eq!(ior_version_from_exe("/usr/bin/ior"), "/usr/bin/ior");
        assert_eq!(ior_version_from_exe("ior"), "ior");
        assert_eq!(
            ior_version_from_exe("/home/x/src/ior-4.0/build/bin/ior"),
            "ior-4.0"
        );
    }

    #[test]
    fn test_malformed_records() {
        assert!(matches!(
            decode_command_line("Command line"),
            Err(Error::MalformedRecord(_))
        ));
        assert!(matches!(
            decode_command_line("Command line        :   "),
            Err(Error::MalformedRecord(_))
        ));
        assert!(matches!(
            decode_command_line("Command line : /src/glior-3.3/install/bin/ior -t 4k -b 1g"),
            Err(Error::MalformedRecord(_))
        ));
    }
}
