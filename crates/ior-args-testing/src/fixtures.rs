//! Fixtures for synthetic IOR output files.
//!
//! Provides utilities to:
//! - Render an IOR stdout log around a given command line
//! - Write plain and gzip-compressed output files
//! - Lay out the reference parameter sweep (five datasets, eleven configurations)

use anyhow::Result;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Node counts each sweep configuration is "run" at.
///
/// Every configuration appears once per node count, so extraction must fold
/// the repeats into a single row.
pub const SWEEP_NODES: &[u32] = &[1, 16];

/// One configuration of the reference sweep.
///
/// `args` may contain `{dataset}` and `{n}` placeholders.
#[derive(Debug, Clone, Copy)]
pub struct SweepRun {
    pub dataset: &'static str,
    pub ior_src: &'static str,
    pub args: &'static str,
}

pub const REFERENCE_SWEEP: &[SweepRun] = &[
    SweepRun {
        dataset: "ior-scaling-rdma.vast.v3-naive",
        ior_src: "ior+incompress",
        args: "-vv -F -C -e -g -k -w -D 45 -O stoneWallingWearOut=1 -O stoneWallingStatusFile=/vast/glock/{dataset}/ior-n{n}p8.stonewall -b 1t -t 4m -o /vast/glock/{dataset}/ior-n{n}p8.dat",
    },
    SweepRun {
        dataset: "ior-scaling-rdma.vast.v3-naive",
        ior_src: "ior+incompress",
        args: "-vv -F -C -e -g -r -D 45 -O stoneWallingWearOut=1 -O stoneWallingStatusFile=/vast/glock/{dataset}/ior-n{n}p8.stonewall -b 1t -t 4m -o /vast/glock/{dataset}/ior-n{n}p8.dat",
    },
    SweepRun {
        dataset: "ior-scaling-rdma.vast.v4",
        ior_src: "ior+incompress",
        args: "-vv -F -C -e -g -k -w -l random -D 45 -O stoneWallingWearOut=1 -O stoneWallingStatusFile=/vast/glock/{dataset}/ior-n{n}p8.stonewall -b 1t -t 4m -o /vast/glock/{dataset}/ior-n{n}p8.dat",
    },
    SweepRun {
        dataset: "ior-scaling-rdma.vast.v4",
        ior_src: "ior+incompress",
        args: "-vv -F -C -e -g -k -r -l random -D 45 -O stoneWallingWearOut=1 -O stoneWallingStatusFile=/vast/glock/{dataset}/ior-n{n}p8.stonewall -b 1t -t 4m -o /vast/glock/{dataset}/ior-n{n}p8.dat",
    },
    SweepRun {
        dataset: "ior-scaling-rdma.vast.v4",
        ior_src: "ior+incompress",
        args: "-vv -F -C -e -g -r -l random -D 45 -O stoneWallingWearOut=1 -O stoneWallingStatusFile=/vast/glock/{dataset}/ior-n{n}p8.stonewall -b 1t -t 4m -o /vast/glock/{dataset}/ior-n{n}p8.dat",
    },
    SweepRun {
        dataset: "randio",
        ior_src: "glior-3.3",
        args: "-vv -F -C -e -g -w -z -D 45 -b 4g -t 4k -o /vast/glock/{dataset}/ior-n{n}p8.dat",
    },
    SweepRun {
        dataset: "randio",
        ior_src: "glior-3.3",
        args: "-vv -F -C -e -g -k -r -z -D 45 -b 4g -t 4k -o /vast/glock/{dataset}/ior-n{n}p8.dat",
    },
    SweepRun {
        dataset: "randio.odirect",
        ior_src: "glior-3.3",
        args: "--posix.odirect -vv -F -C -e -g -w -z -D 45 -b 4g -t 4k -o /vast/glock/{dataset}/ior-n{n}p8.dat",
    },
    SweepRun {
        dataset: "randio.odirect",
        ior_src: "glior-3.3",
        args: "--posix.odirect -vv -F -C -e -g -k -r -z -D 45 -b 4g -t 4k -o /vast/glock/{dataset}/ior-n{n}p8.dat",
    },
    SweepRun {
        dataset: "randio.vs-size",
        ior_src: "glior-3.3",
        args: "-vv -F -C -g -r -z -D 45 -b 4g -t {n}k -o /vast/glock/{dataset}/ior-n{n}p8.dat",
    },
    SweepRun {
        dataset: "randio.vs-size",
        ior_src: "ior+incompress",
        args: "-vv -F -C -k -w -l random -D 300 -b 4g -t {n}k -o /vast/glock/{dataset}/ior-n{n}p8.dat",
    },
];

impl SweepRun {
    /// Full command line as IOR echoes it, for a run on `nodes` nodes
    pub fn command_line(&self, nodes: u32) -> String {
        let exe = format!(
            "/global/u2/g/glock/src/git/n10/vast-eval/results/{}/../../src/{}/install.cgpu/bin/ior",
            self.dataset, self.ior_src
        );
        let args = self
            .args
            .replace("{dataset}", self.dataset)
            .replace("{n}", &nodes.to_string());
        format!("{} {}", exe, args)
    }
}

/// Render a plausible IOR stdout log that records `command_line`
pub fn ior_output(command_line: &str) -> String {
    format!(
        "\
IOR-3.3.0+dev: MPI Coordinated Test of Parallel I/O
Began               : Thu Mar  5 10:07:01 2020
Command line        : {command_line}
Machine             : Linux nid00042
TestID              : 0
StartTime           : Thu Mar  5 10:07:01 2020
Path                : /vast/glock
FS                  : 1.2 PiB   Used FS: 3.1%   Inodes: 0.0 Mi   Used Inodes: -nan%

Options:
api                 : POSIX
apiVersion          :
test filename       : /vast/glock/ior.dat
access              : file-per-process
type                : independent

Results:

access    bw(MiB/s)  IOPS       Latency(s)  block(KiB) xfer(KiB)  open(s)    wr/rd(s)   close(s)   total(s)   iter
------    ---------  ----       ----------  ---------- ---------  --------   --------   --------   --------   ----
write     9383.12    2345.78    0.003409    67108864   4096       0.011802   45.01      0.283916   45.30      0
Finished            : Thu Mar  5 10:09:12 2020
"
    )
}

/// Write a plain output file, creating parent directories
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Write a gzip-compressed output file, creating parent directories
pub fn write_gz_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut encoder = GzEncoder::new(fs::File::create(path)?, Compression::default());
    encoder.write_all(content.as_bytes())?;
    encoder.finish()?;
    Ok(())
}

/// Lay out the reference sweep under `root`.
///
/// Each configuration is written once per entry of [`SWEEP_NODES`]; the
/// second node count goes to a gzip file so both readers get exercised.
pub fn write_reference_sweep(root: &Path) -> Result<()> {
    for (index, run) in REFERENCE_SWEEP.iter().enumerate() {
        for (round, nodes) in SWEEP_NODES.iter().enumerate() {
            let dir = root.join(run.dataset);
            let content = ior_output(&run.command_line(*nodes));
            let name = format!("ior-n{}p8.{}.out", nodes, index);
            if round == 0 {
                write_output(&dir.join(name), &content)?;
            } else {
                write_gz_output(&dir.join(format!("{}.gz", name)), &content)?;
            }
        }
    }
    Ok(())
}

/// Rows the reference sweep must produce, as (dataset, version, step, arguments)
pub const REFERENCE_ROWS: &[(&str, &str, &str, &str)] = &[
    (
        "Bandwidth, Naive",
        "ior-incompress",
        "Write",
        "--stoneWallingWearOut=1 -C -D=45 -F -e -g -k -vv -w",
    ),
    (
        "Bandwidth, Naive",
        "ior-incompress",
        "Read",
        "--stoneWallingWearOut=1 -C -D=45 -F -e -g -r -vv",
    ),
    (
        "Bandwidth, Aged",
        "ior-incompress",
        "Write",
        "--stoneWallingWearOut=1 -C -D=45 -F -e -g -k -l=random -vv -w",
    ),
    (
        "Bandwidth, Aged",
        "ior-incompress",
        "Pre-Read",
        "--stoneWallingWearOut=1 -C -D=45 -F -e -g -k -l=random -r -vv",
    ),
    (
        "Bandwidth, Aged",
        "ior-incompress",
        "Read",
        "--stoneWallingWearOut=1 -C -D=45 -F -e -g -l=random -r -vv",
    ),
    (
        "IOPS, Buffered I/O",
        "glior-3.3",
        "Write",
        "-C -D=45 -F -e -g -vv -w -z",
    ),
    (
        "IOPS, Buffered I/O",
        "glior-3.3",
        "Read",
        "-C -D=45 -F -e -g -k -r -vv -z",
    ),
    (
        "IOPS, Direct I/O",
        "glior-3.3",
        "Write",
        "--posix.odirect -C -D=45 -F -e -g -vv -w -z",
    ),
    (
        "IOPS, Direct I/O",
        "glior-3.3",
        "Read",
        "--posix.odirect -C -D=45 -F -e -g -k -r -vv -z",
    ),
    (
        "IOPS vs. Size",
        "ior-incompress",
        "Write",
        "-C -D=300 -F -k -l=random -vv -w",
    ),
    (
        "IOPS vs. Size",
        "glior-3.3",
        "Read",
        "-C -D=45 -F -g -r -vv -z",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_fills_placeholders() {
        let line = REFERENCE_SWEEP[9].command_line(16);
        assert!(line.contains("/src/glior-3.3/install.cgpu/bin/ior "));
        assert!(line.contains("-t 16k"));
        assert!(line.contains("/vast/glock/randio.vs-size/ior-n16p8.dat"));
        assert!(!line.contains('{'));
    }

    #[test]
    fn test_output_embeds_command_line() {
        let output = ior_output("ior -w");
        assert!(output.contains("\nCommand line        : ior -w\n"));
    }
}
