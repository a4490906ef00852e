use ior_args_types::{Invocation, Step};
use std::collections::BTreeSet;

pub const WRITE_FLAG: &str = "-w";
pub const READ_FLAG: &str = "-r";
pub const KEEP_FILE_FLAG: &str = "-k";

/// Step implied by an invocation's own flags, ignoring the rest of its dataset.
///
/// A run that both writes and reads is counted as a Write. Pre-Read can only
/// be told apart with the whole dataset in view, see [`assign_steps`].
pub fn base_step(invocation: &Invocation) -> Option<Step> {
    if invocation.has_flag(WRITE_FLAG) {
        Some(Step::Write)
    } else if invocation.has_flag(READ_FLAG) {
        Some(Step::Read)
    } else {
        None
    }
}

/// Assign a step to every invocation.
///
/// A Read that keeps its file (`-k`) becomes a Pre-Read when the same dataset
/// also has a Read that does not, i.e. a later pass that consumes the file.
/// Invocations with neither `-w` nor `-r` come back as `None`.
pub fn assign_steps(invocations: &[Invocation]) -> Vec<Option<Step>> {
    let consuming_reads: BTreeSet<&str> = invocations
        .iter()
        .filter(|inv| base_step(inv) == Some(Step::Read) && !inv.has_flag(KEEP_FILE_FLAG))
        .map(|inv| inv.dataset_key.as_str())
        .collect();

    invocations
        .iter()
        .map(|inv| match base_step(inv) {
            Some(Step::Read)
                if inv.has_flag(KEEP_FILE_FLAG)
                    && consuming_reads.contains(inv.dataset_key.as_str()) =>
            {
                Some(Step::PreRead)
            }
            other => other,
        })
        .collect()
}
