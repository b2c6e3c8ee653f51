use std::num::IntErrorKind;

use log::{debug, warn};

use crate::labels::error::LabelError;
use crate::labels::registry::{Conflict, Entry, Registry};

/// Longest label PostgreSQL stores untruncated (`NAMEDATALEN - 1`).
pub const MAX_LABEL_LEN: usize = 63;

/// Parse a whole label list into a registry.
///
/// Each line is either `label`, which takes the id after the previous
/// record's (starting at 0), or `label = id` with an explicit id. Blank lines
/// are skipped and leave the cursor alone.
pub fn parse(input: &str) -> Result<Registry, LabelError> {
    let (registry, _) = input.lines().enumerate().try_fold(
        (Registry::new(), 0u16),
        |(mut registry, next_id), (index, line)| -> Result<_, LabelError> {
            let line_no = index + 1;
            let Some(entry) = parse_line(line, line_no, next_id)? else {
                debug!("skipping blank line {line_no}");
                return Ok((registry, next_id));
            };

            if entry.label.len() > MAX_LABEL_LEN {
                warn!(
                    "line {line_no}: label {} is longer than {MAX_LABEL_LEN} bytes and will be truncated by PostgreSQL",
                    entry.label
                );
            }

            let id = entry.id;
            let label = entry.label.clone();
            for conflict in registry.insert(entry) {
                report_conflict(line_no, id, &label, conflict);
            }
            Ok((registry, u16::from(id) + 1))
        },
    )?;

    for (id, label) in registry.iter() {
        debug!("labels {id} -> {label}");
    }

    Ok(registry)
}

/// Parse one line. `Ok(None)` means there is nothing on it.
fn parse_line(line: &str, line_no: usize, next_id: u16) -> Result<Option<Entry>, LabelError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (label, id) = match line.split_once('=') {
        Some((label, text)) => {
            let label = label.trim();
            if label.is_empty() {
                return Err(LabelError::MalformedLine {
                    line_no,
                    line: line.to_string(),
                });
            }
            (label, parse_id(label, text.trim())?)
        }
        None => {
            let label = line.trim();
            let id = u8::try_from(next_id).map_err(|_| LabelError::IdOutOfRange {
                label: label.to_string(),
                value: next_id.to_string(),
            })?;
            (label, id)
        }
    };

    Ok(Some(Entry {
        id,
        label: label.to_string(),
    }))
}

/// Parse an explicit id. Anything numeric but outside `0..=255`, including
/// values too large for `i64`, is a range error rather than a parse error.
fn parse_id(label: &str, text: &str) -> Result<u8, LabelError> {
    let out_of_range = || LabelError::IdOutOfRange {
        label: label.to_string(),
        value: text.to_string(),
    };

    match text.parse::<i64>() {
        Ok(value) => u8::try_from(value).map_err(|_| out_of_range()),
        Err(source) => match source.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(out_of_range()),
            _ => Err(LabelError::InvalidId {
                label: label.to_string(),
                text: text.to_string(),
                source,
            }),
        },
    }
}

fn report_conflict(line_no: usize, id: u8, label: &str, conflict: Conflict) {
    match conflict {
        Conflict::IdReassigned { id, previous } => {
            warn!("line {line_no}: ID {id} reassigned from {previous} to {label}");
        }
        Conflict::LabelShared { label, other } => {
            warn!(
                "line {line_no}: label {label} is used by IDs {other} and {id}, the lower ID wins the reverse lookup"
            );
        }
    }
}
