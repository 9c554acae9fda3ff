//! Expiry evaluation for on-disk session representations.
//!
//! The TTL is encoded in the representation's file name rather than its
//! contents, so freshness is derived entirely from the file's last-modified
//! timestamp at the moment of evaluation. Every session is binary - live or
//! expired - recomputed on each read; nothing is cached between checks.

use std::time::{Duration, SystemTime};

use super::{FILE_EXTENSION, RECORD_SEPARATOR};

/// Parse the TTL out of a representation file name of the form
/// `<id>__<ttl>.json`, with the TTL in milliseconds. Session IDs may
/// themselves contain the separator, so the TTL is the segment after the
/// *last* `__`. Returns `None` when the name doesn't follow the scheme.
pub(super) fn parse_ttl(file_name: &str) -> Option<Duration> {
    let stem = file_name.strip_suffix(FILE_EXTENSION)?;
    let (_, encoded) = stem.rsplit_once(RECORD_SEPARATOR)?;
    encoded.parse::<u64>().ok().map(Duration::from_millis)
}

/// Decide whether a representation has outlived its TTL.
///
/// This fails safe: a missing timestamp means the file vanished or its
/// metadata became unreadable between lookup and evaluation, and an absent
/// TTL means the file name didn't parse - in both cases the session is
/// reported expired so indeterminate state is never served as valid. A
/// timestamp in the future (clock adjustment) counts as zero elapsed time.
pub(super) fn has_expired(
    ttl: Option<Duration>,
    modified: Option<SystemTime>,
    now: SystemTime,
) -> bool {
    let (Some(ttl), Some(modified)) = (ttl, modified) else {
        return true;
    };
    match now.duration_since(modified) {
        Ok(elapsed) => elapsed > ttl,
        Err(_) => false,
    }
}
