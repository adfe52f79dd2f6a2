//! Entry resolution.

use crate::data::Container;
use crate::error::{Result, ToolboxError};
use crate::select::Selector;

/// Prefix of top-level entries holding metadata or schema, not measurements.
pub const RESERVED_ENTRY_PREFIX: &str = "NeXus_";

/// Check whether an entry name is reserved for non-measurement content.
pub fn is_reserved_entry(name: &str) -> bool {
    name.starts_with(RESERVED_ENTRY_PREFIX)
}

/// Pick the top-level entry to read.
///
/// An explicit `requested` name must be a top-level entry. Without one, a single-entry
/// file yields its only entry, otherwise the reserved entries are dropped
/// and the operator is asked only if several measurement entries remain.
pub fn resolve_entry<C, S>(container: &C, requested: &str, selector: &mut S) -> Result<String>
where
    C: Container + ?Sized,
    S: Selector + ?Sized,
{
    let keys = container.children("")?;
    if !requested.is_empty() {
        return if keys.iter().any(|k| k == requested) {
            Ok(requested.to_string())
        } else {
            Err(ToolboxError::not_found(requested))
        };
    }

    if keys.len() == 1 {
        tracing::debug!("Single entry in file: {}", keys[0]);
        return Ok(keys[0].clone());
    }

    let mut candidates: Vec<String> = keys.into_iter().filter(|k| !is_reserved_entry(k)).collect();
    match candidates.len() {
        0 => Err(ToolboxError::Resolution(
            "the file contains no measurement entry".to_string(),
        )),
        1 => Ok(candidates.remove(0)),
        _ => {
            tracing::debug!("Asking for one of {} entries", candidates.len());
            selector.select(&candidates)
        }
    }
}
