//! Single-slot writes and their undo records.

use std::mem;

use jsonref_path::Path;
use serde_json::Value;
use tracing::trace;

use crate::error::{MutateError, NavError};
use crate::navigate::{self, Created};
use crate::node::{self, Node, NodeKind};
use crate::options::{DocumentOptions, MAX_NESTING};

/// What a successful write displaced.
#[derive(Debug)]
pub(crate) enum Displaced {
    /// The slot existed and held this node.
    Slot(Node),
    /// The write created slots, starting here.
    Created(Created),
}

impl Displaced {
    /// Turn into an undo record for the write at `path`.
    pub(crate) fn into_undo(self, path: Path) -> Undo {
        match self {
            Displaced::Slot(previous) => Undo::Restore { path, previous },
            Displaced::Created(Created::Key { parent, key }) => Undo::RemoveKey { parent, key },
            Displaced::Created(Created::Index { parent, prior_len }) => Undo::Truncate {
                parent,
                len: prior_len,
            },
        }
    }
}

/// Reverses one write.
#[derive(Debug)]
pub(crate) enum Undo {
    /// Put `previous` back at `path` (the root for an empty path).
    Restore { path: Path, previous: Node },
    /// Remove `key`, which the write appended to the object at `parent`.
    RemoveKey { parent: Path, key: String },
    /// Shrink the array at `parent` back to `len` elements.
    Truncate { parent: Path, len: usize },
}

/// Write `value` at `path`, creating missing intermediates.
///
/// An empty path replaces the root. The slot sits `path.len()` containers
/// deep, and with the nesting of `value` the total may not exceed
/// [`MAX_NESTING`]. On error nothing is modified.
pub(crate) fn set(
    root: &mut Node,
    path: &Path,
    value: Value,
    options: &DocumentOptions,
) -> Result<Displaced, MutateError> {
    trace!(target: "jsonref::document", path = %path, depth = path.len(), "set");

    let depth = path.len().saturating_add(node::nesting(&value));
    if depth > MAX_NESTING {
        return Err(MutateError::TooDeep {
            depth,
            max: MAX_NESTING,
        });
    }

    if path.is_empty() {
        return Ok(Displaced::Slot(mem::replace(root, Node::from_value(value))));
    }

    let resolved = navigate::resolve_or_create(root, path, options)?;
    let previous = mem::replace(resolved.node, Node::from_value(value));
    Ok(match resolved.created {
        Some(created) => Displaced::Created(created),
        None => Displaced::Slot(previous),
    })
}

/// Apply one undo record.
///
/// Records must be applied in reverse order of the writes that produced them.
pub(crate) fn undo(root: &mut Node, record: Undo) -> Result<(), NavError> {
    match record {
        Undo::Restore { path, previous } => {
            *navigate::resolve_mut(root, &path)? = previous;
        }
        Undo::RemoveKey { parent, key } => {
            if let NodeKind::Object(members) = navigate::resolve_mut(root, &parent)?.kind_mut() {
                members.shift_remove(key.as_str());
            }
        }
        Undo::Truncate { parent, len } => {
            if let NodeKind::Array(items) = navigate::resolve_mut(root, &parent)?.kind_mut() {
                items.truncate(len);
            }
        }
    }
    Ok(())
}
