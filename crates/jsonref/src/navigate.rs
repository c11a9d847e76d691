//! Path resolution over the document tree.
//!
//! Three walkers share the same per-segment rules:
//!
//! - [`resolve`] - read-only lookup.
//! - [`resolve_mut`] - mutable lookup of an existing node; clears the
//!   fragment of every container it passes through.
//! - [`resolve_or_create`] - mutable lookup that creates missing
//!   intermediate containers and the final slot. It validates the whole path
//!   with [`plan_create`] first, so a failing walk creates nothing.
//!
//! Each step is O(1): a hash lookup for objects, direct indexing for arrays.

use jsonref_path::{Path, PathSegment};

use crate::error::{MutateError, NavError};
use crate::node::{Node, NodeKind};
use crate::options::{ArrayPolicy, DocumentOptions};

/// Container type a segment can be applied to.
fn expected_container(segment: &PathSegment) -> &'static str {
    match segment {
        PathSegment::Key(_) => "object",
        PathSegment::Index(_) => "array",
    }
}

/// Lookup of an existing node.
pub fn resolve<'a>(root: &'a Node, path: &Path) -> Result<&'a Node, NavError> {
    let mut current = root;
    for (depth, segment) in path.iter().enumerate() {
        current = match (segment, current.kind()) {
            (PathSegment::Key(key), NodeKind::Object(members)) => {
                members.get(key.as_str()).ok_or_else(|| NavError::KeyNotFound {
                    at: path.prefix(depth),
                    key: key.clone(),
                })?
            }
            (PathSegment::Index(index), NodeKind::Array(items)) => {
                items.get(*index).ok_or_else(|| NavError::IndexOutOfBounds {
                    at: path.prefix(depth),
                    index: *index,
                    len: items.len(),
                })?
            }
            (segment, kind) => {
                return Err(NavError::TypeMismatch {
                    at: path.prefix(depth),
                    segment: segment.clone(),
                    expected: expected_container(segment),
                    found: kind.type_name(),
                })
            }
        };
    }
    Ok(current)
}

/// Mutable lookup of an existing node.
///
/// Every container on the way has its fragment cleared. The returned node
/// itself keeps its fragment: replace it wholesale, or go through
/// `Node::kind_mut` to edit it in place.
pub fn resolve_mut<'a>(root: &'a mut Node, path: &Path) -> Result<&'a mut Node, NavError> {
    // Fail before clearing any fragment.
    resolve(root, path)?;

    let mut current = root;
    for (depth, segment) in path.iter().enumerate() {
        let node = current;
        current = match (segment, node.kind_mut()) {
            (PathSegment::Key(key), NodeKind::Object(members)) => {
                match members.get_mut(key.as_str()) {
                    Some(child) => child,
                    None => {
                        return Err(NavError::KeyNotFound {
                            at: path.prefix(depth),
                            key: key.clone(),
                        })
                    }
                }
            }
            (PathSegment::Index(index), NodeKind::Array(items)) => {
                let len = items.len();
                match items.get_mut(*index) {
                    Some(child) => child,
                    None => {
                        return Err(NavError::IndexOutOfBounds {
                            at: path.prefix(depth),
                            index: *index,
                            len,
                        })
                    }
                }
            }
            (segment, kind) => {
                return Err(NavError::TypeMismatch {
                    at: path.prefix(depth),
                    segment: segment.clone(),
                    expected: expected_container(segment),
                    found: kind.type_name(),
                })
            }
        };
    }
    Ok(current)
}

/// The first slot a creating walk added to the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Created {
    /// `key` was inserted into the object at `parent`.
    Key { parent: Path, key: String },
    /// The array at `parent` was extended from `prior_len` elements.
    Index { parent: Path, prior_len: usize },
}

/// Result of [`resolve_or_create`].
#[derive(Debug)]
pub struct Resolved<'a> {
    /// The addressed slot. A freshly created final slot holds `null`.
    pub node: &'a mut Node,
    /// Where creation started, or `None` if the slot already existed.
    pub created: Option<Created>,
}

/// Whether an array of `len` elements may be written at `index`.
fn check_extend(
    path: &Path,
    depth: usize,
    index: usize,
    len: usize,
    options: &DocumentOptions,
) -> Result<(), MutateError> {
    if index <= len {
        return Ok(());
    }
    match options.array_policy {
        ArrayPolicy::Strict => Err(MutateError::IndexOutOfBounds {
            at: path.prefix(depth),
            index,
            len,
        }),
        // `usize::MAX` cannot be pushed even with an unlimited gap.
        ArrayPolicy::Pad if index - len > options.max_array_gap || index == usize::MAX => {
            Err(MutateError::GapTooLarge {
                at: path.prefix(depth),
                index,
                len,
                max: options.max_array_gap,
            })
        }
        ArrayPolicy::Pad => Ok(()),
    }
}

/// Check that [`resolve_or_create`] would succeed, without modifying anything.
///
/// Existing scalars (including `null`) are never replaced by containers:
/// walking through one is a `TypeMismatch`.
pub fn plan_create(
    root: &Node,
    path: &Path,
    options: &DocumentOptions,
) -> Result<(), MutateError> {
    let mut current = Some(root);
    for (depth, segment) in path.iter().enumerate() {
        let Some(node) = current else {
            // Inside a container this write will create: a fresh object takes
            // any key, a fresh array starts empty.
            if let PathSegment::Index(index) = segment {
                check_extend(path, depth, *index, 0, options)?;
            }
            continue;
        };
        current = match (segment, node.kind()) {
            (PathSegment::Key(key), NodeKind::Object(members)) => members.get(key.as_str()),
            (PathSegment::Index(index), NodeKind::Array(items)) => match items.get(*index) {
                Some(child) => Some(child),
                None => {
                    check_extend(path, depth, *index, items.len(), options)?;
                    None
                }
            },
            (segment, kind) => {
                return Err(MutateError::TypeMismatch {
                    at: path.prefix(depth),
                    segment: segment.clone(),
                    expected: expected_container(segment),
                    found: kind.type_name(),
                })
            }
        };
    }
    Ok(())
}

/// Container created for a missing slot, shaped by the segment that follows.
fn vivify(next: Option<&PathSegment>) -> Node {
    match next {
        None => Node::null(),
        Some(PathSegment::Key(_)) => Node::empty_object(),
        Some(PathSegment::Index(_)) => Node::empty_array(),
    }
}

/// Mutable lookup that creates whatever is missing along `path`.
///
/// Missing object keys are inserted (at the end of the key order); arrays are
/// extended according to `options`. Every container on the way has its
/// fragment cleared. Nothing is modified when an error is returned.
pub fn resolve_or_create<'a>(
    root: &'a mut Node,
    path: &Path,
    options: &DocumentOptions,
) -> Result<Resolved<'a>, MutateError> {
    plan_create(root, path, options)?;

    let segments = path.segments();
    let mut created = None;
    let mut current = root;
    for (depth, segment) in segments.iter().enumerate() {
        let next = segments.get(depth + 1);
        let node = current;
        current = match (segment, node.kind_mut()) {
            (PathSegment::Key(key), NodeKind::Object(members)) => {
                let index = match members.get_index_of(key.as_str()) {
                    Some(index) => index,
                    None => {
                        if created.is_none() {
                            created = Some(Created::Key {
                                parent: path.prefix(depth),
                                key: key.clone(),
                            });
                        }
                        members.insert_full(key.clone(), vivify(next)).0
                    }
                };
                &mut members[index]
            }
            (PathSegment::Index(index), NodeKind::Array(items)) => {
                let index = *index;
                let len = items.len();
                if index >= len {
                    check_extend(path, depth, index, len, options)?;
                    if created.is_none() {
                        created = Some(Created::Index {
                            parent: path.prefix(depth),
                            prior_len: len,
                        });
                    }
                    items.resize_with(index, Node::null);
                    items.push(vivify(next));
                }
                &mut items[index]
            }
            (segment, kind) => {
                return Err(MutateError::TypeMismatch {
                    at: path.prefix(depth),
                    segment: segment.clone(),
                    expected: expected_container(segment),
                    found: kind.type_name(),
                })
            }
        };
    }
    Ok(Resolved {
        node: current,
        created,
    })
}
