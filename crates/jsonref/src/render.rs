//! Compact JSON rendering with fragment reuse.
//!
//! Output is byte-for-byte what `serde_json::to_string` produces for the
//! same value: no whitespace, keys in insertion order, strings escaped the
//! way `serde_json` escapes them.

use jsonref_util::json_size::string_size;
use jsonref_util::strings::write_quoted;

use crate::node::{Node, NodeKind};

/// Work done by one incremental render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Containers whose fragment was rebuilt.
    pub rendered: usize,
    /// Clean subtrees spliced in from their cached fragment.
    pub reused: usize,
}

/// Render `node` without updating any cache. Clean subtrees are still
/// copied from their fragments.
pub fn render(node: &Node) -> String {
    let mut out = String::with_capacity(node.size_hint());
    write_node(&mut out, node);
    out
}

/// Append the compact rendering of `node` to `out`.
pub fn write_node(out: &mut String, node: &Node) {
    if let Some(fragment) = node.fragment() {
        out.push_str(fragment);
        return;
    }
    match node.kind() {
        NodeKind::Null => out.push_str("null"),
        NodeKind::Bool(true) => out.push_str("true"),
        NodeKind::Bool(false) => out.push_str("false"),
        NodeKind::Number(n) => out.push_str(&n.to_string()),
        NodeKind::String(s) => {
            out.reserve(string_size(s));
            write_quoted(out, s);
        }
        NodeKind::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_node(out, item);
            }
            out.push(']');
        }
        NodeKind::Object(members) => {
            out.push('{');
            for (i, (key, child)) in members.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_quoted(out, key);
                out.push(':');
                write_node(out, child);
            }
            out.push('}');
        }
    }
}

/// Rebuild the fragment of every stale container under `node`, bottom-up.
///
/// Scalars never carry fragments here; they are cheap to write inline.
pub(crate) fn refresh(node: &mut Node, stats: &mut RenderStats) {
    if node.has_fragment() {
        stats.reused += 1;
        return;
    }
    if !node.is_container() {
        return;
    }

    let mut out = String::with_capacity(node.size_hint());
    match node.kind_mut() {
        NodeKind::Array(items) => {
            out.push('[');
            for (i, item) in items.iter_mut().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                refresh(item, stats);
                write_node(&mut out, item);
            }
            out.push(']');
        }
        NodeKind::Object(members) => {
            out.push('{');
            for (i, (key, child)) in members.iter_mut().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_quoted(&mut out, key);
                out.push(':');
                refresh(child, stats);
                write_node(&mut out, child);
            }
            out.push('}');
        }
        _ => {}
    }
    stats.rendered += 1;
    node.set_fragment(out);
}

/// [`refresh`] for a document root, which is cached even when it is a scalar.
pub(crate) fn refresh_root(root: &mut Node) -> RenderStats {
    let mut stats = RenderStats::default();
    refresh(root, &mut stats);
    if !root.has_fragment() {
        let text = render(root);
        root.set_fragment(text);
        stats.rendered += 1;
    }
    stats
}
