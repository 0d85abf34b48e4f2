// src/group.rs
//
// Inline grouping: rewrite one parent's direct children so that everything
// between a verse anchor and the next anchor or numeral sits inside a wrapper.
// Descendants are left alone; the walker decides where this runs.

use tracing::{debug, trace};

use crate::config::VerseConfig;
use crate::dom::{Document, NodeId};
use crate::markers::{classify, Marker};

/// Regroup `parent`'s children in place. Returns the number of wrappers created.
///
/// Anchors and numerals stay direct children of `parent`; an anchor with no
/// content before the next boundary gets no wrapper.
pub fn group_inline(doc: &mut Document, parent: NodeId, cfg: &VerseConfig) -> usize {
    // Every child is orphaned here, so the appends below never search a sibling list.
    let children = doc.take_children(parent);
    let mut rebuilt = Vec::with_capacity(children.len());
    let mut wrapped = 0usize;
    let mut i = 0usize;

    while i < children.len() {
        let child = children[i];
        rebuilt.push(child);
        let verse = match classify(doc, child, cfg) {
            Marker::Anchor(verse) => verse.to_owned(),
            Marker::Number | Marker::Content => {
                i += 1;
                continue;
            }
        };

        let start = i + 1;
        let end = children[start..]
            .iter()
            .position(|&sib| classify(doc, sib, cfg).is_boundary())
            .map_or(children.len(), |off| start + off);

        if end > start {
            let wrapper = doc.create_element(
                &cfg.wrapper_tag,
                &[
                    ("class", cfg.wrapper_class.as_str()),
                    (cfg.id_attribute.as_str(), verse.as_str()),
                ],
            );
            for &sib in &children[start..end] {
                doc.append_child(wrapper, sib);
            }
            rebuilt.push(wrapper);
            wrapped += 1;
            debug!(verse = %verse, nodes = end - start, "wrapped verse");
        } else {
            trace!(verse = %verse, "empty verse, no wrapper");
        }
        i = end;
    }

    for child in rebuilt {
        doc.append_child(parent, child);
    }
    wrapped
}
