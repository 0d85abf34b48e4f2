// src/markers.rs
//
// Verse marker classification. Markers are never stored; they are computed from
// an element's tag name and attributes whenever asked. Every function here is
// total; anything that does not match is simply "not a marker".

use memchr::memmem;

use crate::config::VerseConfig;
use crate::dom::{Document, NodeId};

const ANCHOR_TAG: &str = "a";
const NUMBER_TAG: &str = "b";

/// What a node means to the verse grouper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    /// Start of a verse, carrying its identifier.
    Anchor(&'a str),
    /// Rendered verse numeral; closes any verse in progress.
    Number,
    Content,
}

impl Marker<'_> {
    /// Anchors and numerals both end the run of content owned by a verse.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        !matches!(self, Marker::Content)
    }
}

pub fn classify<'a>(doc: &'a Document, id: NodeId, cfg: &VerseConfig) -> Marker<'a> {
    if let Some(verse) = verse_id(doc, id, cfg) {
        Marker::Anchor(verse)
    } else if is_verse_number(doc, id, cfg) {
        Marker::Number
    } else {
        Marker::Content
    }
}

/// `<a>` whose class contains the anchor token and whose `rel` starts with the id prefix.
pub fn is_verse_anchor(doc: &Document, id: NodeId, cfg: &VerseConfig) -> bool {
    verse_id(doc, id, cfg).is_some()
}

/// `<b>` whose class contains the numeral token.
pub fn is_verse_number(doc: &Document, id: NodeId, cfg: &VerseConfig) -> bool {
    let node = doc.node(id);
    node.is_element(NUMBER_TAG)
        && node
            .attr("class")
            .is_some_and(|class| class_contains(class, &cfg.number_class))
}

/// The `rel` value of a verse anchor, `None` for anything else.
pub fn verse_id<'a>(doc: &'a Document, id: NodeId, cfg: &VerseConfig) -> Option<&'a str> {
    let node = doc.node(id);
    if !node.is_element(ANCHOR_TAG) {
        return None;
    }
    if !node
        .attr("class")
        .is_some_and(|class| class_contains(class, &cfg.anchor_class))
    {
        return None;
    }
    node.attr("rel").filter(|rel| rel.starts_with(cfg.id_prefix.as_str()))
}

/// Substring test on a class attribute value: `"indent line"` contains `"line"`.
#[inline]
pub fn class_contains(class: &str, token: &str) -> bool {
    memmem::find(class.as_bytes(), token.as_bytes()).is_some()
}
