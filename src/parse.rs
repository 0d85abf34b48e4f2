// src/parse.rs
//
// HTML string -> arena Document. html5ever does the parsing (full HTML5 tree
// construction, so a bare fragment gains the usual html/head/body wrappers);
// the resulting RcDom is then copied into the arena.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

use crate::dom::{Document, NodeData, NodeId};
use crate::error::{Error, Result};

pub fn parse_html(input: &str) -> Result<Document> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut input.as_bytes())
        .map_err(Error::Parse)?;

    let mut doc = Document::new();
    let root = doc.root();
    // Pending (parent, node) pairs, popped from the end. Children go on in
    // reverse so they are appended in source order.
    let mut pending: Vec<(NodeId, Handle)> = dom
        .document
        .children
        .borrow()
        .iter()
        .rev()
        .map(|child| (root, child.clone()))
        .collect();

    while let Some((parent, handle)) = pending.pop() {
        let Some(data) = convert(&handle) else {
            push_children(&mut pending, parent, &handle);
            continue;
        };
        let id = doc.create(data);
        doc.append_child(parent, id);

        // <template> keeps its content in a separate fragment; flatten it in
        // after the element's own children.
        if let RcNodeData::Element {
            template_contents, ..
        } = &handle.data
        {
            if let Some(contents) = template_contents.borrow().as_ref() {
                push_children(&mut pending, id, contents);
            }
        }
        push_children(&mut pending, id, &handle);
    }
    Ok(doc)
}

fn push_children(pending: &mut Vec<(NodeId, Handle)>, parent: NodeId, handle: &Handle) {
    pending.extend(
        handle
            .children
            .borrow()
            .iter()
            .rev()
            .map(|child| (parent, child.clone())),
    );
}

/// Arena payload for one RcDom node. `None` for a nested document node, whose
/// children belong to the enclosing parent.
fn convert(handle: &Handle) -> Option<NodeData> {
    let data = match &handle.data {
        RcNodeData::Document => return None,
        RcNodeData::Doctype { name, .. } => NodeData::Doctype {
            name: name.to_string(),
        },
        RcNodeData::Text { contents } => NodeData::Text(contents.borrow().to_string()),
        RcNodeData::Comment { contents } => NodeData::Comment(contents.to_string()),
        RcNodeData::Element { name, attrs, .. } => NodeData::Element {
            name: name.clone(),
            attrs: attrs.borrow().clone(),
        },
        RcNodeData::ProcessingInstruction { target, contents } => {
            NodeData::ProcessingInstruction {
                target: target.to_string(),
                contents: contents.to_string(),
            }
        }
    };
    Some(data)
}
