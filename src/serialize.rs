// src/serialize.rs
//
// Arena Document -> HTML string through html5ever's serializer, so the output's
// escaping rules are the ones the parser reads back.

use html5ever::serialize::{serialize, Serialize, SerializeOpts, Serializer, TraversalScope};
use html5ever::QualName;
use std::io;

use crate::dom::{Document, NodeData, NodeId};
use crate::error::{Error, Result};

/// Render `id` and its subtree.
pub fn render_node(doc: &Document, id: NodeId) -> Result<String> {
    render(doc, id, TraversalScope::IncludeNode)
}

/// Render the children of `id` in order, without `id` itself.
pub fn render_children(doc: &Document, id: NodeId) -> Result<String> {
    render(doc, id, TraversalScope::ChildrenOnly(None))
}

fn render(doc: &Document, id: NodeId, traversal_scope: TraversalScope) -> Result<String> {
    let mut out = Vec::new();
    let opts = SerializeOpts {
        traversal_scope,
        ..Default::default()
    };
    serialize(&mut out, &Subtree { doc, id }, opts).map_err(Error::Render)?;
    String::from_utf8(out)
        .map_err(|e| Error::Render(io::Error::new(io::ErrorKind::InvalidData, e)))
}

struct Subtree<'a> {
    doc: &'a Document,
    id: NodeId,
}

enum Op {
    Open(NodeId),
    Close(QualName),
}

impl Serialize for Subtree<'_> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        let doc = self.doc;
        // Stack of pending work, popped from the end.
        let mut ops: Vec<Op> = match traversal_scope {
            TraversalScope::IncludeNode => vec![Op::Open(self.id)],
            TraversalScope::ChildrenOnly(_) => {
                doc.children(self.id).iter().rev().map(|&c| Op::Open(c)).collect()
            }
        };

        while let Some(op) = ops.pop() {
            let id = match op {
                Op::Close(name) => {
                    serializer.end_elem(name)?;
                    continue;
                }
                Op::Open(id) => id,
            };
            match &doc.node(id).data {
                NodeData::Element { name, attrs } => {
                    serializer.start_elem(
                        name.clone(),
                        attrs.iter().map(|attr| (&attr.name, &attr.value[..])),
                    )?;
                    ops.push(Op::Close(name.clone()));
                    ops.extend(doc.children(id).iter().rev().map(|&c| Op::Open(c)));
                }
                // The document node has no markup of its own.
                NodeData::Document => {
                    ops.extend(doc.children(id).iter().rev().map(|&c| Op::Open(c)));
                }
                NodeData::Doctype { name } => serializer.write_doctype(name)?,
                NodeData::Text(text) => serializer.write_text(text)?,
                NodeData::Comment(text) => serializer.write_comment(text)?,
                NodeData::ProcessingInstruction { target, contents } => {
                    serializer.write_processing_instruction(target, contents)?
                }
            }
        }
        Ok(())
    }
}
