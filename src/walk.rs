// src/walk.rs
//
// Whole-document pass. Each element gets a grouping policy from its tag and
// class; once the walk is done only the contents of <body> are rendered.

use tracing::{debug, debug_span, trace};

use crate::config::{VerseConfig, INDENT_BLOCK_CLASS, LINE_CLASS};
use crate::dom::{Document, NodeId};
use crate::error::Result;
use crate::group::group_inline;
use crate::markers::class_contains;
use crate::parse::parse_html;
use crate::serialize::{render_children, render_node};

/// How the walker treats one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Policy {
    /// `<p class="block-indent">`: group inside each line span, not across lines.
    IndentBlock,
    /// Any other `<p>`: group its children directly.
    Paragraph,
    /// Headings and everything else: descend only.
    Descend,
}

fn policy(doc: &Document, id: NodeId) -> Policy {
    let node = doc.node(id);
    if !node.is_element("p") {
        return Policy::Descend;
    }
    if node
        .attr("class")
        .is_some_and(|class| class_contains(class, INDENT_BLOCK_CLASS))
    {
        Policy::IndentBlock
    } else {
        Policy::Paragraph
    }
}

/// Parse `html`, wrap every verse and return the rendered contents of `<body>`.
pub fn wrap_verses(html: &str, cfg: &VerseConfig) -> Result<String> {
    let span = debug_span!("wrap_verses", bytes = html.len());
    let _enter = span.enter();

    let mut doc = parse_html(html)?;
    restructure(&mut doc, cfg)
}

/// Join several passage fragments and wrap them as one document.
pub fn wrap_passages<S: AsRef<str>>(passages: &[S], cfg: &VerseConfig) -> Result<String> {
    let joined: String = passages.iter().map(AsRef::as_ref).collect();
    wrap_verses(&joined, cfg)
}

/// Regroup every verse in `doc`, then render the children of its `<body>`.
/// Without a `<body>` the whole document is rendered.
pub fn restructure(doc: &mut Document, cfg: &VerseConfig) -> Result<String> {
    let root = doc.root();
    let wrapped = walk(doc, root, cfg);
    debug!(nodes = doc.len(), wrapped, "restructured document");

    let Some(body) = doc.find_element(root, "body") else {
        debug!("no <body>, rendering whole document");
        return render_children(doc, root);
    };

    let mut out = String::new();
    for &child in doc.children(body) {
        out.push_str(&render_node(doc, child)?);
    }
    Ok(out)
}

/// Deferred step of the walk.
enum Task {
    /// Schedule every child of this node by its policy.
    Children(NodeId),
    /// Group this paragraph's own children.
    Group(NodeId),
    /// Group inside each line span of this indent block.
    GroupLines(NodeId),
}

fn walk(doc: &mut Document, root: NodeId, cfg: &VerseConfig) -> usize {
    let mut wrapped = 0usize;
    // Popped from the end, so each child's steps are pushed in reverse.
    let mut tasks = vec![Task::Children(root)];

    while let Some(task) = tasks.pop() {
        let parent = match task {
            Task::Group(p) => {
                wrapped += group_inline(doc, p, cfg);
                continue;
            }
            Task::GroupLines(block) => {
                wrapped += group_lines(doc, block, cfg);
                continue;
            }
            Task::Children(parent) => parent,
        };

        for &child in doc.children(parent).iter().rev() {
            match policy(doc, child) {
                // Nested structure first, then the block's own lines.
                Policy::IndentBlock => {
                    tasks.push(Task::GroupLines(child));
                    tasks.push(Task::Children(child));
                }
                // Group first, then descend into the regrouped children.
                Policy::Paragraph => {
                    tasks.push(Task::Children(child));
                    tasks.push(Task::Group(child));
                }
                Policy::Descend => {
                    if let Some(tag) = doc.node(child).local_name() {
                        trace!(tag, "descending without grouping");
                    }
                    tasks.push(Task::Children(child));
                }
            }
        }
    }
    wrapped
}

/// Group inside each direct child of `block` whose class contains `line`.
fn group_lines(doc: &mut Document, block: NodeId, cfg: &VerseConfig) -> usize {
    let mut wrapped = 0usize;
    for line in doc.children(block).to_vec() {
        let is_line = doc
            .node(line)
            .attr("class")
            .is_some_and(|class| class_contains(class, LINE_CLASS));
        if is_line {
            wrapped += group_inline(doc, line, cfg);
        }
    }
    wrapped
}
