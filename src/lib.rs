// src/lib.rs
//
// versewrap: wrap each verse of Bible passage HTML in its own container
//
// - Input is passage HTML as returned by the text provider: <p> prose, indented
//   poetic blocks of line spans, headings and footnote blocks, with verse anchors
//   (<a class="va" rel="vNNNNNNNN">) and optional numerals (<b class="verse-num">).
// - Inside every <p>, content after an anchor up to the next anchor or numeral is
//   moved into <span class="verse" data-verse="vNNNNNNNN">. The anchor itself stays
//   outside its wrapper; an anchor with nothing after it gets no wrapper.
// - <p class="block-indent"> groups inside each of its line spans instead.
// - Headings and all other elements are only descended into.
// - The output is the rendered children of <body>.

/// Classification constants and wrapper shape
pub mod config;
/// Arena document tree
pub mod dom;
pub mod error;
/// Inline grouping of one parent's children
pub mod group;
/// Verse anchor / numeral predicates
pub mod markers;
/// HTML to [`dom::Document`]
pub mod parse;
/// [`dom::Document`] to HTML
pub mod serialize;
/// Whole-document restructuring
pub mod walk;

pub use config::VerseConfig;
pub use dom::{Document, NodeId};
pub use error::{Error, Result};
pub use walk::{restructure, wrap_passages, wrap_verses};
