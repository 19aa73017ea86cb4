// Docsense: semantic analysis for uploaded documents.
//
// This is the library root. Each module corresponds to one stage of the
// analysis pipeline: extract text from a document, then score sentiment,
// recognize entities, and extract topic words from that text.

pub mod config;
pub mod entities;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod sentiment;
pub mod topics;
pub mod web;
