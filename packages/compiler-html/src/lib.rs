//! # Pagesmith HTML Compiler
//!
//! Compiles a document and theme into one standalone page: doctype, head
//! with SEO metadata and the embedded stylesheet, one `<section>` per
//! document section in order, and the inline tracking script.
//!
//! ```rust,ignore
//! use pagesmith_compiler_html::{compile, CompileOptions};
//!
//! let page = compile(&document, &theme, &CompileOptions::default())?;
//! std::fs::write("index.html", page.markup)?;
//! ```
//!
//! Sections whose type has no renderer compile to a visible notice instead
//! of failing the page.

mod compiler;
mod elements;
mod markup;
mod sections;
mod tracking;

pub use compiler::{
    compile, compile_section, CompileError, CompileOptions, CompiledPage,
    DEFAULT_ANALYTICS_ENDPOINT,
};
pub use markup::escape_html;
