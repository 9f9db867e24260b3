//! # Pagesmith Editor
//!
//! Structural editing engine for Pagesmith documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Document, Section, Element, Theme    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: mutations + session state           │
//! │  - Insert/update/delete/reorder nodes       │
//! │  - Keep orders dense after every change     │
//! │  - Copy/paste with fresh ids                │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler: Document + Theme → HTML + CSS     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Missing ids are no-ops**: a stale selection never fails a session
//! 2. **Orders are dense**: renumbering is the engine's job, not the caller's
//! 3. **Both locales, always**: content edits touch one locale at a time
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagesmith_editor::EditSession;
//! use pagesmith_model::{Document, Locale, SectionKind, Theme};
//!
//! let mut session = EditSession::new(Document::default(), Theme::default());
//!
//! let hero = session.add_section(SectionKind::Hero, None)?;
//! let hero_id = hero.created_id.unwrap();
//!
//! session.update_section_content(&hero_id, Locale::En, json!({ "heading": "Hello" }))?;
//! session.copy_section(&hero_id);
//! session.paste_section(1)?;
//!
//! let (document, theme) = session.into_parts();
//! ```

mod clipboard;
mod errors;
mod mutations;
mod session;

pub use clipboard::{Clipboard, ClipboardEntry};
pub use errors::{EditorError, MutationError};
pub use mutations::{ElementPatch, Mutation, MutationResult, SectionPatch};
pub use session::EditSession;
