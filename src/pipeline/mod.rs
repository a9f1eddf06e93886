//! Pipeline stages for resume generation.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. a different page geometry) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! load ──▶ normalize ──▶ html ──▶ pdf
//! (YAML)   (links,       (handlebars) (fixed-geometry
//!           en-dashes)                 pagination)
//! ```
//!
//! 1. [`load`]      — parse the YAML source into the [`crate::model::Resume`] tree
//! 2. [`normalize`] — pure text transforms the renderers apply per field
//! 3. [`html`]      — bind the tree into the fixed markup layout
//! 4. [`pdf`]       — flatten, wrap, and paginate the same content

pub mod html;
pub mod load;
pub mod normalize;
pub mod pdf;
