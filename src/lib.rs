//! # resume2pdf
//!
//! Generate a formatted resume — an HTML document and a paginated PDF —
//! from a single YAML source file.
//!
//! ## Why this crate?
//!
//! A resume is data, not layout. Keeping the content in a small YAML file
//! and regenerating both artifacts from it means edits never fight a word
//! processor: change a date, save, and both outputs are rebuilt with the
//! same fixed layout. A watch mode closes the loop for live editing.
//!
//! ## Pipeline Overview
//!
//! ```text
//! resume.yaml
//!  │
//!  ├─ 1. Load       parse into the Resume tree (serde_yaml)
//!  ├─ 2. Normalize  [label](url) → anchors, date hyphens → en-dashes
//!  ├─ 3. Markup     bind into the fixed layout (handlebars) → resume.html
//!  └─ 4. Paginate   fixed US-Letter geometry (printpdf)     → resume.pdf
//! ```
//!
//! An optional watcher re-runs the pipeline on every accepted change to the
//! source file, with a 500 ms debounce to coalesce editor save bursts.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use resume2pdf::{generate_to_files, RenderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RenderConfig::default(); // resume.yaml → resume.html + resume.pdf
//!     let stats = generate_to_files(&config).await?;
//!     eprintln!("{} pages in {}ms", stats.pdf_pages, stats.total_duration_ms);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `resume2pdf` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! resume2pdf = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod generate;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod template;
pub mod watch;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{RenderConfig, RenderConfigBuilder};
pub use error::ResumeError;
pub use generate::{generate, generate_sync, generate_to_files};
pub use model::{Award, Education, Experience, Project, Resume, Role, SkillGroup};
pub use output::{GenerateOutput, GenerateStats};
pub use watch::{watch, Debouncer, WatchIteration};
