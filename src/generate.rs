//! Eager generation entry points.
//!
//! One run is load → markup → pagination, nothing held between runs: the
//! whole [`crate::model::Resume`] tree is rebuilt from the source document
//! every time and dropped when the run ends. [`generate`] returns the
//! artifacts in memory; [`generate_to_files`] additionally writes them,
//! atomically, to their destinations.

use crate::config::RenderConfig;
use crate::error::ResumeError;
use crate::output::{GenerateOutput, GenerateStats};
use crate::pipeline::{html, load, pdf};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Run the pipeline once and return both artifacts in memory.
///
/// # Errors
/// * [`ResumeError::MissingInput`] — source document absent
/// * [`ResumeError::Parse`] — source document malformed
/// * [`ResumeError::Render`] — template or pagination failure
pub async fn generate(config: &RenderConfig) -> Result<GenerateOutput, ResumeError> {
    let total_start = Instant::now();
    info!("Generating resume from {}", config.input.display());

    let load_start = Instant::now();
    let resume = load::load_resume(&config.input).await?;
    let load_duration_ms = load_start.elapsed().as_millis() as u64;

    let html_start = Instant::now();
    let html = html::render_html(&resume)?;
    let html_duration_ms = html_start.elapsed().as_millis() as u64;
    debug!("Rendered markup: {} bytes", html.len());

    let pdf_start = Instant::now();
    let pdf = pdf::render_pdf(&resume, config)?;
    let pdf_duration_ms = pdf_start.elapsed().as_millis() as u64;
    debug!(
        "Paginated document: {} pages, {} bytes",
        pdf.page_count,
        pdf.bytes.len()
    );

    let stats = GenerateStats {
        html_bytes: html.len(),
        pdf_bytes: pdf.bytes.len(),
        pdf_pages: pdf.page_count,
        load_duration_ms,
        html_duration_ms,
        pdf_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };

    info!(
        "Generated {} bytes HTML, {} pages PDF in {}ms",
        stats.html_bytes, stats.pdf_pages, stats.total_duration_ms
    );

    Ok(GenerateOutput {
        html,
        pdf: pdf.bytes,
        stats,
    })
}

/// Run the pipeline once and write both artifacts to their configured
/// destinations.
///
/// Each artifact is written to a sibling `.tmp` path and renamed into place
/// only after the write completes, so a failed run never leaves a partial
/// file at the final location. On any failure before the writes, no output
/// file is created or touched.
pub async fn generate_to_files(config: &RenderConfig) -> Result<GenerateStats, ResumeError> {
    let output = generate(config).await?;

    write_atomic(&config.html_output, output.html.as_bytes()).await?;
    write_atomic(&config.pdf_output, &output.pdf).await?;

    Ok(output.stats)
}

/// Synchronous wrapper around [`generate_to_files`].
///
/// Creates a temporary tokio runtime internally; for callers that are not
/// already async.
pub fn generate_sync(config: &RenderConfig) -> Result<GenerateStats, ResumeError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| ResumeError::Io {
            context: "failed to create async runtime".into(),
            source: e,
        })?
        .block_on(generate_to_files(config))
}

/// Atomic write: temp file in the destination directory, then rename.
async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ResumeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ResumeError::Write {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }
    }

    // `resume.html` → `resume.html.tmp`, keeping the two artifacts' temp
    // files distinct when they share a stem.
    let tmp_ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{ext}.tmp"),
        None => "tmp".to_string(),
    };
    let tmp_path = path.with_extension(tmp_ext);
    tokio::fs::write(&tmp_path, bytes)
        .await
        .map_err(|e| ResumeError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| ResumeError::Write {
            path: path.to_path_buf(),
            source: e,
        })
}
