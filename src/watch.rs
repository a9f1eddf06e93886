//! Watch mode: regenerate the artifacts whenever the source changes.
//!
//! The filesystem watch service pushes raw change events onto a channel; a
//! single consumer loop filters them down to the input path, applies the
//! debounce window, and runs the pipeline synchronously per accepted event.
//! At most one pipeline run is ever in flight — the loop does not pull the
//! next event until the current run finishes.
//!
//! A malformed edit must not kill the watcher: per-iteration failures are
//! reported and the loop keeps waiting for the next change. Ctrl-C ends the
//! loop; dropping the watcher releases the filesystem watch.

use crate::config::RenderConfig;
use crate::error::ResumeError;
use crate::generate::generate_to_files;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as _};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Debounce filter: accepts an event only when the previous accepted event
/// lies outside the window. Owned by the watch loop — the last-accepted
/// timestamp is explicit state here, not a global.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    /// Accept or discard an event arriving at `now`. The timestamp is only
    /// updated on acceptance, so a burst of rejected events cannot push the
    /// window forward indefinitely.
    pub fn accept(&mut self, now: Instant) -> bool {
        match self.last_accepted {
            Some(prev) if now.duration_since(prev) < self.window => false,
            _ => {
                self.last_accepted = Some(now);
                true
            }
        }
    }
}

/// One regeneration performed by the watch loop.
#[derive(Debug)]
pub struct WatchIteration {
    /// Wall-clock time of the run, for the status line.
    pub timestamp: chrono::DateTime<chrono::Local>,
    pub result: Result<crate::output::GenerateStats, ResumeError>,
}

/// Watch the source document and regenerate on every accepted change,
/// invoking `on_iteration` after each run (including the initial one).
///
/// Blocks until Ctrl-C. Returns `Err` only when the watch itself cannot be
/// established; pipeline failures are delivered through `on_iteration` and
/// never terminate the loop.
pub async fn watch<F>(config: &RenderConfig, mut on_iteration: F) -> Result<(), ResumeError>
where
    F: FnMut(&WatchIteration),
{
    // Initial generation: report, then start watching either way.
    run_once(config, &mut on_iteration).await;

    let (tx, rx) = mpsc::channel::<Event>(64);
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| {
            if let Ok(event) = res {
                // The loop applies its own filtering; a full channel just
                // drops the burst, which the debounce would discard anyway.
                let _ = tx.blocking_send(event);
            }
        },
        notify::Config::default(),
    )
    .map_err(|e| ResumeError::Watch {
        detail: e.to_string(),
    })?;

    // Watch the containing directory, not the file: editors commonly save
    // by replacing the file, which would invalidate a file-level watch.
    let watch_dir = parent_dir(&config.input);
    watcher
        .watch(&watch_dir, RecursiveMode::NonRecursive)
        .map_err(|e| ResumeError::Watch {
            detail: format!("cannot watch '{}': {}", watch_dir.display(), e),
        })?;
    debug!("Watching {} for changes", watch_dir.display());

    let debouncer = Debouncer::new(Duration::from_millis(config.debounce_ms));
    drive(config, rx, debouncer, tokio::signal::ctrl_c(), &mut on_iteration).await;
    Ok(())
}

/// The consumer half of the watch: pull events until the channel closes or
/// `shutdown` resolves, regenerating per accepted event. Separate from
/// [`watch`] so the loop can be fed through a plain channel.
async fn drive<F, S>(
    config: &RenderConfig,
    mut rx: mpsc::Receiver<Event>,
    mut debouncer: Debouncer,
    shutdown: S,
    on_iteration: &mut F,
) where
    F: FnMut(&WatchIteration),
    S: std::future::Future,
{
    let input_name = config.input.file_name().map(|n| n.to_os_string());
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                debug!("Interrupt received, releasing watch");
                break;
            }
            event = rx.recv() => {
                let Some(event) = event else { break };
                if !touches_input(&event, input_name.as_deref()) {
                    continue;
                }
                if !debouncer.accept(Instant::now()) {
                    debug!("Change discarded by debounce window");
                    continue;
                }
                run_once(config, on_iteration).await;
            }
        }
    }
}

async fn run_once<F>(config: &RenderConfig, on_iteration: &mut F)
where
    F: FnMut(&WatchIteration),
{
    let result = generate_to_files(config).await;
    if let Err(ref e) = result {
        warn!("Regeneration failed: {e}");
    }
    on_iteration(&WatchIteration {
        timestamp: chrono::Local::now(),
        result,
    });
}

fn parent_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn touches_input(event: &Event, input_name: Option<&std::ffi::OsStr>) -> bool {
    let Some(name) = input_name else { return false };
    event
        .paths
        .iter()
        .any(|p| p.file_name() == Some(name))
}
