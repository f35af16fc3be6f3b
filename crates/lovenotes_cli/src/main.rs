//! Offline driver for the love-notes page.
//!
//! # Responsibility
//! - Render a notes file through the real timeline logic without a browser.
//! - Simulate scrolling with the polling proximity source until every batch
//!   has loaded, then print the final markup and the love timer line.

use anyhow::{Context, Result};
use clap::Parser;
use lovenotes_core::config::parse_love_start;
use lovenotes_core::{
    core_version, default_log_level, init_logging, LoveTimer, MemoryElementId, MemorySurface,
    NoteSource, ObserverRole, PageConfig, PollingProximity, Rect, Timeline,
};
use log::info;
use std::path::PathBuf;

/// Upper bound on simulated scroll steps.
const MAX_SCROLL_STEPS: usize = 10_000;

/// Render a love-notes timeline offline
#[derive(Parser, Debug)]
#[command(name = "lovenotes")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON array of `{title, description, date?}` notes
    notes: PathBuf,

    /// Page configuration JSON
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render and reveal everything at startup
    #[arg(long)]
    reduced_motion: bool,

    /// Viewport height in logical pixels
    #[arg(long, default_value_t = 800.0)]
    viewport_height: f64,

    /// Distance scrolled per simulated step
    #[arg(long, default_value_t = 400.0)]
    scroll_step: f64,

    /// Fixed "now" for the love timer (YYYY-MM-DDTHH:MM:SS); defaults to local time
    #[arg(long)]
    now: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

type CliTimeline = Timeline<MemorySurface, PollingProximity<MemoryElementId>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_ref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, &log_dir.to_string_lossy()).context("failed to start logging")?;
    }

    let config = match cli.config.as_ref() {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            PageConfig::from_json_str(raw.as_str())
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => PageConfig::default(),
    };
    let notes = NoteSource::from_json_file(&cli.notes)
        .with_context(|| format!("failed to load notes {}", cli.notes.display()))?;

    let mut timeline = Timeline::new(
        notes,
        config.timeline,
        MemorySurface::new(config.element_ids.timeline.as_str()),
        PollingProximity::new(),
    )?;
    timeline.start(cli.reduced_motion);
    let steps = scroll_to_end(&mut timeline, cli.viewport_height, cli.scroll_step);
    info!(
        "event=cli_render module=cli status=ok shown={} steps={} version={}",
        timeline.shown(),
        steps,
        core_version()
    );

    print!("{}", timeline.surface().to_html());

    let timer = LoveTimer::new(config.love_start_instant()?);
    let now = match cli.now.as_deref() {
        Some(value) => parse_love_start(value).context("invalid --now")?,
        None => chrono::Local::now().naive_local(),
    };
    println!("love_timer={}", timer.render(now));
    Ok(())
}

/// Scrolls down step by step, delivering reveal and sentinel notifications,
/// until the viewport is past the content and no sentinel remains.
fn scroll_to_end(timeline: &mut CliTimeline, viewport_height: f64, step: f64) -> usize {
    let step = step.max(1.0);
    let mut scroll_y = 0.0;
    for steps in 0..MAX_SCROLL_STEPS {
        let viewport = Rect::new(0.0, scroll_y, 640.0, viewport_height);
        let reveal = timeline
            .proximity()
            .poll(ObserverRole::Reveal, viewport, |e| timeline.surface().rect_of(e));
        timeline.handle_reveal(&reveal);
        let sentinel = timeline
            .proximity()
            .poll(ObserverRole::Sentinel, viewport, |e| timeline.surface().rect_of(e));
        timeline.handle_sentinel(&sentinel);

        if timeline.sentinel().is_none() && scroll_y > timeline.surface().content_height() {
            return steps + 1;
        }
        scroll_y += step;
    }
    MAX_SCROLL_STEPS
}
