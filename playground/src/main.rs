//! Boostlab Playground - headless runner for the boosting walkthrough
//!
//! Loads the runner configuration, fetches the dataset preview (or falls back
//! to synthetic points), then plays the step animation to completion while
//! logging each frame and the metric comparison.
//!
//! Configuration location:
//! - Linux: ~/.local/share/boostlab/config.json
//! - Windows: %APPDATA%\boostlab\config.json
//! - MacOS: ~/Library/Application Support/boostlab/config.json

use std::sync::Arc;

use boostlab::metrics::{ComparedMetrics, MetricKind};
use boostlab::synthetic::TreeNodeKind;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use boostlab_playground::config::PlaygroundConfig;
use boostlab_playground::error::PlaygroundError;
use boostlab_playground::paths::AppPaths;
use boostlab_playground::preview::{HttpPreviewSource, PreviewSource};
use boostlab_playground::session::PlaygroundSession;

fn init_logging(level: &str) -> Result<(), PlaygroundError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| PlaygroundError::Logging(e.to_string()))
}

fn log_metrics(metrics: &ComparedMetrics) {
    for kind in MetricKind::all() {
        let current = metrics.current.get(*kind);
        match metrics.delta(*kind) {
            Some(delta) => info!("{:<14} {:.4} ({:+.4})", kind.label(), current, delta),
            None => info!("{:<14} {:.4}", kind.label(), current),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), PlaygroundError> {
    let paths = AppPaths::new()?;
    let config = PlaygroundConfig::load_with_env(&paths.config_file())?;
    init_logging(&config.log_level)?;

    info!("Data directory: {:?}", paths.data_dir());
    info!(
        "{} on {} ({} steps every {} ms)",
        config.algorithm.display_name(),
        config.dataset.display_name(config.task),
        config.max_steps,
        config.speed_ms
    );

    let mut session = PlaygroundSession::new(&config);

    let source: Arc<dyn PreviewSource> = Arc::new(HttpPreviewSource::new(
        config.api_base.clone(),
        config.preview_timeout(),
    ));
    let origin = session.load_points(source).await;
    info!("{} points ({:?})", session.points().len(), origin);

    for (spec, value) in session.store().current().iter() {
        info!("{:<28} {}", spec.label, spec.format_value(value));
    }
    session.capture_baseline();
    for (key, raw) in &config.parameters {
        let update = session.set_parameter(key, raw);
        info!("{} = {} ({:?})", key, raw, update);
    }
    log_metrics(&session.metrics());

    let mut rx = session.driver().subscribe();
    session.driver_mut().play();
    if !session.driver().is_playing() {
        warn!("Nothing to animate with {} step(s)", config.max_steps);
        return Ok(());
    }

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let frame = session.frame();
                info!(
                    "step {}/{}  progress {:.0}%  accuracy {:.3}  loss {:.3}  residual spread {:.2}",
                    frame.animation.current_step + 1,
                    frame.animation.max_steps,
                    frame.progress * 100.0,
                    frame.accuracy,
                    frame.loss,
                    frame.residual_scale
                );
                if !frame.animation.is_playing() {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                session.driver_mut().pause();
                break;
            }
        }
    }

    let view = session.settings().tree;
    for node in session.tree() {
        let depth = match node.kind {
            TreeNodeKind::Root => 0,
            TreeNodeKind::Split => 1,
            TreeNodeKind::Leaf => 2,
        };
        info!("{:indent$}{}", "", node.caption(&view), indent = depth * 2);
    }

    log_metrics(&session.metrics());
    info!("Done");
    Ok(())
}
