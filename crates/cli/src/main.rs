//! Scripted demo of the skill-casting engine.
//!
//! Builds an in-memory world with one player and one NPC, then walks through
//! instant casts, a delayed cast, a cooldown rejection, an interrupt and a
//! few effect ticks. Every notification is logged as JSON.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p skill-cli
//! SKILL_CONFIG=engine.toml cargo run -p skill-cli
//! ```
mod scenario;

use std::sync::Arc;

use anyhow::Result;
use skill_runtime::{CastManager, Delivery, EngineConfig, EventBus, Topic, WorldRegistry};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::var_os("SKILL_CONFIG") {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::from_env(),
    };
    tracing::info!(?config, "Starting skill demo");

    let bus = EventBus::with_capacity(config.event_buffer_size);
    let listeners = [
        spawn_listener("direct", bus.subscribe(Topic::Direct)),
        spawn_listener("nearby", bus.subscribe(Topic::Nearby)),
    ];

    let world = Arc::new(WorldRegistry::new());
    let manager = CastManager::builder()
        .config(config)
        .templates(Arc::new(scenario::catalog()))
        .world(world.clone())
        .sink(Arc::new(bus.clone()))
        .build()?;

    scenario::run(&manager, &world).await?;

    // Receivers close once every sender is gone.
    drop(manager);
    drop(bus);
    for listener in listeners {
        listener.await?;
    }

    tracing::info!("Demo complete");
    Ok(())
}

/// Logs every delivery on one topic until the bus closes.
fn spawn_listener(topic: &'static str, mut rx: broadcast::Receiver<Delivery>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(delivery) => match serde_json::to_string(&delivery) {
                    Ok(json) => tracing::info!(topic, "{json}"),
                    Err(e) => tracing::warn!(topic, "Failed to encode delivery: {e}"),
                },
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(topic, skipped, "Listener lagged behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
