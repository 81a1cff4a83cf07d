//! HeroBldr Engine - resolve every choice feature on a hero and print the
//! result as JSON.

use anyhow::Context;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use herobldr_engine::infrastructure::catalog_loader::{load_hero, load_sourcebooks};
use herobldr_engine::infrastructure::config::{load_dotenv_from_repo_root, EngineConfig};
use herobldr_engine::{FeaturePanel, FeaturePanelView, PanelMode, Resolution};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FeatureReport {
    feature_id: String,
    name: String,
    kind: String,
    resolution: Resolution,
    panel: Option<FeaturePanelView>,
}

fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();
    let config = EngineConfig::from_env()?;

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let hero_path = config
        .hero_path
        .as_deref()
        .context("HEROBLDR_HERO_PATH is not set")?;
    let hero = load_hero(hero_path)?;
    let sourcebooks = load_sourcebooks(&config.sourcebook_paths)?;

    let panel = FeaturePanel::new(&sourcebooks)
        .with_hero(&hero)
        .with_mode(PanelMode::Full)
        .with_max_depth(config.max_feature_depth);
    let resolver = panel.resolver();

    let reports: Vec<FeatureReport> = hero
        .features_with_depth(config.max_feature_depth)
        .into_iter()
        .filter(|feature| feature.is_choice())
        .map(|feature| FeatureReport {
            feature_id: feature.id.clone(),
            name: feature.name.clone(),
            kind: feature.feature_type().to_string(),
            resolution: resolver.resolve(feature),
            panel: panel.render(feature),
        })
        .collect();

    tracing::info!(hero = %hero.name, features = reports.len(), "Resolved choice features");
    println!(
        "{}",
        serde_json::to_string_pretty(&reports).context("Failed to serialize report")?
    );
    Ok(())
}
