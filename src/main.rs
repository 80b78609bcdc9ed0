//! Scene Editor: Headless-Replay einer Editor-Sitzung.
//!
//! Spielt ein JSON-Skript aus `AppIntent`s gegen Store und In-Memory-Backend ab
//! und gibt die resultierende Szene als JSON auf stdout aus.

use anyhow::Context;
use scene_editor::render::{HeadlessBackend, SceneSync};
use scene_editor::{AppIntent, EditorOptions, SceneStore};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Scene Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let script_path: PathBuf = std::env::args_os()
            .nth(1)
            .map(PathBuf::from)
            .context("Aufruf: scene-editor <intents.json>")?;
        let intents = Self::load_script(&script_path)?;

        let options = EditorOptions::load_from_file(&EditorOptions::config_path());
        let mut store = SceneStore::new(options);
        let mut sync = SceneSync::new(HeadlessBackend::new(), &mut store);

        for intent in intents {
            store.dispatch(intent);
            sync.pump(&mut store);
        }

        let json = serde_json::to_string_pretty(&*store.state().objects)
            .context("Szene konnte nicht serialisiert werden")?;
        println!("{json}");

        let stats = sync.backend().stats();
        log::info!(
            "Replay beendet: {} Objekte, {} Commands, Handles {} erzeugt / {} neu gebaut / {} entsorgt",
            store.state().object_count(),
            store.state().command_log.len(),
            stats.created,
            stats.rebuilt,
            stats.disposed
        );
        Ok(())
    }

    fn load_script(path: &std::path::Path) -> anyhow::Result<Vec<AppIntent>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Skript nicht lesbar: {}", path.display()))?;
        let intents: Vec<AppIntent> = serde_json::from_str(&content)
            .with_context(|| format!("Skript fehlerhaft: {}", path.display()))?;
        log::info!("{} Intents aus {} geladen", intents.len(), path.display());
        Ok(intents)
    }
}
