//! Application-Layer: Controller, State, Events, Use-Cases und Scene-Store.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Objekte, Selektion, Werkzeuge).
pub mod state;
pub mod store;
pub mod tools;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorTool, EditorToolState, SelectionState};
pub use store::{ChangeSet, SceneStore, StoreEvent, Subscription};
