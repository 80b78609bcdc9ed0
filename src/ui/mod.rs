//! UI-Layer mit egui: Keyboard-Shortcuts, Toolbar, Properties-Panel, Status-Bar.
//!
//! Jede Komponente liest den AppState nur; eingabefähige Komponenten geben `AppIntent`s zurück.

pub mod keyboard;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use keyboard::collect_keyboard_intents;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
