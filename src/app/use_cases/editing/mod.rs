//! Use-Case-Funktionen für Objekt-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `add_object`: Objekt einfügen
//! - `update_object`: Teil-Patch anwenden
//! - `remove_object`: Objekte entfernen (inkl. Selektion)

mod add_object;
mod remove_object;
mod update_object;

pub use add_object::add_object;
pub use remove_object::{remove_object, remove_selected_objects};
pub use update_object::update_object;
