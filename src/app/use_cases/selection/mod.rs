//! Use-Case-Funktionen für Objekt-Selektion.
//!
//! - `pick`: Selektion setzen oder erweitern
//! - `helpers`: Alles selektieren, Selektion aufheben

mod helpers;
mod pick;

pub use helpers::{clear_selection, select_all};
pub use pick::set_selection;
