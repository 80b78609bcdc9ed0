//! Interaktive Editor-Werkzeuge mit eigenem Zwischenzustand.

pub mod wall;

pub use wall::{WallClick, WallDrawTool};
