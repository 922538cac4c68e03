//! Gerade-Linie-Modus: Start per Klick, Ende folgt dem Cursor.
//!
//! Aufgeteilt in:
//! - `state`    : Struct und Konstruktoren
//! - `geometry` : Punktberechnung (auch von der Kurve bei Entartung genutzt)
//! - `lifecycle`: LineModeTool-Implementierung

mod geometry;
mod lifecycle;
mod state;

pub use geometry::compute_line_points;
pub use state::StraightLineMode;
