//! Kreis-Modus: Mittelpunkt per Klick, Radius bis zum Cursor.
//!
//! Objekte werden gleichmäßig über den Umfang verteilt, beginnend beim
//! Winkel zum Cursor. Der Mittelpunkt bleibt nach einer Platzierung erhalten.

mod geometry;
mod lifecycle;
mod state;

pub use geometry::compute_circle_points;
pub use state::CircleMode;
