//! Einfache-Kurve-Modus: Start → Ellbogen → Ende (Cursor).
//!
//! Die Kurve wird aus den Sehnen Start→Ellbogen und Ende→Ellbogen gefittet
//! und nach Bogenlänge (XZ) abgetastet. Ohne Ellbogen verhält sich der Modus
//! wie eine Gerade.
//!
//! **Fortsetzung:** Nach einer Platzierung mit „weiterbauen" wird der nächste
//! Ellbogen auf die Gerade durch vorherigen Ellbogen und neuen Start projiziert.
//! Dadurch gehen aufeinanderfolgende Kurven tangentenstetig ineinander über.
//!
//! Aufgeteilt in:
//! - `state`    : Struct, Konstruktoren, Kurven-Fitting
//! - `geometry` : Punktberechnung entlang der Bézier-Kurve
//! - `lifecycle`: LineModeTool-Implementierung
//! - `drag`     : Greifbare Punkte und Drag-Logik

mod drag;
mod geometry;
mod lifecycle;
mod state;

pub use geometry::compute_curve_points;
pub use state::SimpleCurveMode;
