//! Core-Domänentypen: Steuerpunkte, Parallelogramm, Geometrie.

pub mod geometry;
/// Core-Datenmodelle des Editors
///
/// - Point: einzelner verschiebbarer Steuerpunkt
/// - Parallelogram: geordnete Punktfolge mit Phasen, Hit-Test und Schließungsformel
pub mod parallelogram;
pub mod point;

pub use geometry::QuadSegment;
pub use parallelogram::{Parallelogram, ShapePhase, MAX_POINTS};
pub use point::{Point, PointKind};
