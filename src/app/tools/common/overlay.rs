//! Overlay-Geometrie: gestrichelte Hilfslinien, Längen-Tooltips und Winkel-Indikator.
//!
//! Erzeugt reine Daten; gezeichnet wird vom Host.

use crate::core::math::{angle_between_degrees, distance_xz, left, right, xz};
use crate::core::{fit_curve_with_tangents, Bezier4x3, Segment3};
use crate::shared::options::OVERLAY_LINE_WIDTH;
use glam::{Vec2, Vec3};

/// Gestrichelte Linie vom Start zum Cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashedLine {
    pub segment: Segment3,
    pub width: f32,
    pub dash_length: f32,
    pub gap_length: f32,
}

/// Durchgezogene Overlay-Form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayShape {
    Line { segment: Segment3, width: f32 },
    Curve { curve: Bezier4x3, width: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipKind {
    /// Länge in Metern
    Length,
    /// Winkel in Grad
    Angle,
}

/// Text-Einblendung an einer Weltposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tooltip {
    pub kind: TooltipKind,
    pub position: Vec3,
    pub value: i32,
}

/// Klassifizierung des Knick-Winkels am Ellbogen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleKind {
    /// Genau 180°
    Straight,
    /// Über 90°
    Obtuse,
    /// Genau 90°
    Right,
    /// Unter 90°
    Acute,
}

/// Winkel-Markierung zwischen zwei Sehnen.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleIndicator {
    pub angle: i32,
    pub kind: AngleKind,
    /// Markierung liegt rechts der ersten Sehne
    pub right_side: bool,
    pub shapes: Vec<OverlayShape>,
    pub tooltip: Tooltip,
}

/// Gesamtes Overlay eines Frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayGeometry {
    pub dashed_lines: Vec<DashedLine>,
    pub tooltips: Vec<Tooltip>,
    pub angle: Option<AngleIndicator>,
}

impl OverlayGeometry {
    pub fn is_empty(&self) -> bool {
        self.dashed_lines.is_empty()
            && self.tooltips.is_empty()
            && self.angle.is_none()
    }

    /// Gestrichelte Linie mit Längen-Tooltip.
    ///
    /// Erst ab einer XZ-Distanz von `8 × Linienbreite`; beide Enden werden um
    /// `4 × Linienbreite` eingekürzt.
    pub fn add_dashed_line(&mut self, start: Vec3, end: Vec3) {
        let width = OVERLAY_LINE_WIDTH;
        let distance = distance_xz(start, end);
        if distance <= width * 8.0 {
            return;
        }

        let offset = (end - start) * (width * 4.0 / distance);
        self.dashed_lines.push(DashedLine {
            segment: Segment3::new(start + offset, end - offset),
            width: width * 3.0,
            dash_length: width * 5.0,
            gap_length: width * 3.0,
        });

        let length = distance.round() as i32;
        if length > 0 {
            self.tooltips.push(Tooltip {
                kind: TooltipKind::Length,
                position: (start + end) * 0.5,
                value: length,
            });
        }
    }
}

// ── Winkel-Indikator ─────────────────────────────────────────

fn offset(base: Vec3, delta: Vec2) -> Vec3 {
    base + Vec3::new(delta.x, 0.0, delta.y)
}

fn flat(v: Vec2) -> Vec3 {
    Vec3::new(v.x, 0.0, v.y)
}

/// Baut die Winkel-Markierung am gemeinsamen Punkt `line1.b == line2.a`.
///
/// Nur wenn beide Sehnen länger als `7 × width` sind. Ein Winkel von 0° ergibt
/// keine Markierung.
pub fn angle_indicator(
    line1: Segment3,
    line2: Segment3,
    width: f32,
    length: f32,
) -> Option<AngleIndicator> {
    let len1 = line1.length_xz();
    let len2 = line2.length_xz();
    if !(len1 > width * 7.0 && len2 > width * 7.0) {
        return None;
    }

    let dir1 = (xz(line1.b) - xz(line1.a)) / len1;
    let dir2 = (xz(line2.a) - xz(line2.b)) / len2;
    let size = length.min(len1.min(len2)) * 0.5;
    let angle = angle_between_degrees(dir1, dir2);
    let right_side = angle < 180 && right(dir1).dot(dir2) < 0.0;
    let side = |v: Vec2| if right_side { right(v) } else { left(v) };

    let elbow = line1.b;
    let joint = line2.a;
    let half = width * 0.5;
    let mut shapes = Vec::new();
    let line = |a: Vec3, b: Vec3| OverlayShape::Line {
        segment: Segment3::new(a, b),
        width,
    };

    let (kind, tooltip_pos) = if angle == 180 {
        let a1 = side(dir1);
        let a2 = side(dir2);
        shapes.push(line(
            offset(elbow, -dir1 * size),
            offset(elbow, a1 * (size - half) - dir1 * size),
        ));
        shapes.push(line(
            offset(elbow, a1 * size - dir1 * (size + half)),
            offset(joint, -a2 * size - dir2 * (size + half)),
        ));
        shapes.push(line(
            offset(joint, -a2 * (size - half) - dir2 * size),
            offset(joint, -dir2 * size),
        ));
        (AngleKind::Straight, offset(elbow, a1 * size * 1.5))
    } else if angle > 90 {
        let mid_dir = (dir1 + dir2).normalize_or_zero();
        let start_point = offset(elbow, -dir1 * size);
        let mid_point = offset(elbow, -mid_dir * size);
        let end_point = offset(joint, -dir2 * size);
        let start_tangent = flat(side(dir1));
        let mid_tangent = flat(side(mid_dir));
        let end_tangent = flat(side(dir2));
        shapes.push(OverlayShape::Curve {
            curve: fit_curve_with_tangents(start_point, start_tangent, mid_tangent, mid_point),
            width,
        });
        shapes.push(OverlayShape::Curve {
            curve: fit_curve_with_tangents(mid_point, mid_tangent, end_tangent, end_point),
            width,
        });
        (AngleKind::Obtuse, offset(elbow, -mid_dir * size * 1.5))
    } else if angle == 90 {
        shapes.push(line(
            offset(elbow, -dir1 * size),
            offset(elbow, -(dir2 * (size - half) + dir1 * size)),
        ));
        shapes.push(line(
            offset(elbow, -(dir2 * size + dir1 * (size + half))),
            offset(joint, -dir2 * size),
        ));
        let mid_dir = (dir1 + dir2).normalize_or_zero();
        (AngleKind::Right, offset(elbow, -mid_dir * size * 1.5))
    } else if angle > 0 {
        let start_point = offset(elbow, -dir1 * size);
        let end_point = offset(joint, -dir2 * size);
        shapes.push(OverlayShape::Curve {
            curve: fit_curve_with_tangents(
                start_point,
                flat(side(dir1)),
                flat(side(dir2)),
                end_point,
            ),
            width,
        });
        let mid_dir = (dir1 + dir2).normalize_or_zero();
        (AngleKind::Acute, offset(elbow, -mid_dir * size * 1.5))
    } else {
        return None;
    };

    Some(AngleIndicator {
        angle,
        kind,
        right_side,
        shapes,
        tooltip: Tooltip {
            kind: TooltipKind::Angle,
            position: tooltip_pos,
            value: angle,
        },
    })
}
