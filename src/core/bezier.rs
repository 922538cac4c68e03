//! Kubische Bézier-Kurven im Raum und Kurven-Fitting aus Sehnen/Tangenten.

use super::math::xz;
use glam::Vec3;

/// Liniensegment `a → b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment3 {
    pub a: Vec3,
    pub b: Vec3,
}

impl Segment3 {
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self { a, b }
    }

    /// Horizontale Länge (XZ).
    pub fn length_xz(&self) -> f32 {
        xz(self.a).distance(xz(self.b))
    }
}

/// Kubische Bézier-Kurve mit den Kontrollpunkten `a`, `b`, `c`, `d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bezier4x3 {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    pub d: Vec3,
}

impl Bezier4x3 {
    pub fn new(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Self {
        Self { a, b, c, d }
    }

    /// B(t) = (1-t)³·A + 3(1-t)²t·B + 3(1-t)t²·C + t³·D
    ///
    /// `t` außerhalb von `[0, 1]` extrapoliert das Polynom.
    pub fn position(&self, t: f32) -> Vec3 {
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        inv2 * inv * self.a + 3.0 * inv2 * t * self.b + 3.0 * inv * t2 * self.c + t2 * t * self.d
    }

    /// B'(t) = 3(1-t)²·(B-A) + 6(1-t)t·(C-B) + 3t²·(D-C)
    pub fn tangent(&self, t: f32) -> Vec3 {
        let inv = 1.0 - t;
        3.0 * inv * inv * (self.b - self.a)
            + 6.0 * inv * t * (self.c - self.b)
            + 3.0 * t * t * (self.d - self.c)
    }
}

/// Kubische Kurve aus zwei Sehnen mit gemeinsamem Endpunkt (Ellbogen).
///
/// `line1 = start → elbow`, `line2 = end → elbow`. Die Kurve ist die
/// gradangehobene quadratische Bézier mit dem Ellbogen als Steuerpunkt:
/// tangential zu `line1` am Start und zu `line2` am Ende.
pub fn fit_curve(line1: Segment3, line2: Segment3) -> Bezier4x3 {
    let start = line1.a;
    let end = line2.a;
    let b = start + (line1.b - start) * (2.0 / 3.0);
    let c = end + (line2.b - end) * (2.0 / 3.0);
    Bezier4x3::new(start, b, c, end)
}

/// Kubische Kurve aus Endpunkten und Tangentenrichtungen.
///
/// `end_tangent` ist die Bewegungsrichtung beim Ankommen am Ende.
/// Schneiden sich die Tangentenstrahlen vor bzw. hinter den Endpunkten, wird
/// der Schnittpunkt als quadratischer Steuerpunkt verwendet; sonst werden die
/// Steuerpunkte im Abstand Sehne/3 entlang der Tangenten gesetzt.
pub fn fit_curve_with_tangents(
    start: Vec3,
    start_tangent: Vec3,
    end_tangent: Vec3,
    end: Vec3,
) -> Bezier4x3 {
    let ts = xz(start_tangent).normalize_or_zero();
    let te = xz(end_tangent).normalize_or_zero();
    let r = xz(end) - xz(start);

    let det = ts.x * te.y - ts.y * te.x;
    if det.abs() > 1e-6 {
        let u = (r.x * te.y - r.y * te.x) / det;
        let v = (ts.x * r.y - ts.y * r.x) / det;
        if u > 0.0 && v > 0.0 {
            let corner = xz(start) + ts * u;
            let elbow = Vec3::new(corner.x, (start.y + end.y) * 0.5, corner.y);
            return fit_curve(Segment3::new(start, elbow), Segment3::new(end, elbow));
        }
    }

    let third = r.length() / 3.0;
    Bezier4x3::new(
        start,
        start + Vec3::new(ts.x, 0.0, ts.y) * third,
        end - Vec3::new(te.x, 0.0, te.y) * third,
        end,
    )
}
