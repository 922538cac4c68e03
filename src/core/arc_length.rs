//! Arc-Length-Parametrisierung kubischer Bézier-Kurven in der XZ-Ebene.
//!
//! - [`arc_length_xz`]: Bogenlänge zwischen zwei Parametern (Gauss-Legendre, n = 4)
//! - [`step`]: Parameter nach einer gegebenen Wegstrecke (Bisektion + Newton)
//!
//! Die Höhe (Y) geht nicht in die Distanzen ein. Beide Iterationen sind hart
//! begrenzt (8 Bisektions-, 12 Newton-Schritte); ein verbleibender Restfehler
//! wird ohne Fehlermeldung akzeptiert. Das Ergebnis von [`step`] wird nicht auf
//! `[0, 1]` geklemmt; Aufrufer erkennen das Kurvenende an `t >= 1`.

use super::bezier::Bezier4x3;
use super::math::xz;

/// Gauss-Legendre-Stützstellen und Gewichte für n = 4: (x_i, w_i)
const GAUSS_LEGENDRE_4: [(f32, f32); 4] = [
    (0.339_981_04, 0.652_145_15),
    (-0.339_981_04, 0.652_145_15),
    (0.861_136_3, 0.347_854_85),
    (-0.861_136_3, 0.347_854_85),
];

/// Maximale Bisektionsschritte für die Startschätzung.
pub const TRAVEL_ITERATIONS: usize = 8;
/// Maximale Newton-Schritte pro Schritt-Berechnung.
pub const STEP_ITERATIONS: usize = 12;
/// Abbruchtoleranz der Newton-Iteration in Welteinheiten.
pub const STEP_TOLERANCE: f32 = 1e-3;

/// Betrag der Ableitung in der XZ-Ebene: Integrand der Bogenlänge.
pub fn speed_xz(curve: &Bezier4x3, t: f32) -> f32 {
    xz(curve.tangent(t)).length()
}

/// XZ-Bogenlänge zwischen `t1` und `t2`.
///
/// Vorzeichenbehaftet: für `t2 < t1` ist das Ergebnis negativ.
pub fn arc_length_xz(curve: &Bezier4x3, t1: f32, t2: f32) -> f32 {
    let half_range = (t2 - t1) * 0.5;
    let mid = (t1 + t2) * 0.5;
    let sum: f32 = GAUSS_LEGENDRE_4
        .iter()
        .map(|&(x_i, w_i)| w_i * speed_xz(curve, half_range * x_i + mid))
        .sum();
    half_range * sum
}

/// Startschätzung: Parameter, dessen Luftlinien-Abstand (XZ) zu `B(start)`
/// ungefähr `|distance|` beträgt.
///
/// Positive Distanz sucht zwischen `start` und 1, negative zwischen 0 und `start`.
/// Verglichen werden quadrierte Abstände; das Ergebnis wird zwischen den
/// beiden letzten Intervallgrenzen linear interpoliert.
pub fn travel(curve: &Bezier4x3, start: f32, distance: f32) -> f32 {
    let start_pos = xz(curve.position(start));
    let sq_dist = |t: f32| xz(curve.position(t)).distance_squared(start_pos);

    if distance < 0.0 {
        let target = -distance;
        let target_sq = target * target;
        // t_far liegt Richtung Kurvenanfang, t_near Richtung Startpunkt
        let (mut t_far, mut t_near) = (0.0f32, start);
        let (mut f_far, mut f_near) = (xz(curve.a).distance_squared(start_pos), 0.0f32);

        for _ in 0..TRAVEL_ITERATIONS {
            let t_mid = (t_far + t_near) * 0.5;
            let mid = sq_dist(t_mid);
            if mid < target_sq {
                t_near = t_mid;
                f_near = mid;
            } else {
                t_far = t_mid;
                f_far = mid;
            }
        }

        let (f_far, f_near) = (f_far.sqrt(), f_near.sqrt());
        let f_diff = f_far - f_near;
        if f_diff == 0.0 {
            return t_near;
        }
        lerp(t_near, t_far, ((target - f_near) / f_diff).clamp(0.0, 1.0))
    } else {
        let target_sq = distance * distance;
        let (mut t_near, mut t_far) = (start, 1.0f32);
        let (mut f_near, mut f_far) = (0.0f32, xz(curve.d).distance_squared(start_pos));

        for _ in 0..TRAVEL_ITERATIONS {
            let t_mid = (t_near + t_far) * 0.5;
            let mid = sq_dist(t_mid);
            if mid < target_sq {
                t_near = t_mid;
                f_near = mid;
            } else {
                t_far = t_mid;
                f_far = mid;
            }
        }

        let (f_near, f_far) = (f_near.sqrt(), f_far.sqrt());
        let f_diff = f_far - f_near;
        if f_diff == 0.0 {
            return t_near;
        }
        lerp(t_near, t_far, ((distance - f_near) / f_diff).clamp(0.0, 1.0))
    }
}

/// Parameter `t_end` mit `arc_length_xz(t_start, t_end) ≈ distance`.
///
/// Negative Distanzen laufen rückwärts. Die Newton-Verfeinerung bricht ab,
/// sobald der Restfehler unter [`STEP_TOLERANCE`] liegt, nach
/// [`STEP_ITERATIONS`] Schritten, oder wenn die Kurvengeschwindigkeit
/// verschwindet.
pub fn step(curve: &Bezier4x3, t_start: f32, distance: f32) -> f32 {
    let mut t_end = travel(curve, t_start, distance);
    let mut used = arc_length_xz(curve, t_start, t_end);

    for _ in 0..STEP_ITERATIONS {
        let remaining = distance - used;
        if remaining * remaining < STEP_TOLERANCE * STEP_TOLERANCE {
            break;
        }
        let speed = speed_xz(curve, t_end);
        if speed <= f32::EPSILON {
            break;
        }
        t_end += remaining / speed;
        used = arc_length_xz(curve, t_start, t_end);
    }

    t_end
}

/// Rückwärtsschritt vom Kurvenende: `t` mit `arc_length_xz(t, 1) ≈ distance`.
pub fn step_reverse(curve: &Bezier4x3, distance: f32) -> f32 {
    step(curve, 1.0, -distance)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
