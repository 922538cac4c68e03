//! Kleine Vektor-Hilfen für die XZ-Ebene (Y = Höhe).

use glam::{Quat, Vec2, Vec3};

/// Projiziert eine Weltposition auf die horizontale Ebene.
#[inline]
pub fn xz(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Horizontaler Abstand zweier Weltpositionen.
#[inline]
pub fn distance_xz(a: Vec3, b: Vec3) -> f32 {
    xz(a).distance(xz(b))
}

/// Rotation um die Y-Achse (Yaw, Radiant).
#[inline]
pub fn yaw_rotation(radians: f32) -> Quat {
    Quat::from_rotation_y(radians)
}

/// Yaw, bei dem die lokale +Z-Achse entlang `direction` zeigt.
///
/// Entspricht `atan2(Δx, Δz)`; Objekte "schauen" entlang der Linie.
#[inline]
pub fn heading_yaw(direction: Vec3) -> f32 {
    direction.x.atan2(direction.z)
}

/// Rechte Senkrechte in der XZ-Draufsicht.
#[inline]
pub fn right(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// Linke Senkrechte in der XZ-Draufsicht.
#[inline]
pub fn left(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Horizontale Einheits-Normale zu `direction` (Y bleibt 0).
///
/// Gibt `Vec3::ZERO` zurück wenn `direction` keine horizontale Komponente hat.
pub fn lateral_normal(direction: Vec3) -> Vec3 {
    let perp = left(xz(direction)).normalize_or_zero();
    Vec3::new(perp.x, 0.0, perp.y)
}

/// Winkel zwischen zwei Richtungen in Grad (gerundet), robust gegen Rundungsfehler.
pub fn angle_between_degrees(a: Vec2, b: Vec2) -> i32 {
    a.dot(b).clamp(-1.0, 1.0).acos().to_degrees().round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_heading_yaw_faces_along_line() {
        let yaw = heading_yaw(Vec3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(yaw, std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
        let forward = yaw_rotation(yaw) * Vec3::Z;
        assert_abs_diff_eq!(forward.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(forward.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_lateral_normal_is_horizontal_unit() {
        let n = lateral_normal(Vec3::new(3.0, 5.0, 4.0));
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-6);
        assert_eq!(n.y, 0.0);
        assert_abs_diff_eq!(n.x * 3.0 + n.z * 4.0, 0.0, epsilon = 1e-6);
        assert_eq!(lateral_normal(Vec3::Y), Vec3::ZERO);
    }

    #[test]
    fn test_angle_between_degrees() {
        assert_eq!(angle_between_degrees(Vec2::X, Vec2::Y), 90);
        assert_eq!(angle_between_degrees(Vec2::X, -Vec2::X), 180);
        assert_eq!(angle_between_degrees(Vec2::X, Vec2::new(1.0, 1.0).normalize()), 45);
    }
}
