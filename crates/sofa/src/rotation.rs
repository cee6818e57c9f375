//! Rotation vectors, rotation matrices, and spherical coordinates.

/// Forms the rotation matrix corresponding to a rotation vector.
///
/// The vector's direction is the Euler axis and its magnitude the rotation
/// angle in radians. The frame rotates clockwise as seen looking along the
/// vector from the origin. A null vector gives the identity matrix.
#[must_use]
pub fn rotation_vector_to_matrix(w: [f64; 3]) -> [[f64; 3]; 3] {
    let [mut x, mut y, mut z] = w;
    let phi = (x * x + y * y + z * z).sqrt();
    let s = phi.sin();
    let c = phi.cos();
    let f = 1.0 - c;

    if phi > 0.0 {
        x /= phi;
        y /= phi;
        z /= phi;
    }

    [
        [x * x * f + c, x * y * f + z * s, x * z * f - y * s],
        [y * x * f - z * s, y * y * f + c, y * z * f + x * s],
        [z * x * f + y * s, z * y * f - x * s, z * z * f + c],
    ]
}

/// Expresses a rotation matrix as a rotation vector.
///
/// The inverse of [`rotation_vector_to_matrix`] for proper orthogonal
/// matrices. The identity matrix gives a null vector.
#[must_use]
pub fn rotation_matrix_to_vector(r: &[[f64; 3]; 3]) -> [f64; 3] {
    let x = r[1][2] - r[2][1];
    let y = r[2][0] - r[0][2];
    let z = r[0][1] - r[1][0];
    let s2 = (x * x + y * y + z * z).sqrt();

    if s2 > 0.0 {
        let c2 = r[0][0] + r[1][1] + r[2][2] - 1.0;
        let phi = s2.atan2(c2);
        let f = phi / s2;
        [x * f, y * f, z * f]
    } else {
        [0.0; 3]
    }
}

/// Converts spherical coordinates to a unit Cartesian vector.
///
/// `theta` is the longitude angle and `phi` the latitude angle, both in
/// radians.
#[must_use]
pub fn spherical_to_cartesian(theta: f64, phi: f64) -> [f64; 3] {
    let cp = phi.cos();
    [theta.cos() * cp, theta.sin() * cp, phi.sin()]
}

/// Converts a Cartesian vector to spherical coordinates `(theta, phi)`.
///
/// A vector along the pole gives `theta = 0`; a null vector gives `(0, 0)`.
#[must_use]
pub fn cartesian_to_spherical(p: [f64; 3]) -> (f64, f64) {
    let [x, y, z] = p;
    let d2 = x * x + y * y;

    let theta = if d2 == 0.0 { 0.0 } else { y.atan2(x) };
    let phi = if z == 0.0 { 0.0 } else { z.atan2(d2.sqrt()) };
    (theta, phi)
}
