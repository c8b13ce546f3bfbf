use nalgebra::SMatrix;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use vector::{Vector, Vector2i, Vector3d, dot, norm, vector};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

/// Gram-Schmidt over three vectors, the way a small fixed-size solver would use them.
fn orthonormalize(basis: [Vector3d; 3]) -> Option<[Vector3d; 3]> {
    let mut out = [Vector3d::zero(); 3];
    for (i, v) in basis.into_iter().enumerate() {
        let mut u = v;
        for e in &out[..i] {
            u -= *e * dot(&v, e);
        }
        let length = norm(&u);
        if length < 1e-12 {
            warn!(index = i, "basis vector is linearly dependent on the previous ones");
            return None;
        }
        out[i] = u / length;
        debug!(index = i, vector = %out[i], "orthonormalized");
    }
    Some(out)
}

fn main() {
    init_logging();

    let a: Vector3d = vector![-1.0, -2.0, 3.0];
    let b = Vector3d::new([1.0, 1.0, 1.0]);

    info!("a = {a}, b = {b}");
    info!("a + b = {}", a + b);
    info!("a - b = {}", a - b);
    info!("a * 1.5 = {}", a * 1.5);
    info!("-1.5 * a = {}", -1.5 * a);
    info!("a . b = {}, |a| = {:.4}", dot(&a, &b), norm(&a));

    if let Some(frame) = orthonormalize([a, b, Vector3d::unit_z()]) {
        let m = SMatrix::<f64, 3, 3>::from_columns(&frame.map(|e| e.to_svector()));
        let residual = (m.transpose() * m - SMatrix::<f64, 3, 3>::identity()).norm();
        info!(residual, "orthonormal frame: {:.3}, {:.3}, {:.3}", frame[0], frame[1], frame[2]);
    }

    let mut points: Vec<Vector2i> = (0..6).map(|i| Vector::new([(i * 7) % 4, 3 - i])).collect();
    points.sort();
    let listing: Vec<String> = points.iter().map(ToString::to_string).collect();
    info!("sorted points: {}", listing.join(" "));
}
