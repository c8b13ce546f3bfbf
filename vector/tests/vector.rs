use std::mem::size_of;

use vector::{Vector, Vector2d, Vector2f, Vector3d, Vector3i, Vector4d, Vector4i, dot, norm_squared, vector};

#[test]
fn storage_is_minimum() {
    assert_eq!(size_of::<Vector3d>(), 3 * size_of::<f64>());
    assert_eq!(size_of::<Vector<i32, 10>>(), 10 * size_of::<i32>());
    assert_eq!(size_of::<Vector<u8, 1>>(), 1);
    assert_eq!(size_of::<Vector<i128, 7>>(), 7 * size_of::<i128>());
}

#[test]
fn packs_into_a_flat_buffer() {
    let points = [Vector2f::new([1.0, 2.0]), Vector2f::new([3.0, 4.0])];
    let flat: Vec<f32> = points.iter().flat_map(|p| p.as_slice().iter().copied()).collect();
    assert_eq!(flat, [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn constructors() {
    let a = Vector2d::default();
    let b = Vector2d::zero();
    let c = Vector2d::new([0.0, 0.0]);
    let d = Vector::<f64, 5>::new([-3.0, -1.5, 0.0, 1.5, 3.0]);
    let e: Vector<f64, 5> = vector![-3.0, -1.5, 0.0, 1.5, 3.0];
    let f = Vector::<f64, 5>::from([-3.0, -1.5, 0.0, 1.5, 3.0]);
    let g = Vector::<f64, 5>::from_fn(|i| -3.0 + 1.5 * i as f64);
    let h = Vector3i::new([-1, 0, 1]);
    let i = h;
    let j = i;

    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(d, e);
    assert_eq!(e, f);
    assert_eq!(f, g);
    assert_eq!(h, i);
    assert_eq!(h, j);
    assert_eq!(Vector3i::DIMENSION, 3);
}

#[test]
fn constants() {
    assert_eq!(Vector4i::zero(), vector![0, 0, 0, 0]);
    assert_eq!(Vector4i::unit_x(), vector![1, 0, 0, 0]);
    assert_eq!(Vector4i::unit_y(), vector![0, 1, 0, 0]);
    assert_eq!(Vector4i::unit_z(), vector![0, 0, 1, 0]);
    assert_eq!(Vector4i::unit_w(), vector![0, 0, 0, 1]);
    assert_eq!(Vector::<i32, 5>::unit(4), vector![0, 0, 0, 0, 1]);

    assert_eq!(Vector4i::unit_x(), Vector4i::unit(0));
    assert_eq!(Vector4i::unit_w(), Vector4i::unit(3));
    assert_eq!(Vector::<f32, 2>::unit_y(), vector![0.0, 1.0]);
}

#[test]
fn assignment() {
    let mut a = Vector2f::new([-1.0, -1.0]);
    let mut b = Vector2f::new([0.0, 1.0]);
    a = b;
    b = [2.0, 3.0].into();

    assert_eq!(a, vector![0.0, 1.0]);
    assert_eq!(b, vector![2.0, 3.0]);
}

#[test]
fn accessors() {
    let mut a = Vector4d::new([1.0; 4]);
    let mut b = Vector4d::new([2.0; 4]);
    let mut c = Vector4d::new([3.0; 4]);
    let mut d = Vector4d::new([4.0; 4]);

    a[0] = -1.0;
    a[1] = -0.5;
    a[2] = 0.0;
    a[3] = 0.5;

    *b.at_mut(0) = a[0];
    *b.at_mut(1) = a[1];
    *b.at_mut(2) = a[2];
    *b.at_mut(3) = a[3];

    *c.x_mut() = *b.at(0);
    *c.y_mut() = *b.at(1);
    *c.z_mut() = *b.at(2);
    *c.w_mut() = *b.at(3);

    d[0] = c.x();
    d[1] = c.y();
    d[2] = c.z();
    d[3] = c.w();

    assert_eq!(a, vector![-1.0, -0.5, 0.0, 0.5]);
    assert_eq!(b, a);
    assert_eq!(c, b);
    assert_eq!(d, c);
}

#[test]
fn arithmetic_operators() {
    let a = Vector3d::new([-1.0, -2.0, 3.0]);
    let b = Vector3d::new([1.0, 1.0, 1.0]);

    assert_eq!(-a, vector![1.0, 2.0, -3.0]);
    assert_eq!(a + b, vector![0.0, -1.0, 4.0]);
    assert_eq!(a - b, vector![-2.0, -3.0, 2.0]);
    assert_eq!(a * 1.5, vector![-1.5, -3.0, 4.5]);
    assert_eq!(-1.5 * a, vector![1.5, 3.0, -4.5]);
    assert_eq!(b / 0.5, vector![2.0, 2.0, 2.0]);
    assert_eq!(a * vector![2.0, -1.0, 0.0], vector![-2.0, 2.0, 0.0]);
    assert_eq!(a / vector![-1.0, 4.0, 2.0], vector![1.0, -0.5, 1.5]);
}

#[test]
fn reversed_scalar_product_for_every_scalar() {
    assert_eq!(3_u8 * Vector::new([1_u8, 2]), vector![3, 6]);
    assert_eq!(2_i16 * Vector::new([-4_i16]), vector![-8]);
    assert_eq!(2_u64 * Vector::new([5_u64, 0, 1]), vector![10, 0, 2]);
    assert_eq!(0.5_f32 * Vector::new([4.0_f32, 8.0]), vector![2.0, 4.0]);
    assert_eq!(3_usize * Vector::new([1_usize]), Vector::new([1_usize]) * 3);
}

#[test]
fn comparison_operators() {
    let a = Vector3d::new([-1.0, -2.0, 3.0]);
    let b = Vector3d::new([-1.0, -2.0, 3.0]);
    let c = Vector3d::new([-1.0, -3.0, 3.0]);

    assert!(b == a);
    assert!(c != a);
    assert!(c < b);
    assert!(b > c);
    assert!(a <= b);
    assert!(a >= b);
}

#[test]
fn dot_product() {
    assert_eq!(dot(&vector![1, 0, 0], &vector![1, 0, 0]), 1);
    assert_eq!(dot(&vector![1, 0, 0], &vector![0, 1, 0]), 0);
    assert_eq!(dot(&vector![1, 0, 0], &vector![-1, 0, 0]), -1);
    assert_eq!(dot(&vector![1, 2, 3], &vector![4, 5, 6]), 32);
    assert_eq!(norm_squared(&Vector3i::new([1, 2, 3])), 14);
}

#[test]
fn copies_are_independent() {
    let original = Vector3i::new([1, 2, 3]);
    let mut copy = original;
    copy[0] = 100;
    *copy.z_mut() += 1;
    copy *= 2;

    assert_eq!(original, vector![1, 2, 3]);
    assert_eq!(copy, vector![200, 4, 8]);
}

#[test]
fn display() {
    assert_eq!(Vector3d::new([-1.5, -3.0, 4.5]).to_string(), "(-1.5, -3, 4.5)");
    assert_eq!(format!("{}", Vector4i::unit_z()), "(0, 0, 1, 0)");
}
