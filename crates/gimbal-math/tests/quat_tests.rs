// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, PI, TAU};
use gimbal_math::{Degrees, Mat4, Quat, Radians, Vec3};

const EPS: f32 = 1e-5;

fn approx_eq3(a: Vec3, b: [f32; 3]) {
    for (i, (x, y)) in a.to_array().iter().zip(b.iter()).enumerate() {
        assert!((x - y).abs() <= EPS, "index {i}: {a} vs {b:?}");
    }
}

fn approx_quat(a: Quat, b: Quat) {
    let pairs = [(a.w(), b.w()), (a.x(), b.x()), (a.y(), b.y()), (a.z(), b.z())];
    for (i, (x, y)) in pairs.iter().enumerate() {
        assert!((x - y).abs() <= EPS, "component {i}: {a} vs {b}");
    }
}

#[test]
fn axis_angle_construction_does_not_normalize_the_axis() {
    let q = Quat::from_axis_angle(Radians(PI), Vec3::new(0.0, 2.0, 0.0));
    assert!(q.w().abs() <= EPS);
    assert!((q.y() - 2.0).abs() <= EPS);
    assert!((q.magnitude() - 2.0).abs() <= EPS);
}

#[test]
fn identity_and_default() {
    assert_eq!(Quat::default(), Quat::identity());
    assert_eq!(Quat::identity().to_mat4(), Mat4::identity());
    approx_eq3(Quat::identity().rotate_vector(Vec3::new(1.0, 2.0, 3.0)), [1.0, 2.0, 3.0]);
}

#[test]
fn normalize_in_place_and_copy() {
    let mut q = Quat::new(2.0, 0.0, 0.0, 0.0);
    let copy = q.normalized();
    assert_eq!(q.w(), 2.0);
    q.normalize();
    assert_eq!(q, copy);
    assert_eq!(q, Quat::identity());
    assert!((Quat::new(1.0, 1.0, 1.0, 1.0).normalized().sq_magnitude() - 1.0).abs() <= EPS);
}

#[test]
fn conjugate_is_pure_and_in_place_variant_mutates() {
    let q = Quat::new(0.5, 0.1, -0.2, 0.3);
    let c = q.conjugate();
    assert_eq!(q.x(), 0.1);
    assert_eq!((c.w(), c.x(), c.y(), c.z()), (0.5, -0.1, 0.2, -0.3));

    let mut m = q;
    m.conjugate_in_place();
    assert_eq!(m, c);
}

#[test]
fn hamilton_product_of_basis_units() {
    let i = Quat::new(0.0, 1.0, 0.0, 0.0);
    let j = Quat::new(0.0, 0.0, 1.0, 0.0);
    let k = Quat::new(0.0, 0.0, 0.0, 1.0);
    assert_eq!(i * j, k);
    assert_eq!(j * i, Quat::new(0.0, 0.0, 0.0, -1.0));
    assert_eq!(i * i, Quat::new(-1.0, 0.0, 0.0, 0.0));

    let mut acc = i;
    acc += j;
    assert_eq!(acc, Quat::new(0.0, 1.0, 1.0, 0.0));
    assert_eq!(i + k, Quat::new(0.0, 1.0, 0.0, 1.0));
}

#[test]
fn rotate_pre_multiplies_in_world_space() {
    let mut q = Quat::from_axis_angle(FRAC_PI_2, Vec3::UNIT_X);
    q.rotate(FRAC_PI_2, Vec3::UNIT_Y);
    let expected = Quat::from_axis_angle(FRAC_PI_2, Vec3::UNIT_Y)
        * Quat::from_axis_angle(FRAC_PI_2, Vec3::UNIT_X);
    approx_quat(q, expected);
    assert!((q.sq_magnitude() - 1.0).abs() <= 1e-4);
}

#[test]
fn rotate_wraps_negative_and_large_angles() {
    let mut a = Quat::identity();
    a.rotate(-FRAC_PI_2, Vec3::UNIT_Z);
    let mut b = Quat::identity();
    b.rotate(TAU - FRAC_PI_2, Vec3::UNIT_Z);
    approx_quat(a, b);

    let mut c = Quat::identity();
    c.rotate(TAU + 0.25, Vec3::UNIT_Z);
    let mut d = Quat::identity();
    d.rotate(0.25_f32, Vec3::UNIT_Z);
    approx_quat(c, d);
}

#[test]
fn rotate_normalizes_the_increment() {
    let axis = Vec3::new(0.0, 5.0, 0.0);
    let mut a = Quat::identity();
    a.rotate(0.8_f32, axis);
    approx_quat(a, Quat::from_axis_angle(0.8_f32, axis).normalized());
    assert!((a.magnitude() - 1.0).abs() <= EPS);
}

#[test]
fn drifted_quaternion_is_renormalized_by_rotate() {
    let mut q = Quat::new(1.1, 0.0, 0.0, 0.0);
    q.rotate(0.0_f32, Vec3::UNIT_X);
    assert!((q.magnitude() - 1.0).abs() <= EPS);
}

#[test]
fn matrix_and_sandwich_agree() {
    let q = Quat::from_axis_angle(0.9_f32, Vec3::new(1.0, 2.0, -1.0).normal());
    let v = Vec3::new(0.3, -1.2, 2.5);
    let by_matrix = q.to_mat4().transform_point(v);
    let by_sandwich = q.rotate_vector(v);
    approx_eq3(by_matrix, by_sandwich.to_array());
    approx_eq3(q * v, by_sandwich.to_array());
    assert!((by_sandwich.magnitude() - v.magnitude()).abs() <= EPS);
}

#[test]
fn quaternion_matrix_matches_axis_rotation_matrix() {
    let q = Quat::from_axis_angle(Degrees(30.0), Vec3::UNIT_Z);
    let m = Mat4::rotation_z(Degrees(30.0));
    for (a, b) in q.to_mat4().to_array().iter().zip(m.to_array().iter()) {
        assert!((a - b).abs() <= EPS);
    }
}

#[test]
fn rotate_about_normalizes_the_axis() {
    let v = Quat::rotate_about(FRAC_PI_2, Vec3::UNIT_X, Vec3::new(0.0, 0.0, 3.0));
    approx_eq3(v, [0.0, 1.0, 0.0]);
    // A zero axis leaves the vector untouched.
    approx_eq3(Quat::rotate_about(1.0_f32, Vec3::UNIT_X, Vec3::ZERO), [1.0, 0.0, 0.0]);
}

#[test]
fn directional_accessors() {
    let id = Quat::identity();
    approx_eq3(id.forward(), [0.0, 0.0, 1.0]);
    approx_eq3(id.back(), [0.0, 0.0, -1.0]);
    approx_eq3(id.up(), [0.0, 1.0, 0.0]);
    approx_eq3(id.down(), [0.0, -1.0, 0.0]);
    approx_eq3(id.right(), [1.0, 0.0, 0.0]);
    approx_eq3(id.left(), [-1.0, 0.0, 0.0]);

    // Yawing a quarter turn about +Y brings forward onto +X.
    let yawed = Quat::from_axis_angle(FRAC_PI_2, Vec3::UNIT_Y);
    approx_eq3(yawed.forward(), [1.0, 0.0, 0.0]);
    approx_eq3(yawed.right(), [0.0, 0.0, -1.0]);
    approx_eq3(yawed.up(), [0.0, 1.0, 0.0]);
}

#[test]
fn euler_composition_is_yaw_pitch_roll() {
    let (yaw, pitch, roll) = (0.4_f32, -0.3_f32, 1.2_f32);
    let q = Quat::from_euler(yaw, pitch, roll);
    let expected = Quat::from_axis_angle(yaw, Vec3::UNIT_Y)
        * Quat::from_axis_angle(pitch, Vec3::UNIT_X)
        * Quat::from_axis_angle(roll, Vec3::UNIT_Z);
    approx_quat(q, expected);

    let mut s = Quat::identity();
    s.set_euler_angles(Degrees(90.0), Degrees(0.0), Degrees(0.0));
    approx_eq3(s.forward(), [1.0, 0.0, 0.0]);

    // Vector form reads (x = pitch, y = yaw, z = roll).
    approx_quat(Quat::from_euler_vec(Vec3::new(pitch, yaw, roll)), q);
    approx_quat(
        Quat::from_euler_vec_deg(Vec3::new(0.0, 90.0, 0.0)),
        Quat::from_euler(FRAC_PI_2, 0.0_f32, 0.0_f32),
    );
}

#[test]
fn roll_acts_before_pitch_and_yaw() {
    // Roll a quarter turn then yaw a quarter turn: +X -> +Y -> +Y.
    let q = Quat::from_euler(FRAC_PI_2, 0.0_f32, FRAC_PI_2);
    approx_eq3(q.rotate_vector(Vec3::UNIT_X), [0.0, 1.0, 0.0]);
    // Pitch a quarter turn then yaw a quarter turn: +Y -> +Z -> +X.
    let p = Quat::from_euler(FRAC_PI_2, FRAC_PI_2, 0.0_f32);
    approx_eq3(p.rotate_vector(Vec3::UNIT_Y), [1.0, 0.0, 0.0]);
}

#[test]
fn to_vector_returns_the_imaginary_part() {
    assert_eq!(Quat::new(9.0, 1.0, 2.0, 3.0).to_vector().to_array(), [1.0, 2.0, 3.0]);
}
