// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]
use core::f32::consts::FRAC_PI_2;
use tread_core::math::{Axis, EulerAngles, Matrix, Radians, Shear, Vec3, Vec4, Winding};
use tread_core::MathError;

const EPS: f32 = 1e-5;

fn approx_eq_slice(a: &[f32], b: &[f32]) {
    assert_eq!(a.len(), b.len());
    for i in 0..a.len() {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

fn approx3(a: Vec3, b: [f32; 3]) {
    approx_eq_slice(&a.to_array(), &b);
}

#[test]
fn multiply_rejects_incompatible_shapes() {
    let a = Matrix::identity(4);
    let b = Matrix::zeros(3, 2);
    let err = a.multiply(&b).unwrap_err();
    assert_eq!(
        err,
        MathError::DimensionMismatch {
            op: "multiply",
            lhs_rows: 4,
            lhs_cols: 4,
            rhs_rows: 3,
            rhs_cols: 2,
        }
    );
}

#[test]
fn add_rejects_different_shapes() {
    let err = Matrix::identity(4).add(&Matrix::identity(3)).unwrap_err();
    assert!(matches!(err, MathError::DimensionMismatch { op: "add", .. }));
}

#[test]
fn general_product_has_outer_shape() {
    let a = Matrix::from_row_major(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let b = Matrix::from_row_major(3, 1, vec![1.0, 0.0, -1.0]).unwrap();
    let c = a.multiply(&b).unwrap();
    assert_eq!((c.rows(), c.cols()), (2, 1));
    assert_eq!(c.as_slice(), &[-2.0, -2.0]);
}

#[test]
fn add_is_elementwise() {
    let s = Matrix::identity(4).add(&Matrix::identity(4)).unwrap();
    assert_eq!(s.get(0, 0), Some(2.0));
    assert_eq!(s.get(0, 1), Some(0.0));
}

#[test]
fn translation_composes_by_addition() {
    let a = Matrix::translation(Vec3::new(1.0, 2.0, 3.0));
    let b = Matrix::translation(Vec3::new(-4.0, 0.5, 10.0));
    let p = a.multiply(&b).unwrap().extract_position().unwrap();
    approx3(p, [-3.0, 2.5, 13.0]);
}

#[test]
fn extract_requires_4x4() {
    let m = Matrix::identity(3);
    assert!(matches!(
        m.extract_position(),
        Err(MathError::NotAffine { rows: 3, cols: 3, .. })
    ));
    assert!(m.extract_scale().is_err());
}

#[test]
fn extract_scale_survives_rotation() {
    let r = Matrix::rotation_z(Radians(0.7), Winding::CounterClockwise);
    let s = Matrix::scale(Vec3::new(2.0, 3.0, 4.0));
    let t = Matrix::translation(Vec3::new(9.0, 9.0, 9.0));
    let m = t.multiply(&r).unwrap().multiply(&s).unwrap();
    approx3(m.extract_scale().unwrap(), [2.0, 3.0, 4.0]);
    approx3(m.extract_position().unwrap(), [9.0, 9.0, 9.0]);
}

#[test]
fn points_translate_directions_do_not() {
    let t = Matrix::translation(Vec3::new(1.0, 1.0, 1.0));
    approx3(t.transform_point(&Vec3::ZERO).unwrap(), [1.0, 1.0, 1.0]);
    approx3(t.transform_direction(&Vec3::UNIT_X).unwrap(), [1.0, 0.0, 0.0]);
    let v = t.mul_vec4(Vec4::new(0.0, 0.0, 0.0, 1.0)).unwrap();
    assert_eq!(v.w(), 1.0);
}

#[test]
fn clockwise_winding_reverses_rotation() {
    let ccw = Matrix::rotation_z(Radians(FRAC_PI_2), Winding::CounterClockwise);
    let cw = Matrix::rotation_z(Radians(FRAC_PI_2), Winding::Clockwise);
    approx3(ccw.transform_direction(&Vec3::UNIT_X).unwrap(), [0.0, 1.0, 0.0]);
    approx3(cw.transform_direction(&Vec3::UNIT_X).unwrap(), [0.0, -1.0, 0.0]);
}

#[test]
fn euler_applies_x_then_y_then_z() {
    let angles = EulerAngles::new(Radians(FRAC_PI_2), Radians(FRAC_PI_2), Radians(0.0));
    let m = Matrix::rotation_euler(angles);
    // X quarter turn sends +Y to +Z, then Y quarter turn sends +Z to +X.
    approx3(m.transform_direction(&Vec3::UNIT_Y).unwrap(), [1.0, 0.0, 0.0]);

    let flipped = Matrix::rotation_euler(angles.with_winding(Axis::Y, Winding::Clockwise));
    approx3(flipped.transform_direction(&Vec3::UNIT_Y).unwrap(), [-1.0, 0.0, 0.0]);
}

#[test]
fn reflection_negates_one_axis() {
    let m = Matrix::reflection(Axis::Y);
    approx3(m.transform_point(&Vec3::new(1.0, 2.0, 3.0)).unwrap(), [1.0, -2.0, 3.0]);
}

#[test]
fn shear_leaks_one_axis_into_another() {
    let m = Matrix::shear(Shear {
        xy: 0.5,
        ..Shear::default()
    });
    approx3(m.transform_point(&Vec3::new(0.0, 2.0, 0.0)).unwrap(), [1.0, 2.0, 0.0]);
}

#[test]
fn identity_is_two_sided() {
    let m = Matrix::translation(Vec3::new(3.0, -1.0, 2.0))
        .multiply(&Matrix::rotation_y(Radians(0.3), Winding::CounterClockwise))
        .unwrap();
    let id = Matrix::identity(4);
    approx_eq_slice(id.multiply(&m).unwrap().as_slice(), m.as_slice());
    approx_eq_slice(m.multiply(&id).unwrap().as_slice(), m.as_slice());
}
