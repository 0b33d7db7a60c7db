//! Integration tests for `inv`
#![cfg(any(feature = "faer", feature = "lapack"))]

mod common;

use common::{assert_allclose_f64, init_tracing, mat};
use denselin::prelude::*;

#[test]
fn test_inverse_times_matrix_is_identity() {
    init_tracing();

    let a = mat(&[
        [2.0, -1.0, 0.0, 1.0],
        [-1.0, 2.0, -1.0, 0.0],
        [0.0, -1.0, 2.0, -1.0],
        [1.0, 0.0, -1.0, 3.0],
    ]);
    let a_inv = inv(&a).unwrap();
    assert_eq!(a_inv.size(), (4, 4));

    let left = a_inv.matmul(&a).unwrap();
    let right = a.matmul(&a_inv).unwrap();
    let eye = Matrix::identity(4);
    assert_allclose_f64(left.data(), eye.data(), 0.0, 1e-12, "inv(A) * A");
    assert_allclose_f64(right.data(), eye.data(), 0.0, 1e-12, "A * inv(A)");
}

#[test]
fn test_inverse_needs_pivoting() {
    // zero in the leading position forces a row interchange
    let a = mat(&[[0.0, 1.0], [1.0, 0.0]]);
    let a_inv = inv(&a).unwrap();
    assert_allclose_f64(a_inv.data(), &[0.0, 1.0, 1.0, 0.0], 0.0, 1e-15, "permutation");
}

#[test]
fn test_inverse_three_row_cycle() {
    // partial pivoting moves row 2 to the top, then row 0, leaving row 1 last
    let a = mat(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
    let a_inv = inv(&a).unwrap();

    let expected = [
        -2.0 / 3.0,
        -4.0 / 3.0,
        1.0,
        -2.0 / 3.0,
        11.0 / 3.0,
        -2.0,
        1.0,
        -2.0,
        1.0,
    ];
    assert_allclose_f64(a_inv.data(), &expected, 1e-12, 1e-12, "closed form");

    let eye = Matrix::identity(3);
    let left = a_inv.matmul(&a).unwrap();
    assert_allclose_f64(left.data(), eye.data(), 0.0, 1e-12, "inv(A) * A");
}

#[test]
fn test_double_inverse() {
    let a = mat(&[[1.0, 2.0, 0.0], [0.0, 1.0, 3.0], [4.0, 0.0, 1.0]]);
    let back = inv(&inv(&a).unwrap()).unwrap();
    assert_allclose_f64(back.data(), a.data(), 1e-12, 1e-12, "inv(inv(A))");
}

#[test]
fn test_singular_zero_row() {
    let a = mat(&[[1.0, 2.0], [0.0, 0.0]]);
    let err = inv(&a).unwrap_err();
    assert!(matches!(err, Error::SingularMatrix { .. }), "{err}");
}

#[test]
fn test_not_square() {
    let err = inv(&Matrix::zeros(3, 2)).unwrap_err();
    assert_eq!(err, Error::NotSquare { rows: 3, cols: 2 });
    assert_eq!(err.to_string(), "Matrix must be square, got 3x2");
}

#[test]
fn test_result_is_unnamed() {
    let a = mat(&[[2.0, 0.0], [0.0, 4.0]]).with_name("A").with_show_name(true);
    let a_inv = inv(&a).unwrap();
    assert_eq!(a_inv.name(), None);
    assert!(!a_inv.show_name());
    assert_allclose_f64(a_inv.data(), &[0.5, 0.0, 0.0, 0.25], 0.0, 1e-15, "diagonal");
}

#[test]
fn test_input_unchanged() {
    let a = mat(&[[4.0, 7.0], [2.0, 6.0]]);
    let a0 = a.clone();
    inv(&a).unwrap();
    assert_eq!(a, a0);
}
