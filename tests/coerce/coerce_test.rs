// SPDX-FileCopyrightText: 2026 mdlest contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use mdlest::encoders::coerce::{CoerceError, NumericKind, VectorData};
use mdlest::encoders::mdl::Mdl;
use ndarray::{Array1, Array2, ArrayD, IxDyn, array};

#[test]
fn one_dimensional_inputs_coerce() {
    let from_vec = VectorData::from(vec![1.0, 2.0, 3.0]).coerce().unwrap();
    assert_eq!(from_vec, array![1.0, 2.0, 3.0]);

    let from_slice = VectorData::from(&[4.0, 5.0][..]).coerce().unwrap();
    assert_eq!(from_slice, array![4.0, 5.0]);

    let from_array = VectorData::from(Array1::from(vec![6.0])).coerce().unwrap();
    assert_eq!(from_array, array![6.0]);

    let dynamic = ArrayD::from_shape_vec(IxDyn(&[3]), vec![1.0, 2.0, 3.0]).unwrap();
    let from_dynamic = VectorData::from(dynamic).coerce().unwrap();
    assert_eq!(from_dynamic, array![1.0, 2.0, 3.0]);
}

#[test]
fn two_dimensional_input_is_rejected() {
    let matrix = Array2::from_shape_vec((2, 3), vec![1.0; 6]).unwrap();
    let err = VectorData::from(matrix).coerce().unwrap_err();
    assert_eq!(err, CoerceError::InvalidShape { shape: vec![2, 3] });
}

#[test]
fn row_vector_is_not_a_vector() {
    // Exactly one dimension is required; a 1xN matrix does not qualify.
    let row = Array2::from_shape_vec((1, 4), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let err = VectorData::from(row).coerce().unwrap_err();
    assert!(matches!(err, CoerceError::InvalidShape { .. }));
}

#[test]
fn constructors_surface_shape_errors() {
    let matrix = Array2::from_shape_vec((2, 2), vec![0.0; 4]).unwrap();
    assert!(Mdl::multinomial(matrix.clone()).is_err());
    assert!(Mdl::gaussian_kde(matrix.clone()).is_err());
    assert!(Mdl::zero_inflated(matrix).is_err());
}

#[test]
fn numeric_kind_parses_dtype_strings() {
    assert_eq!("f8".parse::<NumericKind>().unwrap(), NumericKind::F64);
    assert_eq!("float64".parse::<NumericKind>().unwrap(), NumericKind::F64);
    assert_eq!("f4".parse::<NumericKind>().unwrap(), NumericKind::F32);
    assert_eq!("float32".parse::<NumericKind>().unwrap(), NumericKind::F32);
    assert_eq!(NumericKind::default(), NumericKind::F64);
}

#[test]
fn non_numeric_kind_is_rejected() {
    let err = "utf8".parse::<NumericKind>().unwrap_err();
    assert_eq!(err, CoerceError::InvalidKind("utf8".to_string()));
}

#[test]
fn f32_kind_narrows_values() {
    let data = VectorData::from(vec![0.1, 0.2]);
    let narrowed = data.coerce_with_kind(NumericKind::F32).unwrap();
    assert_eq!(narrowed[0], 0.1f32 as f64);
    assert_eq!(narrowed[1], 0.2f32 as f64);
    assert_ne!(narrowed[0], 0.1);

    let data = VectorData::from(vec![0.5, 1.25]);
    let kept = data.coerce_with_kind(NumericKind::F64).unwrap();
    assert_eq!(kept, array![0.5, 1.25]);
}
