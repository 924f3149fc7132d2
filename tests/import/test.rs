use std::io::ErrorKind;

use utmatrix::data::linear_algebra::{UpperTriangular, Vector};
use utmatrix::io::error::ImportError;
use utmatrix::io::import;

use crate::import::get_test_file_path;

#[test]
fn order_3() {
    let m = import::<i32>(&get_test_file_path("order_3")).unwrap();

    let mut expected = UpperTriangular::new(3).unwrap();
    expected[0][0] = 10;
    expected[1][1] = 20;
    assert_eq!(m, expected);
}

#[test]
fn add_files() {
    let left = import::<i64>(&get_test_file_path("order_3")).unwrap();
    let right = import::<i64>(&get_test_file_path("order_3_shifted")).unwrap();

    let sum = left.add(&right).unwrap();
    assert_eq!(sum.to_string(), "11 2 3\n24 5\n6\n");
    assert_eq!(sum.sub(&right), Ok(left));
}

#[test]
fn rows_keep_their_offset() {
    let m = import::<i64>(&get_test_file_path("order_3_shifted")).unwrap();

    assert_eq!(m[1], Vector::from_values(vec![4, 5], 1).unwrap());
    assert_eq!(m.row(2).unwrap().indices(), 2..3);
    assert_eq!(m.row(1).unwrap().inner_product(m.row(1).unwrap()), Ok(41));
}

#[test]
fn float() {
    let m = import::<f64>(&get_test_file_path("order_2_float")).unwrap();

    assert_eq!(m.get(0, 1), Ok(&-1.25));
    assert_eq!(m.row(0).unwrap().mul_scalar(&2.0).to_string(), "1 -2.5");
}

#[test]
fn truncated() {
    match import::<i32>(&get_test_file_path("truncated")) {
        Err(ImportError::Parse(error)) => {
            assert_eq!(error.line_number(), None);
            assert!(error.to_string().contains("Expected 10 values for a matrix of order 4, found 8"));
        },
        _ => panic!("expected a parse error"),
    }
}

#[test]
fn bad_value() {
    match import::<i32>(&get_test_file_path("bad_value")) {
        Err(ImportError::Parse(error)) => assert_eq!(error.line_number(), Some(3)),
        _ => panic!("expected a parse error"),
    }
}

#[test]
fn missing_file() {
    match import::<i32>(&get_test_file_path("does_not_exist")) {
        Err(ImportError::IO(error)) => assert_eq!(error.kind(), ErrorKind::NotFound),
        _ => panic!("expected an io error"),
    }
}
