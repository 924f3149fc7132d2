use relp_num::{RationalBig, RB};

use utmatrix::data::linear_algebra::{Error, UpperTriangular, Vector};

#[test]
fn order_3() {
    let mut m = UpperTriangular::<i32>::new(3).unwrap();
    m[0][0] = 10;
    m[1][1] = 20;

    assert_eq!(m[0][0], 10);
    assert_eq!(m[1][1], 20);
    for i in 0..3 {
        for j in i..3 {
            if (i, j) != (0, 0) && (i, j) != (1, 1) {
                assert_eq!(m.get(i, j), Ok(&0));
            }
        }
    }

    let zero = UpperTriangular::new(3).unwrap();
    assert_eq!(m.add(&zero), Ok(m.clone()));
}

#[test]
fn out_of_range() {
    let m = UpperTriangular::<i32>::new(10).unwrap();

    assert!(matches!(m.get(-10, -10), Err(Error::IndexOutOfRange { .. })));
    assert!(matches!(m.get(10, 10), Err(Error::IndexOutOfRange { .. })));
    for i in 0..10 {
        assert!(matches!(m.get(i, i - 1), Err(Error::IndexOutOfRange { .. })));
        assert!(matches!(m.get(i, 10), Err(Error::IndexOutOfRange { .. })));
    }
}

#[test]
fn rows_as_vectors() {
    let mut m = UpperTriangular::<i32>::new(4).unwrap();
    for i in 0..4 {
        let row = m.row(i).unwrap().add_scalar(&(i as i32 + 1));
        m.row_mut(i).unwrap().assign(&row);
    }
    assert_eq!(m.to_string(), "1 1 1 1\n2 2 2\n3 3\n4\n");

    let first = m.row(0).unwrap();
    assert_eq!(first.inner_product(first), Ok(4));
    assert_eq!(
        first.add(m.row(1).unwrap()),
        Err(Error::ShapeMismatch { left: 4, right: 3 }),
    );
}

#[test]
fn convert_raw_rows() {
    let values = [RB!(1, 2), RB!(1, 3), RB!(1, 4)];
    let rows = (0..3)
        .map(|i| Vector::from_values(vec![values[i].clone(); 3 - i], i as isize).unwrap())
        .collect::<Vec<_>>();
    let m = UpperTriangular::from(Vector::from_values(rows, 0).unwrap());

    let mut expected = UpperTriangular::<RationalBig>::new(3).unwrap();
    for i in 0..3 {
        for j in i..3 {
            expected.set(i as isize, j as isize, values[i].clone()).unwrap();
        }
    }
    assert_eq!(m, expected);

    let doubled = m.add(&m).unwrap();
    assert_eq!(doubled[0][2], RB!(1));
    assert_eq!(doubled[2][2], RB!(1, 2));
    assert_eq!(doubled.sub(&m), Ok(expected));
}
