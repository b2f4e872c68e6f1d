use torus_core::{Axis, Coo, Csc, Error};

fn simple_csc() -> Csc<f64, i64> {
    // A = [[1,0,2],[0,3,0]] in CSC
    Csc::from_parts(
        2,
        3,
        vec![0i64, 1, 2, 3],
        vec![0i64, 1, 0],
        vec![1.0f64, 3.0, 2.0],
        true,
    )
    .unwrap()
}

#[test]
fn csc_from_parts_and_iter() {
    let a = simple_csc();
    assert_eq!(a.shape(), (2, 3));
    assert_eq!(a.nnz(), 3);
    let triples: Vec<_> = a.iter().collect();
    assert_eq!(triples, vec![(0, 0, 1.0), (1, 1, 3.0), (0, 2, 2.0)]);
}

#[test]
fn csc_rows_must_increase_within_column() {
    let err = Csc::from_parts(3, 1, vec![0i64, 2], vec![2i64, 0], vec![1.0, 2.0], true)
        .unwrap_err();
    assert_eq!(
        err,
        Error::UnsortedIndices {
            axis: "row",
            major: "column"
        }
    );
}

#[test]
fn csc_indptr_length() {
    let err = Csc::from_parts(2, 3, vec![0i64, 1], vec![0i64], vec![1.0], true).unwrap_err();
    assert!(matches!(err, Error::InvalidIndptr { .. }));
}

#[test]
fn csc_zeros() {
    let z = Csc::zeros(4, 5);
    assert_eq!(z.shape(), (4, 5));
    assert_eq!(z.nnz(), 0);
    assert_eq!(z.indptr.len(), 6);
    assert_eq!(z.iter().count(), 0);
}

#[test]
fn coo_bounds_checked() {
    let ok = Coo::from_parts(2, 2, vec![0i64, 1], vec![1i64, 0], vec![1.0, 2.0], true);
    assert!(ok.is_ok());
    let err = Coo::from_parts(2, 2, vec![0i64, 2], vec![1i64, 0], vec![1.0, 2.0], true)
        .unwrap_err();
    assert_eq!(
        err,
        Error::IndexOutOfBounds {
            axis: "row",
            index: 2,
            size: 2
        }
    );
    let err = Coo::from_parts(2, 2, vec![0i64], vec![-1i64], vec![1.0], true).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfBounds { axis: "column", .. }));
    let err = Coo::from_parts(2, 2, vec![0i64], vec![], vec![1.0], true).unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { .. }));
}

#[test]
fn axis_codes() {
    assert_eq!(Axis::try_from(0).unwrap(), Axis::Rows);
    assert_eq!(Axis::try_from(1).unwrap(), Axis::Columns);
    assert_eq!(Axis::try_from(2).unwrap_err(), Error::InvalidAxis(2));
    assert_eq!(Axis::Rows.len_of((4, 7)), 4);
    assert_eq!(Axis::Columns.len_of((4, 7)), 7);
    assert_eq!(Axis::Columns.to_string(), "columns");
}

#[test]
fn unchecked_still_rejects_malformed_indptr() {
    // pointer overshoots nnz and then decreases
    let n = 40_000usize;
    let err = Csc::from_parts(
        n,
        2,
        vec![0i64, 4_000_000, 40_000],
        (0..40_000i64).collect(),
        vec![1.0; n],
        false,
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidIndptr {
            reason: "must be non-decreasing"
        }
    );

    let err = Csc::from_parts(3, 2, vec![0i64, 5, 3], vec![0i64, 1, 2], vec![1.0; 3], false)
        .unwrap_err();
    assert!(err.to_string().contains("non-decreasing"));

    let err = Csc::from_parts(3, 2, vec![0i64, -1, 1], vec![0i64], vec![1.0], false)
        .unwrap_err();
    assert!(err.to_string().contains("non-negative"));
}

#[test]
fn unchecked_skips_per_entry_checks_only() {
    // row 5 is out of bounds but only the per-column pass would see it
    let a = Csc::from_parts(2, 2, vec![0i64, 1, 1], vec![5i64], vec![1.0], false).unwrap();
    assert_eq!(a.nnz(), 1);
    assert!(Csc::from_parts(2, 2, vec![0i64, 1, 1], vec![5i64], vec![1.0], true).is_err());

    let coo = Coo::from_parts(2, 2, vec![-1i64], vec![3i64], vec![1.0], false).unwrap();
    assert_eq!(coo.row, vec![-1]);
}

#[test]
fn iter_tolerates_unchecked_garbage() {
    let a = Csc::from_parts_unchecked(2, 2, vec![0i64, 9, 1], vec![0i64], vec![1.0]);
    assert_eq!(a.iter().count(), 0);
}

#[test]
fn version_matches_package() {
    assert_eq!(torus_core::VERSION, env!("CARGO_PKG_VERSION"));
}
