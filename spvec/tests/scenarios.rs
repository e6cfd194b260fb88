//! End-to-end behavior of the public API

use spvec::{SparseVector, SpvecError, VectorConfig};

fn three_four() -> SparseVector<f64> {
    let mut v = SparseVector::new();
    v.set_length(5).unwrap();
    v[1] = 3.0;
    v[3] = 4.0;
    v
}

#[test]
fn test_sparse_writes() {
    let v = three_four();
    assert_eq!(v.length(), 5);
    assert_eq!(v.nvalues(), 2);
    assert_eq!(v.to_dense(), vec![0.0, 3.0, 0.0, 4.0, 0.0]);
}

#[test]
fn test_sparse_text_round_trip() {
    let v = three_four();
    let text = v.to_string();
    assert_eq!(text, "<1 3 3 4 5>");

    let w: SparseVector<f64> = text.parse().unwrap();
    assert_eq!(w, v);
}

#[test]
fn test_dense_text() {
    let v = three_four();
    assert_eq!(v.dense().to_string(), "[0 3 0 4 0]");

    // Dense text reads back into the same logical vector
    let w: SparseVector<f64> = "[0 3 0 4 0]".parse().unwrap();
    assert_eq!(w, v);
    assert_eq!(w.nvalues(), 2);
}

#[test]
fn test_compact_releases_storage() {
    let mut v: SparseVector<i32> = SparseVector::new();
    v.set_length(5).unwrap();
    v[2] = 7;
    v[2] -= 7;
    assert_eq!(v.nvalues(), 1);

    assert_eq!(v.compact(), 1);
    assert_eq!(v.allocated(), 0);
    assert_eq!(v.length(), 5);
}

#[test]
fn test_compact_without_shrink_keeps_capacity() {
    let config = VectorConfig::default().with_shrink_on_compact(false);
    let mut v: SparseVector<i32> = SparseVector::with_config(config);
    v.set_length(5).unwrap();
    v[2] = 7;
    v[2] -= 7;

    v.compact();
    assert_eq!(v.nvalues(), 0);
    assert!(v.allocated() > 0);
}

#[test]
fn test_fixed_length_rejects_resize() {
    let mut v: SparseVector<f64> = SparseVector::new();
    v.fix_length(3).unwrap();
    assert_eq!(v.set_length(4), Err(SpvecError::LengthLocked));
    assert_eq!(v.length(), 3);
}

#[test]
fn test_inner_product() {
    let mut a: SparseVector<i32> = SparseVector::new();
    a.set_length(4).unwrap();
    a[0] = 1;
    a[2] = 2;

    let mut b: SparseVector<i32> = SparseVector::new();
    b.set_length(4).unwrap();
    b[2] = 3;
    b[3] = 5;

    assert_eq!(&a * &b, 6);
}

#[test]
fn test_fixed_vector_reads_text_of_its_length() {
    let mut v: SparseVector<i64> = SparseVector::new();
    v.fix_length(4).unwrap();

    v.read_text("<0 5 3 -1 4>").unwrap();
    assert_eq!(v.to_dense(), vec![5, 0, 0, -1]);

    assert_eq!(
        v.read_text("[1 2 3]"),
        Err(SpvecError::LengthMismatch { expected: 4, actual: 3 })
    );
    assert_eq!(v.to_dense(), vec![5, 0, 0, -1]);
}

#[test]
fn test_parse_errors_report_offset() {
    let err = "<1 3 9 4 5>".parse::<SparseVector<f64>>().unwrap_err();
    assert_eq!(
        err,
        SpvecError::Parse {
            offset: 5,
            reason: "index out of range"
        }
    );

    assert!("1 2 3".parse::<SparseVector<f64>>().is_err());
    assert!("[1 x 3]".parse::<SparseVector<f64>>().is_err());
    assert!("<3 1 1 1 4>".parse::<SparseVector<f64>>().is_err());
}

#[test]
fn test_arithmetic_chain() {
    let a: SparseVector<f64> = "<0 1 2 2 4>".parse().unwrap();
    let b: SparseVector<f64> = "<2 3 3 5 4>".parse().unwrap();

    let sum = &a + &b;
    assert_eq!(sum.to_string(), "<0 1 2 5 3 5 4>");

    let mut diff = &sum - &b;
    assert_eq!(diff, a);
    assert_eq!(diff.nvalues(), 3);
    diff.compact();
    assert_eq!(diff.nvalues(), 2);

    let scaled = &a * 2.0f64;
    assert_eq!(scaled.dense().to_string(), "[2 0 4 0]");
    assert_eq!((-&a).dense().to_string(), "[-1 0 -2 0]");
}

#[test]
fn test_swap_and_kill() {
    let mut a = three_four();
    let mut b: SparseVector<f64> = SparseVector::with_length(2);
    b[0] = 1.0;

    a.swap(&mut b).unwrap();
    assert_eq!(a.to_string(), "<0 1 2>");
    assert_eq!(b.to_string(), "<1 3 3 4 5>");

    b.kill().unwrap();
    assert_eq!(b.to_string(), "<0>");
    assert_eq!(b.allocated(), 0);
}

#[cfg(feature = "binary")]
#[test]
fn test_binary_round_trip() {
    let v = three_four();
    let bytes = v.to_bytes().unwrap();
    let decoded = SparseVector::<f64>::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, v);
    assert_eq!(decoded.indices(), &[1, 3]);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_representation() {
    let v = three_four();
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, r#"{"length":5,"entries":[[1,3.0],[3,4.0]]}"#);

    let back: SparseVector<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}
