//! Integration tests: arrays, daily counts and bootstrap tables through
//! Parquet write and read.

use hyetos_io::{
    BootstrapTable, Compression, WriterConfig, read_array, read_bootstrap_table,
    read_daily_counts, write_array, write_bootstrap_table, write_daily_counts, write_scalar,
};

#[test]
fn array_preserves_non_finite_values() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("HR.parquet");

    let values = [0.0, 0.25, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1.0];
    write_array(&path, &values, &WriterConfig::default()).expect("write succeeds");

    let back = read_array(&path).expect("read succeeds");
    assert_eq!(back.len(), values.len());
    for (a, b) in values.iter().zip(&back) {
        assert!(a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan()));
    }
}

#[test]
fn array_with_every_compression() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let values: Vec<f64> = (0..200).map(|i| f64::from(i) * 0.1 - 10.0).collect();

    for comp in [Compression::None, Compression::Snappy, Compression::Zstd] {
        let path = dir.path().join(format!("{comp:?}.parquet"));
        let config = WriterConfig::default()
            .with_compression(comp)
            .with_row_group_size(64);
        write_array(&path, &values, &config).expect("write succeeds");
        assert_eq!(read_array(&path).expect("read succeeds"), values);
    }
}

#[test]
fn empty_array() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("empty.parquet");
    write_array(&path, &[], &WriterConfig::default()).expect("write succeeds");
    assert!(read_array(&path).expect("read succeeds").is_empty());
}

#[test]
fn scalar_is_one_element_array() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("r2.parquet");
    write_scalar(&path, 0.987, &WriterConfig::default()).expect("write succeeds");
    assert_eq!(read_array(&path).expect("read succeeds"), vec![0.987]);
}

#[test]
fn write_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("24h").join("sys").join("10").join("FAR.parquet");
    write_array(&path, &[0.5], &WriterConfig::default()).expect("write succeeds");
    assert!(path.exists());
}

#[test]
fn daily_counts_round_trip() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("counts.parquet");

    write_daily_counts(&path, &[0, 12, 51, 3], &[0.0, 1.0, 1.0, 0.0], &WriterConfig::default())
        .expect("write succeeds");

    let counts = read_daily_counts(&path)
        .expect("read succeeds")
        .expect("file exists");
    assert_eq!(counts.member_counts(), &[0, 12, 51, 3]);
    assert_eq!(counts.observed_counts(), &[0.0, 1.0, 1.0, 0.0]);
    assert_eq!(counts.n_dropped(), 0);
}

#[test]
fn daily_counts_drop_nan_observations() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("counts.parquet");

    write_daily_counts(&path, &[4, 5, 6], &[f64::NAN, 2.0, 0.0], &WriterConfig::default())
        .expect("write succeeds");

    let counts = read_daily_counts(&path)
        .expect("read succeeds")
        .expect("file exists");
    assert_eq!(counts.member_counts(), &[5, 6]);
    assert_eq!(counts.n_dropped(), 1);
}

#[test]
fn daily_counts_ragged_input_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("counts.parquet");
    let result = write_daily_counts(&path, &[1, 2], &[0.0], &WriterConfig::default());
    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn bootstrap_table_round_trip() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("BSrel.parquet");

    let table = BootstrapTable::new(
        vec![12, 18, 24],
        vec![0.010, 0.012, 0.015],
        vec![
            vec![0.009, 0.011, 0.010, 0.012],
            vec![0.011, f64::NAN, 0.013, 0.012],
            vec![0.014, 0.016, 0.015, 0.017],
        ],
    )
    .expect("valid table");
    write_bootstrap_table(&path, &table, &WriterConfig::default()).expect("write succeeds");

    let back = read_bootstrap_table(&path).expect("read succeeds");
    assert_eq!(back.steps(), table.steps());
    assert_eq!(back.real(), table.real());
    assert_eq!(back.n_replicates(), 4);
    assert_eq!(back.bootstrap()[0], table.bootstrap()[0]);
    assert!(back.bootstrap()[1][1].is_nan());
    assert_eq!(back.bootstrap()[2], table.bootstrap()[2]);
}
