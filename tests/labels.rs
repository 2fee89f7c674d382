use pigdetect::{Error, LabelTable};

#[test]
fn default_table_has_ten_classes() {
    let table = LabelTable::default();
    assert_eq!(table.len(), 10);
    assert_eq!(table.get(9).unwrap(), "Healthy");
    assert_eq!(table.get(5).unwrap(), "Infected_Fungal_Ringworm");
}

#[test]
fn lookup_is_bounds_checked() {
    let table = LabelTable::default();
    let err = table.get(10).unwrap_err();
    assert!(matches!(err, Error::LabelIndex { index: 10, len: 10 }));
}

#[test]
fn manifest_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labels.json");
    std::fs::write(&path, r#"{"labels": ["Healthy", "Mange"]}"#).unwrap();

    let table = LabelTable::from_manifest(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(1).unwrap(), "Mange");
}

#[test]
fn empty_manifest_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labels.json");
    std::fs::write(&path, r#"{"labels": []}"#).unwrap();
    assert!(matches!(
        LabelTable::from_manifest(&path),
        Err(Error::Manifest { .. })
    ));
}

#[test]
fn malformed_manifest_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("labels.json");
    std::fs::write(&path, r#"{"classes": ["Healthy"]}"#).unwrap();
    assert!(matches!(
        LabelTable::from_manifest(&path),
        Err(Error::Manifest { .. })
    ));
}

#[test]
fn table_must_match_model_output_size() {
    let table = LabelTable::default();
    assert!(table.ensure_matches(10).is_ok());
    assert!(matches!(
        table.ensure_matches(5),
        Err(Error::Config { .. })
    ));
}
