use lsm_core::{
    decode, get_lsm_description, get_lsm_lines, get_report, ErrorKind, MismatchStrategy,
};
use serde_json::json;

#[test]
fn test_full_pipeline() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [2.1, 3.9, 6.05, 7.9];

    let d = get_lsm_description(&x, &y, MismatchStrategy::Fail).unwrap();
    assert!((1.95..=2.0).contains(&d.incline()));
    assert!((0.0..=0.2).contains(&d.shift()));

    let lines = get_lsm_lines(&x, &y, Some(&d)).unwrap();
    assert_eq!(lines.line_predicted().len(), x.len());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lsm_report.txt");
    let report = get_report(&d, path.to_str().unwrap()).unwrap();
    for line in [
        "[INFO]: incline: 1.955;",
        "[INFO]: shift: 0.100;",
        "[INFO]: incline error: 0.047;",
        "[INFO]: shift error: 0.128;",
    ] {
        assert!(report.contains(line), "missing {line:?} in\n{report}");
    }
    assert_eq!(std::fs::read_to_string(&path).unwrap(), report);
}

#[test]
fn test_truncate_five_against_three() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [1.0, 4.0, 9.0];
    let d = get_lsm_description(&x, &y, MismatchStrategy::Truncate).unwrap();
    let expected = get_lsm_description(&x[..3], &y, MismatchStrategy::Fail).unwrap();
    assert_eq!(d, expected);
    assert!(get_lsm_description(&x, &y, MismatchStrategy::Fail).is_err());
}

#[test]
fn test_json_input_pipeline() {
    let payload = json!({
        "abscissa": [0, 1, 2, 3],
        "ordinates": [1.0, 3.1, 4.9, 7.0],
        "strategy": "cut",
    });
    let x = decode::measurements("abscissa", &payload["abscissa"]).unwrap();
    let y = decode::measurements("ordinates", &payload["ordinates"]).unwrap();
    let strategy: MismatchStrategy = serde_json::from_value(payload["strategy"].clone()).unwrap();
    let d = get_lsm_description(&x, &y, strategy).unwrap();

    let restored = decode::description(&serde_json::to_value(d).unwrap()).unwrap();
    assert_eq!(restored, d);

    let err = decode::measurements("abscissa", &payload["missing"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}
