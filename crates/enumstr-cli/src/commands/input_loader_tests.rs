use std::io::Write;

use enumstr_core::IntRepr;

use super::input_loader::{LoadError, load_declarations, parse_declarations};

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"types": [{{"name": "Day", "repr": "u8", "constants": [
            {{"name": "Monday", "value": 0}},
            {{"name": "Tuesday", "value": 1, "label": "Tue"}}
        ]}}]}}"#
    )
    .unwrap();

    let decls = load_declarations(file.path()).unwrap();
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].name, "Day");
    assert_eq!(decls[0].repr, IntRepr::U8);
    assert_eq!(decls[0].entries[1].label.as_deref(), Some("Tue"));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = load_declarations(&path).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read '"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = parse_declarations("bad.json", r#"{"types": [{"name": "T"}]}"#).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    let message = err.to_string();
    assert!(message.starts_with("invalid declarations in 'bad.json': missing field `repr`"));
}

#[test]
fn unknown_repr_is_a_parse_error() {
    let err = parse_declarations("x.json", r#"{"types": [{"name": "T", "repr": "i128"}]}"#)
        .unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}
