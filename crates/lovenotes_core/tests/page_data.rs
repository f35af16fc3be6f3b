use lovenotes_core::{LoveTimer, NoteSource, NoteSourceError, PageConfig};
use std::io::Write;

#[test]
fn notes_and_config_load_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"title": "first date", "description": "coffee", "date": "2023-03-01"}}]"#
    )
    .unwrap();

    let notes = NoteSource::from_json_file(file.path()).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes.get(0).unwrap().date.as_deref(), Some("2023-03-01"));

    let config = PageConfig::from_json_str(r#"{"love_start": "2023-03-01T00:00:00"}"#).unwrap();
    let timer = LoveTimer::new(config.love_start_instant().unwrap());
    let now = chrono::NaiveDateTime::parse_from_str("2023-04-15T10:30:05", "%Y-%m-%dT%H:%M:%S")
        .unwrap();
    assert_eq!(timer.render(now), "0 years 1 months 14 days 10:30:05");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = NoteSource::from_json_file(dir.path().join("notes.json")).unwrap_err();
    assert!(matches!(err, NoteSourceError::Io(_)));
}
