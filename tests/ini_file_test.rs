// inirs/tests/ini_file_test.rs

//! Integration tests over realistic INI documents and file handling.

use inirs::{reads, writes, IniError, IniFile, LoadMode, WriteOptions};

const SETTINGS: &str = "\
; application settings
[server]
host=example.com ; primary
port=8080
tls=True

[limits]
timeout=2.5
retries=3

[user]
name=bob
age=30
";

#[test]
fn test_parse_realistic_document() {
    let ini = reads(SETTINGS).unwrap();

    assert_eq!(ini.len(), 7);
    assert_eq!(ini.section_names(), vec!["server", "limits", "user"]);
    assert_eq!(ini.get_string("server", "host").unwrap(), "example.com");
    assert_eq!(ini.get_i64("server", "port").unwrap(), 8080);
    assert!(ini.get_bool("server", "tls").unwrap());
    assert_eq!(ini.get_f64("limits", "timeout").unwrap(), 2.5);
    assert_eq!(ini.get_i64("limits", "retries").unwrap(), 3);
}

#[test]
fn test_inline_comment_truncates_value() {
    let ini = reads(SETTINGS).unwrap();
    // "example.com ; primary" is cut at the ';' and the line re-trimmed.
    assert_eq!(ini.get_string("server", "host").unwrap(), "example.com");
}

#[test]
fn test_concrete_user_scenario() {
    let ini = reads("[user]\r\nname=bob\r\n;comment\r\nage=30\r\n").unwrap();

    let entries: Vec<_> = ini
        .entries()
        .map(|e| (e.section.as_str(), e.key.as_str(), e.value.as_str()))
        .collect();
    assert_eq!(entries, vec![("user", "name", "bob"), ("user", "age", "30")]);
    assert_eq!(ini.get_i64("user", "age").unwrap(), 30);
    assert_eq!(ini.get_string_or("user", "missing", "fallback"), "fallback");
}

#[test]
fn test_render_section_order_and_layout() {
    let mut ini = IniFile::new();
    ini.set_string("b", "x", "1").unwrap();
    ini.set_string("a", "y", "2").unwrap();

    let text = writes(&ini);
    assert!(text.starts_with("[a]\r\ny=2\r\n\r\n[b]\r\nx=1"));
}

#[test]
fn test_full_round_trip_preserves_pairs() {
    let before = reads(SETTINGS).unwrap();
    let after = reads(&writes(&before)).unwrap();

    assert_eq!(after.len(), before.len());
    for entry in before.entries() {
        assert_eq!(
            after.get_string(&entry.section, &entry.key).unwrap(),
            entry.value,
            "pair ({}, {}) changed across render/parse",
            entry.section,
            entry.key
        );
    }
}

#[test]
fn test_malformed_documents() {
    assert!(matches!(
        reads("[s]\nnovaluehere\n").unwrap_err(),
        IniError::Parse { .. }
    ));
    assert!(matches!(
        reads("orphan=value\n[s]\nk=v\n").unwrap_err(),
        IniError::Parse { .. }
    ));
}

#[test]
fn test_merge_overlays_existing_document() {
    let mut ini = reads(SETTINGS).unwrap();
    ini.load_str("[server]\r\nport=9090\r\n[extra]\r\nk=v\r\n", LoadMode::Merge)
        .unwrap();

    assert_eq!(ini.get_i64("server", "port").unwrap(), 9090);
    assert_eq!(ini.get_string("server", "host").unwrap(), "example.com");
    assert_eq!(ini.get_string("extra", "k").unwrap(), "v");
}

#[test]
fn test_file_write_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.ini");

    let mut ini = IniFile::new();
    ini.set_string("server", "host", "example.com").unwrap();
    ini.set_i64("server", "port", 8080).unwrap();

    inirs::write(&ini, &path).unwrap();
    let loaded = inirs::read(&path).unwrap();

    assert_eq!(loaded.get_string("server", "host").unwrap(), "example.com");
    assert_eq!(loaded.get_i64("server", "port").unwrap(), 8080);
}

#[test]
fn test_write_refuses_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.ini");

    let mut ini = IniFile::new();
    ini.set_string("s", "k", "v").unwrap();

    inirs::write(&ini, &path).unwrap();
    assert!(matches!(
        inirs::write(&ini, &path).unwrap_err(),
        IniError::FileAlreadyExists(_)
    ));

    ini.set_string("s", "k", "updated").unwrap();
    inirs::write_with_options(&ini, &path, &WriteOptions { force: true }).unwrap();
    let loaded = inirs::read(&path).unwrap();
    assert_eq!(loaded.get_string("s", "k").unwrap(), "updated");
}

#[test]
fn test_read_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = inirs::read(dir.path().join("absent.ini")).unwrap_err();
    assert!(matches!(err, IniError::Io(_)));
}
