use std::fs;

use slack_dump_engine::{create_output_dir, DumpError, MatchWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("slack-image-dump-cats");
    assert!(!new_dir.exists());
    create_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn existing_output_dir_is_a_conflict() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("slack-image-dump-cats");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("0.png"), b"earlier run").unwrap();

    let err = create_output_dir(&dir).unwrap_err();
    match err {
        DumpError::OutputDirExists(path) => assert_eq!(path, dir),
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(fs::read(dir.join("0.png")).unwrap(), b"earlier run");
}

#[test]
fn missing_parent_is_not_created() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("a").join("b");
    let err = create_output_dir(&nested).unwrap_err();
    assert!(matches!(err, DumpError::Io(_)));
    assert!(!temp.path().join("a").exists());
}

#[test]
fn files_are_numbered_png_with_raw_bytes() {
    let temp = TempDir::new().unwrap();
    let writer = MatchWriter::new(temp.path().to_path_buf());

    let first = writer.write(0, &[0x89, b'P', b'N', b'G']).unwrap();
    let second = writer.write(1, b"GIF89a").unwrap();

    assert_eq!(first.file_name().unwrap(), "0.png");
    assert_eq!(second.file_name().unwrap(), "1.png");
    assert_eq!(fs::read(&first).unwrap(), vec![0x89, b'P', b'N', b'G']);
    assert_eq!(fs::read(&second).unwrap(), b"GIF89a");
    assert_eq!(writer.path_for(7), temp.path().join("7.png"));
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = MatchWriter::new(file_path.clone());
    assert!(writer.write(0, b"data").is_err());
    assert!(!file_path.with_file_name("0.png").exists());
}

#[test]
fn existing_file_is_not_overwritten() {
    let temp = TempDir::new().unwrap();
    let writer = MatchWriter::new(temp.path().to_path_buf());
    fs::write(writer.path_for(0), b"kept").unwrap();

    assert!(writer.write(0, b"replacement").is_err());
    assert_eq!(fs::read(writer.path_for(0)).unwrap(), b"kept");
}

#[test]
fn staged_files_do_not_linger() {
    let temp = TempDir::new().unwrap();
    let writer = MatchWriter::new(temp.path().to_path_buf());
    writer.write(0, b"a").unwrap();
    writer.write(1, b"b").unwrap();

    let mut names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["0.png".to_string(), "1.png".to_string()]);
}
