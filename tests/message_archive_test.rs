use chrono::DateTime;
use tempfile::TempDir;

use dentalab::{ContactClassifier, ContactMessage, CsvMessageArchive, MessageArchive};

fn message(name: &str, contact_raw: &str, body: &str) -> ContactMessage {
    let classifier = ContactClassifier::new(Some("+382".to_string()));
    ContactMessage {
        received_at: DateTime::parse_from_rfc3339("2025-03-10T10:00:00+01:00").unwrap(),
        name: name.to_string(),
        contact: classifier.classify(contact_raw),
        body: body.to_string(),
        remote_addr: Some("203.0.113.7".to_string()),
    }
}

#[test]
fn test_header_written_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("poruke.csv");
    let archive = CsvMessageArchive::new(path.clone());

    archive
        .archive(&message("Ana", "067123456", "Need an appointment"))
        .unwrap();
    archive
        .archive(&message("Marko", "marko@example.com", "Question about hours"))
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "datetime,name,contact,ip,message");
    assert_eq!(content.matches("datetime,name").count(), 1);
}

#[test]
fn test_contact_column_holds_normalized_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("poruke.csv");
    let archive = CsvMessageArchive::new(path.clone());

    archive
        .archive(&message("Ana", "067 123 456", "hello"))
        .unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(&record[0], "2025-03-10T10:00:00+01:00");
    assert_eq!(&record[1], "Ana");
    assert_eq!(&record[2], "+38267123456");
    assert_eq!(&record[3], "203.0.113.7");
    assert_eq!(&record[4], "hello");
}

#[test]
fn test_fields_with_commas_and_quotes_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("poruke.csv");
    let archive = CsvMessageArchive::new(path.clone());

    let body = "Hello, I'd like a \"morning\" slot\nif possible";
    archive.archive(&message("Jovana", "hi there", body)).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(&record[4], body);
}

#[test]
fn test_missing_remote_addr_is_empty_column() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("poruke.csv");
    let archive = CsvMessageArchive::new(path.clone());

    let mut msg = message("Ana", "067123456", "hello");
    msg.remote_addr = None;
    archive.archive(&msg).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(&record[3], "");
}

#[test]
fn test_parent_directory_is_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("dir").join("poruke.csv");
    let archive = CsvMessageArchive::new(path.clone());

    archive.archive(&message("Ana", "067123456", "hi")).unwrap();
    assert!(path.exists());
}
