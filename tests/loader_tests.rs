use bookworms::display::write_common_books;
use bookworms::source::{load_bookworms, BookwormSource, JsonFileSource, LoadError};
use bookworms::{find_common_books, Book, Bookworm};

fn expected_test_bookworms() -> Vec<Bookworm> {
    vec![
        Bookworm::new(
            "Fadi",
            vec![
                Book::new("Margaret Atwood", "The Handmaid's Tale"),
                Book::new("Sylvia Plath", "The Bell Jar"),
            ],
        ),
        Bookworm::new(
            "Peggy",
            vec![
                Book::new("Margaret Atwood", "Oryx and Crake"),
                Book::new("Margaret Atwood", "The Handmaid's Tale"),
                Book::new("Charlotte Brontë", "Jane Eyre"),
            ],
        ),
    ]
}

#[test]
fn test_load_bookworms_file_exists() {
    let bookworms = load_bookworms("testdata/testBookworms.json").unwrap();
    assert_eq!(bookworms, expected_test_bookworms());
}

#[test]
fn test_load_bookworms_file_missing() {
    let result = load_bookworms("testdata/no_file_here.json");
    assert!(matches!(result, Err(LoadError::Io { .. })));
}

#[test]
fn test_load_bookworms_invalid_json() {
    let result = load_bookworms("testdata/invalid.json");
    assert!(matches!(result, Err(LoadError::Parse(_))));
}

#[tokio::test]
async fn test_json_file_source_matches_sync_loader() {
    let source = JsonFileSource::new("testdata/testBookworms.json");
    let bookworms = source.load().await.unwrap();
    assert_eq!(bookworms, expected_test_bookworms());
}

#[tokio::test]
async fn test_json_file_source_invalid_json() {
    let source = JsonFileSource::new("testdata/invalid.json");
    assert!(matches!(source.load().await, Err(LoadError::Parse(_))));
}

#[test]
fn test_common_books_output() {
    let bookworms = load_bookworms("testdata/testBookworms.json").unwrap();
    let mut out = Vec::new();
    write_common_books(&mut out, &find_common_books(&bookworms)).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Here are books in common:\n- The Handmaid's Tale by Margaret Atwood\n"
    );
}
