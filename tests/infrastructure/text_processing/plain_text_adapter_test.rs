use docsum::application::ports::{FileLoader, FileLoaderError};
use docsum::domain::UploadedFile;
use docsum::infrastructure::text_processing::{PlainTextAdapter, decode_utf8_dropping_invalid};

fn upload(name: &str, data: &[u8]) -> UploadedFile {
    UploadedFile::new(name.to_string(), data.to_vec(), 0)
}

#[tokio::test]
async fn given_valid_utf8_bytes_when_extracting_then_returns_string() {
    let adapter = PlainTextAdapter;

    let result = adapter
        .extract_text(&upload("readme.txt", b"Hello, this is plain text."))
        .await;

    assert_eq!(result, Ok("Hello, this is plain text.".to_string()));
}

#[tokio::test]
async fn given_invalid_utf8_bytes_when_extracting_then_drops_them() {
    let adapter = PlainTextAdapter;
    let bytes: &[u8] = &[b'H', b'i', 0xFF, 0xFE, b'!', 0xC3];

    let result = adapter.extract_text(&upload("broken.txt", bytes)).await;

    assert_eq!(result, Ok("Hi!".to_string()));
}

#[tokio::test]
async fn given_non_text_file_when_extracting_then_returns_unsupported() {
    let adapter = PlainTextAdapter;

    let result = adapter.extract_text(&upload("file.pdf", b"data")).await;

    assert_eq!(
        result,
        Err(FileLoaderError::UnsupportedFormat("file.pdf".to_string()))
    );
}

#[test]
fn given_multibyte_text_when_decoding_then_keeps_characters() {
    assert_eq!(decode_utf8_dropping_invalid("naïve café".as_bytes()), "naïve café");
}
