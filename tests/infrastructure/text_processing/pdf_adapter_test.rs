use docsum::application::ports::{FileLoader, FileLoaderError};
use docsum::domain::UploadedFile;
use docsum::infrastructure::text_processing::PdfAdapter;

use crate::helpers::fixtures::{pdf_bytes, pdf_bytes_with_blank_pages};

#[tokio::test]
async fn given_valid_pdf_bytes_when_extracting_then_returns_page_text() {
    let adapter = PdfAdapter::new();
    let file = UploadedFile::new("sample.pdf".to_string(), pdf_bytes(&["Hello PDF"]), 0);

    let text = adapter.extract_text(&file).await.unwrap();

    assert!(text.contains("Hello PDF"), "unexpected text: {text:?}");
}

#[tokio::test]
async fn given_multi_page_pdf_when_extracting_then_keeps_page_order() {
    let adapter = PdfAdapter::new();
    let file = UploadedFile::new(
        "pages.pdf".to_string(),
        pdf_bytes(&["First page", "Second page"]),
        0,
    );

    let text = adapter.extract_text(&file).await.unwrap();

    let first = text.find("First page").unwrap();
    let second = text.find("Second page").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();
    let file = UploadedFile::new("corrupt.pdf".to_string(), b"not a pdf at all".to_vec(), 0);

    let result = adapter.extract_text(&file).await;

    match result {
        Err(FileLoaderError::ExtractionFailed { filename, .. }) => {
            assert_eq!(filename, "corrupt.pdf")
        }
        other => panic!("expected extraction failure, got {other:?}"),
    }
}

#[tokio::test]
async fn given_page_without_content_when_extracting_then_surrounding_pages_are_kept() {
    let adapter = PdfAdapter::new();
    let file = UploadedFile::new(
        "gap.pdf".to_string(),
        pdf_bytes_with_blank_pages(&[Some("First page"), None, Some("Third page")]),
        0,
    );

    let text = adapter.extract_text(&file).await.unwrap();

    let first = text.find("First page").expect("first page text missing");
    let third = text.find("Third page").expect("third page text missing");
    assert!(first < third);
}
