mod blocking;
mod composite_file_loader;
mod doc_adapter;
mod docx_adapter;
mod ooxml;
mod pdf_adapter;
mod plain_text_adapter;
mod xlsx_adapter;

pub use composite_file_loader::CompositeFileLoader;
pub use doc_adapter::{DocAdapter, normalize_word_text};
pub use docx_adapter::DocxAdapter;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::{PlainTextAdapter, decode_utf8_dropping_invalid};
pub use xlsx_adapter::XlsxAdapter;
