use crate::models::Document;
use crate::parsing::parse_document;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];
const MARKDOWN_MIME: &str = "text/markdown";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Not a markdown file: {0}")]
    UnsupportedFile(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("File is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// A document read from disk or handed over by the host, with its source.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub filename: String,
    pub raw: String,
    pub document: Document,
}

pub type LoadOutcome = Result<LoadedDocument, LoadError>;

/// Whether a picked file looks like markdown, by extension or MIME type
pub fn accepts_file(name: &str, mime: Option<&str>) -> bool {
    let by_extension = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        });
    by_extension || mime.is_some_and(|m| m.eq_ignore_ascii_case(MARKDOWN_MIME))
}

/// Check, decode and parse file contents supplied by the host.
pub fn load_bytes(name: &str, mime: Option<&str>, bytes: Vec<u8>) -> LoadOutcome {
    if !accepts_file(name, mime) {
        return Err(LoadError::UnsupportedFile(name.to_string()));
    }
    let raw = String::from_utf8(bytes)?;
    let document = parse_document(&raw);
    log::debug!("parsed {name}: {} sections", document.len());
    Ok(LoadedDocument {
        filename: name.to_string(),
        raw,
        document,
    })
}

/// Read and parse a markdown file
pub fn read_document_file(path: &Path) -> LoadOutcome {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !accepts_file(&name, None) {
        return Err(LoadError::UnsupportedFile(path.display().to_string()));
    }
    let bytes = fs::read(path)?;
    load_bytes(&name, None, bytes)
}

/// Load `path` on a worker thread.
///
/// Exactly one outcome is sent; the receiver sees a disconnect only if the
/// worker panicked.
pub fn spawn_load(path: PathBuf) -> Receiver<LoadOutcome> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = read_document_file(&path);
        // Receiver may have been dropped; nothing left to notify
        let _ = tx.send(outcome);
    });
    rx
}
