//! One open canvas: the loaded document, its source text and the viewport.
//!
//! The session is the single writer of the document. Every load (picked
//! file, background read or share link) replaces document, source text and
//! file name together and snaps the viewport back to the mode default.

use std::fmt;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};

use bmc_canvas_config::ViewportConfig;

use crate::io::{self, LoadOutcome, LoadedDocument};
use crate::layout::CanvasLayout;
use crate::models::Document;
use crate::parsing::parse_document;
use crate::share::{self, LEGACY_FILENAME, SharePayload};
use crate::viewport::ViewportController;

/// Outcome the user should be told about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    FileLoaded,
    InvalidFile,
    SharedLoaded,
    LinkCopied,
    CopyFailed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Notice::FileLoaded => "📄 BMC file loaded successfully!",
            Notice::InvalidFile => "❌ Please select a valid .md file",
            Notice::SharedLoaded => "🔗 Shared BMC loaded successfully!",
            Notice::LinkCopied => "🔗 Shareable link copied to clipboard!",
            Notice::CopyFailed => "❌ Failed to copy link to clipboard",
        };
        f.write_str(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard is not available")]
    Unavailable,
    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}

/// System clipboard as provided by the host.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Result of opening a share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedLoad {
    pub notice: Notice,
    /// Address to put in the history in place of the share link
    pub clean_url: String,
}

#[derive(Debug)]
pub struct CanvasSession {
    loaded: Option<LoadedDocument>,
    viewport: ViewportController,
    pending: Option<Receiver<LoadOutcome>>,
    share_link: Option<String>,
}

impl CanvasSession {
    pub fn new(config: ViewportConfig, viewport_width: f64) -> Self {
        let mut viewport = ViewportController::new(config, viewport_width);
        viewport.set_content_size(CanvasLayout::estimate(None).size());
        Self {
            loaded: None,
            viewport,
            pending: None,
            share_link: None,
        }
    }

    pub fn document(&self) -> Option<&Document> {
        self.loaded.as_ref().map(|l| &l.document)
    }

    /// Source text of the loaded document
    pub fn raw(&self) -> Option<&str> {
        self.loaded.as_ref().map(|l| l.raw.as_str())
    }

    pub fn filename(&self) -> Option<&str> {
        self.loaded.as_ref().map(|l| l.filename.as_str())
    }

    /// Last link produced by [`CanvasSession::share`]
    pub fn share_link(&self) -> Option<&str> {
        self.share_link.as_deref()
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportController {
        &mut self.viewport
    }

    pub fn layout(&self) -> CanvasLayout {
        CanvasLayout::estimate(self.document())
    }

    /// Open a file the host read on our behalf.
    pub fn open_file(&mut self, name: &str, mime: Option<&str>, bytes: Vec<u8>) -> Notice {
        self.apply_outcome(io::load_bytes(name, mime, bytes))
    }

    /// Start reading `path` in the background; see [`CanvasSession::poll_load`].
    ///
    /// A load already in flight is abandoned.
    pub fn begin_load(&mut self, path: PathBuf) {
        log::debug!("loading {} in background", path.display());
        self.pending = Some(io::spawn_load(path));
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply the background load if it has finished.
    pub fn poll_load(&mut self) -> Option<Notice> {
        let rx = self.pending.as_ref()?;
        match rx.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                Some(self.apply_outcome(outcome))
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::warn!("background load ended without a result");
                self.pending = None;
                Some(Notice::InvalidFile)
            }
        }
    }

    fn apply_outcome(&mut self, outcome: LoadOutcome) -> Notice {
        match outcome {
            Ok(loaded) => {
                log::info!(
                    "loaded {} ({} sections)",
                    loaded.filename,
                    loaded.document.len()
                );
                self.replace(loaded);
                Notice::FileLoaded
            }
            Err(err) => {
                log::warn!("rejected file: {err}");
                Notice::InvalidFile
            }
        }
    }

    fn replace(&mut self, loaded: LoadedDocument) {
        self.loaded = Some(loaded);
        let content = self.layout().size();
        self.viewport.set_content_size(content);
        self.viewport.reset();
    }

    /// Load the canvas carried by a share link, if `url` has one.
    ///
    /// A token that cannot be decoded at all is logged and ignored; the
    /// current canvas and the address bar are left untouched.
    pub fn load_from_url(&mut self, url: &str) -> Option<SharedLoad> {
        let token = share::token_from_url(url)?;
        let payload = match share::decode(token) {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!("ignoring undecodable share link: {err}");
                return None;
            }
        };
        let document = parse_document(&payload.content);
        log::info!(
            "opened shared canvas {} ({} sections)",
            payload.filename,
            document.len()
        );
        self.replace(LoadedDocument {
            filename: payload.filename,
            raw: payload.content,
            document,
        });
        Some(SharedLoad {
            notice: Notice::SharedLoaded,
            clean_url: share::strip_query(url).to_string(),
        })
    }

    /// Copy a link to the current canvas onto the clipboard.
    ///
    /// Returns `None` when there is nothing to share. Clipboard failures
    /// are reported through the notice only.
    pub fn share(&mut self, base_url: &str, clipboard: &mut impl Clipboard) -> Option<Notice> {
        let payload = self.share_payload()?;
        let url = match share::share_url(base_url, &payload) {
            Ok(url) => url,
            Err(err) => {
                log::warn!("could not build share link: {err}");
                return Some(Notice::CopyFailed);
            }
        };
        self.share_link = Some(url.clone());

        match clipboard.write_text(&url) {
            Ok(()) => {
                log::info!("share link copied ({} bytes)", url.len());
                Some(Notice::LinkCopied)
            }
            Err(err) => {
                log::warn!("{err}");
                Some(Notice::CopyFailed)
            }
        }
    }

    fn share_payload(&self) -> Option<SharePayload> {
        let loaded = self.loaded.as_ref()?;
        let content = if !loaded.raw.is_empty() {
            loaded.raw.clone()
        } else if !loaded.document.is_empty() {
            loaded.document.to_markdown()
        } else {
            return None;
        };
        let filename = if loaded.filename.is_empty() {
            LEGACY_FILENAME
        } else {
            loaded.filename.as_str()
        };
        Some(SharePayload::new(filename, content))
    }
}
