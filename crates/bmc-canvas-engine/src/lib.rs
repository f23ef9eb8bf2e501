pub mod io;
pub mod layout;
pub mod models;
pub mod parsing;
pub mod session;
pub mod share;
pub mod template;
pub mod viewport;

// Re-export key types for easier usage
pub use io::{LoadError, LoadOutcome, LoadedDocument};
pub use layout::CanvasLayout;
pub use models::*;
pub use parsing::{normalize_heading, parse_document};
pub use session::{CanvasSession, Clipboard, ClipboardError, Notice, SharedLoad};
pub use share::{ShareError, SharePayload};
pub use viewport::{GestureState, InputEvent, PointerButton, Transform, ViewMode, ViewportController};
