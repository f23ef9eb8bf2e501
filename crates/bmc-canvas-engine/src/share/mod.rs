//! Share links: the raw document and its file name packed into a URL token.
//!
//! A token is `percent-encode(base64(utf8(json)))`. Tokens produced before
//! the JSON envelope existed carry the bare document text; those decode
//! with [`LEGACY_FILENAME`].

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// Query parameter carrying the token
pub const SHARE_PARAM: &str = "data";

/// File name given to shared documents that arrive without one
pub const LEGACY_FILENAME: &str = "Shared BMC";

/// Accepts tokens with or without `=` padding
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("Share token is not valid percent-encoding: {0}")]
    PercentDecoding(#[source] std::string::FromUtf8Error),
    #[error("Share token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Share token does not contain UTF-8 text: {0}")]
    Utf8(#[source] std::string::FromUtf8Error),
    #[error("Failed to serialize share payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// What a share link carries: the unparsed source text and its file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub filename: String,
    pub content: String,
}

impl SharePayload {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// Envelope as found on the wire; older writers may omit the file name.
#[derive(Deserialize)]
struct WirePayload {
    #[serde(default)]
    filename: Option<String>,
    content: String,
}

pub fn encode(payload: &SharePayload) -> Result<String, ShareError> {
    let json = serde_json::to_string(payload)?;
    let transport = STANDARD.encode(json.as_bytes());
    Ok(urlencoding::encode(&transport).into_owned())
}

/// Decode a token taken from a share URL.
///
/// Text that is not a JSON envelope is treated as a legacy token holding the
/// raw document. Only a token that is not valid transport encoding at all
/// is an error.
pub fn decode(token: &str) -> Result<SharePayload, ShareError> {
    let transport = urlencoding::decode(token.trim()).map_err(ShareError::PercentDecoding)?;
    let bytes = LENIENT.decode(transport.as_bytes())?;
    let text = String::from_utf8(bytes).map_err(ShareError::Utf8)?;

    match serde_json::from_str::<WirePayload>(&text) {
        Ok(wire) => Ok(SharePayload {
            filename: wire
                .filename
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| LEGACY_FILENAME.to_string()),
            content: wire.content,
        }),
        Err(err) => {
            log::debug!("share token is not a JSON envelope ({err}), reading as legacy text");
            Ok(SharePayload::new(LEGACY_FILENAME, text))
        }
    }
}

/// Build `<base>?data=<token>`, dropping any query or fragment on `base`.
pub fn share_url(base: &str, payload: &SharePayload) -> Result<String, ShareError> {
    Ok(format!(
        "{}?{SHARE_PARAM}={}",
        strip_query(base),
        encode(payload)?
    ))
}

/// The URL without its query string and fragment
pub fn strip_query(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}

/// Value of the `data` query parameter, still percent-encoded.
pub fn token_from_url(url: &str) -> Option<&str> {
    let query = url.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == SHARE_PARAM)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
