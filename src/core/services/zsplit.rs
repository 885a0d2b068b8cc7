//! NUL-stream splitting
//!
//! Every `-z` listing git produces is decoded here, so paths with spaces,
//! newlines or non-ASCII bytes are handled the same way everywhere.

use log::warn;

/// Split `bytes` on NUL, dropping the one empty token a terminating NUL leaves
///
/// Empty tokens elsewhere are kept as they are.
#[must_use]
pub fn zsplit(bytes: &[u8]) -> Vec<&[u8]> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let body = bytes.strip_suffix(b"\0").unwrap_or(bytes);
    body.split(|&b| b == 0).collect()
}

/// [`zsplit`] and decode each token as UTF-8, replacing invalid sequences
#[must_use]
pub fn zsplit_lossy(bytes: &[u8]) -> Vec<String> {
    zsplit(bytes)
        .into_iter()
        .map(|token| match std::str::from_utf8(token) {
            Ok(text) => text.to_string(),
            Err(_) => {
                let text = String::from_utf8_lossy(token).into_owned();
                warn!("path is not valid UTF-8, using {text:?}");
                text
            },
        })
        .collect()
}
