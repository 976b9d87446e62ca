//! Path-segment encoding for URLs the client builds from user input.
//!
//! Session tokens are free-form strings. Left raw, a `/`, `?` or `#` in a
//! token would change which route or resource the URL names. The router
//! decodes path parameters, so a token read back from `/reports/{token}`
//! arrives decoded and is encoded again when it goes out.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// ASCII bytes that may not appear raw inside one path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode `raw` for use as a single path segment.
#[must_use]
pub fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}
