/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! XML element writer.
//!
//! Fields serialize to a bare `<tag>text</tag>` element with no attributes
//! and no escaping. Content must already be safe to embed.

use bytes::{BufMut, BytesMut};

/// Returns the encoded length of an element in bytes.
#[inline]
#[must_use]
pub const fn element_len(tag: &str, text: &str) -> usize {
    2 * tag.len() + text.len() + 5
}

/// Builds `<tag>text</tag>` as a new string.
#[must_use]
pub fn element(tag: &str, text: &str) -> String {
    let mut out = String::with_capacity(element_len(tag, text));
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(text);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}

/// Appends `<tag>text</tag>` to a buffer.
#[inline]
pub fn put_element(buf: &mut BytesMut, tag: &str, text: &str) {
    buf.reserve(element_len(tag, text));
    buf.put_u8(b'<');
    buf.put_slice(tag.as_bytes());
    buf.put_u8(b'>');
    buf.put_slice(text.as_bytes());
    buf.put_slice(b"</");
    buf.put_slice(tag.as_bytes());
    buf.put_u8(b'>');
}
