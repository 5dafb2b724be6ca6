use std::borrow::Cow;

/// Removes the first occurrence of `sentinel` from `body`.
///
/// Later occurrences are left alone, since the same byte sequence may legitimately
/// appear inside string values. A body without the sentinel is returned unchanged
/// (borrowed), as is any body when `sentinel` is empty.
///
/// # Examples
///
/// ```
/// use gtrends::parse::strip_sentinel;
///
/// let body = b")]}',{\"a\":1}";
/// assert_eq!(&*strip_sentinel(")]}',", body), b"{\"a\":1}");
/// ```
pub fn strip_sentinel<'a>(sentinel: &str, body: &'a [u8]) -> Cow<'a, [u8]> {
    let needle = sentinel.as_bytes();
    if needle.is_empty() || body.len() < needle.len() {
        return Cow::Borrowed(body);
    }

    match body.windows(needle.len()).position(|window| window == needle) {
        // Fast path: the guard sits at the very start
        Some(0) => Cow::Borrowed(&body[needle.len()..]),
        Some(start) => {
            let mut stripped = Vec::with_capacity(body.len() - needle.len());
            stripped.extend_from_slice(&body[..start]);
            stripped.extend_from_slice(&body[start + needle.len()..]);
            Cow::Owned(stripped)
        }
        None => Cow::Borrowed(body),
    }
}
