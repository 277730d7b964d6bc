//! Syntax-based normalization ([Section 6 of RFC 3986][1]).
//!
//! [1]: https://datatracker.ietf.org/doc/html/rfc3986#section-6

use crate::component::{find_port, Component, Presence};
use crate::encoding::{decode_hex, find_hex, has_hex};
use crate::parser;
use crate::query::split_segments;
use alloc::string::String;
use alloc::vec::Vec;

/// Normalizes `src` with all components in the mask.
///
/// # Examples
///
/// ```
/// use urispan::normalize_str;
///
/// assert_eq!(
///     normalize_str("HTTPS://WWW.HELLO.COM/path/../this/./blah/blather/../end"),
///     "https://www.hello.com/this/blah/end"
/// );
/// ```
#[must_use]
pub fn normalize_str(src: &str) -> String {
    normalize_masked(src, Presence::ALL)
}

/// Normalizes `src`, restricted to the components whose mask bit is set.
///
/// In order: the scheme and host are lowercased, the hex digits of every
/// `%XX` triple are uppercased, triples encoding unreserved characters are
/// decoded, an empty-port trailing `:` is stripped from the authority, dot
/// segments are removed from the path (an emptied path becomes `/`), and an
/// empty path with an authority present gets a trailing `/`.
#[must_use]
pub fn normalize_masked(src: &str, mask: Presence) -> String {
    let mut out = String::from(src);
    let mut meta = parser::parse(out.as_bytes());

    // 1-2. Case-fold the scheme and host.
    for c in [Component::Scheme, Component::Host] {
        if mask.test(c) && meta.test(c) {
            let r = meta.range(c);
            let (start, end) = (r.offset as usize, r.end() as usize);
            if out[start..end].bytes().any(|b| b.is_ascii_uppercase()) {
                let lowered = out[start..end].to_ascii_lowercase();
                out.replace_range(start..end, &lowered);
            }
        }
    }

    // 3-4. Uppercase the digits of every %XX triple, then decode the
    // triples that encode unreserved characters.
    if has_hex(&out) {
        let mut pos = 0;
        while let Some(h) = find_hex(&out, pos) {
            if out[h + 1..h + 3].bytes().any(|b| b.is_ascii_lowercase()) {
                let upper = out[h + 1..h + 3].to_ascii_uppercase();
                out.replace_range(h + 1..h + 3, &upper);
            }
            pos = h + 3;
        }
        out = decode_hex(&out, true);
        meta = parser::parse(out.as_bytes());
    }

    // 5. An authority ending in ':' with no port loses the ':'.
    if mask.test(Component::Port)
        && meta.test(Component::Authority)
        && !meta.test(Component::Port)
    {
        let a = meta.range(Component::Authority);
        if !a.is_empty() && out.as_bytes()[a.end() as usize - 1] == b':' {
            out.remove(a.end() as usize - 1);
            meta = parser::parse(out.as_bytes());
        }
    }

    // 6. Remove dot segments; an emptied path becomes "/".
    if mask.test(Component::Path) && meta.test(Component::Path) {
        let r = meta.range(Component::Path);
        let (start, end) = (r.offset as usize, r.end() as usize);
        let mut segs: Vec<&str> = split_segments(&out[start..end], false);
        let mut i = 0;
        while i < segs.len() {
            if segs[i] == "." {
                segs.remove(i);
            } else if segs[i] == ".." {
                if i > 0 {
                    segs.remove(i - 1);
                    i -= 1;
                }
                segs.remove(i);
            } else {
                i += 1;
            }
        }
        let mut path = String::new();
        for seg in &segs {
            if !seg.is_empty() {
                path.push('/');
                path.push_str(seg);
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        if path != out[start..end] {
            out.replace_range(start..end, &path);
            meta = parser::parse(out.as_bytes());
        }
    }

    // 7. An empty path with an authority present becomes "/".
    if mask.test(Component::Path)
        && meta.test(Component::Authority)
        && meta.range(Component::Path).is_empty()
    {
        out.push('/');
    }

    out
}

/// Normalizes `src` and additionally elides the port when the scheme is
/// `http` or `https` and the port is that scheme's default.
///
/// # Examples
///
/// ```
/// use urispan::normalize_http_str;
///
/// assert_eq!(normalize_http_str("https://www.test.com:443/"), "https://www.test.com/");
/// assert_eq!(normalize_http_str("https://www.test.com:8080/"), "https://www.test.com:8080/");
/// ```
#[must_use]
pub fn normalize_http_str(src: &str) -> String {
    let mut out = normalize_str(src);
    let meta = parser::parse(out.as_bytes());
    if meta.test(Component::Scheme) && meta.test(Component::Port) {
        let s = meta.range(Component::Scheme);
        let p = meta.range(Component::Port);
        let elide = {
            let scheme = &out[s.offset as usize..s.end() as usize];
            let port = &out[p.offset as usize..p.end() as usize];
            matches!(scheme, "http" | "https") && find_port(scheme) == Some(port)
        };
        if elide {
            // Remove ":port".
            out.replace_range(p.offset as usize - 1..p.end() as usize, "");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_normalization_leaves_unmasked_components() {
        let src = "HTTPS://WWW.HELLO.COM/a/../b";
        let host_only = normalize_masked(src, Presence::of(&[Component::Host]));
        assert_eq!(host_only, "HTTPS://www.hello.com/a/../b");
        let scheme_only = normalize_masked(src, Presence::of(&[Component::Scheme]));
        assert_eq!(scheme_only, "https://WWW.HELLO.COM/a/../b");
    }

    #[test]
    fn idempotent() {
        let sources = [
            "HTTPS://WWW.HELLO.COM/path/%62%6c%6f%67",
            "https://www.test.com",
            "magnet:?xt=urn:btih:c12fe1",
            "https://www.netmeister.org/%62%63%70/%%4%",
        ];
        for src in sources {
            let once = normalize_str(src);
            assert_eq!(normalize_str(&once), once);
        }
    }
}
