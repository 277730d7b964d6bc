//! The URI decomposer.
//!
//! A total, allocation-free, single-pass scanner over the source bytes. It
//! never fails: refused sources come back with an empty presence word and
//! the reason packed into the first range's offset. Everything here is
//! `const fn` so that a borrowed literal can be decomposed at compile time.

use crate::component::{Component, Range, MAX_URI_LEN};
use crate::error::UriError;

/// Decomposition of a source: one range per component plus the presence word.
#[derive(Clone, Copy)]
pub(crate) struct Meta {
    pub(crate) ranges: [Range; Component::COUNT],
    pub(crate) present: u16,
}

impl Meta {
    pub(crate) const EMPTY: Meta = Meta {
        ranges: [Range::EMPTY; Component::COUNT],
        present: 0,
    };

    pub(crate) const fn refused(err: UriError) -> Meta {
        let mut ranges = [Range::EMPTY; Component::COUNT];
        ranges[0] = Range {
            offset: err.code(),
            len: 0,
        };
        Meta { ranges, present: 0 }
    }

    #[inline]
    pub(crate) const fn test(&self, c: Component) -> bool {
        self.present & 1 << c as u16 != 0
    }

    #[inline]
    pub(crate) const fn range(&self, c: Component) -> Range {
        self.ranges[c as usize]
    }
}

const fn find(src: &[u8], byte: u8, from: usize) -> Option<usize> {
    let mut i = from;
    while i < src.len() {
        if src[i] == byte {
            return Some(i);
        }
        i += 1;
    }
    None
}

const fn find_double_slash(src: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 1 < src.len() {
        if src[i] == b'/' && src[i + 1] == b'/' {
            return Some(i);
        }
        i += 1;
    }
    None
}

const fn has_whitespace(src: &[u8]) -> bool {
    let mut i = 0;
    while i < src.len() {
        if matches!(src[i], b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r') {
            return true;
        }
        i += 1;
    }
    false
}

/// Decomposes `src` into component ranges and a presence word.
pub(crate) const fn parse(src: &[u8]) -> Meta {
    let len = src.len();

    // Short-circuit refusals.
    if len == 0 {
        return Meta::refused(UriError::EmptySource);
    }
    if len > MAX_URI_LEN {
        return Meta::refused(UriError::TooLong);
    }
    if has_whitespace(src) {
        // A query may contain spaces; anything else with whitespace is out.
        let legal = match (find(src, b'?', 0), find(src, b' ', 0)) {
            (Some(q), Some(sp)) => q < sp,
            _ => false,
        };
        if !legal {
            return Meta::refused(UriError::IllegalChars);
        }
    }

    let mut ranges = [Range::EMPTY; Component::COUNT];
    let mut present: u16 = 0;

    let mut pos: usize = 0;
    let mut hst: usize = 0;
    let mut path_start: Option<usize> = None;
    let mut short_circuit_query = false;

    if let Some(colon) = find(src, b':', 0) {
        ranges[Component::Scheme as usize] = Range::new(0, colon);
        present |= 1 << Component::Scheme as u16;
        pos = colon + 1;
    }

    if pos < len && src[pos] == b'?' {
        // Scheme directly followed by a query (magnet-style): no authority,
        // no path.
        short_circuit_query = true;
    } else if let Some(slashes) = find_double_slash(src, pos) {
        let auth = slashes + 2;
        let pstart = match find(src, b'/', auth) {
            Some(p) => p,
            None => len,
        };
        path_start = Some(pstart);
        ranges[Component::Authority as usize] = Range::new(auth, pstart - auth);
        present |= 1 << Component::Authority as u16;
        hst = auth;
        pos = auth;

        // Userinfo ends at the first '@' inside the authority.
        let mut at: Option<usize> = None;
        if let Some(u) = find(src, b'@', auth) {
            if u < pstart {
                at = Some(u);
            }
        }
        if let Some(user_end) = at {
            let mut pw_colon: Option<usize> = None;
            if let Some(p) = find(src, b':', auth) {
                if p < user_end {
                    pw_colon = Some(p);
                }
            }
            if let Some(pw) = pw_colon {
                ranges[Component::User as usize] = Range::new(auth, pw - auth);
                if user_end - pw - 1 > 0 {
                    ranges[Component::Password as usize] =
                        Range::new(pw + 1, user_end - pw - 1);
                    present |= 1 << Component::Password as u16;
                }
            } else {
                ranges[Component::User as usize] = Range::new(auth, user_end - auth);
            }
            present |= 1 << Component::User as u16;
            ranges[Component::Userinfo as usize] = Range::new(auth, user_end - auth);
            present |= 1 << Component::Userinfo as u16;
            hst = user_end + 1;
            pos = user_end + 1;
        }

        // Port. The colon must lie inside the authority, the authority must
        // not be a bracketed IP literal, and no '?' may precede the colon
        // (a colon embedded in a query is not a port separator).
        let bracketed =
            auth < pstart && (src[auth] == b'[' || src[pstart - 1] == b']');
        if !bracketed {
            if let Some(colon) = find(src, b':', pos) {
                if colon < pstart {
                    let query_before = match find(src, b'?', auth) {
                        Some(q) => q < colon,
                        None => false,
                    };
                    if !query_before && colon + 1 < len {
                        ranges[Component::Port as usize] =
                            Range::new(colon + 1, len - (colon + 1));
                        present |= 1 << Component::Port as u16;
                    }
                }
            }
        }
    }

    if let Some(pstart) = path_start {
        let host_end;
        if present & 1 << Component::Port as u16 != 0 {
            let port_off = ranges[Component::Port as usize].offset as usize;
            if pstart == port_off {
                // Trailing ':' with no digits: no port, but the host still
                // stops before the colon.
                present &= !(1 << Component::Port as u16);
                ranges[Component::Port as usize] = Range::EMPTY;
            } else {
                ranges[Component::Port as usize].len = (pstart - port_off) as u16;
            }
            host_end = port_off - 1;
        } else {
            host_end = pstart;
        }
        ranges[Component::Host as usize] = Range::new(hst, host_end - hst);
        if host_end - hst > 0 {
            present |= 1 << Component::Host as u16;
        }
        ranges[Component::Path as usize] = Range::new(pstart, len - pstart);
        present |= 1 << Component::Path as u16;
    } else if !short_circuit_query {
        // No authority: the path runs from the first '/', or from the
        // cursor when a scheme was recognized.
        if let Some(slash) = find(src, b'/', pos) {
            ranges[Component::Path as usize] = Range::new(slash, len - slash);
            present |= 1 << Component::Path as u16;
        } else if present & 1 << Component::Scheme as u16 != 0 {
            ranges[Component::Path as usize] = Range::new(pos, len - pos);
            present |= 1 << Component::Path as u16;
        }
    }

    if let Some(q) = find(src, b'?', pos) {
        if present & 1 << Component::Path as u16 != 0
            && q >= ranges[Component::Path as usize].offset as usize
        {
            ranges[Component::Path as usize].len =
                (q - ranges[Component::Path as usize].offset as usize) as u16;
        }
        ranges[Component::Query as usize] = Range::new(q + 1, len - (q + 1));
        present |= 1 << Component::Query as u16;
    }

    if let Some(h) = find(src, b'#', pos) {
        if present & 1 << Component::Query as u16 != 0
            && h >= ranges[Component::Query as usize].offset as usize
        {
            ranges[Component::Query as usize].len =
                (h - ranges[Component::Query as usize].offset as usize) as u16;
        }
        ranges[Component::Fragment as usize] = Range::new(h + 1, len - (h + 1));
        present |= 1 << Component::Fragment as u16;
    }

    Meta { ranges, present }
}
