//! Building URI strings from component tables.

use crate::component::{Component, Presence};
use crate::encoding::encode_hex;
use alloc::borrow::Cow;
use alloc::string::String;

fn table_value(value: &str, encode: bool) -> Cow<'_, str> {
    if encode {
        Cow::Owned(encode_hex(value, true))
    } else {
        Cow::Borrowed(value)
    }
}

/// Builds a URI string from `(component, value)` pairs.
///
/// Components are emitted in component order with their structural
/// delimiters; an `authority` value wins over individual authority parts
/// and a `userinfo` value over `user`/`password`. With `encode` set, every
/// value is percent-encoded first.
///
/// # Examples
///
/// ```
/// use urispan::{make_uri, Component};
///
/// let s = make_uri(
///     &[
///         (Component::Scheme, "https"),
///         (Component::User, "dakka"),
///         (Component::Host, "www.blah.com"),
///         (Component::Port, "3000"),
///         (Component::Path, "/"),
///     ],
///     false,
/// );
/// assert_eq!(s, "https://dakka@www.blah.com:3000/");
/// ```
#[must_use]
pub fn make_uri(patch: &[(Component, &str)], encode: bool) -> String {
    let mut base = Presence::EMPTY;
    let mut values: [Cow<'_, str>; Component::COUNT] =
        core::array::from_fn(|_| Cow::Borrowed(""));
    for &(c, value) in patch {
        base.set(c);
        values[c as usize] = table_value(value, encode);
    }
    emit(base, &values)
}

/// Merges a patch over the set components of an existing URI, resolves the
/// cross-component overrides, and re-emits the source string.
pub(crate) fn make_edit<'a>(
    current: &[(Component, &'a str)],
    patch: &[(Component, &'a str)],
    encode: bool,
) -> String {
    let mut base = Presence::EMPTY;
    let mut values: [Cow<'a, str>; Component::COUNT] =
        core::array::from_fn(|_| Cow::Borrowed(""));
    for &(c, value) in current {
        base.set(c);
        values[c as usize] = Cow::Borrowed(value);
    }
    for &(c, value) in patch {
        base.set(c);
        values[c as usize] = table_value(value, encode);
        if value.is_empty() {
            // Emptying an enclosing component empties its parts.
            match c {
                Component::Authority => {
                    for part in [
                        Component::Userinfo,
                        Component::User,
                        Component::Password,
                        Component::Host,
                        Component::Port,
                    ] {
                        base.set(part);
                        values[part as usize] = Cow::Borrowed("");
                    }
                }
                Component::Userinfo => {
                    for part in [Component::User, Component::Password] {
                        base.set(part);
                        values[part as usize] = Cow::Borrowed("");
                    }
                }
                _ => {}
            }
        }
    }
    if !base.any() {
        return String::new();
    }
    // Individual parts force re-emission from the parts.
    if base.any_authority() {
        base.clear(Component::Authority);
    }
    if base.test(Component::Userinfo) && base.any_userinfo() {
        base.clear(Component::Userinfo);
    }
    emit(base, &values)
}

fn emit(base: Presence, values: &[Cow<'_, str>; Component::COUNT]) -> String {
    let mut out = String::new();
    let mut done = Presence::EMPTY;
    for c in Component::ALL {
        if !base.test(c) || done.test(c) {
            continue;
        }
        let value: &str = &values[c as usize];
        match c {
            Component::Scheme => {
                out.push_str(value);
                out.push(':');
                if base.any_authority() {
                    out.push_str("//");
                }
            }
            Component::Authority => {
                if !base.any_authority() {
                    out.push_str("//");
                }
                out.push_str(value);
            }
            Component::Userinfo => {
                if base.test(Component::Authority) || base.any_userinfo() {
                    continue;
                }
                out.push_str(value);
            }
            Component::User => {
                if value.is_empty()
                    && (base.test(Component::Authority) || base.test(Component::Userinfo))
                {
                    continue;
                }
                out.push_str(value);
            }
            Component::Password => {
                if base.test(Component::Authority) || base.test(Component::Userinfo) {
                    continue;
                }
                if !value.is_empty() {
                    out.push(':');
                    out.push_str(value);
                }
            }
            Component::Host => {
                if base.test(Component::Authority) {
                    continue;
                }
                let userinfo_emitted = (!values[Component::User as usize].is_empty()
                    || !values[Component::Password as usize].is_empty())
                    && (done.test(Component::User) || done.test(Component::Password));
                if userinfo_emitted {
                    out.push('@');
                }
                out.push_str(value);
            }
            Component::Port => {
                if base.test(Component::Authority) {
                    continue;
                }
                if !value.is_empty() {
                    out.push(':');
                    out.push_str(value);
                }
            }
            Component::Path => {
                if !value.is_empty() {
                    // A single '/' boundary between the emitted prefix and
                    // the path, unless either side already has one or the
                    // prefix ends the scheme.
                    if !out.is_empty()
                        && !out.ends_with('/')
                        && !out.ends_with(':')
                        && !value.starts_with('/')
                    {
                        out.push('/');
                    }
                    out.push_str(value);
                }
            }
            Component::Query => {
                if !value.is_empty() {
                    if !value.starts_with('?') {
                        out.push('?');
                    }
                    out.push_str(value);
                }
            }
            Component::Fragment => {
                if !value.is_empty() {
                    if !value.starts_with('#') {
                        out.push('#');
                    }
                    out.push_str(value);
                }
            }
        }
        done.set(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_value_wins_over_parts() {
        let s = make_uri(
            &[
                (Component::Scheme, "https"),
                (Component::Authority, "a@b:1"),
                (Component::Host, "ignored"),
                (Component::Path, "/p"),
            ],
            false,
        );
        assert_eq!(s, "https://a@b:1/p");
    }

    #[test]
    fn empty_patch_builds_nothing() {
        assert_eq!(make_uri(&[], false), "");
    }

    #[test]
    fn path_boundary_slash() {
        let s = make_uri(
            &[
                (Component::Scheme, "https"),
                (Component::Host, "h"),
                (Component::Path, "p"),
            ],
            false,
        );
        assert_eq!(s, "https://h/p");
        let s = make_uri(&[(Component::Scheme, "mailto"), (Component::Path, "a@b")], false);
        assert_eq!(s, "mailto:a@b");
    }
}
