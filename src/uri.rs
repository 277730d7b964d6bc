use crate::build::{self, make_uri};
use crate::component::{Component, Presence, Range};
use crate::error::UriError;
use crate::normalize::{normalize_http_str, normalize_str};
use crate::parser::{self, Meta};
use crate::query::{self, QueryResult, Segments};
use crate::storage::{Bounded, Storage, StorageMut};
use alloc::string::String;
use alloc::vec::Vec;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub(crate) fn slice(src: &str, r: Range) -> &str {
    src.get(r.offset as usize..r.end() as usize).unwrap_or("")
}

macro_rules! component_has {
    ($(($has:ident, $variant:ident, $name:literal),)*) => {
        $(
            #[doc = concat!("Whether the ", $name, " component is present.")]
            #[inline]
            #[must_use]
            pub const fn $has(&self) -> bool {
                self.test(Component::$variant)
            }
        )*
    };
}

// The value-returning read surface, written once and instantiated twice:
// at `'a` for the borrowed view (slices of the source itself) and at the
// anonymous lifetime for the owning storages (borrows of the URI value).
macro_rules! read_accessors {
    ($out:lifetime) => {
        /// Returns component `c`, or `""` when absent.
        ///
        /// The presence bit is the source of truth for telling an absent
        /// component from an empty one.
        #[must_use]
        pub fn component(&self, c: Component) -> &$out str {
            slice(self.as_str(), self.range(c))
        }

        /// Returns the scheme component, or `""` when absent.
        #[inline]
        #[must_use]
        pub fn scheme(&self) -> &$out str {
            self.component(Component::Scheme)
        }

        /// Returns the authority component, or `""` when absent.
        #[inline]
        #[must_use]
        pub fn authority(&self) -> &$out str {
            self.component(Component::Authority)
        }

        /// Returns the userinfo component, or `""` when absent.
        #[inline]
        #[must_use]
        pub fn userinfo(&self) -> &$out str {
            self.component(Component::Userinfo)
        }

        /// Returns the user component, or `""` when absent.
        #[inline]
        #[must_use]
        pub fn user(&self) -> &$out str {
            self.component(Component::User)
        }

        /// Returns the password component, or `""` when absent.
        #[inline]
        #[must_use]
        pub fn password(&self) -> &$out str {
            self.component(Component::Password)
        }

        /// Returns the host component, or `""` when absent.
        #[inline]
        #[must_use]
        pub fn host(&self) -> &$out str {
            self.component(Component::Host)
        }

        /// Returns the port component, or `""` when absent.
        #[inline]
        #[must_use]
        pub fn port(&self) -> &$out str {
            self.component(Component::Port)
        }

        /// Returns the path component, or `""` when absent.
        #[inline]
        #[must_use]
        pub fn path(&self) -> &$out str {
            self.component(Component::Path)
        }

        /// Returns the query component, or `""` when absent.
        #[inline]
        #[must_use]
        pub fn query(&self) -> &$out str {
            self.component(Component::Query)
        }

        /// Returns the fragment component, or `""` when absent.
        #[inline]
        #[must_use]
        pub fn fragment(&self) -> &$out str {
            self.component(Component::Fragment)
        }

        /// Iterates the present components in component order.
        #[must_use]
        pub fn components(&self) -> Components<$out> {
            Components {
                src: self.as_str(),
                meta: self.meta,
                next: 0,
            }
        }

        /// Decodes the query into key/value pairs split on `&` and `=`,
        /// optionally sorted by key.
        ///
        /// # Examples
        ///
        /// ```
        /// use urispan::UriView;
        ///
        /// let uri = UriView::new("http://host.com/?b=2&a=1&flag");
        /// assert_eq!(uri.decode_query(false), [("b", "2"), ("a", "1"), ("flag", "")]);
        /// assert_eq!(uri.decode_query(true), [("a", "1"), ("b", "2"), ("flag", "")]);
        /// ```
        #[must_use]
        pub fn decode_query(&self, sort: bool) -> QueryResult<$out> {
            self.decode_query_with('&', '=', sort)
        }

        /// Decodes the query with custom pair and key/value separators.
        #[must_use]
        pub fn decode_query_with(
            &self,
            pair_sep: char,
            kv_sep: char,
            sort: bool,
        ) -> QueryResult<$out> {
            if !self.test(Component::Query) {
                return QueryResult::new();
            }
            let mut result =
                query::split_query(self.component(Component::Query), pair_sep, kv_sep);
            if sort {
                query::sort_query(&mut result);
            }
            result
        }

        /// Decodes the path into its `/`-separated segments. With `filter`
        /// set, a `./` at the start of a segment slot is skipped. Empty
        /// segments between two `/` are preserved.
        ///
        /// # Examples
        ///
        /// ```
        /// use urispan::UriView;
        ///
        /// let uri = UriView::new("http://host.com/a//b");
        /// assert_eq!(uri.decode_segments(true), ["a", "", "b"]);
        /// ```
        #[must_use]
        pub fn decode_segments(&self, filter: bool) -> Segments<$out> {
            if !self.test(Component::Path) {
                return Segments::new();
            }
            query::split_segments(self.component(Component::Path), filter)
        }
    };
}

macro_rules! component_mut {
    ($(($add:ident, $remove:ident, $variant:ident, $name:literal),)*) => {
        $(
            #[doc = concat!("Sets the ", $name, " component through [`edit`](Self::edit).")]
            pub fn $add(&mut self, value: &str, encode: bool) -> u32 {
                self.add(Component::$variant, value, encode)
            }

            #[doc = concat!("Removes the ", $name, " component from the source.")]
            pub fn $remove(&mut self) -> u32 {
                self.remove(Component::$variant)
            }
        )*
    };
}

/// A decomposed URI: a backing source plus one byte range per component and
/// a presence bitmap.
///
/// The storage parameter selects the discipline: `Uri<&str>` (borrowed, see
/// [`UriView`]), `Uri<String>` (owning, the default), or `Uri<Bounded<N>>`
/// (fixed-capacity inline, see [`UriStatic`]).
///
/// Construction is total. A refused source yields a URI with no component
/// set; check [`has_any`](Self::has_any) or [`error`](Self::error).
///
/// # Examples
///
/// ```
/// use urispan::{Component, UriView};
///
/// let uri = UriView::new("https://dakka@www.blah.com:3000/");
/// assert_eq!(uri.scheme(), "https");
/// assert_eq!(uri.authority(), "dakka@www.blah.com:3000");
/// assert_eq!(uri.user(), "dakka");
/// assert_eq!(uri.host(), "www.blah.com");
/// assert_eq!(uri.port(), "3000");
/// assert_eq!(uri.path(), "/");
/// assert!(!uri.has_query());
/// ```
#[derive(Clone, Copy)]
pub struct Uri<S = String> {
    pub(crate) storage: S,
    pub(crate) meta: Meta,
}

/// A URI borrowing its source.
///
/// The source must outlive the view; in exchange the view is `Copy`, never
/// allocates, and its accessors return slices of the source itself, which
/// stay usable after the view is gone:
///
/// ```
/// use urispan::UriView;
///
/// let query = UriView::new("magnet:?xt=urn:btih:c12fe1").query();
/// assert_eq!(query, "xt=urn:btih:c12fe1");
/// ```
///
/// An owning URI instead hands out borrows of itself, which do not:
///
/// ```compile_fail
/// let query = urispan::Uri::new("magnet:?xt=urn:btih:c12fe1").query();
/// assert_eq!(query, "xt=urn:btih:c12fe1");
/// ```
pub type UriView<'a> = Uri<&'a str>;

/// A URI over a fixed-capacity inline buffer of `N` bytes.
///
/// Construction from a source longer than `N` yields an empty buffer with
/// error kind [`UriError::TooLong`].
pub type UriStatic<const N: usize> = Uri<Bounded<N>>;

/// A compile-time immutable URI.
///
/// [`UriView::new`] is `const`, so a literal can be decomposed in a `const`
/// item and every range is computed at compile time.
///
/// # Examples
///
/// ```
/// use urispan::UriFixed;
///
/// const URI: UriFixed = UriFixed::new("https://example.com:8042/over/there");
/// assert_eq!(URI.port(), "8042");
/// ```
pub type UriFixed = Uri<&'static str>;

impl<'a> Uri<&'a str> {
    /// Decomposes a borrowed source.
    #[must_use]
    pub const fn new(src: &'a str) -> Self {
        Uri {
            storage: src,
            meta: parser::parse(src.as_bytes()),
        }
    }

    /// Re-points the view at a new source and re-parses, returning the
    /// number of components found.
    pub fn assign(&mut self, src: &'a str) -> u32 {
        self.storage = src;
        self.meta = parser::parse(src.as_bytes());
        self.count()
    }

    /// Returns the source. The slice borrows the source, not the view.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.storage
    }

    read_accessors!('a);
}

impl Uri<String> {
    /// Decomposes an owned source.
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        let storage = src.into();
        let meta = parser::parse(storage.as_bytes());
        Uri { storage, meta }
    }

    /// Builds a URI from `(component, value)` pairs; see [`make_uri`].
    #[must_use]
    pub fn factory(patch: &[(Component, &str)], encode: bool) -> Self {
        Self::new(make_uri(patch, encode))
    }

    /// Consumes the URI and yields the underlying [`String`].
    #[must_use]
    pub fn into_string(self) -> String {
        self.storage
    }
}

impl<const N: usize> Uri<Bounded<N>> {
    /// Decomposes a source into inline storage.
    ///
    /// A source longer than `N` bytes is refused with
    /// [`UriError::TooLong`] and the storage stays empty.
    #[must_use]
    pub fn new(src: &str) -> Self {
        let mut storage = Bounded::new();
        if !storage.set(src) {
            return Uri {
                storage,
                meta: Meta::refused(UriError::TooLong),
            };
        }
        let meta = parser::parse(storage.as_str().as_bytes());
        Uri { storage, meta }
    }

    /// Builds a URI from `(component, value)` pairs; see [`make_uri`].
    #[must_use]
    pub fn factory(patch: &[(Component, &str)], encode: bool) -> Self {
        Self::new(&make_uri(patch, encode))
    }
}

impl<S> Uri<S> {
    /// Number of components present.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.meta.present.count_ones()
    }

    /// The presence bitmap.
    #[inline]
    #[must_use]
    pub const fn present(&self) -> Presence {
        Presence::from_bits(self.meta.present)
    }

    /// Whether component `c` is present.
    #[inline]
    #[must_use]
    pub const fn test(&self, c: Component) -> bool {
        self.meta.test(c)
    }

    /// Whether any component is present.
    ///
    /// This is the generic success check: a refused parse has no component,
    /// and so does a successful parse of a source in which nothing was
    /// located (`"www.hello.com"` has no scheme, no `//` and no `/`).
    /// [`error`](Self::error) distinguishes the two.
    #[inline]
    #[must_use]
    pub const fn has_any(&self) -> bool {
        self.meta.present != 0
    }

    /// Whether any of host, password, port, user or userinfo is present.
    #[inline]
    #[must_use]
    pub const fn has_any_authority(&self) -> bool {
        self.present().any_authority()
    }

    /// Whether user or password is present.
    #[inline]
    #[must_use]
    pub const fn has_any_userinfo(&self) -> bool {
        self.present().any_userinfo()
    }

    component_has! {
        (has_scheme, Scheme, "scheme"),
        (has_authority, Authority, "authority"),
        (has_userinfo, Userinfo, "userinfo"),
        (has_user, User, "user"),
        (has_password, Password, "password"),
        (has_host, Host, "host"),
        (has_port, Port, "port"),
        (has_path, Path, "path"),
        (has_query, Query, "query"),
        (has_fragment, Fragment, "fragment"),
    }

    /// The `(offset, len)` range of component `c`.
    #[inline]
    #[must_use]
    pub const fn range(&self, c: Component) -> Range {
        self.meta.range(c)
    }

    /// The full range table.
    #[inline]
    #[must_use]
    pub const fn ranges(&self) -> [Range; Component::COUNT] {
        self.meta.ranges
    }

    /// Why the parse was refused, if it was.
    ///
    /// `None` both on success and when a well-formed source simply
    /// contained no recognizable component.
    #[must_use]
    pub const fn error(&self) -> Option<UriError> {
        if self.meta.present == 0 {
            UriError::from_code(self.meta.ranges[0].offset)
        } else {
            None
        }
    }

    /// The error description, or `""` when there is no error.
    #[must_use]
    pub const fn error_message(&self) -> &'static str {
        match self.error() {
            Some(e) => e.message(),
            None => "",
        }
    }

    /// The components whose range contains byte position `pos`.
    ///
    /// # Examples
    ///
    /// ```
    /// use urispan::{Component, Presence, UriView};
    ///
    /// let uri = UriView::new("https://example.com/path");
    /// assert_eq!(uri.in_range(1), Presence::of(&[Component::Scheme]));
    /// assert_eq!(
    ///     uri.in_range(10),
    ///     Presence::of(&[Component::Authority, Component::Host])
    /// );
    /// ```
    #[must_use]
    pub fn in_range(&self, pos: usize) -> Presence {
        let mut p = Presence::EMPTY;
        for c in Component::ALL {
            if self.test(c) {
                let r = self.range(c);
                if r.offset as usize <= pos && pos < r.end() as usize {
                    p.set(c);
                }
            }
        }
        p
    }
}

impl<S: Storage> Uri<S> {
    fn raw(&self) -> &str {
        self.storage.buffer()
    }

    fn component_raw(&self, c: Component) -> &str {
        slice(self.storage.buffer(), self.range(c))
    }

    /// Invokes `f(component, value)` for each present component in
    /// component order, then hands the callback back for further use.
    ///
    /// # Examples
    ///
    /// ```
    /// use urispan::UriView;
    ///
    /// let uri = UriView::new("https://example.com/a?b=1");
    /// let mut count = 0;
    /// uri.for_each(|_, _| count += 1);
    /// assert_eq!(count, 5);
    /// ```
    pub fn for_each<F: FnMut(Component, &str)>(&self, mut f: F) -> F {
        for c in Component::ALL {
            if self.test(c) {
                f(c, self.component_raw(c));
            }
        }
        f
    }

    /// Invokes table handlers for the present components.
    ///
    /// Entries keyed with `Some(c)` fire in table order when `c` is
    /// present. If the final entry is keyed `None`, it fires as the default
    /// for every present component without a dedicated entry, in component
    /// order. Returns the number of invocations.
    pub fn dispatch(
        &self,
        table: &mut [(Option<Component>, &mut dyn FnMut(Component, &str))],
    ) -> usize {
        let mut dedicated = Presence::EMPTY;
        for entry in table.iter() {
            if let Some(c) = entry.0 {
                dedicated.set(c);
            }
        }
        let has_default = matches!(table.last(), Some((None, _)));

        let mut calls = 0;
        for (key, handler) in table.iter_mut() {
            if let Some(c) = *key {
                if self.test(c) {
                    handler(c, self.component_raw(c));
                    calls += 1;
                }
            }
        }
        if has_default {
            if let Some((_, default)) = table.last_mut() {
                for c in Component::ALL {
                    if self.test(c) && !dedicated.test(c) {
                        default(c, self.component_raw(c));
                        calls += 1;
                    }
                }
            }
        }
        calls
    }

    /// Length of the source in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw().len()
    }

    /// Whether the source is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw().is_empty()
    }

    /// The host as a packed big-endian IPv4 address, or `None` when the
    /// host is absent or not a dotted-decimal IPv4 address.
    ///
    /// Octets must be 1-3 decimal digits in `0..=255` with no leading
    /// zeros.
    ///
    /// # Examples
    ///
    /// ```
    /// use urispan::UriView;
    ///
    /// let uri = UriView::new("telnet://192.0.2.16:8888/");
    /// assert_eq!(uri.host_as_ipv4(), Some(0xc0000210));
    /// assert!(UriView::new("https://www.blah.com/").host_as_ipv4().is_none());
    /// ```
    #[must_use]
    pub fn host_as_ipv4(&self) -> Option<u32> {
        if !self.test(Component::Host) {
            return None;
        }
        parse_ipv4(self.component_raw(Component::Host).as_bytes())
    }

    /// Whether the host is a dotted-decimal IPv4 address.
    #[must_use]
    pub fn host_is_ipv4(&self) -> bool {
        self.host_as_ipv4().is_some()
    }

    /// Whether `self` and `other` normalize to the same string; see
    /// [`normalize_str`].
    #[must_use]
    pub fn normalized_eq<T: Storage>(&self, other: &Uri<T>) -> bool {
        normalize_str(self.raw()) == normalize_str(other.storage.buffer())
    }

    /// Whether `self` and `other` HTTP-normalize to the same string; see
    /// [`normalize_http_str`].
    #[must_use]
    pub fn http_normalized_eq<T: Storage>(&self, other: &Uri<T>) -> bool {
        normalize_http_str(self.raw()) == normalize_http_str(other.storage.buffer())
    }
}

impl<S: StorageMut> Uri<S> {
    /// Returns the source as a string slice, borrowed from this URI.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.storage.buffer()
    }

    read_accessors!('_);

    /// Capacity limit of the storage in bytes.
    #[must_use]
    pub fn max_size() -> usize {
        S::MAX
    }

    fn reparse(&mut self) -> u32 {
        self.meta = parser::parse(self.storage.buffer().as_bytes());
        self.count()
    }

    /// Stores a new source and re-parses, returning the number of
    /// components found.
    pub fn assign(&mut self, src: String) -> u32 {
        self.storage.store(src);
        self.reparse()
    }

    /// Stores a new source and re-parses, returning the previous source.
    ///
    /// For bounded storage an oversized source empties the buffer, which is
    /// observable as `len() == 0`.
    pub fn replace(&mut self, src: String) -> String {
        let old = self.storage.store(src);
        self.reparse();
        old
    }

    /// Applies a patch of `(component, value)` pairs over the current
    /// decomposition, re-emits the source, and re-parses. Returns the
    /// number of components found.
    ///
    /// An `authority` in the patch or a present authority part forces
    /// re-emission from the parts; patching `authority` to `""` empties
    /// userinfo, user, password, host and port, and patching `userinfo` to
    /// `""` empties user and password. With `encode` set, patch values are
    /// percent-encoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use urispan::{Component, Uri};
    ///
    /// let mut uri = Uri::new("https://dakka@www.blah.com:3000/");
    /// uri.edit(
    ///     &[
    ///         (Component::Port, "80"),
    ///         (Component::User, ""),
    ///         (Component::Path, "/newpath"),
    ///     ],
    ///     false,
    /// );
    /// assert_eq!(uri.as_str(), "https://www.blah.com:80/newpath");
    /// ```
    pub fn edit(&mut self, patch: &[(Component, &str)], encode: bool) -> u32 {
        let new = {
            let src = self.storage.buffer();
            let mut current: Vec<(Component, &str)> = Vec::new();
            for c in Component::ALL {
                if self.meta.test(c) {
                    current.push((c, slice(src, self.meta.range(c))));
                }
            }
            build::make_edit(&current, patch, encode)
        };
        self.assign(new)
    }

    /// Sets one component through [`edit`](Self::edit).
    pub fn add(&mut self, c: Component, value: &str, encode: bool) -> u32 {
        self.edit(&[(c, value)], encode)
    }

    /// Sets the query from key/value pairs joined with `pair_sep`.
    pub fn add_query_pairs(&mut self, pairs: &[(&str, &str)], pair_sep: char) -> u32 {
        let joined = query::join_query(pairs, pair_sep);
        self.edit(&[(Component::Query, joined.as_str())], false)
    }

    /// Removes a component from the source and re-parses.
    ///
    /// The component's structural delimiter goes with it: the scheme takes
    /// its `:` and a following `//`, the userinfo its `@`, password and
    /// port their leading `:`, query and fragment their `?`/`#`. Removing
    /// the authority empties it in place (the `//` stays), along with all
    /// of its parts.
    pub fn remove(&mut self, c: Component) -> u32 {
        match c {
            Component::Authority => self.edit(&[(Component::Authority, "")], false),
            Component::Userinfo => self.edit(&[(Component::Userinfo, "")], false),
            _ => {
                if !self.test(c) {
                    return self.count();
                }
                let r = self.range(c);
                let mut start = r.offset as usize;
                let mut end = r.end() as usize;
                let src = self.storage.buffer();
                let bytes = src.as_bytes();
                match c {
                    Component::Scheme => {
                        if end < bytes.len() && bytes[end] == b':' {
                            end += 1;
                        }
                        if end + 1 < bytes.len() && bytes[end] == b'/' && bytes[end + 1] == b'/' {
                            end += 2;
                        }
                    }
                    Component::Password
                    | Component::Port
                    | Component::Query
                    | Component::Fragment => {
                        if start > 0 {
                            start -= 1;
                        }
                    }
                    _ => {}
                }
                let mut new = String::with_capacity(src.len());
                new.push_str(&src[..start]);
                new.push_str(&src[end..]);
                self.assign(new)
            }
        }
    }

    component_mut! {
        (add_scheme, remove_scheme, Scheme, "scheme"),
        (add_authority, remove_authority, Authority, "authority"),
        (add_userinfo, remove_userinfo, Userinfo, "userinfo"),
        (add_user, remove_user, User, "user"),
        (add_password, remove_password, Password, "password"),
        (add_host, remove_host, Host, "host"),
        (add_port, remove_port, Port, "port"),
        (add_path, remove_path, Path, "path"),
        (add_query, remove_query, Query, "query"),
        (add_fragment, remove_fragment, Fragment, "fragment"),
    }

    /// Normalizes the source in place (see [`normalize_str`]), returning
    /// the previous source.
    pub fn normalize(&mut self) -> String {
        let new = normalize_str(self.storage.buffer());
        self.replace(new)
    }

    /// HTTP-normalizes the source in place (see [`normalize_http_str`]),
    /// returning the previous source.
    pub fn normalize_http(&mut self) -> String {
        let new = normalize_http_str(self.storage.buffer());
        self.replace(new)
    }
}

fn scan_octet(bytes: &[u8]) -> Option<(u32, usize)> {
    if bytes.is_empty() || !bytes[0].is_ascii_digit() {
        return None;
    }
    if bytes[0] == b'0' {
        return Some((0, 1));
    }
    let mut value = 0;
    let mut n = 0;
    while n < 3 && n < bytes.len() && bytes[n].is_ascii_digit() {
        value = value * 10 + (bytes[n] - b'0') as u32;
        n += 1;
    }
    if value <= u8::MAX as u32 {
        Some((value, n))
    } else {
        None
    }
}

fn parse_ipv4(bytes: &[u8]) -> Option<u32> {
    let mut addr = 0;
    let mut i = 0;
    for octet in 0..4 {
        if octet > 0 {
            if i >= bytes.len() || bytes[i] != b'.' {
                return None;
            }
            i += 1;
        }
        let (value, len) = scan_octet(&bytes[i..])?;
        addr = addr << 8 | value;
        i += len;
    }
    (i == bytes.len()).then_some(addr)
}

/// Iterator over the present components of a URI, in component order.
///
/// Created by [`Uri::components`].
#[derive(Clone)]
pub struct Components<'a> {
    src: &'a str,
    meta: Meta,
    next: usize,
}

impl<'a> Iterator for Components<'a> {
    type Item = (Component, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < Component::COUNT {
            let c = Component::ALL[self.next];
            self.next += 1;
            if self.meta.test(c) {
                return Some((c, slice(self.src, self.meta.range(c))));
            }
        }
        None
    }
}

impl FusedIterator for Components<'_> {}

impl<S: Storage + Default> Default for Uri<S> {
    fn default() -> Self {
        Uri {
            storage: S::default(),
            meta: Meta::EMPTY,
        }
    }
}

/// Verbatim equality: same source bytes, same range table, same presence.
impl<S: Storage, T: Storage> PartialEq<Uri<T>> for Uri<S> {
    fn eq(&self, other: &Uri<T>) -> bool {
        self.raw() == other.storage.buffer()
            && self.meta.ranges == other.meta.ranges
            && self.meta.present == other.meta.present
    }
}

impl<S: Storage> Eq for Uri<S> {}

impl<S: Storage> Hash for Uri<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw().hash(state);
    }
}

#[cfg(feature = "serde")]
impl<S: Storage> Serialize for Uri<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_str(self.raw())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Uri<String> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let src = String::deserialize(deserializer)?;
        let uri = Self::new(src);
        match uri.error() {
            Some(e) => Err(de::Error::custom(e)),
            None => Ok(uri),
        }
    }
}
