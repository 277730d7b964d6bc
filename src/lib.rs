#![no_std]
#![warn(rust_2018_idioms, unreachable_pub, missing_docs)]
#![forbid(unsafe_code)]
//! A lenient URI decomposer, normalizer and editor for [RFC 3986].
//!
//! Parsing is a single allocation-free pass that records an `(offset, len)`
//! range and a presence bit for each of the ten components: scheme,
//! authority, userinfo, user, password, host, port, path, query and
//! fragment. It is total: malformed sources are refused with an error kind
//! instead of a panic or an `Err`, and anything else is decomposed as far
//! as the generic grammar allows, with non-ASCII host bytes preserved
//! verbatim.
//!
//! Three storage disciplines share the same surface:
//!
//! - [`UriView`] borrows its source and never allocates; [`UriView::new`]
//!   is `const`, so a literal parses at compile time (see [`UriFixed`]).
//! - [`Uri`]`<String>` owns its source and supports in-place edits.
//! - [`UriStatic`] keeps the source in a fixed-capacity inline buffer.
//!
//! # Examples
//!
//! Decompose and inspect:
//!
//! ```
//! use urispan::UriView;
//!
//! let uri = UriView::new("ldap://[2001:db8::7]/c=GB?objectClass?one");
//! assert_eq!(uri.host(), "[2001:db8::7]");
//! assert_eq!(uri.path(), "/c=GB");
//! assert_eq!(uri.query(), "objectClass?one");
//! ```
//!
//! Edit while keeping the cross-component rules intact:
//!
//! ```
//! use urispan::{Component, Uri};
//!
//! let mut uri = Uri::new("https://dakka@www.blah.com:3000/");
//! uri.edit(&[(Component::Port, "80"), (Component::Path, "/newpath")], false);
//! assert_eq!(uri.as_str(), "https://dakka@www.blah.com:80/newpath");
//! ```
//!
//! Normalize ([Section 6 of RFC 3986][rfc-6]):
//!
//! ```
//! use urispan::normalize_http_str;
//!
//! assert_eq!(
//!     normalize_http_str("HTTPS://WWW.TEST.COM:443/a/./b/../c"),
//!     "https://www.test.com/a/c"
//! );
//! ```
//!
//! # Crate features
//!
//! - `std` (default): `std::error::Error` impls. Without it the crate is
//!   `no_std` + `alloc`.
//! - `serde`: `Serialize` for any storage and `Deserialize` for
//!   `Uri<String>`.
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986
//! [rfc-6]: https://datatracker.ietf.org/doc/html/rfc3986#section-6

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Percent-encoding utilities.
pub mod encoding;

/// Structured decoding of query strings and path segments.
pub mod query;

/// Storage disciplines backing a [`Uri`].
pub mod storage;

mod build;
mod component;
mod error;
mod fmt;
mod normalize;
mod parser;
mod uri;

#[cfg(test)]
mod tests;

pub use build::make_uri;
pub use component::{find_port, Component, Presence, Range, MAX_URI_LEN};
pub use error::UriError;
pub use fmt::Detailed;
pub use normalize::{normalize_http_str, normalize_masked, normalize_str};
pub use uri::{Components, Uri, UriFixed, UriStatic, UriView};
