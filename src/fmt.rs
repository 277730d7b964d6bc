use crate::component::{Component, Presence};
use crate::query::{split_query, split_segments};
use crate::storage::Storage;
use crate::uri::{slice, Uri};
use core::fmt::{Debug, Display, Formatter, Result};

impl Debug for Presence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Presence({:#012b})", self.bits())
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

impl<S: Storage> Display for Uri<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.storage.buffer())
    }
}

impl<S: Storage> Debug for Uri<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let src = self.storage.buffer();
        let mut d = f.debug_struct("Uri");
        d.field("uri", &src);
        for c in Component::ALL {
            if self.test(c) {
                d.field(c.name(), &slice(src, self.range(c)));
            }
        }
        d.finish()
    }
}

impl<S: Storage> Uri<S> {
    /// Returns an adapter whose `Display` writes the decomposed listing:
    /// one line per component, with indented sub-listings for the path
    /// segments and query pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use urispan::UriView;
    ///
    /// let uri = UriView::new("http://h/p?a=1");
    /// let text = format!("{}", uri.detailed());
    /// assert!(text.starts_with("uri         http://h/p?a=1 (14)\n"));
    /// assert!(text.contains("scheme      http\n"));
    /// ```
    #[must_use]
    pub fn detailed(&self) -> Detailed<'_, S> {
        Detailed { uri: self }
    }
}

/// Decomposed-listing `Display` adapter returned by [`Uri::detailed`].
pub struct Detailed<'a, S> {
    uri: &'a Uri<S>,
}

fn or_empty(value: &str) -> &str {
    if value.is_empty() {
        "(empty)"
    } else {
        value
    }
}

impl<S: Storage> Display for Detailed<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let uri = self.uri;
        let src = uri.storage.buffer();
        if let Some(e) = uri.error() {
            writeln!(f, "error: {}", e)?;
        }
        writeln!(f, "{:<12}{} ({})", "uri", src, src.len())?;
        for c in Component::ALL {
            if !uri.test(c) {
                continue;
            }
            let value = slice(src, uri.range(c));
            writeln!(f, "{:<12}{}", c.name(), or_empty(value))?;
            if c == Component::Path {
                let segments = split_segments(value, true);
                if segments.len() > 1 {
                    for seg in segments {
                        writeln!(f, "   {}", or_empty(seg))?;
                    }
                }
            }
            if c == Component::Query {
                let pairs = split_query(value, '&', '=');
                if pairs.len() > 1 {
                    for (key, val) in pairs {
                        writeln!(f, "   {:<12}{}", key, or_empty(val))?;
                    }
                }
            }
        }
        Ok(())
    }
}
