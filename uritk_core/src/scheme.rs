/*!
Provides the `Scheme` component of a `Uri`, plus the small set of schemes the
library itself reasons about (default ports, origin computation, media-type
checks).

The scheme for a URI determines the syntax and meaning of the following
components. It is a single string value, canonically lowercase.

# Example

Any valid scheme string can be parsed into a `Scheme` instance.

```rust
use uritk_core::Scheme;
use std::str::FromStr;

let scheme = Scheme::from_str("HTTP").unwrap();
assert_eq!(scheme.value(), "http");
```

A number of well-known schemes are also provided as associated functions on
the `Scheme` implementation for convenience.

```rust
use uritk_core::Scheme;

let scheme = Scheme::https();
```
*/

#![allow(clippy::module_name_repetitions)]

use crate::authority::Port;
use crate::error::{Error as UriError, ErrorKind, Result as UriResult};
use crate::parse;
use crate::{Normalize, ValidateStr};
use lazy_static::lazy_static;
use lru::LruCache;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::Mutex;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The scheme component; the stored value is always lowercase.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scheme(String);

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

const CACHE_CAPACITY: usize = 100;

lazy_static! {
    // Memoizes accepted scheme strings; maps the raw form to its lowercase
    // canonical form. Bounded, so hostile inputs cannot grow it.
    static ref ACCEPTED: Mutex<LruCache<String, String>> = Mutex::new(LruCache::new(
        NonZeroUsize::new(CACHE_CAPACITY).unwrap()
    ));
}

impl Display for Scheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.0)
    }
}

impl FromStr for Scheme {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(mut cache) = ACCEPTED.lock() {
            if let Some(canonical) = cache.get(s) {
                return Ok(Self(canonical.clone()));
            }
        }
        if parse::is_scheme(s) {
            let canonical = s.to_ascii_lowercase();
            if let Ok(mut cache) = ACCEPTED.lock() {
                let _ = cache.put(s.to_string(), canonical.clone());
            }
            Ok(Self(canonical))
        } else {
            Err(ErrorKind::ParseSchemeError(s.to_string()).into())
        }
    }
}

impl ValidateStr for Scheme {
    fn is_valid(s: &str) -> bool {
        parse::is_scheme(s)
    }
}

impl Normalize for Scheme {
    fn normalize(self) -> UriResult<Self> {
        Ok(self)
    }
}

impl Scheme {
    /// Known scheme for File Transfer Protocol, RFC 1738.
    pub fn ftp() -> Self {
        "ftp".parse().unwrap()
    }

    /// Known scheme for HTTP resources, RFC 7230.
    pub fn http() -> Self {
        "http".parse().unwrap()
    }

    /// Known scheme for HTTP resources secured using SSL/TLS, RFC 7230.
    pub fn https() -> Self {
        "https".parse().unwrap()
    }

    /// Known scheme for the WebSocket protocol, RFC 6455.
    pub fn ws() -> Self {
        "ws".parse().unwrap()
    }

    /// Known scheme for the WebSocket protocol over TLS, RFC 6455.
    pub fn wss() -> Self {
        "wss".parse().unwrap()
    }

    /// Known scheme for addressing files on local or network file systems, RFC 8089.
    pub fn file() -> Self {
        "file".parse().unwrap()
    }

    /// Known scheme for binary data access in browsers (File API).
    pub fn blob() -> Self {
        "blob".parse().unwrap()
    }

    /// Known scheme for inclusion of small data items inline, RFC 2397.
    pub fn data() -> Self {
        "data".parse().unwrap()
    }

    // --------------------------------------------------------------------------------------------

    ///
    /// Returns `true` for the schemes whose URIs carry a tuple origin:
    /// `ftp`, `http`, `https`, `ws`, and `wss`.
    ///
    pub fn is_special(&self) -> bool {
        matches!(self.0.as_str(), "ftp" | "http" | "https" | "ws" | "wss")
    }

    ///
    /// Return the canonical default port for this scheme, if it has one.
    ///
    pub fn default_port(&self) -> Option<Port> {
        match self.0.as_str() {
            "ftp" => Some(Port::new(21)),
            "http" | "ws" => Some(Port::new(80)),
            "https" | "wss" => Some(Port::new(443)),
            _ => None,
        }
    }

    /// Return the string value of this scheme.
    pub fn value(&self) -> &str {
        &self.0
    }
}
