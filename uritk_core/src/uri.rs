/*!
Provides the `Uri` type supporting the semantics of the
[URI](https://en.wikipedia.org/wiki/Uniform_Resource_Identifier)
specification, covering both URLs and URNs as well as relative references.

# Specification

1. RFC-3986 [Uniform Resource Identifier (URI): Generic Syntax](https://tools.ietf.org/html/rfc3986)
1. RFC-2397 [The "data" URL scheme](https://tools.ietf.org/html/rfc2397)
1. RFC-8089 [The "file" URI Scheme](https://tools.ietf.org/html/rfc8089)

From RFC-3986, appendix A. _Collected ABNF for URI_ (abridged):

```text
URI           = scheme ":" hier-part [ "?" query ] [ "#" fragment ]
hier-part     = "//" authority path-abempty
              / path-absolute
              / path-rootless
              / path-empty
URI-reference = URI / relative-ref
relative-ref  = relative-part [ "?" query ] [ "#" fragment ]
relative-part = "//" authority path-abempty
              / path-absolute
              / path-noscheme
              / path-empty

scheme        = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
authority     = [ userinfo "@" ] host [ ":" port ]
userinfo      = *( unreserved / pct-encoded / sub-delims / ":" )
host          = IP-literal / IPv4address / reg-name
port          = *DIGIT

path-abempty  = *( "/" segment )
path-absolute = "/" [ segment-nz *( "/" segment ) ]
path-noscheme = segment-nz-nc *( "/" segment )
path-rootless = segment-nz *( "/" segment )
path-empty    = 0<pchar>

query         = *( pchar / "/" / "?" )
fragment      = *( pchar / "/" / "?" )
```
*/

use crate::error::{Component, Error as UriError, ErrorKind, Result as UriResult};
use crate::{Authority, Fragment, Host, Normalize, Path, Port, Query, Scheme, UserInfo};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// An immutable URI reference, decomposed into its five components. The
/// scheme, authority, query, and fragment components are optional; the path
/// is always present though it may be empty.
///
/// # Example
///
/// ```rust
/// use uritk_core::Uri;
/// use std::str::FromStr;
///
/// let uri = Uri::from_str(
///     "https://john.doe@www.example.com:123/forum/questions/?tag=networking&order=newest#top",
/// ).unwrap();
///
/// assert_eq!(uri.scheme().unwrap().value(), "https");
/// assert_eq!(uri.host().unwrap().to_string(), "www.example.com");
/// assert_eq!(uri.port().unwrap().value(), 123);
/// assert_eq!(uri.path().value(), "/forum/questions/");
/// ```
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Uri {
    scheme: Option<Scheme>,
    authority: Option<Authority>,
    path: Path,
    query: Option<Query>,
    fragment: Option<Fragment>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Display for Uri {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{}", scheme)?;
        }
        if let Some(authority) = &self.authority {
            write!(f, "{}", authority)?;
        } else if self.path.value().starts_with("//") {
            // A bare "//" path would read back as an authority. Resolution
            // can produce this shape even though the parser rejects it.
            write!(f, "/.")?;
        } else if self.scheme.is_none() && self.path.first_segment_has_colon() {
            // A leading segment with a colon would read back as a scheme.
            write!(f, "./")?;
        }
        write!(f, "{}", self.path)?;
        if let Some(query) = &self.query {
            write!(f, "{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "{}", fragment)?;
        }
        Ok(())
    }
}

impl FromStr for Uri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Path> for Uri {
    fn from(path: Path) -> Self {
        Self::new(path)
    }
}

impl Normalize for Uri {
    fn normalize(self) -> UriResult<Self> {
        Ok(Self {
            authority: match self.authority {
                None => None,
                Some(authority) => Some(authority.normalize()?),
            },
            path: self.path.normalize()?,
            query: match self.query {
                None => None,
                Some(query) => Some(query.normalize()?),
            },
            ..self
        })
    }
}

impl Uri {
    ///
    /// Construct a new relative reference consisting of only a path.
    ///
    pub fn new(path: Path) -> Self {
        Self {
            scheme: None,
            authority: None,
            path,
            query: None,
            fragment: None,
        }
    }

    ///
    /// Parse a URI reference from its string form, validating every
    /// component. Control bytes must be percent-encoded in the input.
    ///
    pub fn parse(s: &str) -> UriResult<Self> {
        let (rest, fragment) = match s.split_once('#') {
            Some((rest, fragment)) => (rest, Some(Fragment::parse(fragment, true)?)),
            None => (s, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(Query::parse(query, true)?)),
            None => (rest, None),
        };
        let (rest, scheme) = match scan_scheme(rest) {
            Some((scheme, rest)) => (rest, Some(Scheme::from_str(scheme)?)),
            None => (rest, None),
        };
        let (rest, authority) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find('/').unwrap_or(after.len());
                (&after[end..], Some(Authority::from_str(&after[..end])?))
            }
            None => (rest, None),
        };
        let path = Path::parse(rest, true)?;
        Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
        .validated()
    }

    // --------------------------------------------------------------------------------------------

    /// Returns `true` if this reference has a scheme, else `false`.
    pub fn has_scheme(&self) -> bool {
        self.scheme.is_some()
    }

    /// Return the scheme component, if present.
    pub fn scheme(&self) -> Option<&Scheme> {
        self.scheme.as_ref()
    }

    /// Returns `true` if this reference has an authority, else `false`.
    pub fn has_authority(&self) -> bool {
        self.authority.is_some()
    }

    /// Return the authority component, if present.
    pub fn authority(&self) -> Option<&Authority> {
        self.authority.as_ref()
    }

    /// Return the authority's host, if an authority is present.
    pub fn host(&self) -> Option<&Host> {
        self.authority.as_ref().map(Authority::host)
    }

    /// Return the authority's port, if present.
    pub fn port(&self) -> Option<Port> {
        self.authority.as_ref().and_then(Authority::port)
    }

    /// Return the authority's user information, if present.
    pub fn user_info(&self) -> Option<&UserInfo> {
        self.authority.as_ref().and_then(Authority::user_info)
    }

    /// Returns `true` if this reference's path is non-empty, else `false`.
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// Return the path component.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if this reference has a query, else `false`.
    pub fn has_query(&self) -> bool {
        self.query.is_some()
    }

    /// Return the query component, if present.
    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    /// Returns `true` if this reference has a fragment, else `false`.
    pub fn has_fragment(&self) -> bool {
        self.fragment.is_some()
    }

    /// Return the fragment component, if present.
    pub fn fragment(&self) -> Option<&Fragment> {
        self.fragment.as_ref()
    }

    // --------------------------------------------------------------------------------------------

    /// Returns `true` if this reference has a scheme, else `false`.
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    /// Returns `true` if this reference has no scheme, else `false`.
    pub fn is_relative_reference(&self) -> bool {
        self.scheme.is_none()
    }

    /// Returns `true` for a scheme-less reference with an authority.
    pub fn is_network_path_reference(&self) -> bool {
        self.scheme.is_none() && self.authority.is_some()
    }

    /// Returns `true` for a scheme-less, authority-less reference whose path
    /// starts with `/`.
    pub fn is_absolute_path_reference(&self) -> bool {
        self.scheme.is_none() && self.authority.is_none() && self.path.is_absolute()
    }

    /// Returns `true` for a scheme-less, authority-less reference whose path
    /// does not start with `/`.
    pub fn is_relative_path_reference(&self) -> bool {
        self.scheme.is_none() && self.authority.is_none() && !self.path.is_absolute()
    }

    // --------------------------------------------------------------------------------------------

    /// Return a copy with the scheme replaced or removed.
    pub fn with_scheme(&self, scheme: Option<Scheme>) -> UriResult<Self> {
        Self {
            scheme,
            ..self.clone()
        }
        .validated()
    }

    /// Return a copy with the authority replaced or removed.
    pub fn with_authority(&self, authority: Option<Authority>) -> UriResult<Self> {
        Self {
            authority,
            ..self.clone()
        }
        .validated()
    }

    ///
    /// Return a copy with the host replaced, or the whole authority removed.
    /// Removing the host removes the user information and port with it, as
    /// neither can exist without an authority.
    ///
    pub fn with_host(&self, host: Option<Host>) -> UriResult<Self> {
        let authority = match (host, &self.authority) {
            (None, _) => None,
            (Some(host), Some(authority)) => Some(authority.with_host(host)),
            (Some(host), None) => Some(Authority::new(host)),
        };
        self.with_authority(authority)
    }

    /// Return a copy with the port replaced or removed; requires an authority.
    pub fn with_port(&self, port: Option<Port>) -> UriResult<Self> {
        match (&self.authority, port) {
            (Some(authority), port) => self.with_authority(Some(authority.with_port(port))),
            (None, None) => Ok(self.clone()),
            (None, Some(_)) => Err(ErrorKind::InvalidChar(Component::Authority).into()),
        }
    }

    /// Return a copy with the user information replaced or removed; requires
    /// an authority.
    pub fn with_user_info(&self, user_info: Option<UserInfo>) -> UriResult<Self> {
        match (&self.authority, user_info) {
            (Some(authority), user_info) => {
                self.with_authority(Some(authority.with_user_info(user_info)))
            }
            (None, None) => Ok(self.clone()),
            (None, Some(_)) => Err(ErrorKind::InvalidChar(Component::Authority).into()),
        }
    }

    /// Return a copy with the path replaced.
    pub fn with_path(&self, path: Path) -> UriResult<Self> {
        Self {
            path,
            ..self.clone()
        }
        .validated()
    }

    /// Return a copy with the query replaced or removed.
    pub fn with_query(&self, query: Option<Query>) -> UriResult<Self> {
        Ok(Self {
            query,
            ..self.clone()
        })
    }

    /// Return a copy with the fragment replaced or removed.
    pub fn with_fragment(&self, fragment: Option<Fragment>) -> UriResult<Self> {
        Ok(Self {
            fragment,
            ..self.clone()
        })
    }

    /// Return a copy without the fragment component.
    pub fn to_absolute(&self) -> Self {
        Self {
            fragment: None,
            ..self.clone()
        }
    }

    // --------------------------------------------------------------------------------------------

    ///
    /// Resolve `reference` against this base, per the transform-references
    /// algorithm. This never fails; resolving against a non-absolute base
    /// simply produces a non-absolute result.
    ///
    pub fn resolve(&self, reference: &Uri) -> Uri {
        crate::resolve(self, reference)
    }

    ///
    /// Parse `reference` and resolve it against this base.
    ///
    pub fn join(&self, reference: &str) -> UriResult<Uri> {
        Ok(crate::resolve(self, &Uri::parse(reference)?))
    }

    ///
    /// Produce the reference which, resolved against this base, yields
    /// `target` again. When the two share no scheme and authority the target
    /// is returned unchanged.
    ///
    pub fn relativize(&self, target: &Uri) -> Uri {
        crate::relativize(self, target)
    }

    // --------------------------------------------------------------------------------------------

    pub(crate) fn from_parts(
        scheme: Option<Scheme>,
        authority: Option<Authority>,
        path: Path,
        query: Option<Query>,
        fragment: Option<Fragment>,
    ) -> Self {
        Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }

    fn validated(self) -> UriResult<Self> {
        if self.authority.is_some() {
            if !self.path.is_empty() && !self.path.is_absolute() {
                return Err(ErrorKind::Syntax(self.to_string()).into());
            }
        } else {
            if self.path.value().starts_with("//") {
                return Err(ErrorKind::Syntax(self.to_string()).into());
            }
            if self.scheme.is_none() && self.path.first_segment_has_colon() {
                return Err(ErrorKind::Syntax(self.to_string()).into());
            }
        }
        if let Some(scheme) = &self.scheme {
            if scheme.value() == "data" {
                if self.authority.is_some() {
                    return Err(ErrorKind::Syntax(self.to_string()).into());
                }
                check_data_path(self.path.value())?;
            }
        }
        Ok(self)
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

lazy_static! {
    static ref RE_MEDIA_TYPE: Regex = Regex::new(
        r"^[A-Za-z0-9][A-Za-z0-9!#$&.+^_-]*/[A-Za-z0-9][A-Za-z0-9!#$&.+^_-]*(;[A-Za-z0-9!#$&.+^_-]+=[^;,]*)*(;base64)?$"
    )
    .unwrap();
}

fn scan_scheme(s: &str) -> Option<(&str, &str)> {
    let index = s.find(':')?;
    let candidate = &s[..index];
    if !candidate.is_empty()
        && candidate.starts_with(|c: char| c.is_ascii_alphabetic())
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
    {
        Some((candidate, &s[index + 1..]))
    } else {
        None
    }
}

fn check_data_path(path: &str) -> UriResult<()> {
    let media_type = match path.split_once(',') {
        Some((media_type, _)) => media_type,
        None => path,
    };
    if RE_MEDIA_TYPE.is_match(media_type) {
        Ok(())
    } else {
        Err(ErrorKind::ParseMediaTypeError(media_type.to_string()).into())
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
