/*!
Document-equivalence normalization and origin computation.

Normalization produces the canonical string under which two references to
the same document compare equal: dot segments are interpreted, query pairs
are sorted, unreserved percent-triplets are decoded in the path and query,
the fragment is cleared, and an empty path under an authority becomes `/`.
Triplets carrying reserved bytes are uppercased but never decoded, so
opaque query payloads keep their exact bytes.

The origin of a URI exists only for the `ftp`, `http`, `https`, `ws`, and
`wss` schemes; a `blob:` URI takes the origin of the URI carried in its
path.

# Example

```rust
use uritk_core::{is_same_document, origin, Uri};
use std::str::FromStr;

let a = Uri::from_str("http://example.org/~foo/").unwrap();
let b = Uri::from_str("http://example.ORG/bar/./../~foo/").unwrap();
assert!(is_same_document(&a, &b));

let blob = Uri::from_str("blob:https://mozilla.org:443/").unwrap();
assert_eq!(origin(&blob).unwrap().to_string(), "https://mozilla.org");
```
*/

use crate::pct;
use crate::resolve::resolve;
use crate::{Authority, Normalize, Path, Query, Uri};

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Return the canonical string form of `uri` used for document-equivalence
/// comparison. Idempotent: normalizing the parse of a normalized string
/// yields the same string.
///
pub fn normalize(uri: &Uri) -> String {
    canonical(uri).to_string()
}

///
/// Returns `true` when the two references denote the same document, that
/// is, their canonical strings are equal. Fragments are ignored.
///
pub fn is_same_document(a: &Uri, b: &Uri) -> bool {
    normalize(a) == normalize(b)
}

///
/// Return the origin of `uri`, if it has one.
///
pub fn origin(uri: &Uri) -> Option<Uri> {
    let scheme = uri.scheme()?;
    if scheme.value() == "blob" {
        let inner = Uri::parse(uri.path().value()).ok()?;
        return origin(&inner);
    }
    if !scheme.is_special() {
        return None;
    }
    let authority = uri.authority()?;
    let port = match authority.port() {
        Some(port) if Some(port) == scheme.default_port() => None,
        port => port,
    };
    let stripped = Authority::new(authority.host().clone()).with_port(port);
    Some(Uri::from_parts(
        Some(scheme.clone()),
        Some(stripped),
        Path::default(),
        None,
        None,
    ))
}

///
/// Returns `true` when the two references cannot share an origin: either
/// has none, or their origins serialize differently.
///
pub fn is_cross_origin(a: &Uri, b: &Uri) -> bool {
    match (origin(a), origin(b)) {
        (Some(origin_a), Some(origin_b)) => origin_a.to_string() != origin_b.to_string(),
        _ => true,
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn canonical(uri: &Uri) -> Uri {
    // Unreserved triplets decode first: a `%2E` segment must be visible to
    // dot-segment interpretation, and pairs must sort in their decoded
    // form, or normalizing the canonical text a second time could disagree
    // with itself.
    let path = Path::new_unchecked(pct::normalize_triplets(uri.path().value()));
    let query = match uri.query() {
        None => None,
        Some(query) if query.is_empty() => None,
        Some(query) => {
            let decoded = Query::new_unchecked(pct::normalize_triplets(query.value()));
            Some(decoded.clone().normalize().unwrap_or(decoded))
        }
    };
    let authority = match uri.authority() {
        None => None,
        Some(authority) => Some(
            authority
                .clone()
                .normalize()
                .unwrap_or_else(|_| authority.clone()),
        ),
    };
    let mut uri = Uri::from_parts(uri.scheme().cloned(), authority, path, query, None);
    // Self-resolution interprets dot segments through the same merge logic
    // resolution uses; pure relative paths are left alone.
    if uri.has_scheme() || uri.has_authority() || uri.path().is_absolute() {
        uri = resolve(&uri, &uri);
    }
    if uri.has_authority() && uri.path().is_empty() {
        return Uri::from_parts(
            uri.scheme().cloned(),
            uri.authority().cloned(),
            Path::root(),
            uri.query().cloned(),
            None,
        );
    }
    uri
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_canonical_query_sorting() {
        let uri = Uri::from_str("http://example.com/?b=2&a=1").unwrap();
        assert_eq!(normalize(&uri), "http://example.com/?a=1&b=2");
    }

    #[test]
    fn test_canonical_empty_query_dropped() {
        let uri = Uri::from_str("http://example.com/x?").unwrap();
        assert_eq!(normalize(&uri), "http://example.com/x");
    }

    #[test]
    fn test_canonical_relative_path_kept() {
        let uri = Uri::from_str("a/./b").unwrap();
        assert_eq!(normalize(&uri), "a/./b");
    }
}
