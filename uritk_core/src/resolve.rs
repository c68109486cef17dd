/*!
Reference resolution and its inverse.

Resolution combines a base URI and a reference into the target the reference
denotes, per the transform-references algorithm of RFC 3986 §5.2.
Relativization runs the other way: given a base and a target sharing scheme
and authority, it produces the shortest reference that resolves back to the
target. Neither operation fails; odd inputs (a non-absolute base, an
unrelated target) produce syntactically correct output whose absoluteness is
the caller's concern.

# Example

```rust
use uritk_core::{resolve, relativize, Uri};
use std::str::FromStr;

let base = Uri::from_str("http://a/b/c/d;p?q").unwrap();

let target = resolve(&base, &Uri::from_str("../../g").unwrap());
assert_eq!(target.to_string(), "http://a/g");

let reference = relativize(&base, &Uri::from_str("http://a/b/x").unwrap());
assert_eq!(reference.to_string(), "../x");
```
*/

use crate::{Path, Uri};

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Resolve `reference` against `base` (RFC 3986 §5.2.2, strict mode). The
/// target takes the reference's fragment in every branch; the authority,
/// when inherited from the base, is inherited whole, user information and
/// port included.
///
pub fn resolve(base: &Uri, reference: &Uri) -> Uri {
    if reference.has_scheme() {
        return Uri::from_parts(
            reference.scheme().cloned(),
            reference.authority().cloned(),
            reference.path().remove_dot_segments(),
            reference.query().cloned(),
            reference.fragment().cloned(),
        );
    }
    let (authority, path, query) = if reference.has_authority() {
        (
            reference.authority().cloned(),
            reference.path().remove_dot_segments(),
            reference.query().cloned(),
        )
    } else if reference.path().is_empty() {
        (
            base.authority().cloned(),
            base.path().clone(),
            reference.query().cloned().or_else(|| base.query().cloned()),
        )
    } else {
        let path = if reference.path().is_absolute() {
            reference.path().remove_dot_segments()
        } else {
            base.path()
                .merge(reference.path(), base.has_authority())
                .remove_dot_segments()
        };
        (base.authority().cloned(), path, reference.query().cloned())
    };
    Uri::from_parts(
        base.scheme().cloned(),
        authority,
        path,
        query,
        reference.fragment().cloned(),
    )
}

///
/// Produce a reference which, resolved against `base`, denotes the same
/// document as `target`. Applies only when the two share scheme and
/// authority and the target is not itself a relative-path reference; in
/// every other case the target comes back unchanged.
///
pub fn relativize(base: &Uri, target: &Uri) -> Uri {
    if base.scheme() != target.scheme()
        || base.authority() != target.authority()
        || target.is_relative_path_reference()
    {
        return target.clone();
    }
    let base_path = base.path().value();
    let target_path = target.path().value();
    if base_path != target_path {
        return Uri::from_parts(
            None,
            None,
            Path::new_unchecked(relativize_path(base_path, target_path)),
            target.query().cloned(),
            target.fragment().cloned(),
        );
    }
    if base.query() == target.query() {
        return Uri::from_parts(None, None, Path::default(), None, target.fragment().cloned());
    }
    if target.query().is_none() {
        return Uri::from_parts(
            None,
            None,
            Path::new_unchecked(basename_or_here(target_path)),
            None,
            target.fragment().cloned(),
        );
    }
    Uri::from_parts(
        None,
        None,
        Path::default(),
        target.query().cloned(),
        target.fragment().cloned(),
    )
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn relativize_path(base_path: &str, target_path: &str) -> String {
    let mut base_segments = base_path.split('/').collect::<Vec<&str>>();
    let mut target_segments = target_path.split('/').collect::<Vec<&str>>();
    let target_basename = target_segments.pop().unwrap_or("");
    let _ = base_segments.pop();
    let common = base_segments
        .iter()
        .zip(target_segments.iter())
        .take_while(|(base, target)| base == target)
        .count();
    let mut out = "../".repeat(base_segments.len() - common);
    let mut remaining = target_segments.split_off(common);
    remaining.push(target_basename);
    out.push_str(&remaining.join("/"));
    format_relative(out)
}

fn format_relative(path: String) -> String {
    if path.is_empty() {
        return "./".to_string();
    }
    // A leading segment with a colon would read as a scheme; shield it.
    let colon = path.find(':');
    let slash = path.find('/');
    match (colon, slash) {
        (Some(c), Some(s)) if c < s => format!("./{}", path),
        (Some(_), None) => format!("./{}", path),
        _ => path,
    }
}

fn basename_or_here(path: &str) -> String {
    let basename = match path.rfind('/') {
        Some(index) => &path[index + 1..],
        None => path,
    };
    if basename.is_empty() {
        "./".to_string()
    } else {
        basename.to_string()
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
