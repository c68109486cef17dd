/*!
This crate provides a value-type URI model with a syntactically strict
parser and assembler, reference resolution and relativization, a
document-equivalence normalizer, origin computation, and an IPv4 host
normalizer that accepts the historical decimal, octal, and hexadecimal
notations.

## Examples

The [`Uri`] type is parsed from, and serializes back to, the standard
string form.

```rust
use uritk_core::Uri;
use std::str::FromStr;

let uri = Uri::from_str(
    "https://john.doe@www.example.com:123/forum/questions/?tag=networking&order=newest#top",
).unwrap();

assert_eq!(uri.scheme().unwrap().value(), "https");
assert_eq!(uri.to_string(),
    "https://john.doe@www.example.com:123/forum/questions/?tag=networking&order=newest#top",
);
```

References combine with a base through [`resolve`], and [`relativize`] runs
the same relation backwards.

```rust
use uritk_core::{relativize, resolve, Uri};
use std::str::FromStr;

let base = Uri::from_str("http://a/b/c/d;p?q").unwrap();
let reference = Uri::from_str("../../g").unwrap();
let target = resolve(&base, &reference);
assert_eq!(target.to_string(), "http://a/g");

let back = relativize(&base, &target);
assert_eq!(resolve(&base, &back), target);
```

Document equivalence ignores the differences that RFC 3986 declares
insignificant.

```rust
use uritk_core::{is_same_document, Uri};
use std::str::FromStr;

assert!(is_same_document(
    &Uri::from_str("http://example.org/~foo/").unwrap(),
    &Uri::from_str("http://example.ORG/bar/./../%7Efoo/").unwrap(),
));
```

*/

#![warn(
    unknown_lints,
    // ---------- Stylistic
    absolute_paths_not_starting_with_crate,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    macro_use_extern_crate,
    nonstandard_style, /* group */
    noop_method_call,
    rust_2018_idioms,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    // ---------- Future
    future_incompatible, /* group */
    rust_2021_compatibility, /* group */
    // ---------- Public
    missing_debug_implementations,
    // missing_docs,
    unreachable_pub,
    // ---------- Unsafe
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    // ---------- Unused
    unused, /* group */
)]
#![deny(
    // ---------- Public
    exported_private_dependencies,
    // ---------- Deprecated
    anonymous_parameters,
    bare_trait_objects,
    ellipsis_inclusive_range_patterns,
    // ---------- Unsafe
    deref_nullptr,
    drop_bounds,
    dyn_drop,
)]

use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// This trait is implemented by component types that can check string values
/// for validity before parsing.
///
pub trait ValidateStr: FromStr {
    /// Returns `true` if the string is a valid representation of `Self`.
    fn is_valid(s: &str) -> bool {
        Self::from_str(s).is_ok()
    }
}

///
/// This trait is implemented by component types that provide a canonical
/// form for equivalence comparison.
///
pub trait Normalize {
    /// Return the normalized form of self.
    fn normalize(self) -> error::Result<Self>
    where
        Self: Sized;
}

// ------------------------------------------------------------------------------------------------
// Modules
// ------------------------------------------------------------------------------------------------

pub mod error;

pub mod pct;

pub mod scheme;
pub use scheme::Scheme;

pub mod authority;
pub use authority::{Authority, Host, HostKind, Port, UserInfo};

pub mod ipv4;
pub use ipv4::{ipv4_normalize, Calculator, Ipv4Normalizer};

pub mod path;
pub use path::Path;

pub mod query;
pub use query::Query;

pub mod fragment;
pub use fragment::Fragment;

pub mod uri;
pub use uri::Uri;

#[cfg(feature = "builder")]
pub mod builder;
#[cfg(feature = "builder")]
pub use builder::UriBuilder;

pub mod resolve;
pub use resolve::{relativize, resolve};

pub mod normalize;
pub use normalize::{is_cross_origin, is_same_document, normalize, origin};

mod parse;
