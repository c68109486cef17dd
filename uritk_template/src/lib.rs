/*!
This crate provides a URI-Template engine: templates are parsed into
literal text and operator-driven expressions, variables are collected into
a normalized [`VariableBag`], and expansion produces a URI reference
string, covering the whole operator and modifier repertoire, composite
values included.

## Examples

```rust
use uritk_template::{Template, VariableBag};
use std::str::FromStr;

let template = Template::from_str("http://example.com/search{?q,lang}").unwrap();

let mut variables = VariableBag::default();
variables
    .assign("q", "chien bleu").unwrap()
    .assign("lang", "fr").unwrap();

assert_eq!(
    template.expand(&variables).unwrap(),
    "http://example.com/search?q=chien%20bleu&lang=fr",
);
```

Expanded output round-trips through the URI parser.

```rust
use uritk_template::{Template, VariableBag};
use std::str::FromStr;

let template = Template::from_str("http://example.com{/seg*}").unwrap();
let mut variables = VariableBag::default();
variables.assign("seg", vec!["a", "b"]).unwrap();

let uri = template.expand_to_uri(&variables).unwrap();
assert_eq!(uri.path().value(), "/a/b");
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

// ------------------------------------------------------------------------------------------------
// Modules
// ------------------------------------------------------------------------------------------------

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod template;
pub use template::{Expression, Modifier, Operator, Template, VarSpec};

pub mod values;
pub use values::{Value, VariableBag, VariableValue};

mod expand;
