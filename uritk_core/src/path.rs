/*!
A path is always defined for a URI, though the defined path may be empty
(zero length). A segment may also be empty, resulting in two consecutive
slashes (`//`) in the path component. If an authority component is present,
then the path component must either be empty or begin with a slash (`/`). If
an authority component is absent, then the path cannot begin with two
slashes, as the following characters would be interpreted as an authority
component; those rules are enforced where the enclosing `Uri` is assembled.

# Example

```rust
use uritk_core::Path;
use std::str::FromStr;

let path = Path::from_str("/a/b/c/./../../g").unwrap();
assert_eq!(path.remove_dot_segments().value(), "/a/g");
```
*/

#![allow(clippy::module_name_repetitions)]

use crate::error::{Error as UriError, Result as UriResult};
use crate::pct::{self, Region};
use crate::{Normalize, ValidateStr};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The path component; stored in percent-encoded form.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(String);

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

const PATH_SEP: char = '/';

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Path {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, true)
    }
}

impl ValidateStr for Path {}

impl Normalize for Path {
    fn normalize(self) -> UriResult<Self> {
        Ok(self.remove_dot_segments())
    }
}

impl Path {
    pub(crate) fn parse(s: &str, strict: bool) -> UriResult<Self> {
        Ok(Self(pct::encode(s, Region::Path, strict)?))
    }

    ///
    /// The root of a path is the path separator character `/`; this returns
    /// a new path consisting of only that character.
    ///
    pub fn root() -> Self {
        Self(PATH_SEP.to_string())
    }

    // --------------------------------------------------------------------------------------------

    ///
    /// Return `true` if the path is the empty string `""` (which is a legal
    /// value), else `false`.
    ///
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    ///
    /// Returns `true` if this path is an absolute path, else `false`.
    ///
    pub fn is_absolute(&self) -> bool {
        self.0.starts_with(PATH_SEP)
    }

    /// Returns the current value of the path as a string slice.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns the path split at separator characters.
    pub fn segments(&self) -> Vec<&str> {
        self.0.split(PATH_SEP).collect()
    }

    ///
    /// Returns `true` if the first segment contains a `:` character, which
    /// makes the segment indistinguishable from a scheme prefix when the
    /// path opens a scheme-less reference.
    ///
    pub fn first_segment_has_colon(&self) -> bool {
        match self.0.split(PATH_SEP).next() {
            Some(segment) => segment.contains(':'),
            None => false,
        }
    }

    // --------------------------------------------------------------------------------------------

    ///
    /// Interpret and remove `.` and `..` segments. A trailing `.` or `..`
    /// input segment leaves the output ending in `/`.
    ///
    pub fn remove_dot_segments(&self) -> Self {
        let mut input: &str = &self.0;
        let mut output = String::with_capacity(input.len());
        while !input.is_empty() {
            if let Some(rest) = input.strip_prefix("../") {
                input = rest;
            } else if let Some(rest) = input.strip_prefix("./") {
                input = rest;
            } else if input.starts_with("/./") {
                input = &input[2..];
            } else if input == "/." {
                input = "/";
            } else if input.starts_with("/../") {
                input = &input[3..];
                pop_segment(&mut output);
            } else if input == "/.." {
                input = "/";
                pop_segment(&mut output);
            } else if input == "." || input == ".." {
                input = "";
            } else {
                let start = usize::from(input.starts_with(PATH_SEP));
                let end = match input[start..].find(PATH_SEP) {
                    Some(index) => start + index,
                    None => input.len(),
                };
                output.push_str(&input[..end]);
                input = &input[end..];
            }
        }
        Self(output)
    }

    ///
    /// Merge a reference path into this base path. If the base belongs to a
    /// URI with an authority and has an empty path, the merged path is the
    /// reference prefixed with `/`; otherwise the reference replaces the
    /// base's last segment.
    ///
    pub(crate) fn merge(&self, reference: &Path, base_has_authority: bool) -> Self {
        if base_has_authority && self.is_empty() {
            Self(format!("/{}", reference.0))
        } else {
            match self.0.rfind(PATH_SEP) {
                Some(index) => Self(format!("{}{}", &self.0[..=index], reference.0)),
                None => reference.clone(),
            }
        }
    }

    /// Push a new segment onto the end of the path.
    pub fn push(&mut self, segment: &str) -> UriResult<()> {
        let encoded = pct::encode(segment, Region::PathSegment, false)?;
        if self.0.is_empty() || self.0.ends_with(PATH_SEP) {
            self.0.push_str(&encoded);
        } else {
            self.0 = format!("{}/{}", self.0, encoded);
        }
        Ok(())
    }

    pub(crate) fn new_unchecked(s: String) -> Self {
        Self(s)
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn pop_segment(output: &mut String) {
    match output.rfind(PATH_SEP) {
        Some(index) => output.truncate(index),
        None => output.clear(),
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
