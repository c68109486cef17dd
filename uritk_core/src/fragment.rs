#![allow(clippy::module_name_repetitions)]

use crate::error::{Error as UriError, Result as UriResult};
use crate::pct::{self, Region};
use crate::ValidateStr;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The fragment component of a `Uri` contains a fragment identifier
/// providing direction to a secondary resource, such as a section heading in
/// an article identified by the remainder of the URI.
///
/// # Example
///
/// ```rust
/// use uritk_core::Fragment;
/// use std::str::FromStr;
///
/// let heading = Fragment::from_str("heading-one").unwrap();
/// assert_eq!(heading.to_string(), "#heading-one");
/// ```
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fragment(String);

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Display for Fragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for Fragment {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, true)
    }
}

impl ValidateStr for Fragment {}

impl Fragment {
    pub(crate) fn parse(s: &str, strict: bool) -> UriResult<Self> {
        Ok(Self(pct::encode(s, Region::Fragment, strict)?))
    }

    ///
    /// Return `true` if the fragment is the empty string, else `false`.
    ///
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the current value of the fragment as a string slice.
    pub fn value(&self) -> &str {
        &self.0
    }
}
