/*!
Provides the `Query` component of a `Uri`.

The query is held as a single percent-encoded string; the conventional
`key=value` pair structure is exposed for iteration but never decoded, so
opaque query payloads round-trip byte for byte.
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
/// The query component; stored in percent-encoded form.
///
/// # Example
///
/// ```rust
/// use uritk_core::Query;
/// use std::str::FromStr;
///
/// let query = Query::from_str("tag=networking&order=newest").unwrap();
/// assert_eq!(query.to_string(), "?tag=networking&order=newest");
/// assert_eq!(query.pairs().count(), 2);
/// ```
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Query(String);

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "?{}", self.0)
    }
}

impl FromStr for Query {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, true)
    }
}

impl ValidateStr for Query {}

impl Normalize for Query {
    ///
    /// Sort the `&`-separated pairs of the query lexicographically. Pair
    /// values are not decoded.
    ///
    fn normalize(self) -> UriResult<Self> {
        let mut pairs = self.0.split('&').collect::<Vec<&str>>();
        pairs.sort_unstable();
        Ok(Self(pairs.join("&")))
    }
}

impl Query {
    pub(crate) fn parse(s: &str, strict: bool) -> UriResult<Self> {
        Ok(Self(pct::encode(s, Region::Query, strict)?))
    }

    ///
    /// Return `true` if the query is the empty string, else `false`.
    ///
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the current value of the query as a string slice.
    pub fn value(&self) -> &str {
        &self.0
    }

    ///
    /// Iterate over the `&`-separated pairs, split at the first `=` of each.
    /// A pair without `=` yields `None` for its value side.
    ///
    pub fn pairs(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.split('&').map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (pair, None),
        })
    }

    pub(crate) fn new_unchecked(s: String) -> Self {
        Self(s)
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_sort() {
        let query = Query::from_str("b=2&a=1&c").unwrap();
        assert_eq!(query.normalize().unwrap().value(), "a=1&b=2&c");
    }

    #[test]
    fn test_pairs_are_not_decoded() {
        let query = Query::from_str("k=%2Fv").unwrap();
        assert_eq!(query.pairs().next(), Some(("k", Some("%2Fv"))));
    }
}
