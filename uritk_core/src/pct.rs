/*!
Percent-encoding policy, per syntactic region.

Encoding is region-specific: each region of a URI permits a different set of
characters to appear unencoded, and every byte outside that set is written as
an uppercase `%XX` triplet. Decoding is region-agnostic and deliberately
partial: canonical form only ever decodes triplets whose byte is in the
unreserved set, so that reserved characters keep whatever encoded or decoded
state they were parsed with.
*/

use crate::error::{Component, ErrorKind, Result};
use crate::parse;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The syntactic region an encoder operates on. Each region names the set of
/// characters it permits unencoded.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// unreserved / sub-delims / `:`
    UserInfo,
    /// unreserved / sub-delims
    RegName,
    /// unreserved / sub-delims / `:` / `@`
    PathSegment,
    /// The path-segment set plus the `/` separator.
    Path,
    /// unreserved / sub-delims / `:` / `@` / `/` / `?`
    Query,
    /// unreserved / sub-delims / `:` / `@` / `/` / `?`
    Fragment,
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Encode `s` for the given `region`. Valid `%XX` triplets already present in
/// the input pass through with their hex digits uppercased; every other byte
/// outside the region's permitted set is percent-encoded. With `strict` set,
/// an unescaped control byte (0x00–0x1F, 0x7F) is an error rather than being
/// encoded.
///
pub fn encode(s: &str, region: Region, strict: bool) -> Result<String> {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut skip = 0;
    for (index, c) in s.char_indices() {
        if skip > 0 {
            skip -= 1;
            continue;
        }
        if c == '%' && has_valid_triplet(s, index) {
            out.push('%');
            out.push(bytes[index + 1].to_ascii_uppercase() as char);
            out.push(bytes[index + 2].to_ascii_uppercase() as char);
            skip = 2;
        } else if c.is_ascii() {
            let b = c as u8;
            if b <= 0x1F || b == 0x7F {
                if strict {
                    return Err(ErrorKind::InvalidEncoding(region.component()).into());
                }
                push_encoded(&mut out, b);
            } else if region.permits(c) {
                out.push(c);
            } else {
                push_encoded(&mut out, b);
            }
        } else {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).as_bytes() {
                push_encoded(&mut out, *b);
            }
        }
    }
    Ok(out)
}

///
/// Normalize the encoded state of `s`: triplets that decode to an unreserved
/// byte are decoded, all other triplets keep their bytes but have their hex
/// digits uppercased, and a stray `%` that does not begin a valid triplet is
/// re-encoded as `%25`.
///
pub fn normalize_triplets(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut skip = 0;
    for (index, c) in s.char_indices() {
        if skip > 0 {
            skip -= 1;
            continue;
        }
        if c == '%' {
            if has_valid_triplet(s, index) {
                let value =
                    parse::hex_value(bytes[index + 1]) * 16 + parse::hex_value(bytes[index + 2]);
                if is_unreserved_byte(value) {
                    out.push(value as char);
                } else {
                    out.push('%');
                    out.push(bytes[index + 1].to_ascii_uppercase() as char);
                    out.push(bytes[index + 2].to_ascii_uppercase() as char);
                }
                skip = 2;
            } else {
                out.push_str("%25");
            }
        } else {
            out.push(c);
        }
    }
    out
}

///
/// Returns `true` if the byte at `index` starts a valid `%XX` triplet.
///
pub fn has_valid_triplet(s: &str, index: usize) -> bool {
    let bytes = s.as_bytes();
    index + 2 < bytes.len()
        && bytes[index] == b'%'
        && bytes[index + 1].is_ascii_hexdigit()
        && bytes[index + 2].is_ascii_hexdigit()
}

///
/// Returns `true` for the unreserved set `A-Z a-z 0-9 - . _ ~`.
///
pub fn is_unreserved_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'.' || b == b'_' || b == b'~'
}

///
/// Returns `true` for the reserved set, gen-delims plus sub-delims.
///
pub fn is_reserved_byte(b: u8) -> bool {
    matches!(
        b,
        b':' | b'/'
            | b'?'
            | b'#'
            | b'['
            | b']'
            | b'@'
            | b'!'
            | b'$'
            | b'&'
            | b'\''
            | b'('
            | b')'
            | b'*'
            | b'+'
            | b','
            | b';'
            | b'='
    )
}

///
/// Append the uppercase `%XX` form of `byte` to `out`.
///
pub fn push_encoded(out: &mut String, byte: u8) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    out.push('%');
    out.push(HEX[(byte >> 4) as usize] as char);
    out.push(HEX[(byte & 0x0F) as usize] as char);
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Region {
    pub(crate) fn component(self) -> Component {
        match self {
            Region::UserInfo | Region::RegName => Component::Authority,
            Region::PathSegment | Region::Path => Component::Path,
            Region::Query => Component::Query,
            Region::Fragment => Component::Fragment,
        }
    }

    pub(crate) fn permits(self, c: char) -> bool {
        if parse::is_unreserved(c) {
            return true;
        }
        match self {
            Region::UserInfo => parse::is_sub_delims(c) || c == ':',
            Region::RegName => parse::is_sub_delims(c),
            Region::PathSegment => parse::is_sub_delims(c) || c == ':' || c == '@',
            Region::Path => parse::is_sub_delims(c) || c == ':' || c == '@' || c == '/',
            Region::Query | Region::Fragment => {
                parse::is_sub_delims(c) || c == ':' || c == '@' || c == '/' || c == '?'
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_passes_triplets() {
        assert_eq!(
            encode("a%2fb", Region::Path, true).unwrap(),
            "a%2Fb".to_string()
        );
    }

    #[test]
    fn test_encode_space() {
        assert_eq!(
            encode("a b", Region::Query, true).unwrap(),
            "a%20b".to_string()
        );
    }

    #[test]
    fn test_encode_stray_percent() {
        assert_eq!(
            encode("100%", Region::Query, true).unwrap(),
            "100%25".to_string()
        );
    }

    #[test]
    fn test_encode_non_ascii() {
        assert_eq!(
            encode("Ῥόδος", Region::Path, true).unwrap(),
            "%E1%BF%AC%CF%8C%CE%B4%CE%BF%CF%82".to_string()
        );
    }

    #[test]
    fn test_encode_strict_control() {
        assert!(encode("a\u{0}b", Region::Path, true).is_err());
        assert_eq!(
            encode("a\u{0}b", Region::Path, false).unwrap(),
            "a%00b".to_string()
        );
    }

    #[test]
    fn test_region_sets() {
        assert!(encode("a:b", Region::UserInfo, true).unwrap() == "a:b");
        assert_eq!(encode("a:b", Region::RegName, true).unwrap(), "a%3Ab");
        assert!(encode("a@b:c/d?e", Region::Query, true).unwrap() == "a@b:c/d?e");
    }

    #[test]
    fn test_normalize_triplets() {
        assert_eq!(normalize_triplets("%7Efoo"), "~foo".to_string());
        assert_eq!(normalize_triplets("%2ffoo"), "%2Ffoo".to_string());
        assert_eq!(normalize_triplets("100%"), "100%25".to_string());
        assert_eq!(normalize_triplets("%41%42"), "AB".to_string());
    }
}
