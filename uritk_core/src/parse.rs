/*!
Internal character classes and validation functions.
*/

use lazy_static::lazy_static;
use regex::Regex;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

lazy_static! {
    static ref RE_SCHEME: Regex = Regex::new(r"^[[:alpha:]][[:alnum:]+\-.]*$").unwrap();
    static ref RE_DEC_OCTET: Regex =
        Regex::new(r"^(25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])$").unwrap();
}

pub(crate) fn is_scheme(s: &str) -> bool {
    // scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
    RE_SCHEME.is_match(s)
}

pub(crate) fn is_dec_octet(s: &str) -> bool {
    // dec-octet = DIGIT / %x31-39 DIGIT / "1" 2DIGIT / "2" %x30-34 DIGIT / "25" %x30-35
    RE_DEC_OCTET.is_match(s)
}

pub(crate) fn is_strict_ipv4(s: &str) -> bool {
    let parts = s.split('.').collect::<Vec<&str>>();
    parts.len() == 4 && parts.iter().all(|p| is_dec_octet(p))
}

pub(crate) fn is_reg_name(s: &str) -> bool {
    // reg-name = *( unreserved / pct-encoded / sub-delims )
    s.chars()
        .all(|c| is_unreserved(c) || is_sub_delims(c) || c == '%' || !c.is_ascii())
        && is_correctly_escaped(s)
}

pub(crate) fn is_ipv_future_tail(s: &str) -> bool {
    // IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )
    !s.is_empty()
        && s.chars()
            .all(|c| is_unreserved(c) || is_sub_delims(c) || c == ':')
}

pub(crate) fn is_correctly_escaped(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'%' {
            if index + 2 >= bytes.len()
                || !bytes[index + 1].is_ascii_hexdigit()
                || !bytes[index + 2].is_ascii_hexdigit()
            {
                return false;
            }
            index += 3;
        } else {
            index += 1;
        }
    }
    true
}

#[inline]
pub(crate) fn is_sub_delims(c: char) -> bool {
    c == '!'
        || c == '$'
        || c == '&'
        || c == '\''
        || c == '('
        || c == ')'
        || c == '*'
        || c == '+'
        || c == ','
        || c == ';'
        || c == '='
}

#[inline]
pub(crate) fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_' || c == '~'
}

#[inline]
pub(crate) fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
