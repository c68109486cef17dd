/*!
Host normalization for IPv4 addresses written in their many historical forms.

A registered-name host whose dot-separated parts are all numbers (decimal,
octal `0…`, or hexadecimal `0x…`) denotes an IPv4 address and is rewritten
in canonical dot-decimal form. A host that is not such a candidate,
or whose numeric parts overflow their positional bounds, is returned
unchanged; this operation never fails on input.

# Example

```rust
use uritk_core::ipv4_normalize;

assert_eq!(ipv4_normalize("0300.0250.0.01"), "192.168.0.1");
assert_eq!(ipv4_normalize("0x7F.0.0.1"), "127.0.0.1");
assert_eq!(ipv4_normalize("example.com"), "example.com");
```
*/

use crate::error::{ErrorKind, Result as UriResult};
use std::net::Ipv4Addr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The arithmetic backend used to fold numeric host parts into a 32-bit
/// address. The backend is selected once, when a normalizer is constructed.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Calculator {
    /// Checked 64-bit native arithmetic.
    Native,
}

///
/// Rewrites candidate hosts in canonical dot-decimal form, using the
/// [`Calculator`] chosen at construction.
///
#[derive(Clone, Copy, Debug)]
pub struct Ipv4Normalizer {
    calculator: Calculator,
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Normalize `host` with a freshly selected backend, returning it unchanged
/// when it does not denote an IPv4 address.
///
pub fn ipv4_normalize(host: &str) -> String {
    Ipv4Normalizer::new()
        .map(|normalizer| normalizer.normalize(host))
        .unwrap_or_else(|_| host.to_string())
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

const BACKENDS: &[Calculator] = &[Calculator::Native];

impl Calculator {
    ///
    /// Select the first available backend. Fails with `Ipv4CalculatorMissing`
    /// on a platform providing none; this is a construction-time error, the
    /// per-call operations below are total.
    ///
    pub fn select() -> UriResult<Self> {
        BACKENDS
            .first()
            .copied()
            .ok_or_else(|| ErrorKind::Ipv4CalculatorMissing.into())
    }

    fn fold_digits(&self, digits: &str, radix: u32) -> Option<u64> {
        match self {
            Calculator::Native => {
                let mut value: u64 = 0;
                for c in digits.chars() {
                    let digit = c.to_digit(radix)? as u64;
                    value = value.checked_mul(radix as u64)?.checked_add(digit)?;
                }
                Some(value)
            }
        }
    }

    fn combine(&self, parts: &[u64]) -> Option<u32> {
        match self {
            Calculator::Native => {
                let (last, head) = parts.split_last()?;
                // With N parts the last one covers the remaining 5-N octets.
                if *last >= 256u64.pow((5 - parts.len()) as u32) {
                    return None;
                }
                let mut value = *last;
                for (index, part) in head.iter().enumerate() {
                    if *part > 255 {
                        return None;
                    }
                    value += part * 256u64.pow((3 - index) as u32);
                }
                u32::try_from(value).ok()
            }
        }
    }
}

impl Ipv4Normalizer {
    ///
    /// Construct a normalizer, selecting an arithmetic backend.
    ///
    pub fn new() -> UriResult<Self> {
        Ok(Self {
            calculator: Calculator::select()?,
        })
    }

    /// Return the backend this normalizer was constructed with.
    pub fn calculator(&self) -> Calculator {
        self.calculator
    }

    ///
    /// Rewrite `host` in dot-decimal form if it denotes an IPv4 address,
    /// else return it unchanged.
    ///
    pub fn normalize(&self, host: &str) -> String {
        match self.address_value(host) {
            Some(value) => Ipv4Addr::from(value).to_string(),
            None => host.to_string(),
        }
    }

    fn address_value(&self, host: &str) -> Option<u32> {
        if host.is_empty() {
            return None;
        }
        let mut parts = host.split('.').collect::<Vec<&str>>();
        // A single empty trailing part is tolerated and stripped.
        if parts.len() > 1 && parts.last().map(|p| p.is_empty()) == Some(true) {
            let _ = parts.pop();
        }
        if parts.is_empty() || parts.len() > 4 {
            return None;
        }
        let values = parts
            .iter()
            .map(|part| self.part_value(part))
            .collect::<Option<Vec<u64>>>()?;
        self.calculator.combine(&values)
    }

    fn part_value(&self, part: &str) -> Option<u64> {
        if let Some(hex) = part.strip_prefix("0x").or_else(|| part.strip_prefix("0X")) {
            // "0x" with no digits denotes zero.
            if hex.is_empty() {
                Some(0)
            } else {
                self.calculator.fold_digits(hex, 16)
            }
        } else if part.len() > 1 && part.starts_with('0') {
            self.calculator.fold_digits(&part[1..], 8)
        } else if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
            self.calculator.fold_digits(part, 10)
        } else {
            None
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
    fn test_mixed_radix_parts() {
        assert_eq!(ipv4_normalize("0300.0250.0.01"), "192.168.0.1".to_string());
        assert_eq!(ipv4_normalize("0x7F.0.0.1"), "127.0.0.1".to_string());
        assert_eq!(ipv4_normalize("0X7F.0.0.1"), "127.0.0.1".to_string());
    }

    #[test]
    fn test_collapsed_parts() {
        assert_eq!(ipv4_normalize("127.1"), "127.0.0.1".to_string());
        assert_eq!(ipv4_normalize("127.0.1"), "127.0.0.1".to_string());
        assert_eq!(ipv4_normalize("2130706433"), "127.0.0.1".to_string());
        assert_eq!(ipv4_normalize("0x7F000001"), "127.0.0.1".to_string());
    }

    #[test]
    fn test_trailing_dot() {
        assert_eq!(ipv4_normalize("192.168.0.1."), "192.168.0.1".to_string());
        assert_eq!(ipv4_normalize("1."), "0.0.0.1".to_string());
    }

    #[test]
    fn test_not_candidates_unchanged() {
        assert_eq!(ipv4_normalize("example.com"), "example.com".to_string());
        assert_eq!(ipv4_normalize("1.2.3.com"), "1.2.3.com".to_string());
        assert_eq!(ipv4_normalize("08.0.0.1"), "08.0.0.1".to_string());
        assert_eq!(ipv4_normalize(""), "".to_string());
        assert_eq!(ipv4_normalize("1..2"), "1..2".to_string());
    }

    #[test]
    fn test_overflow_unchanged() {
        assert_eq!(ipv4_normalize("256.0.0.1"), "256.0.0.1".to_string());
        assert_eq!(ipv4_normalize("1.2.3.256"), "1.2.3.256".to_string());
        assert_eq!(ipv4_normalize("4294967296"), "4294967296".to_string());
        assert_eq!(
            ipv4_normalize("99999999999999999999"),
            "99999999999999999999".to_string()
        );
        assert_eq!(ipv4_normalize("1.2.3.4.5"), "1.2.3.4.5".to_string());
    }

    #[test]
    fn test_backend_selection() {
        let normalizer = Ipv4Normalizer::new().unwrap();
        assert_eq!(normalizer.calculator(), Calculator::Native);
    }
}
