use parameterized::parameterized;
use uritk_core::{ipv4_normalize, Calculator, Ipv4Normalizer};

// ------------------------------------------------------------------------------------------------
// API Tests
// ------------------------------------------------------------------------------------------------

#[parameterized(
    host = {
        "0300.0250.0.01",
        "0x7F.0.0.1",
        "127.1",
        "127.0.1",
        "2130706433",
        "0x7F000001",
        "192.168.0.1.",
        "255.255.255.255",
        "0.0.0.0"
    },
    expected = {
        "192.168.0.1",
        "127.0.0.1",
        "127.0.0.1",
        "127.0.0.1",
        "127.0.0.1",
        "127.0.0.1",
        "192.168.0.1",
        "255.255.255.255",
        "0.0.0.0"
    }
)]
fn test_candidates_rewritten(host: &str, expected: &str) {
    assert_eq!(ipv4_normalize(host), expected.to_string());
}

#[parameterized(
    host = {
        "example.com",
        "1.2.3.com",
        "08.0.0.1",
        "0xG.0.0.1",
        "256.0.0.1",
        "1.2.3.256",
        "1.2.3.4.5",
        "4294967296",
        "99999999999999999999",
        "1..2",
        ".",
        ""
    }
)]
fn test_non_candidates_unchanged(host: &str) {
    assert_eq!(ipv4_normalize(host), host.to_string());
}

#[test]
fn test_normalizer_backend() {
    let normalizer = Ipv4Normalizer::new().unwrap();
    assert_eq!(normalizer.calculator(), Calculator::Native);
    assert_eq!(normalizer.normalize("0xFF.0377.65535"), "255.255.255.255");
}

#[test]
fn test_part_bounds() {
    // With fewer than four parts the last part covers the remaining octets.
    assert_eq!(ipv4_normalize("1.65535"), "1.0.255.255");
    assert_eq!(ipv4_normalize("1.65536"), "1.1.0.0");
    assert_eq!(ipv4_normalize("1.16777216"), "1.16777216");
}
