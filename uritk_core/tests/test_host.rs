use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use uritk_core::{Host, ValidateStr};

// ------------------------------------------------------------------------------------------------
// API Tests
// ------------------------------------------------------------------------------------------------

#[test]
fn test_domain_name() {
    let host = Host::from_str("example.org").unwrap();
    assert!(host.is_domain_name());
    assert!(!host.is_ipv4_address());
    assert!(!host.is_ipv6_address());
    assert!(!host.is_ip_future_address());
    assert_eq!(host.to_string(), "example.org".to_string());
}

#[test]
fn test_domain_name_is_lowercased() {
    let host = Host::from_str("WWW.Example.COM").unwrap();
    assert_eq!(host.to_string(), "www.example.com".to_string());
}

#[test]
fn test_domain_name_percent_triplets() {
    let host = Host::from_str("ex%61mple.org").unwrap();
    assert_eq!(host.to_string(), "ex%61mple.org".to_string());

    assert!(Host::from_str("ex%GGmple.org").is_err());
    assert!(Host::from_str("ex%6.org").is_err());
}

#[test]
fn test_domain_name_idn_to_ascii() {
    let host = Host::from_str("bücher.de").unwrap();
    assert!(host.is_domain_name());
    assert_eq!(host.to_string(), "xn--bcher-kva.de".to_string());
}

#[test]
fn test_ipv4_strict() {
    let host = Host::from_str("127.0.0.1").unwrap();
    assert!(host.is_ipv4_address());
    assert_eq!(host.to_string(), "127.0.0.1".to_string());

    // Out-of-range or zero-padded forms fall through to registered names.
    assert!(Host::from_str("256.0.0.1").unwrap().is_domain_name());
    assert!(Host::from_str("01.0.0.1").unwrap().is_domain_name());
    assert!(Host::from_str("1.2.3").unwrap().is_domain_name());
}

#[test]
fn test_ipv6() {
    let host = Host::from_str("[::1]").unwrap();
    assert!(host.is_ipv6_address());
    assert_eq!(host.to_string(), "[::1]".to_string());

    let host = Host::from_str("[2001:DB8::7]").unwrap();
    assert_eq!(host.to_string(), "[2001:db8::7]".to_string());

    assert!(Host::from_str("[::1").is_err());
    assert!(Host::from_str("[not-an-address]").is_err());
    assert!(Host::from_str("::1").is_err());
}

#[test]
fn test_ipv_future() {
    let host = Host::from_str("[v7.::1]").unwrap();
    assert!(host.is_ip_future_address());
    assert_eq!(host.to_string(), "[v7.::1]".to_string());

    assert!(Host::from_str("[v.::1]").is_err());
    assert!(Host::from_str("[v7.]").is_err());
    assert!(Host::from_str("[vZ.::1]").is_err());
}

#[test]
fn test_empty_host_rejected() {
    assert!(Host::from_str("").is_err());
    assert!(!Host::is_valid(""));
}

#[test]
fn test_constructors() {
    let host = Host::new_ipv4_address(Ipv4Addr::LOCALHOST);
    assert_eq!(host.to_string(), "127.0.0.1".to_string());

    let host = Host::new_ipv6_address(Ipv6Addr::LOCALHOST);
    assert_eq!(host.to_string(), "[::1]".to_string());

    let host = Host::new_ipv_future_address(7, "::1").unwrap();
    assert_eq!(host.to_string(), "[v7.::1]".to_string());

    assert!(Host::new_domain_name("example.com").is_ok());
    assert!(Host::new_domain_name("bad host").is_err());
}
