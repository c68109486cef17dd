use std::str::FromStr;
use uritk_core::{normalize, relativize, resolve, Uri};

pub fn parse_success(uri: &str) {
    println!("> parse_success({:?})", uri);
    let result = Uri::from_str(uri);
    assert!(result.is_ok());
}

pub fn parse_failure(uri: &str) {
    println!("> parse_failure({:?})", uri);
    let result = Uri::from_str(uri);
    assert!(result.is_err());
}

pub fn parse_and_compare(uri: &str, compare_to: &str) {
    println!("> parse_and_compare({:?} == {:?})", uri, compare_to);
    let result = Uri::from_str(uri);
    assert!(result.is_ok());
    let uri = result.unwrap();
    assert_eq!(uri.to_string(), compare_to.to_string());
}

pub fn normalize_and_compare(uri: &str, compare_to: &str) {
    println!("> normalize_and_compare({:?} == {:?})", uri, compare_to);
    let result = Uri::from_str(uri);
    assert!(result.is_ok());
    assert_eq!(normalize(&result.unwrap()), compare_to.to_string());
}

pub fn resolve_and_compare(base: &str, reference: &str, compare_to: &str) {
    println!(
        "> resolve_and_compare({:?}, {:?} == {:?})",
        base, reference, compare_to
    );
    let base = Uri::from_str(base).unwrap();
    let reference = Uri::from_str(reference).unwrap();
    assert_eq!(resolve(&base, &reference).to_string(), compare_to.to_string());
}

pub fn relativize_and_compare(base: &str, target: &str, compare_to: &str) {
    println!(
        "> relativize_and_compare({:?}, {:?} == {:?})",
        base, target, compare_to
    );
    let base = Uri::from_str(base).unwrap();
    let target = Uri::from_str(target).unwrap();
    assert_eq!(relativize(&base, &target).to_string(), compare_to.to_string());
}
