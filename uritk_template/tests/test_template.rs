pub mod common;
pub use common::*;

use parameterized::parameterized;
use std::str::FromStr;
use uritk_template::{Template, VariableBag};

// ------------------------------------------------------------------------------------------------
// API Tests
// ------------------------------------------------------------------------------------------------

#[test]
fn test_template_source_round_trip() {
    let source = "http://example.com/~{username}/{file}{.suffix}{?page,lang}{#section}";
    let template = Template::from_str(source).unwrap();
    assert_eq!(template.to_string(), source.to_string());
    assert_eq!(template.source(), source);
}

#[test]
fn test_variable_names_are_ordered_and_unique() {
    let template =
        Template::from_str("{count}{;count}{/count,other}{?count,other,third}").unwrap();
    assert_eq!(
        template.variable_names(),
        &[
            "count".to_string(),
            "other".to_string(),
            "third".to_string()
        ]
    );
}

#[test]
fn test_variable_names_include_modified_specs() {
    let template = Template::from_str("{/list*,path:4}").unwrap();
    assert_eq!(
        template.variable_names(),
        &["list".to_string(), "path".to_string()]
    );
}

#[test]
fn test_parse_failures() {
    assert!(Template::from_str("{unclosed").is_err());
    assert!(Template::from_str("unopened}").is_err());
    assert!(Template::from_str("{}").is_err());
    assert!(Template::from_str("{,}").is_err());
    assert!(Template::from_str("{a b}").is_err());
    assert!(Template::from_str("{=reserved}").is_err());
    assert!(Template::from_str("{!reserved}").is_err());
    assert!(Template::from_str("{var:badlen}").is_err());
    assert!(Template::from_str("{var:0}").is_err());
    assert!(Template::from_str("{var:10000}").is_err());
    assert!(Template::from_str("{var*:3}").is_err());
    assert!(Template::from_str("{var:3*}").is_err());
}

#[test]
fn test_pct_encoded_variable_names() {
    let template = Template::from_str("{%41var}").unwrap();
    assert_eq!(template.variable_names(), &["%41var".to_string()]);

    assert!(Template::from_str("{%4Gvar}").is_err());
}

#[test]
fn test_expand_to_uri() {
    let template = Template::from_str("http://example.com{/seg*}{?q}").unwrap();
    let mut variables = VariableBag::default();
    variables
        .assign("seg", vec!["a", "b"])
        .unwrap()
        .assign("q", "x y")
        .unwrap();

    let uri = template.expand_to_uri(&variables).unwrap();
    assert_eq!(uri.to_string(), "http://example.com/a/b?q=x%20y");
    assert_eq!(uri.path().value(), "/a/b");
}

#[parameterized(
    template = { "{v}", "{+v}", "{#v}", "{.v}", "{/v}", "{;v}", "{?v}", "{&v}" },
    expected = { "6", "6", "#6", ".6", "/6", ";v=6", "?v=6", "&v=6" }
)]
fn test_operator_table(template: &str, expected: &str) {
    let mut variables = VariableBag::default();
    variables.assign("v", "6").unwrap();
    let template = Template::from_str(template).unwrap();
    assert_eq!(template.expand(&variables).unwrap(), expected.to_string());
}

#[test]
fn test_undefined_variables_contribute_nothing() {
    let template = Template::from_str("{a}{+b}{#c}{.d}{/e}{;f}{?g}{&h}").unwrap();
    let variables = VariableBag::default();
    assert_eq!(template.expand(&variables).unwrap(), "");
}
