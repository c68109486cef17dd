use std::str::FromStr;
use uritk_template::{Template, Value, VariableBag};

///
/// The variable assignments used by the Level 1 through Level 4 expansion
/// examples.
///
pub fn example_variables() -> VariableBag {
    let mut variables = VariableBag::default();
    variables
        .assign("var", "value")
        .unwrap()
        .assign("hello", "Hello World!")
        .unwrap()
        .assign("half", "50%")
        .unwrap()
        .assign("who", "fred")
        .unwrap()
        .assign("base", "http://example.com/home/")
        .unwrap()
        .assign("path", "/foo/bar")
        .unwrap()
        .assign("list", vec!["red", "green", "blue"])
        .unwrap()
        .assign(
            "keys",
            vec![("semi", ";"), ("dot", "."), ("comma", ",")],
        )
        .unwrap()
        .assign("v", "6")
        .unwrap()
        .assign("x", "1024")
        .unwrap()
        .assign("y", "768")
        .unwrap()
        .assign("empty", "")
        .unwrap()
        .assign("empty_keys", Value::Assoc(vec![]))
        .unwrap();
    variables
}

pub fn expand_and_compare(template: &str, variables: &VariableBag, compare_to: &str) {
    println!("> expand_and_compare({:?} == {:?})", template, compare_to);
    let result = Template::from_str(template);
    assert!(result.is_ok());
    let result = result.unwrap().expand(variables);
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), compare_to.to_string());
}
