/*!
Operator-driven template expansion.

Each expression contributes its items joined by the operator's separator and
prefixed, when at least one item was emitted, by the operator's first
string. An unassigned variable, an empty list, and an empty pair list all
contribute nothing at all. Values are encoded against the operator's
allowed set; valid percent-triplets already present in a value pass through
under every operator, while a bare `%` is encoded.
*/

use crate::error::Result as TemplateResult;
use crate::template::{Modifier, Operator, Part, Template};
use crate::values::{VariableBag, VariableValue};
use crate::ErrorKind;
use uritk_core::pct;
use uritk_core::Uri;

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Template {
    ///
    /// Expand this template with the given variables.
    ///
    /// # Example
    ///
    /// ```rust
    /// use uritk_template::{Template, VariableBag};
    /// use std::str::FromStr;
    ///
    /// let template = Template::from_str("{/list*,path:4}").unwrap();
    /// let mut variables = VariableBag::default();
    /// variables
    ///     .assign("list", vec!["red", "green", "blue"]).unwrap()
    ///     .assign("path", "/foo/bar/baz").unwrap();
    ///
    /// assert_eq!(
    ///     template.expand(&variables).unwrap(),
    ///     "/red/green/blue/%2Ffoo",
    /// );
    /// ```
    ///
    pub fn expand(&self, variables: &VariableBag) -> TemplateResult<String> {
        let mut out = String::new();
        for part in self.parts() {
            match part {
                Part::Literal(literal) => out.push_str(&encode(literal, true)),
                Part::Expression(expression) => {
                    let operator = expression.operator();
                    let mut items = Vec::new();
                    for spec in expression.varspecs() {
                        expand_varspec(
                            &mut items,
                            spec.name(),
                            spec.modifier(),
                            operator,
                            variables,
                        )?;
                    }
                    if !items.is_empty() {
                        out.push_str(operator.first());
                        out.push_str(&items.join(&operator.separator().to_string()));
                    }
                }
            }
        }
        Ok(out)
    }

    ///
    /// Expand this template and parse the result as a URI reference.
    ///
    pub fn expand_to_uri(&self, variables: &VariableBag) -> TemplateResult<Uri> {
        Ok(Uri::parse(&self.expand(variables)?)?)
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn expand_varspec(
    items: &mut Vec<String>,
    name: &str,
    modifier: Modifier,
    operator: Operator,
    variables: &VariableBag,
) -> TemplateResult<()> {
    let value = match variables.fetch(name) {
        None => return Ok(()),
        Some(value) if value.is_empty_composite() => return Ok(()),
        Some(value) => value,
    };
    let allow = operator.allow_reserved();
    match value {
        VariableValue::Scalar(scalar) => {
            let raw = match modifier {
                // The prefix counts characters of the raw value.
                Modifier::Prefix(n) => scalar.chars().take(n as usize).collect(),
                _ => scalar.clone(),
            };
            if operator.named() {
                items.push(named_item(name, &raw, operator));
            } else {
                items.push(encode(&raw, allow));
            }
        }
        VariableValue::List(members) => {
            if matches!(modifier, Modifier::Prefix(_)) {
                return Err(ErrorKind::UnexpandableValue(name.to_string()).into());
            }
            if matches!(modifier, Modifier::Explode) {
                for member in members {
                    if operator.named() {
                        items.push(named_item(name, member, operator));
                    } else {
                        items.push(encode(member, allow));
                    }
                }
            } else {
                let joined = members
                    .iter()
                    .map(|member| encode(member, allow))
                    .collect::<Vec<String>>()
                    .join(",");
                if operator.named() {
                    items.push(format!("{}={}", name, joined));
                } else {
                    items.push(joined);
                }
            }
        }
        VariableValue::Assoc(pairs) => {
            if matches!(modifier, Modifier::Prefix(_)) {
                return Err(ErrorKind::UnexpandableValue(name.to_string()).into());
            }
            if matches!(modifier, Modifier::Explode) {
                // Exploded pairs emit k=v under every operator; when the
                // operator is named the key stands in for the variable name.
                for (key, value) in pairs {
                    let key = encode(key, allow);
                    if operator.named() {
                        items.push(named_item(&key, value, operator));
                    } else {
                        items.push(format!("{}={}", key, encode(value, allow)));
                    }
                }
            } else {
                let flattened = pairs
                    .iter()
                    .flat_map(|(key, value)| [key, value])
                    .map(|part| encode(part, allow))
                    .collect::<Vec<String>>()
                    .join(",");
                if operator.named() {
                    items.push(format!("{}={}", name, flattened));
                } else {
                    items.push(flattened);
                }
            }
        }
    }
    Ok(())
}

fn named_item(name: &str, value: &str, operator: Operator) -> String {
    if value.is_empty() {
        format!("{}{}", name, operator.if_empty())
    } else {
        format!("{}={}", name, encode(value, operator.allow_reserved()))
    }
}

fn encode(s: &str, allow_reserved: bool) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut skip = 0;
    for (index, c) in s.char_indices() {
        if skip > 0 {
            skip -= 1;
            continue;
        }
        if c == '%' && pct::has_valid_triplet(s, index) {
            out.push('%');
            out.push(bytes[index + 1].to_ascii_uppercase() as char);
            out.push(bytes[index + 2].to_ascii_uppercase() as char);
            skip = 2;
        } else if c.is_ascii()
            && (pct::is_unreserved_byte(c as u8)
                || (allow_reserved && pct::is_reserved_byte(c as u8)))
        {
            out.push(c);
        } else if c.is_ascii() {
            pct::push_encoded(&mut out, c as u8);
        } else {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).as_bytes() {
                pct::push_encoded(&mut out, *b);
            }
        }
    }
    out
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_modes() {
        assert_eq!(encode("Hello World!", false), "Hello%20World%21");
        assert_eq!(encode("/foo/bar", false), "%2Ffoo%2Fbar");
        assert_eq!(encode("/foo/bar", true), "/foo/bar");
        assert_eq!(encode("50%", false), "50%25");
        assert_eq!(encode("50%", true), "50%25");
        assert_eq!(encode("a%2fb", false), "a%2Fb");
        assert_eq!(encode("©", false), "%C2%A9");
    }
}
