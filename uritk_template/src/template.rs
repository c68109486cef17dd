/*!
Provides the `Template` type: a parsed URI template, its expressions, and
the ordered list of variable names they mention.

A template is literal text interleaved with expressions. An expression is
delimited by braces and holds an optional operator character followed by a
comma-separated list of variable specifiers; a specifier may carry either a
prefix modifier (`:N`) or an explode modifier (`*`), never both.

# Example

```rust
use uritk_template::Template;
use std::str::FromStr;

let template = Template::from_str("http://example.com/~{username}/{file}{.suffix}").unwrap();
assert_eq!(
    template.variable_names(),
    &["username".to_string(), "file".to_string(), "suffix".to_string()],
);
```
*/

use crate::error::{Error as TemplateError, ErrorKind, Result as TemplateResult};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uritk_core::pct;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The expansion behavior an expression's operator selects. Every operator
/// is described by five properties: the string prepended to the first
/// emitted item, the separator between items, whether items are
/// `name=value` pairs, the string a named item takes when its value is
/// empty, and whether reserved characters pass through unencoded.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `{var}`: comma-joined, unreserved encoding only.
    Simple,
    /// `{+var}`: comma-joined, reserved characters pass through.
    Reserved,
    /// `{#var}`: as `+`, prefixed with `#`.
    Fragment,
    /// `{.var}`: dot-prefixed labels.
    Label,
    /// `{/var}`: slash-joined path segments.
    PathSegment,
    /// `{;var}`: semicolon-joined path parameters, named.
    PathParameter,
    /// `{?var}`: a query string, named, `&`-joined.
    Query,
    /// `{&var}`: query continuation, named, `&`-joined.
    QueryContinuation,
}

///
/// A single variable specifier within an expression.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VarSpec {
    name: String,
    modifier: Modifier,
}

///
/// The modifier carried by a variable specifier.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// No modifier.
    None,
    /// `:N`, expand only the first N characters of the value.
    Prefix(u16),
    /// `*`, expand composite values as separate items.
    Explode,
}

///
/// An expression: an operator and an ordered list of variable specifiers.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Expression {
    operator: Operator,
    varspecs: Vec<VarSpec>,
}

///
/// A parsed URI template: the original string, its parts, and the ordered,
/// de-duplicated list of variable names across all expressions.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    source: String,
    parts: Vec<Part>,
    variables: Vec<String>,
}

// ------------------------------------------------------------------------------------------------
// Private Types
// ------------------------------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Part {
    Literal(String),
    Expression(Expression),
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Operator {
    fn from_prefix(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Reserved),
            '#' => Some(Self::Fragment),
            '.' => Some(Self::Label),
            '/' => Some(Self::PathSegment),
            ';' => Some(Self::PathParameter),
            '?' => Some(Self::Query),
            '&' => Some(Self::QueryContinuation),
            _ => None,
        }
    }

    pub(crate) fn first(self) -> &'static str {
        match self {
            Self::Simple | Self::Reserved => "",
            Self::Fragment => "#",
            Self::Label => ".",
            Self::PathSegment => "/",
            Self::PathParameter => ";",
            Self::Query => "?",
            Self::QueryContinuation => "&",
        }
    }

    pub(crate) fn separator(self) -> char {
        match self {
            Self::Simple | Self::Reserved | Self::Fragment => ',',
            Self::Label => '.',
            Self::PathSegment => '/',
            Self::PathParameter => ';',
            Self::Query | Self::QueryContinuation => '&',
        }
    }

    pub(crate) fn named(self) -> bool {
        matches!(
            self,
            Self::PathParameter | Self::Query | Self::QueryContinuation
        )
    }

    pub(crate) fn if_empty(self) -> &'static str {
        match self {
            Self::Query | Self::QueryContinuation => "=",
            _ => "",
        }
    }

    pub(crate) fn allow_reserved(self) -> bool {
        matches!(self, Self::Reserved | Self::Fragment)
    }
}

// ------------------------------------------------------------------------------------------------

impl VarSpec {
    /// Return the variable name this specifier refers to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the modifier this specifier carries.
    pub fn modifier(&self) -> Modifier {
        self.modifier
    }
}

// ------------------------------------------------------------------------------------------------

impl Expression {
    /// Return the operator of this expression.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Return the ordered variable specifiers of this expression.
    pub fn varspecs(&self) -> &[VarSpec] {
        &self.varspecs
    }
}

// ------------------------------------------------------------------------------------------------

impl Display for Template {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Template {
    ///
    /// Parse a template from its string form, validating every expression.
    ///
    pub fn parse(s: &str) -> TemplateResult<Self> {
        let mut parts = Vec::new();
        let mut variables: Vec<String> = Vec::new();
        let mut rest = s;
        while let Some(open) = rest.find('{') {
            let (literal, after) = rest.split_at(open);
            if !literal.is_empty() {
                check_literal(literal, s)?;
                parts.push(Part::Literal(literal.to_string()));
            }
            let close = after
                .find('}')
                .ok_or_else(|| TemplateError::from(ErrorKind::Syntax(s.to_string())))?;
            let expression = parse_expression(&after[1..close])?;
            for spec in expression.varspecs() {
                if !variables.iter().any(|name| name == spec.name()) {
                    variables.push(spec.name().to_string());
                }
            }
            parts.push(Part::Expression(expression));
            rest = &after[close + 1..];
        }
        if !rest.is_empty() {
            check_literal(rest, s)?;
            parts.push(Part::Literal(rest.to_string()));
        }
        Ok(Self {
            source: s.to_string(),
            parts,
            variables,
        })
    }

    ///
    /// Return the ordered, de-duplicated variable names mentioned by the
    /// template's expressions.
    ///
    pub fn variable_names(&self) -> &[String] {
        &self.variables
    }

    /// Return the original template string.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn parts(&self) -> &[Part] {
        &self.parts
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn check_literal(literal: &str, template: &str) -> TemplateResult<()> {
    // A closing brace outside an expression is unbalanced; control bytes
    // are never template text.
    if literal.contains('}') || literal.chars().any(|c| c.is_ascii_control()) {
        Err(ErrorKind::Syntax(template.to_string()).into())
    } else {
        Ok(())
    }
}

fn parse_expression(src: &str) -> TemplateResult<Expression> {
    if src.is_empty() {
        return Err(ErrorKind::ExpressionSyntax(src.to_string()).into());
    }
    let mut chars = src.chars();
    let (operator, specs) = match chars.next().and_then(Operator::from_prefix) {
        Some(operator) => (operator, chars.as_str()),
        None => {
            // Operator characters reserved for future revisions.
            if src.starts_with(['=', ',', '!', '@', '|']) {
                return Err(ErrorKind::ExpressionSyntax(src.to_string()).into());
            }
            (Operator::Simple, src)
        }
    };
    let varspecs = specs
        .split(',')
        .map(parse_varspec)
        .collect::<TemplateResult<Vec<VarSpec>>>()?;
    Ok(Expression { operator, varspecs })
}

fn parse_varspec(spec: &str) -> TemplateResult<VarSpec> {
    if spec.contains(':') && spec.contains('*') {
        return Err(ErrorKind::PrefixAndExplode(spec.to_string()).into());
    }
    let (name, modifier) = if let Some((name, length)) = spec.split_once(':') {
        (name, Modifier::Prefix(parse_prefix_length(spec, length)?))
    } else if let Some(name) = spec.strip_suffix('*') {
        (name, Modifier::Explode)
    } else {
        (spec, Modifier::None)
    };
    check_varname(name)?;
    Ok(VarSpec {
        name: name.to_string(),
        modifier,
    })
}

fn parse_prefix_length(spec: &str, length: &str) -> TemplateResult<u16> {
    // max-length = %x31-39 0*3DIGIT
    if length.is_empty()
        || length.len() > 4
        || length.starts_with('0')
        || !length.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ErrorKind::ExpressionSyntax(spec.to_string()).into());
    }
    length
        .parse()
        .map_err(|_| ErrorKind::ExpressionSyntax(spec.to_string()).into())
}

fn check_varname(name: &str) -> TemplateResult<()> {
    // varname = varchar *( ["."] varchar )
    // varchar = ALPHA / DIGIT / "_" / pct-encoded
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && !name.ends_with('.')
        && !name.contains("..")
        && {
            let mut index = 0;
            let bytes = name.as_bytes();
            loop {
                if index >= bytes.len() {
                    break true;
                }
                let b = bytes[index];
                if b.is_ascii_alphanumeric() || b == b'_' || b == b'.' {
                    index += 1;
                } else if b == b'%' && pct::has_valid_triplet(name, index) {
                    index += 3;
                } else {
                    break false;
                }
            }
        };
    if valid {
        Ok(())
    } else {
        Err(ErrorKind::ExpressionSyntax(name.to_string()).into())
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_selection() {
        let template = Template::parse("{a}{+b}{#c}{.d}{/e}{;f}{?g}{&h}").unwrap();
        let operators = template
            .parts()
            .iter()
            .filter_map(|part| match part {
                Part::Expression(e) => Some(e.operator()),
                Part::Literal(_) => None,
            })
            .collect::<Vec<Operator>>();
        assert_eq!(
            operators,
            vec![
                Operator::Simple,
                Operator::Reserved,
                Operator::Fragment,
                Operator::Label,
                Operator::PathSegment,
                Operator::PathParameter,
                Operator::Query,
                Operator::QueryContinuation,
            ]
        );
    }

    #[test]
    fn test_modifiers() {
        let template = Template::parse("{a,b:9999,c*}").unwrap();
        match &template.parts()[0] {
            Part::Expression(e) => {
                assert_eq!(e.varspecs()[0].modifier(), Modifier::None);
                assert_eq!(e.varspecs()[1].modifier(), Modifier::Prefix(9999));
                assert_eq!(e.varspecs()[2].modifier(), Modifier::Explode);
            }
            Part::Literal(_) => panic!("expected an expression"),
        }
    }

    #[test]
    fn test_rejects_malformed_expressions() {
        assert!(Template::parse("{}").is_err());
        assert!(Template::parse("{a").is_err());
        assert!(Template::parse("a}b{c}").is_err());
        assert!(Template::parse("{=a}").is_err());
        assert!(Template::parse("{|a}").is_err());
        assert!(Template::parse("{a,}").is_err());
        assert!(Template::parse("{.a.}").is_err());
        assert!(Template::parse("{a:0}").is_err());
        assert!(Template::parse("{a:10000}").is_err());
        assert!(Template::parse("{a:}").is_err());
        assert!(Template::parse("{a%2}").is_err());
    }

    #[test]
    fn test_rejects_prefix_with_explode() {
        assert!(Template::parse("{a*:3}").is_err());
        assert!(Template::parse("{a:3*}").is_err());
    }

    #[test]
    fn test_variable_names_deduplicated() {
        let template = Template::parse("{x,y}{x}{?z,x}").unwrap();
        assert_eq!(
            template.variable_names(),
            &["x".to_string(), "y".to_string(), "z".to_string()]
        );
    }
}
