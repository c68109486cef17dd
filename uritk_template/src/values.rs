/*!
Provides the [`VariableBag`] container mapping template variable names to
normalized values.

Values are normalized as they are assigned: booleans become `"1"` or `"0"`,
numbers become their decimal string form, list members are flattened one
level, and a composite nested inside another composite is rejected. Absent
variables are simply never assigned.

# Example

```rust
use uritk_template::VariableBag;

let mut variables = VariableBag::default();
variables
    .assign("who", "fred").unwrap()
    .assign("count", 3).unwrap()
    .assign("admin", true).unwrap()
    .assign("list", vec!["red", "green", "blue"]).unwrap();

assert_eq!(variables.len(), 4);
assert!(variables.fetch("who").is_some());
assert!(variables.fetch("undef").is_none());
```
*/

use crate::error::{ErrorKind, Result as TemplateResult};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// An input value for a template variable, before normalization. Scalars
/// cover strings, booleans, and numbers; composites cover lists and
/// associative pair lists.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    List(Vec<Value>),
    Assoc(Vec<(String, Value)>),
}

///
/// The normalized form a [`VariableBag`] stores: a scalar string, an
/// ordered list of strings, or an ordered list of string pairs.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VariableValue {
    Scalar(String),
    List(Vec<String>),
    Assoc(Vec<(String, String)>),
}

///
/// An ordered, value-semantic container of normalized template variables.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariableBag {
    entries: Vec<(String, VariableValue)>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Self::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Self::List(v.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Self::List(v.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}

impl From<Vec<(&str, &str)>> for Value {
    fn from(v: Vec<(&str, &str)>) -> Self {
        Self::Assoc(
            v.into_iter()
                .map(|(k, v)| (k.to_string(), Value::from(v)))
                .collect(),
        )
    }
}

impl From<Vec<(String, String)>> for Value {
    fn from(v: Vec<(String, String)>) -> Self {
        Self::Assoc(v.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
    }
}

// ------------------------------------------------------------------------------------------------

impl VariableValue {
    ///
    /// Returns `true` for an empty list or empty pair list; a scalar is
    /// never empty in this sense, even when it is the empty string.
    ///
    pub fn is_empty_composite(&self) -> bool {
        match self {
            VariableValue::Scalar(_) => false,
            VariableValue::List(members) => members.is_empty(),
            VariableValue::Assoc(pairs) => pairs.is_empty(),
        }
    }
}

// ------------------------------------------------------------------------------------------------

impl VariableBag {
    ///
    /// Assign `value` to `name`, replacing any previous assignment, and
    /// normalizing on the way in. Fails when a composite value nests
    /// another composite.
    ///
    pub fn assign<V>(&mut self, name: &str, value: V) -> TemplateResult<&mut Self>
    where
        V: Into<Value>,
    {
        let normalized = normalize(name, value.into())?;
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = normalized,
            None => self.entries.push((name.to_string(), normalized)),
        }
        Ok(self)
    }

    ///
    /// Return the normalized value assigned to `name`, if any.
    ///
    pub fn fetch(&self, name: &str) -> Option<&VariableValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    ///
    /// Left-biased merge: keep every assignment of `self`, and add from
    /// `other` only the names `self` does not bind.
    ///
    pub fn replace(&self, other: &VariableBag) -> VariableBag {
        let mut merged = self.clone();
        for (name, value) in other.iter() {
            if merged.fetch(name).is_none() {
                merged.entries.push((name.clone(), value.clone()));
            }
        }
        merged
    }

    /// Iterate over the assignments in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, VariableValue)> {
        self.entries.iter()
    }

    /// Return the number of assignments held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no variable is assigned, else `false`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn normalize(name: &str, value: Value) -> TemplateResult<VariableValue> {
    Ok(match value {
        Value::List(members) => VariableValue::List(
            members
                .into_iter()
                .map(|member| scalarize(name, member))
                .collect::<TemplateResult<Vec<String>>>()?,
        ),
        Value::Assoc(pairs) => VariableValue::Assoc(
            pairs
                .into_iter()
                .map(|(key, value)| Ok((key, scalarize(name, value)?)))
                .collect::<TemplateResult<Vec<(String, String)>>>()?,
        ),
        scalar => VariableValue::Scalar(scalarize(name, scalar)?),
    })
}

fn scalarize(name: &str, value: Value) -> TemplateResult<String> {
    match value {
        Value::Str(s) => Ok(s),
        Value::Bool(b) => Ok(if b { "1" } else { "0" }.to_string()),
        Value::Int(i) => Ok(i.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        Value::List(_) | Value::Assoc(_) => {
            Err(ErrorKind::NestedSequence(name.to_string()).into())
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
    fn test_scalar_normalization() {
        let mut bag = VariableBag::default();
        bag.assign("s", "text")
            .unwrap()
            .assign("t", true)
            .unwrap()
            .assign("f", false)
            .unwrap()
            .assign("i", -42)
            .unwrap()
            .assign("d", 3.5)
            .unwrap();
        assert_eq!(bag.fetch("s"), Some(&VariableValue::Scalar("text".to_string())));
        assert_eq!(bag.fetch("t"), Some(&VariableValue::Scalar("1".to_string())));
        assert_eq!(bag.fetch("f"), Some(&VariableValue::Scalar("0".to_string())));
        assert_eq!(bag.fetch("i"), Some(&VariableValue::Scalar("-42".to_string())));
        assert_eq!(bag.fetch("d"), Some(&VariableValue::Scalar("3.5".to_string())));
    }

    #[test]
    fn test_list_members_normalized() {
        let mut bag = VariableBag::default();
        bag.assign("list", vec![Value::from("a"), Value::from(2), Value::from(true)])
            .unwrap();
        assert_eq!(
            bag.fetch("list"),
            Some(&VariableValue::List(vec![
                "a".to_string(),
                "2".to_string(),
                "1".to_string()
            ]))
        );
    }

    #[test]
    fn test_nested_sequence_rejected() {
        let mut bag = VariableBag::default();
        let nested = Value::List(vec![Value::List(vec![Value::from("x")])]);
        assert!(bag.assign("bad", nested).is_err());

        let nested = Value::Assoc(vec![("k".to_string(), Value::List(vec![]))]);
        assert!(bag.assign("bad", nested).is_err());
    }

    #[test]
    fn test_replace_is_left_biased() {
        let mut left = VariableBag::default();
        left.assign("a", "left").unwrap();
        let mut right = VariableBag::default();
        right
            .assign("a", "right")
            .unwrap()
            .assign("b", "right")
            .unwrap();

        let merged = left.replace(&right);
        assert_eq!(merged.fetch("a"), Some(&VariableValue::Scalar("left".to_string())));
        assert_eq!(merged.fetch("b"), Some(&VariableValue::Scalar("right".to_string())));
        assert_eq!(merged.len(), 2);
    }
}
