use serde::Deserialize;

/// A field the api serves either as a number or as a string.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ScalarValue {
    Number(i64),
    Text(String),
}
