//! Runtime values and the external data mapping.

use mrxl_types::Number;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A runtime MrXL value: a scalar number or an array of numbers.
///
/// The untagged representation keeps external data files plain JSON,
/// e.g. `{"avec": [1, 2, 3], "n": 7}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(Number),
    Array(Vec<Number>),
}

impl Value {
    /// A short kind name for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Array(_) => "array",
        }
    }
}

/// Named input and output data, keyed by declaration name.
///
/// `BTreeMap` keeps serialized output in sorted key order.
pub type DataMap = BTreeMap<String, Value>;
