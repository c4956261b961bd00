//! Typed access to an already-deserialized request mapping.
//!
//! Request payloads arrive as `serde_json::Value` trees. `ParamMap` wraps one
//! JSON object and tracks its dotted path from the request root, so that every
//! missing or ill-typed key is reported with its full location, e.g.
//! `gp_historical_info.points_sampled[2].value_var`.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::{OlResult, ParameterError};

/// A borrowed JSON object plus its path from the request root.
#[derive(Debug, Clone)]
pub struct ParamMap<'a> {
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> ParamMap<'a> {
    /// Wrap the request root. It must be a JSON object.
    pub fn root(value: &'a Value) -> OlResult<Self> {
        Self::at(String::new(), value)
    }

    /// Wrap `value` found at `path`.
    pub fn at(path: impl Into<String>, value: &'a Value) -> OlResult<Self> {
        let path = path.into();
        match value.as_object() {
            Some(map) => Ok(Self { path, map }),
            None => Err(ParameterError::Invalid {
                key: if path.is_empty() { "<root>".to_string() } else { path },
                message: format!("expected a mapping, got {}", kind_of(value)),
            }
            .into()),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Full dotted path of `key` below this mapping.
    pub fn key_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.get(key).is_some_and(|v| !v.is_null())
    }

    /// Raw value under `key`; absent and `null` are both reported as missing.
    pub fn raw(&self, key: &str) -> OlResult<&'a Value> {
        match self.map.get(key) {
            Some(value) if !value.is_null() => Ok(value),
            _ => Err(ParameterError::Missing {
                key: self.key_path(key),
            }
            .into()),
        }
    }

    pub fn required<T: DeserializeOwned>(&self, key: &str) -> OlResult<T> {
        let value = self.raw(key)?;
        decode(&self.key_path(key), value)
    }

    /// Like [`ParamMap::required`], but absent or `null` yields `None`.
    pub fn optional<T: DeserializeOwned>(&self, key: &str) -> OlResult<Option<T>> {
        match self.map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => decode(&self.key_path(key), value).map(Some),
        }
    }

    /// Required nested mapping.
    pub fn child(&self, key: &str) -> OlResult<ParamMap<'a>> {
        let value = self.raw(key)?;
        ParamMap::at(self.key_path(key), value)
    }

    /// Required sequence of nested mappings, each tagged with its index.
    pub fn children(&self, key: &str) -> OlResult<Vec<ParamMap<'a>>> {
        let path = self.key_path(key);
        let items = self.raw(key)?.as_array().ok_or_else(|| ParameterError::Invalid {
            key: path.clone(),
            message: "expected a sequence".to_string(),
        })?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| ParamMap::at(format!("{path}[{i}]"), item))
            .collect()
    }

    /// Nested mappings of this object, in key order.
    pub fn entries(&self) -> OlResult<Vec<(&'a str, ParamMap<'a>)>> {
        self.map
            .iter()
            .map(|(key, value)| Ok((key.as_str(), ParamMap::at(self.key_path(key), value)?)))
            .collect()
    }

    pub fn as_map(&self) -> &'a Map<String, Value> {
        self.map
    }
}

fn decode<T: DeserializeOwned>(key: &str, value: &Value) -> OlResult<T> {
    T::deserialize(value).map_err(|e| {
        ParameterError::Invalid {
            key: key.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
