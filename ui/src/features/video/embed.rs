//! Iframe `src` construction.

use std::fmt::{self, Display};

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Ordered `key=value` pairs, kept in insertion order.
///
/// Serialized as a JSON object (`{"start": 32}`). Scalar values are stored
/// through their `Display` form. A list of `[key, value]` pairs is accepted
/// too.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmbedParameters(Vec<(String, String)>);

impl EmbedParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        let key = key.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for EmbedParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = EmbedParameters::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

impl Serialize for EmbedParameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn scalar_to_string<E: de::Error>(key: &str, value: Value) -> Result<String, E> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(E::custom(format!(
            "value of `{key}` must be a string, number or boolean, got {other}"
        ))),
    }
}

struct EmbedParametersVisitor;

impl<'de> Visitor<'de> for EmbedParametersVisitor {
    type Value = EmbedParameters;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object of scalar values or a list of [key, value] pairs")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut params = EmbedParameters::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            let value = scalar_to_string(&key, value)?;
            params.insert(key, value);
        }
        Ok(params)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut params = EmbedParameters::new();
        while let Some((key, value)) = access.next_element::<(String, Value)>()? {
            let value = scalar_to_string(&key, value)?;
            params.insert(key, value);
        }
        Ok(params)
    }
}

impl<'de> Deserialize<'de> for EmbedParameters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EmbedParametersVisitor)
    }
}

/// Build the iframe URL: `autoplay=1`, then `enablejsapi=1` when requested,
/// then every extra parameter as `key=value`.
pub fn embed_src(src: &str, enablejsapi: bool, parameters: &EmbedParameters) -> String {
    let separator = if src.contains('?') { '&' } else { '?' };
    let mut url = format!("{src}{separator}autoplay=1");

    if enablejsapi {
        url.push_str("&enablejsapi=1");
    }

    for (key, value) in parameters.iter() {
        url.push('&');
        url.push_str(key);
        url.push('=');
        url.push_str(value);
    }

    url
}
