use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response envelope of the RPC API: `{ ok, msg?, ...data }`.
///
/// Keys other than `ok` and `msg` are kept as-is in `data` and written back
/// flat when serialized.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl Envelope {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            ok: true,
            msg: Some(msg.into()),
            data: Map::new(),
        }
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            msg: Some(msg.into()),
            data: Map::new(),
        }
    }

    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// The server's message, if it sent a non-empty one.
    pub fn message(&self) -> Option<&str> {
        self.msg.as_deref().filter(|m| !m.is_empty())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }
}
