use serde::Deserialize;

/// Row of the nodes file: `id, longitude, latitude`
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawNode {
    pub id: String,
    pub lon: String,
    pub lat: String,
}

/// Row of the edges file: `id, source, target, length, name, label`
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub length: String,
    pub name: String,
    pub label: String,
}
