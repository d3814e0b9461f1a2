use std::collections::HashMap;

use serde::Deserialize;

// Top-level block mapping file
#[derive(Deserialize, Debug, Default)]
pub struct MappingConfig {
    #[serde(default)]
    pub blocks: HashMap<String, FacesDef>,
}

// Per-block face layers: all/top/bottom/side, each overridable per direction
#[derive(Deserialize, Debug, Clone, Default)]
pub struct FacesDef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub all: Option<u32>,
    #[serde(default)]
    pub top: Option<u32>,
    #[serde(default)]
    pub bottom: Option<u32>,
    #[serde(default)]
    pub side: Option<u32>,
    #[serde(default)]
    pub forward: Option<u32>,
    #[serde(default)]
    pub backward: Option<u32>,
    #[serde(default)]
    pub left: Option<u32>,
    #[serde(default)]
    pub right: Option<u32>,
}
