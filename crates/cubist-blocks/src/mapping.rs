use std::fs;
use std::path::Path;

use cubist_geom::Direction;
use hashbrown::{HashMap, HashSet};
use thiserror::Error;

use crate::config::{FacesDef, MappingConfig};
use crate::types::BlockType;

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("failed to read block mapping: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse block mapping: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown block type `{0}`")]
    UnknownBlock(String),
    #[error("block type `{0}` is mapped more than once")]
    DuplicateBlock(String),
}

/// Texture-array layer per face direction, indexed by [`Direction::index`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaterialIndexMapping {
    layers: [u32; Direction::COUNT],
}

impl MaterialIndexMapping {
    #[inline]
    pub const fn new(
        forward: u32,
        backward: u32,
        left: u32,
        right: u32,
        up: u32,
        down: u32,
    ) -> Self {
        Self {
            layers: [forward, backward, left, right, up, down],
        }
    }

    #[inline]
    pub const fn uniform(layer: u32) -> Self {
        Self {
            layers: [layer; Direction::COUNT],
        }
    }

    /// Same layer on the four sides, separate top and bottom.
    #[inline]
    pub const fn column(side: u32, top: u32, bottom: u32) -> Self {
        Self::new(side, side, side, side, top, bottom)
    }

    #[inline]
    pub fn get(&self, dir: Direction) -> u32 {
        self.layers[dir.index()]
    }

    #[inline]
    pub fn forward(&self) -> u32 {
        self.get(Direction::Forward)
    }

    #[inline]
    pub fn backward(&self) -> u32 {
        self.get(Direction::Backward)
    }

    #[inline]
    pub fn left(&self) -> u32 {
        self.get(Direction::Left)
    }

    #[inline]
    pub fn right(&self) -> u32 {
        self.get(Direction::Right)
    }

    #[inline]
    pub fn up(&self) -> u32 {
        self.get(Direction::Up)
    }

    #[inline]
    pub fn down(&self) -> u32 {
        self.get(Direction::Down)
    }

    // explicit direction > top/bottom/side > all > 0
    fn from_def(def: &FacesDef) -> Self {
        let base = def.all.unwrap_or(0);
        let side = def.side.unwrap_or(base);
        Self::new(
            def.forward.unwrap_or(side),
            def.backward.unwrap_or(side),
            def.left.unwrap_or(side),
            def.right.unwrap_or(side),
            def.top.unwrap_or(base),
            def.bottom.unwrap_or(base),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockDefinition {
    pub name: String,
    pub materials: MaterialIndexMapping,
}

impl BlockDefinition {
    pub fn new(name: impl Into<String>, materials: MaterialIndexMapping) -> Self {
        Self {
            name: name.into(),
            materials,
        }
    }
}

/// Read-only table from block type to its face materials.
///
/// Build it once before meshing and share it (`Arc<BlockMapping>`); nothing
/// mutates it through a shared reference.
#[derive(Clone, Debug, Default)]
pub struct BlockMapping {
    defs: HashMap<BlockType, BlockDefinition>,
}

impl BlockMapping {
    pub fn new() -> Self {
        Self {
            defs: HashMap::new(),
        }
    }

    /// Default texture-array layout for every solid block type. Layer 0 is the fallback.
    pub fn builtin() -> Self {
        use MaterialIndexMapping as M;
        let def = BlockDefinition::new;
        Self::new()
            .with(BlockType::Stone, def("Stone", M::uniform(1)))
            .with(BlockType::Dirt, def("Dirt", M::uniform(2)))
            .with(BlockType::Grass, def("Grass", M::column(4, 3, 2)))
            .with(BlockType::Gravel, def("Gravel", M::uniform(5)))
            .with(BlockType::Wood, def("Wood", M::column(6, 7, 7)))
            .with(BlockType::Planks, def("Planks", M::uniform(8)))
            .with(BlockType::Cobblestone, def("Cobblestone", M::uniform(9)))
            .with(BlockType::Sand, def("Sand", M::uniform(10)))
            .with(BlockType::Leaves, def("Leaves", M::uniform(11)))
            .with(BlockType::Bedrock, def("Bedrock", M::uniform(12)))
    }

    /// Builder-style insert used while assembling the table.
    pub fn with(mut self, ty: BlockType, def: BlockDefinition) -> Self {
        self.defs.insert(ty, def);
        self
    }

    #[inline]
    pub fn get(&self, ty: BlockType) -> Option<&BlockDefinition> {
        self.defs.get(&ty)
    }

    /// Face materials for `ty`; unmapped types fall back to layer 0 on every face.
    #[inline]
    pub fn materials_for(&self, ty: BlockType) -> MaterialIndexMapping {
        self.defs
            .get(&ty)
            .map(|d| d.materials)
            .unwrap_or_default()
    }

    #[inline]
    pub fn contains(&self, ty: BlockType) -> bool {
        self.defs.contains_key(&ty)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn from_config(cfg: MappingConfig) -> Result<Self, MappingError> {
        let mut mapping = BlockMapping::new();
        let mut seen = HashSet::new();
        for (key, def) in cfg.blocks {
            let ty: BlockType = key.parse()?;
            // keys are case-insensitive, so `Stone` and `stone` name the same entry
            if !seen.insert(ty) {
                return Err(MappingError::DuplicateBlock(ty.name().to_string()));
            }
            if ty == BlockType::Empty {
                log::warn!("block mapping entry for `{}` ignored: empty blocks emit no faces", key);
                continue;
            }
            let name = def.name.clone().unwrap_or_else(|| key.clone());
            let materials = MaterialIndexMapping::from_def(&def);
            mapping = mapping.with(ty, BlockDefinition::new(name, materials));
        }
        log::debug!("loaded block mapping with {} entries", mapping.len());
        Ok(mapping)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, MappingError> {
        let cfg: MappingConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MappingError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

impl FromIterator<(BlockType, BlockDefinition)> for BlockMapping {
    fn from_iter<I: IntoIterator<Item = (BlockType, BlockDefinition)>>(iter: I) -> Self {
        Self {
            defs: iter.into_iter().collect(),
        }
    }
}
