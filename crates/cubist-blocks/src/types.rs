use std::fmt;
use std::str::FromStr;

use cubist_geom::IVec3;

use crate::mapping::MappingError;

/// Kind of a single grid cell. `Empty` is the only non-solid type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BlockType {
    #[default]
    Empty = 0,
    Stone = 1,
    Dirt = 2,
    Grass = 3,
    Gravel = 4,
    Wood = 5,
    Planks = 6,
    Cobblestone = 7,
    Sand = 8,
    Leaves = 9,
    Bedrock = 10,
}

impl BlockType {
    pub const ALL: [BlockType; 11] = [
        BlockType::Empty,
        BlockType::Stone,
        BlockType::Dirt,
        BlockType::Grass,
        BlockType::Gravel,
        BlockType::Wood,
        BlockType::Planks,
        BlockType::Cobblestone,
        BlockType::Sand,
        BlockType::Leaves,
        BlockType::Bedrock,
    ];

    #[inline]
    pub fn is_solid(self) -> bool {
        self != BlockType::Empty
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockType::Empty => "empty",
            BlockType::Stone => "stone",
            BlockType::Dirt => "dirt",
            BlockType::Grass => "grass",
            BlockType::Gravel => "gravel",
            BlockType::Wood => "wood",
            BlockType::Planks => "planks",
            BlockType::Cobblestone => "cobblestone",
            BlockType::Sand => "sand",
            BlockType::Leaves => "leaves",
            BlockType::Bedrock => "bedrock",
        }
    }

    pub fn from_name(name: &str) -> Option<BlockType> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockType {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        BlockType::from_name(&key).ok_or_else(|| MappingError::UnknownBlock(s.to_string()))
    }
}

/// One grid cell: its chunk-local position and its type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Block {
    pub position: IVec3,
    pub block_type: BlockType,
}

impl Block {
    #[inline]
    pub const fn new(position: IVec3, block_type: BlockType) -> Self {
        Self {
            position,
            block_type,
        }
    }

    #[inline]
    pub const fn empty_at(position: IVec3) -> Self {
        Self::new(position, BlockType::Empty)
    }

    #[inline]
    pub fn is_solid(&self) -> bool {
        self.block_type.is_solid()
    }
}
