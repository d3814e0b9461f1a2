use std::path::PathBuf;

use clap::Parser;
use cubist_blocks::BlockType;
use cubist_geom::IVec3;

/// Headless voxel chunk mesher.
#[derive(Parser, Debug)]
#[command(name = "cubist")]
#[command(about = "Builds chunk meshes for a voxel world and reports mesh statistics")]
pub struct Args {
    /// World layout TOML (defaults apply when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Block mapping TOML (built-in mapping when omitted).
    #[arg(short, long)]
    pub blocks: Option<PathBuf>,

    /// Fill the whole world with one block type instead of layered terrain.
    #[arg(short, long)]
    pub fill: Option<BlockType>,

    /// Remove the block at x,y,z after the initial build (repeatable).
    #[arg(long = "remove", value_parser = parse_position)]
    pub remove: Vec<IVec3>,

    /// Place a block with x,y,z=block after the initial build (repeatable).
    #[arg(long = "place", value_parser = parse_placement)]
    pub place: Vec<(IVec3, BlockType)>,

    /// Log filter, e.g. `debug` or `perf=info,warn`; overrides RUST_LOG.
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse_position(s: &str) -> Result<IVec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z but got `{s}`"));
    };
    let coord = |v: &str| {
        v.parse::<i32>()
            .map_err(|e| format!("bad coordinate `{v}`: {e}"))
    };
    Ok(IVec3::new(coord(x)?, coord(y)?, coord(z)?))
}

pub fn parse_placement(s: &str) -> Result<(IVec3, BlockType), String> {
    let (pos, block) = s
        .split_once('=')
        .ok_or_else(|| format!("expected x,y,z=block but got `{s}`"))?;
    let ty: BlockType = block.parse().map_err(|e| format!("{e}"))?;
    Ok((parse_position(pos)?, ty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_parse_with_whitespace_and_negatives() {
        assert_eq!(parse_position("1, -2,3"), Ok(IVec3::new(1, -2, 3)));
        assert!(parse_position("1,2").is_err());
        assert!(parse_position("1,2,3,4").is_err());
        assert!(parse_position("a,2,3").is_err());
    }

    #[test]
    fn placements_parse_block_names() {
        assert_eq!(
            parse_placement("4,5,6=Planks"),
            Ok((IVec3::new(4, 5, 6), BlockType::Planks))
        );
        assert!(parse_placement("4,5,6").is_err());
        assert!(parse_placement("4,5,6=lava").is_err());
    }

    #[test]
    fn args_parse_repeated_flags() {
        let args = Args::try_parse_from([
            "cubist",
            "--fill",
            "dirt",
            "--remove",
            "0,0,0",
            "--remove",
            "1,1,1",
            "--place",
            "2,2,2=sand",
        ])
        .unwrap();
        assert_eq!(args.fill, Some(BlockType::Dirt));
        assert_eq!(args.remove.len(), 2);
        assert_eq!(args.place, vec![(IVec3::new(2, 2, 2), BlockType::Sand)]);
    }
}
