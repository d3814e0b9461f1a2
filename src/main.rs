use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use cubist_blocks::{BlockMapping, BlockType};
use cubist_geom::IVec3;
use cubist_world::{ChunkWorld, WorldConfig};

mod cli;

use cli::Args;

// Bedrock floor, stone body, three layers of dirt, grass cap at half height.
fn layered_terrain(height: usize) -> impl Fn(IVec3) -> BlockType + Sync {
    let surface = (height / 2) as i32;
    move |p| match p.y {
        0 => BlockType::Bedrock,
        y if y > surface => BlockType::Empty,
        y if y == surface => BlockType::Grass,
        y if y + 3 >= surface => BlockType::Dirt,
        _ => BlockType::Stone,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(filter) = &args.log_level {
        logger.parse_filters(filter);
    }
    logger.init();

    let config = match &args.config {
        Some(path) => {
            log::info!("loading world config from {}", path.display());
            WorldConfig::from_path(path)?
        }
        None => WorldConfig::default(),
    };
    let mapping = match &args.blocks {
        Some(path) => {
            log::info!("loading block mapping from {}", path.display());
            BlockMapping::from_path(path)?
        }
        None => BlockMapping::builtin(),
    };
    for ty in BlockType::ALL.into_iter().filter(|t| t.is_solid()) {
        if !mapping.contains(ty) {
            log::warn!("block `{}` has no mapping; its faces use layer 0", ty);
        }
    }

    let mut world = ChunkWorld::new(&config, Arc::new(mapping))?;
    world.initialize();
    match args.fill {
        Some(ty) => world.fill_all(ty),
        None => world.fill_with(layered_terrain(world.dims().height())),
    }
    let stats = world.build_all_meshes();
    log::info!(
        "meshed {} chunks: {} faces, {} vertices, {} indices ({} enclosed blocks culled)",
        stats.chunks,
        stats.faces,
        stats.vertices,
        stats.indices,
        stats.blocks_enclosed
    );

    for pos in &args.remove {
        let s = world.remove_block(*pos)?;
        log::info!(
            "removed ({}, {}, {}): chunk now has {} faces",
            pos.x,
            pos.y,
            pos.z,
            s.faces
        );
    }
    for (pos, ty) in &args.place {
        let s = world.set_block(*pos, *ty)?;
        log::info!(
            "placed {} at ({}, {}, {}): chunk now has {} faces",
            ty,
            pos.x,
            pos.y,
            pos.z,
            s.faces
        );
    }

    let (wx, wy, wz) = world.world_size();
    let total_faces: usize = world.chunks().iter().map(|c| c.mesh().quad_count()).sum();
    log::info!("world {}x{}x{} blocks, {} faces total", wx, wy, wz, total_faces);
    Ok(())
}
