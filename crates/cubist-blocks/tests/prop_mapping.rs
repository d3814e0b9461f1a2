use cubist_blocks::{BlockMapping, BlockType, MappingError, MaterialIndexMapping};
use cubist_geom::Direction;
use proptest::prelude::*;

#[test]
fn builtin_covers_every_solid_type() {
    let mapping = BlockMapping::builtin();
    for ty in BlockType::ALL {
        assert_eq!(mapping.contains(ty), ty.is_solid(), "{ty}");
    }
    let grass = mapping.materials_for(BlockType::Grass);
    assert_ne!(grass.up(), grass.forward());
    assert_ne!(grass.down(), grass.up());
}

#[test]
fn shipped_mapping_matches_builtin() {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let mapping = BlockMapping::from_path(root.join("../../assets/blocks.toml")).unwrap();
    let builtin = BlockMapping::builtin();
    assert_eq!(mapping.len(), builtin.len());
    for ty in BlockType::ALL {
        assert_eq!(mapping.materials_for(ty), builtin.materials_for(ty), "{ty}");
    }
    assert_eq!(mapping.get(BlockType::Wood).unwrap().name, "Oak Log");
}

#[test]
fn toml_mapping_resolves_selectors() {
    let mapping = BlockMapping::from_toml_str(
        r#"
        [blocks.grass]
        side = 4
        top = 3
        bottom = 2

        [blocks.stone]
        all = 1
        name = "Smooth Stone"

        [blocks.wood]
        all = 6
        top = 7
        forward = 12
        "#,
    )
    .expect("mapping");
    assert_eq!(mapping.len(), 3);
    assert_eq!(
        mapping.materials_for(BlockType::Grass),
        MaterialIndexMapping::column(4, 3, 2)
    );
    assert_eq!(mapping.get(BlockType::Stone).unwrap().name, "Smooth Stone");
    assert_eq!(mapping.get(BlockType::Grass).unwrap().name, "grass");
    let wood = mapping.materials_for(BlockType::Wood);
    assert_eq!(wood.forward(), 12);
    assert_eq!(wood.backward(), 6);
    assert_eq!(wood.up(), 7);
    assert_eq!(wood.down(), 6);
    // Unmapped types render with layer 0
    assert_eq!(mapping.materials_for(BlockType::Sand), MaterialIndexMapping::uniform(0));
}

#[test]
fn toml_mapping_rejects_unknown_block() {
    let err = BlockMapping::from_toml_str(
        r#"
        [blocks.obsidian]
        all = 3
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, MappingError::UnknownBlock(ref n) if n == "obsidian"));
}

#[test]
fn toml_mapping_rejects_case_variant_duplicates() {
    let toml = "[blocks.Stone]\nall = 1\n[blocks.stone]\nall = 2\n[blocks.STONE]\nall = 3";
    for _ in 0..16 {
        let err = BlockMapping::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, MappingError::DuplicateBlock(ref n) if n == "stone"));
    }
    let err = BlockMapping::from_toml_str("[blocks.Grass]\nall = 1\n[blocks.grass]\ntop = 2")
        .unwrap_err();
    assert!(matches!(err, MappingError::DuplicateBlock(_)));
}

#[test]
fn toml_mapping_skips_empty_entry() {
    let mapping = BlockMapping::from_toml_str(
        r#"
        [blocks.empty]
        all = 3
        "#,
    )
    .unwrap();
    assert!(mapping.is_empty());
}

#[test]
fn toml_mapping_reports_parse_error() {
    let err = BlockMapping::from_toml_str("[blocks.stone]\nall = \"one\"").unwrap_err();
    assert!(matches!(err, MappingError::Parse(_)));
}

#[test]
fn from_path_reports_missing_file() {
    let err = BlockMapping::from_path("/nonexistent/cubist/blocks.toml").unwrap_err();
    assert!(matches!(err, MappingError::Io(_)));
}

proptest! {
    // Every block type parses back from its name, case-insensitively
    #[test]
    fn block_type_name_roundtrip(i in 0usize..BlockType::ALL.len(), upper in any::<bool>()) {
        let ty = BlockType::ALL[i];
        let name = if upper { ty.name().to_ascii_uppercase() } else { ty.name().to_string() };
        prop_assert_eq!(name.parse::<BlockType>().unwrap(), ty);
    }

    // Uniform mappings return the same layer for every face
    #[test]
    fn uniform_mapping_is_uniform(layer in any::<u32>()) {
        let m = MaterialIndexMapping::uniform(layer);
        for d in Direction::ALL {
            prop_assert_eq!(m.get(d), layer);
        }
    }
}
