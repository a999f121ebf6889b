use splat_voxelizer::litematic::read_litematic;
use splat_voxelizer::palette::PaletteEntry;
use splat_voxelizer::{VoxelConverter, VoxelizerConfig, VoxelizerError};
use std::fs;
use std::path::{Path, PathBuf};

const RGB_HEADER: &str = "ply\nformat ascii 1.0\nelement vertex {count}\n\
property float x\nproperty float y\nproperty float z\n\
property uchar red\nproperty uchar green\nproperty uchar blue\n\
property float opacity\nend_header\n";

fn write_ply(dir: &Path, name: &str, rows: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut text = RGB_HEADER.replace("{count}", &rows.len().to_string());
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    fs::write(&path, text).unwrap();
    path
}

/// Binary little-endian splat file with harmonic colour and an unused scale property.
fn write_binary_splats(dir: &Path, name: &str, records: &[[f32; 8]]) -> PathBuf {
    let path = dir.join(name);
    let mut bytes = format!(
        "ply\nformat binary_little_endian 1.0\nelement vertex {}\n\
         property float x\nproperty float y\nproperty float z\n\
         property float f_dc_0\nproperty float f_dc_1\nproperty float f_dc_2\n\
         property float opacity\nproperty float scale_0\nend_header\n",
        records.len()
    )
    .into_bytes();
    for value in records.iter().flatten() {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    fs::write(&path, bytes).unwrap();
    path
}

fn config() -> VoxelizerConfig {
    VoxelizerConfig {
        scale_factor: 1.0,
        invert_y: false,
        mirror_x: false,
        density_threshold: 0.5,
        saturation_boost: 1.0,
        min_neighbors: 1,
        ..VoxelizerConfig::default()
    }
}

#[test]
fn converts_ply_to_litematic() {
    let dir = tempfile::tempdir().unwrap();
    let mut rows = Vec::new();
    for i in 0..3 {
        let offset = 0.1 * i as f64;
        rows.push(format!("{} 4.5 -2.5 8 10 15 3.0", 0.2 + offset));
        rows.push(format!("{} 4.5 -2.5 207 213 214 3.0", 1.2 + offset));
        rows.push(format!("{} 10.5 10.5 207 213 214 3.0", 10.2 + offset));
    }
    let input = write_ply(dir.path(), "scene.ply", &rows);

    let summary = VoxelConverter::new(&input, config())
        .with_author("integration")
        .convert()
        .unwrap();

    assert_eq!(summary.loaded_points, 9);
    assert_eq!(summary.pipeline.accumulated_voxels, 3);
    assert_eq!(summary.pipeline.removed_by_despeckle, 1);

    let written = summary.written.expect("schematic should be written");
    assert_eq!(written.path, dir.path().join("scene.litematic"));
    assert_eq!(written.size, (2, 1, 1));
    assert_eq!(written.placed, 2);
    assert_eq!(written.failed, 0);
    let mut entries: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    entries.sort();
    assert_eq!(entries, ["scene.litematic", "scene.ply"]);

    let file = read_litematic(&written.path).unwrap();
    assert_eq!(file.version, 6);
    assert_eq!(file.metadata.name, "scene");
    assert_eq!(file.metadata.author, "integration");
    assert_eq!(file.metadata.total_blocks, 2);

    let region = &file.regions["main"];
    assert_eq!(region.block_at((0, 0, 0)).unwrap().name, "minecraft:black_concrete");
    assert_eq!(region.block_at((1, 0, 0)).unwrap().name, "minecraft:white_concrete");
}

#[test]
fn converts_binary_harmonic_splats() {
    let dir = tempfile::tempdir().unwrap();
    let mut records = Vec::new();
    for i in 0..3 {
        let jitter = 0.1 * i as f32;
        // Strong red and blue coefficients decode past 255 on one channel.
        records.push([0.3 + jitter, 0.25, 0.5, 2.0, -2.0, -2.0, 3.0, -5.0]);
        records.push([1.3 + jitter, 0.25, 0.5, -2.0, -2.0, 2.0, 3.0, -5.0]);
    }
    let input = write_binary_splats(dir.path(), "splats.ply", &records);

    let config = VoxelizerConfig {
        mirror_x: true,
        palette: vec![
            PaletteEntry::new("minecraft:red_concrete", [255, 0, 0]),
            PaletteEntry::new("minecraft:blue_concrete", [0, 0, 255]),
        ],
        ..config()
    };
    let summary = VoxelConverter::new(&input, config).convert().unwrap();

    assert_eq!(summary.loaded_points, 6);
    assert_eq!(summary.skipped_records, 0);
    assert_eq!(summary.pipeline.accumulated_voxels, 2);
    assert_eq!(summary.pipeline.removed_by_despeckle, 0);

    let written = summary.written.unwrap();
    assert_eq!(written.size, (2, 1, 1));
    assert_eq!(written.placed, 2);

    // Mirrored x: the points near 1.5 land at -2 (local 0), those near 0.5 at -1.
    let region = &read_litematic(&written.path).unwrap().regions["main"];
    assert_eq!(region.block_at((0, 0, 0)).unwrap().name, "minecraft:blue_concrete");
    assert_eq!(region.block_at((1, 0, 0)).unwrap().name, "minecraft:red_concrete");
}

#[test]
fn nothing_to_save_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let rows = vec!["0.5 0.5 0.5 255 0 0 -20.0".to_string()];
    let input = write_ply(dir.path(), "faint.ply", &rows);

    let summary = VoxelConverter::new(&input, config()).convert().unwrap();
    assert!(summary.written.is_none());
    assert_eq!(summary.pipeline.discarded_points, 1);
    assert!(!dir.path().join("faint.litematic").exists());
}

#[test]
fn invalid_palette_block_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut rows = Vec::new();
    for x in 0..2 {
        for _ in 0..3 {
            rows.push(format!("{}.5 0.5 0.5 255 0 0 3.0", x));
        }
    }
    let input = write_ply(dir.path(), "bad.ply", &rows);
    let config = VoxelizerConfig {
        palette: vec![PaletteEntry::new("Not A Block", [255, 0, 0])],
        ..config()
    };

    let out_dir = dir.path().join("out");
    let summary = VoxelConverter::new(&input, config)
        .with_output_dir(&out_dir)
        .with_output_name("broken")
        .convert()
        .unwrap();

    let written = summary.written.unwrap();
    assert_eq!(written.placed, 0);
    assert_eq!(written.failed, 2);
    assert!(out_dir.join("broken.litematic").exists());
}

#[test]
fn missing_position_fields_abort_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flat.ply");
    fs::write(
        &input,
        "ply\nformat ascii 1.0\nelement vertex 1\n\
         property float x\nproperty float y\n\
         property uchar red\nproperty uchar green\nproperty uchar blue\n\
         property float opacity\nend_header\n\
         0 0 1 2 3 0\n",
    )
    .unwrap();

    let err = VoxelConverter::new(&input, config()).convert().unwrap_err();
    assert!(matches!(err, VoxelizerError::MissingField { .. }));
    assert!(!dir.path().join("flat.litematic").exists());
}
