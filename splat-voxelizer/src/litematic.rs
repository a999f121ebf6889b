/// Litematica schematic writer.
///
/// A `.litematic` file is gzip-compressed NBT holding one or more regions.
/// Each region stores a block-state palette (slot 0 is air) and a long array
/// of tightly packed palette indices, ordered Y, then Z, then X.
use crate::bounds::VoxelBounds;
use crate::error::{PlacementError, Result, VoxelizerError};
use crate::labeling::LabeledVoxel;
use constants::schematic::{
    AIR_BLOCK, DEFAULT_AUTHOR, LITEMATIC_EXTENSION, LITEMATIC_SUBVERSION, LITEMATIC_VERSION,
    MIN_BITS_PER_ENTRY, MINECRAFT_DATA_VERSION, REGION_NAME,
};
use fastnbt::{LongArray, Value};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tempfile::NamedTempFile;

/// Root compound of a `.litematic` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LitematicFile {
    pub version: i32,
    pub sub_version: i32,
    pub minecraft_data_version: i32,
    pub metadata: Metadata,
    pub regions: HashMap<String, Region>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Metadata {
    pub name: String,
    pub author: String,
    pub description: String,
    pub region_count: i32,
    pub total_volume: i32,
    pub total_blocks: i32,
    pub time_created: i64,
    pub time_modified: i64,
    pub enclosing_size: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl From<(i32, i32, i32)> for Vec3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Region {
    pub position: Vec3,
    pub size: Vec3,
    pub block_state_palette: Vec<BlockState>,
    pub block_states: LongArray,
    pub tile_entities: Vec<Value>,
    pub entities: Vec<Value>,
    pub pending_block_ticks: Vec<Value>,
    pub pending_fluid_ticks: Vec<Value>,
}

impl Region {
    /// Look up the block stored at a local coordinate.
    pub fn block_at(&self, (x, y, z): (i32, i32, i32)) -> Option<&BlockState> {
        let (sx, sy, sz) = (self.size.x, self.size.y, self.size.z);
        if x < 0 || y < 0 || z < 0 || x >= sx || y >= sy || z >= sz {
            return None;
        }

        let bits = bits_per_entry(self.block_state_palette.len());
        let index = cell_index((x, y, z), (sx, sz));
        let slot = unpack_entry(&self.block_states, index, bits);
        self.block_state_palette.get(slot as usize)
    }
}

/// Palette entry: a namespaced block id with optional state properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockState {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(
        rename = "Properties",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub properties: Option<BTreeMap<String, String>>,
}

impl BlockState {
    pub fn air() -> Self {
        Self {
            name: AIR_BLOCK.to_string(),
            properties: None,
        }
    }

    /// Parse `namespace:path[key=value,...]`. A missing namespace means `minecraft`.
    pub fn parse(id: &str) -> std::result::Result<Self, PlacementError> {
        let invalid = || PlacementError::InvalidBlockId(id.to_string());

        let (name, properties) = match id.split_once('[') {
            Some((name, rest)) => {
                let body = rest.strip_suffix(']').ok_or_else(invalid)?;
                (name, Some(parse_properties(body).ok_or_else(invalid)?))
            }
            None => (id, None),
        };

        let (namespace, path) = name.split_once(':').unwrap_or(("minecraft", name));
        let namespace_ok = !namespace.is_empty()
            && namespace
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "_.-".contains(c));
        let path_ok = !path.is_empty()
            && path
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "_.-/".contains(c));
        if !namespace_ok || !path_ok {
            return Err(invalid());
        }

        Ok(Self {
            name: format!("{}:{}", namespace, path),
            properties,
        })
    }
}

fn parse_properties(body: &str) -> Option<BTreeMap<String, String>> {
    let valid = |s: &str| {
        !s.is_empty()
            && s
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    };

    let mut properties = BTreeMap::new();
    for pair in body.split(',') {
        let (key, value) = pair.split_once('=')?;
        let (key, value) = (key.trim(), value.trim());
        if !valid(key) || !valid(value) {
            return None;
        }
        properties.insert(key.to_string(), value.to_string());
    }
    Some(properties)
}

/// Outcome of writing one schematic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub path: PathBuf,
    pub size: (i32, i32, i32),
    pub placed: usize,
    pub failed: usize,
}

/// Builds and saves `.litematic` files for labelled voxel sets.
pub struct LitematicWriter {
    /// Directory receiving the schematic.
    output_dir: PathBuf,
    /// File stem and schematic name.
    output_name: String,
    author: String,
}

impl LitematicWriter {
    pub fn new(output_dir: &Path, output_name: &str) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            output_name: output_name.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.output_name, LITEMATIC_EXTENSION))
    }

    /// Assemble the schematic in memory.
    /// Returns None when there is nothing to place, plus the placement failure count.
    pub fn build(&self, voxels: &[LabeledVoxel]) -> Result<Option<(LitematicFile, usize)>> {
        let Some(bounds) = VoxelBounds::from_keys(voxels.iter().map(|v| v.key)) else {
            return Ok(None);
        };

        let volume = bounds.volume();
        if volume > i32::MAX as i64 {
            return Err(VoxelizerError::RegionTooLarge(volume));
        }
        // Every axis and local offset fits i32 once the volume does.
        let (sx, sy, sz) = bounds.size();
        let size = (sx as i32, sy as i32, sz as i32);
        info!("Region size: {}x{}x{}", size.0, size.1, size.2);

        let mut builder = RegionBuilder::new(size);
        let mut failed = 0;
        for voxel in voxels {
            let (x, y, z) = bounds.to_local(voxel.key);
            if let Err(err) = builder.set_block((x as i32, y as i32, z as i32), &voxel.block) {
                warn!("Skipping voxel at {:?}: {}", voxel.key, err);
                failed += 1;
            }
        }

        let total_blocks = builder.placed_blocks();
        let region = builder.finish();
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);

        let file = LitematicFile {
            version: LITEMATIC_VERSION,
            sub_version: LITEMATIC_SUBVERSION,
            minecraft_data_version: MINECRAFT_DATA_VERSION,
            metadata: Metadata {
                name: self.output_name.clone(),
                author: self.author.clone(),
                description: String::new(),
                region_count: 1,
                total_volume: volume as i32,
                total_blocks: total_blocks as i32,
                time_created: now,
                time_modified: now,
                enclosing_size: size.into(),
            },
            regions: HashMap::from([(REGION_NAME.to_string(), region)]),
        };

        Ok(Some((file, failed)))
    }

    /// Build and save the schematic. Nothing is written for an empty voxel set.
    /// Data goes to a temporary file in the output directory, which is
    /// persisted into place on success and removed on any failure.
    pub fn write(&self, voxels: &[LabeledVoxel]) -> Result<Option<WriteSummary>> {
        let Some((file, failed)) = self.build(voxels)? else {
            return Ok(None);
        };

        let bytes = fastnbt::to_bytes(&file)?;
        let path = self.output_path();

        fs::create_dir_all(&self.output_dir)?;
        let tmp = NamedTempFile::new_in(&self.output_dir)?;
        {
            let mut encoder = GzEncoder::new(BufWriter::new(tmp.as_file()), Compression::default());
            encoder.write_all(&bytes)?;
            encoder.finish()?.flush()?;
        }
        tmp.persist(&path).map_err(|err| err.error)?;
        debug!("Wrote {} bytes of NBT to {}", bytes.len(), path.display());

        Ok(Some(WriteSummary {
            path,
            size: (
                file.metadata.enclosing_size.x,
                file.metadata.enclosing_size.y,
                file.metadata.enclosing_size.z,
            ),
            placed: voxels.len() - failed,
            failed,
        }))
    }
}

/// Read a `.litematic` file back into memory.
pub fn read_litematic(path: &Path) -> Result<LitematicFile> {
    let mut decoder = GzDecoder::new(BufReader::new(File::open(path)?));
    let mut bytes = Vec::new();
    decoder.read_to_end(&mut bytes)?;
    Ok(fastnbt::from_bytes(&bytes)?)
}

/// Collects placements for one region before packing.
struct RegionBuilder {
    size: (i32, i32, i32),
    palette: Vec<BlockState>,
    palette_slots: HashMap<String, u32>,
    cells: BTreeMap<usize, u32>,
}

impl RegionBuilder {
    fn new(size: (i32, i32, i32)) -> Self {
        Self {
            size,
            palette: vec![BlockState::air()],
            palette_slots: HashMap::from([(AIR_BLOCK.to_string(), 0)]),
            cells: BTreeMap::new(),
        }
    }

    fn set_block(
        &mut self,
        (x, y, z): (i32, i32, i32),
        block_id: &str,
    ) -> std::result::Result<(), PlacementError> {
        let (sx, sy, sz) = self.size;
        if x < 0 || y < 0 || z < 0 || x >= sx || y >= sy || z >= sz {
            return Err(PlacementError::OutOfRegion(x, y, z));
        }

        let slot = match self.palette_slots.get(block_id) {
            Some(&slot) => slot,
            None => {
                let state = BlockState::parse(block_id)?;
                let slot = self.palette.len() as u32;
                self.palette.push(state);
                self.palette_slots.insert(block_id.to_string(), slot);
                slot
            }
        };

        self.cells.insert(cell_index((x, y, z), (sx, sz)), slot);
        Ok(())
    }

    fn placed_blocks(&self) -> usize {
        self.cells.values().filter(|&&slot| slot != 0).count()
    }

    fn finish(self) -> Region {
        let (sx, sy, sz) = self.size;
        let volume = sx as usize * sy as usize * sz as usize;
        let bits = bits_per_entry(self.palette.len());
        let mut longs = vec![0u64; (volume * bits as usize).div_ceil(64)];

        for (&index, &slot) in &self.cells {
            pack_entry(&mut longs, index, bits, slot as u64);
        }

        Region {
            position: Vec3 { x: 0, y: 0, z: 0 },
            size: self.size.into(),
            block_state_palette: self.palette,
            block_states: LongArray::new(longs.into_iter().map(|l| l as i64).collect()),
            tile_entities: Vec::new(),
            entities: Vec::new(),
            pending_block_ticks: Vec::new(),
            pending_fluid_ticks: Vec::new(),
        }
    }
}

/// Bits needed per packed palette index.
pub fn bits_per_entry(palette_len: usize) -> u32 {
    let needed = usize::BITS - palette_len.saturating_sub(1).leading_zeros();
    needed.max(MIN_BITS_PER_ENTRY)
}

fn cell_index((x, y, z): (i32, i32, i32), (size_x, size_z): (i32, i32)) -> usize {
    (y as usize * size_z as usize + z as usize) * size_x as usize + x as usize
}

/// Write `value` into entry `index`, spilling into the next long when needed.
fn pack_entry(longs: &mut [u64], index: usize, bits: u32, value: u64) {
    let bit_start = index * bits as usize;
    let long_index = bit_start / 64;
    let offset = (bit_start % 64) as u32;

    longs[long_index] |= value << offset;
    if offset + bits > 64 {
        longs[long_index + 1] |= value >> (64 - offset);
    }
}

fn unpack_entry(longs: &[i64], index: usize, bits: u32) -> u64 {
    let bit_start = index * bits as usize;
    let long_index = bit_start / 64;
    let offset = (bit_start % 64) as u32;
    let mask = (1u64 << bits) - 1;

    let Some(&low) = longs.get(long_index) else {
        return 0;
    };
    let mut value = (low as u64) >> offset;
    if offset + bits > 64 {
        let high = longs.get(long_index + 1).copied().unwrap_or(0) as u64;
        value |= high << (64 - offset);
    }
    value & mask
}
