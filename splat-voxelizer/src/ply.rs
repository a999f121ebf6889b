/// Gaussian splat PLY loading.
use crate::error::{Result, VoxelizerError};
use crate::point::{RawColour, RawPoint};
use log::{debug, info, warn};
use ply_rs::parser::Parser;
use ply_rs::ply::{ElementDef, Property, PropertyAccess};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const VERTEX_ELEMENT: &str = "vertex";
const POSITION_FIELDS: [&str; 3] = ["x", "y", "z"];
const RGB_FIELDS: [&str; 3] = ["red", "green", "blue"];
const HARMONIC_FIELDS: [&str; 3] = ["f_dc_0", "f_dc_1", "f_dc_2"];
const OPACITY_FIELD: &str = "opacity";

/// Which colour encoding the file carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourMode {
    Rgb,
    Harmonic,
}

/// The vertex properties the loader cares about.
/// Each slot holds a finite scalar, or None when the property was absent,
/// list-valued or non-finite. Other properties are dropped while parsing.
#[derive(Debug, Clone, Default)]
struct VertexRecord {
    position: [Option<f64>; 3],
    rgb: [Option<f64>; 3],
    harmonic: [Option<f64>; 3],
    opacity: Option<f64>,
}

impl PropertyAccess for VertexRecord {
    fn new() -> Self {
        Self::default()
    }

    fn set_property(&mut self, name: String, property: Property) {
        let slot = match name.as_str() {
            "x" => &mut self.position[0],
            "y" => &mut self.position[1],
            "z" => &mut self.position[2],
            "red" => &mut self.rgb[0],
            "green" => &mut self.rgb[1],
            "blue" => &mut self.rgb[2],
            "f_dc_0" => &mut self.harmonic[0],
            "f_dc_1" => &mut self.harmonic[1],
            "f_dc_2" => &mut self.harmonic[2],
            OPACITY_FIELD => &mut self.opacity,
            _ => return,
        };
        *slot = scalar(property);
    }
}

impl VertexRecord {
    fn colour(&self, colour_mode: ColourMode) -> &[Option<f64>; 3] {
        match colour_mode {
            ColourMode::Rgb => &self.rgb,
            ColourMode::Harmonic => &self.harmonic,
        }
    }
}

/// Vertices read from a PLY file.
#[derive(Debug)]
pub struct LoadedCloud {
    pub points: Vec<RawPoint>,
    pub colour_mode: ColourMode,
    /// Records dropped because a required value was missing, a list or non-finite.
    pub skipped_records: usize,
}

/// Open and parse a PLY file from disk.
/// Handles both ASCII and binary encodings.
pub fn load_ply(file_path: &Path) -> Result<LoadedCloud> {
    if !file_path.exists() {
        return Err(VoxelizerError::InputNotFound(file_path.to_path_buf()));
    }

    let file = File::open(file_path)?;
    let mut buf_reader = BufReader::new(file);
    info!("Loading PLY file {}", file_path.display());
    read_ply(&mut buf_reader)
}

/// Parse PLY data from any reader.
pub fn read_ply<R: Read>(source: &mut R) -> Result<LoadedCloud> {
    let parser = Parser::<VertexRecord>::new();
    let ply = parser.read_ply(source)?;

    let vertex_def = ply
        .header
        .elements
        .get(VERTEX_ELEMENT)
        .ok_or_else(|| VoxelizerError::MissingElement(VERTEX_ELEMENT.to_string()))?;

    require_fields(vertex_def, &POSITION_FIELDS)?;
    let colour_mode = detect_colour_mode(vertex_def)?;
    require_fields(vertex_def, &[OPACITY_FIELD])?;

    debug!(
        "PLY header: {} vertices declared, {} properties",
        vertex_def.count,
        vertex_def.properties.len()
    );

    let records = ply
        .payload
        .get(VERTEX_ELEMENT)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let mut points = Vec::with_capacity(records.len());
    let mut skipped_records = 0;
    for record in records {
        match read_vertex(record, colour_mode) {
            Some(point) => points.push(point),
            None => skipped_records += 1,
        }
    }

    if skipped_records > 0 {
        warn!("Skipped {} malformed vertex records", skipped_records);
    }
    info!(
        "Loaded {} vertices ({:?} colour)",
        points.len(),
        colour_mode
    );

    Ok(LoadedCloud {
        points,
        colour_mode,
        skipped_records,
    })
}

fn require_fields(element: &ElementDef, fields: &[&str]) -> Result<()> {
    for field in fields {
        if !element.properties.contains_key(*field) {
            return Err(VoxelizerError::MissingField {
                element: element.name.clone(),
                property: field.to_string(),
            });
        }
    }
    Ok(())
}

/// Direct RGB wins when present; harmonic coefficients are the fallback.
fn detect_colour_mode(element: &ElementDef) -> Result<ColourMode> {
    let has_all = |fields: [&str; 3]| fields.iter().all(|f| element.properties.contains_key(*f));

    if has_all(RGB_FIELDS) {
        Ok(ColourMode::Rgb)
    } else if has_all(HARMONIC_FIELDS) {
        Ok(ColourMode::Harmonic)
    } else {
        Err(VoxelizerError::MissingColour)
    }
}

fn read_vertex(record: &VertexRecord, colour_mode: ColourMode) -> Option<RawPoint> {
    let position = read_triple(&record.position)?;
    let channels = read_triple(record.colour(colour_mode))?;
    let opacity_logit = record.opacity?;

    let colour = match colour_mode {
        ColourMode::Rgb => RawColour::Rgb(channels),
        ColourMode::Harmonic => RawColour::Harmonic(channels),
    };

    Some(RawPoint {
        position,
        colour,
        opacity_logit,
    })
}

fn read_triple(values: &[Option<f64>; 3]) -> Option<[f64; 3]> {
    Some([values[0]?, values[1]?, values[2]?])
}

/// Convert a scalar property to a finite f64. Lists yield None.
fn scalar(property: Property) -> Option<f64> {
    let value = match property {
        Property::Char(v) => v as f64,
        Property::UChar(v) => v as f64,
        Property::Short(v) => v as f64,
        Property::UShort(v) => v as f64,
        Property::Int(v) => v as f64,
        Property::UInt(v) => v as f64,
        Property::Float(v) => v as f64,
        Property::Double(v) => v,
        _ => return None,
    };
    value.is_finite().then_some(value)
}
