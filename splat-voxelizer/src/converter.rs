/// Point cloud to Litematica converter orchestrating load, voxelize and write.
use crate::config::VoxelizerConfig;
use crate::error::{Result, VoxelizerError};
use crate::litematic::{LitematicWriter, WriteSummary};
use crate::pipeline::{PipelineStats, run_pipeline};
use crate::ply::load_ply;
use constants::schematic::DEFAULT_AUTHOR;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::path::{Path, PathBuf};

/// Converts one Gaussian splat PLY file into one `.litematic` schematic.
pub struct VoxelConverter {
    /// Source PLY file.
    input_path: PathBuf,
    /// Directory receiving the schematic.
    output_dir: PathBuf,
    /// Base name of the schematic file.
    output_name: String,
    author: String,
    config: VoxelizerConfig,
}

/// Counts reported at the end of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub loaded_points: usize,
    pub skipped_records: usize,
    pub pipeline: PipelineStats,
    /// None when no voxel survived and nothing was saved.
    pub written: Option<WriteSummary>,
}

impl VoxelConverter {
    /// Create a converter writing next to the input, named after its stem.
    pub fn new(input_path: &Path, config: VoxelizerConfig) -> Self {
        let output_dir = input_path
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf();
        let output_name = input_path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Self {
            input_path: input_path.to_path_buf(),
            output_dir,
            output_name,
            author: DEFAULT_AUTHOR.to_string(),
            config,
        }
    }

    pub fn with_output_dir(mut self, output_dir: &Path) -> Self {
        self.output_dir = output_dir.to_path_buf();
        self
    }

    pub fn with_output_name(mut self, output_name: &str) -> Self {
        self.output_name = output_name.to_string();
        self
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.writer().output_path()
    }

    fn writer(&self) -> LitematicWriter {
        LitematicWriter::new(&self.output_dir, &self.output_name).with_author(&self.author)
    }

    /// Run the full conversion. The output file is only opened once the
    /// voxel set is final.
    pub fn convert(&self) -> Result<ConversionSummary> {
        if !self.input_path.exists() {
            return Err(VoxelizerError::InputNotFound(self.input_path.clone()));
        }
        self.config.validate()?;

        info!(
            "Converting {} -> {}",
            self.input_path.display(),
            self.output_path().display()
        );

        let cloud = load_ply(&self.input_path)?;

        let pb = ProgressBar::new(cloud.points.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.green/blue}] {pos}/{len} points ({percent}%) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("▉▊▋▌▍▎▏ "),
        );

        let output = run_pipeline(&cloud.points, &self.config, &pb)?;

        info!("Exporting to {}", self.output_path().display());
        let written = self.writer().write(&output.voxels)?;
        match &written {
            Some(summary) => info!(
                "Saved {} blocks ({} failed) in a {}x{}x{} region",
                summary.placed, summary.failed, summary.size.0, summary.size.1, summary.size.2
            ),
            None => info!("No blocks to save"),
        }

        Ok(ConversionSummary {
            loaded_points: cloud.points.len(),
            skipped_records: cloud.skipped_records,
            pipeline: output.stats,
            written,
        })
    }
}
