use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = "./config.json";
pub const DEFAULT_OUTPUT_DIR: &str = "./.output/";

const PROGRAM_FILE: &str = "ebpf_program.json";
const LAYOUT_FILE: &str = "event_layout.json";

/// Locations of the three input documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    /// Base build configuration.
    pub config: PathBuf,
    /// Generated program metadata (`maps` lives here).
    pub program: PathBuf,
    /// Ring/perf buffer export layout.
    pub layout: PathBuf,
}

impl InputPaths {
    /// Program metadata and layout are both generated into `output_dir`.
    pub fn from_locations(config: impl Into<PathBuf>, output_dir: impl AsRef<Path>) -> Self {
        let output_dir = output_dir.as_ref();
        Self {
            config: config.into(),
            program: output_dir.join(PROGRAM_FILE),
            layout: output_dir.join(LAYOUT_FILE),
        }
    }
}

impl Default for InputPaths {
    fn default() -> Self {
        Self::from_locations(DEFAULT_CONFIG, DEFAULT_OUTPUT_DIR)
    }
}
