//! Configuration types deserialized from `mfpga.toml`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The top-level configuration.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// The benchmark case to load.
    pub case: CaseConfig,
    /// Where reports are written.
    #[serde(default)]
    pub output: OutputConfig,
}

/// One benchmark case: a directory plus the names of its four input files.
#[derive(Debug, Deserialize)]
pub struct CaseConfig {
    /// Display name, e.g. `case03`.
    pub name: String,
    /// Directory holding the input files, relative to the config file.
    pub dir: String,
    /// FPGA I/O budget file.
    #[serde(default = "default_info")]
    pub info: String,
    /// Node-to-FPGA mapping file.
    #[serde(default = "default_mapping")]
    pub mapping: String,
    /// Netlist file.
    #[serde(default = "default_net")]
    pub net: String,
    /// Channel-capacity topology file.
    #[serde(default = "default_topo")]
    pub topo: String,
}

/// Report destinations.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Directory for all reports, relative to the config file.
    #[serde(default = "default_output_dir")]
    pub dir: String,
    /// Visualization JSON file name.
    #[serde(default = "default_visualization")]
    pub visualization: String,
    /// Net group report file name.
    #[serde(default = "default_net_groups")]
    pub net_groups: String,
    /// Consolidated net group report file name.
    #[serde(default = "default_consolidated")]
    pub consolidated_groups: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            visualization: default_visualization(),
            net_groups: default_net_groups(),
            consolidated_groups: default_consolidated(),
        }
    }
}

/// The four input paths of a case, in load order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasePaths {
    /// FPGA I/O budget file.
    pub info: PathBuf,
    /// Node-to-FPGA mapping file.
    pub mapping: PathBuf,
    /// Netlist file.
    pub net: PathBuf,
    /// Topology file.
    pub topo: PathBuf,
}

impl CasePaths {
    /// Paths for a case directory using the standard benchmark file names.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            info: dir.join(default_info()),
            mapping: dir.join(default_mapping()),
            net: dir.join(default_net()),
            topo: dir.join(default_topo()),
        }
    }
}

impl CaseConfig {
    /// Resolves the four input paths against the directory holding the config.
    pub fn paths(&self, base: &Path) -> CasePaths {
        let dir = base.join(&self.dir);
        CasePaths {
            info: dir.join(&self.info),
            mapping: dir.join(&self.mapping),
            net: dir.join(&self.net),
            topo: dir.join(&self.topo),
        }
    }
}

impl OutputConfig {
    /// Path of the visualization JSON.
    pub fn visualization_path(&self, base: &Path) -> PathBuf {
        base.join(&self.dir).join(&self.visualization)
    }

    /// Path of the net group report.
    pub fn net_groups_path(&self, base: &Path) -> PathBuf {
        base.join(&self.dir).join(&self.net_groups)
    }

    /// Path of the consolidated group report.
    pub fn consolidated_groups_path(&self, base: &Path) -> PathBuf {
        base.join(&self.dir).join(&self.consolidated_groups)
    }
}

fn default_info() -> String {
    "design.info".to_string()
}

fn default_mapping() -> String {
    "design.fpga.out".to_string()
}

fn default_net() -> String {
    "design.net".to_string()
}

fn default_topo() -> String {
    "design.topo".to_string()
}

fn default_output_dir() -> String {
    "scripts".to_string()
}

fn default_visualization() -> String {
    "visualization_data.json".to_string()
}

fn default_net_groups() -> String {
    "net_groups.txt".to_string()
}

fn default_consolidated() -> String {
    "consolidated_net_groups.txt".to_string()
}
