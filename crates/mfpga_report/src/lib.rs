//! Output writers for a loaded [`Design`](mfpga_design::Design).
//!
//! Everything here only reads the design through its public accessors:
//!
//! - [`visualization`] builds the JSON graph consumed by the plotting scripts
//! - [`groups`] writes the net-group and consolidated-group text reports
//! - [`stats`] prints a human-readable summary
//!
//! Writers take any [`std::io::Write`]; [`write_file`] wraps one around a
//! path and creates missing parent directories.

#![warn(missing_docs)]

pub mod error;
pub mod groups;
pub mod stats;
pub mod visualization;

#[cfg(test)]
mod testing;

pub use error::ReportError;
pub use groups::{
    write_consolidated_report, write_group_report, write_groups_json, GroupTotals,
};
pub use stats::write_stats;
pub use visualization::{LogicalLink, PhysicalLink, Visualization, VizNode};

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Creates `path` (and its parent directories) and hands a buffered writer
/// to `write`.
pub fn write_file<F>(path: &Path, write: F) -> Result<(), ReportError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), ReportError>,
{
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let mut out = BufWriter::new(fs::File::create(path).map_err(io_err)?);
    write(&mut out)?;
    out.flush().map_err(io_err)
}
