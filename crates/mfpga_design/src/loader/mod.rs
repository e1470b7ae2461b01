//! The four format-specific loaders and their shared helpers.
//!
//! Each loader scans one buffered file with a [`Cursor`] and mutates the
//! [`Design`](crate::Design) in place. They are driven in order by
//! [`DesignBuilder`](crate::DesignBuilder); the functions here are not
//! public because calling them out of order would break the model's
//! cross-references.
//!
//! Lenient conditions are reported to the sink under these codes:
//!
//! | code | condition |
//! |------|-----------|
//! | [`FPGA_OUT_OF_RANGE`] | mapping line names an FPGA id outside `1..=N` |
//! | [`FPGA_UNDEFINED`] | mapping line names a slot the info file left empty |
//! | [`TOPO_ROW_OUT_OF_RANGE`] | topology row names an id outside `1..=N` |
//! | [`TOPO_ROW_DUPLICATE`] | topology row appears more than once |

pub(crate) mod info;
pub(crate) mod mapping;
pub(crate) mod net;
pub(crate) mod topo;

use crate::cursor::Cursor;
use crate::error::{InputKind, LoadError};
use mfpga_diagnostics::DiagnosticCode;

/// `W101`: a mapping line was skipped because its FPGA id is out of range.
pub const FPGA_OUT_OF_RANGE: DiagnosticCode = DiagnosticCode::new(101);
/// `W102`: a mapping line was skipped because its FPGA slot is empty.
pub const FPGA_UNDEFINED: DiagnosticCode = DiagnosticCode::new(102);
/// `W103`: a topology row was discarded because its id is out of range.
pub const TOPO_ROW_OUT_OF_RANGE: DiagnosticCode = DiagnosticCode::new(103);
/// `W104`: a topology row replaced an earlier row for the same FPGA.
pub const TOPO_ROW_DUPLICATE: DiagnosticCode = DiagnosticCode::new(104);

/// Fails if nothing was consumed since `start` and input remains.
///
/// The grammar tolerates missing prefixes and digits, so a stray character
/// at a token position would otherwise be re-read forever.
pub(crate) fn ensure_progress(
    cursor: &Cursor<'_>,
    start: usize,
    kind: InputKind,
    expected: &'static str,
) -> Result<(), LoadError> {
    match cursor.current_char() {
        Some(found) if cursor.offset() == start => Err(LoadError::Syntax {
            kind,
            found,
            expected,
            location: cursor.location(start),
        }),
        _ => Ok(()),
    }
}

/// Allocates `len` copies of `value`, failing instead of aborting when the
/// input asks for more memory than is available.
pub(crate) fn allocate<T: Clone>(
    kind: InputKind,
    table: &'static str,
    len: usize,
    value: T,
) -> Result<Vec<T>, LoadError> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| LoadError::Capacity {
            kind,
            table,
            count: len,
        })?;
    cells.resize(len, value);
    Ok(cells)
}

/// Whether `id` names a slot of a table with `count` entries.
pub(crate) fn in_range(id: u32, count: usize) -> bool {
    id >= 1 && (id as usize) <= count
}
