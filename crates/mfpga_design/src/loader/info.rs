//! `F<id> <max_io>` pairs: the FPGA table.

use super::{allocate, ensure_progress};
use crate::cursor::Cursor;
use crate::error::{InputKind, LoadError};
use crate::model::{Design, Fpga};
use mfpga_common::FpgaId;

/// Builds the dense FPGA table, sized to the largest id in the file.
///
/// Later pairs for the same id overwrite earlier ones. Id 0 has no slot and
/// is dropped.
pub(crate) fn load(design: &mut Design, cursor: &mut Cursor<'_>) -> Result<(), LoadError> {
    let mut pairs = Vec::new();
    let mut max_id = 0;

    loop {
        let start = cursor.token_start();
        if cursor.at_end() {
            break;
        }
        let id = cursor.read_prefixed_id(b'F');
        ensure_progress(cursor, start, InputKind::Info, "an `F<id>` entry")?;
        let max_io = cursor.read_unsigned();
        max_id = max_id.max(id);
        pairs.push((id, max_io));
    }

    design.fpgas = allocate(InputKind::Info, "the FPGA table", max_id as usize, None)?;
    for (id, max_io) in pairs.into_iter().filter(|&(id, _)| id != 0) {
        let id = FpgaId::new(id);
        design.fpgas[id.index()] = Some(Fpga::new(id, max_io));
    }
    Ok(())
}
