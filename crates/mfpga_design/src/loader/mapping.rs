//! `F<id>: g<n>...` lines: node placement.

use super::{ensure_progress, in_range, FPGA_OUT_OF_RANGE, FPGA_UNDEFINED};
use crate::cursor::Cursor;
use crate::error::{InputKind, LoadError};
use crate::model::Design;
use mfpga_common::{FpgaId, NodeId};
use mfpga_diagnostics::{Diagnostic, DiagnosticSink};

/// Creates nodes and places them on FPGAs.
///
/// A node named more than once ends up on the FPGA of its last mention and
/// is listed under every FPGA that named it. Lines whose FPGA does not exist
/// are consumed and dropped with a warning.
pub(crate) fn load(
    design: &mut Design,
    cursor: &mut Cursor<'_>,
    sink: &DiagnosticSink,
) -> Result<(), LoadError> {
    if design.fpga_count() == 0 {
        return Err(LoadError::Sequence {
            stage: InputKind::Mapping,
            prerequisite: InputKind::Info,
            missing: "FPGAs",
        });
    }

    loop {
        let start = cursor.token_start();
        if cursor.at_end() {
            break;
        }
        let raw = cursor.read_prefixed_id(b'F');
        let label = cursor.span_from(start);
        cursor.skip_optional(b':');

        let target = if !in_range(raw, design.fpga_count()) {
            sink.emit(
                Diagnostic::warning(
                    FPGA_OUT_OF_RANGE,
                    format!("FPGA id {raw} is outside 1..={}", design.fpga_count()),
                    label,
                )
                .with_note("the nodes on this line were not mapped"),
            );
            None
        } else if design.fpga(FpgaId::new(raw)).is_none() {
            sink.emit(
                Diagnostic::warning(
                    FPGA_UNDEFINED,
                    format!("FPGA F{raw} is not defined in the info file"),
                    label,
                )
                .with_note("the nodes on this line were not mapped"),
            );
            None
        } else {
            Some(FpgaId::new(raw))
        };

        while cursor.peek_significant().is_some_and(|b| b != b'F') {
            let tok = cursor.token_start();
            let node = NodeId::new(cursor.read_prefixed_id(b'g'));
            ensure_progress(cursor, tok, InputKind::Mapping, "a `g<id>` node")?;
            if let Some(fpga) = target {
                design.assign(node, fpga);
            }
        }
    }
    Ok(())
}
