//! `F<id>: v1,...,vN` rows: the channel-capacity matrix.

use super::{ensure_progress, in_range, TOPO_ROW_DUPLICATE, TOPO_ROW_OUT_OF_RANGE};
use crate::cursor::Cursor;
use crate::error::{InputKind, LoadError};
use crate::model::{Design, SquareMatrix};
use mfpga_diagnostics::{Diagnostic, DiagnosticSink};

/// Fills an N×N matrix, N being the size of the FPGA table.
///
/// Every row reads exactly N values. A row whose id is outside `1..=N` is
/// still read, so the scan stays aligned, and then discarded. Rows that are
/// never given stay zero.
pub(crate) fn load(
    design: &mut Design,
    cursor: &mut Cursor<'_>,
    sink: &DiagnosticSink,
) -> Result<(), LoadError> {
    let n = design.fpga_count();
    if n == 0 {
        return Err(LoadError::Sequence {
            stage: InputKind::Topo,
            prerequisite: InputKind::Info,
            missing: "FPGAs",
        });
    }

    let mut matrix = zero_matrix(n)?;
    let mut seen = vec![false; n];
    let mut scratch = vec![0; n];

    loop {
        let start = cursor.token_start();
        if cursor.at_end() {
            break;
        }
        let raw = cursor.read_prefixed_id(b'F');
        ensure_progress(cursor, start, InputKind::Topo, "an `F<id>:` row")?;
        let label = cursor.span_from(start);
        cursor.skip_optional(b':');

        for (k, value) in scratch.iter_mut().enumerate() {
            if k > 0 {
                cursor.skip_optional(b',');
            }
            *value = cursor.read_unsigned();
        }

        if !in_range(raw, n) {
            sink.emit(
                Diagnostic::warning(
                    TOPO_ROW_OUT_OF_RANGE,
                    format!("topology row F{raw} is outside F1..=F{n}"),
                    label,
                )
                .with_note("the row was read and discarded"),
            );
            continue;
        }
        let row = raw as usize - 1;
        if std::mem::replace(&mut seen[row], true) {
            sink.emit(
                Diagnostic::warning(
                    TOPO_ROW_DUPLICATE,
                    format!("topology row F{raw} appears more than once"),
                    label,
                )
                .with_note("the last row wins"),
            );
        }
        matrix.row_mut(row).copy_from_slice(&scratch);
    }

    design.topology = matrix;
    Ok(())
}

fn zero_matrix(n: usize) -> Result<SquareMatrix, LoadError> {
    SquareMatrix::try_zeros(n).ok_or(LoadError::Capacity {
        kind: InputKind::Topo,
        table: "the topology matrix",
        count: n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Fpga;
    use mfpga_common::FpgaId;
    use mfpga_source::{FileId, SourceFile};
    use std::path::PathBuf;

    fn with_fpgas(n: u32) -> Design {
        Design {
            fpgas: (1..=n).map(|i| Some(Fpga::new(FpgaId::new(i), 1))).collect(),
            ..Design::default()
        }
    }

    fn run(mut design: Design, text: &str) -> (Result<Design, LoadError>, DiagnosticSink) {
        let file = SourceFile::new(FileId::from_raw(3), PathBuf::from("design.topo"), text.into());
        let sink = DiagnosticSink::new();
        let result = load(&mut design, &mut Cursor::new(&file), &sink).map(|()| design);
        (result, sink)
    }

    #[test]
    fn fills_rows() {
        let (d, sink) = run(with_fpgas(2), "F1: 0,4\nF2: 4,0\n");
        let m = d.unwrap().topology().clone();
        assert_eq!(m.size(), 2);
        assert_eq!(m.row(0), &[0, 4]);
        assert_eq!(m.row(1), &[4, 0]);
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn spaces_around_delimiters() {
        let (d, _) = run(with_fpgas(3), "F2 :  1 , 2 ,3\r\n");
        let m = d.unwrap().topology().clone();
        assert_eq!(m.row(1), &[1, 2, 3]);
        assert_eq!(m.row(0), &[0, 0, 0]);
    }

    #[test]
    fn out_of_range_row_is_discarded_in_step() {
        let (d, sink) = run(with_fpgas(2), "F5: 9,9\nF1: 0,2\nF0: 7,7\n");
        let m = d.unwrap().topology().clone();
        assert_eq!(m.row(0), &[0, 2]);
        assert_eq!(m.row(1), &[0, 0]);
        let diags = sink.diagnostics();
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.code == TOPO_ROW_OUT_OF_RANGE));
        assert_eq!(diags[0].message, "topology row F5 is outside F1..=F2");
    }

    #[test]
    fn duplicate_row_last_wins() {
        let (d, sink) = run(with_fpgas(2), "F1: 0,4\nF1: 0,6\n");
        assert_eq!(d.unwrap().topology().row(0), &[0, 6]);
        let diags = sink.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, TOPO_ROW_DUPLICATE);
    }

    #[test]
    fn empty_file_gives_zero_matrix() {
        let (d, _) = run(with_fpgas(2), "");
        let d = d.unwrap();
        assert_eq!(d.topology().size(), 2);
        assert!(d.topology().rows().all(|r| r.iter().all(|&v| v == 0)));
    }

    #[test]
    fn requires_fpgas() {
        let (result, _) = run(Design::default(), "F1: 0\n");
        assert!(matches!(
            result.unwrap_err(),
            LoadError::Sequence {
                stage: InputKind::Topo,
                ..
            }
        ));
    }

    #[test]
    fn oversized_matrix_is_an_error() {
        let side = usize::MAX / 2;
        let err = zero_matrix(side).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Capacity {
                kind: InputKind::Topo,
                count,
                ..
            } if count == side
        ));
        assert_eq!(zero_matrix(3).unwrap().size(), 3);
    }

    #[test]
    fn garbage_is_rejected() {
        let (result, _) = run(with_fpgas(1), "F1: 0\n;\n");
        assert!(matches!(
            result.unwrap_err(),
            LoadError::Syntax {
                kind: InputKind::Topo,
                found: ';',
                ..
            }
        ));
    }
}
