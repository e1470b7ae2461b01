//! `g<src> <weight> g<sink>...` lines: the netlist.

use super::ensure_progress;
use crate::cursor::Cursor;
use crate::error::{EndpointRole, InputKind, LoadError};
use crate::model::{Design, Net};
use mfpga_common::{NetId, NodeId};

/// Appends one net per line, numbered from 1 in file order.
///
/// Sinks are read while the same line continues with a `g` token, so a net
/// may have no sinks and a line break always ends the net. Every endpoint
/// must name a node the mapping file created.
pub(crate) fn load(design: &mut Design, cursor: &mut Cursor<'_>) -> Result<(), LoadError> {
    if design.nodes().is_empty() {
        return Err(LoadError::Sequence {
            stage: InputKind::Net,
            prerequisite: InputKind::Mapping,
            missing: "nodes",
        });
    }

    loop {
        let start = cursor.token_start();
        if cursor.at_end() {
            break;
        }
        let id = NetId::new(design.nets.len() as u32 + 1);

        let source = NodeId::new(cursor.read_prefixed_id(b'g'));
        ensure_progress(cursor, start, InputKind::Net, "a `g<id>` source node")?;
        resolve(design, cursor, id, source, EndpointRole::Source, start)?;

        let weight = match cursor.peek_inline() {
            Some(b'0'..=b'9') => cursor.read_unsigned(),
            _ => 0,
        };

        let mut sinks = Vec::new();
        while cursor.peek_inline() == Some(b'g') {
            let tok = cursor.token_start();
            let node = NodeId::new(cursor.read_prefixed_id(b'g'));
            resolve(design, cursor, id, node, EndpointRole::Sink, tok)?;
            sinks.push(node);
        }

        design.nets.push(Net {
            id,
            source,
            sinks,
            weight,
        });
    }
    Ok(())
}

fn resolve(
    design: &Design,
    cursor: &Cursor<'_>,
    net: NetId,
    node: NodeId,
    role: EndpointRole,
    at: usize,
) -> Result<(), LoadError> {
    if design.node(node).is_some() {
        Ok(())
    } else {
        Err(LoadError::UnknownNode {
            net,
            node,
            role,
            location: cursor.location(at),
        })
    }
}
