// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Aggregating per-item readiness over one snapshot.

use crate::error::{KreadyError, Result};
use crate::readiness::is_ready;
use crate::types::{ResourceKind, ResourceRecord};

/// Readiness of a single listed resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemVerdict {
    pub name: String,
    pub namespace: Option<String>,
    pub ready: bool,
}

/// Readiness of a whole snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadinessVerdict {
    pub items: Vec<ItemVerdict>,
}

impl ReadinessVerdict {
    /// True when there is at least one item and every item is ready
    pub fn ready(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|i| i.ready)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ready_count(&self) -> usize {
        self.items.iter().filter(|i| i.ready).count()
    }
}

/// Evaluate every record of a snapshot listed for `kind`.
///
/// Fails on the first record that cannot be evaluated.
pub fn evaluate_snapshot(
    kind: ResourceKind,
    snapshot: &[ResourceRecord],
) -> Result<ReadinessVerdict> {
    let items = snapshot
        .iter()
        .map(|record| evaluate_record(kind, record))
        .collect::<Result<Vec<_>>>()?;

    Ok(ReadinessVerdict { items })
}

fn evaluate_record(kind: ResourceKind, record: &ResourceRecord) -> Result<ItemVerdict> {
    let name = record.name();

    if let Some(actual) = record.kind() {
        if actual != kind {
            return Err(KreadyError::Data(format!(
                "expected a {} but got {} {}",
                kind, actual, name
            )));
        }
    }

    let ready = is_ready(record)?;

    Ok(ItemVerdict {
        name,
        namespace: record.namespace(),
        ready,
    })
}
