// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The polling loop: list, evaluate, sleep, repeat.

use crate::error::{KreadyError, Result};
use crate::kubernetes::ClusterClient;
use crate::types::{ResourceKind, SelectorQuery};
use crate::wait::verdict::{evaluate_snapshot, ReadinessVerdict};
use std::time::Duration;
use tokio::time::{sleep, sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

/// How long to wait between checks and when to give up
#[derive(Debug, Clone, Copy)]
pub struct WaitConfig {
    pub interval: Duration,
    pub deadline: Option<Instant>,
}

impl WaitConfig {
    /// The deadline, if any, is `timeout` from now. A timeout too large to
    /// represent as an instant means no deadline.
    pub fn new(interval: Duration, timeout: Option<Duration>) -> Self {
        Self {
            interval,
            deadline: timeout.and_then(|t| Instant::now().checked_add(t)),
        }
    }

    pub fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Run a single poll cycle against a fresh snapshot
pub async fn evaluate<C>(
    client: &C,
    selector: &SelectorQuery,
    kind: ResourceKind,
) -> Result<ReadinessVerdict>
where
    C: ClusterClient + ?Sized,
{
    let snapshot = client.list(kind, selector).await?;

    if snapshot.is_empty() {
        info!(
            "No {}s found with label selector '{}', waiting...",
            kind, selector.label_selector
        );
    }

    evaluate_snapshot(kind, &snapshot)
}

/// Poll until every matching resource is ready.
///
/// Returns the final verdict once all resources are ready. List and data
/// errors end the wait immediately. Both the deadline and `cancel` interrupt
/// an in-flight list call as well as the sleep between cycles.
#[instrument(skip(client, config, cancel), fields(kind = %kind, namespace = %selector.namespace))]
pub async fn run<C>(
    client: &C,
    selector: &SelectorQuery,
    kind: ResourceKind,
    config: &WaitConfig,
    cancel: &CancellationToken,
) -> Result<ReadinessVerdict>
where
    C: ClusterClient + ?Sized,
{
    let started = Instant::now();
    let timed_out = || KreadyError::Timeout {
        kind,
        waited: started.elapsed(),
    };
    let mut cycle: u64 = 0;

    loop {
        cycle += 1;
        debug!("Starting poll cycle {}", cycle);

        let verdict = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(KreadyError::Cancelled),
            () = wait_for_deadline(config.deadline) => return Err(timed_out()),
            verdict = evaluate(client, selector, kind) => verdict?,
        };

        report(kind, &verdict);

        if verdict.ready() {
            info!("All {} {}s are ready!", verdict.items.len(), kind);
            return Ok(verdict);
        }

        if config.deadline_passed() {
            return Err(timed_out());
        }

        debug!(
            "Cycle {} not ready, checking again in {:?}",
            cycle, config.interval
        );

        tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(KreadyError::Cancelled),
            () = wait_for_deadline(config.deadline) => return Err(timed_out()),
            () = sleep(config.interval) => {}
        }
    }
}

async fn wait_for_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

/// Log the readiness of every item in a verdict
pub fn report(kind: ResourceKind, verdict: &ReadinessVerdict) {
    for line in status_lines(kind, verdict) {
        info!("{}", line);
    }
}

fn status_lines(kind: ResourceKind, verdict: &ReadinessVerdict) -> Vec<String> {
    let mut lines: Vec<String> = verdict
        .items
        .iter()
        .map(|item| {
            if item.ready {
                format!("{} {} is ready.", kind, item.name)
            } else {
                format!("{} {} is not ready, waiting...", kind, item.name)
            }
        })
        .collect();

    if !verdict.is_empty() {
        lines.push(format!(
            "{}/{} {}s ready",
            verdict.ready_count(),
            verdict.items.len(),
            kind
        ));
    }
    lines
}
