// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-kind readiness checks.
//!
//! A missing `spec.replicas` means the desired count is unknown, which is
//! never ready. Missing status counters are read as zero, so an object
//! explicitly scaled to zero with nothing running counts as ready.

use crate::error::{KreadyError, Result};
use crate::types::ResourceRecord;
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet};
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Pod;

/// Check whether a single record has reached its ready state
pub fn is_ready(record: &ResourceRecord) -> Result<bool> {
    match record {
        ResourceRecord::Pod(pod) => Ok(is_pod_ready(pod)),
        ResourceRecord::Job(job) => Ok(is_job_ready(job)),
        ResourceRecord::Deployment(deployment) => Ok(is_deployment_ready(deployment)),
        ResourceRecord::StatefulSet(sts) => Ok(is_stateful_set_ready(sts)),
        ResourceRecord::DaemonSet(ds) => Ok(is_daemon_set_ready(ds)),
        ResourceRecord::ReplicaSet(rs) => Ok(is_replica_set_ready(rs)),
        ResourceRecord::Unrecognized(_) => Err(KreadyError::Data(format!(
            "unsupported resource type: {} {}",
            record.kind_tag(),
            record.name()
        ))),
    }
}

pub fn is_pod_ready(pod: &Pod) -> bool {
    pod.status
        .as_ref()
        .and_then(|s| s.conditions.as_ref())
        .is_some_and(|conditions| {
            conditions
                .iter()
                .any(|c| c.type_ == "Ready" && c.status == "True")
        })
}

pub fn is_job_ready(job: &Job) -> bool {
    job.status
        .as_ref()
        .and_then(|s| s.succeeded)
        .is_some_and(|succeeded| succeeded > 0)
}

pub fn is_deployment_ready(deployment: &Deployment) -> bool {
    let Some(desired) = deployment.spec.as_ref().and_then(|s| s.replicas) else {
        return false;
    };
    let status = deployment.status.as_ref();
    let updated = status.and_then(|s| s.updated_replicas).unwrap_or(0);
    let available = status.and_then(|s| s.available_replicas).unwrap_or(0);

    updated == desired && available == desired
}

pub fn is_stateful_set_ready(sts: &StatefulSet) -> bool {
    let Some(desired) = sts.spec.as_ref().and_then(|s| s.replicas) else {
        return false;
    };
    let ready = sts
        .status
        .as_ref()
        .and_then(|s| s.ready_replicas)
        .unwrap_or(0);

    ready == desired
}

pub fn is_daemon_set_ready(ds: &DaemonSet) -> bool {
    // No status yet means 0 scheduled and 0 ready.
    ds.status
        .as_ref()
        .map_or(true, |s| s.desired_number_scheduled == s.number_ready)
}

pub fn is_replica_set_ready(rs: &ReplicaSet) -> bool {
    let Some(desired) = rs.spec.as_ref().and_then(|s| s.replicas) else {
        return false;
    };
    let ready = rs
        .status
        .as_ref()
        .and_then(|s| s.ready_replicas)
        .unwrap_or(0);

    ready == desired
}
