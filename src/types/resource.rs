// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::kind::ResourceKind;
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet};
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Pod;
use kube::api::{DynamicObject, ObjectMeta};

/// Which resources to look at: a namespace (empty for all namespaces) and a
/// label selector (empty to match everything).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorQuery {
    pub namespace: String,
    pub label_selector: String,
}

impl SelectorQuery {
    pub fn new(namespace: impl Into<String>, label_selector: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            label_selector: label_selector.into(),
        }
    }

    pub fn all_namespaces(&self) -> bool {
        self.namespace.is_empty()
    }
}

/// A single object returned by a list call, tagged with its kind
#[derive(Debug, Clone)]
pub enum ResourceRecord {
    Pod(Pod),
    Job(Job),
    Deployment(Deployment),
    StatefulSet(StatefulSet),
    DaemonSet(DaemonSet),
    ReplicaSet(ReplicaSet),
    /// An object whose kind is not one kready evaluates
    Unrecognized(DynamicObject),
}

/// All records returned by one list call, in API order
pub type ResourceSnapshot = Vec<ResourceRecord>;

impl ResourceRecord {
    /// The kind of this record, `None` when unrecognized
    pub fn kind(&self) -> Option<ResourceKind> {
        match self {
            ResourceRecord::Pod(_) => Some(ResourceKind::Pod),
            ResourceRecord::Job(_) => Some(ResourceKind::Job),
            ResourceRecord::Deployment(_) => Some(ResourceKind::Deployment),
            ResourceRecord::StatefulSet(_) => Some(ResourceKind::StatefulSet),
            ResourceRecord::DaemonSet(_) => Some(ResourceKind::DaemonSet),
            ResourceRecord::ReplicaSet(_) => Some(ResourceKind::ReplicaSet),
            ResourceRecord::Unrecognized(_) => None,
        }
    }

    /// The raw kind tag, for messages
    pub fn kind_tag(&self) -> String {
        match self {
            ResourceRecord::Unrecognized(obj) => obj
                .types
                .as_ref()
                .map(|t| t.kind.clone())
                .filter(|k| !k.is_empty())
                .unwrap_or_else(|| "<unknown>".to_string()),
            other => other
                .kind()
                .map(|k| k.api_kind().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn metadata(&self) -> &ObjectMeta {
        match self {
            ResourceRecord::Pod(r) => &r.metadata,
            ResourceRecord::Job(r) => &r.metadata,
            ResourceRecord::Deployment(r) => &r.metadata,
            ResourceRecord::StatefulSet(r) => &r.metadata,
            ResourceRecord::DaemonSet(r) => &r.metadata,
            ResourceRecord::ReplicaSet(r) => &r.metadata,
            ResourceRecord::Unrecognized(r) => &r.metadata,
        }
    }

    /// Display name, falling back to `generateName` like `ResourceExt::name_any`
    pub fn name(&self) -> String {
        let meta = self.metadata();
        meta.name
            .clone()
            .or_else(|| meta.generate_name.clone())
            .unwrap_or_default()
    }

    pub fn namespace(&self) -> Option<String> {
        self.metadata().namespace.clone()
    }
}

impl From<Pod> for ResourceRecord {
    fn from(r: Pod) -> Self {
        ResourceRecord::Pod(r)
    }
}

impl From<Job> for ResourceRecord {
    fn from(r: Job) -> Self {
        ResourceRecord::Job(r)
    }
}

impl From<Deployment> for ResourceRecord {
    fn from(r: Deployment) -> Self {
        ResourceRecord::Deployment(r)
    }
}

impl From<StatefulSet> for ResourceRecord {
    fn from(r: StatefulSet) -> Self {
        ResourceRecord::StatefulSet(r)
    }
}

impl From<DaemonSet> for ResourceRecord {
    fn from(r: DaemonSet) -> Self {
        ResourceRecord::DaemonSet(r)
    }
}

impl From<ReplicaSet> for ResourceRecord {
    fn from(r: ReplicaSet) -> Self {
        ResourceRecord::ReplicaSet(r)
    }
}
