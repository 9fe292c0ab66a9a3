// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Listing resources from the cluster.

use crate::error::{KreadyError, Result};
use crate::types::{ResourceKind, ResourceRecord, ResourceSnapshot, SelectorQuery};
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet};
use k8s_openapi::api::batch::v1::Job;
use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::NamespaceResourceScope;
use kube::{api::ListParams, Api, Client, Resource};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{debug, instrument};

/// Read access to the cluster, as far as the wait loop needs it.
///
/// Implementations return a fresh snapshot on every call.
#[async_trait]
pub trait ClusterClient: Send + Sync {
    /// List all resources of `kind` matching `selector`
    async fn list(&self, kind: ResourceKind, selector: &SelectorQuery)
        -> Result<ResourceSnapshot>;
}

/// `ClusterClient` backed by the Kubernetes API
#[derive(Clone)]
pub struct KubeClusterClient {
    client: Client,
}

impl KubeClusterClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn list_as<K>(
        &self,
        kind: ResourceKind,
        selector: &SelectorQuery,
    ) -> Result<ResourceSnapshot>
    where
        K: Resource<Scope = NamespaceResourceScope>
            + Clone
            + DeserializeOwned
            + Debug
            + Into<ResourceRecord>,
        <K as Resource>::DynamicType: Default,
    {
        let api: Api<K> = if selector.all_namespaces() {
            Api::all(self.client.clone())
        } else {
            Api::namespaced(self.client.clone(), &selector.namespace)
        };

        let lp = list_params(selector);
        let list = api
            .list(&lp)
            .await
            .map_err(|source| KreadyError::List { kind, source })?;

        debug!("Listed {} {}s", list.items.len(), kind);

        Ok(list.items.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ClusterClient for KubeClusterClient {
    #[instrument(
        skip(self, selector),
        fields(namespace = %selector.namespace, selector = %selector.label_selector)
    )]
    async fn list(
        &self,
        kind: ResourceKind,
        selector: &SelectorQuery,
    ) -> Result<ResourceSnapshot> {
        match kind {
            ResourceKind::Pod => self.list_as::<Pod>(kind, selector).await,
            ResourceKind::Job => self.list_as::<Job>(kind, selector).await,
            ResourceKind::Deployment => self.list_as::<Deployment>(kind, selector).await,
            ResourceKind::StatefulSet => self.list_as::<StatefulSet>(kind, selector).await,
            ResourceKind::DaemonSet => self.list_as::<DaemonSet>(kind, selector).await,
            ResourceKind::ReplicaSet => self.list_as::<ReplicaSet>(kind, selector).await,
        }
    }
}

fn list_params(selector: &SelectorQuery) -> ListParams {
    if selector.label_selector.is_empty() {
        ListParams::default()
    } else {
        ListParams::default().labels(&selector.label_selector)
    }
}
