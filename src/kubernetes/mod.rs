// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation and resource listing.

pub mod client;
pub mod cluster_client;

pub use client::create_client;
pub use cluster_client::{ClusterClient, KubeClusterClient};
