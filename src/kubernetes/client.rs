// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation from a kubeconfig file or the ambient environment

use crate::config::Config;
use crate::error::{KreadyError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client.
///
/// An explicit kubeconfig path wins; otherwise the config is inferred from
/// `$KUBECONFIG`/`~/.kube/config` and then the in-cluster service account.
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let client_config = match &config.kubeconfig {
        Some(path) => {
            info!("Loading kubeconfig from {}", path.display());
            let kubeconfig = read_kubeconfig(path)?;
            config_from_kubeconfig(kubeconfig, config.context.as_deref()).await?
        }
        None if config.context.is_some() => {
            let options = kube_config_options(config.context.as_deref());
            KConfig::from_kubeconfig(&options).await.map_err(|e| {
                KreadyError::Kubeconfig(format!("Failed to load kubeconfig: {}", e))
            })?
        }
        None => {
            debug!("No kubeconfig given, inferring configuration");
            KConfig::infer().await.map_err(|e| {
                KreadyError::Kubeconfig(format!("Failed to infer config: {}", e))
            })?
        }
    };

    debug!("Using cluster {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| KreadyError::Kubeconfig(format!("Failed to create client: {}", e)))
}

/// Read and parse a kubeconfig file
fn read_kubeconfig(path: &Path) -> Result<Kubeconfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        KreadyError::Kubeconfig(format!("Failed to read {}: {}", path.display(), e))
    })?;

    parse_kubeconfig(&contents)
}

fn parse_kubeconfig(kubeconfig: &str) -> Result<Kubeconfig> {
    serde_yaml::from_str(kubeconfig)
        .map_err(|e| KreadyError::Kubeconfig(format!("Failed to parse kubeconfig: {}", e)))
}

async fn config_from_kubeconfig(kubeconfig: Kubeconfig, context: Option<&str>) -> Result<KConfig> {
    KConfig::from_custom_kubeconfig(kubeconfig, &kube_config_options(context))
        .await
        .map_err(|e| KreadyError::Kubeconfig(format!("Failed to create config: {}", e)))
}

fn kube_config_options(context: Option<&str>) -> KubeConfigOptions {
    KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    }
}
