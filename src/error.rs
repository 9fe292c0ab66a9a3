// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::kind::ResourceKind;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KreadyError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to load Kubernetes config: {0}")]
    Kubeconfig(String),

    #[error("Failed to list {kind}s: {source}")]
    List {
        kind: ResourceKind,
        #[source]
        source: kube::Error,
    },

    #[error("Unexpected resource data: {0}")]
    Data(String),

    #[error("Timeout reached after {waited:?} while waiting for {kind}s to become ready")]
    Timeout { kind: ResourceKind, waited: Duration },

    #[error("{kind}s are not ready")]
    NotReady { kind: ResourceKind },

    #[error("Cancelled while waiting for resources to become ready")]
    Cancelled,
}

impl KreadyError {
    /// Process exit status for this error class
    pub fn exit_code(&self) -> u8 {
        match self {
            KreadyError::NotReady { .. } => 1,
            KreadyError::Config(_) => 2,
            KreadyError::Kubeconfig(_) | KreadyError::List { .. } => 3,
            KreadyError::Data(_) => 4,
            KreadyError::Timeout { .. } => 5,
            KreadyError::Cancelled => 130,
        }
    }
}

pub type Result<T> = std::result::Result<T, KreadyError>;
