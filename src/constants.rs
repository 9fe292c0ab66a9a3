// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read when the matching flag is not given
pub mod env {
    pub const NAMESPACE: &str = "NAMESPACE";
    pub const LABEL_SELECTOR: &str = "LABEL_SELECTOR";
    pub const RESOURCE_TYPE: &str = "RESOURCE_TYPE";
    pub const KUBECONFIG: &str = "KUBECONFIG";
    pub const KUBE_CONTEXT: &str = "KUBE_CONTEXT";
    pub const TIMEOUT_SECONDS: &str = "TIMEOUT_SECONDS";
    pub const INTERVAL_SECONDS: &str = "INTERVAL_SECONDS";
}

/// Default settings
pub mod defaults {
    /// Seconds between readiness checks
    pub const INTERVAL_SECS: u64 = 5;
    /// Log filter used when `RUST_LOG` is not set
    pub const LOG_FILTER: &str = "info";
    /// Log filter used with `--verbose`
    pub const VERBOSE_LOG_FILTER: &str = "debug";
}
