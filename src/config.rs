// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{defaults, env};
use crate::error::{KreadyError, Result};
use crate::types::{ResourceKind, SelectorQuery};
use crate::wait::WaitConfig;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::Instant;

/// Command-line arguments, each falling back to an environment variable
#[derive(Parser, Debug, Clone)]
#[command(name = "kready")]
#[command(version, about = "Wait for Kubernetes resources to become ready")]
pub struct Args {
    /// The namespace to monitor, empty for all namespaces
    #[arg(long, env = env::NAMESPACE, default_value = "")]
    pub namespace: String,

    /// The label selector to filter resources
    #[arg(long, env = env::LABEL_SELECTOR, default_value = "")]
    pub label_selector: String,

    /// The resource type to monitor: pod, job, deployment, statefulset, daemonset or replicaset
    #[arg(long, env = env::RESOURCE_TYPE)]
    pub resource_type: String,

    /// Path to the kubeconfig file
    #[arg(long, env = env::KUBECONFIG)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use instead of the current one
    #[arg(long, env = env::KUBE_CONTEXT)]
    pub context: Option<String>,

    /// Maximum number of seconds to wait, 0 waits forever
    #[arg(long, env = env::TIMEOUT_SECONDS, default_value_t = 0)]
    pub timeout: u64,

    /// Seconds between readiness checks
    #[arg(long, env = env::INTERVAL_SECONDS, default_value_t = defaults::INTERVAL_SECS)]
    pub interval: u64,

    /// Check readiness once and exit instead of waiting
    #[arg(long)]
    pub once: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resolved configuration, fixed for the lifetime of the process
#[derive(Debug, Clone)]
pub struct Config {
    pub selector: SelectorQuery,
    pub kind: ResourceKind,
    pub interval: Duration,
    /// `None` waits forever
    pub timeout: Option<Duration>,
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    pub once: bool,
}

impl Config {
    /// Validate parsed arguments into a configuration
    pub fn from_args(args: Args) -> Result<Self> {
        let kind: ResourceKind = args.resource_type.parse()?;

        if args.interval == 0 {
            return Err(KreadyError::Config(
                "interval must be greater than 0 seconds".to_string(),
            ));
        }

        let timeout = (args.timeout > 0).then(|| Duration::from_secs(args.timeout));
        if let Some(timeout) = timeout {
            if Instant::now().checked_add(timeout).is_none() {
                return Err(KreadyError::Config(format!(
                    "timeout of {} seconds is too large",
                    args.timeout
                )));
            }
        }

        Ok(Config {
            selector: SelectorQuery::new(args.namespace, args.label_selector),
            kind,
            interval: Duration::from_secs(args.interval),
            timeout,
            kubeconfig: args.kubeconfig.filter(|p| !p.as_os_str().is_empty()),
            context: args.context.filter(|c| !c.is_empty()),
            once: args.once,
        })
    }

    /// Wait settings, with the deadline anchored at the time of the call
    pub fn wait_config(&self) -> WaitConfig {
        WaitConfig::new(self.interval, self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, FromArgMatches};

    /// Env fallbacks redirected to variables nothing sets, so the tests do
    /// not depend on the environment they run in.
    const ISOLATED_ENV: [(&str, &str); 7] = [
        ("namespace", "KREADY_TEST_UNSET_NAMESPACE"),
        ("label_selector", "KREADY_TEST_UNSET_LABEL_SELECTOR"),
        ("resource_type", "KREADY_TEST_UNSET_RESOURCE_TYPE"),
        ("kubeconfig", "KREADY_TEST_UNSET_KUBECONFIG"),
        ("context", "KREADY_TEST_UNSET_CONTEXT"),
        ("timeout", "KREADY_TEST_UNSET_TIMEOUT"),
        ("interval", "KREADY_TEST_UNSET_INTERVAL"),
    ];

    fn isolated_command() -> clap::Command {
        ISOLATED_ENV
            .iter()
            .fold(Args::command(), |cmd, (id, var)| cmd.mut_arg(*id, |a| a.env(*var)))
    }

    fn parse_with(cmd: clap::Command, argv: &[&str]) -> Result<Config> {
        let matches = cmd
            .try_get_matches_from(std::iter::once("kready").chain(argv.iter().copied()))
            .map_err(|e| KreadyError::Config(e.to_string()))?;
        let args =
            Args::from_arg_matches(&matches).map_err(|e| KreadyError::Config(e.to_string()))?;
        Config::from_args(args)
    }

    fn parse(argv: &[&str]) -> Result<Config> {
        parse_with(isolated_command(), argv)
    }

    #[test]
    fn test_minimal_args_use_defaults() {
        let config = parse(&["--resource-type", "pod"]).unwrap();

        assert_eq!(config.kind, ResourceKind::Pod);
        assert_eq!(config.selector, SelectorQuery::default());
        assert_eq!(config.interval, Duration::from_secs(defaults::INTERVAL_SECS));
        assert_eq!(config.timeout, None);
        assert!(!config.once);
    }

    #[test]
    fn test_all_flags() {
        let config = parse(&[
            "--namespace",
            "prod",
            "--label-selector",
            "app=web",
            "--resource-type",
            "deployment",
            "--kubeconfig",
            "/etc/kube/config",
            "--context",
            "staging",
            "--timeout",
            "120",
            "--interval",
            "2",
            "--once",
        ])
        .unwrap();

        assert_eq!(config.selector, SelectorQuery::new("prod", "app=web"));
        assert_eq!(config.kind, ResourceKind::Deployment);
        assert_eq!(config.kubeconfig, Some(PathBuf::from("/etc/kube/config")));
        assert_eq!(config.context.as_deref(), Some("staging"));
        assert_eq!(config.timeout, Some(Duration::from_secs(120)));
        assert_eq!(config.interval, Duration::from_secs(2));
        assert!(config.once);
    }

    #[test]
    fn test_invalid_resource_type_is_config_error() {
        let err = parse(&["--resource-type", "service"]).unwrap_err();
        assert!(matches!(err, KreadyError::Config(_)));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let err = parse(&["--resource-type", "job", "--interval", "0"]).unwrap_err();
        assert!(matches!(err, KreadyError::Config(_)));
    }

    #[test]
    fn test_non_numeric_timeout_is_rejected() {
        let err = parse(&["--resource-type", "job", "--timeout", "soon"]).unwrap_err();
        assert!(matches!(err, KreadyError::Config(_)));
    }

    #[test]
    fn test_zero_timeout_waits_forever() {
        let config = parse(&["--resource-type", "job", "--timeout", "0"]).unwrap();
        assert_eq!(config.timeout, None);
        assert!(config.wait_config().deadline.is_none());
    }

    #[test]
    fn test_wait_config_has_deadline_when_timeout_set() {
        let config = parse(&["--resource-type", "job", "--timeout", "30"]).unwrap();
        let wait = config.wait_config();

        assert_eq!(wait.interval, Duration::from_secs(defaults::INTERVAL_SECS));
        assert!(wait.deadline.is_some());
    }

    #[test]
    fn test_timeout_too_large_is_config_error() {
        let err = parse(&["--resource-type", "job", "--timeout", "18446744073709551615"])
            .unwrap_err();
        assert!(matches!(err, KreadyError::Config(_)));
    }

    #[test]
    fn test_env_used_when_flag_missing() {
        std::env::set_var("KREADY_TEST_NAMESPACE_FROM_ENV", "from-env");
        let cmd = isolated_command()
            .mut_arg("namespace", |a| a.env("KREADY_TEST_NAMESPACE_FROM_ENV"));

        let config = parse_with(cmd, &["--resource-type", "pod"]).unwrap();

        assert_eq!(config.selector.namespace, "from-env");
    }

    #[test]
    fn test_flag_wins_over_env() {
        std::env::set_var("KREADY_TEST_SELECTOR_FROM_ENV", "app=from-env");
        let cmd = isolated_command()
            .mut_arg("label_selector", |a| a.env("KREADY_TEST_SELECTOR_FROM_ENV"));

        let config = parse_with(cmd, &["--resource-type", "pod", "--label-selector", "app=flag"])
            .unwrap();

        assert_eq!(config.selector.label_selector, "app=flag");
    }
}
