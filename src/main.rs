// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use kready::config::{Args, Config};
use kready::error::KreadyError;
use kready::kubernetes::{create_client, KubeClusterClient};
use kready::wait;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    kready::logging::init(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            let code = e
                .downcast_ref::<KreadyError>()
                .map_or(1, KreadyError::exit_code);
            ExitCode::from(code)
        }
    }
}

async fn run(args: Args) -> Result<()> {
    // Resolve configuration once, nothing reads the environment after this
    let config = Config::from_args(args)?;
    info!(
        "Waiting for {}s in namespace '{}' with label selector '{}' (timeout: {})",
        config.kind,
        if config.selector.all_namespaces() {
            "*"
        } else {
            config.selector.namespace.as_str()
        },
        config.selector.label_selector,
        config
            .timeout
            .map_or_else(|| "none".to_string(), |t| format!("{:?}", t)),
    );

    let client = create_client(&config).await?;
    info!("Connected to Kubernetes cluster");
    let cluster = KubeClusterClient::new(client);

    if config.once {
        let verdict = wait::evaluate(&cluster, &config.selector, config.kind).await?;
        if !verdict.ready() {
            wait::report(config.kind, &verdict);
            return Err(KreadyError::NotReady { kind: config.kind }.into());
        }
        info!("All {}s are ready!", config.kind);
        return Ok(());
    }

    let cancel = CancellationToken::new();
    tokio::spawn(cancel_on_signal(cancel.clone()));

    let wait_config = config.wait_config();
    wait::run(&cluster, &config.selector, config.kind, &wait_config, &cancel).await?;

    Ok(())
}

/// Cancel the wait on SIGINT or SIGTERM
async fn cancel_on_signal(cancel: CancellationToken) {
    if let Err(e) = wait_for_signal().await {
        warn!("Failed to listen for shutdown signals: {:#}", e);
        return;
    }
    info!("Shutdown signal received, stopping");
    cancel.cancel();
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate =
        signal(SignalKind::terminate()).context("Failed to install SIGTERM handler")?;
    tokio::select! {
        res = tokio::signal::ctrl_c() => res.context("Failed to listen for ctrl-c"),
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<()> {
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for ctrl-c")
}
