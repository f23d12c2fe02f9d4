use std::{io, process::ExitCode};

use clap::Parser;
use deploy_scripts::{
    artifacts::ArtifactsDir, cli::Cli, client::RpcDeployer, commands::run_deployment,
    errors::DeployError,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr, stdout only carries the deployed address
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Deploy the contract named on the command line
async fn run(cli: Cli) -> Result<(), DeployError> {
    let Cli {
        contract,
        artifacts_dir,
        rpc_url,
        priv_key,
        confirmations,
        deployments_path,
        ..
    } = cli;

    let artifacts = ArtifactsDir::new(artifacts_dir);
    let client = RpcDeployer::connect(&rpc_url, &priv_key, confirmations)?;

    run_deployment(
        &contract,
        &artifacts,
        &client,
        deployments_path.as_deref(),
        &mut io::stdout(),
    )
    .await?;

    Ok(())
}
