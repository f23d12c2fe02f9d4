//! Definition of the CLI arguments for the deploy script

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::constants::{
    DEFAULT_ARTIFACTS_DIR, DEFAULT_CONTRACT_NAME, DEFAULT_DEPLOY_CONFIRMATIONS, DEFAULT_RPC_URL,
};

/// Deploy a compiled contract to an EVM chain and print its address
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the contract to deploy
    #[arg(short, long, default_value = DEFAULT_CONTRACT_NAME)]
    pub contract: String,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Private key of the deployer
    #[arg(long = "pkey", env = "PKEY", hide_env_values = true)]
    pub priv_key: String,

    /// Number of confirmations to wait for before reporting the address
    #[arg(
        long,
        default_value_t = DEFAULT_DEPLOY_CONFIRMATIONS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub confirmations: u64,

    /// Optional path to a `deployments.json` file in which to record the address
    #[arg(short, long)]
    pub deployments_path: Option<PathBuf>,

    /// Log level, logs are written to stderr
    #[arg(long, default_value = "info")]
    pub log_level: Level,
}
