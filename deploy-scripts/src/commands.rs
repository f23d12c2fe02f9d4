//! The deployment runner: resolve, submit, confirm, report

use std::{io::Write, path::Path};

use alloy::primitives::Address;
use tracing::info;

use crate::{
    artifacts::ArtifactSource,
    client::DeploymentClient,
    constants::DEPLOYED_ADDRESS_PREFIX,
    deployments::{read_deployment, write_deployed_address},
    errors::DeployError,
};

/// Deploy the named contract, returning its address once confirmed.
///
/// Makes exactly one deployment attempt; a failure at any step ends the run.
pub async fn deploy_contract<S, C>(
    contract: &str,
    artifacts: &S,
    client: &C,
) -> Result<Address, DeployError>
where
    S: ArtifactSource,
    C: DeploymentClient,
{
    let factory = artifacts.resolve(contract)?;
    info!(
        bytecode_len = factory.bytecode.len(),
        "resolved artifact for {}", factory.name
    );

    let pending = client.submit(&factory).await?;
    client.confirm(pending).await
}

/// Deploy the named contract and report its address on `out`, recording it in
/// the deployments file if one is given.
///
/// Nothing is written to `out` unless the deployment was confirmed.
pub async fn run_deployment<S, C>(
    contract: &str,
    artifacts: &S,
    client: &C,
    deployments_path: Option<&Path>,
    out: &mut impl Write,
) -> Result<Address, DeployError>
where
    S: ArtifactSource,
    C: DeploymentClient,
{
    // Surface a deployments file that can't take the new entry before spending gas
    if let Some(path) = deployments_path {
        if let Some(previous) = read_deployment(path, contract)? {
            info!(%previous, "replacing recorded deployment of {}", contract);
        }
    }

    let address = deploy_contract(contract, artifacts, client).await?;
    writeln!(out, "{}", deployment_message(address))
        .and_then(|_| out.flush())
        .map_err(|e| DeployError::Output(e.to_string()))?;

    if let Some(path) = deployments_path {
        write_deployed_address(path, contract, address)?;
        info!("recorded {} in {}", contract, path.display());
    }

    Ok(address)
}

/// The line reported for a successful deployment
pub fn deployment_message(address: Address) -> String {
    format!("{DEPLOYED_ADDRESS_PREFIX} {address}")
}
