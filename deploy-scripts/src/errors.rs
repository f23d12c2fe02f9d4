//! Definitions of errors that can occur while deploying a contract

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during a deployment.
///
/// Every variant is terminal: the runner never recovers from one locally,
/// the variant only names the step that failed.
#[derive(Debug)]
pub enum DeployError {
    /// No artifact file exists for the requested contract
    ArtifactNotFound(String),
    /// Error reading an artifact file
    ReadArtifact(String),
    /// Error parsing a compilation artifact into a deployable factory
    ArtifactParsing(String),
    /// Error reading the `deployments.json` file
    ReadDeployments(String),
    /// Error writing the `deployments.json` file
    WriteDeployments(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error submitting the deployment transaction
    ContractDeployment(String),
    /// Error waiting for the deployment to be confirmed
    DeploymentConfirmation(String),
    /// Error writing the deployed address to the output
    Output(String),
}

impl Display for DeployError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DeployError::ArtifactNotFound(s) => write!(f, "error resolving artifact: {}", s),
            DeployError::ReadArtifact(s) => write!(f, "error reading artifact: {}", s),
            DeployError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            DeployError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            DeployError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
            DeployError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            DeployError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            DeployError::DeploymentConfirmation(s) => {
                write!(f, "error confirming deployment: {}", s)
            }
            DeployError::Output(s) => write!(f, "error reporting address: {}", s),
        }
    }
}

impl Error for DeployError {}
