//! Resolution of named compilation artifacts into deployable contract factories

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    json_abi::JsonAbi,
    network::TransactionBuilder,
    primitives::{hex, Bytes},
    rpc::types::TransactionRequest,
};
use serde::Deserialize;

use crate::{
    constants::{
        ARTIFACT_EXTENSION, HARDHAT_SOURCES_SEGMENT, LIBRARY_PLACEHOLDER_MARKER,
        SOLIDITY_EXTENSION,
    },
    errors::DeployError,
};

/// A source of compiled contract artifacts, resolving a contract name into
/// a deployable factory
pub trait ArtifactSource {
    /// Resolve the artifact for the given contract name
    fn resolve(&self, name: &str) -> Result<ContractFactory, DeployError>;
}

/// A contract that can be deployed, built from its compilation artifact
#[derive(Clone, Debug)]
pub struct ContractFactory {
    /// The name of the contract
    pub name: String,
    /// The contract's ABI
    pub abi: JsonAbi,
    /// The contract's creation bytecode
    pub bytecode: Bytes,
}

impl ContractFactory {
    /// Build the transaction which deploys a new instance of the contract
    pub fn deploy_tx(&self) -> TransactionRequest {
        TransactionRequest::default().with_deploy_code(self.bytecode.clone())
    }
}

/// The subset of a Hardhat or Foundry artifact file needed for deployment
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactFile {
    /// The contract name, only present in Hardhat artifacts
    contract_name: Option<String>,
    /// The contract's ABI
    abi: JsonAbi,
    /// The contract's creation bytecode
    bytecode: BytecodeField,
}

/// Hardhat stores the creation bytecode as a hex string, Foundry nests it
/// under an `object` key
#[derive(Deserialize)]
#[serde(untagged)]
enum BytecodeField {
    /// A bare hex string
    Hex(String),
    /// A bytecode object
    Object {
        /// The hex-encoded bytecode
        object: String,
    },
}

impl BytecodeField {
    /// The hex-encoded bytecode
    fn as_hex(&self) -> &str {
        match self {
            BytecodeField::Hex(s) => s,
            BytecodeField::Object { object } => object,
        }
    }
}

/// Artifacts read from a directory produced by a Solidity toolchain
#[derive(Clone, Debug)]
pub struct ArtifactsDir {
    /// The root of the artifacts directory
    root: PathBuf,
}

impl ArtifactsDir {
    /// Create an artifact source rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The candidate artifact paths for a contract, in lookup order:
    /// Hardhat, then Foundry, then a flat `<name>.json`
    fn candidates(&self, name: &str) -> [PathBuf; 3] {
        let file_name = format!("{name}.{ARTIFACT_EXTENSION}");
        let source_dir = format!("{name}.{SOLIDITY_EXTENSION}");

        [
            self.root
                .join(HARDHAT_SOURCES_SEGMENT)
                .join(&source_dir)
                .join(&file_name),
            self.root.join(&source_dir).join(&file_name),
            self.root.join(&file_name),
        ]
    }
}

impl ArtifactSource for ArtifactsDir {
    fn resolve(&self, name: &str) -> Result<ContractFactory, DeployError> {
        let path = self
            .candidates(name)
            .into_iter()
            .find(|path| path.is_file())
            .ok_or_else(|| {
                DeployError::ArtifactNotFound(format!(
                    "no artifact for `{}` under {}",
                    name,
                    self.root.display()
                ))
            })?;

        tracing::debug!("reading artifact from {}", path.display());
        read_artifact(&path, name)
    }
}

/// Read and parse the artifact file at `path` for the contract `name`
pub fn read_artifact(path: &Path, name: &str) -> Result<ContractFactory, DeployError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| DeployError::ReadArtifact(format!("{}: {}", path.display(), e)))?;

    parse_artifact(&contents, name)
}

/// Parse the contents of an artifact file for the contract `name`
pub fn parse_artifact(contents: &str, name: &str) -> Result<ContractFactory, DeployError> {
    let artifact: ArtifactFile = serde_json::from_str(contents)
        .map_err(|e| DeployError::ArtifactParsing(e.to_string()))?;

    if let Some(contract_name) = &artifact.contract_name {
        if contract_name != name {
            return Err(DeployError::ArtifactParsing(format!(
                "artifact is for `{contract_name}`, expected `{name}`"
            )));
        }
    }

    let bytecode_hex = artifact.bytecode.as_hex();
    if bytecode_hex.contains(LIBRARY_PLACEHOLDER_MARKER) {
        return Err(DeployError::ArtifactParsing(format!(
            "`{name}` bytecode contains unlinked library references"
        )));
    }

    let bytecode =
        hex::decode(bytecode_hex).map_err(|e| DeployError::ArtifactParsing(e.to_string()))?;
    if bytecode.is_empty() {
        return Err(DeployError::ArtifactParsing(format!(
            "`{name}` has no creation bytecode, is it abstract or an interface?"
        )));
    }

    if let Some(constructor) = &artifact.abi.constructor {
        if !constructor.inputs.is_empty() {
            return Err(DeployError::ArtifactParsing(format!(
                "`{name}` constructor takes {} arguments, none can be supplied",
                constructor.inputs.len()
            )));
        }
    }

    Ok(ContractFactory {
        name: name.to_string(),
        abi: artifact.abi,
        bytecode: bytecode.into(),
    })
}
