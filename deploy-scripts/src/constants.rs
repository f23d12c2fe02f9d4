//! Constants used in the deploy script

/// The contract deployed when no `--contract` is given
pub const DEFAULT_CONTRACT_NAME: &str = "WarrantyNFT";

/// The default directory in which compilation artifacts are looked up
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The default RPC URL, a local devnet node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The default number of confirmations to wait for the deployment transaction
pub const DEFAULT_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The prefix of the line printed on a successful deployment
pub const DEPLOYED_ADDRESS_PREFIX: &str = "Contract deployed at address:";

/// The directory under the artifacts root in which Hardhat nests
/// per-source artifact directories
pub const HARDHAT_SOURCES_SEGMENT: &str = "contracts";

/// The extension of a Solidity source file, used to name artifact directories
pub const SOLIDITY_EXTENSION: &str = "sol";

/// The extension of an artifact file
pub const ARTIFACT_EXTENSION: &str = "json";

/// The marker opening an unlinked library placeholder in creation bytecode
pub const LIBRARY_PLACEHOLDER_MARKER: &str = "__$";

/// The deployments key in the `deployments.json` file
pub const DEPLOYMENTS_KEY: &str = "deployments";

/// The indentation used when writing the `deployments.json` file
pub const DEPLOYMENTS_INDENT: &[u8] = b"    ";
