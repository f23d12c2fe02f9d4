//! Submission and confirmation of deployment transactions

use std::{future::Future, str::FromStr};

use alloy::{
    network::{Ethereum, TransactionBuilder},
    primitives::Address,
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use tracing::{info, warn};

use crate::{artifacts::ContractFactory, errors::DeployError};

/// The provider type used to talk to the chain
pub type RpcProvider = DynProvider<Ethereum>;

/// A client able to submit a contract deployment and wait for it to be confirmed
pub trait DeploymentClient {
    /// A handle on a submitted but not yet confirmed deployment
    type Pending: Send;

    /// Submit a single transaction deploying the given contract
    fn submit(
        &self,
        factory: &ContractFactory,
    ) -> impl Future<Output = Result<Self::Pending, DeployError>> + Send;

    /// Wait for a submitted deployment to be confirmed, returning the address
    /// of the deployed contract
    fn confirm(
        &self,
        pending: Self::Pending,
    ) -> impl Future<Output = Result<Address, DeployError>> + Send;
}

/// A deployment submitted through an RPC provider
pub struct RpcPending {
    /// The pending deployment transaction
    tx: PendingTransactionBuilder<Ethereum>,
    /// The address the contract is expected to land at
    predicted: Address,
}

/// Deploys contracts through an RPC provider, signing with a local key
#[derive(Clone)]
pub struct RpcDeployer {
    /// The signing provider
    provider: RpcProvider,
    /// The address of the deployer account
    deployer: Address,
    /// The number of confirmations to wait for
    confirmations: u64,
}

impl RpcDeployer {
    /// Sets up a signing provider for the given RPC url and private key.
    ///
    /// No requests are made to the node until a deployment is submitted.
    pub fn connect(
        rpc_url: &str,
        priv_key: &str,
        confirmations: u64,
    ) -> Result<Self, DeployError> {
        let url =
            Url::parse(rpc_url).map_err(|e| DeployError::ClientInitialization(e.to_string()))?;
        let signer = PrivateKeySigner::from_str(priv_key)
            .map_err(|e| DeployError::ClientInitialization(e.to_string()))?;
        let deployer = signer.address();

        let provider = ProviderBuilder::new().wallet(signer).connect_http(url);

        Ok(Self {
            provider: DynProvider::new(provider),
            deployer,
            confirmations,
        })
    }

    /// The address of the deployer account
    pub fn deployer(&self) -> Address {
        self.deployer
    }
}

impl DeploymentClient for RpcDeployer {
    type Pending = RpcPending;

    async fn submit(&self, factory: &ContractFactory) -> Result<RpcPending, DeployError> {
        let chain_id = self
            .provider
            .get_chain_id()
            .await
            .map_err(|e| DeployError::ContractDeployment(e.to_string()))?;

        // The contract address is derived from the deployer's nonce at submission
        let nonce = self
            .provider
            .get_transaction_count(self.deployer)
            .await
            .map_err(|e| DeployError::ContractDeployment(e.to_string()))?;
        let predicted = self.deployer.create(nonce);

        info!(
            chain_id,
            deployer = %self.deployer,
            nonce,
            %predicted,
            "deploying {}",
            factory.name
        );

        let tx = factory.deploy_tx().with_from(self.deployer);
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| DeployError::ContractDeployment(e.to_string()))?;

        info!(tx_hash = %pending.tx_hash(), "deployment transaction submitted");
        Ok(RpcPending {
            tx: pending,
            predicted,
        })
    }

    async fn confirm(&self, pending: RpcPending) -> Result<Address, DeployError> {
        let RpcPending { tx, predicted } = pending;

        let receipt = tx
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await
            .map_err(|e| DeployError::DeploymentConfirmation(e.to_string()))?;

        if !receipt.status() {
            return Err(DeployError::DeploymentConfirmation(format!(
                "transaction {} reverted",
                receipt.transaction_hash
            )));
        }

        let address = receipt.contract_address.ok_or_else(|| {
            DeployError::DeploymentConfirmation(format!(
                "receipt for {} has no contract address",
                receipt.transaction_hash
            ))
        })?;

        if address != predicted {
            warn!(%predicted, %address, "contract deployed at an unexpected address");
        }

        info!(
            block = receipt.block_number,
            gas_used = receipt.gas_used,
            "deployment confirmed"
        );
        Ok(address)
    }
}
