//! Helpers shared by the process-level tests

#![allow(dead_code)]

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

/// The first default account of an Anvil node
pub const DEVNET_PKEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Creation code for a contract whose runtime code returns 42
pub const RETURN_42_BYTECODE: &str = "0x600a600c600039600a6000f3602a60005260206000f3";

/// Creation code which reverts immediately
pub const REVERTING_BYTECODE: &str = "0x60006000fd";

/// Write a Hardhat-layout artifact for `name` under `root`
pub fn write_artifact(root: &Path, name: &str, bytecode: &str) {
    let dir = root.join("contracts").join(format!("{name}.sol"));
    fs::create_dir_all(&dir).unwrap();

    let artifact = format!(
        r#"{{ "contractName": "{name}", "abi": [], "bytecode": "{bytecode}" }}"#
    );
    fs::write(dir.join(format!("{name}.json")), artifact).unwrap();
}

/// Run the deploy binary with the given arguments and a clean environment
pub fn run_deploy(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_deploy"))
        .args(args)
        .env_remove("RPC_URL")
        .env_remove("PKEY")
        .env_remove("ARTIFACTS_DIR")
        .output()
        .unwrap()
}
