//! Reading and writing contract addresses in a `deployments.json` file

use std::{fs, path::Path, str::FromStr};

use alloy::primitives::Address;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Serializer, Value};

use crate::{
    constants::{DEPLOYMENTS_INDENT, DEPLOYMENTS_KEY},
    errors::DeployError,
};

/// Read the recorded address of a contract, if any.
///
/// A missing file holds no deployments. A file that could not be written
/// back with a new entry is rejected here as well.
pub fn read_deployment(
    file_path: &Path,
    contract_key: &str,
) -> Result<Option<Address>, DeployError> {
    if !file_path.exists() {
        return Ok(None);
    }

    let mut parsed_json = read_json(file_path)?;
    let deployments =
        deployments_map(&mut parsed_json, file_path).map_err(DeployError::ReadDeployments)?;
    let Some(addr) = deployments.get(contract_key) else {
        return Ok(None);
    };

    let addr_str = addr.as_str().ok_or_else(|| {
        DeployError::ReadDeployments(format!("address of {contract_key} is not a string"))
    })?;
    Address::from_str(addr_str)
        .map(Some)
        .map_err(|e| DeployError::ReadDeployments(format!("{addr_str}: {e}")))
}

/// Record the address of a deployed contract, creating the file if it
/// doesn't exist and keeping every other entry
pub fn write_deployed_address(
    file_path: &Path,
    contract_key: &str,
    address: Address,
) -> Result<(), DeployError> {
    let mut parsed_json = if file_path.exists() {
        read_json(file_path)?
    } else {
        Value::Object(Map::new())
    };

    let deployments =
        deployments_map(&mut parsed_json, file_path).map_err(DeployError::WriteDeployments)?;
    deployments.insert(contract_key.to_string(), Value::String(address.to_string()));

    let mut buf = Vec::new();
    let mut ser =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(DEPLOYMENTS_INDENT));
    parsed_json
        .serialize(&mut ser)
        .map_err(|e| DeployError::WriteDeployments(e.to_string()))?;
    buf.push(b'\n');

    fs::write(file_path, buf).map_err(|e| DeployError::WriteDeployments(e.to_string()))
}

/// The `deployments` object of a parsed deployments file, inserted if absent
fn deployments_map<'a>(
    parsed_json: &'a mut Value,
    file_path: &Path,
) -> Result<&'a mut Map<String, Value>, String> {
    parsed_json
        .as_object_mut()
        .ok_or_else(|| format!("{} is not a JSON object", file_path.display()))?
        .entry(DEPLOYMENTS_KEY)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| format!("`{DEPLOYMENTS_KEY}` is not a JSON object"))
}

/// Parse the JSON contents of a file
fn read_json(file_path: &Path) -> Result<Value, DeployError> {
    let contents = fs::read_to_string(file_path)
        .map_err(|e| DeployError::ReadDeployments(format!("{}: {}", file_path.display(), e)))?;

    serde_json::from_str(&contents).map_err(|e| DeployError::ReadDeployments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use alloy::primitives::address;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    use crate::errors::DeployError;

    use super::{read_deployment, write_deployed_address};

    #[test]
    fn test_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deployments.json");
        let addr = address!("5FbDB2315678afecb367f032d93F642f64180aa3");

        write_deployed_address(&path, "WarrantyNFT", addr).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            written,
            json!({ "deployments": { "WarrantyNFT": "0x5FbDB2315678afecb367f032d93F642f64180aa3" } })
        );
        assert_eq!(read_deployment(&path, "WarrantyNFT").unwrap(), Some(addr));
    }

    #[test]
    fn test_write_keeps_other_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deployments.json");
        fs::write(
            &path,
            r#"{ "network": "devnet", "deployments": { "Registry": "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512" } }"#,
        )
        .unwrap();

        let addr = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
        write_deployed_address(&path, "WarrantyNFT", addr).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["network"], "devnet");
        assert_eq!(
            written["deployments"]["Registry"],
            "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512"
        );
        assert_eq!(read_deployment(&path, "WarrantyNFT").unwrap(), Some(addr));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deployments.json");
        assert_eq!(read_deployment(&path, "WarrantyNFT").unwrap(), None);
    }

    #[test]
    fn test_read_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deployments.json");
        fs::write(&path, "not json").unwrap();

        let res = read_deployment(&path, "WarrantyNFT");
        assert!(matches!(res, Err(DeployError::ReadDeployments(_))));
    }

    #[test]
    fn test_read_rejects_unwritable_shapes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deployments.json");

        for contents in ["[]", r#"{ "deployments": "x" }"#] {
            fs::write(&path, contents).unwrap();
            let res = read_deployment(&path, "WarrantyNFT");
            assert!(matches!(res, Err(DeployError::ReadDeployments(_))), "{contents}");
        }
    }

    #[test]
    fn test_read_without_deployments_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deployments.json");
        fs::write(&path, r#"{ "network": "devnet" }"#).unwrap();

        assert_eq!(read_deployment(&path, "WarrantyNFT").unwrap(), None);
    }

    #[test]
    fn test_write_into_non_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deployments.json");
        fs::write(&path, "[]").unwrap();

        let addr = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
        let res = write_deployed_address(&path, "WarrantyNFT", addr);
        assert!(matches!(res, Err(DeployError::WriteDeployments(_))));
    }
}
