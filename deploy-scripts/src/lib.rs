//! A script deploying a compiled contract to an EVM chain and reporting its address.

#![deny(missing_docs)]
#![cfg_attr(not(test), deny(clippy::missing_docs_in_private_items))]

pub mod artifacts;
pub mod cli;
pub mod client;
pub mod commands;
pub mod constants;
pub mod deployments;
pub mod errors;
