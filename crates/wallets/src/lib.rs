// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Neo Wallets Library
//!
//! NEP-5 token support for wallets:
//! - [`Nep5Token`], a cached token descriptor that turns token operations
//!   into invocation scripts
//! - [`TestInvoker`] and [`ParameterResolver`], the seams to the wallet's
//!   test-invocation and argument-parsing machinery
//! - [`TokenRecord`], the persisted form of a known token
//! - [`Helper`], script hash / address conversion

pub mod helper;
pub mod invoker;
pub mod nep5_token;
pub mod parameter;
pub mod token_record;

// Re-export main types
pub use helper::Helper;
pub use invoker::{ContractCall, InvocationResult, InvokeError, TestInvocation, TestInvoker};
pub use nep5_token::{Nep5Token, TokenBalance, TokenInfo, TokenState, MAX_DECIMALS};
pub use parameter::{parse_literal, ParameterResolver, StandardResolver};
pub use token_record::TokenRecord;

use neo_core::UInt160;
use num_bigint::BigInt;
use thiserror::Error;

/// Result type for wallet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wallet-related errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Core error: {0}")]
    Core(#[from] neo_core::CoreError),

    #[error("Cryptography error: {0}")]
    Cryptography(#[from] neo_cryptography::Error),

    #[error("Could not decode result: {0}")]
    Vm(#[from] neo_vm::VmError),

    #[error(transparent)]
    Invocation(#[from] InvokeError),

    #[error("Invocation returned no result in slot {0}")]
    MissingResult(usize),

    #[error("Script hash is not set")]
    ScriptHashNotSet,

    #[error("Script hash is already set to {current}")]
    ScriptHashAlreadySet { current: UInt160 },

    #[error("Token has not been queried")]
    NotQueried,

    #[error("Invalid decimals: {0}")]
    InvalidDecimals(BigInt),

    #[error("Balance {0} cannot be represented as a decimal")]
    BalanceOverflow(BigInt),

    #[error("Invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Invalid parameter {reference:?}: {reason}")]
    InvalidParameter { reference: String, reason: String },
}
