// Copyright (C) 2015-2025 The Neo Project.
//
// invoker.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Test-invocation seam.
//!
//! A test invocation runs a script against current chain state without
//! committing anything. The wallet owns the machinery (fee calculation,
//! transaction assembly, the VM itself); token code only builds requests and
//! reads results.

use crate::parameter::ParameterResolver;
use neo_vm::{ContractParameter, StackItem};
use rust_decimal::Decimal;
use thiserror::Error;

/// Failure reported by a [`TestInvoker`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvokeError {
    #[error("VM fault: {0}")]
    Fault(String),

    #[error("Invocation rejected: {0}")]
    Rejected(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Everything a test invocation produces.
#[derive(Debug, Clone, PartialEq)]
pub struct TestInvocation<T> {
    /// Transaction that would carry the script
    pub transaction: T,
    /// Fee the transaction would pay
    pub fee: Decimal,
    /// Result stack, first pushed item first
    pub results: Vec<StackItem>,
    /// Number of operations executed
    pub num_ops: usize,
}

impl<T> TestInvocation<T> {
    /// Drops the operation count, keeping what callers of the token API see.
    pub fn into_result(self) -> InvocationResult<T> {
        InvocationResult {
            transaction: self.transaction,
            fee: self.fee,
            results: self.results,
        }
    }
}

/// The `(transaction, fee, results)` triple returned by state-changing
/// token operations.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationResult<T> {
    /// Transaction that would carry the script
    pub transaction: T,
    /// Fee the transaction would pay
    pub fee: Decimal,
    /// Result stack
    pub results: Vec<StackItem>,
}

impl<T> From<TestInvocation<T>> for InvocationResult<T> {
    fn from(invocation: TestInvocation<T>) -> Self {
        invocation.into_result()
    }
}

/// A contract call described by its arguments rather than a script; the
/// invoker assembles the script itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    /// Big-endian hex of the contract's script hash
    pub script_hash: String,
    /// Operation name
    pub operation: String,
    /// Operation arguments, in call order
    pub args: Vec<ContractParameter>,
    /// Trailing invoker arguments, such as asset attachments
    pub attachments: Vec<String>,
}

impl ContractCall {
    /// Creates a call without attachments.
    pub fn new(
        script_hash: impl Into<String>,
        operation: impl Into<String>,
        args: Vec<ContractParameter>,
    ) -> Self {
        Self {
            script_hash: script_hash.into(),
            operation: operation.into(),
            args,
            attachments: Vec::new(),
        }
    }

    /// Appends trailing invoker arguments.
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = String>) -> Self {
        self.attachments.extend(attachments);
        self
    }
}

/// Executes scripts against chain state on behalf of a wallet.
pub trait TestInvoker {
    /// Wallet context; also resolves address references.
    type Wallet: ParameterResolver + ?Sized;
    /// Transaction type produced by the wallet.
    type Transaction;

    /// Runs a prebuilt script. `from_addr` pins the account that pays fees
    /// and signs.
    fn test_invoke(
        &self,
        script: &[u8],
        wallet: &Self::Wallet,
        attachments: &[String],
        from_addr: Option<&str>,
    ) -> Result<TestInvocation<Self::Transaction>, InvokeError>;

    /// Builds and runs the script for `call`.
    fn test_invoke_contract(
        &self,
        wallet: &Self::Wallet,
        call: &ContractCall,
        from_addr: Option<&str>,
    ) -> Result<TestInvocation<Self::Transaction>, InvokeError>;
}
