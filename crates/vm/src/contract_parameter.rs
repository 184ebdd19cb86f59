// Copyright (C) 2015-2025 The Neo Project.
//
// contract_parameter.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use neo_core::UInt160;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tags of contract parameters, as declared in a contract's parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ContractParameterType {
    /// A signature
    Signature = 0x00,
    /// A boolean
    Boolean = 0x01,
    /// An integer
    Integer = 0x02,
    /// A 160-bit hash
    Hash160 = 0x03,
    /// A 256-bit hash
    Hash256 = 0x04,
    /// A byte array
    ByteArray = 0x05,
    /// A public key
    PublicKey = 0x06,
    /// A UTF-8 string
    String = 0x07,
    /// An array of parameters
    Array = 0x10,
    /// An interop interface
    InteropInterface = 0xF0,
    /// No value
    Void = 0xFF,
}

impl From<ContractParameterType> for u8 {
    fn from(value: ContractParameterType) -> Self {
        value as u8
    }
}

/// A resolved invocation argument.
///
/// `Hash160` keeps the structured address so callers can tell an address
/// apart from arbitrary bytes; [`ContractParameter::into_raw`] lowers it to
/// the byte form the VM actually receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractParameter {
    /// A boolean value
    Boolean(bool),
    /// An arbitrary precision integer
    Integer(BigInt),
    /// An account or contract script hash
    Hash160(UInt160),
    /// Raw bytes
    ByteArray(Vec<u8>),
    /// A UTF-8 string
    String(String),
    /// Nested parameters, packed into an array on the stack
    Array(Vec<ContractParameter>),
}

impl ContractParameter {
    /// Gets the type tag of this parameter.
    pub fn parameter_type(&self) -> ContractParameterType {
        match self {
            ContractParameter::Boolean(_) => ContractParameterType::Boolean,
            ContractParameter::Integer(_) => ContractParameterType::Integer,
            ContractParameter::Hash160(_) => ContractParameterType::Hash160,
            ContractParameter::ByteArray(_) => ContractParameterType::ByteArray,
            ContractParameter::String(_) => ContractParameterType::String,
            ContractParameter::Array(_) => ContractParameterType::Array,
        }
    }

    /// Replaces a structured `Hash160` with its little-endian bytes.
    /// Every other variant is returned unchanged.
    pub fn into_raw(self) -> Self {
        match self {
            ContractParameter::Hash160(hash) => ContractParameter::ByteArray(hash.to_vec()),
            other => other,
        }
    }
}

impl From<UInt160> for ContractParameter {
    fn from(value: UInt160) -> Self {
        ContractParameter::Hash160(value)
    }
}

impl From<BigInt> for ContractParameter {
    fn from(value: BigInt) -> Self {
        ContractParameter::Integer(value)
    }
}

impl From<i64> for ContractParameter {
    fn from(value: i64) -> Self {
        ContractParameter::Integer(BigInt::from(value))
    }
}

impl From<bool> for ContractParameter {
    fn from(value: bool) -> Self {
        ContractParameter::Boolean(value)
    }
}

impl From<&str> for ContractParameter {
    fn from(value: &str) -> Self {
        ContractParameter::String(value.to_string())
    }
}

impl From<Vec<u8>> for ContractParameter {
    fn from(value: Vec<u8>) -> Self {
        ContractParameter::ByteArray(value)
    }
}

impl fmt::Display for ContractParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractParameter::Boolean(b) => write!(f, "{b}"),
            ContractParameter::Integer(i) => write!(f, "{i}"),
            ContractParameter::Hash160(h) => write!(f, "{h}"),
            ContractParameter::ByteArray(bytes) => write!(f, "{}", hex::encode(bytes)),
            ContractParameter::String(s) => write!(f, "{s:?}"),
            ContractParameter::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}
