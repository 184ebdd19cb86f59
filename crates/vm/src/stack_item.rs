// Copyright (C) 2015-2025 The Neo Project.
//
// stack_item.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Stack item implementation for the Neo Virtual Machine.
//!
//! Only the conversions a caller of a test invocation performs on the result
//! stack are provided: bytes, strings, integers and booleans.

use crate::error::{VmError, VmResult};
use num_bigint::BigInt;
use num_traits::Zero;

/// Largest integer encoding accepted by the VM.
pub const MAX_SIZE_FOR_BIG_INTEGER: usize = 32;

/// Represents a value in the Neo VM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackItem {
    /// Represents a boolean value.
    Boolean(bool),

    /// Represents an integer value.
    Integer(BigInt),

    /// Represents a byte array.
    ByteArray(Vec<u8>),

    /// Represents an array of stack items.
    Array(Vec<StackItem>),

    /// Represents a struct of stack items.
    Struct(Vec<StackItem>),

    /// Represents a map of stack items.
    Map(Vec<(StackItem, StackItem)>),

    /// Represents an opaque interop interface, identified by its type name.
    InteropInterface(String),
}

impl StackItem {
    /// Creates an integer stack item.
    pub fn from_int<T: Into<BigInt>>(value: T) -> Self {
        StackItem::Integer(value.into())
    }

    /// Creates a byte array stack item holding UTF-8 text.
    pub fn from_string(value: &str) -> Self {
        StackItem::ByteArray(value.as_bytes().to_vec())
    }

    /// Name of the item's type, used in conversion errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            StackItem::Boolean(_) => "Boolean",
            StackItem::Integer(_) => "Integer",
            StackItem::ByteArray(_) => "ByteArray",
            StackItem::Array(_) => "Array",
            StackItem::Struct(_) => "Struct",
            StackItem::Map(_) => "Map",
            StackItem::InteropInterface(_) => "InteropInterface",
        }
    }

    /// Gets the byte representation of a primitive item.
    pub fn get_byte_array(&self) -> VmResult<Vec<u8>> {
        match self {
            StackItem::Boolean(true) => Ok(vec![1]),
            StackItem::Boolean(false) => Ok(vec![]),
            StackItem::Integer(i) => {
                if i.is_zero() {
                    Ok(vec![])
                } else {
                    Ok(i.to_signed_bytes_le())
                }
            }
            StackItem::ByteArray(bytes) => Ok(bytes.clone()),
            other => Err(VmError::InvalidType {
                expected: "ByteArray",
                found: other.type_name(),
            }),
        }
    }

    /// Interprets the item's bytes as a UTF-8 string.
    pub fn get_string(&self) -> VmResult<String> {
        let bytes = self.get_byte_array()?;
        String::from_utf8(bytes).map_err(|e| VmError::InvalidUtf8(e.to_string()))
    }

    /// Interprets the item as a little-endian two's complement integer.
    pub fn get_big_integer(&self) -> VmResult<BigInt> {
        match self {
            StackItem::Integer(i) => Ok(i.clone()),
            StackItem::Boolean(b) => Ok(BigInt::from(u8::from(*b))),
            StackItem::ByteArray(bytes) => {
                if bytes.len() > MAX_SIZE_FOR_BIG_INTEGER {
                    return Err(VmError::IntegerTooLarge(bytes.len()));
                }
                Ok(BigInt::from_signed_bytes_le(bytes))
            }
            other => Err(VmError::InvalidType {
                expected: "Integer",
                found: other.type_name(),
            }),
        }
    }

    /// Interprets the item as a boolean.
    pub fn get_boolean(&self) -> VmResult<bool> {
        match self {
            StackItem::Boolean(b) => Ok(*b),
            StackItem::Integer(i) => Ok(!i.is_zero()),
            StackItem::ByteArray(bytes) => Ok(bytes.iter().any(|b| *b != 0)),
            StackItem::Array(_) | StackItem::Struct(_) | StackItem::Map(_) => Ok(true),
            StackItem::InteropInterface(_) => Ok(true),
        }
    }
}

impl From<bool> for StackItem {
    fn from(value: bool) -> Self {
        StackItem::Boolean(value)
    }
}

impl From<BigInt> for StackItem {
    fn from(value: BigInt) -> Self {
        StackItem::Integer(value)
    }
}

impl From<Vec<u8>> for StackItem {
    fn from(value: Vec<u8>) -> Self {
        StackItem::ByteArray(value)
    }
}
