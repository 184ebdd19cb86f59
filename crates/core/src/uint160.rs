// Copyright (C) 2015-2025 The Neo Project.
//
// uint160.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Implementation of `UInt160`, the 160-bit identifier of accounts and contracts.

use crate::error::{CoreError, CoreResult};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The length of `UInt160` values in bytes.
pub const UINT160_SIZE: usize = 20;

/// Represents a 160-bit unsigned integer.
///
/// Bytes are held little-endian, the order used inside scripts. The textual
/// form is big-endian hex, so parsing and formatting both reverse the bytes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UInt160 {
    data: [u8; UINT160_SIZE],
}

impl UInt160 {
    /// Alias matching C# `UInt160.Length`.
    pub const LENGTH: usize = UINT160_SIZE;

    /// Represents 0.
    pub const ZERO: Self = Self {
        data: [0; UINT160_SIZE],
    };

    /// Returns a zero `UInt160`.
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Checks if this `UInt160` is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|b| *b == 0)
    }

    /// Creates a new `UInt160` from little-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidLength` if the input is not exactly 20 bytes.
    pub fn from_bytes(value: &[u8]) -> CoreResult<Self> {
        if value.len() != UINT160_SIZE {
            return Err(CoreError::InvalidLength {
                expected: UINT160_SIZE,
                actual: value.len(),
            });
        }
        let mut data = [0u8; UINT160_SIZE];
        data.copy_from_slice(value);
        Ok(Self { data })
    }

    /// Creates a new `UInt160` from big-endian bytes, reversing them into
    /// the internal order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidLength` if the input is not exactly 20 bytes.
    pub fn from_be_bytes(value: &[u8]) -> CoreResult<Self> {
        let mut result = Self::from_bytes(value)?;
        result.data.reverse();
        Ok(result)
    }

    /// Gets the little-endian byte array.
    #[inline]
    #[must_use]
    pub fn to_array(&self) -> [u8; UINT160_SIZE] {
        self.data
    }

    /// Gets the little-endian bytes as a `Vec<u8>`.
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// Gets the big-endian byte array.
    #[must_use]
    pub fn to_be_array(&self) -> [u8; UINT160_SIZE] {
        let mut bytes = self.data;
        bytes.reverse();
        bytes
    }

    /// Parses a `UInt160` from big-endian hex, with or without a `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFormat` if the input is not 40 hex digits.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if s.len() != UINT160_SIZE * 2 {
            return Err(CoreError::InvalidFormat {
                message: format!("expected {} hex digits, got {}", UINT160_SIZE * 2, s.len()),
            });
        }

        let mut data = [0u8; UINT160_SIZE];
        hex::decode_to_slice(s, &mut data).map_err(|e| CoreError::InvalidFormat {
            message: e.to_string(),
        })?;
        data.reverse();
        Ok(Self { data })
    }

    /// Big-endian hex without prefix, the form persisted by wallets.
    #[must_use]
    pub fn to_be_hex(&self) -> String {
        hex::encode(self.to_be_array())
    }

    /// Big-endian hex with the `0x` prefix.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("0x{}", self.to_be_hex())
    }
}

impl FromStr for UInt160 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt160({})", self.to_hex_string())
    }
}

impl PartialOrd for UInt160 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UInt160 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Most significant byte is last.
        self.data.iter().rev().cmp(other.data.iter().rev())
    }
}

impl From<[u8; UINT160_SIZE]> for UInt160 {
    fn from(data: [u8; UINT160_SIZE]) -> Self {
        Self { data }
    }
}

impl From<UInt160> for [u8; UINT160_SIZE] {
    fn from(value: UInt160) -> Self {
        value.data
    }
}

impl AsRef<[u8]> for UInt160 {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Serialize for UInt160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt160 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
