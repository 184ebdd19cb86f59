// Copyright (C) 2015-2025 The Neo Project.
//
// helper.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::{Error, Result};
use neo_core::{UInt160, UINT160_SIZE};
use neo_cryptography::{base58_check_decode, base58_check_encode};

/// A helper class related to wallets.
pub struct Helper;

impl Helper {
    /// Converts the specified script hash to an address.
    pub fn to_address(script_hash: &UInt160, version: u8) -> String {
        let mut data = Vec::with_capacity(UINT160_SIZE + 1);
        data.push(version);
        data.extend_from_slice(&script_hash.to_array());
        base58_check_encode(&data)
    }

    /// Converts the specified address to a script hash.
    pub fn to_script_hash(address: &str, version: u8) -> Result<UInt160> {
        let data = base58_check_decode(address)?;
        if data.len() != UINT160_SIZE + 1 {
            return Err(Error::InvalidAddress {
                address: address.to_string(),
                reason: format!(
                    "expected {} bytes after Base58Check decoding, got {}",
                    UINT160_SIZE + 1,
                    data.len()
                ),
            });
        }
        if data[0] != version {
            return Err(Error::InvalidAddress {
                address: address.to_string(),
                reason: format!("expected version {}, got {}", version, data[0]),
            });
        }
        Ok(UInt160::from_bytes(&data[1..])?)
    }
}
