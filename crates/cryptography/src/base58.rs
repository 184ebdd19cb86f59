// Copyright (C) 2015-2025 The Neo Project.
//
// base58.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Base58Check encoding with a 4-byte double-SHA256 checksum.

use crate::hash::hash256;
use crate::{Error, Result};

const CHECKSUM_SIZE: usize = 4;

/// Encodes data with a 4-byte double-SHA256 checksum using Base58Check.
pub fn base58_check_encode(data: &[u8]) -> String {
    let mut payload = Vec::with_capacity(data.len() + CHECKSUM_SIZE);
    payload.extend_from_slice(data);
    let checksum = hash256(data);
    payload.extend_from_slice(&checksum[..CHECKSUM_SIZE]);
    bs58::encode(payload).into_string()
}

/// Decodes a Base58Check string and verifies its checksum.
pub fn base58_check_decode(input: &str) -> Result<Vec<u8>> {
    let bytes = bs58::decode(input)
        .into_vec()
        .map_err(|e| Error::InvalidBase58(e.to_string()))?;

    if bytes.len() < CHECKSUM_SIZE {
        return Err(Error::TooShort(bytes.len()));
    }

    let (payload, checksum) = bytes.split_at(bytes.len() - CHECKSUM_SIZE);
    let expected = hash256(payload);
    if checksum != &expected[..CHECKSUM_SIZE] {
        return Err(Error::InvalidChecksum);
    }

    Ok(payload.to_vec())
}
