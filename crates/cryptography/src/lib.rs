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

//! Neo Cryptography
//!
//! Hash functions and Base58Check encoding used for script hashes and
//! addresses.

pub mod base58;
pub mod hash;

pub use base58::{base58_check_decode, base58_check_encode};
pub use hash::{hash160, hash256, ripemd160, sha256};

use thiserror::Error;

/// Result type for cryptographic operations
pub type Result<T> = std::result::Result<T, Error>;

/// Cryptography-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid Base58 string: {0}")]
    InvalidBase58(String),

    #[error("Invalid Base58Check format: decoded data is {0} bytes, at least 4 required")]
    TooShort(usize),

    #[error("Invalid Base58Check checksum")]
    InvalidChecksum,
}
