// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use thiserror::Error;

/// Result type for VM operations.
pub type VmResult<T> = std::result::Result<T, VmError>;

/// Errors raised while decoding stack items.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VmError {
    /// A stack item could not be converted to the requested type.
    #[error("Cannot convert {found} to {expected}")]
    InvalidType {
        /// Requested type
        expected: &'static str,
        /// Type of the item on the stack
        found: &'static str,
    },

    /// Integer encodings are limited to 32 bytes.
    #[error("Integer encoding of {0} bytes exceeds the 32-byte limit")]
    IntegerTooLarge(usize),

    /// Byte string is not valid UTF-8.
    #[error("Invalid UTF-8 string: {0}")]
    InvalidUtf8(String),
}
