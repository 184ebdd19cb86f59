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

//! # Neo Core
//!
//! Fundamental types shared by the NEP-5 token adapter crates.
//!
//! ## Example
//!
//! ```rust
//! use neo_core::UInt160;
//!
//! let hash = UInt160::parse("0xecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9").unwrap();
//! assert_eq!(hash.to_hex_string(), "0xecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9");
//! // Internal storage is little-endian.
//! assert_eq!(hash.to_array()[0], 0xf9);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Core error types
pub mod error;
/// 160-bit unsigned integer implementation
pub mod uint160;

pub use error::{CoreError, CoreResult};
pub use uint160::{UInt160, UINT160_SIZE};
