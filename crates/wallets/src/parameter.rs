// Copyright (C) 2015-2025 The Neo Project.
//
// parameter.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Resolution of user-supplied references into contract parameters.

use crate::helper::Helper;
use crate::{Error, Result};
use neo_config::ProtocolSettings;
use neo_core::{UInt160, UINT160_SIZE};
use neo_vm::ContractParameter;
use num_bigint::BigInt;
use std::str::FromStr;

/// Turns a loosely-typed reference (an address, an alias, a literal) into a
/// parameter that can be pushed as an invocation argument.
///
/// Wallets implement this to resolve their own accounts and contacts.
pub trait ParameterResolver {
    /// Resolves `reference` against this wallet.
    fn resolve_param(&self, reference: &str) -> Result<ContractParameter>;
}

/// Resolver for wallets with no aliases: Base58 addresses of the configured
/// version become `Hash160`, everything else goes through [`parse_literal`].
///
/// Any 34-character string over the Base58 alphabet is taken to be an
/// address. If it fails to decode (bad checksum, wrong version) resolution
/// fails instead of passing the text on as a string argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardResolver {
    address_version: u8,
}

impl StandardResolver {
    /// Creates a resolver for addresses of the given version.
    pub fn new(address_version: u8) -> Self {
        Self { address_version }
    }

    /// Creates a resolver for the network described by `settings`.
    pub fn from_settings(settings: &ProtocolSettings) -> Self {
        Self::new(settings.address_version)
    }

    /// Address version this resolver accepts.
    pub fn address_version(&self) -> u8 {
        self.address_version
    }
}

impl Default for StandardResolver {
    fn default() -> Self {
        Self::from_settings(&ProtocolSettings::default())
    }
}

impl ParameterResolver for StandardResolver {
    fn resolve_param(&self, reference: &str) -> Result<ContractParameter> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(Error::InvalidParameter {
                reference: reference.to_string(),
                reason: "empty reference".to_string(),
            });
        }
        if looks_like_address(reference) {
            return Helper::to_script_hash(reference, self.address_version)
                .map(ContractParameter::Hash160);
        }
        Ok(parse_literal(reference))
    }
}

/// Parses a literal argument without consulting any wallet.
///
/// * `true` / `false` become booleans
/// * decimal integers become integers
/// * `0x` followed by 40 hex digits is a big-endian script hash
/// * `0x` followed by other even-length hex is raw bytes
/// * quoted text has its quotes removed
/// * anything else is passed as a string
pub fn parse_literal(reference: &str) -> ContractParameter {
    let reference = reference.trim();

    if reference.eq_ignore_ascii_case("true") {
        return ContractParameter::Boolean(true);
    }
    if reference.eq_ignore_ascii_case("false") {
        return ContractParameter::Boolean(false);
    }
    if let Ok(value) = BigInt::from_str(reference) {
        return ContractParameter::Integer(value);
    }
    if let Some(digits) = reference.strip_prefix("0x") {
        if digits.len() == UINT160_SIZE * 2 {
            if let Ok(hash) = UInt160::parse(digits) {
                return ContractParameter::Hash160(hash);
            }
        }
        if let Ok(bytes) = hex::decode(digits) {
            return ContractParameter::ByteArray(bytes);
        }
    }
    for quote in ['"', '\''] {
        if reference.len() >= 2 && reference.starts_with(quote) && reference.ends_with(quote) {
            return ContractParameter::String(reference[1..reference.len() - 1].to_string());
        }
    }
    ContractParameter::String(reference.to_string())
}

/// Base58 addresses are 34 characters from the Bitcoin alphabet.
fn looks_like_address(reference: &str) -> bool {
    reference.len() == 34
        && reference
            .chars()
            .all(|c| c.is_ascii_alphanumeric() && !matches!(c, '0' | 'O' | 'I' | 'l'))
}
