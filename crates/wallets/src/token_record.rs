// Copyright (C) 2015-2025 The Neo Project.
//
// token_record.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// A token as stored in the wallet's token registry.
///
/// `ContractHash` is big-endian hex, the reverse of the in-memory byte order.
/// Loading accepts either case and an optional `0x` prefix; a token writes
/// its record back as lowercase hex without a prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TokenRecord {
    pub contract_hash: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}
