//! # neo-nep5: NEP-5 tokens for Neo wallets
//!
//! A wallet-side descriptor for NEP-5 token contracts on the legacy Neo
//! network. A [`Nep5Token`](wallets::Nep5Token) knows its contract's script
//! hash, caches the contract's `name`, `symbol` and `decimals`, and turns
//! balance lookups and transfers into invocation scripts for a
//! [`TestInvoker`](wallets::TestInvoker) supplied by the wallet.
//!
//! ## Quick Start
//!
//! ```rust
//! use neo_nep5::prelude::*;
//!
//! let record = TokenRecord {
//!     contract_hash: "ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9".to_string(),
//!     name: "Red Pulse Token".to_string(),
//!     symbol: "RPX".to_string(),
//!     decimals: 8,
//! };
//! let token = Nep5Token::from_record(&record)?;
//!
//! assert!(token.is_queried());
//! assert!(token.address().unwrap().starts_with('A'));
//! assert_eq!(token.to_record(), Some(record));
//! # Ok::<(), neo_nep5::wallets::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`neo_core`] - `UInt160` script hashes
//! - [`neo_cryptography`] - hash160 / hash256 and Base58Check
//! - [`neo_config`] - network and address version settings
//! - [`neo_vm`] - script builder, contract parameters and stack items
//! - [`neo_wallets`] - the token descriptor and its invocation seam

#![doc(html_root_url = "https://docs.rs/neo-nep5/0.4.0")]

pub use neo_config as config;
pub use neo_core as core;
pub use neo_cryptography as crypto;
pub use neo_vm as vm;
pub use neo_wallets as wallets;

/// Common imports for wallet code working with NEP-5 tokens.
pub mod prelude {
    pub use crate::config::{NetworkType, ProtocolSettings};
    pub use crate::core::UInt160;
    pub use crate::vm::{ContractParameter, ScriptBuilder, StackItem};
    pub use crate::wallets::{
        ContractCall, Helper, InvocationResult, InvokeError, Nep5Token, ParameterResolver,
        StandardResolver, TestInvocation, TestInvoker, TokenBalance, TokenInfo, TokenRecord,
        TokenState,
    };
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
