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

//! # Neo VM script support
//!
//! The parts of the legacy Neo virtual machine a wallet needs without
//! executing anything: building invocation scripts and decoding the stack
//! items a test invocation returns.
//!
//! ## Example
//!
//! ```rust
//! use neo_core::UInt160;
//! use neo_vm::{OpCode, ScriptBuilder};
//!
//! let contract = UInt160::zero();
//! let mut sb = ScriptBuilder::new();
//! sb.emit_app_call_with_operation(&contract, "symbol");
//! let script = sb.to_array();
//!
//! assert_eq!(script[0], OpCode::PUSH0 as u8);
//! assert_eq!(script[script.len() - 21], OpCode::APPCALL as u8);
//! ```

#![warn(missing_docs)]

/// Contract parameters pushed as invocation arguments
pub mod contract_parameter;
/// VM error types
pub mod error;
/// Opcodes emitted by the script builder
pub mod op_code;
/// Invocation script builder
pub mod script_builder;
/// Values returned on the result stack
pub mod stack_item;

pub use contract_parameter::{ContractParameter, ContractParameterType};
pub use error::{VmError, VmResult};
pub use op_code::OpCode;
pub use script_builder::ScriptBuilder;
pub use stack_item::StackItem;
