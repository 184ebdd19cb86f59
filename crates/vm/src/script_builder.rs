// Copyright (C) 2015-2025 The Neo Project.
//
// script_builder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Script builder module for the Neo Virtual Machine.
//!
//! Produces the invocation scripts a wallet sends to a contract: arguments
//! are pushed in reverse, packed into an array, followed by the operation
//! name and an `APPCALL` to the contract's script hash.

use crate::contract_parameter::ContractParameter;
use crate::op_code::OpCode;
use neo_core::UInt160;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Helps construct VM scripts programmatically.
#[derive(Debug, Default, Clone)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    /// Creates a new script builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bytes emitted so far.
    pub fn len(&self) -> usize {
        self.script.len()
    }

    /// Whether nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Emits a single byte to the script.
    pub fn emit(&mut self, op: u8) -> &mut Self {
        self.script.push(op);
        self
    }

    /// Emits an opcode to the script.
    pub fn emit_opcode(&mut self, op: OpCode) -> &mut Self {
        self.script.push(op as u8);
        self
    }

    /// Emits a push operation with the given data.
    pub fn emit_push(&mut self, data: &[u8]) -> &mut Self {
        let len = data.len();

        if len <= OpCode::PUSHBYTES75 as usize {
            // PUSHBYTES0..PUSHBYTES75 carry the length in the opcode
            self.emit(len as u8);
        } else if len <= 0xFF {
            self.emit_opcode(OpCode::PUSHDATA1);
            self.emit(len as u8);
        } else if len <= 0xFFFF {
            self.emit_opcode(OpCode::PUSHDATA2);
            self.script.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.emit_opcode(OpCode::PUSHDATA4);
            self.script.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.script.extend_from_slice(data);

        self
    }

    /// Emits a push operation for an integer.
    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        self.emit_push_integer(&BigInt::from(value))
    }

    /// Emits a push operation for an arbitrary precision integer.
    pub fn emit_push_integer(&mut self, value: &BigInt) -> &mut Self {
        match value.to_i64() {
            Some(-1) => self.emit_opcode(OpCode::PUSHM1),
            Some(0) => self.emit_opcode(OpCode::PUSH0),
            Some(small @ 1..=16) => self.emit(OpCode::PUSH1 as u8 - 1 + small as u8),
            _ => self.emit_push(&value.to_signed_bytes_le()),
        }
    }

    /// Emits a push operation for a boolean.
    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        if value {
            self.emit_opcode(OpCode::PUSHT)
        } else {
            self.emit_opcode(OpCode::PUSHF)
        }
    }

    /// Emits a push operation for a string.
    pub fn emit_push_string(&mut self, value: &str) -> &mut Self {
        self.emit_push(value.as_bytes())
    }

    /// Emits a push operation for a contract parameter.
    pub fn emit_push_parameter(&mut self, param: &ContractParameter) -> &mut Self {
        match param {
            ContractParameter::Boolean(b) => self.emit_push_bool(*b),
            ContractParameter::Integer(i) => self.emit_push_integer(i),
            ContractParameter::Hash160(hash) => self.emit_push(&hash.to_array()),
            ContractParameter::ByteArray(bytes) => self.emit_push(bytes),
            ContractParameter::String(s) => self.emit_push_string(s),
            ContractParameter::Array(items) => self.emit_push_array(items),
        }
    }

    /// Pushes the items in reverse order followed by their count and `PACK`.
    pub fn emit_push_array(&mut self, items: &[ContractParameter]) -> &mut Self {
        for item in items.iter().rev() {
            self.emit_push_parameter(item);
        }
        self.emit_push_int(items.len() as i64);
        self.emit_opcode(OpCode::PACK)
    }

    /// Emits an `APPCALL` to the given script hash.
    pub fn emit_app_call(&mut self, script_hash: &UInt160) -> &mut Self {
        self.emit_opcode(OpCode::APPCALL);
        self.script.extend_from_slice(&script_hash.to_array());
        self
    }

    /// Calls `operation` on the contract without arguments.
    pub fn emit_app_call_with_operation(
        &mut self,
        script_hash: &UInt160,
        operation: &str,
    ) -> &mut Self {
        self.emit_push_bool(false);
        self.emit_push_string(operation);
        self.emit_app_call(script_hash)
    }

    /// Calls `operation` on the contract with the given arguments.
    pub fn emit_app_call_with_operation_and_args(
        &mut self,
        script_hash: &UInt160,
        operation: &str,
        args: &[ContractParameter],
    ) -> &mut Self {
        self.emit_push_array(args);
        self.emit_push_string(operation);
        self.emit_app_call(script_hash)
    }

    /// Converts the builder to a byte array.
    pub fn to_array(&self) -> Vec<u8> {
        self.script.clone()
    }

    /// Consumes the builder and returns the script.
    pub fn into_script(self) -> Vec<u8> {
        self.script
    }
}
