// Copyright (C) 2015-2025 The Neo Project.
//
// op_code.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

/// Legacy NeoVM opcodes used by invocation scripts.
///
/// `PUSHBYTES1` through `PUSHBYTES75` (0x01..=0x4B) carry their length in the
/// opcode itself and are emitted as raw bytes by the builder.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    // Constants
    PUSH0 = 0x00,
    PUSHBYTES1 = 0x01,
    PUSHBYTES75 = 0x4B,
    PUSHDATA1 = 0x4C,
    PUSHDATA2 = 0x4D,
    PUSHDATA4 = 0x4E,
    PUSHM1 = 0x4F,
    PUSH1 = 0x51,
    PUSH2 = 0x52,
    PUSH3 = 0x53,
    PUSH4 = 0x54,
    PUSH5 = 0x55,
    PUSH6 = 0x56,
    PUSH7 = 0x57,
    PUSH8 = 0x58,
    PUSH9 = 0x59,
    PUSH10 = 0x5A,
    PUSH11 = 0x5B,
    PUSH12 = 0x5C,
    PUSH13 = 0x5D,
    PUSH14 = 0x5E,
    PUSH15 = 0x5F,
    PUSH16 = 0x60,

    // Flow control
    APPCALL = 0x67,

    // Array
    PACK = 0xC1,
}

impl OpCode {
    /// Boolean `false` shares the encoding of `PUSH0`.
    pub const PUSHF: OpCode = OpCode::PUSH0;
    /// Boolean `true` shares the encoding of `PUSH1`.
    pub const PUSHT: OpCode = OpCode::PUSH1;
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> Self {
        op as u8
    }
}
