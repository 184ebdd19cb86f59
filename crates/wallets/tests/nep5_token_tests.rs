// Copyright (C) 2015-2025 The Neo Project.
//
// nep5_token_tests.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use neo_core::UInt160;
use neo_vm::{ContractParameter, ScriptBuilder, StackItem};
use neo_wallets::{
    ContractCall, Error, Helper, InvokeError, Nep5Token, StandardResolver, TestInvocation,
    TestInvoker, TokenBalance, TokenRecord, TokenState,
};
use num_bigint::BigInt;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::cell::RefCell;

const VERSION: u8 = 0x17;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, PartialEq)]
enum Recorded {
    Script {
        script: Vec<u8>,
        from_addr: Option<String>,
    },
    Contract {
        call: ContractCall,
        from_addr: Option<String>,
    },
}

/// Invoker that records every request and answers with a fixed outcome.
struct FakeInvoker {
    outcome: Result<Vec<StackItem>, InvokeError>,
    calls: RefCell<Vec<Recorded>>,
}

impl FakeInvoker {
    fn returning(results: Vec<StackItem>) -> Self {
        Self {
            outcome: Ok(results),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn failing(err: InvokeError) -> Self {
        Self {
            outcome: Err(err),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Recorded> {
        self.calls.borrow().clone()
    }

    fn answer(&self) -> Result<TestInvocation<String>, InvokeError> {
        self.outcome.clone().map(|results| TestInvocation {
            transaction: "tx".to_string(),
            fee: Decimal::new(1, 3),
            results,
            num_ops: 7,
        })
    }
}

impl TestInvoker for FakeInvoker {
    type Wallet = StandardResolver;
    type Transaction = String;

    fn test_invoke(
        &self,
        script: &[u8],
        _wallet: &StandardResolver,
        _attachments: &[String],
        from_addr: Option<&str>,
    ) -> Result<TestInvocation<String>, InvokeError> {
        self.calls.borrow_mut().push(Recorded::Script {
            script: script.to_vec(),
            from_addr: from_addr.map(str::to_string),
        });
        self.answer()
    }

    fn test_invoke_contract(
        &self,
        _wallet: &StandardResolver,
        call: &ContractCall,
        from_addr: Option<&str>,
    ) -> Result<TestInvocation<String>, InvokeError> {
        self.calls.borrow_mut().push(Recorded::Contract {
            call: call.clone(),
            from_addr: from_addr.map(str::to_string),
        });
        self.answer()
    }
}

fn contract_hash() -> UInt160 {
    UInt160::parse("ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9").unwrap()
}

fn account(byte: u8) -> (UInt160, String) {
    let hash = UInt160::from([byte; 20]);
    let address = Helper::to_address(&hash, VERSION);
    (hash, address)
}

fn unqueried_token() -> Nep5Token {
    let mut token = Nep5Token::new(None);
    token.set_script_hash(contract_hash()).unwrap();
    token
}

fn queried_token(decimals: u8) -> Nep5Token {
    Nep5Token::from_record(&TokenRecord {
        contract_hash: contract_hash().to_be_hex(),
        name: "Red Pulse Token".to_string(),
        symbol: "RPX".to_string(),
        decimals,
    })
    .unwrap()
}

fn metadata_results() -> Vec<StackItem> {
    vec![
        StackItem::from_string("Red Pulse Token"),
        StackItem::from_string("RPX"),
        StackItem::from_int(8),
    ]
}

#[test]
fn test_query_populates_metadata() {
    let invoker = FakeInvoker::returning(metadata_results());
    let wallet = StandardResolver::new(VERSION);
    let mut token = unqueried_token();

    assert!(token.query(&invoker, &wallet));
    assert_eq!(token.name(), Some("Red Pulse Token"));
    assert_eq!(token.symbol(), Some("RPX"));
    assert_eq!(token.decimals(), Some(8));

    let mut sb = ScriptBuilder::new();
    sb.emit_app_call_with_operation(&contract_hash(), "name");
    sb.emit_app_call_with_operation(&contract_hash(), "symbol");
    sb.emit_app_call_with_operation(&contract_hash(), "decimals");
    assert_eq!(
        invoker.calls(),
        vec![Recorded::Script {
            script: sb.into_script(),
            from_addr: None,
        }]
    );
}

#[test]
fn test_query_is_idempotent() {
    let invoker = FakeInvoker::returning(metadata_results());
    let wallet = StandardResolver::new(VERSION);
    let mut token = unqueried_token();

    assert!(token.query(&invoker, &wallet));
    assert!(token.query(&invoker, &wallet));
    assert_eq!(invoker.calls().len(), 1);
}

#[test]
fn test_record_token_never_queries() {
    let invoker = FakeInvoker::returning(Vec::new());
    let wallet = StandardResolver::new(VERSION);
    let mut token = queried_token(8);

    assert!(token.query(&invoker, &wallet));
    assert!(invoker.calls().is_empty());
}

#[test]
fn test_query_failure_leaves_token_unqueried() {
    init_logging();
    let invoker = FakeInvoker::failing(InvokeError::Fault("boom".to_string()));
    let wallet = StandardResolver::new(VERSION);
    let mut token = unqueried_token();

    assert!(!token.query(&invoker, &wallet));
    assert_eq!(token.state(), &TokenState::Unqueried);
    assert!(token.name().is_none());
}

#[test]
fn test_partial_query_result_is_not_applied() {
    let invoker = FakeInvoker::returning(vec![
        StackItem::from_string("Red Pulse Token"),
        StackItem::from_string("RPX"),
    ]);
    let wallet = StandardResolver::new(VERSION);
    let mut token = unqueried_token();

    assert!(matches!(
        token.try_query(&invoker, &wallet),
        Err(Error::MissingResult(2))
    ));
    assert!(token.name().is_none());
    assert!(token.symbol().is_none());
}

#[test]
fn test_query_rejects_out_of_range_decimals() {
    let invoker = FakeInvoker::returning(vec![
        StackItem::from_string("Token"),
        StackItem::from_string("TKN"),
        StackItem::from_int(300),
    ]);
    let wallet = StandardResolver::new(VERSION);
    let mut token = unqueried_token();

    assert!(matches!(
        token.try_query(&invoker, &wallet),
        Err(Error::InvalidDecimals(_))
    ));
    assert!(!token.is_queried());
}

#[test]
fn test_query_without_script_hash_fails() {
    let invoker = FakeInvoker::returning(metadata_results());
    let wallet = StandardResolver::new(VERSION);
    let mut token = Nep5Token::new(None);

    assert!(!token.query(&invoker, &wallet));
    assert!(invoker.calls().is_empty());
}

#[test]
fn test_balance_is_scaled_by_decimals() {
    let invoker = FakeInvoker::returning(vec![StackItem::from_int(150_000_000)]);
    let wallet = StandardResolver::new(VERSION);
    let token = queried_token(8);
    let (holder, address) = account(0x11);

    let balance = token.get_balance(&invoker, &wallet, &address, false);
    assert_eq!(balance, TokenBalance::Amount(Decimal::new(15, 1)));

    let mut sb = ScriptBuilder::new();
    sb.emit_app_call_with_operation_and_args(
        &contract_hash(),
        "balanceOf",
        &[ContractParameter::ByteArray(holder.to_vec())],
    );
    assert_eq!(
        invoker.calls(),
        vec![Recorded::Script {
            script: sb.into_script(),
            from_addr: None,
        }]
    );
}

#[test]
fn test_balance_as_string_keeps_all_decimals() {
    let invoker = FakeInvoker::returning(vec![StackItem::from_int(150)]);
    let wallet = StandardResolver::new(VERSION);
    let token = queried_token(2);
    let (_, address) = account(0x11);

    let balance = token.get_balance(&invoker, &wallet, &address, true);
    assert_eq!(balance, TokenBalance::Text("1.50".to_string()));
    assert_eq!(balance.to_string(), "1.50");
}

#[test]
fn test_balance_from_byte_array_result() {
    // 1000 as signed little-endian bytes
    let invoker = FakeInvoker::returning(vec![StackItem::ByteArray(vec![0xe8, 0x03])]);
    let wallet = StandardResolver::new(VERSION);
    let token = queried_token(0);
    let (_, address) = account(0x11);

    assert_eq!(
        token.try_balance_of(&invoker, &wallet, &address).unwrap(),
        Decimal::from(1000)
    );
}

#[test]
fn test_balance_failure_reports_zero() {
    init_logging();
    let invoker = FakeInvoker::failing(InvokeError::Transport("offline".to_string()));
    let wallet = StandardResolver::new(VERSION);
    let token = queried_token(8);
    let (_, address) = account(0x11);

    assert_eq!(
        token.get_balance(&invoker, &wallet, &address, false),
        TokenBalance::Amount(Decimal::ZERO)
    );
    assert_eq!(
        token.get_balance(&invoker, &wallet, &address, true),
        TokenBalance::Text("0.00000000".to_string())
    );
}

#[test]
fn test_balance_without_decimals_reports_zero() {
    init_logging();
    let invoker = FakeInvoker::returning(vec![StackItem::from_int(5)]);
    let wallet = StandardResolver::new(VERSION);
    let token = unqueried_token();
    let (_, address) = account(0x11);

    assert!(matches!(
        token.try_balance_of(&invoker, &wallet, &address),
        Err(Error::NotQueried)
    ));
    assert_eq!(
        token.get_balance(&invoker, &wallet, &address, true),
        TokenBalance::Text("0".to_string())
    );
    assert!(invoker.calls().is_empty());
}

#[test]
fn test_balance_with_unresolvable_address_does_not_invoke() {
    let invoker = FakeInvoker::returning(vec![StackItem::from_int(5)]);
    let wallet = StandardResolver::new(VERSION);
    let token = queried_token(8);

    assert_eq!(
        token.get_balance(&invoker, &wallet, "", false),
        TokenBalance::Amount(Decimal::ZERO)
    );
    assert!(invoker.calls().is_empty());
}

#[test]
fn test_record_is_written_back_lowercase_without_prefix() {
    let token = Nep5Token::from_record(&TokenRecord {
        contract_hash: "0xECC6B20D3CCAC1EE9EF109AF5A7CDB85706B1DF9".to_string(),
        name: "Red Pulse Token".to_string(),
        symbol: "RPX".to_string(),
        decimals: 8,
    })
    .unwrap();

    assert_eq!(token.script_hash(), Some(contract_hash()));
    assert_eq!(
        token.to_record().unwrap().contract_hash,
        "ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9"
    );
}

#[test]
fn test_record_round_trip_preserves_byte_order() {
    let token = queried_token(8);
    let record = token.to_record().unwrap();

    assert_eq!(record.contract_hash, "ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9");
    assert_eq!(token.script_hash().unwrap().to_array()[0], 0xf9);
    assert_eq!(
        Nep5Token::from_record(&record).unwrap().script_hash(),
        token.script_hash()
    );
}

#[test]
fn test_record_serializes_pascal_case() {
    let record = queried_token(8).to_record().unwrap();
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["ContractHash"], "ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9");
    assert_eq!(value["Decimals"], 8);
}

#[test]
fn test_to_json_has_five_keys() {
    let token = queried_token(8);
    let value = token.to_json();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 5);
    assert_eq!(object["name"], "Red Pulse Token");
    assert_eq!(object["symbol"], "RPX");
    assert_eq!(object["decimals"], 8);
    assert_eq!(
        object["script_hash"],
        "ecc6b20d3ccac1ee9ef109af5a7cdb85706b1df9"
    );
    assert_eq!(
        object["contract address"],
        Helper::to_address(&contract_hash(), VERSION).as_str()
    );
}

#[test]
fn test_to_json_of_unqueried_token_uses_nulls() {
    let value = Nep5Token::new(None).to_json();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 5);
    assert!(object.values().all(|v| v.is_null()));
}

#[test]
fn test_transfer_builds_script_and_pins_sender() {
    let invoker = FakeInvoker::returning(vec![StackItem::Boolean(true)]);
    let wallet = StandardResolver::new(VERSION);
    let token = queried_token(8);
    let (from_hash, from) = account(0x11);
    let (to_hash, to) = account(0x22);

    let result = token
        .transfer(&invoker, &wallet, &from, &to, "100")
        .unwrap();
    assert_eq!(result.transaction, "tx");
    assert_eq!(result.fee, Decimal::new(1, 3));
    assert_eq!(result.results, vec![StackItem::Boolean(true)]);

    let mut sb = ScriptBuilder::new();
    sb.emit_app_call_with_operation_and_args(
        &contract_hash(),
        "transfer",
        &[
            ContractParameter::Hash160(from_hash),
            ContractParameter::Hash160(to_hash),
            ContractParameter::Integer(BigInt::from(100)),
        ],
    );
    assert_eq!(
        invoker.calls(),
        vec![Recorded::Script {
            script: sb.into_script(),
            from_addr: Some(from),
        }]
    );
}

#[test]
fn test_transfer_propagates_invoker_error() {
    let err = InvokeError::Rejected("insufficient funds".to_string());
    let invoker = FakeInvoker::failing(err.clone());
    let wallet = StandardResolver::new(VERSION);
    let token = queried_token(8);
    let (_, from) = account(0x11);
    let (_, to) = account(0x22);

    match token.transfer(&invoker, &wallet, &from, &to, "1") {
        Err(Error::Invocation(e)) => assert_eq!(e, err),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_contract_calls_propagate_invoker_error() {
    init_logging();
    let err = InvokeError::Fault("contract threw".to_string());
    let invoker = FakeInvoker::failing(err.clone());
    let wallet = StandardResolver::new(VERSION);
    let token = queried_token(8);
    let (_, owner) = account(0x11);
    let (_, other) = account(0x22);
    let attachments = vec!["--attach-gas=1".to_string()];

    let outcomes = vec![
        (
            "transferFrom",
            token.transfer_from(&invoker, &wallet, &owner, &other, "3"),
        ),
        (
            "allowance",
            token.allowance(&invoker, &wallet, &owner, &other),
        ),
        (
            "approve",
            token.approve(&invoker, &wallet, &owner, &other, "3"),
        ),
        (
            "mintTokens",
            token.mint(&invoker, &wallet, &owner, &attachments),
        ),
        (
            "crowdsale_register",
            token.crowdsale_register(&invoker, &wallet, &[&owner, &other]),
        ),
    ];

    for (operation, outcome) in outcomes {
        match outcome {
            Err(Error::Invocation(e)) => assert_eq!(e, err, "{operation}"),
            other => panic!("{operation}: unexpected {other:?}"),
        }
    }

    // Every call reached the invoker exactly once, through the contract path.
    let operations: Vec<String> = invoker
        .calls()
        .into_iter()
        .map(|call| match call {
            Recorded::Contract { call, .. } => call.operation,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(
        operations,
        [
            "transferFrom",
            "allowance",
            "approve",
            "mintTokens",
            "crowdsale_register"
        ]
    );
}

#[test]
fn test_transfer_from_argument_order() {
    let invoker = FakeInvoker::returning(Vec::new());
    let wallet = StandardResolver::new(VERSION);
    let token = queried_token(8);
    let (from_hash, from) = account(0x11);
    let (to_hash, to) = account(0x22);

    token
        .transfer_from(&invoker, &wallet, &from, &to, "25")
        .unwrap();
    assert_eq!(
        invoker.calls(),
        vec![Recorded::Contract {
            call: ContractCall::new(
                contract_hash().to_be_hex(),
                "transferFrom",
                vec![
                    ContractParameter::Hash160(from_hash),
                    ContractParameter::Hash160(to_hash),
                    ContractParameter::Integer(BigInt::from(25)),
                ],
            ),
            from_addr: None,
        }]
    );
}

#[test]
fn test_allowance_and_approve_argument_order() {
    let invoker = FakeInvoker::returning(Vec::new());
    let wallet = StandardResolver::new(VERSION);
    let token = queried_token(8);
    let (owner_hash, owner) = account(0x11);
    let (spender_hash, spender) = account(0x22);

    token.allowance(&invoker, &wallet, &owner, &spender).unwrap();
    token
        .approve(&invoker, &wallet, &owner, &spender, "7")
        .unwrap();

    let calls = invoker.calls();
    assert_eq!(calls.len(), 2);
    match &calls[0] {
        Recorded::Contract { call, .. } => {
            assert_eq!(call.operation, "allowance");
            assert_eq!(
                call.args,
                vec![
                    ContractParameter::Hash160(owner_hash),
                    ContractParameter::Hash160(spender_hash),
                ]
            );
        }
        other => panic!("unexpected {other:?}"),
    }
    match &calls[1] {
        Recorded::Contract { call, .. } => {
            assert_eq!(call.operation, "approve");
            assert_eq!(call.args.len(), 3);
            assert_eq!(call.args[2], ContractParameter::Integer(BigInt::from(7)));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_mint_passes_attachments_and_recipient() {
    let invoker = FakeInvoker::returning(Vec::new());
    let wallet = StandardResolver::new(VERSION);
    let token = queried_token(8);
    let (_, recipient) = account(0x33);
    let attachments = vec!["--attach-neo=10".to_string()];

    token
        .mint(&invoker, &wallet, &recipient, &attachments)
        .unwrap();
    assert_eq!(
        invoker.calls(),
        vec![Recorded::Contract {
            call: ContractCall::new(contract_hash().to_be_hex(), "mintTokens", Vec::new())
                .with_attachments(attachments),
            from_addr: Some(recipient),
        }]
    );
}

#[test]
fn test_crowdsale_register_resolves_every_address() {
    let invoker = FakeInvoker::returning(Vec::new());
    let wallet = StandardResolver::new(VERSION);
    let token = queried_token(8);
    let (first_hash, first) = account(0x44);
    let (second_hash, second) = account(0x55);

    token
        .crowdsale_register(&invoker, &wallet, &[&first, &second])
        .unwrap();
    match invoker.calls().as_slice() {
        [Recorded::Contract { call, from_addr }] => {
            assert_eq!(call.operation, "crowdsale_register");
            assert_eq!(
                call.args,
                vec![
                    ContractParameter::Hash160(first_hash),
                    ContractParameter::Hash160(second_hash),
                ]
            );
            assert!(from_addr.is_none());
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_transfer_family_requires_script_hash() {
    let invoker = FakeInvoker::returning(Vec::new());
    let wallet = StandardResolver::new(VERSION);
    let token = Nep5Token::new(None);
    let (_, owner) = account(0x11);

    assert!(matches!(
        token.mint(&invoker, &wallet, &owner, &[]),
        Err(Error::ScriptHashNotSet)
    ));
    assert!(invoker.calls().is_empty());
}

proptest! {
    #[test]
    fn prop_balance_equals_raw_over_power_of_ten(raw in 0i64..i64::MAX, decimals in 0u8..=18) {
        let invoker = FakeInvoker::returning(vec![StackItem::from_int(raw)]);
        let wallet = StandardResolver::new(VERSION);
        let token = queried_token(decimals);
        let (_, address) = account(0x11);

        let balance = token.try_balance_of(&invoker, &wallet, &address).unwrap();
        prop_assert_eq!(balance, Decimal::new(raw, u32::from(decimals)));
    }
}
