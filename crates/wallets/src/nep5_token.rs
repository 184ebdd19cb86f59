// Copyright (C) 2015-2025 The Neo Project.
//
// nep5_token.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! NEP-5 token descriptor.
//!
//! Holds the identity of one token contract and translates token operations
//! into invocation requests. Read paths (`query`, `get_balance`) downgrade
//! every failure to a default after logging it; the `try_` variants expose
//! the underlying error. State-changing paths hand the invoker's answer back
//! untouched and propagate its errors.

use crate::helper::Helper;
use crate::invoker::{ContractCall, InvocationResult, TestInvoker};
use crate::parameter::{parse_literal, ParameterResolver};
use crate::token_record::TokenRecord;
use crate::{Error, Result};
use neo_config::ProtocolSettings;
use neo_core::UInt160;
use neo_cryptography::hash160;
use neo_vm::{ContractParameter, ContractParameterType, ScriptBuilder, StackItem};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use once_cell::sync::OnceCell;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::fmt;
use tracing::{debug, error, warn};

/// Largest precision a balance can be scaled to without losing digits.
pub const MAX_DECIMALS: u8 = 28;

/// Identity metadata returned by the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Whether the token's metadata has been fetched.
///
/// The only transition is `Unqueried` to `Queried`, and a queried token
/// never changes again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TokenState {
    #[default]
    Unqueried,
    Queried(TokenInfo),
}

/// A balance as returned by [`Nep5Token::get_balance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenBalance {
    /// Scaled amount
    Amount(Decimal),
    /// Scaled amount rendered with exactly `decimals` fractional digits
    Text(String),
}

impl TokenBalance {
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            TokenBalance::Amount(amount) => Some(*amount),
            TokenBalance::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenBalance::Amount(_) => None,
            TokenBalance::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for TokenBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenBalance::Amount(amount) => write!(f, "{amount}"),
            TokenBalance::Text(text) => f.write_str(text),
        }
    }
}

/// A NEP-5 token contract known to the wallet.
#[derive(Debug, Clone)]
pub struct Nep5Token {
    script: Option<Vec<u8>>,
    script_hash: Option<UInt160>,
    state: TokenState,
    address: OnceCell<String>,
    address_version: u8,
}

impl Nep5Token {
    /// Parameter list of a NEP-5 contract's entry point: operation, arguments.
    pub const PARAMETER_LIST: [ContractParameterType; 2] =
        [ContractParameterType::String, ContractParameterType::Array];

    /// Creates a token from its verification script, if known. The script
    /// hash is derived from the script.
    pub fn new(script: Option<Vec<u8>>) -> Self {
        Self::with_settings(script, &ProtocolSettings::default())
    }

    /// Creates a token whose address uses the version from `settings`.
    pub fn with_settings(script: Option<Vec<u8>>, settings: &ProtocolSettings) -> Self {
        let script_hash = script.as_deref().map(|s| UInt160::from(hash160(s)));
        Self {
            script,
            script_hash,
            state: TokenState::Unqueried,
            address: OnceCell::new(),
            address_version: settings.address_version,
        }
    }

    /// Rebuilds a token from the wallet's registry without invoking anything.
    pub fn from_record(record: &TokenRecord) -> Result<Self> {
        Self::from_record_with_settings(record, &ProtocolSettings::default())
    }

    /// Rebuilds a token from the wallet's registry for a specific network.
    pub fn from_record_with_settings(
        record: &TokenRecord,
        settings: &ProtocolSettings,
    ) -> Result<Self> {
        if record.decimals > MAX_DECIMALS {
            return Err(Error::InvalidDecimals(BigInt::from(record.decimals)));
        }
        // Stored big-endian; parse reverses into script order.
        let hash = UInt160::parse(&record.contract_hash)?;

        let mut token = Self::with_settings(None, settings);
        token.set_script_hash(hash)?;
        token.state = TokenState::Queried(TokenInfo {
            name: record.name.clone(),
            symbol: record.symbol.clone(),
            decimals: record.decimals,
        });
        Ok(token)
    }

    /// Registry form of this token, once both hash and metadata are known.
    pub fn to_record(&self) -> Option<TokenRecord> {
        let hash = self.script_hash?;
        let info = self.info()?;
        Some(TokenRecord {
            contract_hash: hash.to_be_hex(),
            name: info.name.clone(),
            symbol: info.symbol.clone(),
            decimals: info.decimals,
        })
    }

    /// Sets the invocation target. Once set it cannot change; setting the
    /// same hash again is accepted.
    pub fn set_script_hash(&mut self, script_hash: UInt160) -> Result<()> {
        match self.script_hash {
            Some(current) if current == script_hash => Ok(()),
            Some(current) => {
                warn!(%current, requested = %script_hash, "rejected script hash change");
                Err(Error::ScriptHashAlreadySet { current })
            }
            None => {
                self.script_hash = Some(script_hash);
                Ok(())
            }
        }
    }

    pub fn script(&self) -> Option<&[u8]> {
        self.script.as_deref()
    }

    pub fn script_hash(&self) -> Option<UInt160> {
        self.script_hash
    }

    pub fn state(&self) -> &TokenState {
        &self.state
    }

    pub fn is_queried(&self) -> bool {
        matches!(self.state, TokenState::Queried(_))
    }

    pub fn info(&self) -> Option<&TokenInfo> {
        match &self.state {
            TokenState::Queried(info) => Some(info),
            TokenState::Unqueried => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.info().map(|info| info.name.as_str())
    }

    pub fn symbol(&self) -> Option<&str> {
        self.info().map(|info| info.symbol.as_str())
    }

    pub fn decimals(&self) -> Option<u8> {
        self.info().map(|info| info.decimals)
    }

    /// Contract address derived from the script hash. `None` until the hash
    /// is set; computed once.
    pub fn address(&self) -> Option<&str> {
        let hash = self.script_hash?;
        Some(
            self.address
                .get_or_init(|| Helper::to_address(&hash, self.address_version))
                .as_str(),
        )
    }

    /// Fetches `name`, `symbol` and `decimals` unless already known.
    /// Returns `false` if the query failed; the token is left unqueried.
    pub fn query<I: TestInvoker>(&mut self, invoker: &I, wallet: &I::Wallet) -> bool {
        let outcome = self.try_query(invoker, wallet).map(|_| ());
        match outcome {
            Ok(()) => true,
            Err(e) => {
                error!(script_hash = ?self.script_hash, "could not query token: {}", e);
                false
            }
        }
    }

    /// Like [`Nep5Token::query`], reporting why a query failed.
    pub fn try_query<I: TestInvoker>(
        &mut self,
        invoker: &I,
        wallet: &I::Wallet,
    ) -> Result<&TokenInfo> {
        if !self.is_queried() {
            let info = self.fetch_info(invoker, wallet)?;
            self.state = TokenState::Queried(info);
        }
        self.info().ok_or(Error::NotQueried)
    }

    fn fetch_info<I: TestInvoker>(&self, invoker: &I, wallet: &I::Wallet) -> Result<TokenInfo> {
        let hash = self.require_script_hash()?;

        let mut sb = ScriptBuilder::new();
        sb.emit_app_call_with_operation(&hash, "name");
        sb.emit_app_call_with_operation(&hash, "symbol");
        sb.emit_app_call_with_operation(&hash, "decimals");
        let script = sb.into_script();

        debug!(%hash, "querying token metadata");
        let invocation = invoker.test_invoke(&script, wallet, &[], None)?;

        // Decode into locals first so a bad slot leaves the state untouched.
        let name = result_slot(&invocation.results, 0)?.get_string()?;
        let symbol = result_slot(&invocation.results, 1)?.get_string()?;
        let decimals = checked_decimals(result_slot(&invocation.results, 2)?.get_big_integer()?)?;

        Ok(TokenInfo {
            name,
            symbol,
            decimals,
        })
    }

    /// Balance of `address`, scaled by the token's decimals.
    ///
    /// Any failure is logged and reported as a zero balance, so a zero
    /// cannot be told apart from a failed lookup here; use
    /// [`Nep5Token::try_balance_of`] where that matters.
    pub fn get_balance<I: TestInvoker>(
        &self,
        invoker: &I,
        wallet: &I::Wallet,
        address: &str,
        as_string: bool,
    ) -> TokenBalance {
        match self.try_balance_of(invoker, wallet, address) {
            Ok(balance) if as_string => TokenBalance::Text(self.format_amount(balance)),
            Ok(balance) => TokenBalance::Amount(balance),
            Err(e) => {
                error!(address, script_hash = ?self.script_hash, "could not get balance: {}", e);
                self.zero_balance(as_string)
            }
        }
    }

    /// Like [`Nep5Token::get_balance`], reporting why the lookup failed.
    pub fn try_balance_of<I: TestInvoker>(
        &self,
        invoker: &I,
        wallet: &I::Wallet,
        address: &str,
    ) -> Result<Decimal> {
        let hash = self.require_script_hash()?;
        let decimals = self.decimals().ok_or(Error::NotQueried)?;
        // The VM takes the account as raw bytes, not as a structured hash.
        let account = wallet.resolve_param(address)?.into_raw();

        let mut sb = ScriptBuilder::new();
        sb.emit_app_call_with_operation_and_args(&hash, "balanceOf", &[account]);
        let script = sb.into_script();

        debug!(%hash, address, "querying balance");
        let invocation = invoker.test_invoke(&script, wallet, &[], None)?;

        let raw = result_slot(&invocation.results, 0)?.get_big_integer()?;
        scale_balance(&raw, decimals)
    }

    /// Transfers `amount` raw units from `from_addr` to `to_addr`.
    pub fn transfer<I: TestInvoker>(
        &self,
        invoker: &I,
        wallet: &I::Wallet,
        from_addr: &str,
        to_addr: &str,
        amount: &str,
    ) -> Result<InvocationResult<I::Transaction>> {
        let hash = self.require_script_hash()?;
        let args = [
            wallet.resolve_param(from_addr)?,
            wallet.resolve_param(to_addr)?,
            parse_literal(amount),
        ];

        let mut sb = ScriptBuilder::new();
        sb.emit_app_call_with_operation_and_args(&hash, "transfer", &args);
        let script = sb.into_script();

        debug!(%hash, from_addr, to_addr, amount, "test invoking transfer");
        let invocation = invoker.test_invoke(&script, wallet, &[], Some(from_addr))?;
        Ok(invocation.into_result())
    }

    /// Spends an allowance: moves `amount` from `from_addr` to `to_addr`.
    pub fn transfer_from<I: TestInvoker>(
        &self,
        invoker: &I,
        wallet: &I::Wallet,
        from_addr: &str,
        to_addr: &str,
        amount: &str,
    ) -> Result<InvocationResult<I::Transaction>> {
        let args = vec![
            wallet.resolve_param(from_addr)?,
            wallet.resolve_param(to_addr)?,
            parse_literal(amount),
        ];
        let call = self.contract_call("transferFrom", args)?;
        self.invoke_contract(invoker, wallet, &call, None)
    }

    /// Amount `requestor_addr` may still spend on behalf of `owner_addr`.
    pub fn allowance<I: TestInvoker>(
        &self,
        invoker: &I,
        wallet: &I::Wallet,
        owner_addr: &str,
        requestor_addr: &str,
    ) -> Result<InvocationResult<I::Transaction>> {
        let args = vec![
            wallet.resolve_param(owner_addr)?,
            wallet.resolve_param(requestor_addr)?,
        ];
        let call = self.contract_call("allowance", args)?;
        self.invoke_contract(invoker, wallet, &call, None)
    }

    /// Allows `requestor_addr` to spend `amount` on behalf of `owner_addr`.
    pub fn approve<I: TestInvoker>(
        &self,
        invoker: &I,
        wallet: &I::Wallet,
        owner_addr: &str,
        requestor_addr: &str,
        amount: &str,
    ) -> Result<InvocationResult<I::Transaction>> {
        let args = vec![
            wallet.resolve_param(owner_addr)?,
            wallet.resolve_param(requestor_addr)?,
            parse_literal(amount),
        ];
        let call = self.contract_call("approve", args)?;
        self.invoke_contract(invoker, wallet, &call, None)
    }

    /// Calls `mintTokens` with no arguments; `attachment_args` are passed to
    /// the invoker as trailing arguments (asset attachments and the like).
    pub fn mint<I: TestInvoker>(
        &self,
        invoker: &I,
        wallet: &I::Wallet,
        mint_to_addr: &str,
        attachment_args: &[String],
    ) -> Result<InvocationResult<I::Transaction>> {
        let call = self
            .contract_call("mintTokens", Vec::new())?
            .with_attachments(attachment_args.iter().cloned());
        self.invoke_contract(invoker, wallet, &call, Some(mint_to_addr))
    }

    /// Registers `register_addresses` for a crowdsale.
    pub fn crowdsale_register<I: TestInvoker>(
        &self,
        invoker: &I,
        wallet: &I::Wallet,
        register_addresses: &[&str],
    ) -> Result<InvocationResult<I::Transaction>> {
        let args = register_addresses
            .iter()
            .map(|addr| wallet.resolve_param(addr))
            .collect::<Result<Vec<ContractParameter>>>()?;
        let call = self.contract_call("crowdsale_register", args)?;
        self.invoke_contract(invoker, wallet, &call, None)
    }

    /// JSON view with the keys `name`, `symbol`, `decimals`, `script_hash`
    /// and `contract address`. Unknown values are `null`.
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name(),
            "symbol": self.symbol(),
            "decimals": self.decimals(),
            "script_hash": self.script_hash.map(|hash| hash.to_be_hex()),
            "contract address": self.address(),
        })
    }

    fn contract_call(&self, operation: &str, args: Vec<ContractParameter>) -> Result<ContractCall> {
        let hash = self.require_script_hash()?;
        Ok(ContractCall::new(hash.to_be_hex(), operation, args))
    }

    fn invoke_contract<I: TestInvoker>(
        &self,
        invoker: &I,
        wallet: &I::Wallet,
        call: &ContractCall,
        from_addr: Option<&str>,
    ) -> Result<InvocationResult<I::Transaction>> {
        debug!(
            script_hash = %call.script_hash,
            operation = %call.operation,
            args = call.args.len(),
            "test invoking contract"
        );
        let invocation = invoker.test_invoke_contract(wallet, call, from_addr)?;
        Ok(invocation.into_result())
    }

    fn require_script_hash(&self) -> Result<UInt160> {
        self.script_hash.ok_or(Error::ScriptHashNotSet)
    }

    fn format_amount(&self, amount: Decimal) -> String {
        let precision = usize::from(self.decimals().unwrap_or(0));
        format!("{amount:.precision$}")
    }

    fn zero_balance(&self, as_string: bool) -> TokenBalance {
        if !as_string {
            return TokenBalance::Amount(Decimal::ZERO);
        }
        match self.decimals() {
            Some(decimals) => {
                TokenBalance::Text(self.format_amount(Decimal::new(0, decimals.into())))
            }
            None => TokenBalance::Text("0".to_string()),
        }
    }
}

fn result_slot(results: &[StackItem], index: usize) -> Result<&StackItem> {
    results.get(index).ok_or(Error::MissingResult(index))
}

fn checked_decimals(value: BigInt) -> Result<u8> {
    match value.to_u8() {
        Some(decimals) if decimals <= MAX_DECIMALS => Ok(decimals),
        _ => Err(Error::InvalidDecimals(value)),
    }
}

/// `raw / 10^decimals`, exactly.
fn scale_balance(raw: &BigInt, decimals: u8) -> Result<Decimal> {
    let value = raw
        .to_i128()
        .ok_or_else(|| Error::BalanceOverflow(raw.clone()))?;
    Decimal::try_from_i128_with_scale(value, u32::from(decimals))
        .map_err(|_| Error::BalanceOverflow(raw.clone()))
}
