//! Request and response records for the endpoints wrapped by this crate.
//!
//! Field names follow the API's PascalCase JSON. Every response record
//! implements `Default`, which is what a 204 response yields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies accepted by the API.
///
/// Currency-dependent calls take this enum, so an unspecified or unknown
/// currency cannot reach the request builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyIso {
    Aud,
    Cad,
    Chf,
    Czk,
    Dkk,
    Eur,
    Gbp,
    Hkd,
    Huf,
    Jpy,
    Nok,
    Pln,
    Ron,
    Sek,
    Usd,
    Zar,
}

impl CurrencyIso {
    /// The ISO 4217 code.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyIso::Aud => "AUD",
            CurrencyIso::Cad => "CAD",
            CurrencyIso::Chf => "CHF",
            CurrencyIso::Czk => "CZK",
            CurrencyIso::Dkk => "DKK",
            CurrencyIso::Eur => "EUR",
            CurrencyIso::Gbp => "GBP",
            CurrencyIso::Hkd => "HKD",
            CurrencyIso::Huf => "HUF",
            CurrencyIso::Jpy => "JPY",
            CurrencyIso::Nok => "NOK",
            CurrencyIso::Pln => "PLN",
            CurrencyIso::Ron => "RON",
            CurrencyIso::Sek => "SEK",
            CurrencyIso::Usd => "USD",
            CurrencyIso::Zar => "ZAR",
        }
    }
}

impl fmt::Display for CurrencyIso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three kinds of client wallets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FundsType {
    Default,
    Fees,
    Credit,
}

impl FundsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FundsType::Default => "DEFAULT",
            FundsType::Fees => "FEES",
            FundsType::Credit => "CREDIT",
        }
    }
}

impl fmt::Display for FundsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An amount in minor units of a currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Money {
    pub currency: Option<CurrencyIso>,
    pub amount: i64,
}

impl Money {
    pub fn new(currency: CurrencyIso, amount: i64) -> Self {
        Self {
            currency: Some(currency),
            amount,
        }
    }
}

/// The platform's client account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClientDto {
    pub id: Option<String>,
    pub client_id: Option<String>,
    pub name: Option<String>,
    pub registered_name: Option<String>,
    pub primary_theme_colour: Option<String>,
    pub primary_button_colour: Option<String>,
    pub logo: Option<String>,
    pub tech_emails: Vec<String>,
    pub admin_emails: Vec<String>,
    pub fraud_emails: Vec<String>,
    pub billing_emails: Vec<String>,
    pub platform_description: Option<String>,
    #[serde(rename = "PlatformURL")]
    pub platform_url: Option<String>,
    pub tax_number: Option<String>,
    pub creation_date: Option<i64>,
}

/// Updatable fields of the client account. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClientPutDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_theme_colour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_button_colour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraud_emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_description: Option<String>,
    #[serde(rename = "PlatformURL", skip_serializing_if = "Option::is_none")]
    pub platform_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
}

/// Base64-encoded logo upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClientLogoPutDto {
    pub file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WalletDto {
    pub id: Option<String>,
    pub tag: Option<String>,
    pub owners: Vec<String>,
    pub description: Option<String>,
    pub balance: Money,
    pub currency: Option<CurrencyIso>,
    pub funds_type: Option<FundsType>,
    pub creation_date: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TransactionDto {
    pub id: Option<String>,
    pub tag: Option<String>,
    pub creation_date: Option<i64>,
    pub author_id: Option<String>,
    pub credited_user_id: Option<String>,
    pub debited_funds: Option<Money>,
    pub credited_funds: Option<Money>,
    pub fees: Option<Money>,
    pub debited_wallet_id: Option<String>,
    pub credited_wallet_id: Option<String>,
    pub status: Option<String>,
    pub result_code: Option<String>,
    pub result_message: Option<String>,
    pub execution_date: Option<i64>,
    #[serde(rename = "Type")]
    pub transaction_type: Option<String>,
    pub nature: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct KycDocumentDto {
    pub id: Option<String>,
    pub tag: Option<String>,
    pub creation_date: Option<i64>,
    pub user_id: Option<String>,
    #[serde(rename = "Type")]
    pub document_type: Option<String>,
    pub status: Option<String>,
    pub refused_reason_type: Option<String>,
    pub refused_reason_message: Option<String>,
    pub processed_date: Option<i64>,
}

/// A bank-wire pay-in to one of the client's own wallets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClientBankWireDirectPostDto {
    pub credited_wallet_id: String,
    pub declared_debited_funds: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl ClientBankWireDirectPostDto {
    pub fn new(credited_wallet_id: impl Into<String>, declared_debited_funds: Money) -> Self {
        Self {
            credited_wallet_id: credited_wallet_id.into(),
            declared_debited_funds,
            tag: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PayInBankWireDirectDto {
    pub id: Option<String>,
    pub tag: Option<String>,
    pub creation_date: Option<i64>,
    pub status: Option<String>,
    pub credited_wallet_id: Option<String>,
    pub declared_debited_funds: Option<Money>,
    pub declared_fees: Option<Money>,
    pub wire_reference: Option<String>,
    pub bank_account: Option<serde_json::Value>,
}
