//! Request and response bodies for the JSON API.
//!
//! Requests carry primitives. Numbers may be sent as JSON numbers or as
//! decimal strings; dates are `YYYY-MM-DD`. Each `into_domain` parses every
//! field before failing, so a client gets one field → message map back.

use serde::{Deserialize, Serialize};
use stockbook_core::{
    balances::NewPortfolioBalance,
    errors::{Error, FieldErrors, Result},
    holdings::Holding,
    journal::{JournalEntryType, NewJournalEntry},
    money::parse_decimal,
    stocks::{NewStock, StockGrade},
    targets::{NewTarget, TargetStatus},
    transactions::{NewTransaction, TransactionType},
    utils::time_utils::parse_date,
    Money, Quantity,
};

/// A numeric field as it arrives on the wire.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum NumericInput {
    Number(serde_json::Number),
    Text(String),
}

impl NumericInput {
    fn as_text(&self) -> String {
        match self {
            NumericInput::Number(n) => n.to_string(),
            NumericInput::Text(s) => s.clone(),
        }
    }
}

fn incomplete() -> Error {
    Error::Unexpected("parsed request is missing a field".to_string())
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewStockRequest {
    pub symbol: String,
    pub name: String,
    pub industry: Option<String>,
    pub grade: Option<String>,
    pub notes: Option<String>,
}

impl NewStockRequest {
    pub fn into_domain(self) -> Result<NewStock> {
        let mut errors = FieldErrors::new();
        let grade = match self.grade.as_deref().map(str::trim) {
            None | Some("") => Some(None),
            Some(raw) => errors
                .check("grade", raw.parse::<StockGrade>())
                .map(Some),
        };
        if self.name.trim().is_empty() {
            errors.add("name", "Stock name cannot be empty");
        }
        errors.into_result()?;

        Ok(NewStock {
            id: None,
            symbol: self.symbol,
            name: self.name,
            industry: self.industry,
            grade: grade.ok_or_else(incomplete)?,
            notes: self.notes,
        })
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransactionRequest {
    pub portfolio_id: String,
    pub stock_id: String,
    pub transaction_type: String,
    pub quantity: NumericInput,
    pub price: NumericInput,
    pub transaction_date: String,
    pub notes: Option<String>,
}

impl NewTransactionRequest {
    pub fn into_domain(self) -> Result<NewTransaction> {
        let mut errors = FieldErrors::new();
        if self.portfolio_id.trim().is_empty() {
            errors.add("portfolioId", "Portfolio ID is required");
        }
        if self.stock_id.trim().is_empty() {
            errors.add("stockId", "Stock ID is required");
        }
        let transaction_type = errors.check(
            "transactionType",
            self.transaction_type.parse::<TransactionType>(),
        );
        let quantity = errors.check("quantity", Quantity::new(self.quantity.as_text()));
        let price = errors.check("price", Money::new(self.price.as_text()));
        let transaction_date = errors.check("transactionDate", parse_date(&self.transaction_date));
        errors.into_result()?;

        match (transaction_type, quantity, price, transaction_date) {
            (Some(transaction_type), Some(quantity), Some(price), Some(transaction_date)) => {
                Ok(NewTransaction {
                    id: None,
                    portfolio_id: self.portfolio_id,
                    stock_id: self.stock_id,
                    transaction_type,
                    quantity,
                    price,
                    transaction_date,
                    notes: self.notes,
                })
            }
            _ => Err(incomplete()),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBalanceRequest {
    pub balance_date: String,
    pub final_balance: NumericInput,
    pub withdrawals: Option<NumericInput>,
    pub deposits: Option<NumericInput>,
    pub index_change: Option<NumericInput>,
}

impl NewBalanceRequest {
    pub fn into_domain(self, portfolio_id: String) -> Result<NewPortfolioBalance> {
        let mut errors = FieldErrors::new();
        let balance_date = errors.check("balanceDate", parse_date(&self.balance_date));
        let final_balance = errors.check("finalBalance", Money::new(self.final_balance.as_text()));
        let withdrawals = optional_money(&mut errors, "withdrawals", self.withdrawals.as_ref());
        let deposits = optional_money(&mut errors, "deposits", self.deposits.as_ref());
        let index_change = match self.index_change.as_ref() {
            None => Some(None),
            Some(raw) => errors
                .check("indexChange", parse_decimal(&raw.as_text()))
                .map(Some),
        };
        errors.into_result()?;

        match (balance_date, final_balance, withdrawals, deposits, index_change) {
            (
                Some(balance_date),
                Some(final_balance),
                Some(withdrawals),
                Some(deposits),
                Some(index_change),
            ) => Ok(NewPortfolioBalance {
                portfolio_id,
                balance_date,
                final_balance,
                withdrawals,
                deposits,
                index_change,
            }),
            _ => Err(incomplete()),
        }
    }
}

fn optional_money(
    errors: &mut FieldErrors,
    field: &str,
    input: Option<&NumericInput>,
) -> Option<Money> {
    match input {
        None => Some(Money::zero()),
        Some(raw) => errors.check(field, Money::new(raw.as_text())),
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTargetRequest {
    pub stock_id: String,
    pub target_price: NumericInput,
    pub stop_price: Option<NumericInput>,
    pub reason: Option<String>,
}

impl NewTargetRequest {
    pub fn into_domain(self, portfolio_id: String) -> Result<NewTarget> {
        let mut errors = FieldErrors::new();
        let target_price = errors.check("targetPrice", Money::new(self.target_price.as_text()));
        let stop_price = match self.stop_price.as_ref() {
            None => Some(None),
            Some(raw) => errors
                .check("stopPrice", Money::new(raw.as_text()))
                .map(Some),
        };
        errors.into_result()?;

        match (target_price, stop_price) {
            (Some(target_price), Some(stop_price)) => Ok(NewTarget {
                id: None,
                portfolio_id,
                stock_id: self.stock_id,
                target_price,
                stop_price,
                reason: self.reason,
            }),
            _ => Err(incomplete()),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewJournalEntryRequest {
    pub entry_date: String,
    pub entry_type: Option<String>,
    pub content: String,
    pub stock_id: Option<String>,
    pub portfolio_id: Option<String>,
    pub transaction_id: Option<String>,
}

impl NewJournalEntryRequest {
    pub fn into_domain(self) -> Result<NewJournalEntry> {
        let mut errors = FieldErrors::new();
        let entry_date = errors.check("entryDate", parse_date(&self.entry_date));
        let entry_type = match self.entry_type.as_deref() {
            None => Some(JournalEntryType::default()),
            Some(raw) => errors.check("entryType", raw.parse::<JournalEntryType>()),
        };
        if self.content.trim().is_empty() {
            errors.add("content", "Journal content cannot be empty");
        }
        errors.into_result()?;

        match (entry_date, entry_type) {
            (Some(entry_date), Some(entry_type)) => Ok(NewJournalEntry {
                id: None,
                entry_date,
                entry_type,
                content: self.content,
                stock_id: self.stock_id,
                portfolio_id: self.portfolio_id,
                transaction_id: self.transaction_id,
            }),
            _ => Err(incomplete()),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioListQuery {
    #[serde(default)]
    pub active_only: bool,
}

#[derive(Deserialize, Debug, Default)]
pub struct TargetQuery {
    pub status: Option<String>,
}

impl TargetQuery {
    pub fn status(&self) -> Result<Option<TargetStatus>> {
        self.status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<TargetStatus>)
            .transpose()
    }
}

/// Holding row with its per-share cost spelled out.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HoldingResponse {
    #[serde(flatten)]
    pub holding: Holding,
    pub average_cost: Money,
}

impl TryFrom<Holding> for HoldingResponse {
    type Error = Error;

    fn try_from(holding: Holding) -> Result<Self> {
        let average_cost = holding.average_cost()?;
        Ok(Self {
            holding,
            average_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn trade_json(quantity: &str, price: &str, date: &str) -> NewTransactionRequest {
        serde_json::from_str(&format!(
            r#"{{"portfolioId":"pf-1","stockId":"stk-1","transactionType":"buy",
                "quantity":{},"price":{},"transactionDate":"{}"}}"#,
            quantity, price, date
        ))
        .unwrap()
    }

    #[test]
    fn test_transaction_request_accepts_numbers_and_strings() {
        let parsed = trade_json("10", r#""150.255""#, "2024-01-15")
            .into_domain()
            .unwrap();
        assert_eq!(parsed.transaction_type, TransactionType::Buy);
        assert_eq!(parsed.quantity.value(), Decimal::from(10));
        assert_eq!(parsed.price.amount(), Decimal::from_str("150.26").unwrap());
    }

    #[test]
    fn test_transaction_request_collects_every_bad_field() {
        let err = trade_json(r#""-3""#, r#""abc""#, "15/01/2024")
            .into_domain()
            .unwrap_err();
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.len(), 3);
        assert!(fields.get("quantity").is_some());
        assert_eq!(fields.get("price"), Some("Value 'abc' is not a number"));
        assert!(fields.get("transactionDate").is_some());
    }

    #[test]
    fn test_balance_request_defaults_flows_to_zero() {
        let request: NewBalanceRequest =
            serde_json::from_str(r#"{"balanceDate":"2024-02-01","finalBalance":"1000"}"#).unwrap();
        let balance = request.into_domain("pf-1".to_string()).unwrap();
        assert!(balance.withdrawals.is_zero());
        assert!(balance.deposits.is_zero());
        assert!(balance.index_change.is_none());
    }

    #[test]
    fn test_journal_request_rejects_unknown_type() {
        let request: NewJournalEntryRequest = serde_json::from_str(
            r#"{"entryDate":"2024-02-01","entryType":"RANT","content":"  "}"#,
        )
        .unwrap();
        let err = request.into_domain().unwrap_err();
        let fields = err.field_errors().unwrap();
        assert!(fields.get("entryType").is_some());
        assert_eq!(fields.get("content"), Some("Journal content cannot be empty"));
    }

    #[test]
    fn test_target_query_status() {
        let query = TargetQuery {
            status: Some("hit".to_string()),
        };
        assert_eq!(query.status().unwrap(), Some(TargetStatus::Hit));
        assert!(TargetQuery::default().status().unwrap().is_none());
    }
}
