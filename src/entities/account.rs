// 💳 Account Entity - Balance holder with variant-specific debit rules
//
// Two kinds of account share one struct:
// - Standard: always debits, the balance may go negative
// - Savings:  refuses any debit larger than the current balance

use crate::entities::transaction::{format_amount, Transaction};
use crate::error::AccountError;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// ACCOUNT KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    /// Plain account, no overdraft protection
    Standard,

    /// Savings account, rejects debits that exceed the balance
    Savings,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Standard => "Standard",
            AccountKind::Savings => "Savings",
        }
    }
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Account number, e.g. "ACC1001"
    pub account_number: String,

    pub kind: AccountKind,

    balance: BigDecimal,
}

impl Account {
    pub fn new(account_number: String, kind: AccountKind, initial_balance: BigDecimal) -> Self {
        Account {
            account_number,
            kind,
            balance: initial_balance,
        }
    }

    pub fn standard(account_number: &str, initial_balance: BigDecimal) -> Self {
        Self::new(account_number.to_string(), AccountKind::Standard, initial_balance)
    }

    pub fn savings(account_number: &str, initial_balance: BigDecimal) -> Self {
        Self::new(account_number.to_string(), AccountKind::Savings, initial_balance)
    }

    pub fn balance(&self) -> &BigDecimal {
        &self.balance
    }

    /// Debit the transaction amount and return the new balance.
    ///
    /// Savings accounts fail with `InsufficientFunds` when the amount exceeds
    /// the balance; the balance is left unchanged in that case. A debit equal
    /// to the balance is allowed and leaves exactly zero.
    pub fn apply_transaction(&mut self, transaction: &Transaction) -> Result<BigDecimal, AccountError> {
        if self.kind == AccountKind::Savings && transaction.amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: transaction.amount.clone(),
                available: self.balance.clone(),
            });
        }
        self.balance -= &transaction.amount;

        tracing::debug!(
            account = %self.account_number,
            transaction = transaction.id,
            balance = %self.balance,
            "transaction applied"
        );
        Ok(self.balance.clone())
    }

    /// Console line reported after a successful debit
    pub fn applied_message(&self) -> String {
        match self.kind {
            AccountKind::Standard => {
                format!("Transaction applied. New balance: {}", format_amount(&self.balance))
            }
            AccountKind::Savings => {
                format!(
                    "Transaction successful. Updated balance: {}",
                    format_amount(&self.balance)
                )
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn money(raw: &str) -> BigDecimal {
        raw.parse().unwrap()
    }

    fn tx(id: i64, amount: &str) -> Transaction {
        Transaction::new(
            id,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            money(amount),
            "Test".to_string(),
        )
    }

    #[test]
    fn test_savings_debits_within_balance() {
        let mut account = Account::savings("ACC1001", money("1000"));

        let balance = account.apply_transaction(&tx(1, "150")).unwrap();

        assert_eq!(balance, money("850"));
        assert_eq!(
            account.applied_message(),
            "Transaction successful. Updated balance: 850.00"
        );
    }

    #[test]
    fn test_savings_rejects_overdraft_and_keeps_balance() {
        let mut account = Account::savings("ACC1001", money("100"));

        let result = account.apply_transaction(&tx(1, "100.01"));

        assert_eq!(
            result,
            Err(AccountError::InsufficientFunds {
                requested: money("100.01"),
                available: money("100")
            })
        );
        assert_eq!(account.balance(), &money("100"));
    }

    #[test]
    fn test_savings_allows_exact_balance() {
        let mut account = Account::savings("ACC1001", money("100"));
        assert_eq!(account.apply_transaction(&tx(1, "100")), Ok(money("0")));
    }

    #[test]
    fn test_savings_drains_in_fractional_steps() {
        let mut account = Account::savings("ACC1001", money("0.3"));

        let balances: Vec<BigDecimal> = (1..=3)
            .map(|id| account.apply_transaction(&tx(id, "0.1")).unwrap())
            .collect();

        assert_eq!(balances, vec![money("0.2"), money("0.1"), money("0")]);
        assert!(matches!(
            account.apply_transaction(&tx(4, "0.1")),
            Err(AccountError::InsufficientFunds { .. })
        ));
        assert_eq!(account.balance(), &money("0"));
    }

    #[test]
    fn test_standard_can_go_negative() {
        let mut account = Account::standard("ACC2002", money("50"));

        let balance = account.apply_transaction(&tx(1, "80")).unwrap();

        assert_eq!(balance, money("-30"));
        assert_eq!(
            account.applied_message(),
            "Transaction applied. New balance: -30.00"
        );
    }

    #[test]
    fn test_account_kind_as_str() {
        assert_eq!(AccountKind::Standard.as_str(), "Standard");
        assert_eq!(AccountKind::Savings.as_str(), "Savings");
    }
}
