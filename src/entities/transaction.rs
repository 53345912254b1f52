// 💸 Transaction Entity + Processors
//
// A Transaction is an immutable record. Processors are a closed set of
// payment channels behind one trait, picked through `get_processor`.
// Amounts are exact decimals; rounding to cents happens only when rendered.

use crate::repository::Entity;
use bigdecimal::{BigDecimal, RoundingMode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Render a money amount with exactly two decimals (half-up)
pub fn format_amount(amount: &BigDecimal) -> String {
    amount.with_scale_round(2, RoundingMode::HalfUp).to_string()
}

// ============================================================================
// TRANSACTION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: BigDecimal,
    pub category: String,
}

impl Transaction {
    pub fn new(id: i64, date: NaiveDate, amount: BigDecimal, category: String) -> Self {
        Transaction {
            id,
            date,
            amount,
            category,
        }
    }
}

impl Entity for Transaction {
    fn id(&self) -> i64 {
        self.id
    }
}

// ============================================================================
// PROCESSORS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessorKind {
    BankTransfer,
    MobileMoney,
    CryptoWallet,
}

impl ProcessorKind {
    pub fn name(&self) -> &str {
        match self {
            ProcessorKind::BankTransfer => "Bank Transfer",
            ProcessorKind::MobileMoney => "Mobile Money",
            ProcessorKind::CryptoWallet => "Crypto Wallet",
        }
    }
}

/// A payment channel that can process a transaction
pub trait TransactionProcessor {
    /// Process the transaction and return the line to report
    fn process(&self, transaction: &Transaction) -> String;
}

pub struct BankTransferProcessor;

impl TransactionProcessor for BankTransferProcessor {
    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "[{}] Processed {} for {}",
            ProcessorKind::BankTransfer.name(),
            format_amount(&transaction.amount),
            transaction.category
        )
    }
}

pub struct MobileMoneyProcessor;

impl TransactionProcessor for MobileMoneyProcessor {
    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "[{}] Sent {} for {}",
            ProcessorKind::MobileMoney.name(),
            format_amount(&transaction.amount),
            transaction.category
        )
    }
}

pub struct CryptoWalletProcessor;

impl TransactionProcessor for CryptoWalletProcessor {
    fn process(&self, transaction: &Transaction) -> String {
        format!(
            "[{}] Received {} for {}",
            ProcessorKind::CryptoWallet.name(),
            format_amount(&transaction.amount),
            transaction.category
        )
    }
}

/// Factory: boxed processor for a channel
pub fn get_processor(kind: ProcessorKind) -> Box<dyn TransactionProcessor> {
    match kind {
        ProcessorKind::BankTransfer => Box::new(BankTransferProcessor),
        ProcessorKind::MobileMoney => Box::new(MobileMoneyProcessor),
        ProcessorKind::CryptoWallet => Box::new(CryptoWalletProcessor),
    }
}
