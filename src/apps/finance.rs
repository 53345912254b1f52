// 💰 Finance Program - Process transactions, debit a savings account, record them

use crate::entities::{get_processor, Account, ProcessorKind, Transaction};
use crate::repository::Repository;
use anyhow::Result;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::io::Write;

/// A transaction paired with the channel that processes it
#[derive(Debug, Clone)]
pub struct ScheduledTransaction {
    pub transaction: Transaction,
    pub processor: ProcessorKind,
}

/// Groceries via mobile money, utilities via bank transfer, entertainment via
/// crypto wallet
pub fn sample_transactions(date: NaiveDate) -> Vec<ScheduledTransaction> {
    let scheduled = |id, amount: i64, category: &str, processor| ScheduledTransaction {
        transaction: Transaction::new(id, date, BigDecimal::from(amount), category.to_string()),
        processor,
    };

    vec![
        scheduled(1, 150, "Groceries", ProcessorKind::MobileMoney),
        scheduled(2, 200, "Utilities", ProcessorKind::BankTransfer),
        scheduled(3, 100, "Entertainment", ProcessorKind::CryptoWallet),
    ]
}

pub struct FinanceApp {
    account: Account,
    transactions: Repository<Transaction>,
}

impl FinanceApp {
    pub fn new(account: Account) -> Self {
        FinanceApp {
            account,
            transactions: Repository::new(),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.get_all()
    }

    /// Apply one transaction and report the outcome
    pub fn apply<W: Write>(&mut self, out: &mut W, transaction: &Transaction) -> Result<()> {
        match self.account.apply_transaction(transaction) {
            Ok(_) => writeln!(out, "{}", self.account.applied_message())?,
            Err(e) => {
                tracing::warn!(transaction = transaction.id, error = %e, "transaction rejected");
                writeln!(out, "{}", e)?;
            }
        }
        Ok(())
    }

    /// Process every transaction, apply each to the account, then record them
    pub fn run<W: Write>(&mut self, out: &mut W, schedule: Vec<ScheduledTransaction>) -> Result<()> {
        for entry in &schedule {
            let processor = get_processor(entry.processor);
            writeln!(out, "\n{}", processor.process(&entry.transaction))?;
        }

        for entry in &schedule {
            self.apply(out, &entry.transaction)?;
        }

        for entry in schedule {
            self.transactions.add(entry.transaction);
        }
        Ok(())
    }
}
