//! Synthetic transaction history.
//!
//! A fixed-size population is drawn over a trailing window of days and
//! returned newest first. The output does not depend on which client
//! asked for it.

use crate::{
    config::{TRANSACTIONS_PER_CLIENT, TRANSACTION_WINDOW_DAYS},
    rng::GeneratorRng,
    types::IsoDate,
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Probability that an ACH or wire moves money in.
const ROUTED_INFLOW_PROBABILITY: f64 = 0.7;
const RISK_FLAG_PROBABILITY: f64 = 0.25;

pub const ACCOUNT_LABELS: [&str; 3] = [
    "Checking - ****1234",
    "Savings - ****5678",
    "Money Market - ****9012",
];

pub const RISK_FLAGS: [&str; 5] = [
    "High Cash",
    "Crypto Activity",
    "Cross-Border",
    "MSB Related",
    "Geographic Risk",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Wire,
    Ach,
    Check,
}

impl TransactionType {
    pub const ALL: [TransactionType; 5] = [
        Self::Deposit,
        Self::Withdrawal,
        Self::Wire,
        Self::Ach,
        Self::Check,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Deposit    => "Deposit",
            Self::Withdrawal => "Withdrawal",
            Self::Wire       => "Wire",
            Self::Ach        => "Ach",
            Self::Check      => "Check",
        }
    }

    /// Description stems; a 5-digit reference is appended to each.
    pub fn descriptions(&self) -> &'static [&'static str] {
        match self {
            Self::Deposit => &[
                "Customer Payment - Invoice #",
                "Wire Transfer - ",
                "Mobile Deposit - Check #",
                "ACH Credit - ",
            ],
            Self::Withdrawal => &[
                "Vendor Payment - ",
                "Payroll Processing",
                "Tax Payment - ",
                "Utility Payment - ",
            ],
            Self::Wire => &[
                "International Wire - ",
                "Domestic Wire Transfer - ",
                "SWIFT Transfer - ",
            ],
            Self::Ach => &["ACH Debit - ", "ACH Credit - ", "Direct Deposit - "],
            Self::Check => &["Check Payment #", "Cashier's Check - ", "Electronic Check - "],
        }
    }

    /// ACH and wires can go either way; deposits always come in.
    fn is_inflow(&self, rng: &mut GeneratorRng) -> bool {
        match self {
            Self::Deposit => true,
            Self::Ach | Self::Wire => rng.chance(ROUTED_INFLOW_PROBABILITY),
            Self::Withdrawal | Self::Check => false,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Processed,
    Cleared,
}

const STATUSES: [TransactionStatus; 4] = [
    TransactionStatus::Completed,
    TransactionStatus::Pending,
    TransactionStatus::Processed,
    TransactionStatus::Cleared,
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: IsoDate,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub description: String,
    pub account: String,
    /// Whole dollars; negative for outflows.
    pub amount: i64,
    pub status: TransactionStatus,
    pub risk_flag: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionGenerator {
    pub count: usize,
    pub window_days: i64,
}

impl Default for TransactionGenerator {
    fn default() -> Self {
        Self {
            count: TRANSACTIONS_PER_CLIENT,
            window_days: TRANSACTION_WINDOW_DAYS,
        }
    }
}

impl TransactionGenerator {
    pub fn new(count: usize, window_days: i64) -> Self {
        Self { count, window_days }
    }

    /// Draw the full population, sorted by date descending.
    /// Same-day transactions keep their draw order.
    pub fn generate(&self, today: NaiveDate, rng: &mut GeneratorRng) -> Vec<Transaction> {
        let mut transactions: Vec<Transaction> = (1..=self.count)
            .map(|n| self.draw(n, today, rng))
            .collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions
    }

    fn draw(&self, ordinal: usize, today: NaiveDate, rng: &mut GeneratorRng) -> Transaction {
        let transaction_type = *rng.pick(&TransactionType::ALL);
        let amount = if transaction_type.is_inflow(rng) {
            rng.int_inclusive(1_000, 50_000)
        } else {
            -rng.int_inclusive(500, 30_000)
        };
        let date = today - Duration::days(rng.int_inclusive(0, self.window_days));
        let stem = rng.pick(transaction_type.descriptions());
        let description = format!("{stem}{}", rng.int_inclusive(10_000, 99_999));
        let account = rng.pick(&ACCOUNT_LABELS).to_string();
        let status = *rng.pick(&STATUSES);
        let risk_flag = if rng.chance(RISK_FLAG_PROBABILITY) {
            Some(rng.pick(&RISK_FLAGS).to_string())
        } else {
            None
        };

        Transaction {
            id: format!("txn-{ordinal}"),
            date: date.format("%Y-%m-%d").to_string(),
            transaction_type,
            description,
            account,
            amount,
            status,
            risk_flag,
        }
    }
}
