//! Filtering and pagination over a generated transaction population.

use crate::transaction_generator::Transaction;
use serde::{Deserialize, Serialize};

/// Optional narrowing criteria. Empty strings count as absent.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub end_date: Option<String>,
    /// Matched case-insensitively against the type label.
    pub transaction_type: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl TransactionFilter {
    pub fn matches(&self, t: &Transaction) -> bool {
        if let Some(start) = present(&self.start_date) {
            if t.date.as_str() < start {
                return false;
            }
        }
        if let Some(end) = present(&self.end_date) {
            if t.date.as_str() > end {
                return false;
            }
        }
        if let Some(kind) = present(&self.transaction_type) {
            if !t.transaction_type.label().eq_ignore_ascii_case(kind) {
                return false;
            }
        }
        true
    }

    /// Keep matching transactions, preserving order.
    pub fn apply(&self, transactions: Vec<Transaction>) -> Vec<Transaction> {
        transactions.into_iter().filter(|t| self.matches(t)).collect()
    }
}

/// Effective 1-indexed page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    /// Missing values take the defaults; values below 1 clamp to 1 and
    /// `per_page` never exceeds `max_per_page`.
    pub fn new(page: Option<i64>, per_page: Option<i64>, default_per_page: u32, max_per_page: u32) -> Self {
        let max = i64::from(max_per_page.max(1));
        let page = page.unwrap_or(1).clamp(1, i64::from(u32::MAX));
        let per_page = per_page
            .unwrap_or(i64::from(default_per_page))
            .clamp(1, max);
        Self {
            page: page as u32,
            per_page: per_page as u32,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub total: usize,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: usize,
}

/// Slice one page out of an already filtered list.
pub fn paginate(transactions: Vec<Transaction>, request: PageRequest) -> TransactionPage {
    let total = transactions.len();
    let per_page = request.per_page as usize;
    let total_pages = total.div_ceil(per_page);
    let start = (request.page as usize - 1).saturating_mul(per_page);

    let page_items = transactions
        .into_iter()
        .skip(start)
        .take(per_page)
        .collect();

    TransactionPage {
        transactions: page_items,
        total,
        page: request.page,
        per_page: request.per_page,
        total_pages,
    }
}
