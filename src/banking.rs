//! Banking Session
//!
//! Account overview, transaction history, transfer validation and the
//! statement table's filter/sort rules. Deposits and withdrawals reuse the
//! amount window; its submit target carries the banking action.

use crate::models::{Transaction, TxKind};

/// How many recent transactions the overview shows
pub const RECENT_TRANSACTIONS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankingSession {
    pub bank_name: String,
    pub account_holder: String,
    pub account_number: String,
    pub cash: f64,
    pub bank: f64,
    pub transactions: Vec<Transaction>,
    /// Transfers completed this session, merged into the history when the
    /// transfer window returns to the overview
    pub pending: Vec<Transaction>,
}

impl BankingSession {
    pub fn total(&self) -> f64 {
        self.cash + self.bank
    }

    /// The overview shows only the newest few transactions
    pub fn recent(&self) -> &[Transaction] {
        &self.transactions[..self.transactions.len().min(RECENT_TRANSACTIONS)]
    }

    /// Merge transfers recorded while the transfer window was open
    pub fn absorb_pending(&mut self) {
        for tx in self.pending.drain(..).rev() {
            self.transactions.insert(0, tx);
        }
    }
}

/// Validated transfer request
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    pub recipient_id: u32,
    pub amount: f64,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferError {
    InvalidRecipient,
    InvalidAmount,
    InsufficientFunds,
}

impl TransferError {
    pub fn message(self) -> &'static str {
        match self {
            TransferError::InvalidRecipient => "Please enter a valid recipient ID",
            TransferError::InvalidAmount => "Please enter a valid amount",
            TransferError::InsufficientFunds => "You do not have enough money in your account",
        }
    }
}

/// Validate the raw transfer form fields against the bank balance
pub fn validate_transfer(
    recipient_raw: &str,
    amount_raw: &str,
    description_raw: &str,
    bank_balance: f64,
) -> Result<TransferRequest, TransferError> {
    let recipient_id = recipient_raw
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|&id| id > 0)
        .ok_or(TransferError::InvalidRecipient)?;
    let amount = amount_raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && *a > 0.0)
        .ok_or(TransferError::InvalidAmount)?;
    if amount > bank_balance {
        return Err(TransferError::InsufficientFunds);
    }
    let description = match description_raw.trim() {
        "" => "Transfer".to_string(),
        text => text.to_string(),
    };
    Ok(TransferRequest {
        recipient_id,
        amount,
        description,
    })
}

/// Statement type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxFilter {
    #[default]
    All,
    Kind(TxKind),
}

/// Statement sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxSort {
    #[default]
    DateDesc,
    DateAsc,
    AmountDesc,
    AmountAsc,
}

impl TxSort {
    pub const ALL: [TxSort; 4] = [
        TxSort::DateDesc,
        TxSort::DateAsc,
        TxSort::AmountDesc,
        TxSort::AmountAsc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TxSort::DateDesc => "Newest First",
            TxSort::DateAsc => "Oldest First",
            TxSort::AmountDesc => "Highest Amount",
            TxSort::AmountAsc => "Lowest Amount",
        }
    }
}

/// Filter and sort a statement. Dates are ISO `YYYY-MM-DD` strings, so date
/// ordering is lexicographic.
pub fn filter_and_sort(
    transactions: &[Transaction],
    filter: TxFilter,
    sort: TxSort,
) -> Vec<Transaction> {
    let mut rows: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| match filter {
            TxFilter::All => true,
            TxFilter::Kind(kind) => tx.kind == kind,
        })
        .cloned()
        .collect();
    match sort {
        TxSort::DateDesc => rows.sort_by(|a, b| b.date.cmp(&a.date)),
        TxSort::DateAsc => rows.sort_by(|a, b| a.date.cmp(&b.date)),
        TxSort::AmountDesc => {
            rows.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(std::cmp::Ordering::Equal))
        }
        TxSort::AmountAsc => {
            rows.sort_by(|a, b| a.amount.partial_cmp(&b.amount).unwrap_or(std::cmp::Ordering::Equal))
        }
    }
    rows
}

fn tx(kind: TxKind, amount: f64, date: &str, description: &str, category: &str) -> Transaction {
    Transaction {
        kind,
        amount,
        date: date.to_string(),
        description: description.to_string(),
        category: Some(category.to_string()),
        balance: None,
    }
}

/// Demonstration history used when the host sends no transactions
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        tx(TxKind::Deposit, 2_500.0, "Today, 2:30 PM", "Salary Deposit", "income"),
        tx(TxKind::Withdraw, 350.0, "Today, 10:15 AM", "ATM Withdrawal", "cash"),
        tx(TxKind::Transfer, 500.0, "Yesterday, 6:45 PM", "Transfer to John Doe", "transfer"),
        tx(TxKind::Deposit, 150.0, "Yesterday, 2:20 PM", "Refund - Store Purchase", "refund"),
        tx(TxKind::Withdraw, 75.0, "2 days ago", "Coffee Shop", "food"),
    ]
}

fn row(date: &str, description: &str, kind: TxKind, amount: f64, balance: f64) -> Transaction {
    Transaction {
        kind,
        amount,
        date: date.to_string(),
        description: description.to_string(),
        category: None,
        balance: Some(balance),
    }
}

/// Demonstration statement rows
pub fn sample_statement() -> Vec<Transaction> {
    vec![
        row("2024-12-31", "Year-end Bonus", TxKind::Deposit, 5_000.00, 15_420.50),
        row("2024-12-30", "Grocery Store", TxKind::Withdraw, 125.75, 10_420.50),
        row("2024-12-29", "Gas Station", TxKind::Withdraw, 65.00, 10_546.25),
        row("2024-12-28", "Salary Deposit", TxKind::Deposit, 2_500.00, 10_611.25),
        row("2024-12-27", "Transfer to Savings", TxKind::Transfer, 500.00, 8_111.25),
        row("2024-12-26", "Restaurant", TxKind::Withdraw, 85.50, 8_611.25),
        row("2024-12-25", "Christmas Gift", TxKind::Withdraw, 200.00, 8_696.75),
        row("2024-12-24", "ATM Withdrawal", TxKind::Withdraw, 100.00, 8_896.75),
        row("2024-12-23", "Freelance Payment", TxKind::Deposit, 750.00, 8_996.75),
        row("2024-12-22", "Coffee Shop", TxKind::Withdraw, 12.50, 8_246.75),
        row("2024-12-21", "Online Purchase", TxKind::Withdraw, 89.99, 8_259.25),
        row("2024-12-20", "Rent Payment", TxKind::Transfer, 1_200.00, 8_349.24),
        row("2024-12-19", "Utility Bill", TxKind::Withdraw, 150.00, 9_549.24),
        row("2024-12-18", "Refund - Store Return", TxKind::Deposit, 45.75, 9_699.24),
        row("2024-12-17", "Pharmacy", TxKind::Withdraw, 25.50, 9_653.49),
        row("2024-12-16", "Salary Deposit", TxKind::Deposit, 2_500.00, 9_678.99),
        row("2024-12-15", "Movie Theater", TxKind::Withdraw, 35.00, 7_178.99),
        row("2024-12-14", "Gas Station", TxKind::Withdraw, 70.00, 7_213.99),
        row("2024-12-13", "Grocery Store", TxKind::Withdraw, 145.25, 7_283.99),
        row("2024-12-12", "ATM Withdrawal", TxKind::Withdraw, 200.00, 7_429.24),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_caps_at_five() {
        let session = BankingSession {
            transactions: sample_statement(),
            ..Default::default()
        };
        assert_eq!(session.recent().len(), RECENT_TRANSACTIONS);
        let short = BankingSession {
            transactions: sample_transactions()[..2].to_vec(),
            ..Default::default()
        };
        assert_eq!(short.recent().len(), 2);
    }

    #[test]
    fn absorb_pending_prepends_newest_first() {
        let mut session = BankingSession {
            transactions: sample_transactions(),
            ..Default::default()
        };
        session.pending.push(tx(TxKind::Transfer, 10.0, "now", "first", "transfer"));
        session.pending.push(tx(TxKind::Transfer, 20.0, "now", "second", "transfer"));
        session.absorb_pending();
        assert_eq!(session.transactions[0].description, "first");
        assert_eq!(session.transactions[1].description, "second");
        assert!(session.pending.is_empty());
    }

    #[test]
    fn transfer_validation_rejects_bad_input() {
        assert_eq!(
            validate_transfer("", "50", "", 100.0),
            Err(TransferError::InvalidRecipient)
        );
        assert_eq!(
            validate_transfer("0", "50", "", 100.0),
            Err(TransferError::InvalidRecipient)
        );
        assert_eq!(
            validate_transfer("7", "", "", 100.0),
            Err(TransferError::InvalidAmount)
        );
        assert_eq!(
            validate_transfer("7", "-5", "", 100.0),
            Err(TransferError::InvalidAmount)
        );
        assert_eq!(
            validate_transfer("7", "150", "", 100.0),
            Err(TransferError::InsufficientFunds)
        );
    }

    #[test]
    fn transfer_validation_accepts_and_defaults_description() {
        let req = validate_transfer(" 7 ", "50.5", "  ", 100.0).unwrap();
        assert_eq!(req.recipient_id, 7);
        assert_eq!(req.amount, 50.5);
        assert_eq!(req.description, "Transfer");
        let req = validate_transfer("7", "50", "Rent", 100.0).unwrap();
        assert_eq!(req.description, "Rent");
    }

    #[test]
    fn filter_keeps_only_matching_kind() {
        let rows = filter_and_sort(
            &sample_statement(),
            TxFilter::Kind(TxKind::Deposit),
            TxSort::DateDesc,
        );
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|tx| tx.kind == TxKind::Deposit));
    }

    #[test]
    fn sort_orders_hold() {
        let statement = sample_statement();
        let newest = filter_and_sort(&statement, TxFilter::All, TxSort::DateDesc);
        assert!(newest.windows(2).all(|w| w[0].date >= w[1].date));
        let oldest = filter_and_sort(&statement, TxFilter::All, TxSort::DateAsc);
        assert!(oldest.windows(2).all(|w| w[0].date <= w[1].date));
        let high = filter_and_sort(&statement, TxFilter::All, TxSort::AmountDesc);
        assert!(high.windows(2).all(|w| w[0].amount >= w[1].amount));
        let low = filter_and_sort(&statement, TxFilter::All, TxSort::AmountAsc);
        assert!(low.windows(2).all(|w| w[0].amount <= w[1].amount));
    }

    #[test]
    fn filter_and_sort_leave_input_untouched() {
        let statement = sample_statement();
        let before = statement.clone();
        let _ = filter_and_sort(&statement, TxFilter::Kind(TxKind::Transfer), TxSort::AmountAsc);
        assert_eq!(statement, before);
    }
}
