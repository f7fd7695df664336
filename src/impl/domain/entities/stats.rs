use rust_decimal::Decimal;

use super::status::InvoiceStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde_derive::Serialize)]
pub struct StatusCounts {
    pub draft: usize,
    pub sent: usize,
    pub paid: usize,
    pub overdue: usize,
}

/// Summary snapshot over an invoice collection.
///
/// `outstanding` is the sum of each invoice's own unpaid balance, floored at
/// zero per invoice, so an overpaid invoice never offsets another one.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde_derive::Serialize)]
pub struct Stats {
    pub total_count: usize,
    pub by_status: StatusCounts,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub outstanding: Decimal,
}

/// `Stats` amounts rendered for the summary cards.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct FormattedStats {
    pub total_amount: String,
    pub paid_amount: String,
    pub outstanding: String,
}

// --

impl StatusCounts {
    pub fn get(&self, status: InvoiceStatus) -> usize {
        match status {
            InvoiceStatus::Draft => self.draft,
            InvoiceStatus::Sent => self.sent,
            InvoiceStatus::Paid => self.paid,
            InvoiceStatus::Overdue => self.overdue,
        }
    }

    pub(crate) fn increment(&mut self, status: InvoiceStatus) {
        match status {
            InvoiceStatus::Draft => self.draft += 1,
            InvoiceStatus::Sent => self.sent += 1,
            InvoiceStatus::Paid => self.paid += 1,
            InvoiceStatus::Overdue => self.overdue += 1,
        }
    }
}
