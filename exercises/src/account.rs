//! A bank account with guarded deposits and withdrawals.

use telemetry::{Reporter, StatusEvent};

/// An account balance that only changes through valid operations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Account {
    balance: f64,
}

impl Account {
    /// Opens an empty account.
    #[must_use]
    pub const fn new() -> Self {
        Self { balance: 0.0 }
    }

    /// Current balance.
    pub const fn balance(&self) -> f64 {
        self.balance
    }

    /// Adds a positive amount. Anything else is reported and ignored.
    pub fn deposit(&mut self, amount: f64, reporter: &mut dyn Reporter) {
        if amount > 0.0 {
            self.balance += amount;
        } else {
            tracing::debug!(amount, "deposit ignored");
            reporter.report(StatusEvent::InvalidAmount { amount });
        }
    }

    /// Withdraws `amount` if the balance covers it and returns what was paid
    /// out. A non-positive or uncovered withdrawal is reported and pays out
    /// nothing.
    pub fn withdraw(&mut self, amount: f64, reporter: &mut dyn Reporter) -> f64 {
        if amount.is_nan() || amount <= 0.0 {
            tracing::debug!(amount, "withdrawal ignored");
            reporter.report(StatusEvent::InvalidAmount { amount });
            return 0.0;
        }
        if amount <= self.balance {
            self.balance -= amount;
            amount
        } else {
            reporter.report(StatusEvent::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
            0.0
        }
    }
}
