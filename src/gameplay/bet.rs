use crate::Chips;
use crate::wheel::outcome::Outcome;
use colored::Colorize;
use std::rc::Rc;

/// an amount wagered on one outcome. the stake comes off when the bet
/// hits the table, so a win returns the wager plus winnings and a loss
/// returns nothing.
#[derive(Debug, Clone)]
pub struct Bet {
    amount: Chips,
    outcome: Rc<Outcome>,
}

impl Bet {
    pub fn new(amount: Chips, outcome: Rc<Outcome>) -> Self {
        assert!(amount > 0, "zero-chip bet");
        Self { amount, outcome }
    }
    pub fn amount(&self) -> Chips {
        self.amount
    }
    pub fn outcome(&self) -> &Rc<Outcome> {
        &self.outcome
    }
    /// the wager back plus winnings at the outcome's odds
    pub fn win_amount(&self) -> Chips {
        self.amount + self.outcome.win_amount(self.amount)
    }
    /// the wager, already gone from the stake
    pub fn lose_amount(&self) -> Chips {
        self.amount
    }
}

impl std::fmt::Display for Bet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} on {}",
            format!("{}", self.amount).yellow(),
            self.outcome
        )
    }
}
