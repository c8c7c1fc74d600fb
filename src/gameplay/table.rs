use super::bet::Bet;
use crate::Chips;
use thiserror::Error;

/// the table ceiling was breached. normal flow pre-checks with is_valid,
/// so reaching this is a caller invariant violation; the payload carries
/// the full post-append picture for diagnosis, not for recovery.
#[derive(Debug, Error, PartialEq)]
#[error("bets {amounts:?} total {total} over table limit {limit}")]
pub struct InvalidBet {
    pub amounts: Vec<Chips>,
    pub total: Chips,
    pub limit: Chips,
}

/// the bets currently riding on the felt and the house ceiling on their
/// sum. bets live here for exactly one round; resolution clears them.
#[derive(Debug)]
pub struct Table {
    limit: Chips,
    bets: Vec<Bet>,
}

impl Table {
    pub fn new(limit: Chips) -> Self {
        assert!(limit > 0, "zero table limit");
        Self {
            limit,
            bets: Vec::new(),
        }
    }
    pub fn limit(&self) -> Chips {
        self.limit
    }
    /// placement order
    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }
    pub fn total(&self) -> Chips {
        self.bets.iter().map(Bet::amount).sum()
    }

    /// would this bet keep the sum of wagers within the limit?
    pub fn is_valid(&self, bet: &Bet) -> bool {
        self.total() + bet.amount() <= self.limit
    }

    /// append, then re-check the sum. the bet stays on the table either
    /// way so the error can report exactly what the table held.
    pub fn place_bet(&mut self, bet: Bet) -> Result<(), InvalidBet> {
        self.bets.push(bet);
        let total = self.total();
        if total > self.limit {
            Err(InvalidBet {
                amounts: self.bets.iter().map(Bet::amount).collect(),
                total,
                limit: self.limit,
            })
        } else {
            Ok(())
        }
    }

    /// end of round: every bet present was resolved, drop them all
    pub fn clear(&mut self) {
        self.bets.clear();
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.bets
                .iter()
                .map(|b| b.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::outcome::Outcome;
    use std::rc::Rc;

    fn bet(amount: Chips) -> Bet {
        Bet::new(amount, Rc::new(Outcome::new("Red", 1)))
    }

    #[test]
    fn validity_is_checked_against_the_running_total() {
        let mut table = Table::new(30);
        assert!(table.is_valid(&bet(10)));
        assert!(table.is_valid(&bet(30)));
        assert!(!table.is_valid(&bet(40)));
        table.place_bet(bet(10)).unwrap();
        table.place_bet(bet(20)).unwrap();
        assert!(!table.is_valid(&bet(10)));
    }

    #[test]
    fn the_limit_itself_is_acceptable() {
        let mut table = Table::new(30);
        table.place_bet(bet(30)).unwrap();
        assert!(table.total() == 30);
    }

    #[test]
    fn breaching_the_limit_is_reported_with_the_evidence() {
        let mut table = Table::new(30);
        table.place_bet(bet(10)).unwrap();
        table.place_bet(bet(20)).unwrap();
        let err = table.place_bet(bet(20)).unwrap_err();
        assert!(
            err == InvalidBet {
                amounts: vec![10, 20, 20],
                total: 50,
                limit: 30,
            }
        );
    }

    #[test]
    fn clearing_empties_the_felt() {
        let mut table = Table::new(30);
        table.place_bet(bet(10)).unwrap();
        table.place_bet(bet(10)).unwrap();
        table.clear();
        assert!(table.bets().is_empty());
        assert!(table.total() == 0);
    }

    #[test]
    #[should_panic]
    fn zero_limit_tables_are_rejected() {
        Table::new(0);
    }
}
