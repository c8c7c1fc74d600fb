use super::Bankroll;
use super::Player;
use crate::Chips;
use crate::gameplay::bet::Bet;
use crate::gameplay::table::InvalidBet;
use crate::gameplay::table::Table;
use crate::wheel::bin::Bin;
use crate::wheel::outcome::Outcome;
use crate::wheel::wheel::Wheel;
use std::rc::Rc;

const UNIT: Chips = 1;

/// one unit on the same outcome, round after round, no memory at all.
pub struct Flat {
    bankroll: Bankroll,
    outcome: Rc<Outcome>,
}

impl Flat {
    pub fn new(outcome: Rc<Outcome>, stake: Chips, rounds: usize) -> Self {
        Self {
            bankroll: Bankroll::new(stake, rounds),
            outcome,
        }
    }
}

impl Player for Flat {
    fn playing(&mut self) -> bool {
        self.bankroll.solvent()
    }
    fn place_bets(&mut self, table: &mut Table) -> Result<(), InvalidBet> {
        let amount = UNIT.min(self.bankroll.stake());
        let bet = Bet::new(amount, Rc::clone(&self.outcome));
        if table.is_valid(&bet) {
            self.bankroll.spend(bet.amount());
            table.place_bet(bet)?;
        }
        Ok(())
    }
    fn win(&mut self, bet: &Bet) {
        self.bankroll.collect(bet.win_amount());
    }
    fn lose(&mut self, _: &Bet) {}
    fn notice(&mut self, _: &Wheel, _: &Bin) {}
    fn tick(&mut self) {
        self.bankroll.tick();
    }
    fn reset(&mut self, stake: Chips, rounds: usize) {
        self.bankroll.reset(stake, rounds);
    }
    fn stake(&self) -> Chips {
        self.bankroll.stake()
    }
    fn rounds(&self) -> usize {
        self.bankroll.rounds()
    }
    fn name(&self) -> &'static str {
        "Flat"
    }
}
