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

const BASE: Chips = 1;

/// double the wager after every loss, fall back to the base after a win.
/// the wager never exceeds the chips still held, so a long cold streak
/// ends in shoving the remainder rather than going negative.
pub struct Martingale {
    bankroll: Bankroll,
    outcome: Rc<Outcome>,
    losses: u32,
}

impl Martingale {
    pub fn new(outcome: Rc<Outcome>, stake: Chips, rounds: usize) -> Self {
        Self {
            bankroll: Bankroll::new(stake, rounds),
            outcome,
            losses: 0,
        }
    }
    /// base * 2^losses, capped at the chips we still hold
    fn wager(&self) -> Chips {
        BASE.checked_shl(self.losses)
            .unwrap_or(Chips::MAX)
            .min(self.bankroll.stake())
    }
}

impl Player for Martingale {
    fn playing(&mut self) -> bool {
        self.bankroll.solvent()
    }
    fn place_bets(&mut self, table: &mut Table) -> Result<(), InvalidBet> {
        let bet = Bet::new(self.wager(), Rc::clone(&self.outcome));
        if table.is_valid(&bet) {
            self.bankroll.spend(bet.amount());
            table.place_bet(bet)?;
        }
        Ok(())
    }
    fn win(&mut self, bet: &Bet) {
        self.losses = 0;
        self.bankroll.collect(bet.win_amount());
    }
    fn lose(&mut self, _: &Bet) {
        self.losses += 1;
    }
    fn notice(&mut self, _: &Wheel, _: &Bin) {}
    fn tick(&mut self) {
        self.bankroll.tick();
    }
    fn reset(&mut self, stake: Chips, rounds: usize) {
        self.bankroll.reset(stake, rounds);
        self.losses = 0;
    }
    fn stake(&self) -> Chips {
        self.bankroll.stake()
    }
    fn rounds(&self) -> usize {
        self.bankroll.rounds()
    }
    fn name(&self) -> &'static str {
        "Martingale"
    }
}
