use super::Martingale;
use super::Player;
use crate::Chips;
use crate::gameplay::bet::Bet;
use crate::gameplay::table::InvalidBet;
use crate::gameplay::table::Table;
use crate::wheel::bin::Bin;
use crate::wheel::outcome::Outcome;
use crate::wheel::wheel::Wheel;
use std::rc::Rc;

const REDS: usize = 7;

/// a martingale that sits out until the wheel lands red seven times
/// running. the gate counts down on every red, re-arms on anything
/// else, and re-arms again the moment it lets a bet through.
pub struct SevenReds {
    inner: Martingale,
    gate: usize,
}

impl SevenReds {
    pub fn new(outcome: Rc<Outcome>, stake: Chips, rounds: usize) -> Self {
        Self {
            inner: Martingale::new(outcome, stake, rounds),
            gate: REDS,
        }
    }
}

impl Player for SevenReds {
    fn playing(&mut self) -> bool {
        if self.gate == 0 && self.inner.playing() {
            self.gate = REDS;
            true
        } else {
            false
        }
    }
    fn place_bets(&mut self, table: &mut Table) -> Result<(), InvalidBet> {
        self.inner.place_bets(table)
    }
    fn win(&mut self, bet: &Bet) {
        self.inner.win(bet);
    }
    fn lose(&mut self, bet: &Bet) {
        self.inner.lose(bet);
    }
    fn notice(&mut self, wheel: &Wheel, bin: &Bin) {
        let red = wheel.get_outcome("red").expect("red is on every wheel");
        if bin.contains(&red) {
            self.gate = self.gate.saturating_sub(1);
        } else {
            self.gate = REDS;
        }
    }
    fn tick(&mut self) {
        self.inner.tick();
    }
    fn reset(&mut self, stake: Chips, rounds: usize) {
        self.inner.reset(stake, rounds);
        self.gate = REDS;
    }
    fn stake(&self) -> Chips {
        self.inner.stake()
    }
    fn rounds(&self) -> usize {
        self.inner.rounds()
    }
    fn name(&self) -> &'static str {
        "SevenReds"
    }
}
