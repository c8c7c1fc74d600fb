pub mod flat;
pub use flat::*;

pub mod martingale;
pub use martingale::*;

pub mod sevenreds;
pub use sevenreds::*;

use crate::Chips;
use crate::gameplay::bet::Bet;
use crate::gameplay::table::InvalidBet;
use crate::gameplay::table::Table;
use crate::wheel::bin::Bin;
use crate::wheel::wheel::Wheel;

/// a betting strategy seated at the table. the game drives one of these
/// through every round: gate check, bets, settlement of each bet, then a
/// look at the winning bin for streak bookkeeping.
pub trait Player {
    /// willing and able to bet this round?
    fn playing(&mut self) -> bool;
    /// compute the wager, deduct it from the stake, put it on the table.
    /// strategies pre-validate against the table and sit out rather than
    /// breach the limit.
    fn place_bets(&mut self, table: &mut Table) -> Result<(), InvalidBet>;
    /// a bet came home: wager plus winnings return to the stake
    fn win(&mut self, bet: &Bet);
    /// a bet died on the felt: the wager is already gone, adjust counters
    fn lose(&mut self, bet: &Bet);
    /// observe the winning bin after resolution, betting or not
    fn notice(&mut self, wheel: &Wheel, bin: &Bin);
    /// one round elapsed
    fn tick(&mut self);
    /// restore stake, round budget, and every strategy-internal counter
    fn reset(&mut self, stake: Chips, rounds: usize);
    fn stake(&self) -> Chips;
    fn rounds(&self) -> usize;
    fn name(&self) -> &'static str;
}

/// the chips and round budget every strategy keeps, whatever its
/// betting logic.
#[derive(Debug, Clone, Copy)]
pub struct Bankroll {
    stake: Chips,
    rounds: usize,
}

impl Bankroll {
    pub fn new(stake: Chips, rounds: usize) -> Self {
        Self { stake, rounds }
    }
    pub fn stake(&self) -> Chips {
        self.stake
    }
    pub fn rounds(&self) -> usize {
        self.rounds
    }
    /// rounds left in the budget and chips left to bet with
    pub fn solvent(&self) -> bool {
        self.rounds > 0 && self.stake > 0
    }
    pub fn spend(&mut self, amount: Chips) {
        assert!(amount <= self.stake, "overspent stake");
        self.stake -= amount;
    }
    pub fn collect(&mut self, amount: Chips) {
        self.stake += amount;
    }
    pub fn tick(&mut self) {
        self.rounds = self.rounds.saturating_sub(1);
    }
    pub fn reset(&mut self, stake: Chips, rounds: usize) {
        self.stake = stake;
        self.rounds = rounds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solvency_needs_both_chips_and_rounds() {
        assert!(Bankroll::new(100, 100).solvent());
        assert!(!Bankroll::new(0, 100).solvent());
        assert!(!Bankroll::new(100, 0).solvent());
    }

    #[test]
    fn spending_and_collecting_move_the_stake() {
        let mut bankroll = Bankroll::new(100, 10);
        bankroll.spend(40);
        assert!(bankroll.stake() == 60);
        bankroll.collect(80);
        assert!(bankroll.stake() == 140);
    }

    #[test]
    fn ticks_burn_the_round_budget() {
        let mut bankroll = Bankroll::new(100, 2);
        bankroll.tick();
        bankroll.tick();
        bankroll.tick();
        assert!(bankroll.rounds() == 0);
    }
}
