use super::table::Table;
use crate::players::Player;
use crate::wheel::wheel::Wheel;

/// one round of roulette, run as an atomic sequence: let the player
/// bet, draw a bin, resolve every bet on the table against it, clear
/// the felt, then let the player observe the spin.
pub struct Game {
    wheel: Wheel,
    table: Table,
}

impl Game {
    pub fn new(wheel: Wheel, table: Table) -> Self {
        Self { wheel, table }
    }
    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }
    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn cycle(&mut self, player: &mut dyn Player) -> anyhow::Result<()> {
        if player.playing() {
            player.place_bets(&mut self.table)?;
        }
        let winner = self.wheel.spin();
        log::debug!("ball lands at {} {}", winner, self.wheel.get(winner));
        for bet in self.table.bets() {
            // membership is tested against the interned instance so the
            // bet's own copy of the odds never decides the payout
            let outcome = self.wheel.get_outcome(bet.outcome().name())?;
            if self.wheel.get(winner).contains(&outcome) {
                player.win(bet);
            } else {
                player.lose(bet);
            }
        }
        self.table.clear();
        player.notice(&self.wheel, self.wheel.get(winner));
        player.tick();
        Ok(())
    }
}
