use super::config::Config;
use super::stats;
use crate::Chips;
use crate::gameplay::game::Game;
use crate::players::Player;
use colored::Colorize;
use serde::Serialize;

/// mean and spread of session peaks and lengths across one batch
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub player: String,
    pub samples: usize,
    pub maxima_mean: f64,
    pub maxima_stddev: f64,
    pub duration_mean: f64,
    pub duration_stddev: f64,
}

/// runs independent sessions of one strategy against one game and
/// collects the peak stake and length of each. sessions share nothing
/// but the wheel's randomness stream.
pub struct Simulator {
    config: Config,
    game: Game,
    player: Box<dyn Player>,
    maxima: Vec<Chips>,
    durations: Vec<usize>,
}

impl Simulator {
    pub fn new(game: Game, player: Box<dyn Player>, config: Config) -> Self {
        Self {
            config,
            game,
            player,
            maxima: Vec::new(),
            durations: Vec::new(),
        }
    }

    /// one session: reset the player, then cycle until the budget or
    /// the chips run out. returns the stake trajectory, one entry per
    /// round played.
    pub fn session(&mut self) -> anyhow::Result<Vec<Chips>> {
        self.player.reset(self.config.stake, self.config.rounds);
        let mut stakes = Vec::new();
        while self.player.rounds() > 0 && self.player.stake() > 0 {
            self.game.cycle(self.player.as_mut())?;
            stakes.push(self.player.stake());
        }
        Ok(stakes)
    }

    /// run every sample and aggregate the batch
    pub fn gather(&mut self) -> anyhow::Result<Report> {
        for i in 0..self.config.samples {
            let stakes = self.session()?;
            let peak = stakes.iter().copied().max().unwrap_or(self.config.stake);
            log::debug!(
                "sample {:>3}: {} rounds, peak {}",
                i + 1,
                stakes.len(),
                peak
            );
            self.durations.push(stakes.len());
            self.maxima.push(peak);
        }
        Ok(self.report())
    }

    fn report(&self) -> Report {
        let maxima = self
            .maxima
            .iter()
            .map(|&m| f64::from(m))
            .collect::<Vec<f64>>();
        let durations = self
            .durations
            .iter()
            .map(|&d| d as f64)
            .collect::<Vec<f64>>();
        Report {
            player: self.player.name().to_string(),
            samples: self.config.samples,
            maxima_mean: stats::mean(&maxima),
            maxima_stddev: stats::stddev(&maxima),
            duration_mean: stats::mean(&durations),
            duration_stddev: stats::stddev(&durations),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self.player.bold().green())?;
        writeln!(
            f,
            "  maxima    mean {:>10.2}  stddev {:>10.2}",
            self.maxima_mean, self.maxima_stddev
        )?;
        write!(
            f,
            "  duration  mean {:>10.2}  stddev {:>10.2}",
            self.duration_mean, self.duration_stddev
        )
    }
}
