use clap::Parser;
use clap::ValueEnum;
use roulette::Chips;
use roulette::gameplay::game::Game;
use roulette::gameplay::table::Table;
use roulette::players::Player;
use roulette::players::flat::Flat;
use roulette::players::martingale::Martingale;
use roulette::players::sevenreds::SevenReds;
use roulette::simulation::config::Config;
use roulette::simulation::simulator::Report;
use roulette::simulation::simulator::Simulator;
use roulette::wheel::builder::BinBuilder;
use roulette::wheel::wheel::Wheel;

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum Strategy {
    Flat,
    Martingale,
    SevenReds,
}

/// simulates batches of roulette sessions for a handful of betting
/// systems and reports the spread of their outcomes
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// starting stake per session, in chips
    #[arg(short, long, default_value_t = roulette::STAKE)]
    stake: Chips,
    /// round budget per session
    #[arg(short, long, default_value_t = roulette::ROUNDS)]
    rounds: usize,
    /// table limit on the sum of placed bets
    #[arg(short, long, default_value_t = roulette::LIMIT)]
    limit: Chips,
    /// independent sessions per strategy
    #[arg(short = 'n', long, default_value_t = roulette::SAMPLES)]
    samples: usize,
    /// seed the wheel for a reproducible batch
    #[arg(long)]
    seed: Option<u64>,
    /// run a single strategy instead of the full lineup
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,
    /// emit the reports as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    roulette::log();
    let args = Args::parse();
    let config = Config::new(args.stake, args.rounds, args.limit, args.samples)?;
    log::info!(
        "stake {} rounds {} limit {} samples {}",
        config.stake,
        config.rounds,
        config.limit,
        config.samples
    );
    let reports = [Strategy::Flat, Strategy::Martingale, Strategy::SevenReds]
        .into_iter()
        .filter(|&s| args.strategy.is_none_or(|only| only == s))
        .map(|strategy| simulate(strategy, config, args.seed))
        .collect::<anyhow::Result<Vec<Report>>>()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in reports {
            println!("{}", report);
        }
    }
    Ok(())
}

/// each strategy gets its own freshly built wheel, table, and player
fn simulate(strategy: Strategy, config: Config, seed: Option<u64>) -> anyhow::Result<Report> {
    let mut wheel = match seed {
        Some(seed) => Wheel::seeded(seed),
        None => Wheel::new(),
    };
    BinBuilder::build(&mut wheel);
    let black = wheel.get_outcome("black")?;
    let player: Box<dyn Player> = match strategy {
        Strategy::Flat => Box::new(Flat::new(black, config.stake, config.rounds)),
        Strategy::Martingale => Box::new(Martingale::new(black, config.stake, config.rounds)),
        Strategy::SevenReds => Box::new(SevenReds::new(black, config.stake, config.rounds)),
    };
    let game = Game::new(wheel, Table::new(config.limit));
    Simulator::new(game, player, config).gather()
}
