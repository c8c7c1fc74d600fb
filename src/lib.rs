pub mod gameplay;
pub mod players;
pub mod simulation;
pub mod wheel;

pub type Chips = u32;

/// positions on an American wheel: 0, 1..=36, and 37 standing in for 00
pub const BINS: usize = 38;
pub const DOUBLE_ZERO: usize = 37;

/// CLI defaults
pub const STAKE: Chips = 100;
pub const LIMIT: Chips = 100;
pub const ROUNDS: usize = 100;
pub const SAMPLES: usize = 50;

/// initialize terminal logging
pub fn log() {
    use simplelog::ColorChoice;
    use simplelog::Config;
    use simplelog::LevelFilter;
    use simplelog::TermLogger;
    use simplelog::TerminalMode;
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("logger init");
}
