use super::bin::Bin;
use super::outcome::Outcome;
use super::spin::Entropy;
use super::spin::Spin;
use crate::BINS;
use std::collections::HashSet;
use std::rc::Rc;
use thiserror::Error;

/// zero or many registry matches for a name. either one means the wheel
/// was built wrong: the builder's interning pass guarantees exactly one
/// instance per name, so these never surface after a sound build.
#[derive(Debug, Error, PartialEq)]
pub enum LookupError {
    #[error("no outcome named {0:?} on this wheel")]
    Unknown(String),
    #[error("{count} outcomes named {name:?} on this wheel")]
    Ambiguous { name: String, count: usize },
}

/// the 38 bins of an American wheel, the registry of every outcome
/// attached to them, and the randomness that picks winners. each wheel
/// owns its own registry, so isolated runs never share state.
pub struct Wheel {
    bins: [Bin; BINS],
    outcomes: HashSet<Rc<Outcome>>,
    spinner: Box<dyn Spin>,
}

impl Wheel {
    pub fn new() -> Self {
        Self::with(Box::new(Entropy::random()))
    }
    pub fn seeded(seed: u64) -> Self {
        Self::with(Box::new(Entropy::seeded(seed)))
    }
    pub fn with(spinner: Box<dyn Spin>) -> Self {
        Self {
            bins: std::array::from_fn(|_| Bin::empty()),
            outcomes: HashSet::new(),
            spinner,
        }
    }

    /// attach an interned outcome to bins[position] and to the registry.
    /// positions past 37 don't exist on any wheel; the builder is the
    /// only caller and never produces one.
    pub fn add_outcome(&mut self, position: usize, outcome: Rc<Outcome>) {
        assert!(position < BINS, "no bin at position {}", position);
        self.bins[position].add(Rc::clone(&outcome));
        self.outcomes.insert(outcome);
    }

    /// draw a winning position, consuming one unit of randomness
    pub fn spin(&mut self) -> usize {
        self.spinner.spin(BINS)
    }

    /// draw a winning bin
    pub fn next(&mut self) -> &Bin {
        let winner = self.spin();
        self.get(winner)
    }

    pub fn get(&self, position: usize) -> &Bin {
        self.bins.get(position).expect("position on the wheel")
    }

    /// case-insensitive lookup of the one interned instance for a name
    pub fn get_outcome(&self, name: &str) -> Result<Rc<Outcome>, LookupError> {
        let matches = self
            .outcomes
            .iter()
            .filter(|o| o.name().eq_ignore_ascii_case(name))
            .collect::<Vec<&Rc<Outcome>>>();
        match matches.len() {
            0 => Err(LookupError::Unknown(name.to_string())),
            1 => Ok(Rc::clone(matches[0])),
            n => Err(LookupError::Ambiguous {
                name: name.to_string(),
                count: n,
            }),
        }
    }

    pub fn outcomes(&self) -> &HashSet<Rc<Outcome>> {
        &self.outcomes
    }
}
