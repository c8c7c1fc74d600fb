use super::outcome::Outcome;
use super::wheel::Wheel;
use crate::Chips;
use crate::DOUBLE_ZERO;
use std::collections::HashMap;
use std::rc::Rc;

const STRAIGHT: Chips = 35;
const SPLIT: Chips = 17;
const STREET: Chips = 11;
const CORNER: Chips = 8;
const FIVE: Chips = 6;
const LINE: Chips = 5;
const DOZEN: Chips = 2;
const COLUMN: Chips = 2;
const EVEN: Chips = 1;

/// the red positions of the standard American layout. black is the rest
/// of 1..=36.
pub const REDS: [usize; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// generates every valid American-roulette bet as a (position, Outcome)
/// placement, interns the outcomes by name so equal-named placements
/// share one instance, then attaches each placement to its wheel bin.
/// the two-pass generate-then-intern-then-attach shape is what lets the
/// wheel registry promise one instance per name.
pub struct BinBuilder;

impl BinBuilder {
    pub fn build(wheel: &mut Wheel) {
        let placements = Self::placements();
        let interned = placements
            .iter()
            .map(|(_, o)| (o.name().to_string(), Rc::new(o.clone())))
            .collect::<HashMap<String, Rc<Outcome>>>();
        for (position, outcome) in placements {
            let shared = interned.get(outcome.name()).expect("interned above");
            wheel.add_outcome(position, Rc::clone(shared));
        }
    }

    fn placements() -> Vec<(usize, Outcome)> {
        std::iter::empty()
            .chain(Self::straights())
            .chain(Self::splits())
            .chain(Self::streets())
            .chain(Self::corners())
            .chain(Self::fives())
            .chain(Self::lines())
            .chain(Self::dozens())
            .chain(Self::columns())
            .chain(Self::evens())
            .collect()
    }

    /// one 35:1 outcome per physical position, zeroes included
    fn straights() -> Vec<(usize, Outcome)> {
        (1..=36)
            .map(|n| (n, Outcome::new(n.to_string(), STRAIGHT)))
            .chain(std::iter::once((0, Outcome::new("0", STRAIGHT))))
            .chain(std::iter::once((DOUBLE_ZERO, Outcome::new("00", STRAIGHT))))
            .collect()
    }

    /// pairs adjacent on the 12x3 grid: 24 across (n, n+1) from columns
    /// one and two, 33 down (n, n+3)
    fn splits() -> Vec<(usize, Outcome)> {
        let across = (1..=34)
            .step_by(3)
            .chain((2..=35).step_by(3))
            .map(|n| (n, n + 1));
        let down = (1..=33).map(|n| (n, n + 3));
        across
            .chain(down)
            .flat_map(|(a, b)| {
                let name = format!("Split {}-{}", a, b);
                [
                    (a, Outcome::new(name.clone(), SPLIT)),
                    (b, Outcome::new(name, SPLIT)),
                ]
            })
            .collect()
    }

    /// one row of three per street
    fn streets() -> Vec<(usize, Outcome)> {
        (0..12)
            .map(|row| 3 * row + 1)
            .flat_map(|n| {
                let name = format!("Street {}-{}-{}", n, n + 1, n + 2);
                (n..n + 3).map(move |p| (p, Outcome::new(name.clone(), STREET)))
            })
            .collect()
    }

    /// 2x2 blocks anchored at columns one and two of the first eleven
    /// rows: 22 corners, four positions each
    fn corners() -> Vec<(usize, Outcome)> {
        (0..11)
            .flat_map(|row| [3 * row + 1, 3 * row + 2])
            .flat_map(|n| {
                let name = format!("Corner {}-{}-{}-{}", n, n + 1, n + 3, n + 4);
                [0, 1, 3, 4]
                    .into_iter()
                    .map(move |d| (n + d, Outcome::new(name.clone(), CORNER)))
            })
            .collect()
    }

    /// the one five-number bet an American wheel offers
    fn fives() -> Vec<(usize, Outcome)> {
        [0, DOUBLE_ZERO, 1, 2, 3]
            .into_iter()
            .map(|p| (p, Outcome::new("Five Bet", FIVE)))
            .collect()
    }

    /// adjacent street pairs: 11 six-number blocks
    fn lines() -> Vec<(usize, Outcome)> {
        (0..11)
            .map(|row| 3 * row + 1)
            .flat_map(|n| {
                let name = format!("Line {}-{}", n, n + 5);
                (n..n + 6).map(move |p| (p, Outcome::new(name.clone(), LINE)))
            })
            .collect()
    }

    fn dozens() -> Vec<(usize, Outcome)> {
        [1, 13, 25]
            .into_iter()
            .flat_map(|d| {
                let name = format!("Dozen {}-{}", d, d + 11);
                (d..d + 12).map(move |p| (p, Outcome::new(name.clone(), DOZEN)))
            })
            .collect()
    }

    fn columns() -> Vec<(usize, Outcome)> {
        [1, 2, 3]
            .into_iter()
            .flat_map(|c| {
                let name = format!("Column {}", c);
                (c..=36)
                    .step_by(3)
                    .map(move |p| (p, Outcome::new(name.clone(), COLUMN)))
            })
            .collect()
    }

    /// the six 1:1 bets of the standard layout
    fn evens() -> Vec<(usize, Outcome)> {
        let reds = REDS.to_vec();
        let blacks = (1..=36).filter(|n| !REDS.contains(n)).collect::<Vec<usize>>();
        let evens = (2..=36).step_by(2).collect::<Vec<usize>>();
        let odds = (1..=36).step_by(2).collect::<Vec<usize>>();
        let lows = (1..=18).collect::<Vec<usize>>();
        let highs = (19..=36).collect::<Vec<usize>>();
        [
            ("Red", reds),
            ("Black", blacks),
            ("Even", evens),
            ("Odd", odds),
            ("Low", lows),
            ("High", highs),
        ]
        .into_iter()
        .flat_map(|(name, positions)| {
            positions
                .into_iter()
                .map(move |p| (p, Outcome::new(name, EVEN)))
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BINS;
    use std::collections::HashSet;

    fn distinct(placements: &[(usize, Outcome)]) -> usize {
        placements
            .iter()
            .map(|(_, o)| o.name())
            .collect::<HashSet<&str>>()
            .len()
    }

    fn built() -> Wheel {
        let mut wheel = Wheel::new();
        BinBuilder::build(&mut wheel);
        wheel
    }

    #[test]
    fn straight_counts() {
        let straights = BinBuilder::straights();
        assert!(straights.len() == 38);
        assert!(distinct(&straights) == 38);
    }

    #[test]
    fn split_counts() {
        let splits = BinBuilder::splits();
        assert!(splits.len() == 114);
        assert!(distinct(&splits) == 57);
    }

    #[test]
    fn street_counts() {
        let streets = BinBuilder::streets();
        assert!(streets.len() == 36);
        assert!(distinct(&streets) == 12);
    }

    #[test]
    fn corner_counts() {
        let corners = BinBuilder::corners();
        assert!(corners.len() == 88);
        assert!(distinct(&corners) == 22);
    }

    #[test]
    fn five_counts() {
        let fives = BinBuilder::fives();
        assert!(fives.len() == 5);
        assert!(distinct(&fives) == 1);
    }

    #[test]
    fn line_counts() {
        let lines = BinBuilder::lines();
        assert!(lines.len() == 66);
        assert!(distinct(&lines) == 11);
    }

    #[test]
    fn dozen_counts() {
        let dozens = BinBuilder::dozens();
        assert!(dozens.len() == 36);
        assert!(distinct(&dozens) == 3);
    }

    #[test]
    fn column_counts() {
        let columns = BinBuilder::columns();
        assert!(columns.len() == 36);
        assert!(distinct(&columns) == 3);
    }

    #[test]
    fn even_money_counts() {
        let evens = BinBuilder::evens();
        assert!(evens.len() == 108);
        assert!(distinct(&evens) == 6);
    }

    #[test]
    fn registry_holds_every_distinct_outcome() {
        assert!(built().outcomes().len() == 38 + 57 + 12 + 22 + 1 + 11 + 3 + 3 + 6);
    }

    #[test]
    fn every_bin_is_occupied() {
        let wheel = built();
        for position in 0..BINS {
            assert!(wheel.get(position).size() > 0);
        }
    }

    #[test]
    fn interning_shares_one_instance_per_name() {
        let wheel = built();
        for position in 0..BINS {
            for outcome in wheel.get(position).iter() {
                let registered = wheel.get_outcome(outcome.name()).expect("registered");
                assert!(Rc::ptr_eq(outcome, &registered));
            }
        }
    }

    #[test]
    fn zeroes_pay_straight_and_five_only() {
        let wheel = built();
        assert!(wheel.get(0).size() == 2);
        assert!(wheel.get(0).contains(&Outcome::new("0", STRAIGHT)));
        assert!(wheel.get(DOUBLE_ZERO).size() == 2);
        assert!(wheel.get(DOUBLE_ZERO).contains(&Outcome::new("00", STRAIGHT)));
        for bin in [wheel.get(0), wheel.get(DOUBLE_ZERO)] {
            assert!(bin.contains(&Outcome::new("Five Bet", FIVE)));
        }
    }

    #[test]
    fn zero_and_double_zero_are_distinct_straights() {
        let wheel = built();
        assert!(!wheel.get(0).contains(&Outcome::new("00", STRAIGHT)));
        assert!(!wheel.get(DOUBLE_ZERO).contains(&Outcome::new("0", STRAIGHT)));
    }

    #[test]
    fn an_edge_number_pays_eleven_ways() {
        // 36: straight, two splits, one street, one corner, one line,
        // dozen, column, red, even, high
        let wheel = built();
        let bin = wheel.get(36);
        assert!(bin.size() == 11);
        assert!(bin.contains(&Outcome::new("Split 35-36", SPLIT)));
        assert!(bin.contains(&Outcome::new("Split 33-36", SPLIT)));
        assert!(bin.contains(&Outcome::new("Street 34-35-36", STREET)));
        assert!(bin.contains(&Outcome::new("Corner 32-33-35-36", CORNER)));
        assert!(bin.contains(&Outcome::new("Line 31-36", LINE)));
        assert!(bin.contains(&Outcome::new("Dozen 25-36", DOZEN)));
        assert!(bin.contains(&Outcome::new("Column 3", COLUMN)));
        assert!(bin.contains(&Outcome::new("Red", EVEN)));
        assert!(bin.contains(&Outcome::new("Even", EVEN)));
        assert!(bin.contains(&Outcome::new("High", EVEN)));
    }

    #[test]
    fn a_center_number_pays_seventeen_ways() {
        // 17: straight, four splits, one street, four corners, two
        // lines, dozen, column, black, odd, low
        let wheel = built();
        let bin = wheel.get(17);
        assert!(bin.size() == 17);
        assert!(bin.contains(&Outcome::new("Corner 13-14-16-17", CORNER)));
        assert!(bin.contains(&Outcome::new("Corner 14-15-17-18", CORNER)));
        assert!(bin.contains(&Outcome::new("Corner 16-17-19-20", CORNER)));
        assert!(bin.contains(&Outcome::new("Corner 17-18-20-21", CORNER)));
        assert!(bin.contains(&Outcome::new("Black", EVEN)));
        assert!(bin.contains(&Outcome::new("Odd", EVEN)));
        assert!(bin.contains(&Outcome::new("Low", EVEN)));
    }

    #[test]
    fn red_and_black_partition_the_numbers() {
        let wheel = built();
        let red = Outcome::new("Red", EVEN);
        let black = Outcome::new("Black", EVEN);
        for n in 1..=36 {
            assert!(wheel.get(n).contains(&red) != wheel.get(n).contains(&black));
        }
        for zero in [wheel.get(0), wheel.get(DOUBLE_ZERO)] {
            assert!(!zero.contains(&red));
            assert!(!zero.contains(&black));
        }
    }

    #[test]
    fn even_money_follows_the_standard_layout() {
        let wheel = built();
        assert!(wheel.get(2).contains(&Outcome::new("Even", EVEN)));
        assert!(wheel.get(1).contains(&Outcome::new("Odd", EVEN)));
        assert!(wheel.get(1).contains(&Outcome::new("Low", EVEN)));
        assert!(wheel.get(18).contains(&Outcome::new("Low", EVEN)));
        assert!(wheel.get(19).contains(&Outcome::new("High", EVEN)));
        assert!(wheel.get(36).contains(&Outcome::new("High", EVEN)));
    }
}
