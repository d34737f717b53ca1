use {
    crate::*,
    nom::{
        bytes::complete::take,
        character::complete::space1,
        combinator::{map, map_res},
        sequence::separated_pair,
        IResult,
    },
};

#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(test, derive(Debug))]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Hand {
    cards: [u8; 5_usize],
    bid: u64,
}

impl Hand {
    /// Card strength as a rank from weakest (0) up. With jokers wild, `J` drops below every other
    /// card and the rest close ranks.
    fn strength(card: u8, jokers_wild: bool) -> u8 {
        match card {
            b'A' => 12_u8,
            b'K' => 11_u8,
            b'Q' => 10_u8,
            b'J' => {
                if jokers_wild {
                    0_u8
                } else {
                    9_u8
                }
            }
            b'T' => {
                if jokers_wild {
                    9_u8
                } else {
                    8_u8
                }
            }
            digit => digit - b'2' + jokers_wild as u8,
        }
    }

    fn hand_type(self, jokers_wild: bool) -> HandType {
        let mut counts: [u8; 13_usize] = [0_u8; 13_usize];
        let mut jokers: u8 = 0_u8;

        for card in self.cards {
            if jokers_wild && card == b'J' {
                jokers += 1_u8;
            } else {
                counts[Self::strength(card, jokers_wild) as usize] += 1_u8;
            }
        }

        let mut counts: Vec<u8> = counts.into_iter().filter(|&count| count != 0_u8).collect();

        counts.sort_unstable_by(|a, b| b.cmp(a));

        // Jokers always strengthen the largest group. Five jokers leave no group to join.
        if counts.is_empty() {
            counts.push(0_u8);
        }

        counts[0_usize] += jokers;

        match (
            counts[0_usize],
            counts.get(1_usize).copied().unwrap_or_default(),
        ) {
            (5_u8, _) => HandType::FiveOfAKind,
            (4_u8, _) => HandType::FourOfAKind,
            (3_u8, 2_u8) => HandType::FullHouse,
            (3_u8, _) => HandType::ThreeOfAKind,
            (2_u8, 2_u8) => HandType::TwoPair,
            (2_u8, _) => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }

    fn sort_key(self, jokers_wild: bool) -> (HandType, [u8; 5_usize]) {
        (
            self.hand_type(jokers_wild),
            self.cards.map(|card| Self::strength(card, jokers_wild)),
        )
    }
}

impl Parse for Hand {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                map_res(take(5_usize), |cards: &str| {
                    <[u8; 5_usize]>::try_from(cards.as_bytes())
                }),
                space1,
                parse_integer::<u64>,
            ),
            |(cards, bid)| Self { cards, bid },
        )(input)
    }
}

impl<'i> FromLines<'i> for Hand {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        let line: &str = cursor.next_line()?;

        Ok(Self::parse(line)?.1)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Hand>);

impl Solution {
    fn total_winnings(&self, jokers_wild: bool) -> u64 {
        let mut hands: Vec<Hand> = self.0.clone();

        hands.sort_by_key(|hand| hand.sort_key(jokers_wild));

        hands
            .into_iter()
            .enumerate()
            .map(|(index, hand)| (index as u64 + 1_u64) * hand.bid)
            .sum()
    }
}

impl RunSolution for Solution {
    type Answer1 = u64;
    type Answer2 = u64;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(parse(input)?))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.total_winnings(false)
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.total_winnings(true)
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: u64 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 6440_u64);

        let answer2: u64 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 5905_u64);
    }
}

const SAMPLE_STR: &'static str = "\
    32T3K 765\n\
    T55J5 684\n\
    KK677 28\n\
    KTJJT 220\n\
    QQQJA 483\n";

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(cards: &str) -> Hand {
        Hand {
            cards: cards.as_bytes().try_into().unwrap(),
            bid: 0_u64,
        }
    }

    #[test]
    fn test_hand_type() {
        assert_eq!(hand("32T3K").hand_type(false), HandType::OnePair);
        assert_eq!(hand("T55J5").hand_type(false), HandType::ThreeOfAKind);
        assert_eq!(hand("KK677").hand_type(false), HandType::TwoPair);
        assert_eq!(hand("23332").hand_type(false), HandType::FullHouse);
        assert_eq!(hand("AAAAA").hand_type(false), HandType::FiveOfAKind);
    }

    #[test]
    fn test_hand_type_jokers_wild() {
        assert_eq!(hand("32T3K").hand_type(true), HandType::OnePair);
        assert_eq!(hand("T55J5").hand_type(true), HandType::FourOfAKind);
        assert_eq!(hand("KTJJT").hand_type(true), HandType::FourOfAKind);
        assert_eq!(hand("QQQJA").hand_type(true), HandType::FourOfAKind);
        assert_eq!(hand("JJJJJ").hand_type(true), HandType::FiveOfAKind);
    }

    #[test]
    fn test_strength_orders_jokers_low() {
        assert!(Hand::strength(b'J', true) < Hand::strength(b'2', true));
        assert!(Hand::strength(b'J', false) > Hand::strength(b'T', false));
        assert!(Hand::strength(b'A', true) > Hand::strength(b'K', true));
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
