use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::{space0, space1},
        combinator::map,
        multi::separated_list1,
        sequence::{delimited, tuple},
        IResult,
    },
};

#[cfg_attr(test, derive(Debug, PartialEq))]
struct ScratchCard {
    winners: Vec<u32>,
    have: Vec<u32>,
}

impl ScratchCard {
    fn matches(&self) -> usize {
        self.have
            .iter()
            .filter(|value| self.winners.contains(value))
            .count()
    }

    /// One point for the first match, doubled for each match after that.
    fn points(&self) -> u32 {
        match self.matches() {
            0_usize => 0_u32,
            matches => 1_u32 << (matches - 1_usize),
        }
    }
}

impl Parse for ScratchCard {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                delimited(
                    tuple((tag("Card"), space1)),
                    parse_integer::<u32>,
                    tuple((tag(":"), space1)),
                ),
                separated_list1(space1, parse_integer::<u32>),
                delimited(space0, tag("|"), space1),
                separated_list1(space1, parse_integer::<u32>),
            )),
            |(_id, winners, _, have)| Self { winners, have },
        )(input)
    }
}

impl<'i> FromLines<'i> for ScratchCard {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        let line: &str = cursor.next_line()?;

        Ok(Self::parse(line)?.1)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<ScratchCard>);

impl Solution {
    fn total_points(&self) -> u32 {
        self.0.iter().map(ScratchCard::points).sum()
    }

    /// Each card's matches win copies of the following cards, copies win more copies, and so on.
    fn total_cards(&self) -> u32 {
        let mut counts: Vec<u32> = vec![1_u32; self.0.len()];

        for (index, card) in self.0.iter().enumerate() {
            let count: u32 = counts[index];

            for copied in counts
                .iter_mut()
                .skip(index + 1_usize)
                .take(card.matches())
            {
                *copied += count;
            }
        }

        counts.into_iter().sum()
    }
}

impl RunSolution for Solution {
    type Answer1 = u32;
    type Answer2 = u32;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(parse(input)?))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.total_points()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.total_cards()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: u32 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 13_u32);

        let answer2: u32 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 30_u32);
    }
}

const SAMPLE_STR: &'static str = "\
    Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53\n\
    Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19\n\
    Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1\n\
    Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83\n\
    Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36\n\
    Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            ScratchCard::parse("Card 1: 41 48 | 83  6 48"),
            Ok((
                "",
                ScratchCard {
                    winners: vec![41_u32, 48_u32],
                    have: vec![83_u32, 6_u32, 48_u32],
                }
            ))
        );
    }

    #[test]
    fn test_points() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();
        let expected: [u32; 6_usize] = [8_u32, 2_u32, 2_u32, 1_u32, 0_u32, 0_u32];

        for (card, expected) in solution.0.iter().zip(expected) {
            assert_eq!(card.points(), expected);
        }
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
