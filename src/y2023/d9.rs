use {
    crate::*,
    derive_deref::Deref,
    nom::{character::complete::space1, multi::separated_list1},
};

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Deref)]
#[repr(transparent)]
struct History(Vec<i64>);

impl History {
    fn derived(sequence: &[i64]) -> Vec<i64> {
        sequence
            .windows(2_usize)
            .map(|pair| pair[1_usize] - pair[0_usize])
            .collect()
    }

    fn next_value(sequence: &[i64]) -> i64 {
        if sequence.iter().all(|&value| value == 0_i64) {
            0_i64
        } else {
            sequence.last().copied().unwrap_or_default()
                + Self::next_value(&Self::derived(sequence))
        }
    }

    fn previous_value(sequence: &[i64]) -> i64 {
        if sequence.iter().all(|&value| value == 0_i64) {
            0_i64
        } else {
            sequence.first().copied().unwrap_or_default()
                - Self::previous_value(&Self::derived(sequence))
        }
    }
}

impl<'i> FromLines<'i> for History {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        let line: &str = cursor.next_line()?;

        Ok(Self(separated_list1(space1, parse_integer::<i64>)(line)?.1))
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<History>);

impl Solution {
    fn next_value_sum(&self) -> i64 {
        self.0
            .iter()
            .map(|history| History::next_value(history))
            .sum()
    }

    fn previous_value_sum(&self) -> i64 {
        self.0
            .iter()
            .map(|history| History::previous_value(history))
            .sum()
    }
}

impl RunSolution for Solution {
    type Answer1 = i64;
    type Answer2 = i64;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(parse(input)?))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.next_value_sum()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.previous_value_sum()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: i64 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 114_i64);

        let answer2: i64 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 2_i64);
    }
}

const SAMPLE_STR: &'static str = "\
    0 3 6 9 12 15\n\
    1 3 6 10 15 21\n\
    10 13 16 21 30 45\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_value() {
        assert_eq!(History::next_value(&[0_i64, 3_i64, 6_i64, 9_i64, 12_i64, 15_i64]), 18_i64);
        assert_eq!(History::next_value(&[1_i64, 3_i64, 6_i64, 10_i64, 15_i64, 21_i64]), 28_i64);
        assert_eq!(
            History::next_value(&[10_i64, 13_i64, 16_i64, 21_i64, 30_i64, 45_i64]),
            68_i64
        );
    }

    #[test]
    fn test_previous_value() {
        assert_eq!(
            History::previous_value(&[10_i64, 13_i64, 16_i64, 21_i64, 30_i64, 45_i64]),
            5_i64
        );
        assert_eq!(History::previous_value(&[0_i64, 3_i64, 6_i64]), -3_i64);
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
