use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::space1,
        combinator::map,
        multi::separated_list1,
        sequence::separated_pair,
        IResult,
    },
    rayon::iter::{IntoParallelRefIterator, ParallelIterator},
};

#[cfg_attr(test, derive(Debug, PartialEq))]
struct CalibrationEquation {
    test_value: u64,
    operands: Vec<u64>,
}

impl CalibrationEquation {
    fn could_be_true(&self, with_concatenation: bool) -> bool {
        self.operands.split_first().is_some_and(|(&first, rest)| {
            Self::can_reach(self.test_value, first, rest, with_concatenation)
        })
    }

    /// Operators apply left to right, so the partial result only ever grows; overshooting the
    /// target prunes the branch.
    fn can_reach(target: u64, accumulated: u64, rest: &[u64], with_concatenation: bool) -> bool {
        if accumulated > target {
            return false;
        }

        match rest.split_first() {
            None => accumulated == target,
            Some((&next, rest)) => {
                Self::can_reach(target, accumulated + next, rest, with_concatenation)
                    || Self::can_reach(target, accumulated * next, rest, with_concatenation)
                    || (with_concatenation
                        && Self::can_reach(
                            target,
                            Self::concatenate(accumulated, next),
                            rest,
                            with_concatenation,
                        ))
            }
        }
    }

    fn concatenate(left: u64, right: u64) -> u64 {
        let mut shift: u64 = 10_u64;

        while shift <= right {
            shift *= 10_u64;
        }

        left * shift + right
    }
}

impl Parse for CalibrationEquation {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                parse_integer::<u64>,
                tag(": "),
                separated_list1(space1, parse_integer::<u64>),
            ),
            |(test_value, operands)| Self {
                test_value,
                operands,
            },
        )(input)
    }
}

impl<'i> FromLines<'i> for CalibrationEquation {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        let line: &str = cursor.next_line()?;

        Ok(Self::parse(line)?.1)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<CalibrationEquation>);

impl Solution {
    fn total_calibration(&self, with_concatenation: bool) -> u64 {
        self.0
            .par_iter()
            .filter(|equation| equation.could_be_true(with_concatenation))
            .map(|equation| equation.test_value)
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
        self.total_calibration(false)
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.total_calibration(true)
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: u64 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 3749_u64);

        let answer2: u64 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 11387_u64);
    }
}

const SAMPLE_STR: &'static str = "\
    190: 10 19\n\
    3267: 81 40 27\n\
    83: 17 5\n\
    156: 15 6\n\
    7290: 6 8 6 15\n\
    161011: 16 10 13\n\
    192: 17 8 14\n\
    21037: 9 7 18 13\n\
    292: 11 6 16 20\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_could_be_true() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();
        let expected: [bool; 9_usize] = [
            true, true, false, false, false, false, false, false, true,
        ];

        for (equation, expected) in solution.0.iter().zip(expected) {
            assert_eq!(
                equation.could_be_true(false),
                expected,
                "equation {}",
                equation.test_value
            );
        }
    }

    #[test]
    fn test_concatenate() {
        assert_eq!(CalibrationEquation::concatenate(15_u64, 6_u64), 156_u64);
        assert_eq!(CalibrationEquation::concatenate(48_u64, 6_u64), 486_u64);
        assert_eq!(CalibrationEquation::concatenate(12_u64, 345_u64), 12345_u64);
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
