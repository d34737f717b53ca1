use {
    crate::*,
    nom::{character::complete::space1, combinator::map, sequence::separated_pair, IResult},
    std::collections::HashMap,
};

#[cfg_attr(test, derive(Debug, PartialEq))]
struct LocationPair {
    left: u32,
    right: u32,
}

impl Parse for LocationPair {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(parse_integer::<u32>, space1, parse_integer::<u32>),
            |(left, right)| Self { left, right },
        )(input)
    }
}

impl<'i> FromLines<'i> for LocationPair {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        let line: &str = cursor.next_line()?;

        Ok(Self::parse(line)?.1)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<LocationPair>);

impl Solution {
    fn sorted_columns(&self) -> (Vec<u32>, Vec<u32>) {
        let mut left: Vec<u32> = self.0.iter().map(|pair| pair.left).collect();
        let mut right: Vec<u32> = self.0.iter().map(|pair| pair.right).collect();

        left.sort_unstable();
        right.sort_unstable();

        (left, right)
    }

    fn total_distance(&self) -> u32 {
        let (left, right): (Vec<u32>, Vec<u32>) = self.sorted_columns();

        left.into_iter()
            .zip(right)
            .map(|(left, right)| left.abs_diff(right))
            .sum()
    }

    /// Each left value scores itself times the number of times it appears on the right.
    fn similarity_score(&self) -> u32 {
        let mut right_counts: HashMap<u32, u32> = HashMap::new();

        for pair in &self.0 {
            *right_counts.entry(pair.right).or_default() += 1_u32;
        }

        self.0
            .iter()
            .map(|pair| pair.left * right_counts.get(&pair.left).copied().unwrap_or_default())
            .sum()
    }
}

impl RunSolution for Solution {
    type Answer1 = u32;
    type Answer2 = u32;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(parse(input)?))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.total_distance()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.similarity_score()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: u32 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 11_u32);

        let answer2: u32 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 31_u32);
    }
}

const SAMPLE_STR: &'static str = "\
    3   4\n\
    4   3\n\
    2   5\n\
    1   3\n\
    3   9\n\
    3   3\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();

        assert_eq!(solution.0.len(), 6_usize);
        assert_eq!(
            solution.0[0_usize],
            LocationPair {
                left: 3_u32,
                right: 4_u32
            }
        );
    }

    #[test]
    fn test_sorted_columns() {
        let (left, right): (Vec<u32>, Vec<u32>) =
            Solution::from_input(SAMPLE_STR).unwrap().sorted_columns();

        assert_eq!(left, vec![1_u32, 2_u32, 3_u32, 3_u32, 3_u32, 4_u32]);
        assert_eq!(right, vec![3_u32, 3_u32, 3_u32, 4_u32, 5_u32, 9_u32]);
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
