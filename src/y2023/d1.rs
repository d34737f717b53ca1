use crate::*;

const DIGIT_WORDS: [&str; 9_usize] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<String>);

impl Solution {
    fn calibration_value<I: Iterator<Item = u32>>(mut digits: I) -> u32 {
        digits.next().map_or(0_u32, |first| {
            let last: u32 = digits.last().unwrap_or(first);

            first * 10_u32 + last
        })
    }

    /// The digit at `index`, counting both literal digits and spelled-out digit words starting
    /// there. Words may overlap: "eightwo" yields 8 at index 0 and 2 at index 4.
    fn digit_at(line: &str, index: usize) -> Option<u32> {
        let rest: &str = &line[index..];

        rest.chars()
            .next()
            .and_then(|rest_char| rest_char.to_digit(10_u32))
            .or_else(|| {
                DIGIT_WORDS
                    .iter()
                    .position(|digit_word| rest.starts_with(digit_word))
                    .map(|digit_word_index| digit_word_index as u32 + 1_u32)
            })
    }

    fn digit_sum(&self) -> u32 {
        self.0
            .iter()
            .map(|line| Self::calibration_value(line.chars().filter_map(|c| c.to_digit(10_u32))))
            .sum()
    }

    fn digit_and_word_sum(&self) -> u32 {
        self.0
            .iter()
            .map(|line| {
                Self::calibration_value(
                    (0_usize..line.len()).filter_map(|index| Self::digit_at(line, index)),
                )
            })
            .sum()
    }
}

impl RunSolution for Solution {
    type Answer1 = u32;
    type Answer2 = u32;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(
            parse::<WholeLine>(input)?
                .into_iter()
                .map(|whole_line| whole_line.data.to_owned())
                .collect(),
        ))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.digit_sum()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.digit_and_word_sum()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STRS[0_usize]).expect("sample 1 parses");
        let answer1: u32 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 142_u32);

        let mut solution: Self = Self::from_input(SAMPLE_STRS[1_usize]).expect("sample 2 parses");
        let answer2: u32 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 281_u32);
    }
}

const SAMPLE_STRS: &'static [&'static str] = &[
    "\
    1abc2\n\
    pqr3stu8vwx\n\
    a1b2c3d4e5f\n\
    treb7uchet\n",
    "\
    two1nine\n\
    eightwothree\n\
    abcone2threexyz\n\
    xtwone3four\n\
    4nineeightseven2\n\
    zoneight234\n\
    7pqrstsixteen\n",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calibration_value() {
        assert_eq!(Solution::calibration_value([1_u32, 5_u32, 2_u32].into_iter()), 12_u32);
        assert_eq!(Solution::calibration_value([7_u32].into_iter()), 77_u32);
        assert_eq!(Solution::calibration_value([].into_iter()), 0_u32);
    }

    #[test]
    fn test_digit_at() {
        let line: &str = "eightwothree";

        assert_eq!(Solution::digit_at(line, 0_usize), Some(8_u32));
        assert_eq!(Solution::digit_at(line, 1_usize), None);
        assert_eq!(Solution::digit_at(line, 4_usize), Some(2_u32));
        assert_eq!(Solution::digit_at(line, 7_usize), Some(3_u32));
        assert_eq!(Solution::digit_at("a1b", 1_usize), Some(1_u32));
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
