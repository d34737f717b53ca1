use {
    crate::*,
    nom::{character::complete::space1, multi::separated_list1},
    std::collections::HashMap,
};

pub struct Solution(Vec<u64>);

impl Solution {
    const PART_1_BLINKS: usize = 25_usize;
    const PART_2_BLINKS: usize = 75_usize;

    /// One blink turns a stone into one or two stones.
    fn blink(stone: u64) -> (u64, Option<u64>) {
        if stone == 0_u64 {
            (1_u64, None)
        } else {
            let digits: u32 = stone.ilog10() + 1_u32;

            if digits % 2_u32 == 0_u32 {
                let half_shift: u64 = 10_u64.pow(digits / 2_u32);

                (stone / half_shift, Some(stone % half_shift))
            } else {
                (stone * 2024_u64, None)
            }
        }
    }

    /// Stone order never affects a blink, so only the count of each distinct stone matters.
    fn blinked_stone_count(&self, blinks: usize) -> u64 {
        let mut counts: HashMap<u64, u64> = HashMap::new();

        for &stone in &self.0 {
            *counts.entry(stone).or_default() += 1_u64;
        }

        for _ in 0_usize..blinks {
            let mut next_counts: HashMap<u64, u64> = HashMap::with_capacity(counts.len());

            for (stone, count) in counts {
                let (first, second) = Self::blink(stone);

                *next_counts.entry(first).or_default() += count;

                if let Some(second) = second {
                    *next_counts.entry(second).or_default() += count;
                }
            }

            counts = next_counts;
        }

        counts.into_values().sum()
    }
}

impl RunSolution for Solution {
    type Answer1 = u64;
    type Answer2 = u64;

    fn from_input(input: &str) -> ParseResult<Self> {
        let line: &str = parse_all::<WholeLine>(input)?.data;

        Ok(Self(
            separated_list1(space1, parse_integer::<u64>)(line)?.1,
        ))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.blinked_stone_count(Self::PART_1_BLINKS)
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.blinked_stone_count(Self::PART_2_BLINKS)
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: u64 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 55312_u64);

        let answer2: u64 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 65601038650482_u64);
    }
}

const SAMPLE_STR: &'static str = "125 17\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blink() {
        assert_eq!(Solution::blink(0_u64), (1_u64, None));
        assert_eq!(Solution::blink(1_u64), (2024_u64, None));
        assert_eq!(Solution::blink(10_u64), (1_u64, Some(0_u64)));
        assert_eq!(Solution::blink(99_u64), (9_u64, Some(9_u64)));
        assert_eq!(Solution::blink(999_u64), (2021976_u64, None));
    }

    #[test]
    fn test_blinked_stone_count() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();

        assert_eq!(solution.blinked_stone_count(6_usize), 22_u64);
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
