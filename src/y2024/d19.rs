use {
    crate::*,
    nom::{bytes::complete::tag, character::complete::alpha1, combinator::map, multi::separated_list1},
};

pub struct Solution {
    towels: Vec<String>,
    designs: Vec<String>,
}

impl Solution {
    /// Counts towel sequences spelling out `design`, tabulating suffix counts from the end.
    fn arrangement_count(&self, design: &str) -> u64 {
        let mut arrangements: Vec<u64> = vec![0_u64; design.len() + 1_usize];

        arrangements[design.len()] = 1_u64;

        for index in (0_usize..design.len()).rev() {
            arrangements[index] = self
                .towels
                .iter()
                .filter(|towel| design[index..].starts_with(towel.as_str()))
                .map(|towel| arrangements[index + towel.len()])
                .sum();
        }

        arrangements[0_usize]
    }

    fn possible_design_count(&self) -> usize {
        self.designs
            .iter()
            .filter(|design| self.arrangement_count(design) > 0_u64)
            .count()
    }

    fn total_arrangement_count(&self) -> u64 {
        self.designs
            .iter()
            .map(|design| self.arrangement_count(design))
            .sum()
    }
}

impl RunSolution for Solution {
    type Answer1 = usize;
    type Answer2 = u64;

    fn from_input(input: &str) -> ParseResult<Self> {
        let mut cursor: LineCursor = LineCursor::new(input);
        let towels: Vec<String> = separated_list1(tag(", "), map(alpha1, |towel: &str| {
            towel.to_owned()
        }))(cursor.next_line()?)?
        .1;
        let separator: &str = cursor.next_line()?;

        if !separator.is_empty() {
            return Err(ParseError::Malformed(format!(
                "expected a blank line after the towels, found {separator:?}"
            )));
        }

        let mut designs: Vec<String> = Vec::new();

        while let Some(line) = cursor.try_next_line() {
            designs.push(line.to_owned());
        }

        Ok(Self { towels, designs })
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.possible_design_count()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.total_arrangement_count()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: usize = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 6_usize);

        let answer2: u64 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 16_u64);
    }
}

const SAMPLE_STR: &'static str = "\
    r, wr, b, g, bwu, rb, gb, br\n\
    \n\
    brwrr\n\
    bggr\n\
    gbbr\n\
    rrbgbr\n\
    ubwu\n\
    bwurrg\n\
    brgr\n\
    bbrgwb\n";

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| Solution::from_input(SAMPLE_STR).unwrap())
    }

    #[test]
    fn test_from_input() {
        assert_eq!(solution().towels.len(), 8_usize);
        assert_eq!(solution().towels[1_usize], "wr");
        assert_eq!(solution().designs.len(), 8_usize);
    }

    #[test]
    fn test_arrangement_count() {
        let expected: [u64; 8_usize] = [
            2_u64, 1_u64, 4_u64, 6_u64, 0_u64, 1_u64, 2_u64, 0_u64,
        ];

        for (design, expected) in solution().designs.iter().zip(expected) {
            assert_eq!(
                solution().arrangement_count(design),
                expected,
                "design {design:?}"
            );
        }
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
