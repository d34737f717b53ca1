use {crate::*, glam::IVec2};

const WORD: &'static [u8] = b"XMAS";

/// The four rotations of an `X-MAS` cross, as the two diagonals pointing from the `M`s toward
/// the `S`es.
const CROSS_DIAGONALS: [(IVec2, IVec2); 4_usize] = [
    (IVec2::new(1_i32, 1_i32), IVec2::new(1_i32, -1_i32)),
    (IVec2::new(1_i32, -1_i32), IVec2::new(-1_i32, -1_i32)),
    (IVec2::new(-1_i32, -1_i32), IVec2::new(-1_i32, 1_i32)),
    (IVec2::new(-1_i32, 1_i32), IVec2::new(1_i32, 1_i32)),
];

pub struct Solution(Grid<u8>);

impl Solution {
    fn all_directions() -> impl Iterator<Item = IVec2> {
        (-1_i32..=1_i32).flat_map(|y| {
            (-1_i32..=1_i32).filter_map(move |x| {
                let step: IVec2 = IVec2::new(x, y);

                (step != IVec2::ZERO).then_some(step)
            })
        })
    }

    fn word_matches(&self, start: IVec2, step: IVec2) -> bool {
        WORD.iter().enumerate().all(|(offset, &letter)| {
            self.0
                .get(start + step * offset as i32)
                .is_some_and(|&cell| cell == letter)
        })
    }

    fn word_count(&self) -> usize {
        self.0
            .positions(|&cell| cell == b'X')
            .map(|start| {
                Self::all_directions()
                    .filter(|&step| self.word_matches(start, step))
                    .count()
            })
            .sum()
    }

    fn is_cross_center(&self, center: IVec2) -> bool {
        CROSS_DIAGONALS.into_iter().any(|(first, second)| {
            [first, second].into_iter().all(|diagonal| {
                self.0
                    .get(center - diagonal)
                    .is_some_and(|&cell| cell == b'M')
                    && self
                        .0
                        .get(center + diagonal)
                        .is_some_and(|&cell| cell == b'S')
            })
        })
    }

    fn cross_count(&self) -> usize {
        self.0
            .positions(|&cell| cell == b'A')
            .filter(|&center| self.is_cross_center(center))
            .count()
    }
}

impl RunSolution for Solution {
    type Answer1 = usize;
    type Answer2 = usize;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(parse_all(input)?))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.word_count()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.cross_count()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: usize = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 18_usize);

        let answer2: usize = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 9_usize);
    }
}

const SAMPLE_STR: &'static str = "\
    MMMSXXMASM\n\
    MSAMXMSMSA\n\
    AMXSXMAAMM\n\
    MSAMASMSMX\n\
    XMASAMXAMM\n\
    XXAMMXXAMA\n\
    SMSMSASXSS\n\
    SAXAMASAAA\n\
    MAMMMXMMMM\n\
    MXMXAXMASX\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_directions() {
        assert_eq!(Solution::all_directions().count(), 8_usize);
    }

    #[test]
    fn test_word_matches() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();

        // The top row ends in XMAS read left to right starting at (5, 0).
        assert!(solution.word_matches(IVec2::new(5_i32, 0_i32), IVec2::X));
        assert!(!solution.word_matches(IVec2::new(5_i32, 0_i32), IVec2::Y));
    }

    #[test]
    fn test_is_cross_center() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();

        assert!(solution.is_cross_center(IVec2::new(2_i32, 1_i32)));
        assert!(!solution.is_cross_center(IVec2::new(2_i32, 2_i32)));
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
