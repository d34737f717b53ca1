use {crate::*, glam::IVec2};

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Eq, PartialEq)]
    #[cfg_attr(test, derive(Debug))]
    enum Space {
        Empty = b'.',
        Galaxy = b'#',
    }
}

pub struct Solution {
    galaxies: Vec<IVec2>,
}

impl Solution {
    /// Every row and column without a galaxy is really `expansion` rows or columns wide, so each
    /// galaxy shifts by the number of empty lines before it, scaled by `expansion - 1`.
    fn expanded_galaxies(&self, expansion: i32) -> Vec<IVec2> {
        let empty_x: Vec<i32> = Self::empty_coordinates(self.galaxies.iter().map(|pos| pos.x));
        let empty_y: Vec<i32> = Self::empty_coordinates(self.galaxies.iter().map(|pos| pos.y));

        self.galaxies
            .iter()
            .map(|&pos| {
                let shift: IVec2 = IVec2::new(
                    empty_x.iter().filter(|&&x| x < pos.x).count() as i32,
                    empty_y.iter().filter(|&&y| y < pos.y).count() as i32,
                );

                pos + shift * (expansion - 1_i32)
            })
            .collect()
    }

    fn empty_coordinates<I: Iterator<Item = i32> + Clone>(occupied: I) -> Vec<i32> {
        let min: i32 = occupied.clone().min().unwrap_or_default();
        let max: i32 = occupied.clone().max().unwrap_or_default();

        (min..=max)
            .filter(|&coordinate| occupied.clone().all(|occupied| occupied != coordinate))
            .collect()
    }

    fn pair_distance_sum(&self, expansion: i32) -> u64 {
        let galaxies: Vec<IVec2> = self.expanded_galaxies(expansion);

        galaxies
            .iter()
            .enumerate()
            .flat_map(|(index, &a)| {
                galaxies[index + 1_usize..]
                    .iter()
                    .map(move |&b| manhattan_distance(a, b) as u64)
            })
            .sum()
    }
}

impl RunSolution for Solution {
    type Answer1 = u64;
    type Answer2 = u64;

    fn from_input(input: &str) -> ParseResult<Self> {
        let image: Grid<Space> = parse_all(input)?;
        let galaxies: Vec<IVec2> = image.positions(|&space| space == Space::Galaxy).collect();

        Ok(Self { galaxies })
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.pair_distance_sum(2_i32)
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.pair_distance_sum(1_000_000_i32)
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: u64 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 374_u64);

        assert_eq!(solution.pair_distance_sum(10_i32), 1030_u64);
        assert_eq!(solution.pair_distance_sum(100_i32), 8410_u64);

        let answer2: u64 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 82000210_u64);
    }
}

const SAMPLE_STR: &'static str = "\
    ...#......\n\
    .......#..\n\
    #.........\n\
    ..........\n\
    ......#...\n\
    .#........\n\
    .........#\n\
    ..........\n\
    .......#..\n\
    #...#.....\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();

        assert_eq!(solution.galaxies.len(), 9_usize);
        assert_eq!(solution.galaxies[0_usize], IVec2::new(3_i32, 0_i32));
    }

    #[test]
    fn test_expanded_galaxies() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();
        let expanded: Vec<IVec2> = solution.expanded_galaxies(2_i32);

        // Columns 2, 5, and 8 and rows 3 and 7 are empty.
        assert_eq!(expanded[0_usize], IVec2::new(4_i32, 0_i32));
        assert_eq!(expanded[8_usize], IVec2::new(5_i32, 11_i32));
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
