use {
    crate::*,
    bitvec::prelude::*,
    glam::IVec2,
    strum::IntoEnumIterator,
};

/// A topographic height, or `None` for impassable ground in the smaller examples.
#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy, PartialEq)]
struct TrailCell(Option<u8>);

impl TryFrom<char> for TrailCell {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Self(None)),
            _ => value
                .to_digit(10_u32)
                .map(|digit| Self(Some(digit as u8)))
                .ok_or(()),
        }
    }
}

pub struct Solution(Grid<TrailCell>);

impl Solution {
    fn height(&self, pos: IVec2) -> Option<u8> {
        self.0.get(pos).and_then(|cell| cell.0)
    }

    fn trailheads(&self) -> Vec<IVec2> {
        self.0.positions(|cell| cell.0 == Some(0_u8)).collect()
    }

    /// The number of summits reachable from `trailhead` along strictly ascending trails.
    fn trailhead_score(&self, trailhead: IVec2) -> usize {
        let mut visited: BitVec = bitvec![0; self.0.cells().len()];
        let mut frontier: Vec<(IVec2, u8)> = vec![(trailhead, 0_u8)];
        let mut summits: usize = 0_usize;

        visited.set(self.0.index_from_pos(trailhead), true);

        while let Some((pos, height)) = frontier.pop() {
            if height == 9_u8 {
                summits += 1_usize;

                continue;
            }

            for direction in Direction::iter() {
                let next: IVec2 = pos + direction.vec();

                if self.height(next) == Some(height + 1_u8)
                    && !visited.replace(self.0.index_from_pos(next), true)
                {
                    frontier.push((next, height + 1_u8));
                }
            }
        }

        summits
    }

    fn trailhead_score_sum(&self) -> usize {
        self.trailheads()
            .into_iter()
            .map(|trailhead| self.trailhead_score(trailhead))
            .sum()
    }

    /// Distinct ascending trails from each cell to any summit, tabulated from the summits down.
    fn trailhead_rating_sum(&self) -> u64 {
        let mut trails: Vec<u64> = vec![0_u64; self.0.cells().len()];

        for height in (0_u8..=9_u8).rev() {
            for index in 0_usize..trails.len() {
                let pos: IVec2 = self.0.pos_from_index(index);

                if self.height(pos) != Some(height) {
                    continue;
                }

                trails[index] = if height == 9_u8 {
                    1_u64
                } else {
                    Direction::iter()
                        .filter_map(|direction| {
                            let next: IVec2 = pos + direction.vec();

                            (self.height(next) == Some(height + 1_u8))
                                .then(|| trails[self.0.index_from_pos(next)])
                        })
                        .sum()
                };
            }
        }

        self.trailheads()
            .into_iter()
            .map(|trailhead| trails[self.0.index_from_pos(trailhead)])
            .sum()
    }
}

impl RunSolution for Solution {
    type Answer1 = usize;
    type Answer2 = u64;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(parse_all(input)?))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.trailhead_score_sum()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.trailhead_rating_sum()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: usize = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 36_usize);

        let answer2: u64 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 81_u64);
    }
}

const SAMPLE_STR: &'static str = "\
    89010123\n\
    78121874\n\
    87430965\n\
    96549874\n\
    45678903\n\
    32019012\n\
    01329801\n\
    10456732\n";

#[cfg(test)]
mod tests {
    use super::*;

    const SPARSE_SAMPLE_STR: &'static str = "\
        ...0...\n\
        ...1...\n\
        ...2...\n\
        6543456\n\
        7.....7\n\
        8.....8\n\
        9.....9\n";

    #[test]
    fn test_trailheads() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();

        assert_eq!(solution.trailheads().len(), 9_usize);
    }

    #[test]
    fn test_trailhead_score() {
        let solution: Solution = Solution::from_input(SPARSE_SAMPLE_STR).unwrap();

        assert_eq!(solution.trailhead_score(IVec2::new(3_i32, 0_i32)), 2_usize);
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
