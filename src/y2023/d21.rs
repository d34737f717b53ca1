use {
    crate::*,
    bitvec::prelude::*,
    glam::IVec2,
    std::collections::HashSet,
    strum::IntoEnumIterator,
};

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Eq, PartialEq)]
    #[cfg_attr(test, derive(Debug))]
    enum GardenCell {
        Open = b'.',
        Rock = b'#',
        Start = b'S',
    }
}

const PART_1_STEPS: usize = 64_usize;
const PART_2_STEPS: usize = 26501365_usize;

pub struct Solution {
    grid: Grid<GardenCell>,
    start: IVec2,

    /// Overridden by the sample, whose walk is much shorter than the real one.
    steps: usize,
}

impl Solution {
    fn is_rock(&self, pos: IVec2) -> bool {
        self.grid
            .get(pos)
            .is_some_and(|&cell| cell == GardenCell::Rock)
    }

    /// Plots reachable in exactly `steps` steps, never leaving the grid.
    fn reachable_plots(&self, steps: usize) -> usize {
        let cell_count: usize = self.grid.cells().len();
        let mut current: BitVec = bitvec![0; cell_count];

        current.set(self.grid.index_from_pos(self.start), true);

        for _ in 0_usize..steps {
            let mut next: BitVec = bitvec![0; cell_count];

            for index in current.iter_ones() {
                let pos: IVec2 = self.grid.pos_from_index(index);

                for direction in Direction::iter() {
                    let neighbor: IVec2 = pos + direction.vec();

                    if self.grid.contains(neighbor) && !self.is_rock(neighbor) {
                        next.set(self.grid.index_from_pos(neighbor), true);
                    }
                }
            }

            current = next;
        }

        current.count_ones()
    }

    /// The same walk on the infinitely tiled grid, tracking absolute positions and testing rocks
    /// through wrapped coordinates.
    fn reachable_plots_infinite(&self, steps: usize) -> usize {
        let dimensions: IVec2 = self.grid.dimensions();
        let mut current: HashSet<IVec2> = HashSet::from([self.start]);

        for _ in 0_usize..steps {
            let mut next: HashSet<IVec2> = HashSet::with_capacity(current.len());

            for &pos in &current {
                for direction in Direction::iter() {
                    let neighbor: IVec2 = pos + direction.vec();
                    let wrapped: IVec2 = IVec2::new(
                        neighbor.x.rem_euclid(dimensions.x),
                        neighbor.y.rem_euclid(dimensions.y),
                    );

                    if !self.is_rock(wrapped) {
                        next.insert(neighbor);
                    }
                }
            }

            current = next;
        }

        current.len()
    }

    /// The real step count lands exactly on a tile edge (`steps = n * width + width / 2`), and
    /// the reachable count grows quadratically in `n`, so three sampled values pin down the
    /// polynomial.
    fn extrapolated_reachable_plots(&self) -> usize {
        let width: usize = self.grid.dimensions().x as usize;
        let remainder: usize = PART_2_STEPS % width;
        let f0: u64 = self.reachable_plots_infinite(remainder) as u64;
        let f1: u64 = self.reachable_plots_infinite(remainder + width) as u64;
        let f2: u64 = self.reachable_plots_infinite(remainder + 2_usize * width) as u64;
        let n: u64 = (PART_2_STEPS / width) as u64;
        let first_difference: u64 = f1 - f0;
        let second_difference: u64 = f2 - 2_u64 * f1 + f0;

        (f0 + first_difference * n + second_difference * (n * (n - 1_u64) / 2_u64)) as usize
    }
}

impl RunSolution for Solution {
    type Answer1 = usize;
    type Answer2 = usize;

    fn from_input(input: &str) -> ParseResult<Self> {
        let grid: Grid<GardenCell> = parse_all(input)?;
        let start: IVec2 = grid
            .positions(|&cell| cell == GardenCell::Start)
            .next()
            .ok_or_else(|| ParseError::Malformed("no start plot".into()))?;

        Ok(Self {
            grid,
            start,
            steps: PART_1_STEPS,
        })
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.reachable_plots(self.steps)
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.extrapolated_reachable_plots()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");

        solution.steps = 6_usize;

        let answer1: usize = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 16_usize);

        // The real walk length only makes sense on the real grid; the sample instead pins down
        // the infinite-tiling walk the extrapolation samples from.
        assert_eq!(solution.reachable_plots_infinite(6_usize), 16_usize);
        assert_eq!(solution.reachable_plots_infinite(10_usize), 50_usize);
        assert_eq!(solution.reachable_plots_infinite(50_usize), 1594_usize);
    }
}

const SAMPLE_STR: &'static str = "\
    ...........\n\
    .....###.#.\n\
    .###.##..#.\n\
    ..#.#...#..\n\
    ....#.#....\n\
    .##..S####.\n\
    .##..#...#.\n\
    .......##..\n\
    .##.#.####.\n\
    .##..##.##.\n\
    ...........\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reachable_plots_small_step_counts() {
        let mut solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();

        assert_eq!(solution.reachable_plots(1_usize), 2_usize);
        assert_eq!(solution.reachable_plots(2_usize), 4_usize);
        assert_eq!(solution.reachable_plots(3_usize), 6_usize);

        solution.steps = 6_usize;

        assert_eq!(solution.part1(), 16_usize);
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
