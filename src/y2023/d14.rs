use {crate::*, bitvec::prelude::*, glam::IVec2, std::collections::HashMap};

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Eq, PartialEq)]
    #[cfg_attr(test, derive(Debug))]
    enum DishCell {
        Empty = b'.',
        Round = b'O',
        Cube = b'#',
    }
}

const SPIN_CYCLES: usize = 1_000_000_000_usize;

#[derive(Clone)]
pub struct Solution(Grid<DishCell>);

impl Solution {
    /// The cell `depth` steps in from the wall the dish is tilted toward, within `lane`.
    fn lane_pos(direction: Direction, dimensions: IVec2, lane: i32, depth: i32) -> IVec2 {
        match direction {
            Direction::North => IVec2::new(lane, depth),
            Direction::South => IVec2::new(lane, dimensions.y - 1_i32 - depth),
            Direction::East => IVec2::new(dimensions.x - 1_i32 - depth, lane),
            Direction::West => IVec2::new(depth, lane),
        }
    }

    fn tilt(grid: &mut Grid<DishCell>, direction: Direction) {
        let dimensions: IVec2 = grid.dimensions();
        let (lanes, depths): (i32, i32) = if direction.is_horizontal() {
            (dimensions.y, dimensions.x)
        } else {
            (dimensions.x, dimensions.y)
        };

        for lane in 0_i32..lanes {
            let mut slide_to: i32 = 0_i32;

            for depth in 0_i32..depths {
                let pos: IVec2 = Self::lane_pos(direction, dimensions, lane, depth);

                match grid.get(pos).copied() {
                    Some(DishCell::Cube) => slide_to = depth + 1_i32,
                    Some(DishCell::Round) => {
                        if let Some(cell) = grid.get_mut(pos) {
                            *cell = DishCell::Empty;
                        }

                        let slide_pos: IVec2 =
                            Self::lane_pos(direction, dimensions, lane, slide_to);

                        if let Some(cell) = grid.get_mut(slide_pos) {
                            *cell = DishCell::Round;
                        }

                        slide_to += 1_i32;
                    }
                    _ => {}
                }
            }
        }
    }

    fn spin(grid: &mut Grid<DishCell>) {
        for direction in [
            Direction::North,
            Direction::West,
            Direction::South,
            Direction::East,
        ] {
            Self::tilt(grid, direction);
        }
    }

    fn north_load(grid: &Grid<DishCell>) -> usize {
        let height: i32 = grid.dimensions().y;

        grid.positions(|&cell| cell == DishCell::Round)
            .map(|pos| (height - pos.y) as usize)
            .sum()
    }

    fn round_rock_mask(grid: &Grid<DishCell>) -> BitVec {
        let mut mask: BitVec = bitvec![0; grid.cells().len()];

        for pos in grid.positions(|&cell| cell == DishCell::Round) {
            mask.set(grid.index_from_pos(pos), true);
        }

        mask
    }

    fn tilted_north_load(&self) -> usize {
        let mut grid: Grid<DishCell> = self.0.clone();

        Self::tilt(&mut grid, Direction::North);
        Self::north_load(&grid)
    }

    /// Spins settle into a short cycle well before a billion iterations; once a round-rock layout
    /// repeats, the remaining spins reduce modulo the cycle length.
    fn spun_north_load(&self) -> usize {
        let mut grid: Grid<DishCell> = self.0.clone();
        let mut seen: HashMap<BitVec, usize> = HashMap::new();

        for spin_count in 1_usize..=SPIN_CYCLES {
            Self::spin(&mut grid);

            let mask: BitVec = Self::round_rock_mask(&grid);

            if let Some(&cycle_start) = seen.get(&mask) {
                let remaining: usize = (SPIN_CYCLES - spin_count) % (spin_count - cycle_start);

                for _ in 0_usize..remaining {
                    Self::spin(&mut grid);
                }

                break;
            }

            seen.insert(mask, spin_count);
        }

        Self::north_load(&grid)
    }
}

impl RunSolution for Solution {
    type Answer1 = usize;
    type Answer2 = usize;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(parse_all(input)?))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.tilted_north_load()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.spun_north_load()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: usize = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 136_usize);

        let answer2: usize = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 64_usize);
    }
}

const SAMPLE_STR: &'static str = "\
    O....#....\n\
    O.OO#....#\n\
    .....##...\n\
    OO.#O....O\n\
    .O.....O#.\n\
    O.#..O.#.#\n\
    ..O..#O..O\n\
    .......O..\n\
    #....###..\n\
    #OO..#....\n";

#[cfg(test)]
mod tests {
    use super::*;

    fn tilted(direction: Direction) -> Grid<DishCell> {
        let mut grid: Grid<DishCell> = Solution::from_input(SAMPLE_STR).unwrap().0;

        Solution::tilt(&mut grid, direction);

        grid
    }

    #[test]
    fn test_tilt_north() {
        let expected: Grid<DishCell> = parse_all(
            "\
            OOOO.#.O..\n\
            OO..#....#\n\
            OO..O##..O\n\
            O..#.OO...\n\
            ........#.\n\
            ..#....#.#\n\
            ..O..#.O.O\n\
            ..O.......\n\
            #....###..\n\
            #....#....\n",
        )
        .unwrap();

        assert_eq!(tilted(Direction::North), expected);
    }

    #[test]
    fn test_spin() {
        let mut grid: Grid<DishCell> = Solution::from_input(SAMPLE_STR).unwrap().0;
        let expected: Grid<DishCell> = parse_all(
            "\
            .....#....\n\
            ....#...O#\n\
            ...OO##...\n\
            .OO#......\n\
            .....OOO#.\n\
            .O#...O#.#\n\
            ....O#....\n\
            ......OOOO\n\
            #...O###..\n\
            #..OO#....\n",
        )
        .unwrap();

        Solution::spin(&mut grid);

        assert_eq!(grid, expected);
    }

    #[test]
    fn test_north_load() {
        assert_eq!(Solution::north_load(&tilted(Direction::North)), 136_usize);
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
