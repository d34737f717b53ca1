use {crate::*, bitvec::prelude::*, glam::IVec2};

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Eq, PartialEq)]
    #[cfg_attr(test, derive(Debug))]
    enum LabCell {
        Open = b'.',
        Obstruction = b'#',
        Guard = b'^',
    }
}

pub struct Solution {
    grid: Grid<LabCell>,
    start: IVec2,
}

enum PatrolOutcome {
    /// The guard walked off the grid; the mask holds every position along the patrol.
    Exited(BitVec),
    Looped,
}

impl Solution {
    fn is_obstruction(&self, pos: IVec2, extra_obstruction: Option<IVec2>) -> bool {
        Some(pos) == extra_obstruction
            || self
                .grid
                .get(pos)
                .is_some_and(|&cell| cell == LabCell::Obstruction)
    }

    /// Walks the guard's patrol: forward until blocked, then turn right. A repeated position and
    /// facing means the patrol loops forever.
    fn patrol(&self, extra_obstruction: Option<IVec2>) -> PatrolOutcome {
        let cell_count: usize = self.grid.cells().len();
        let mut visited: BitVec = bitvec![0; cell_count];
        let mut visited_facing: BitVec = bitvec![0; 4_usize * cell_count];
        let mut pos: IVec2 = self.start;
        let mut facing: Direction = Direction::North;

        loop {
            let index: usize = self.grid.index_from_pos(pos);

            visited.set(index, true);

            if visited_facing.replace(facing as usize * cell_count + index, true) {
                return PatrolOutcome::Looped;
            }

            let ahead: IVec2 = pos + facing.vec();

            if !self.grid.contains(ahead) {
                return PatrolOutcome::Exited(visited);
            }

            if self.is_obstruction(ahead, extra_obstruction) {
                facing = facing.next();
            } else {
                pos = ahead;
            }
        }
    }

    fn visited_count(&self) -> usize {
        match self.patrol(None) {
            PatrolOutcome::Exited(visited) => visited.count_ones(),
            PatrolOutcome::Looped => 0_usize,
        }
    }

    /// Only positions on the unobstructed patrol can change it; try each as a new obstruction.
    fn looping_obstruction_count(&self) -> usize {
        let PatrolOutcome::Exited(visited) = self.patrol(None) else {
            return 0_usize;
        };

        visited
            .iter_ones()
            .map(|index| self.grid.pos_from_index(index))
            .filter(|&candidate| {
                candidate != self.start
                    && matches!(self.patrol(Some(candidate)), PatrolOutcome::Looped)
            })
            .count()
    }
}

impl RunSolution for Solution {
    type Answer1 = usize;
    type Answer2 = usize;

    fn from_input(input: &str) -> ParseResult<Self> {
        let grid: Grid<LabCell> = parse_all(input)?;
        let start: IVec2 = grid
            .positions(|&cell| cell == LabCell::Guard)
            .next()
            .ok_or_else(|| ParseError::Malformed("no guard".into()))?;

        Ok(Self { grid, start })
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.visited_count()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.looping_obstruction_count()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: usize = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 41_usize);

        let answer2: usize = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 6_usize);
    }
}

const SAMPLE_STR: &'static str = "\
    ....#.....\n\
    .........#\n\
    ..........\n\
    ..#.......\n\
    .......#..\n\
    ..........\n\
    .#..^.....\n\
    ........#.\n\
    #.........\n\
    ......#...\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();

        assert_eq!(solution.start, IVec2::new(4_i32, 6_i32));
    }

    #[test]
    fn test_known_looping_obstruction() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();

        assert!(matches!(
            solution.patrol(Some(IVec2::new(3_i32, 6_i32))),
            PatrolOutcome::Looped
        ));
        assert!(matches!(
            solution.patrol(None),
            PatrolOutcome::Exited(_)
        ));
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
