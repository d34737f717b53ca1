use {crate::*, bitvec::prelude::*, glam::IVec2};

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Eq, PartialEq)]
    #[cfg_attr(test, derive(Debug))]
    enum Contraption {
        Empty = b'.',
        VerticalSplitter = b'|',
        HorizontalSplitter = b'-',
        RisingMirror = b'/',
        FallingMirror = b'\\',
    }
}

impl Contraption {
    /// Where a beam heading `direction` continues from this cell. Splitters hit side-on produce a
    /// second outgoing beam.
    fn deflections(self, direction: Direction) -> (Direction, Option<Direction>) {
        match self {
            Self::Empty => (direction, None),
            Self::VerticalSplitter => {
                if direction.is_horizontal() {
                    (Direction::North, Some(Direction::South))
                } else {
                    (direction, None)
                }
            }
            Self::HorizontalSplitter => {
                if direction.is_horizontal() {
                    (direction, None)
                } else {
                    (Direction::East, Some(Direction::West))
                }
            }
            Self::RisingMirror => (
                match direction {
                    Direction::North => Direction::East,
                    Direction::East => Direction::North,
                    Direction::South => Direction::West,
                    Direction::West => Direction::South,
                },
                None,
            ),
            Self::FallingMirror => (
                match direction {
                    Direction::North => Direction::West,
                    Direction::West => Direction::North,
                    Direction::South => Direction::East,
                    Direction::East => Direction::South,
                },
                None,
            ),
        }
    }
}

pub struct Solution(Grid<Contraption>);

impl Solution {
    fn energized_count(&self, start: IVec2, direction: Direction) -> usize {
        let cell_count: usize = self.0.cells().len();
        let mut visited: BitVec = bitvec![0; 4_usize * cell_count];
        let mut pending: Vec<(IVec2, Direction)> = vec![(start, direction)];

        while let Some((pos, direction)) = pending.pop() {
            let index: usize = self.0.index_from_pos(pos);

            if visited.replace(direction as usize * cell_count + index, true) {
                continue;
            }

            let Some(cell) = self.0.get(pos).copied() else {
                continue;
            };

            let (out, split): (Direction, Option<Direction>) = cell.deflections(direction);

            for out_direction in [Some(out), split].into_iter().flatten() {
                let next: IVec2 = pos + out_direction.vec();

                if self.0.contains(next) {
                    pending.push((next, out_direction));
                }
            }
        }

        (0_usize..cell_count)
            .filter(|index| {
                (0_usize..4_usize).any(|direction| visited[direction * cell_count + index])
            })
            .count()
    }

    fn edge_starts(&self) -> Vec<(IVec2, Direction)> {
        let dimensions: IVec2 = self.0.dimensions();
        let mut starts: Vec<(IVec2, Direction)> = Vec::new();

        for x in 0_i32..dimensions.x {
            starts.push((IVec2::new(x, 0_i32), Direction::South));
            starts.push((IVec2::new(x, dimensions.y - 1_i32), Direction::North));
        }

        for y in 0_i32..dimensions.y {
            starts.push((IVec2::new(0_i32, y), Direction::East));
            starts.push((IVec2::new(dimensions.x - 1_i32, y), Direction::West));
        }

        starts
    }

    fn best_energized_count(&self) -> usize {
        self.edge_starts()
            .into_iter()
            .map(|(start, direction)| self.energized_count(start, direction))
            .max()
            .unwrap_or_default()
    }
}

impl RunSolution for Solution {
    type Answer1 = usize;
    type Answer2 = usize;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(parse_all(input)?))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.energized_count(IVec2::ZERO, Direction::East)
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.best_energized_count()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: usize = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 46_usize);

        let answer2: usize = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 51_usize);
    }
}

const SAMPLE_STR: &'static str = "\
    .|...\\....\n\
    |.-.\\.....\n\
    .....|-...\n\
    ........|.\n\
    ..........\n\
    .........\\\n\
    ..../.\\\\..\n\
    .-.-/..|..\n\
    .|....-|.\\\n\
    ..//.|....\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deflections() {
        assert_eq!(
            Contraption::RisingMirror.deflections(Direction::East),
            (Direction::North, None)
        );
        assert_eq!(
            Contraption::FallingMirror.deflections(Direction::East),
            (Direction::South, None)
        );
        assert_eq!(
            Contraption::VerticalSplitter.deflections(Direction::East),
            (Direction::North, Some(Direction::South))
        );
        assert_eq!(
            Contraption::VerticalSplitter.deflections(Direction::South),
            (Direction::South, None)
        );
    }

    #[test]
    fn test_best_start() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();

        // The best start enters heading south partway along the top edge.
        assert_eq!(
            solution.energized_count(IVec2::new(3_i32, 0_i32), Direction::South),
            51_usize
        );
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
