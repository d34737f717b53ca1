use {crate::*, bitvec::prelude::*, glam::IVec2, strum::IntoEnumIterator};

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Eq, PartialEq)]
    #[cfg_attr(test, derive(Debug))]
    enum Pipe {
        Vertical = b'|',
        Horizontal = b'-',
        NorthEastBend = b'L',
        NorthWestBend = b'J',
        SouthWestBend = b'7',
        SouthEastBend = b'F',
        Ground = b'.',
        Start = b'S',
    }
}

impl Pipe {
    fn connections(self) -> Option<[Direction; 2_usize]> {
        match self {
            Self::Vertical => Some([Direction::North, Direction::South]),
            Self::Horizontal => Some([Direction::East, Direction::West]),
            Self::NorthEastBend => Some([Direction::North, Direction::East]),
            Self::NorthWestBend => Some([Direction::North, Direction::West]),
            Self::SouthWestBend => Some([Direction::South, Direction::West]),
            Self::SouthEastBend => Some([Direction::South, Direction::East]),
            Self::Ground | Self::Start => None,
        }
    }

    fn from_connections(a: Direction, b: Direction) -> Option<Self> {
        if a == b {
            return None;
        }

        [
            Self::Vertical,
            Self::Horizontal,
            Self::NorthEastBend,
            Self::NorthWestBend,
            Self::SouthWestBend,
            Self::SouthEastBend,
        ]
        .into_iter()
        .find(|pipe| {
            pipe.connections().is_some_and(|connections| {
                connections.contains(&a) && connections.contains(&b)
            })
        })
    }

    fn connects(self, direction: Direction) -> bool {
        self.connections()
            .is_some_and(|connections| connections.contains(&direction))
    }
}

pub struct Solution {
    grid: Grid<Pipe>,
    start: IVec2,
}

impl Solution {
    /// Resolves the start tile's true shape and walks the loop from it, returning every position
    /// on the loop in walk order (starting with the start tile itself).
    fn traced_loop(&self) -> Option<(Pipe, Vec<IVec2>)> {
        let mut connected = Direction::iter().filter(|&direction| {
            self.grid
                .get(self.start + direction.vec())
                .copied()
                .is_some_and(|pipe| pipe.connects(direction.rev()))
        });
        let first: Direction = connected.next()?;
        let second: Direction = connected.next()?;
        let start_pipe: Pipe = Pipe::from_connections(first, second)?;
        let mut positions: Vec<IVec2> = vec![self.start];
        let mut direction: Direction = first;
        let mut pos: IVec2 = self.start + direction.vec();

        while pos != self.start {
            positions.push(pos);

            let pipe: Pipe = self.grid.get(pos).copied()?;

            direction = pipe
                .connections()?
                .into_iter()
                .find(|&connection| connection != direction.rev())?;
            pos += direction.vec();
        }

        Some((start_pipe, positions))
    }

    fn farthest_distance(&self) -> usize {
        self.traced_loop()
            .map_or(0_usize, |(_, positions)| positions.len() / 2_usize)
    }

    /// Scanline parity: crossing a loop tile that connects north flips inside/outside, which
    /// counts `L--7` and `F--J` S-bends as crossings and `L--J` and `F--7` U-bends as none.
    fn enclosed_count(&self) -> usize {
        let Some((start_pipe, positions)) = self.traced_loop() else {
            return 0_usize;
        };

        let mut in_loop: BitVec = bitvec![0; self.grid.cells().len()];

        for &pos in &positions {
            in_loop.set(self.grid.index_from_pos(pos), true);
        }

        let dimensions: IVec2 = self.grid.dimensions();
        let mut enclosed: usize = 0_usize;

        for y in 0_i32..dimensions.y {
            let mut inside: bool = false;

            for x in 0_i32..dimensions.x {
                let pos: IVec2 = IVec2::new(x, y);

                if in_loop[self.grid.index_from_pos(pos)] {
                    let pipe: Pipe = if pos == self.start {
                        start_pipe
                    } else {
                        self.grid.get(pos).copied().unwrap_or(Pipe::Ground)
                    };

                    if pipe.connects(Direction::North) {
                        inside = !inside;
                    }
                } else if inside {
                    enclosed += 1_usize;
                }
            }
        }

        enclosed
    }
}

impl RunSolution for Solution {
    type Answer1 = usize;
    type Answer2 = usize;

    fn from_input(input: &str) -> ParseResult<Self> {
        let grid: Grid<Pipe> = parse_all(input)?;
        let start: IVec2 = grid
            .positions(|&pipe| pipe == Pipe::Start)
            .next()
            .ok_or_else(|| ParseError::Malformed("no start tile".into()))?;

        Ok(Self { grid, start })
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.farthest_distance()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.enclosed_count()
    }

    fn test() {
        for (index, expected) in [4_usize, 8_usize].into_iter().enumerate() {
            let mut solution: Self =
                Self::from_input(SAMPLE_STRS[index]).expect("sample parses");
            let answer1: usize = solution.part1();

            println!("Part 1: {answer1}");
            assert_eq!(answer1, expected);
        }

        for (index, expected) in [4_usize, 8_usize].into_iter().enumerate() {
            let mut solution: Self =
                Self::from_input(SAMPLE_STRS[index + 2_usize]).expect("sample parses");
            let answer2: usize = solution.part2();

            println!("Part 2: {answer2}");
            assert_eq!(answer2, expected);
        }
    }
}

const SAMPLE_STRS: &'static [&'static str] = &[
    "\
    -L|F7\n\
    7S-7|\n\
    L|7||\n\
    -L-J|\n\
    L|-JF\n",
    "\
    7-F7-\n\
    .FJ|7\n\
    SJLL7\n\
    |F--J\n\
    LJ.LJ\n",
    "\
    ...........\n\
    .S-------7.\n\
    .|F-----7|.\n\
    .||.....||.\n\
    .||.....||.\n\
    .|L-7.F-J|.\n\
    .|..|.|..|.\n\
    .L--J.L--J.\n\
    ...........\n",
    "\
    FF7FSF7F7F7F7F7F---7\n\
    L|LJ||||||||||||F--J\n\
    FL-7LJLJ||||||LJL-77\n\
    F--JF--7||LJLJ7F7FJ-\n\
    L---JF-JLJ.||-FJLJJ7\n\
    |F|F-JF---7F7-L7L|7|\n\
    |FFJF7L7F-JF7|JL---7\n\
    7-L-JL7||F7|L7F-7F7|\n\
    L.L7LFJ|||||FJL7||LJ\n\
    L7JLJL-JLJLJL--JLJ.L\n",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_connections() {
        assert_eq!(
            Pipe::from_connections(Direction::North, Direction::South),
            Some(Pipe::Vertical)
        );
        assert_eq!(
            Pipe::from_connections(Direction::East, Direction::North),
            Some(Pipe::NorthEastBend)
        );
        assert_eq!(Pipe::from_connections(Direction::North, Direction::North), None);
    }

    #[test]
    fn test_traced_loop() {
        let solution: Solution = Solution::from_input(SAMPLE_STRS[0_usize]).unwrap();
        let (start_pipe, positions) = solution.traced_loop().unwrap();

        assert_eq!(start_pipe, Pipe::SouthEastBend);
        assert_eq!(positions.len(), 8_usize);
        assert_eq!(positions[0_usize], IVec2::new(1_i32, 1_i32));
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
