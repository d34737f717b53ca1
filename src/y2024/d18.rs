use {
    crate::*,
    bitvec::prelude::*,
    glam::IVec2,
    nom::{bytes::complete::tag, combinator::map, sequence::separated_pair, IResult},
    std::collections::VecDeque,
    strum::IntoEnumIterator,
};

#[cfg_attr(test, derive(Debug, PartialEq))]
struct FallingByte(IVec2);

impl Parse for FallingByte {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(parse_integer::<i32>, tag(","), parse_integer::<i32>),
            |(x, y)| Self(IVec2::new(x, y)),
        )(input)
    }
}

impl<'i> FromLines<'i> for FallingByte {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        let line: &str = cursor.next_line()?;

        Ok(Self::parse(line)?.1)
    }
}

pub struct Solution {
    bytes: Vec<FallingByte>,
    extent: i32,
    fallen: usize,
}

impl Solution {
    const EXTENT: i32 = 70_i32;
    const TEST_EXTENT: i32 = 6_i32;
    const FALLEN: usize = 1024_usize;
    const TEST_FALLEN: usize = 12_usize;

    fn index(&self, pos: IVec2) -> usize {
        (pos.y * (self.extent + 1_i32) + pos.x) as usize
    }

    /// Steps from the top-left corner to the bottom-right one after the first `fallen` bytes
    /// have corrupted their cells, if a path remains.
    fn shortest_path(&self, fallen: usize) -> Option<u32> {
        let cell_count: usize = ((self.extent + 1_i32) * (self.extent + 1_i32)) as usize;
        let mut corrupted: BitVec = bitvec![0; cell_count];

        for byte in &self.bytes[..fallen.min(self.bytes.len())] {
            corrupted.set(self.index(byte.0), true);
        }

        let goal: IVec2 = IVec2::new(self.extent, self.extent);
        let mut visited: BitVec = bitvec![0; cell_count];
        let mut frontier: VecDeque<(IVec2, u32)> = VecDeque::new();

        visited.set(0_usize, true);
        frontier.push_back((IVec2::ZERO, 0_u32));

        while let Some((pos, steps)) = frontier.pop_front() {
            if pos == goal {
                return Some(steps);
            }

            for direction in Direction::iter() {
                let next: IVec2 = pos + direction.vec();

                if next.min_element() >= 0_i32 && next.max_element() <= self.extent {
                    let next_index: usize = self.index(next);

                    if !corrupted[next_index] && !visited.replace(next_index, true) {
                        frontier.push_back((next, steps + 1_u32));
                    }
                }
            }
        }

        None
    }

    /// The coordinates of the first byte whose fall cuts off the exit entirely.
    fn first_blocking_byte(&self) -> String {
        (self.fallen..self.bytes.len())
            .find(|&fallen| self.shortest_path(fallen + 1_usize).is_none())
            .map(|fallen| {
                let byte: IVec2 = self.bytes[fallen].0;

                format!("{},{}", byte.x, byte.y)
            })
            .unwrap_or_default()
    }
}

impl RunSolution for Solution {
    type Answer1 = u32;
    type Answer2 = String;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self {
            bytes: parse(input)?,
            extent: Self::EXTENT,
            fallen: Self::FALLEN,
        })
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.shortest_path(self.fallen).unwrap_or_default()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.first_blocking_byte()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");

        solution.extent = Self::TEST_EXTENT;
        solution.fallen = Self::TEST_FALLEN;

        let answer1: u32 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 22_u32);

        let answer2: String = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, "6,1");
    }
}

const SAMPLE_STR: &'static str = "\
    5,4\n\
    4,2\n\
    4,5\n\
    3,0\n\
    2,1\n\
    6,3\n\
    2,4\n\
    1,5\n\
    0,6\n\
    3,3\n\
    2,6\n\
    5,1\n\
    1,2\n\
    5,5\n\
    2,5\n\
    6,5\n\
    1,4\n\
    0,4\n\
    6,4\n\
    1,1\n\
    6,1\n\
    1,0\n\
    0,5\n\
    1,6\n\
    2,0\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();

        assert_eq!(solution.bytes.len(), 25_usize);
        assert_eq!(solution.bytes[0_usize], FallingByte(IVec2::new(5_i32, 4_i32)));
    }

    #[test]
    fn test_shortest_path() {
        let mut solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();

        solution.extent = Solution::TEST_EXTENT;

        // An uncorrupted memory space walks the Manhattan distance.
        assert_eq!(solution.shortest_path(0_usize), Some(12_u32));
        assert_eq!(solution.shortest_path(12_usize), Some(22_u32));
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
