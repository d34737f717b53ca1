use {
    crate::*,
    glam::IVec2,
    nom::{
        bytes::complete::tag,
        combinator::map,
        sequence::{preceded, separated_pair},
        IResult,
    },
};

fn parse_ivec2<'i>(input: &'i str) -> IResult<&'i str, IVec2> {
    map(
        separated_pair(parse_integer::<i32>, tag(","), parse_integer::<i32>),
        |(x, y)| IVec2::new(x, y),
    )(input)
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Robot {
    position: IVec2,
    velocity: IVec2,
}

impl Parse for Robot {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                preceded(tag("p="), parse_ivec2),
                tag(" v="),
                parse_ivec2,
            ),
            |(position, velocity)| Self { position, velocity },
        )(input)
    }
}

impl<'i> FromLines<'i> for Robot {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        let line: &str = cursor.next_line()?;

        Ok(Self::parse(line)?.1)
    }
}

pub struct Solution {
    robots: Vec<Robot>,
    extents: IVec2,
}

impl Solution {
    const EXTENTS: IVec2 = IVec2::new(101_i32, 103_i32);
    const TEST_EXTENTS: IVec2 = IVec2::new(11_i32, 7_i32);
    const PART_1_SECONDS: i32 = 100_i32;

    fn positions_at(&self, seconds: i32) -> impl Iterator<Item = IVec2> + '_ {
        self.robots.iter().map(move |robot| {
            (robot.position + robot.velocity * seconds).rem_euclid(self.extents)
        })
    }

    fn safety_factor(&self, seconds: i32) -> usize {
        let middle: IVec2 = (self.extents - IVec2::ONE) / 2_i32;
        let mut quadrants: [usize; 4_usize] = [0_usize; 4_usize];

        for position in self.positions_at(seconds) {
            if position.x != middle.x && position.y != middle.y {
                quadrants[(position.x > middle.x) as usize
                    | (((position.y > middle.y) as usize) << 1_u32)] += 1_usize;
            }
        }

        quadrants.into_iter().product()
    }

    fn clustering_cost(&self, seconds: i32) -> i64 {
        let positions: Vec<IVec2> = self.positions_at(seconds).collect();
        let centroid: IVec2 = positions.iter().sum::<IVec2>() / positions.len().max(1_usize) as i32;

        positions
            .into_iter()
            .map(|position| manhattan_distance(position, centroid) as i64)
            .sum()
    }

    /// The robot positions repeat with period `extents.x * extents.y`. The Easter egg frame
    /// is the one where the robots cluster most tightly around their centroid.
    fn easter_egg_seconds(&self) -> i32 {
        (0_i32..self.extents.x * self.extents.y)
            .min_by_key(|&seconds| self.clustering_cost(seconds))
            .unwrap_or_default()
    }
}

impl RunSolution for Solution {
    type Answer1 = usize;
    type Answer2 = i32;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self {
            robots: parse(input)?,
            extents: Self::EXTENTS,
        })
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.safety_factor(Self::PART_1_SECONDS)
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.easter_egg_seconds()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");

        solution.extents = Self::TEST_EXTENTS;

        let answer1: usize = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 12_usize);

        // The sample robots never draw the Easter egg, so part 2 only runs on real input.
    }
}

const SAMPLE_STR: &'static str = "\
    p=0,4 v=3,-3\n\
    p=6,3 v=-1,-3\n\
    p=10,3 v=-1,2\n\
    p=2,0 v=2,-1\n\
    p=0,0 v=1,3\n\
    p=3,0 v=-2,-2\n\
    p=7,6 v=-1,-3\n\
    p=3,0 v=-1,-2\n\
    p=9,3 v=2,3\n\
    p=7,3 v=-1,2\n\
    p=2,4 v=2,-3\n\
    p=9,5 v=-3,-3\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            Robot::parse("p=0,4 v=3,-3").unwrap().1,
            Robot {
                position: IVec2::new(0_i32, 4_i32),
                velocity: IVec2::new(3_i32, -3_i32),
            }
        );
    }

    #[test]
    fn test_positions_at() {
        let solution: Solution = Solution {
            robots: vec![Robot {
                position: IVec2::new(2_i32, 4_i32),
                velocity: IVec2::new(2_i32, -3_i32),
            }],
            extents: Solution::TEST_EXTENTS,
        };

        for (seconds, expected) in [
            (1_i32, IVec2::new(4_i32, 1_i32)),
            (2_i32, IVec2::new(6_i32, 5_i32)),
            (3_i32, IVec2::new(8_i32, 2_i32)),
            (4_i32, IVec2::new(10_i32, 6_i32)),
            (5_i32, IVec2::new(1_i32, 3_i32)),
        ] {
            assert_eq!(
                solution.positions_at(seconds).next(),
                Some(expected),
                "at {seconds} seconds"
            );
        }
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
