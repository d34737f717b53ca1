use {
    crate::*,
    nom::{
        bytes::complete::{tag, take},
        character::complete::one_of,
        combinator::{map, map_res},
        sequence::{delimited, terminated, tuple},
        IResult,
    },
};

#[cfg_attr(test, derive(Debug, PartialEq))]
struct DigStep {
    direction: Direction,
    count: i64,
    hex_direction: Direction,
    hex_count: i64,
}

impl DigStep {
    fn direction_from_letter(letter: char) -> Direction {
        match letter {
            'U' => Direction::North,
            'R' => Direction::East,
            'D' => Direction::South,
            _ => Direction::West,
        }
    }

    /// The color is really the instruction: five hex digits of count, then one of `0123` as
    /// right, down, left, up.
    fn parse_hex<'i>(input: &'i str) -> IResult<&'i str, (i64, Direction)> {
        delimited(
            tag("(#"),
            tuple((
                map_res(take(5_usize), |digits: &str| {
                    i64::from_str_radix(digits, 16_u32)
                }),
                map(one_of("0123"), |digit| match digit {
                    '0' => Direction::East,
                    '1' => Direction::South,
                    '2' => Direction::West,
                    _ => Direction::North,
                }),
            )),
            tag(")"),
        )(input)
    }
}

impl Parse for DigStep {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                terminated(map(one_of("URDL"), Self::direction_from_letter), tag(" ")),
                terminated(parse_integer::<i64>, tag(" ")),
                Self::parse_hex,
            )),
            |(direction, count, (hex_count, hex_direction))| Self {
                direction,
                count,
                hex_direction,
                hex_count,
            },
        )(input)
    }
}

impl<'i> FromLines<'i> for DigStep {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        let line: &str = cursor.next_line()?;

        Ok(Self::parse(line)?.1)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<DigStep>);

impl Solution {
    /// Shoelace area of the traced polygon, widened to whole trench cells via Pick's theorem.
    fn lagoon_size<I: Iterator<Item = (Direction, i64)>>(steps: I) -> i64 {
        let mut pos: (i64, i64) = (0_i64, 0_i64);
        let mut twice_area: i64 = 0_i64;
        let mut perimeter: i64 = 0_i64;

        for (direction, count) in steps {
            let vec: glam::IVec2 = direction.vec();
            let next: (i64, i64) = (
                pos.0 + vec.x as i64 * count,
                pos.1 + vec.y as i64 * count,
            );

            twice_area += pos.0 * next.1 - next.0 * pos.1;
            perimeter += count;
            pos = next;
        }

        twice_area.abs() / 2_i64 + perimeter / 2_i64 + 1_i64
    }
}

impl RunSolution for Solution {
    type Answer1 = i64;
    type Answer2 = i64;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(parse(input)?))
    }

    fn part1(&mut self) -> Self::Answer1 {
        Self::lagoon_size(self.0.iter().map(|step| (step.direction, step.count)))
    }

    fn part2(&mut self) -> Self::Answer2 {
        Self::lagoon_size(self.0.iter().map(|step| (step.hex_direction, step.hex_count)))
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: i64 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 62_i64);

        let answer2: i64 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 952408144115_i64);
    }
}

const SAMPLE_STR: &'static str = "\
    R 6 (#70c710)\n\
    D 5 (#0dc571)\n\
    L 2 (#5713f0)\n\
    D 2 (#d2c081)\n\
    R 2 (#59c680)\n\
    D 2 (#411b91)\n\
    L 5 (#8ceee2)\n\
    U 2 (#caa173)\n\
    L 1 (#1b58a2)\n\
    U 2 (#caa171)\n\
    R 2 (#7807d2)\n\
    U 3 (#a77fa3)\n\
    L 2 (#015232)\n\
    U 2 (#7a21e3)\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            DigStep::parse("R 6 (#70c710)"),
            Ok((
                "",
                DigStep {
                    direction: Direction::East,
                    count: 6_i64,
                    hex_direction: Direction::East,
                    hex_count: 0x70c71_i64,
                }
            ))
        );
    }

    #[test]
    fn test_lagoon_size_unit_square() {
        // A 2x2 dug square: 4 trench cells, no interior.
        assert_eq!(
            Solution::lagoon_size(
                [
                    (Direction::East, 1_i64),
                    (Direction::South, 1_i64),
                    (Direction::West, 1_i64),
                    (Direction::North, 1_i64),
                ]
                .into_iter()
            ),
            4_i64
        );
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
