use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        combinator::map,
        multi::separated_list1,
        sequence::{preceded, separated_pair, tuple},
        IResult,
    },
};

#[derive(Default)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Reveal {
    red: u32,
    green: u32,
    blue: u32,
}

impl Reveal {
    fn power(&self) -> u32 {
        self.red * self.green * self.blue
    }
}

impl Parse for Reveal {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_list1(
                tag(", "),
                separated_pair(
                    parse_integer::<u32>,
                    tag(" "),
                    alt((tag("red"), tag("green"), tag("blue"))),
                ),
            ),
            |cube_counts| {
                let mut reveal: Self = Self::default();

                for (count, color) in cube_counts {
                    match color {
                        "red" => reveal.red = count,
                        "green" => reveal.green = count,
                        _ => reveal.blue = count,
                    }
                }

                reveal
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct CubeGame {
    id: u32,
    reveals: Vec<Reveal>,
}

impl CubeGame {
    /// A game is possible if no reveal ever shows more cubes of a color than the bag holds.
    fn is_possible(&self, bag: &Reveal) -> bool {
        self.reveals.iter().all(|reveal| {
            reveal.red <= bag.red && reveal.green <= bag.green && reveal.blue <= bag.blue
        })
    }

    fn fewest_cubes(&self) -> Reveal {
        self.reveals
            .iter()
            .fold(Reveal::default(), |fewest, reveal| Reveal {
                red: fewest.red.max(reveal.red),
                green: fewest.green.max(reveal.green),
                blue: fewest.blue.max(reveal.blue),
            })
    }
}

impl Parse for CubeGame {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                preceded(tag("Game "), parse_integer::<u32>),
                preceded(tag(": "), separated_list1(tag("; "), Reveal::parse)),
            )),
            |(id, reveals)| Self { id, reveals },
        )(input)
    }
}

impl<'i> FromLines<'i> for CubeGame {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        let line: &str = cursor.next_line()?;

        Ok(Self::parse(line)?.1)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<CubeGame>);

impl Solution {
    const BAG: Reveal = Reveal {
        red: 12_u32,
        green: 13_u32,
        blue: 14_u32,
    };

    fn possible_game_id_sum(&self) -> u32 {
        self.0
            .iter()
            .filter(|game| game.is_possible(&Self::BAG))
            .map(|game| game.id)
            .sum()
    }

    fn power_sum(&self) -> u32 {
        self.0.iter().map(|game| game.fewest_cubes().power()).sum()
    }
}

impl RunSolution for Solution {
    type Answer1 = u32;
    type Answer2 = u32;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(parse(input)?))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.possible_game_id_sum()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.power_sum()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: u32 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 8_u32);

        let answer2: u32 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 2286_u32);
    }
}

const SAMPLE_STR: &'static str = "\
    Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green\n\
    Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue\n\
    Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red\n\
    Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red\n\
    Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            CubeGame::parse("Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green"),
            Ok((
                "",
                CubeGame {
                    id: 5_u32,
                    reveals: vec![
                        Reveal {
                            red: 6_u32,
                            green: 3_u32,
                            blue: 1_u32
                        },
                        Reveal {
                            red: 1_u32,
                            green: 2_u32,
                            blue: 2_u32
                        },
                    ],
                }
            ))
        );
    }

    #[test]
    fn test_is_possible() {
        let games: Vec<CubeGame> = parse(SAMPLE_STR).unwrap();
        let expected: [bool; 5_usize] = [true, true, false, false, true];

        for (game, expected) in games.iter().zip(expected) {
            assert_eq!(game.is_possible(&Solution::BAG), expected, "game {}", game.id);
        }
    }

    #[test]
    fn test_fewest_cubes() {
        let games: Vec<CubeGame> = parse(SAMPLE_STR).unwrap();

        assert_eq!(
            games[0_usize].fewest_cubes(),
            Reveal {
                red: 4_u32,
                green: 2_u32,
                blue: 6_u32
            }
        );
        assert_eq!(games[0_usize].fewest_cubes().power(), 48_u32);
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
