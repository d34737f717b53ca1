use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::space1,
        multi::separated_list1,
        sequence::{pair, preceded},
        IResult,
    },
    rayon::iter::{IntoParallelIterator, ParallelIterator},
};

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Race {
    time: u64,
    distance: u64,
}

impl Race {
    /// Holding the button for `hold` milliseconds yields a speed of `hold`, leaving
    /// `time - hold` milliseconds to travel.
    fn winning_hold_count(self) -> u64 {
        (1_u64..self.time)
            .into_par_iter()
            .filter(|&hold| (self.time - hold) * hold > self.distance)
            .count() as u64
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Race>);

impl Solution {
    fn parse_values<'i>(label: &'static str, input: &'i str) -> IResult<&'i str, Vec<u64>> {
        preceded(
            pair(tag(label), space1),
            separated_list1(space1, parse_integer::<u64>),
        )(input)
    }

    fn win_count_product(&self) -> u64 {
        self.0.iter().map(|race| race.winning_hold_count()).product()
    }

    /// The race you get by ignoring the spaces between the numbers on each line.
    fn joined_race(&self) -> Race {
        Race {
            time: Self::join_digits(self.0.iter().map(|race| race.time)),
            distance: Self::join_digits(self.0.iter().map(|race| race.distance)),
        }
    }

    fn join_digits<I: Iterator<Item = u64>>(values: I) -> u64 {
        values.fold(0_u64, |joined, value| {
            let mut shift: u64 = 10_u64;

            while shift <= value {
                shift *= 10_u64;
            }

            joined * shift + value
        })
    }
}

impl RunSolution for Solution {
    type Answer1 = u64;
    type Answer2 = u64;

    fn from_input(input: &str) -> ParseResult<Self> {
        let mut cursor: LineCursor = LineCursor::new(input);
        let times: Vec<u64> = Self::parse_values("Time:", cursor.next_line()?)?.1;
        let distances: Vec<u64> = Self::parse_values("Distance:", cursor.next_line()?)?.1;

        if times.len() != distances.len() {
            Err(ParseError::Malformed(format!(
                "{} times but {} distances",
                times.len(),
                distances.len()
            )))
        } else {
            Ok(Self(
                times
                    .into_iter()
                    .zip(distances)
                    .map(|(time, distance)| Race { time, distance })
                    .collect(),
            ))
        }
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.win_count_product()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.joined_race().winning_hold_count()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: u64 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 288_u64);

        let answer2: u64 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 71503_u64);
    }
}

const SAMPLE_STR: &'static str = "\
    Time:      7  15   30\n\
    Distance:  9  40  200\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        assert_eq!(
            Solution::from_input(SAMPLE_STR),
            Ok(Solution(vec![
                Race {
                    time: 7_u64,
                    distance: 9_u64
                },
                Race {
                    time: 15_u64,
                    distance: 40_u64
                },
                Race {
                    time: 30_u64,
                    distance: 200_u64
                },
            ]))
        );
    }

    #[test]
    fn test_winning_hold_count() {
        assert_eq!(
            Race {
                time: 7_u64,
                distance: 9_u64
            }
            .winning_hold_count(),
            4_u64
        );
        assert_eq!(
            Race {
                time: 30_u64,
                distance: 200_u64
            }
            .winning_hold_count(),
            9_u64
        );
    }

    #[test]
    fn test_joined_race() {
        assert_eq!(
            Solution::from_input(SAMPLE_STR).unwrap().joined_race(),
            Race {
                time: 71530_u64,
                distance: 940200_u64
            }
        );
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
