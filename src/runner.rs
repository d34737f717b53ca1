use {
    crate::parse::{ParseError, ParseResult},
    chrono::{Datelike, Local},
    clap::{Parser, ValueEnum},
    memmap::Mmap,
    nom::{
        bytes::complete::tag,
        combinator::{map_res, rest},
        sequence::preceded,
        IResult,
    },
    std::{
        fmt::Display,
        fs::File,
        io::{Error as IoError, ErrorKind, Result as IoResult},
        str::{from_utf8, FromStr, Utf8Error},
    },
};

/// What to do with the selected day.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Mode {
    /// Solve the day against its input file and print both answers
    Run,

    /// Run the day's embedded sample assertions
    Test,
}

/// Arguments for program execution
#[derive(Debug, Parser)]
#[command(about = "Personal Advent of Code archive", arg_required_else_help = true)]
pub struct Args {
    #[arg(value_enum)]
    pub mode: Mode,

    /// The day to run, defaulting to today's day of the month
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    day: Option<u8>,

    /// The year to run, defaulting to the current year
    year: Option<u16>,

    /// Input file path, overriding the `data/{year}/day{day}.txt` convention
    #[arg(short, long, default_value_t)]
    input_file_path: String,
}

impl Args {
    pub fn day(&self) -> u8 {
        self.day.unwrap_or_else(|| Local::now().day() as u8)
    }

    pub fn year(&self) -> u16 {
        self.year.unwrap_or_else(|| Local::now().year() as u16)
    }

    /// Loads and parses the selected day's input file, reporting failures to stderr.
    fn try_to_solution<S: RunSolution>(&self) -> Option<S> {
        let default_file_path: String;
        let file_path: &str = if self.input_file_path.is_empty() {
            default_file_path = input_path(self.year(), self.day());

            &default_file_path
        } else {
            &self.input_file_path
        };

        // SAFETY: This isn't truly safe, we're just hoping nobody touches our file before we're
        // done parsing it
        unsafe {
            open_utf8_file(file_path, |input| {
                S::from_input(input).map_or_else(
                    |error: ParseError| {
                        eprintln!("Failed to parse \"{file_path}\":\n{error}");

                        None
                    },
                    Some,
                )
            })
        }
        .unwrap_or_else(|error: IoError| {
            eprintln!("Failed to open UTF-8 file \"{file_path}\":\n{error}");

            None
        })
    }
}

/// The input file location for a given year and day.
pub fn input_path(year: u16, day: u8) -> String {
    format!("data/{year}/day{day:02}.txt")
}

#[test]
fn test_input_path() {
    assert_eq!(input_path(2023_u16, 1_u8), "data/2023/day01.txt");
    assert_eq!(input_path(2024_u16, 19_u8), "data/2024/day19.txt");
}

/// One archived day: how to construct it from raw input, how to answer both parts, and how to
/// check itself against its sample input.
///
/// `part1` runs before `part2` on the same parsed value. Both take `&mut self` since a handful of
/// days compute part 1 by mutating their parsed state; such days are responsible for their own
/// scratch copies if part 2 needs pristine input.
pub trait RunSolution: Sized {
    type Answer1: Display;
    type Answer2: Display;

    fn from_input(input: &str) -> ParseResult<Self>;
    fn part1(&mut self) -> Self::Answer1;
    fn part2(&mut self) -> Self::Answer2;

    /// Parses the sample input and asserts the expected sample answers, printing as it goes.
    fn test();

    fn solution(args: &Args) {
        if let Some(mut solution) = args.try_to_solution::<Self>() {
            println!("Part 1: {}", solution.part1());
            println!("Part 2: {}", solution.part2());
        }
    }
}

#[derive(Clone)]
pub struct Day {
    pub solution: fn(&Args),
    pub test: fn(),
}

impl Day {
    fn run(&self, args: &Args) {
        match args.mode {
            Mode::Run => (self.solution)(args),
            Mode::Test => (self.test)(),
        }
    }
}

pub struct DayEntry<'s> {
    pub ident: &'s str,
    pub day: Day,
}

pub struct YearEntry<'s> {
    pub ident: &'s str,
    pub days: Vec<DayEntry<'s>>,
}

fn parse_tagged_int<'i, I: FromStr>(prefix: &str, input: &'i str) -> IResult<&'i str, I> {
    preceded(tag(prefix), map_res(rest, I::from_str))(input)
}

#[test]
fn test_parse_tagged_int() {
    assert_eq!(parse_tagged_int::<u16>("y", "y2023"), Ok(("", 2023_u16)));
    assert_eq!(parse_tagged_int::<u8>("d", "d7"), Ok(("", 7_u8)));
    assert!(parse_tagged_int::<u8>("d", "day7").is_err());
}

/// Number-indexed storage for a contiguous run of registered values, offset by the smallest
/// registered number.
struct Registered<T> {
    slots: Vec<Option<T>>,
    min: u16,
}

impl<T> Registered<T> {
    fn try_from_numbered(mut numbered: Vec<(u16, T)>) -> Option<Self> {
        let min: u16 = numbered.iter().map(|(number, _)| *number).min()?;
        let max: u16 = numbered.iter().map(|(number, _)| *number).max()?;
        let mut slots: Vec<Option<T>> = Vec::with_capacity((max + 1_u16 - min) as usize);

        slots.resize_with((max + 1_u16 - min) as usize, || None);

        for (number, value) in numbered.drain(..) {
            slots[(number - min) as usize] = Some(value);
        }

        Some(Self { slots, min })
    }

    fn get(&self, number: u16) -> Option<&T> {
        number
            .checked_sub(self.min)
            .and_then(|index| self.slots.get(index as usize))
            .and_then(Option::as_ref)
    }
}

pub struct Year(Registered<Day>);

#[derive(Default)]
pub struct Solutions(Option<Registered<Year>>);

impl Solutions {
    pub fn try_from_entries(year_entries: Vec<YearEntry>) -> Option<Self> {
        let years: Vec<(u16, Year)> = year_entries
            .into_iter()
            .filter_map(|YearEntry { ident, days }| {
                let year: u16 = parse_registry_ident("y", ident)?;
                let days: Vec<(u16, Day)> = days
                    .into_iter()
                    .filter_map(|DayEntry { ident, day }| {
                        Some((parse_registry_ident::<u8>("d", ident)? as u16, day))
                    })
                    .collect();

                Some((year, Year(Registered::try_from_numbered(days)?)))
            })
            .collect();

        Registered::try_from_numbered(years).map(|years| Self(Some(years)))
    }

    fn try_day(&self, year: u16, day: u8) -> Option<&Day> {
        self.0
            .as_ref()
            .and_then(|years| years.get(year))
            .and_then(|Year(days)| days.get(day as u16))
    }

    pub fn run(&self, args: &Args) {
        let year: u16 = args.year();
        let day: u8 = args.day();

        match self.try_day(year, day) {
            None => println!("Unable to find AOC {year}, Day {day:02}"),
            Some(registered_day) => {
                println!("Running AOC {year}, Day {day:02}");
                registered_day.run(args);
            }
        }
    }
}

fn parse_registry_ident<I: FromStr>(prefix: &str, ident: &str) -> Option<I> {
    parse_tagged_int(prefix, ident).map_or_else(
        |error| {
            eprintln!("Invalid registry ident \"{ident}\":\n{error}");

            None
        },
        |(_, number)| Some(number),
    )
}

#[cfg(test)]
mod registry_tests {
    use super::*;

    fn noop_solution(_args: &Args) {}

    fn noop_test() {}

    fn noop_day() -> Day {
        Day {
            solution: noop_solution,
            test: noop_test,
        }
    }

    fn solutions() -> Solutions {
        Solutions::try_from_entries(vec![
            YearEntry {
                ident: "y2023",
                days: vec![
                    DayEntry {
                        ident: "d1",
                        day: noop_day(),
                    },
                    DayEntry {
                        ident: "d3",
                        day: noop_day(),
                    },
                ],
            },
            YearEntry {
                ident: "y2024",
                days: vec![DayEntry {
                    ident: "d1",
                    day: noop_day(),
                }],
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_try_day() {
        let solutions: Solutions = solutions();

        assert!(solutions.try_day(2023_u16, 1_u8).is_some());
        assert!(solutions.try_day(2023_u16, 3_u8).is_some());
        assert!(solutions.try_day(2023_u16, 2_u8).is_none());
        assert!(solutions.try_day(2023_u16, 4_u8).is_none());
        assert!(solutions.try_day(2024_u16, 1_u8).is_some());
        assert!(solutions.try_day(2022_u16, 1_u8).is_none());
        assert!(solutions.try_day(2025_u16, 1_u8).is_none());
    }

    #[test]
    fn test_default_solutions_has_no_days() {
        assert!(Solutions::default().try_day(2023_u16, 1_u8).is_none());
    }
}

/// Declares the year/day module tree and the `solutions` registry accessor in one place.
#[macro_export]
macro_rules! solutions {
    [ $( ( $year:ident, [ $( $day:ident ),* $(,)? ] ) ),* $(,)? ] => {
        $(
            pub mod $year {
                $(
                    pub mod $day;
                )*
            }
        )*

        pub fn solutions() -> &'static $crate::Solutions {
            static ONCE_LOCK: ::std::sync::OnceLock<$crate::Solutions> =
                ::std::sync::OnceLock::new();

            ONCE_LOCK.get_or_init(|| {
                $crate::Solutions::try_from_entries(vec![ $(
                    $crate::YearEntry {
                        ident: stringify!($year),
                        days: vec![ $(
                            $crate::DayEntry {
                                ident: stringify!($day),
                                day: $crate::Day {
                                    solution:
                                        <$year::$day::Solution as $crate::RunSolution>::solution,
                                    test: <$year::$day::Solution as $crate::RunSolution>::test,
                                },
                            },
                        )* ],
                    },
                )* ])
                .unwrap_or_else($crate::Solutions::default)
            })
        }
    };
}

/// Opens a memory-mapped UTF-8 file at a specified path, and passes in a `&str` over the file to a
/// provided callback function
///
/// # Errors
///
/// Returns a `Result::Err`-wrapped `std::io::Error` if the file can't be opened, can't be mapped,
/// or isn't valid UTF-8. `f` is only executed *iff* an error is not encountered.
///
/// # Safety
///
/// This function uses `Mmap::map`, which is an unsafe function. There is no guarantee that an
/// external process won't modify the file after it is opened as read-only; it is UB if one does
/// while this function refers to it as an immutable string slice.
pub unsafe fn open_utf8_file<T, F: FnOnce(&str) -> T>(file_path: &str, f: F) -> IoResult<T> {
    let file: File = File::open(file_path)?;

    // SAFETY: This operation is unsafe
    let mmap: Mmap = Mmap::map(&file)?;
    let bytes: &[u8] = &mmap;
    let utf8_str: &str = from_utf8(bytes).map_err(|utf8_error: Utf8Error| -> IoError {
        IoError::new(ErrorKind::InvalidData, utf8_error)
    })?;

    Ok(f(utf8_str))
}
