use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::{alpha1, space1},
        combinator::map,
        multi::separated_list1,
        sequence::{preceded, terminated, tuple},
        IResult,
    },
    std::{collections::VecDeque, ops::Range},
};

#[cfg_attr(test, derive(Debug, PartialEq))]
struct MapRange {
    destination_start: u64,
    source_start: u64,
    length: u64,
}

impl MapRange {
    fn source_range(&self) -> Range<u64> {
        self.source_start..self.source_start + self.length
    }
}

impl Parse for MapRange {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                terminated(parse_integer::<u64>, space1),
                terminated(parse_integer::<u64>, space1),
                parse_integer::<u64>,
            )),
            |(destination_start, source_start, length)| Self {
                destination_start,
                source_start,
                length,
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct CategoryMap {
    source: String,
    destination: String,
    ranges: Vec<MapRange>,
}

impl CategoryMap {
    fn map_value(&self, value: u64) -> u64 {
        self.ranges
            .iter()
            .find(|range| range.source_range().contains(&value))
            .map_or(value, |range| {
                range.destination_start + (value - range.source_start)
            })
    }

    /// Maps a set of value ranges through this category, splitting each range wherever it crosses
    /// a map entry boundary. Values outside every entry pass through unchanged.
    fn map_ranges(&self, ranges: Vec<Range<u64>>) -> Vec<Range<u64>> {
        let mut unmapped: VecDeque<Range<u64>> = ranges.into();
        let mut mapped: Vec<Range<u64>> = Vec::new();

        'unmapped: while let Some(range) = unmapped.pop_front() {
            for map_range in &self.ranges {
                let source: Range<u64> = map_range.source_range();
                let overlap_start: u64 = range.start.max(source.start);
                let overlap_end: u64 = range.end.min(source.end);

                if overlap_start < overlap_end {
                    let offset_start: u64 = overlap_start - map_range.source_start;
                    let offset_end: u64 = overlap_end - map_range.source_start;

                    mapped.push(
                        map_range.destination_start + offset_start
                            ..map_range.destination_start + offset_end,
                    );

                    if range.start < overlap_start {
                        unmapped.push_back(range.start..overlap_start);
                    }

                    if overlap_end < range.end {
                        unmapped.push_back(overlap_end..range.end);
                    }

                    continue 'unmapped;
                }
            }

            mapped.push(range);
        }

        mapped
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
enum AlmanacSection {
    Seeds(Vec<u64>),
    Map(CategoryMap),
}

impl AlmanacSection {
    fn parse_seeds<'i>(input: &'i str) -> IResult<&'i str, Vec<u64>> {
        preceded(
            tag("seeds: "),
            separated_list1(space1, parse_integer::<u64>),
        )(input)
    }

    fn parse_map_header<'i>(input: &'i str) -> IResult<&'i str, (&'i str, &'i str)> {
        map(
            tuple((alpha1, tag("-to-"), alpha1, tag(" map:"))),
            |(source, _, destination, _)| (source, destination),
        )(input)
    }
}

impl<'i> FromLines<'i> for AlmanacSection {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        let block: LineBlock<'i> = LineBlock::from_lines(cursor)?;
        let mut lines = block.lines.into_iter();
        let header: &str = lines
            .next()
            .ok_or_else(|| ParseError::Malformed("empty almanac section".into()))?;

        if let Ok((_, seeds)) = Self::parse_seeds(header) {
            Ok(Self::Seeds(seeds))
        } else {
            let (source, destination): (&str, &str) = Self::parse_map_header(header)?.1;
            let ranges: Vec<MapRange> = lines
                .map(|line| Ok(MapRange::parse(line)?.1))
                .collect::<ParseResult<_>>()?;

            Ok(Self::Map(CategoryMap {
                source: source.to_owned(),
                destination: destination.to_owned(),
                ranges,
            }))
        }
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    seeds: Vec<u64>,
    maps: Vec<CategoryMap>,
}

impl Solution {
    fn category_map(&self, source: &str) -> Option<&CategoryMap> {
        self.maps.iter().find(|map| map.source == source)
    }

    fn seed_location(&self, seed: u64) -> u64 {
        let mut category: &str = "seed";
        let mut value: u64 = seed;

        while category != "location" {
            match self.category_map(category) {
                Some(map) => {
                    value = map.map_value(value);
                    category = &map.destination;
                }
                None => break,
            }
        }

        value
    }

    fn lowest_seed_location(&self) -> u64 {
        self.seeds
            .iter()
            .map(|&seed| self.seed_location(seed))
            .min()
            .unwrap_or_default()
    }

    /// Treats the seed list as (start, length) pairs and pushes whole ranges through the map
    /// chain, so the answer comes from range endpoints instead of billions of individual seeds.
    fn lowest_seed_range_location(&self) -> u64 {
        let mut ranges: Vec<Range<u64>> = self
            .seeds
            .chunks_exact(2_usize)
            .map(|pair| pair[0_usize]..pair[0_usize] + pair[1_usize])
            .collect();
        let mut category: &str = "seed";

        while category != "location" {
            match self.category_map(category) {
                Some(map) => {
                    ranges = map.map_ranges(ranges);
                    category = &map.destination;
                }
                None => break,
            }
        }

        ranges
            .into_iter()
            .map(|range| range.start)
            .min()
            .unwrap_or_default()
    }
}

impl RunSolution for Solution {
    type Answer1 = u64;
    type Answer2 = u64;

    fn from_input(input: &str) -> ParseResult<Self> {
        let mut seeds: Vec<u64> = Vec::new();
        let mut maps: Vec<CategoryMap> = Vec::new();

        for section in parse::<AlmanacSection>(input)? {
            match section {
                AlmanacSection::Seeds(section_seeds) => seeds = section_seeds,
                AlmanacSection::Map(map) => maps.push(map),
            }
        }

        if seeds.is_empty() {
            Err(ParseError::Malformed("almanac has no seeds section".into()))
        } else {
            Ok(Self { seeds, maps })
        }
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.lowest_seed_location()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.lowest_seed_range_location()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: u64 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 35_u64);

        let answer2: u64 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 46_u64);
    }
}

const SAMPLE_STR: &'static str = "\
    seeds: 79 14 55 13\n\
    \n\
    seed-to-soil map:\n\
    50 98 2\n\
    52 50 48\n\
    \n\
    soil-to-fertilizer map:\n\
    0 15 37\n\
    37 52 2\n\
    39 0 15\n\
    \n\
    fertilizer-to-water map:\n\
    49 53 8\n\
    0 11 42\n\
    42 0 7\n\
    57 7 4\n\
    \n\
    water-to-light map:\n\
    88 18 7\n\
    18 25 70\n\
    \n\
    light-to-temperature map:\n\
    45 77 23\n\
    81 45 19\n\
    68 64 13\n\
    \n\
    temperature-to-humidity map:\n\
    0 69 1\n\
    1 0 69\n\
    \n\
    humidity-to-location map:\n\
    60 56 37\n\
    56 93 4\n";

#[cfg(test)]
mod tests {
    use super::*;

    fn solution() -> Solution {
        Solution::from_input(SAMPLE_STR).unwrap()
    }

    #[test]
    fn test_from_lines() {
        let solution: Solution = solution();

        assert_eq!(solution.seeds, vec![79_u64, 14_u64, 55_u64, 13_u64]);
        assert_eq!(solution.maps.len(), 7_usize);
        assert_eq!(solution.maps[0_usize].source, "seed");
        assert_eq!(solution.maps[6_usize].destination, "location");
        assert_eq!(
            solution.maps[0_usize].ranges[0_usize],
            MapRange {
                destination_start: 50_u64,
                source_start: 98_u64,
                length: 2_u64,
            }
        );
    }

    #[test]
    fn test_map_value() {
        let solution: Solution = solution();
        let seed_to_soil: &CategoryMap = solution.category_map("seed").unwrap();

        assert_eq!(seed_to_soil.map_value(98_u64), 50_u64);
        assert_eq!(seed_to_soil.map_value(99_u64), 51_u64);
        assert_eq!(seed_to_soil.map_value(53_u64), 55_u64);
        assert_eq!(seed_to_soil.map_value(10_u64), 10_u64);
    }

    #[test]
    fn test_seed_location() {
        let solution: Solution = solution();
        let expected: [u64; 4_usize] = [82_u64, 43_u64, 86_u64, 35_u64];

        for (&seed, expected) in solution.seeds.iter().zip(expected) {
            assert_eq!(solution.seed_location(seed), expected, "seed {seed}");
        }
    }

    #[test]
    fn test_map_ranges() {
        let solution: Solution = solution();
        let seed_to_soil: &CategoryMap = solution.category_map("seed").unwrap();
        let mut mapped: Vec<Range<u64>> = seed_to_soil.map_ranges(vec![79_u64..93_u64]);

        mapped.sort_by_key(|range| range.start);

        assert_eq!(mapped, vec![81_u64..95_u64]);
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
