use {
    crate::*,
    nom::{
        bytes::complete::{is_a, tag},
        character::complete::space1,
        multi::separated_list1,
        sequence::separated_pair,
    },
    std::collections::HashMap,
};

define_cell! {
    #[repr(u8)]
    #[derive(Clone, Copy, Eq, PartialEq)]
    #[cfg_attr(test, derive(Debug))]
    enum Spring {
        Operational = b'.',
        Damaged = b'#',
        Unknown = b'?',
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct ConditionRecord {
    springs: Vec<Spring>,
    groups: Vec<usize>,
}

impl ConditionRecord {
    fn arrangement_count(&self) -> u64 {
        let mut cache: HashMap<(usize, usize), u64> = HashMap::new();

        Self::count_from(&self.springs, &self.groups, 0_usize, 0_usize, &mut cache)
    }

    /// Counts the arrangements of `groups[group_index..]` within `springs[spring_index..]`. At
    /// each spring we either leave it operational or start the next damaged group there;
    /// memoizing on the index pair keeps the unfolded rows tractable.
    fn count_from(
        springs: &[Spring],
        groups: &[usize],
        spring_index: usize,
        group_index: usize,
        cache: &mut HashMap<(usize, usize), u64>,
    ) -> u64 {
        if spring_index >= springs.len() {
            return (group_index == groups.len()) as u64;
        }

        if let Some(&count) = cache.get(&(spring_index, group_index)) {
            return count;
        }

        let spring: Spring = springs[spring_index];
        let mut count: u64 = 0_u64;

        if spring != Spring::Damaged {
            count += Self::count_from(springs, groups, spring_index + 1_usize, group_index, cache);
        }

        if spring != Spring::Operational && group_index < groups.len() {
            let group: usize = groups[group_index];
            let group_end: usize = spring_index + group;

            if group_end <= springs.len()
                && springs[spring_index..group_end]
                    .iter()
                    .all(|&spring| spring != Spring::Operational)
                && (group_end == springs.len() || springs[group_end] != Spring::Damaged)
            {
                count += Self::count_from(
                    springs,
                    groups,
                    group_end + 1_usize,
                    group_index + 1_usize,
                    cache,
                );
            }
        }

        cache.insert((spring_index, group_index), count);

        count
    }

    /// Five copies of the row joined by single unknowns, and five copies of the groups.
    fn unfolded(&self) -> Self {
        let mut springs: Vec<Spring> = Vec::new();

        for copy in 0_usize..5_usize {
            if copy != 0_usize {
                springs.push(Spring::Unknown);
            }

            springs.extend_from_slice(&self.springs);
        }

        Self {
            springs,
            groups: self.groups.repeat(5_usize),
        }
    }
}

impl<'i> FromLines<'i> for ConditionRecord {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        let line: &str = cursor.next_line()?;
        let (springs_str, groups): (&str, Vec<usize>) = separated_pair(
            is_a(".#?"),
            space1,
            separated_list1(tag(","), parse_integer::<usize>),
        )(line)?
        .1;
        let springs: Vec<Spring> = springs_str
            .chars()
            .map(|spring_char| {
                spring_char
                    .try_into()
                    .map_err(|_| ParseError::Malformed(format!("bad spring {spring_char:?}")))
            })
            .collect::<ParseResult<_>>()?;

        Ok(Self { springs, groups })
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<ConditionRecord>);

impl RunSolution for Solution {
    type Answer1 = u64;
    type Answer2 = u64;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(parse(input)?))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.0
            .iter()
            .map(ConditionRecord::arrangement_count)
            .sum()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.0
            .iter()
            .map(|record| record.unfolded().arrangement_count())
            .sum()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: u64 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 21_u64);

        let answer2: u64 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 525152_u64);
    }
}

const SAMPLE_STR: &'static str = "\
    ???.### 1,1,3\n\
    .??..??...?##. 1,1,3\n\
    ?#?#?#?#?#?#?#? 1,3,1,6\n\
    ????.#...#... 4,1,1\n\
    ????.######..#####. 1,6,5\n\
    ?###???????? 3,2,1\n";

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str) -> ConditionRecord {
        parse_all(&format!("{line}\n")).unwrap()
    }

    #[test]
    fn test_arrangement_count() {
        let expected: [u64; 6_usize] = [1_u64, 4_u64, 1_u64, 1_u64, 4_u64, 10_u64];

        for (record, expected) in Solution::from_input(SAMPLE_STR)
            .unwrap()
            .0
            .iter()
            .zip(expected)
        {
            assert_eq!(record.arrangement_count(), expected);
        }
    }

    #[test]
    fn test_unfolded() {
        let unfolded: ConditionRecord = record(".# 1").unfolded();

        assert_eq!(unfolded.springs.len(), 14_usize);
        assert_eq!(unfolded.groups, vec![1_usize; 5_usize]);
        assert_eq!(record("???.### 1,1,3").unfolded().arrangement_count(), 1_u64);
        assert_eq!(record("????.#...#... 4,1,1").unfolded().arrangement_count(), 16_u64);
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
