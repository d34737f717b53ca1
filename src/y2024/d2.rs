use {
    crate::*,
    derive_deref::Deref,
    nom::{character::complete::space1, multi::separated_list1},
};

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Deref)]
#[repr(transparent)]
struct Report(Vec<i32>);

impl Report {
    fn is_safe(levels: &[i32]) -> bool {
        let mut deltas = levels.windows(2_usize).map(|pair| pair[1_usize] - pair[0_usize]);

        deltas.clone().all(|delta| (1_i32..=3_i32).contains(&delta))
            || deltas.all(|delta| (-3_i32..=-1_i32).contains(&delta))
    }

    /// Safe outright, or safe after deleting any single level.
    fn is_safe_dampened(&self) -> bool {
        Self::is_safe(self)
            || (0_usize..self.len()).any(|skipped| {
                let mut levels: Vec<i32> = self.to_vec();

                levels.remove(skipped);

                Self::is_safe(&levels)
            })
    }
}

impl<'i> FromLines<'i> for Report {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        let line: &str = cursor.next_line()?;

        Ok(Self(separated_list1(space1, parse_integer::<i32>)(line)?.1))
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Report>);

impl RunSolution for Solution {
    type Answer1 = usize;
    type Answer2 = usize;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(parse(input)?))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.0.iter().filter(|report| Report::is_safe(report)).count()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.0.iter().filter(|report| report.is_safe_dampened()).count()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: usize = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 2_usize);

        let answer2: usize = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 4_usize);
    }
}

const SAMPLE_STR: &'static str = "\
    7 6 4 2 1\n\
    1 2 7 8 9\n\
    9 7 6 2 1\n\
    1 3 2 4 5\n\
    8 6 4 4 1\n\
    1 3 6 7 9\n";

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| Solution::from_input(SAMPLE_STR).unwrap())
    }

    #[test]
    fn test_is_safe() {
        let expected: [bool; 6_usize] = [true, false, false, false, false, true];

        for (report, expected) in solution().0.iter().zip(expected) {
            assert_eq!(Report::is_safe(report), expected, "report {:?}", report.0);
        }
    }

    #[test]
    fn test_is_safe_dampened() {
        let expected: [bool; 6_usize] = [true, false, false, true, true, true];

        for (report, expected) in solution().0.iter().zip(expected) {
            assert_eq!(report.is_safe_dampened(), expected, "report {:?}", report.0);
        }
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
