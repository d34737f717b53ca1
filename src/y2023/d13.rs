use crate::*;

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Pattern {
    rows: Vec<String>,
}

impl Pattern {
    /// A seam after row `seam` is a mirror line if the rows on either side match pairwise, with
    /// exactly `smudges` single-cell mismatches across all pairs.
    fn horizontal_seam(rows: &[String], smudges: usize) -> Option<usize> {
        (1_usize..rows.len()).find(|&seam| {
            let mismatches: usize = (0_usize..seam.min(rows.len() - seam))
                .map(|offset| {
                    rows[seam - 1_usize - offset]
                        .chars()
                        .zip(rows[seam + offset].chars())
                        .filter(|(above, below)| above != below)
                        .count()
                })
                .sum();

            mismatches == smudges
        })
    }

    fn transposed_rows(&self) -> Vec<String> {
        let width: usize = self.rows.first().map_or(0_usize, String::len);

        (0_usize..width)
            .map(|column| {
                self.rows
                    .iter()
                    .filter_map(|row| row.chars().nth(column))
                    .collect()
            })
            .collect()
    }

    /// 100 per row above a horizontal mirror line, or 1 per column left of a vertical one.
    fn summary(&self, smudges: usize) -> usize {
        Self::horizontal_seam(&self.rows, smudges)
            .map(|seam| seam * 100_usize)
            .or_else(|| Self::horizontal_seam(&self.transposed_rows(), smudges))
            .unwrap_or_default()
    }
}

impl<'i> FromLines<'i> for Pattern {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        let block: LineBlock<'i> = LineBlock::from_lines(cursor)?;

        Ok(Self {
            rows: block.lines.into_iter().map(str::to_owned).collect(),
        })
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Pattern>);

impl Solution {
    fn summary_sum(&self, smudges: usize) -> usize {
        self.0.iter().map(|pattern| pattern.summary(smudges)).sum()
    }
}

impl RunSolution for Solution {
    type Answer1 = usize;
    type Answer2 = usize;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(parse(input)?))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.summary_sum(0_usize)
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.summary_sum(1_usize)
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: usize = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 405_usize);

        let answer2: usize = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 400_usize);
    }
}

const SAMPLE_STR: &'static str = "\
    #.##..##.\n\
    ..#.##.#.\n\
    ##......#\n\
    ##......#\n\
    ..#.##.#.\n\
    ..##..##.\n\
    #.#.##.#.\n\
    \n\
    #...##..#\n\
    #....#..#\n\
    ..##..###\n\
    #####.##.\n\
    #####.##.\n\
    ..##..###\n\
    #....#..#\n";

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| Solution::from_input(SAMPLE_STR).unwrap())
    }

    #[test]
    fn test_parse_blocks() {
        assert_eq!(solution().0.len(), 2_usize);
        assert_eq!(solution().0[0_usize].rows.len(), 7_usize);
        assert_eq!(solution().0[1_usize].rows[0_usize], "#...##..#");
    }

    #[test]
    fn test_horizontal_seam() {
        assert_eq!(
            Pattern::horizontal_seam(&solution().0[0_usize].rows, 0_usize),
            None
        );
        assert_eq!(
            Pattern::horizontal_seam(&solution().0[1_usize].rows, 0_usize),
            Some(4_usize)
        );
        assert_eq!(
            Pattern::horizontal_seam(&solution().0[0_usize].rows, 1_usize),
            Some(3_usize)
        );
    }

    #[test]
    fn test_transposed_rows() {
        let pattern: Pattern = Pattern {
            rows: vec!["#.".to_owned(), "##".to_owned()],
        };

        assert_eq!(pattern.transposed_rows(), vec!["##".to_owned(), ".#".to_owned()]);
    }

    #[test]
    fn test_summary() {
        assert_eq!(solution().0[0_usize].summary(0_usize), 5_usize);
        assert_eq!(solution().0[1_usize].summary(0_usize), 400_usize);
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
