use crate::*;

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Clone, Copy)]
struct DiskSpan {
    start: usize,
    size: usize,
}

/// A disk map alternates file and free-space digits, starting with a file.
pub struct Solution {
    files: Vec<DiskSpan>,
    gaps: Vec<DiskSpan>,
}

impl Solution {
    /// Checksum contribution of a file of `size` blocks at `start`, as the sum of
    /// `id * position` over its blocks.
    fn span_checksum(id: usize, start: usize, size: usize) -> usize {
        if size == 0_usize {
            0_usize
        } else {
            id * size * (2_usize * start + size - 1_usize) / 2_usize
        }
    }

    fn compacted_checksum(&self) -> usize {
        let mut files: Vec<DiskSpan> = self.files.clone();
        let mut gaps: Vec<DiskSpan> = self.gaps.clone();
        let mut checksum: usize = 0_usize;
        let mut gap_index: usize = 0_usize;

        for id in (0_usize..files.len()).rev() {
            while files[id].size > 0_usize {
                let Some(gap) = gaps.get_mut(gap_index) else {
                    break;
                };

                if gap.start >= files[id].start {
                    break;
                }

                if gap.size == 0_usize {
                    gap_index += 1_usize;

                    continue;
                }

                let moved: usize = gap.size.min(files[id].size);

                checksum += Self::span_checksum(id, gap.start, moved);
                gap.start += moved;
                gap.size -= moved;
                files[id].size -= moved;
            }

            checksum += Self::span_checksum(id, files[id].start, files[id].size);
        }

        checksum
    }

    fn defragmented_checksum(&self) -> usize {
        let mut gaps: Vec<DiskSpan> = self.gaps.clone();
        let mut checksum: usize = 0_usize;

        for (id, file) in self.files.iter().enumerate().rev() {
            let mut destination: usize = file.start;

            if let Some(gap) = gaps
                .iter_mut()
                .take_while(|gap| gap.start < file.start)
                .find(|gap| gap.size >= file.size)
            {
                destination = gap.start;
                gap.start += file.size;
                gap.size -= file.size;
            }

            checksum += Self::span_checksum(id, destination, file.size);
        }

        checksum
    }
}

impl RunSolution for Solution {
    type Answer1 = usize;
    type Answer2 = usize;

    fn from_input(input: &str) -> ParseResult<Self> {
        let line: &str = parse_all::<WholeLine>(input)?.data;
        let mut files: Vec<DiskSpan> = Vec::new();
        let mut gaps: Vec<DiskSpan> = Vec::new();
        let mut start: usize = 0_usize;

        for (index, digit) in line.chars().enumerate() {
            let size: usize = digit
                .to_digit(10_u32)
                .ok_or_else(|| ParseError::Malformed(format!("invalid disk map digit {digit:?}")))?
                as usize;

            if index % 2_usize == 0_usize {
                files.push(DiskSpan { start, size });
            } else {
                gaps.push(DiskSpan { start, size });
            }

            start += size;
        }

        Ok(Self { files, gaps })
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.compacted_checksum()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.defragmented_checksum()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: usize = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 1928_usize);

        let answer2: usize = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 2858_usize);
    }
}

const SAMPLE_STR: &'static str = "2333133121414131402\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();

        assert_eq!(solution.files.len(), 10_usize);
        assert_eq!(solution.files[0_usize], DiskSpan {
            start: 0_usize,
            size: 2_usize
        });
        assert_eq!(solution.files[9_usize], DiskSpan {
            start: 40_usize,
            size: 2_usize
        });
    }

    #[test]
    fn test_span_checksum() {
        // Blocks 2, 3, and 4 of file 9 contribute 9 * (2 + 3 + 4).
        assert_eq!(
            Solution::span_checksum(9_usize, 2_usize, 3_usize),
            81_usize
        );
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
