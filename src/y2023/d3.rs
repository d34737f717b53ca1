use {crate::*, glam::IVec2, std::ops::Range};

#[cfg_attr(test, derive(Debug, PartialEq))]
struct PartNumber {
    value: u32,
    row: i32,
    cols: Range<i32>,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    schematic: Grid<u8>,
    numbers: Vec<PartNumber>,
}

impl Solution {
    fn is_symbol(cell: u8) -> bool {
        cell != b'.' && !cell.is_ascii_digit()
    }

    fn find_numbers(schematic: &Grid<u8>) -> Vec<PartNumber> {
        let dimensions: IVec2 = schematic.dimensions();
        let mut numbers: Vec<PartNumber> = Vec::new();

        for row in 0_i32..dimensions.y {
            let mut col: i32 = 0_i32;

            while col < dimensions.x {
                if schematic
                    .get(IVec2::new(col, row))
                    .is_some_and(|cell| cell.is_ascii_digit())
                {
                    let start: i32 = col;
                    let mut value: u32 = 0_u32;

                    while let Some(digit) = schematic
                        .get(IVec2::new(col, row))
                        .filter(|cell| cell.is_ascii_digit())
                    {
                        value = value * 10_u32 + (digit - b'0') as u32;
                        col += 1_i32;
                    }

                    numbers.push(PartNumber {
                        value,
                        row,
                        cols: start..col,
                    });
                } else {
                    col += 1_i32;
                }
            }
        }

        numbers
    }

    /// All cells bordering the number's digits, including diagonals.
    fn neighborhood(number: &PartNumber) -> impl Iterator<Item = IVec2> + '_ {
        (number.row - 1_i32..=number.row + 1_i32).flat_map(|row| {
            (number.cols.start - 1_i32..=number.cols.end).map(move |col| IVec2::new(col, row))
        })
    }

    fn is_part_number(&self, number: &PartNumber) -> bool {
        Self::neighborhood(number)
            .any(|pos| self.schematic.get(pos).copied().is_some_and(Self::is_symbol))
    }

    fn part_number_sum(&self) -> u32 {
        self.numbers
            .iter()
            .filter(|number| self.is_part_number(number))
            .map(|number| number.value)
            .sum()
    }

    fn gear_ratio_sum(&self) -> u32 {
        self.schematic
            .positions(|&cell| cell == b'*')
            .map(|gear_pos| {
                let mut adjacent_values: Vec<u32> = Vec::new();

                for number in &self.numbers {
                    if Self::neighborhood(number).any(|pos| pos == gear_pos) {
                        adjacent_values.push(number.value);
                    }
                }

                if adjacent_values.len() == 2_usize {
                    adjacent_values[0_usize] * adjacent_values[1_usize]
                } else {
                    0_u32
                }
            })
            .sum()
    }
}

impl RunSolution for Solution {
    type Answer1 = u32;
    type Answer2 = u32;

    fn from_input(input: &str) -> ParseResult<Self> {
        let schematic: Grid<u8> = parse_all(input)?;
        let numbers: Vec<PartNumber> = Self::find_numbers(&schematic);

        Ok(Self { schematic, numbers })
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.part_number_sum()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.gear_ratio_sum()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: u32 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 4361_u32);

        let answer2: u32 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 467835_u32);
    }
}

const SAMPLE_STR: &'static str = "\
    467..114..\n\
    ...*......\n\
    ..35..633.\n\
    ......#...\n\
    617*......\n\
    .....+.58.\n\
    ..592.....\n\
    ......755.\n\
    ...$.*....\n\
    .664.598..\n";

#[cfg(test)]
mod tests {
    use super::*;

    fn solution() -> Solution {
        Solution::from_input(SAMPLE_STR).unwrap()
    }

    #[test]
    fn test_find_numbers() {
        let solution: Solution = solution();

        assert_eq!(solution.numbers.len(), 10_usize);
        assert_eq!(
            solution.numbers[0_usize],
            PartNumber {
                value: 467_u32,
                row: 0_i32,
                cols: 0_i32..3_i32,
            }
        );
        assert_eq!(
            solution.numbers[1_usize],
            PartNumber {
                value: 114_u32,
                row: 0_i32,
                cols: 5_i32..8_i32,
            }
        );
    }

    #[test]
    fn test_is_part_number() {
        let solution: Solution = solution();

        // 114 and 58 are the only numbers not adjacent to a symbol.
        let expected: [bool; 10_usize] = [
            true, false, true, true, true, false, true, true, true, true,
        ];

        for (number, expected) in solution.numbers.iter().zip(expected) {
            assert_eq!(
                solution.is_part_number(number),
                expected,
                "number {}",
                number.value
            );
        }
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
