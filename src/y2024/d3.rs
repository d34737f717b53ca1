use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::{tag, take_while_m_n},
        combinator::{map, map_res, value},
        sequence::{delimited, separated_pair},
        IResult,
    },
    std::str::FromStr,
};

#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

impl Instruction {
    /// `mul` operands are 1 to 3 digits; anything longer is corruption, not an instruction.
    fn parse_operand<'i>(input: &'i str) -> IResult<&'i str, u64> {
        map_res(
            take_while_m_n(1_usize, 3_usize, |c: char| c.is_ascii_digit()),
            u64::from_str,
        )(input)
    }
}

impl Parse for Instruction {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((
            map(
                delimited(
                    tag("mul("),
                    separated_pair(Self::parse_operand, tag(","), Self::parse_operand),
                    tag(")"),
                ),
                |(left, right)| Self::Mul(left, right),
            ),
            value(Self::Do, tag("do()")),
            value(Self::Dont, tag("don't()")),
        ))(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(String);

impl Solution {
    /// Scans the corrupted memory for instructions, restarting one character later after every
    /// non-match.
    fn instructions(&self) -> Vec<Instruction> {
        let mut instructions: Vec<Instruction> = Vec::new();
        let mut rest: &str = &self.0;

        while !rest.is_empty() {
            if let Ok((next, instruction)) = Instruction::parse(rest) {
                instructions.push(instruction);
                rest = next;
            } else {
                let mut chars = rest.chars();

                chars.next();
                rest = chars.as_str();
            }
        }

        instructions
    }

    fn mul_sum(&self) -> u64 {
        self.instructions()
            .into_iter()
            .map(|instruction| match instruction {
                Instruction::Mul(left, right) => left * right,
                _ => 0_u64,
            })
            .sum()
    }

    fn enabled_mul_sum(&self) -> u64 {
        let mut enabled: bool = true;
        let mut sum: u64 = 0_u64;

        for instruction in self.instructions() {
            match instruction {
                Instruction::Mul(left, right) => {
                    if enabled {
                        sum += left * right;
                    }
                }
                Instruction::Do => enabled = true,
                Instruction::Dont => enabled = false,
            }
        }

        sum
    }
}

impl RunSolution for Solution {
    type Answer1 = u64;
    type Answer2 = u64;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(input.to_owned()))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.mul_sum()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.enabled_mul_sum()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STRS[0_usize]).expect("sample 1 parses");
        let answer1: u64 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 161_u64);

        let mut solution: Self = Self::from_input(SAMPLE_STRS[1_usize]).expect("sample 2 parses");
        let answer2: u64 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 48_u64);
    }
}

const SAMPLE_STRS: &'static [&'static str] = &[
    "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))\n",
    "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))\n",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            Instruction::parse("mul(44,46)"),
            Ok(("", Instruction::Mul(44_u64, 46_u64)))
        );
        assert_eq!(
            Instruction::parse("mul(123,4)x"),
            Ok(("x", Instruction::Mul(123_u64, 4_u64)))
        );
        assert!(Instruction::parse("mul(4*").is_err());
        assert!(Instruction::parse("mul ( 2 , 4 )").is_err());
        assert!(Instruction::parse("mul(1234,5)").is_err());
    }

    #[test]
    fn test_instructions() {
        assert_eq!(
            Solution("do()x?don't()mul(2,3)".to_owned()).instructions(),
            vec![
                Instruction::Do,
                Instruction::Dont,
                Instruction::Mul(2_u64, 3_u64)
            ]
        );
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
