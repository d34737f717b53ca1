use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::alpha1,
        combinator::{map, value},
        sequence::{pair, preceded},
        IResult,
    },
};

const BOX_COUNT: usize = 256_usize;

#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum LensOp {
    Remove,
    Insert(u32),
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct InitStep {
    text: String,
    label: String,
    op: LensOp,
}

impl InitStep {
    fn hash(text: &str) -> usize {
        text.bytes()
            .fold(0_usize, |current, byte| {
                (current + byte as usize) * 17_usize % BOX_COUNT
            })
    }
}

impl Parse for InitStep {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        let text: &str = input;

        map(
            pair(
                alpha1,
                alt((
                    value(LensOp::Remove, tag("-")),
                    map(preceded(tag("="), parse_integer::<u32>), LensOp::Insert),
                )),
            ),
            move |(label, op): (&str, LensOp)| Self {
                text: text.to_owned(),
                label: label.to_owned(),
                op,
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<InitStep>);

impl Solution {
    fn hash_sum(&self) -> usize {
        self.0.iter().map(|step| InitStep::hash(&step.text)).sum()
    }

    /// Runs the HASHMAP procedure: 256 boxes of labeled lenses, `-` removes a label from its box
    /// and `=` inserts or replaces one, preserving slot order.
    fn focusing_power(&self) -> usize {
        let mut boxes: Vec<Vec<(&str, u32)>> = vec![Vec::new(); BOX_COUNT];

        for step in &self.0 {
            let lenses: &mut Vec<(&str, u32)> = &mut boxes[InitStep::hash(&step.label)];

            match step.op {
                LensOp::Remove => lenses.retain(|&(label, _)| label != step.label),
                LensOp::Insert(focal_length) => {
                    if let Some(lens) = lenses.iter_mut().find(|(label, _)| *label == step.label) {
                        lens.1 = focal_length;
                    } else {
                        lenses.push((&step.label, focal_length));
                    }
                }
            }
        }

        boxes
            .into_iter()
            .enumerate()
            .flat_map(|(box_index, lenses)| {
                lenses
                    .into_iter()
                    .enumerate()
                    .map(move |(slot_index, (_, focal_length))| {
                        (box_index + 1_usize) * (slot_index + 1_usize) * focal_length as usize
                    })
            })
            .sum()
    }
}

impl RunSolution for Solution {
    type Answer1 = usize;
    type Answer2 = usize;

    fn from_input(input: &str) -> ParseResult<Self> {
        let line: &str = LineCursor::new(input).next_line()?;

        line.split(',')
            .map(|step| Ok(InitStep::parse(step)?.1))
            .collect::<ParseResult<_>>()
            .map(Self)
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.hash_sum()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.focusing_power()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: usize = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 1320_usize);

        let answer2: usize = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 145_usize);
    }
}

const SAMPLE_STR: &'static str = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash() {
        assert_eq!(InitStep::hash("HASH"), 52_usize);
        assert_eq!(InitStep::hash("rn=1"), 30_usize);
        assert_eq!(InitStep::hash("rn"), 0_usize);
        assert_eq!(InitStep::hash("qp"), 1_usize);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            InitStep::parse("rn=1"),
            Ok((
                "",
                InitStep {
                    text: "rn=1".to_owned(),
                    label: "rn".to_owned(),
                    op: LensOp::Insert(1_u32),
                }
            ))
        );
        assert_eq!(
            InitStep::parse("cm-"),
            Ok((
                "",
                InitStep {
                    text: "cm-".to_owned(),
                    label: "cm".to_owned(),
                    op: LensOp::Remove,
                }
            ))
        );
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
