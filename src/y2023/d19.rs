use {
    crate::*,
    nom::{
        bytes::complete::tag,
        character::complete::{alpha1, one_of},
        combinator::map,
        multi::{many0, separated_list1},
        sequence::{delimited, separated_pair, terminated, tuple},
        IResult,
    },
    std::{collections::HashMap, ops::Range},
};

const CATEGORY_COUNT: usize = 4_usize;
const RATING_RANGE: Range<u64> = 1_u64..4001_u64;

fn category_index(category: char) -> usize {
    match category {
        'x' => 0_usize,
        'm' => 1_usize,
        'a' => 2_usize,
        _ => 3_usize,
    }
}

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum Comparison {
    Less,
    Greater,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Rule {
    category: usize,
    comparison: Comparison,
    threshold: u64,
    target: String,
}

impl Rule {
    fn matches(&self, part: &PartRating) -> bool {
        let rating: u64 = part.0[self.category];

        match self.comparison {
            Comparison::Less => rating < self.threshold,
            Comparison::Greater => rating > self.threshold,
        }
    }

    /// Splits `range` into the sub-range this rule sends to its target and the sub-range that
    /// falls through to the next rule. Either half may be empty.
    fn split(&self, range: Range<u64>) -> (Range<u64>, Range<u64>) {
        match self.comparison {
            Comparison::Less => (
                range.start..range.end.min(self.threshold),
                range.start.max(self.threshold)..range.end,
            ),
            Comparison::Greater => (
                range.start.max(self.threshold + 1_u64)..range.end,
                range.start..range.end.min(self.threshold + 1_u64),
            ),
        }
    }
}

impl Parse for Rule {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                map(one_of("xmas"), category_index),
                map(one_of("<>"), |comparison| match comparison {
                    '<' => Comparison::Less,
                    _ => Comparison::Greater,
                }),
                parse_integer::<u64>,
                tag(":"),
                alpha1,
            )),
            |(category, comparison, threshold, _, target): (_, _, _, _, &str)| Self {
                category,
                comparison,
                threshold,
                target: target.to_owned(),
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct Workflow {
    name: String,
    rules: Vec<Rule>,
    fallback: String,
}

impl Parse for Workflow {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                alpha1,
                tag("{"),
                many0(terminated(Rule::parse, tag(","))),
                alpha1,
                tag("}"),
            )),
            |(name, _, rules, fallback, _): (&str, _, _, &str, _)| Self {
                name: name.to_owned(),
                rules,
                fallback: fallback.to_owned(),
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct PartRating([u64; CATEGORY_COUNT]);

impl PartRating {
    fn total(&self) -> u64 {
        self.0.iter().sum()
    }
}

impl Parse for PartRating {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            delimited(
                tag("{"),
                separated_list1(
                    tag(","),
                    separated_pair(one_of("xmas"), tag("="), parse_integer::<u64>),
                ),
                tag("}"),
            ),
            |ratings| {
                let mut part: Self = Self([0_u64; CATEGORY_COUNT]);

                for (category, rating) in ratings {
                    part.0[category_index(category)] = rating;
                }

                part
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    workflows: Vec<Workflow>,
    parts: Vec<PartRating>,
}

impl Solution {
    fn workflow_map(&self) -> HashMap<&str, &Workflow> {
        self.workflows
            .iter()
            .map(|workflow| (workflow.name.as_str(), workflow))
            .collect()
    }

    fn is_accepted(&self, part: &PartRating, workflow_map: &HashMap<&str, &Workflow>) -> bool {
        let mut target: &str = "in";

        while target != "A" && target != "R" {
            let Some(workflow) = workflow_map.get(target) else {
                return false;
            };

            target = workflow
                .rules
                .iter()
                .find(|rule| rule.matches(part))
                .map_or(&workflow.fallback, |rule| &rule.target);
        }

        target == "A"
    }

    fn accepted_rating_sum(&self) -> u64 {
        let workflow_map: HashMap<&str, &Workflow> = self.workflow_map();

        self.parts
            .iter()
            .filter(|part| self.is_accepted(part, &workflow_map))
            .map(PartRating::total)
            .sum()
    }

    /// Pushes whole rating ranges through the workflow graph, splitting at each rule, and counts
    /// the combinations that end at `A`.
    fn accepted_combinations(
        &self,
        target: &str,
        mut ranges: [Range<u64>; CATEGORY_COUNT],
        workflow_map: &HashMap<&str, &Workflow>,
    ) -> u64 {
        if target == "R" {
            return 0_u64;
        }

        if target == "A" {
            return ranges
                .iter()
                .map(|range| range.end.saturating_sub(range.start))
                .product();
        }

        let Some(workflow) = workflow_map.get(target) else {
            return 0_u64;
        };

        let mut combinations: u64 = 0_u64;

        for rule in &workflow.rules {
            let (matching, remaining): (Range<u64>, Range<u64>) =
                rule.split(ranges[rule.category].clone());

            if !matching.is_empty() {
                let mut matching_ranges: [Range<u64>; CATEGORY_COUNT] = ranges.clone();

                matching_ranges[rule.category] = matching;
                combinations +=
                    self.accepted_combinations(&rule.target, matching_ranges, workflow_map);
            }

            ranges[rule.category] = remaining;

            if ranges[rule.category].is_empty() {
                return combinations;
            }
        }

        combinations + self.accepted_combinations(&workflow.fallback, ranges, workflow_map)
    }
}

impl RunSolution for Solution {
    type Answer1 = u64;
    type Answer2 = u64;

    fn from_input(input: &str) -> ParseResult<Self> {
        let mut cursor: LineCursor = LineCursor::new(input);
        let mut workflows: Vec<Workflow> = Vec::new();

        loop {
            let line: &str = cursor.next_line()?;

            if line.is_empty() {
                break;
            }

            workflows.push(Workflow::parse(line)?.1);
        }

        let mut parts: Vec<PartRating> = Vec::new();

        while let Some(line) = cursor.try_next_line() {
            parts.push(PartRating::parse(line)?.1);
        }

        Ok(Self { workflows, parts })
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.accepted_rating_sum()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.accepted_combinations(
            "in",
            [RATING_RANGE; CATEGORY_COUNT],
            &self.workflow_map(),
        )
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: u64 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 19114_u64);

        let answer2: u64 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 167409079868000_u64);
    }
}

const SAMPLE_STR: &'static str = "\
    px{a<2006:qkq,m>2090:A,rfg}\n\
    pv{a>1716:R,A}\n\
    lnx{m>1548:A,A}\n\
    rfg{s<537:gd,x>2440:R,A}\n\
    qs{s>3448:A,lnx}\n\
    qkq{x<1416:A,crn}\n\
    crn{x>2662:A,R}\n\
    in{s<1351:px,qqz}\n\
    qqz{s>2770:qs,m<1801:hdj,R}\n\
    gd{a>3333:R,R}\n\
    hdj{m>838:A,pv}\n\
    \n\
    {x=787,m=2655,a=1222,s=2876}\n\
    {x=1679,m=44,a=2067,s=496}\n\
    {x=2036,m=264,a=79,s=2244}\n\
    {x=2461,m=1339,a=466,s=291}\n\
    {x=2127,m=1623,a=2188,s=1013}\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workflow() {
        let workflow: Workflow = Workflow::parse("px{a<2006:qkq,m>2090:A,rfg}").unwrap().1;

        assert_eq!(workflow.name, "px");
        assert_eq!(workflow.rules.len(), 2_usize);
        assert_eq!(workflow.fallback, "rfg");
        assert_eq!(
            workflow.rules[0_usize],
            Rule {
                category: category_index('a'),
                comparison: Comparison::Less,
                threshold: 2006_u64,
                target: "qkq".to_owned(),
            }
        );
    }

    #[test]
    fn test_is_accepted() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();
        let workflow_map = solution.workflow_map();
        let expected: [bool; 5_usize] = [true, false, true, false, true];

        for (part, expected) in solution.parts.iter().zip(expected) {
            assert_eq!(solution.is_accepted(part, &workflow_map), expected);
        }
    }

    #[test]
    fn test_split() {
        let rule: Rule = Rule {
            category: 0_usize,
            comparison: Comparison::Less,
            threshold: 2006_u64,
            target: "qkq".to_owned(),
        };

        assert_eq!(
            rule.split(1_u64..4001_u64),
            (1_u64..2006_u64, 2006_u64..4001_u64)
        );
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
