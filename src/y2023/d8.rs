use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::alphanumeric1,
        combinator::{map, value},
        multi::many1,
        sequence::tuple,
        IResult,
    },
    num::Integer,
    std::collections::HashMap,
};

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum Turn {
    Left,
    Right,
}

impl Parse for Turn {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        alt((value(Self::Left, tag("L")), value(Self::Right, tag("R"))))(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct NetworkNode {
    name: String,
    left: String,
    right: String,
}

impl Parse for NetworkNode {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            tuple((
                alphanumeric1,
                tag(" = ("),
                alphanumeric1,
                tag(", "),
                alphanumeric1,
                tag(")"),
            )),
            |(name, _, left, _, right, _): (&str, _, &str, _, &str, _)| Self {
                name: name.to_owned(),
                left: left.to_owned(),
                right: right.to_owned(),
            },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    turns: Vec<Turn>,
    nodes: Vec<NetworkNode>,
}

impl Solution {
    fn node_map(&self) -> HashMap<&str, &NetworkNode> {
        self.nodes
            .iter()
            .map(|node| (node.name.as_str(), node))
            .collect()
    }

    fn steps_from<F: Fn(&str) -> bool>(&self, start: &str, is_end: F) -> u64 {
        let node_map: HashMap<&str, &NetworkNode> = self.node_map();
        let mut location: &str = start;
        let mut steps: u64 = 0_u64;

        for turn in self.turns.iter().cycle() {
            if is_end(location) {
                break;
            }

            match node_map.get(location) {
                Some(node) => {
                    location = match turn {
                        Turn::Left => &node.left,
                        Turn::Right => &node.right,
                    };
                    steps += 1_u64;
                }
                None => break,
            }
        }

        steps
    }

    fn steps_to_zzz(&self) -> u64 {
        self.steps_from("AAA", |name| name == "ZZZ")
    }

    /// Each ghost start settles into a cycle through its end node, so the first simultaneous
    /// arrival is the least common multiple of the individual path lengths.
    fn ghost_steps(&self) -> u64 {
        self.nodes
            .iter()
            .filter(|node| node.name.ends_with('A'))
            .map(|node| self.steps_from(&node.name, |name| name.ends_with('Z')))
            .fold(1_u64, |combined, steps| combined.lcm(&steps))
    }
}

impl RunSolution for Solution {
    type Answer1 = u64;
    type Answer2 = u64;

    fn from_input(input: &str) -> ParseResult<Self> {
        let mut cursor: LineCursor = LineCursor::new(input);
        let turns: Vec<Turn> = many1(Turn::parse)(cursor.next_line()?)?.1;
        let separator: &str = cursor.next_line()?;

        if !separator.is_empty() {
            return Err(ParseError::Malformed(format!(
                "expected a blank line after the turns, found {separator:?}"
            )));
        }

        let mut nodes: Vec<NetworkNode> = Vec::new();

        while let Some(line) = cursor.try_next_line() {
            nodes.push(NetworkNode::parse(line)?.1);
        }

        Ok(Self { turns, nodes })
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.steps_to_zzz()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.ghost_steps()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STRS[0_usize]).expect("sample 1 parses");
        let answer1: u64 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 2_u64);

        let mut solution: Self = Self::from_input(SAMPLE_STRS[1_usize]).expect("sample 2 parses");
        let answer1: u64 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 6_u64);

        let mut solution: Self = Self::from_input(SAMPLE_STRS[2_usize]).expect("sample 3 parses");
        let answer2: u64 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 6_u64);
    }
}

const SAMPLE_STRS: &'static [&'static str] = &[
    "\
    RL\n\
    \n\
    AAA = (BBB, CCC)\n\
    BBB = (DDD, EEE)\n\
    CCC = (ZZZ, GGG)\n\
    DDD = (DDD, DDD)\n\
    EEE = (EEE, EEE)\n\
    GGG = (GGG, GGG)\n\
    ZZZ = (ZZZ, ZZZ)\n",
    "\
    LLR\n\
    \n\
    AAA = (BBB, BBB)\n\
    BBB = (AAA, ZZZ)\n\
    ZZZ = (ZZZ, ZZZ)\n",
    "\
    LR\n\
    \n\
    11A = (11B, XXX)\n\
    11B = (XXX, 11Z)\n\
    11Z = (11B, XXX)\n\
    22A = (22B, XXX)\n\
    22B = (22C, 22C)\n\
    22C = (22Z, 22Z)\n\
    22Z = (22B, 22B)\n\
    XXX = (XXX, XXX)\n",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        let solution: Solution = Solution::from_input(SAMPLE_STRS[1_usize]).unwrap();

        assert_eq!(solution.turns, vec![Turn::Left, Turn::Left, Turn::Right]);
        assert_eq!(solution.nodes.len(), 3_usize);
        assert_eq!(
            solution.nodes[1_usize],
            NetworkNode {
                name: "BBB".into(),
                left: "AAA".into(),
                right: "ZZZ".into(),
            }
        );
    }

    #[test]
    fn test_steps_from() {
        let solution: Solution = Solution::from_input(SAMPLE_STRS[2_usize]).unwrap();

        assert_eq!(solution.steps_from("11A", |name| name.ends_with('Z')), 2_u64);
        assert_eq!(solution.steps_from("22A", |name| name.ends_with('Z')), 3_u64);
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
