use {
    crate::*,
    nom::{
        bytes::complete::tag,
        combinator::map,
        multi::separated_list1,
        sequence::separated_pair,
        IResult,
    },
    std::{cmp::Ordering, collections::HashSet},
};

#[cfg_attr(test, derive(Debug, PartialEq))]
struct PageOrderingRule {
    before: u32,
    after: u32,
}

impl Parse for PageOrderingRule {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(parse_integer::<u32>, tag("|"), parse_integer::<u32>),
            |(before, after)| Self { before, after },
        )(input)
    }
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution {
    rules: Vec<PageOrderingRule>,
    updates: Vec<Vec<u32>>,
}

impl Solution {
    fn rule_set(&self) -> HashSet<(u32, u32)> {
        self.rules
            .iter()
            .map(|rule| (rule.before, rule.after))
            .collect()
    }

    fn reordered(update: &[u32], rule_set: &HashSet<(u32, u32)>) -> Vec<u32> {
        let mut reordered: Vec<u32> = update.to_vec();

        reordered.sort_by(|&a, &b| {
            if rule_set.contains(&(a, b)) {
                Ordering::Less
            } else if rule_set.contains(&(b, a)) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });

        reordered
    }

    fn middle_page(update: &[u32]) -> u32 {
        update.get(update.len() / 2_usize).copied().unwrap_or_default()
    }

    fn middle_page_sums(&self) -> (u32, u32) {
        let rule_set: HashSet<(u32, u32)> = self.rule_set();
        let mut ordered_sum: u32 = 0_u32;
        let mut reordered_sum: u32 = 0_u32;

        for update in &self.updates {
            let reordered: Vec<u32> = Self::reordered(update, &rule_set);

            if reordered == *update {
                ordered_sum += Self::middle_page(update);
            } else {
                reordered_sum += Self::middle_page(&reordered);
            }
        }

        (ordered_sum, reordered_sum)
    }
}

impl RunSolution for Solution {
    type Answer1 = u32;
    type Answer2 = u32;

    fn from_input(input: &str) -> ParseResult<Self> {
        let mut cursor: LineCursor = LineCursor::new(input);
        let mut rules: Vec<PageOrderingRule> = Vec::new();

        loop {
            let line: &str = cursor.next_line()?;

            if line.is_empty() {
                break;
            }

            rules.push(PageOrderingRule::parse(line)?.1);
        }

        let mut updates: Vec<Vec<u32>> = Vec::new();

        while let Some(line) = cursor.try_next_line() {
            updates.push(separated_list1(tag(","), parse_integer::<u32>)(line)?.1);
        }

        Ok(Self { rules, updates })
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.middle_page_sums().0
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.middle_page_sums().1
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: u32 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 143_u32);

        let answer2: u32 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 123_u32);
    }
}

const SAMPLE_STR: &'static str = "\
    47|53\n\
    97|13\n\
    97|61\n\
    97|47\n\
    75|29\n\
    61|13\n\
    75|53\n\
    29|13\n\
    97|29\n\
    53|29\n\
    61|53\n\
    97|53\n\
    61|29\n\
    47|13\n\
    75|47\n\
    97|75\n\
    47|61\n\
    75|61\n\
    47|29\n\
    75|13\n\
    53|13\n\
    \n\
    75,47,61,53,29\n\
    97,61,53,29,13\n\
    75,29,13\n\
    75,97,47,61,53\n\
    61,13,29\n\
    97,13,75,29,47\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();

        assert_eq!(solution.rules.len(), 21_usize);
        assert_eq!(solution.updates.len(), 6_usize);
        assert_eq!(
            solution.rules[0_usize],
            PageOrderingRule {
                before: 47_u32,
                after: 53_u32
            }
        );
    }

    #[test]
    fn test_reordered() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();
        let rule_set = solution.rule_set();

        assert_eq!(
            Solution::reordered(&solution.updates[0_usize], &rule_set),
            solution.updates[0_usize]
        );
        assert_eq!(
            Solution::reordered(&solution.updates[3_usize], &rule_set),
            vec![97_u32, 75_u32, 47_u32, 61_u32, 53_u32]
        );
        assert_eq!(
            Solution::reordered(&solution.updates[5_usize], &rule_set),
            vec![97_u32, 75_u32, 47_u32, 29_u32, 13_u32]
        );
    }

    #[test]
    fn test_middle_page() {
        assert_eq!(Solution::middle_page(&[75_u32, 47_u32, 61_u32, 53_u32, 29_u32]), 61_u32);
        assert_eq!(Solution::middle_page(&[61_u32, 13_u32, 29_u32]), 13_u32);
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
