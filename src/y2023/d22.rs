use {
    crate::*,
    glam::IVec3,
    nom::{
        bytes::complete::tag,
        combinator::map,
        sequence::{separated_pair, tuple},
        IResult,
    },
    std::collections::{HashMap, HashSet, VecDeque},
};

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
struct Brick {
    near: IVec3,
    far: IVec3,
}

impl Brick {
    fn bottom(self) -> i32 {
        self.near.z.min(self.far.z)
    }

    fn height(self) -> i32 {
        (self.far.z - self.near.z).abs() + 1_i32
    }

    fn footprint(self) -> impl Iterator<Item = (i32, i32)> {
        let (min_x, max_x): (i32, i32) = min_and_max(self.near.x, self.far.x);
        let (min_y, max_y): (i32, i32) = min_and_max(self.near.y, self.far.y);

        (min_x..=max_x).flat_map(move |x| (min_y..=max_y).map(move |y| (x, y)))
    }

    fn parse_ivec3<'i>(input: &'i str) -> IResult<&'i str, IVec3> {
        map(
            tuple((
                parse_integer::<i32>,
                tag(","),
                parse_integer::<i32>,
                tag(","),
                parse_integer::<i32>,
            )),
            |(x, _, y, _, z)| IVec3::new(x, y, z),
        )(input)
    }
}

impl Parse for Brick {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(Self::parse_ivec3, tag("~"), Self::parse_ivec3),
            |(near, far)| Self { near, far },
        )(input)
    }
}

impl<'i> FromLines<'i> for Brick {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        let line: &str = cursor.next_line()?;

        Ok(Self::parse(line)?.1)
    }
}

/// Who rests on whom once every brick has fallen as far as it can.
struct SupportGraph {
    supported_by: Vec<HashSet<usize>>,
    supports: Vec<Vec<usize>>,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<Brick>);

impl Solution {
    /// Settles bricks bottom-up. Each column tracks its current top surface and which brick owns
    /// it; a falling brick rests one above the highest surface under its footprint, supported by
    /// every brick owning a column at exactly that height.
    fn settle(&self) -> SupportGraph {
        let mut order: Vec<usize> = (0_usize..self.0.len()).collect();

        order.sort_by_key(|&index| self.0[index].bottom());

        let mut column_tops: HashMap<(i32, i32), (i32, usize)> = HashMap::new();
        let mut supported_by: Vec<HashSet<usize>> = vec![HashSet::new(); self.0.len()];
        let mut supports: Vec<Vec<usize>> = vec![Vec::new(); self.0.len()];

        for index in order {
            let brick: Brick = self.0[index];
            let rest_bottom: i32 = brick
                .footprint()
                .filter_map(|column| column_tops.get(&column))
                .map(|&(top, _)| top + 1_i32)
                .max()
                .unwrap_or(1_i32);

            for column in brick.footprint() {
                if let Some(&(top, supporter)) = column_tops.get(&column) {
                    if top + 1_i32 == rest_bottom {
                        supported_by[index].insert(supporter);
                    }
                }

                column_tops.insert(column, (rest_bottom + brick.height() - 1_i32, index));
            }

            for &supporter in &supported_by[index] {
                supports[supporter].push(index);
            }
        }

        SupportGraph {
            supported_by,
            supports,
        }
    }

    /// A brick disintegrates safely if everything resting on it has another supporter.
    fn safe_to_disintegrate_count(&self) -> usize {
        let graph: SupportGraph = self.settle();

        (0_usize..self.0.len())
            .filter(|&index| {
                graph.supports[index]
                    .iter()
                    .all(|&above| graph.supported_by[above].len() > 1_usize)
            })
            .count()
    }

    /// For each brick, how many others fall in the chain reaction its removal starts.
    fn chain_reaction_sum(&self) -> usize {
        let graph: SupportGraph = self.settle();

        (0_usize..self.0.len())
            .map(|start| {
                let mut falling: HashSet<usize> = HashSet::from([start]);
                let mut pending: VecDeque<usize> = VecDeque::from([start]);

                while let Some(fallen) = pending.pop_front() {
                    for &above in &graph.supports[fallen] {
                        if !falling.contains(&above)
                            && graph.supported_by[above].is_subset(&falling)
                        {
                            falling.insert(above);
                            pending.push_back(above);
                        }
                    }
                }

                falling.len() - 1_usize
            })
            .sum()
    }
}

impl RunSolution for Solution {
    type Answer1 = usize;
    type Answer2 = usize;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(parse(input)?))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.safe_to_disintegrate_count()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.chain_reaction_sum()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: usize = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 5_usize);

        let answer2: usize = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 7_usize);
    }
}

const SAMPLE_STR: &'static str = "\
    1,0,1~1,2,1\n\
    0,0,2~2,0,2\n\
    0,2,3~2,2,3\n\
    0,0,4~0,2,4\n\
    2,0,5~2,2,5\n\
    0,1,6~2,1,6\n\
    1,1,8~1,1,9\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            Brick::parse("1,0,1~1,2,1"),
            Ok((
                "",
                Brick {
                    near: IVec3::new(1_i32, 0_i32, 1_i32),
                    far: IVec3::new(1_i32, 2_i32, 1_i32),
                }
            ))
        );
    }

    #[test]
    fn test_footprint() {
        let brick: Brick = Brick::parse("0,0,4~0,2,4").unwrap().1;

        assert_eq!(
            brick.footprint().collect::<Vec<_>>(),
            vec![(0_i32, 0_i32), (0_i32, 1_i32), (0_i32, 2_i32)]
        );
        assert_eq!(brick.height(), 1_i32);
        assert_eq!(Brick::parse("1,1,8~1,1,9").unwrap().1.height(), 2_i32);
    }

    #[test]
    fn test_settle() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();
        let graph: SupportGraph = solution.settle();

        // Brick A (index 0) alone holds up B and C.
        assert_eq!(graph.supports[0_usize].len(), 2_usize);
        assert!(graph.supported_by[1_usize].contains(&0_usize));
        assert!(graph.supported_by[2_usize].contains(&0_usize));

        // G (index 6) rests on F alone.
        assert_eq!(
            graph.supported_by[6_usize],
            HashSet::from([5_usize])
        );
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
