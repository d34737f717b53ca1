use {
    crate::*,
    bitvec::prelude::*,
    glam::IVec2,
    strum::IntoEnumIterator,
};

#[cfg_attr(test, derive(Debug, PartialEq))]
#[derive(Default)]
struct Region {
    area: usize,
    perimeter: usize,
    corners: usize,
}

pub struct Solution(Grid<u8>);

impl Solution {
    fn is_plant(&self, pos: IVec2, plant: u8) -> bool {
        self.0.get(pos) == Some(&plant)
    }

    /// A region has as many sides as corners. `pos` contributes a convex corner where two
    /// adjacent fence directions both leave the region, and a concave one where both stay
    /// inside but the diagonal between them does not.
    fn corner_count(&self, pos: IVec2, plant: u8) -> usize {
        Direction::iter()
            .filter(|&direction| {
                let side: bool = self.is_plant(pos + direction.vec(), plant);
                let next_side: bool = self.is_plant(pos + direction.next().vec(), plant);

                if side && next_side {
                    !self.is_plant(pos + direction.vec() + direction.next().vec(), plant)
                } else {
                    !side && !next_side
                }
            })
            .count()
    }

    fn regions(&self) -> Vec<Region> {
        let mut visited: BitVec = bitvec![0; self.0.cells().len()];
        let mut regions: Vec<Region> = Vec::new();

        for index in 0_usize..self.0.cells().len() {
            if visited[index] {
                continue;
            }

            let plant: u8 = self.0.cells()[index];
            let mut frontier: Vec<IVec2> = vec![self.0.pos_from_index(index)];
            let mut region: Region = Region::default();

            visited.set(index, true);

            while let Some(pos) = frontier.pop() {
                region.area += 1_usize;
                region.corners += self.corner_count(pos, plant);

                for direction in Direction::iter() {
                    let neighbor: IVec2 = pos + direction.vec();

                    if self.is_plant(neighbor, plant) {
                        if !visited.replace(self.0.index_from_pos(neighbor), true) {
                            frontier.push(neighbor);
                        }
                    } else {
                        region.perimeter += 1_usize;
                    }
                }
            }

            regions.push(region);
        }

        regions
    }

    fn fence_price(&self) -> usize {
        self.regions()
            .into_iter()
            .map(|region| region.area * region.perimeter)
            .sum()
    }

    fn bulk_fence_price(&self) -> usize {
        self.regions()
            .into_iter()
            .map(|region| region.area * region.corners)
            .sum()
    }
}

impl RunSolution for Solution {
    type Answer1 = usize;
    type Answer2 = usize;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(parse_all(input)?))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.fence_price()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.bulk_fence_price()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STRS[0_usize]).expect("sample 1 parses");

        assert_eq!(solution.part1(), 140_usize);
        assert_eq!(solution.part2(), 80_usize);

        let mut solution: Self = Self::from_input(SAMPLE_STRS[1_usize]).expect("sample 2 parses");

        assert_eq!(solution.part1(), 772_usize);
        assert_eq!(solution.part2(), 436_usize);

        let mut solution: Self = Self::from_input(SAMPLE_STRS[2_usize]).expect("sample 3 parses");
        let answer1: usize = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 1930_usize);

        let answer2: usize = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 1206_usize);
    }
}

const SAMPLE_STRS: &'static [&'static str] = &[
    "\
    AAAA\n\
    BBCD\n\
    BBCC\n\
    EEEC\n",
    "\
    OOOOO\n\
    OXOXO\n\
    OOOOO\n\
    OXOXO\n\
    OOOOO\n",
    "\
    RRRRIICCFF\n\
    RRRRIICCCF\n\
    VVRRRCCFFF\n\
    VVRCCCJFFF\n\
    VVVVCJJCFE\n\
    VVIVCCJJEE\n\
    VVIIICJJEE\n\
    MIIIIIJJEE\n\
    MIIISIJEEE\n\
    MMMISSJEEE\n",
];

#[cfg(test)]
mod tests {
    use {super::*, std::sync::OnceLock};

    fn solution() -> &'static Solution {
        static ONCE_LOCK: OnceLock<Solution> = OnceLock::new();

        ONCE_LOCK.get_or_init(|| Solution::from_input(SAMPLE_STRS[0_usize]).unwrap())
    }

    #[test]
    fn test_regions() {
        let regions: Vec<Region> = solution().regions();

        assert_eq!(
            regions,
            vec![
                Region {
                    area: 4_usize,
                    perimeter: 10_usize,
                    corners: 4_usize
                },
                Region {
                    area: 4_usize,
                    perimeter: 8_usize,
                    corners: 4_usize
                },
                Region {
                    area: 4_usize,
                    perimeter: 10_usize,
                    corners: 8_usize
                },
                Region {
                    area: 1_usize,
                    perimeter: 4_usize,
                    corners: 4_usize
                },
                Region {
                    area: 3_usize,
                    perimeter: 8_usize,
                    corners: 4_usize
                },
            ]
        );
    }

    #[test]
    fn test_corner_count() {
        // The lone D plot is a square with four convex corners.
        assert_eq!(
            solution().corner_count(IVec2::new(3_i32, 1_i32), b'D'),
            4_usize
        );
        // The C plot at (2, 2) has one convex and one concave corner.
        assert_eq!(
            solution().corner_count(IVec2::new(2_i32, 2_i32), b'C'),
            2_usize
        );
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
