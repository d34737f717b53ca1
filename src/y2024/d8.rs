use {
    crate::*,
    glam::IVec2,
    std::collections::{HashMap, HashSet},
};

pub struct Solution {
    grid: Grid<u8>,
    antennas: HashMap<u8, Vec<IVec2>>,
}

impl Solution {
    fn antenna_pairs(&self) -> impl Iterator<Item = (IVec2, IVec2)> + '_ {
        self.antennas.values().flat_map(|positions| {
            positions.iter().enumerate().flat_map(move |(index, &a)| {
                positions[index + 1_usize..].iter().map(move |&b| (a, b))
            })
        })
    }

    fn antinode_count(&self) -> usize {
        let mut antinodes: HashSet<IVec2> = HashSet::new();

        for (a, b) in self.antenna_pairs() {
            let delta: IVec2 = a - b;

            for antinode in [a + delta, b - delta] {
                if self.grid.contains(antinode) {
                    antinodes.insert(antinode);
                }
            }
        }

        antinodes.len()
    }

    fn resonant_antinode_count(&self) -> usize {
        let mut antinodes: HashSet<IVec2> = HashSet::new();

        for (a, b) in self.antenna_pairs() {
            let delta: IVec2 = a - b;

            for (start, step) in [(a, delta), (b, -delta)] {
                let mut antinode: IVec2 = start;

                while self.grid.contains(antinode) {
                    antinodes.insert(antinode);
                    antinode += step;
                }
            }
        }

        antinodes.len()
    }
}

impl RunSolution for Solution {
    type Answer1 = usize;
    type Answer2 = usize;

    fn from_input(input: &str) -> ParseResult<Self> {
        let grid: Grid<u8> = parse_all(input)?;
        let mut antennas: HashMap<u8, Vec<IVec2>> = HashMap::new();

        for (index, &cell) in grid.cells().iter().enumerate() {
            if cell != b'.' {
                antennas.entry(cell).or_default().push(grid.pos_from_index(index));
            }
        }

        Ok(Self { grid, antennas })
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.antinode_count()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.resonant_antinode_count()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STR).expect("sample parses");
        let answer1: usize = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 14_usize);

        let answer2: usize = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 34_usize);
    }
}

const SAMPLE_STR: &'static str = "\
    ............\n\
    ........0...\n\
    .....0......\n\
    .......0....\n\
    ....0.......\n\
    ......A.....\n\
    ............\n\
    ............\n\
    ........A...\n\
    .........A..\n\
    ............\n\
    ............\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        let solution: Solution = Solution::from_input(SAMPLE_STR).unwrap();

        assert_eq!(solution.antennas.len(), 2_usize);
        assert_eq!(solution.antennas[&b'0'].len(), 4_usize);
        assert_eq!(solution.antennas[&b'A'].len(), 3_usize);
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
