use {
    crate::*,
    glam::IVec2,
    std::collections::HashSet,
};

define_cell! {
    #[repr(u8)]
    #[cfg_attr(test, derive(Debug))]
    #[derive(Clone, Copy, Default, PartialEq)]
    enum WarehouseCell {
        #[default]
        Open = b'.',
        Wall = b'#',
        Box = b'O',
        Robot = b'@',
    }
}

struct Warehouse {
    grid: Grid<WarehouseCell>,
    robot: IVec2,
}

impl Warehouse {
    fn set(&mut self, pos: IVec2, cell: WarehouseCell) {
        if let Some(grid_cell) = self.grid.get_mut(pos) {
            *grid_cell = cell;
        }
    }

    /// Moving a run of boxes one step is the same as moving its first box to the open cell at
    /// the far end.
    fn push(&mut self, direction: Direction) {
        let step: IVec2 = direction.vec();
        let first: IVec2 = self.robot + step;
        let mut open: IVec2 = first;

        while self.grid.get(open) == Some(&WarehouseCell::Box) {
            open += step;
        }

        if self.grid.get(open) == Some(&WarehouseCell::Open) {
            if open != first {
                self.set(open, WarehouseCell::Box);
                self.set(first, WarehouseCell::Open);
            }

            self.robot = first;
        }
    }

    fn gps_sum(&self) -> i32 {
        self.grid
            .positions(|&cell| cell == WarehouseCell::Box)
            .map(|pos| 100_i32 * pos.y + pos.x)
            .sum()
    }
}

define_cell! {
    #[repr(u8)]
    #[cfg_attr(test, derive(Debug))]
    #[derive(Clone, Copy, Default, PartialEq)]
    enum WideCell {
        #[default]
        Open = b'.',
        Wall = b'#',
        BoxLeft = b'[',
        BoxRight = b']',
    }
}

struct WideWarehouse {
    grid: Grid<WideCell>,
    robot: IVec2,
}

impl WideWarehouse {
    fn set(&mut self, pos: IVec2, cell: WideCell) {
        if let Some(grid_cell) = self.grid.get_mut(pos) {
            *grid_cell = cell;
        }
    }

    /// The position of the left half of the box covering `pos`, if any.
    fn box_left_at(&self, pos: IVec2) -> Option<IVec2> {
        match self.grid.get(pos) {
            Some(WideCell::BoxLeft) => Some(pos),
            Some(WideCell::BoxRight) => Some(pos - IVec2::X),
            _ => None,
        }
    }

    fn push(&mut self, direction: Direction) {
        if direction.is_horizontal() {
            self.push_horizontal(direction);
        } else {
            self.push_vertical(direction);
        }
    }

    fn push_horizontal(&mut self, direction: Direction) {
        let step: IVec2 = direction.vec();
        let first: IVec2 = self.robot + step;
        let mut open: IVec2 = first;

        while matches!(
            self.grid.get(open),
            Some(WideCell::BoxLeft | WideCell::BoxRight)
        ) {
            open += step;
        }

        if self.grid.get(open) == Some(&WideCell::Open) {
            while open != first {
                let nearer: IVec2 = open - step;

                if let Some(&cell) = self.grid.get(nearer) {
                    self.set(open, cell);
                }

                open = nearer;
            }

            self.set(first, WideCell::Open);
            self.robot = first;
        }
    }

    /// A vertical push carries a tree of boxes, since each half can rest on a different box
    /// below. A wall ahead of any gathered box cancels the whole push.
    fn push_vertical(&mut self, direction: Direction) {
        let step: IVec2 = direction.vec();
        let first: IVec2 = self.robot + step;

        let Some(seed) = self.box_left_at(first) else {
            if self.grid.get(first) == Some(&WideCell::Open) {
                self.robot = first;
            }

            return;
        };

        let mut boxes: Vec<IVec2> = vec![seed];
        let mut seen: HashSet<IVec2> = HashSet::new();
        let mut box_index: usize = 0_usize;

        seen.insert(seed);

        while box_index < boxes.len() {
            let box_left: IVec2 = boxes[box_index];

            box_index += 1_usize;

            for ahead in [box_left + step, box_left + IVec2::X + step] {
                if matches!(self.grid.get(ahead), None | Some(WideCell::Wall)) {
                    return;
                }

                if let Some(next_left) = self.box_left_at(ahead) {
                    if seen.insert(next_left) {
                        boxes.push(next_left);
                    }
                }
            }
        }

        for &box_left in &boxes {
            self.set(box_left, WideCell::Open);
            self.set(box_left + IVec2::X, WideCell::Open);
        }

        for &box_left in &boxes {
            self.set(box_left + step, WideCell::BoxLeft);
            self.set(box_left + IVec2::X + step, WideCell::BoxRight);
        }

        self.robot = first;
    }

    fn gps_sum(&self) -> i32 {
        self.grid
            .positions(|&cell| cell == WideCell::BoxLeft)
            .map(|pos| 100_i32 * pos.y + pos.x)
            .sum()
    }
}

pub struct Solution {
    grid: Grid<WarehouseCell>,
    robot: IVec2,
    moves: Vec<Direction>,
}

impl Solution {
    fn warehouse(&self) -> Warehouse {
        Warehouse {
            grid: self.grid.clone(),
            robot: self.robot,
        }
    }

    /// Everything but the robot doubles in width: walls become two wall cells and each box
    /// becomes a `[]` pair.
    fn wide_warehouse(&self) -> WideWarehouse {
        let dimensions: IVec2 = self.grid.dimensions();
        let mut wide: WideWarehouse = WideWarehouse {
            grid: Grid::filled(
                WideCell::Open,
                IVec2::new(2_i32 * dimensions.x, dimensions.y),
            ),
            robot: IVec2::new(2_i32 * self.robot.x, self.robot.y),
        };

        for (index, &cell) in self.grid.cells().iter().enumerate() {
            let pos: IVec2 = self.grid.pos_from_index(index);
            let left: IVec2 = IVec2::new(2_i32 * pos.x, pos.y);

            let (left_cell, right_cell) = match cell {
                WarehouseCell::Wall => (WideCell::Wall, WideCell::Wall),
                WarehouseCell::Box => (WideCell::BoxLeft, WideCell::BoxRight),
                WarehouseCell::Open | WarehouseCell::Robot => continue,
            };

            wide.set(left, left_cell);
            wide.set(left + IVec2::X, right_cell);
        }

        wide
    }

    fn final_gps_sum(&self) -> i32 {
        let mut warehouse: Warehouse = self.warehouse();

        for &direction in &self.moves {
            warehouse.push(direction);
        }

        warehouse.gps_sum()
    }

    fn final_wide_gps_sum(&self) -> i32 {
        let mut warehouse: WideWarehouse = self.wide_warehouse();

        for &direction in &self.moves {
            warehouse.push(direction);
        }

        warehouse.gps_sum()
    }
}

impl RunSolution for Solution {
    type Answer1 = i32;
    type Answer2 = i32;

    fn from_input(input: &str) -> ParseResult<Self> {
        let mut cursor: LineCursor = LineCursor::new(input);
        let mut grid: Grid<WarehouseCell> = Grid::from_cursor(&mut cursor)?;
        let robot: IVec2 = grid
            .positions(|&cell| cell == WarehouseCell::Robot)
            .next()
            .ok_or_else(|| ParseError::Malformed("no robot in the warehouse".into()))?;

        if let Some(cell) = grid.get_mut(robot) {
            *cell = WarehouseCell::Open;
        }

        let mut moves: Vec<Direction> = Vec::new();

        while let Some(line) = cursor.try_next_line() {
            for move_char in line.chars() {
                moves.push(match move_char {
                    '^' => Direction::North,
                    '>' => Direction::East,
                    'v' => Direction::South,
                    '<' => Direction::West,
                    _ => {
                        return Err(ParseError::Malformed(format!(
                            "unrecognized move {move_char:?}"
                        )))
                    }
                });
            }
        }

        Ok(Self { grid, robot, moves })
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.final_gps_sum()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.final_wide_gps_sum()
    }

    fn test() {
        let mut solution: Self = Self::from_input(SAMPLE_STRS[0_usize]).expect("sample 1 parses");

        assert_eq!(solution.part1(), 2028_i32);

        let mut solution: Self = Self::from_input(SAMPLE_STRS[1_usize]).expect("sample 2 parses");
        let answer1: i32 = solution.part1();

        println!("Part 1: {answer1}");
        assert_eq!(answer1, 10092_i32);

        let answer2: i32 = solution.part2();

        println!("Part 2: {answer2}");
        assert_eq!(answer2, 9021_i32);
    }
}

const SAMPLE_STRS: &'static [&'static str] = &[
    "\
    ########\n\
    #..O.O.#\n\
    ##@.O..#\n\
    #...O..#\n\
    #.#.O..#\n\
    #...O..#\n\
    #......#\n\
    ########\n\
    \n\
    <^^>>>vv<v>>v<<\n",
    "\
    ##########\n\
    #..O..O.O#\n\
    #......O.#\n\
    #.OO..O.O#\n\
    #..O@..O.#\n\
    #O#..O...#\n\
    #O..O..O.#\n\
    #.OO.O.OO#\n\
    #....O...#\n\
    ##########\n\
    \n\
    <vv>^<v^>v>^vv^v>v<>v^v<v<^vv<<<^><<><>>v<vvv<>^v^>^<<<><<v<<<v^vv^v>^\n\
    vvv<<^>^v^^><<>>><>^<<><^vv^^<>vvv<>><^^v>^>vv<>v<<<<v<^v>^<^^>>>^<v<v\n\
    ><>vv>v^v^<>><>>>><^^>vv>v<^^^>>v^v^<^^>v^^>v^<^v>v<>>v^v^<v>v^^<^^vv<\n\
    <<v<^>>^^^^>>>v^<>vvv^><v<<<>^^^vv^<vvv>^>v<^^^^v<>^>vvvv><>>v^<<^^^^^\n\
    ^><^><>>><>^^<<^^v>>><^<v>^<vv>>v>>>^v><>^v><<<<v>>v<v<v>vvv>^<><<>^><\n\
    ^>><>^v<><^vvv<^^<><v<<<<<><^v<<<><<<^^<v<^^^><^>>^<v^><<<^>>^v<v^v<v^\n\
    >^>>^v>vv>^<<^v<>><<><<v<<v><>v<^vv<<<>^^v^>^^>>><<^v>>v^v><^^>>^<>vv^\n\
    <><^^>^^^<><vvvvv^v<v<<>^v<v>v<<^><<><<><<<^^<<<^<<>><<><^^^>^^<>^>v<>\n\
    ^^>vv<^v^v<vv>^<><v<^v>^^^>>>^^vvv^>vvv<>>>^<^>>>>>^<<^v>^vvv<>^<><<v>\n\
    v^^>>><<^^<>>^v^<v^vv<>v^<<>^<^v^v><^<<<><<^<v><v<>vv>>v><v^<vv<>v^<<^\n",
];

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE_SAMPLE_STR: &'static str = "\
        #######\n\
        #...#.#\n\
        #.....#\n\
        #..OO@#\n\
        #..O..#\n\
        #.....#\n\
        #######\n\
        \n\
        <vv<<^^<<^^\n";

    #[test]
    fn test_from_input() {
        let solution: Solution = Solution::from_input(SAMPLE_STRS[0_usize]).unwrap();

        assert_eq!(solution.robot, IVec2::new(2_i32, 2_i32));
        assert_eq!(solution.moves.len(), 15_usize);
        assert_eq!(solution.moves[0_usize], Direction::West);
        assert_eq!(solution.grid.get(solution.robot), Some(&WarehouseCell::Open));
    }

    #[test]
    fn test_wide_warehouse() {
        let solution: Solution = Solution::from_input(WIDE_SAMPLE_STR).unwrap();
        let wide: WideWarehouse = solution.wide_warehouse();

        assert_eq!(wide.grid.dimensions(), IVec2::new(14_i32, 7_i32));
        assert_eq!(wide.robot, IVec2::new(10_i32, 3_i32));
        assert_eq!(wide.grid.get(IVec2::new(6_i32, 3_i32)), Some(&WideCell::BoxLeft));
        assert_eq!(wide.grid.get(IVec2::new(7_i32, 3_i32)), Some(&WideCell::BoxRight));
    }

    #[test]
    fn test_final_wide_gps_sum() {
        let solution: Solution = Solution::from_input(WIDE_SAMPLE_STR).unwrap();

        assert_eq!(solution.final_wide_gps_sum(), 618_i32);
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
