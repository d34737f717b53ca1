use {
    crate::parse::{FromLines, LineCursor, ParseError, ParseResult},
    glam::IVec2,
    nom::{
        bytes::complete::tag,
        character::complete::digit1,
        combinator::{map, map_res, opt},
        sequence::tuple,
        IResult,
    },
    num::Integer,
    static_assertions::const_assert,
    std::{
        cmp::{max, min},
        mem::transmute,
        str::FromStr,
    },
    strum::EnumCount as EnumCountTrait,
    strum_macros::{EnumCount, EnumIter},
};

/// A cardinal direction, in clockwise order.
#[derive(Clone, Copy, Debug, EnumCount, EnumIter, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

// This guarantees we can safely convert from `u8` to `Direction` by masking the smallest 2 bits,
// which is the same as masking by `U8_MASK`
const_assert!(Direction::COUNT == 4_usize);

impl Direction {
    const U8_MASK: u8 = Self::COUNT as u8 - 1_u8;

    const VECS: [IVec2; Self::COUNT] = [IVec2::NEG_Y, IVec2::X, IVec2::Y, IVec2::NEG_X];

    #[inline]
    pub const fn vec(self) -> IVec2 {
        Self::VECS[self as usize]
    }

    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        // SAFETY: See `const_assert` above
        unsafe { transmute(value & Self::U8_MASK) }
    }

    /// The next direction clockwise.
    #[inline]
    pub const fn next(self) -> Self {
        Self::from_u8(self as u8 + 1_u8)
    }

    /// The next direction counter-clockwise.
    #[inline]
    pub const fn prev(self) -> Self {
        Self::from_u8((self as u8).wrapping_sub(1_u8))
    }

    #[inline]
    pub const fn rev(self) -> Self {
        Self::from_u8(self as u8 + 2_u8)
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::East | Self::West)
    }
}

impl From<Direction> for IVec2 {
    fn from(value: Direction) -> Self {
        value.vec()
    }
}

#[test]
fn test_direction_turns() {
    assert_eq!(Direction::North.next(), Direction::East);
    assert_eq!(Direction::West.next(), Direction::North);
    assert_eq!(Direction::North.prev(), Direction::West);
    assert_eq!(Direction::South.rev(), Direction::North);
    assert_eq!(Direction::East.vec() + Direction::West.vec(), IVec2::ZERO);
    assert_eq!(Direction::North.vec(), IVec2::NEG_Y);
}

/// A dense rectangular grid of cells, indexed by `IVec2` with +x right and +y down.
#[derive(Clone, Eq, Hash, PartialEq)]
#[cfg_attr(test, derive(Debug))]
pub struct Grid<T> {
    cells: Vec<T>,

    /// Should only contain unsigned values, but is signed for ease of use when iterating
    dimensions: IVec2,
}

impl<T> Grid<T> {
    pub fn try_from_cells_and_width(cells: Vec<T>, width: usize) -> Option<Self> {
        (width != 0_usize && cells.len() % width == 0_usize).then(|| {
            let dimensions: IVec2 = IVec2::new(width as i32, (cells.len() / width) as i32);

            Self { cells, dimensions }
        })
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    #[inline]
    pub fn dimensions(&self) -> IVec2 {
        self.dimensions
    }

    #[inline]
    pub fn contains(&self, pos: IVec2) -> bool {
        pos.cmpge(IVec2::ZERO).all() && pos.cmplt(self.dimensions).all()
    }

    #[inline]
    pub fn index_from_pos(&self, pos: IVec2) -> usize {
        pos.y as usize * self.dimensions.x as usize + pos.x as usize
    }

    pub fn pos_from_index(&self, index: usize) -> IVec2 {
        let width: usize = self.dimensions.x as usize;

        IVec2::new((index % width) as i32, (index / width) as i32)
    }

    pub fn get(&self, pos: IVec2) -> Option<&T> {
        self.contains(pos)
            .then(|| &self.cells[self.index_from_pos(pos)])
    }

    pub fn get_mut(&mut self, pos: IVec2) -> Option<&mut T> {
        self.contains(pos)
            .then(|| self.index_from_pos(pos))
            .map(|index: usize| &mut self.cells[index])
    }

    /// Positions of all cells matching a predicate, in row-major order.
    pub fn positions<'a, F: Fn(&T) -> bool + 'a>(
        &'a self,
        f: F,
    ) -> impl Iterator<Item = IVec2> + 'a {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(index, cell)| f(cell).then(|| self.pos_from_index(index)))
    }
}

impl<T: Clone> Grid<T> {
    pub fn filled(value: T, dimensions: IVec2) -> Self {
        Self {
            cells: vec![value; (dimensions.x * dimensions.y) as usize],
            dimensions,
        }
    }
}

impl<T: TryFrom<char>> Grid<T> {
    /// Reads a grid off the cursor: consecutive equal-length ASCII lines, ending at a blank line
    /// or the end of the input. The blank terminator is consumed, so a section after the grid can
    /// be read from the same cursor.
    pub fn from_cursor(cursor: &mut LineCursor<'_>) -> ParseResult<Self> {
        let mut cells: Vec<T> = Vec::new();
        let mut width: usize = 0_usize;
        let mut height: usize = 0_usize;
        let mut line: &str = cursor.next_line()?;

        loop {
            if line.is_empty() {
                break;
            }

            if !line.is_ascii() {
                return Err(ParseError::Malformed(format!(
                    "grid line {line:?} is not ASCII"
                )));
            }

            if height == 0_usize {
                width = line.len();
            } else if line.len() != width {
                return Err(ParseError::Malformed(format!(
                    "grid line {line:?} has length {}, expected {width}",
                    line.len()
                )));
            }

            for cell_char in line.chars() {
                cells.push(cell_char.try_into().map_err(|_| {
                    ParseError::Malformed(format!("unrecognized grid cell {cell_char:?}"))
                })?);
            }

            height += 1_usize;

            match cursor.try_next_line() {
                None | Some("") => break,
                Some(next_line) => line = next_line,
            }
        }

        if width == 0_usize {
            Err(ParseError::Malformed(
                "grid must start with a non-blank line".into(),
            ))
        } else {
            Ok(Self {
                cells,
                dimensions: IVec2::new(width as i32, height as i32),
            })
        }
    }
}

impl<'i, T: TryFrom<char>> FromLines<'i> for Grid<T> {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        Self::from_cursor(cursor)
    }
}

/// Generates a grid cell enum over a fixed ASCII alphabet, with conversions in both directions.
#[macro_export]
macro_rules! define_cell {
    {
        #[repr(u8)]
        $(#[$attr:meta])*
        $vis:vis enum $cell:ident { $(
            $(#[$variant_attr:meta])*
            $variant:ident = $variant_byte:expr
        ),* $(,)? }
    } => {
        #[repr(u8)]
        $(#[$attr])*
        $vis enum $cell { $(
            $(#[$variant_attr])*
            $variant = $variant_byte,
        )* }

        impl TryFrom<char> for $cell {
            type Error = ();

            fn try_from(value: char) -> Result<Self, Self::Error> {
                match value {
                    $(
                        _ if value as u32 == $variant_byte as u32 => Ok(Self::$variant),
                    )*
                    _ => Err(()),
                }
            }
        }

        impl From<$cell> for char {
            fn from(value: $cell) -> Self {
                (value as u8) as char
            }
        }
    }
}

pub fn parse_integer<'i, I: FromStr + Integer>(input: &'i str) -> IResult<&'i str, I> {
    map(
        tuple((
            map(opt(tag("-")), |minus| {
                if minus.is_some() {
                    I::zero() - I::one()
                } else {
                    I::one()
                }
            }),
            map_res(digit1, I::from_str),
        )),
        |(sign, bound)| sign * bound,
    )(input)
}

#[test]
fn test_parse_integer() {
    assert_eq!(parse_integer::<i32>("-42abc"), Ok(("abc", -42_i32)));
    assert_eq!(parse_integer::<u64>("7 8"), Ok((" 8", 7_u64)));
    assert!(parse_integer::<u8>("abc").is_err());
}

/// A single-line (or intra-line) nom sub-grammar.
pub trait Parse: Sized {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self>;
}

pub fn min_and_max<T: Ord + Copy>(v1: T, v2: T) -> (T, T) {
    (min(v1, v2), max(v1, v2))
}

pub fn manhattan_distance(a: IVec2, b: IVec2) -> i32 {
    let delta: IVec2 = (a - b).abs();

    delta.x + delta.y
}

#[test]
fn test_manhattan_distance() {
    assert_eq!(
        manhattan_distance(IVec2::new(1_i32, 6_i32), IVec2::new(5_i32, 11_i32)),
        9_i32
    );
    assert_eq!(manhattan_distance(IVec2::ZERO, IVec2::ZERO), 0_i32);
}

#[cfg(test)]
mod tests {
    use super::*;

    define_cell! {
        #[repr(u8)]
        #[derive(Clone, Copy, Debug, PartialEq)]
        enum Terrain {
            Open = b'.',
            Rock = b'#',
        }
    }

    #[test]
    fn test_define_cell_conversions() {
        assert_eq!(Terrain::try_from('.'), Ok(Terrain::Open));
        assert_eq!(Terrain::try_from('#'), Ok(Terrain::Rock));
        assert_eq!(Terrain::try_from('x'), Err(()));
        assert_eq!(char::from(Terrain::Rock), '#');
    }

    #[test]
    fn test_grid_from_cursor() {
        let mut cursor: LineCursor = LineCursor::new(".#\n..\n\nrest");
        let grid: Grid<Terrain> = Grid::from_cursor(&mut cursor).unwrap();

        assert_eq!(grid.dimensions(), IVec2::new(2_i32, 2_i32));
        assert_eq!(
            grid.cells(),
            &[Terrain::Open, Terrain::Rock, Terrain::Open, Terrain::Open]
        );
        assert_eq!(
            cursor.next_line(),
            Ok("rest"),
            "the blank grid terminator must be consumed"
        );
    }

    #[test]
    fn test_grid_from_cursor_rejects_ragged_lines() {
        assert!(matches!(
            Grid::<Terrain>::from_cursor(&mut LineCursor::new(".#\n.\n")),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_grid_positions() {
        let grid: Grid<Terrain> = Grid::from_cursor(&mut LineCursor::new("#.\n.#")).unwrap();

        assert_eq!(
            grid.positions(|cell| *cell == Terrain::Rock)
                .collect::<Vec<IVec2>>(),
            vec![IVec2::ZERO, IVec2::ONE]
        );
    }
}
