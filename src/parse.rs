use {
    nom::{error::Error as NomError, Err as NomErr},
    std::str::Lines,
    thiserror::Error,
};

/// Failure modes of record construction.
///
/// `InputExhausted` doubles as the loop-termination signal for [`parse`]: a record type reports it
/// when it needs a line and none remain, and the multi-record driver converts it into a clean stop.
/// Everything else a record type can object to is `Malformed`.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("no lines remain in the input")]
    InputExhausted,

    #[error("malformed record: {0}")]
    Malformed(String),
}

impl<'i> From<NomErr<NomError<&'i str>>> for ParseError {
    fn from(error: NomErr<NomError<&'i str>>) -> Self {
        Self::Malformed(error.to_string())
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// A forward-only position over the lines of one input text.
///
/// Created fresh per parse call and discarded afterwards. A line handed out by [`next_line`] or
/// [`try_next_line`] is consumed for good; no record can re-read a line another record took.
///
/// [`next_line`]: Self::next_line
/// [`try_next_line`]: Self::try_next_line
pub struct LineCursor<'i> {
    lines: Lines<'i>,
}

impl<'i> LineCursor<'i> {
    pub fn new(input: &'i str) -> Self {
        Self {
            lines: input.lines(),
        }
    }

    /// Consumes and returns the next line, or `ParseError::InputExhausted` when none remain.
    pub fn next_line(&mut self) -> ParseResult<&'i str> {
        self.lines.next().ok_or(ParseError::InputExhausted)
    }

    /// Consumes and returns the next line, or `None` when none remain.
    ///
    /// For optional trailing content, where running out of lines is not an error.
    pub fn try_next_line(&mut self) -> Option<&'i str> {
        self.lines.next()
    }
}

/// A record type that knows how to build one instance of itself by draining however many lines it
/// needs from a shared cursor.
///
/// Contract:
///
/// * On entry, the cursor is positioned at the start of this record's logical block.
/// * On `Ok`, the cursor has advanced past every line the record consumed.
/// * A record that needs a line and finds none left must return `ParseError::InputExhausted`
///   rather than swallowing it, so [`parse`] can tell "input finished" from "record finished".
///   Swallowing exhaustion internally is legitimate only for an optional trailing section, after
///   at least one line has already been consumed.
/// * An implementation must consume at least one line before returning `Ok`. One that succeeds
///   without reading makes [`parse`] loop forever, since the cursor never advances.
/// * Record types that scan for a blank-line terminator must treat exhaustion as an equivalent
///   terminator, or the final block of an input without a trailing line break gets dropped.
pub trait FromLines<'i>: Sized {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self>;
}

/// Parses `input` into as many records as it contains, in input order.
///
/// Invokes `R::from_lines` against one shared cursor until a call reports `InputExhausted`; that
/// failed partial attempt is discarded and the records collected so far are returned. A
/// `Malformed` failure aborts the whole parse instead.
pub fn parse<'i, R: FromLines<'i>>(input: &'i str) -> ParseResult<Vec<R>> {
    let mut cursor: LineCursor<'i> = LineCursor::new(input);
    let mut records: Vec<R> = Vec::new();

    loop {
        match R::from_lines(&mut cursor) {
            Ok(record) => records.push(record),
            Err(ParseError::InputExhausted) => break Ok(records),
            Err(error) => break Err(error),
        }
    }
}

/// Parses `input` as exactly one record that owns the entire text.
///
/// `R::from_lines` is invoked once; unlike in [`parse`], an `InputExhausted` failure propagates to
/// the caller, since an aggregate that could not be built at all is an error, not a clean stop.
pub fn parse_all<'i, R: FromLines<'i>>(input: &'i str) -> ParseResult<R> {
    R::from_lines(&mut LineCursor::new(input))
}

/// One line, verbatim.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct WholeLine<'i> {
    pub data: &'i str,
}

impl<'i> FromLines<'i> for WholeLine<'i> {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        Ok(Self {
            data: cursor.next_line()?,
        })
    }
}

/// Consecutive non-blank lines, ending at a blank line or the end of the input.
///
/// The blank terminator is consumed but not collected. A block may be empty (its first line was
/// the blank), but a block that would consume zero lines reports `InputExhausted` instead, so
/// `parse::<LineBlock>` terminates on every input.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct LineBlock<'i> {
    pub lines: Vec<&'i str>,
}

impl<'i> FromLines<'i> for LineBlock<'i> {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        let mut lines: Vec<&'i str> = Vec::new();
        let first: &'i str = cursor.next_line()?;

        if !first.is_empty() {
            lines.push(first);

            while let Some(line) = cursor.try_next_line() {
                if line.is_empty() {
                    break;
                }

                lines.push(line);
            }
        }

        Ok(Self { lines })
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::sync::atomic::{AtomicUsize, Ordering},
    };

    fn whole_lines(input: &str) -> Vec<&str> {
        parse::<WholeLine>(input)
            .unwrap()
            .into_iter()
            .map(|whole_line| whole_line.data)
            .collect()
    }

    #[test]
    fn test_parse_one_record_per_line() {
        assert_eq!(whole_lines("a\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_ignores_trailing_line_break() {
        assert_eq!(whole_lines("a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_empty_input_yields_no_records() {
        assert_eq!(parse::<WholeLine>(""), Ok(Vec::new()));
    }

    #[test]
    fn test_parse_preserves_input_order() {
        assert_eq!(
            whole_lines("3\n1\n2\n1"),
            vec!["3", "1", "2", "1"],
            "records must not be sorted, deduplicated, or regrouped"
        );
    }

    #[test]
    fn test_line_block_stops_at_blank_line() {
        let input: &str = "1 2\n3 4\n\n5 6\n";
        let mut cursor: LineCursor = LineCursor::new(input);

        assert_eq!(
            LineBlock::from_lines(&mut cursor),
            Ok(LineBlock {
                lines: vec!["1 2", "3 4"]
            })
        );
        assert_eq!(
            LineBlock::from_lines(&mut cursor),
            Ok(LineBlock {
                lines: vec!["5 6"]
            }),
            "the second block must start right after the blank separator"
        );
        assert_eq!(
            LineBlock::from_lines(&mut cursor),
            Err(ParseError::InputExhausted)
        );
    }

    #[test]
    fn test_line_block_consumes_leading_blank_lines() {
        assert_eq!(
            parse::<LineBlock>("\n\na\n"),
            Ok(vec![
                LineBlock { lines: Vec::new() },
                LineBlock { lines: Vec::new() },
                LineBlock {
                    lines: vec!["a"]
                },
            ])
        );
    }

    #[test]
    fn test_line_block_treats_exhaustion_as_terminator() {
        // No trailing line break after the final block.
        assert_eq!(
            parse::<LineBlock>("a\nb\n\nc"),
            Ok(vec![
                LineBlock {
                    lines: vec!["a", "b"]
                },
                LineBlock {
                    lines: vec!["c"]
                },
            ])
        );
    }

    static FROM_LINES_CALLS: AtomicUsize = AtomicUsize::new(0_usize);

    #[derive(Debug, PartialEq)]
    struct CountedLine(String);

    impl<'i> FromLines<'i> for CountedLine {
        fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
            FROM_LINES_CALLS.fetch_add(1_usize, Ordering::Relaxed);

            Ok(Self(cursor.next_line()?.into()))
        }
    }

    #[test]
    fn test_parse_all_invokes_construction_exactly_once() {
        FROM_LINES_CALLS.store(0_usize, Ordering::Relaxed);

        assert_eq!(
            parse_all::<CountedLine>("a\nb\nc"),
            Ok(CountedLine("a".into()))
        );
        assert_eq!(FROM_LINES_CALLS.load(Ordering::Relaxed), 1_usize);
    }

    #[test]
    fn test_parse_all_propagates_exhaustion() {
        assert_eq!(parse_all::<WholeLine>(""), Err(ParseError::InputExhausted));
    }

    #[test]
    fn test_parse_calls_are_independent() {
        assert_eq!(whole_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(whole_lines("x"), vec!["x"]);
        assert_eq!(whole_lines("a\nb"), vec!["a", "b"]);
    }
}
