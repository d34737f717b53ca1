use {
    crate::*,
    nom::{
        branch::alt,
        bytes::complete::tag,
        character::complete::alpha1,
        combinator::map,
        multi::separated_list1,
        sequence::{preceded, separated_pair},
        IResult,
    },
    num::Integer,
    std::collections::{HashMap, VecDeque},
};

const BUTTON_PRESSES: u64 = 1000_u64;

#[derive(Clone, Copy)]
#[cfg_attr(test, derive(Debug, PartialEq))]
enum ModuleKind {
    Broadcast,
    FlipFlop,
    Conjunction,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct PulseModule {
    name: String,
    kind: ModuleKind,
    outputs: Vec<String>,
}

impl Parse for PulseModule {
    fn parse<'i>(input: &'i str) -> IResult<&'i str, Self> {
        map(
            separated_pair(
                alt((
                    map(tag("broadcaster"), |name: &str| {
                        (ModuleKind::Broadcast, name)
                    }),
                    map(preceded(tag("%"), alpha1), |name| {
                        (ModuleKind::FlipFlop, name)
                    }),
                    map(preceded(tag("&"), alpha1), |name| {
                        (ModuleKind::Conjunction, name)
                    }),
                )),
                tag(" -> "),
                separated_list1(tag(", "), map(alpha1, str::to_owned)),
            ),
            |((kind, name), outputs): ((_, &str), _)| Self {
                name: name.to_owned(),
                kind,
                outputs,
            },
        )(input)
    }
}

impl<'i> FromLines<'i> for PulseModule {
    fn from_lines(cursor: &mut LineCursor<'i>) -> ParseResult<Self> {
        let line: &str = cursor.next_line()?;

        Ok(Self::parse(line)?.1)
    }
}

/// Mutable flip-flop and conjunction state, separate from the wiring so each part starts fresh.
struct NetworkState {
    flip_flops: Vec<bool>,
    conjunction_memories: Vec<HashMap<usize, bool>>,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Solution(Vec<PulseModule>);

impl Solution {
    fn module_index(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|module| module.name == name)
    }

    fn initial_state(&self) -> NetworkState {
        let mut conjunction_memories: Vec<HashMap<usize, bool>> =
            vec![HashMap::new(); self.0.len()];

        // A conjunction remembers a low pulse from every input until told otherwise.
        for (source, module) in self.0.iter().enumerate() {
            for output in &module.outputs {
                if let Some(target) = self.module_index(output) {
                    if matches!(self.0[target].kind, ModuleKind::Conjunction) {
                        conjunction_memories[target].insert(source, false);
                    }
                }
            }
        }

        NetworkState {
            flip_flops: vec![false; self.0.len()],
            conjunction_memories,
        }
    }

    /// Presses the button once, delivering pulses breadth-first. `observe` sees every delivery:
    /// the sending module (`None` for the button), the target name, and whether the pulse is
    /// high.
    fn press_button<F: FnMut(Option<usize>, &str, bool)>(
        &self,
        state: &mut NetworkState,
        mut observe: F,
    ) {
        let mut pending: VecDeque<(Option<usize>, String, bool)> =
            VecDeque::from([(None, "broadcaster".to_owned(), false)]);

        while let Some((source, target_name, high)) = pending.pop_front() {
            observe(source, &target_name, high);

            let Some(target) = self.module_index(&target_name) else {
                continue;
            };

            let module: &PulseModule = &self.0[target];
            let send: Option<bool> = match module.kind {
                ModuleKind::Broadcast => Some(high),
                ModuleKind::FlipFlop => {
                    if high {
                        None
                    } else {
                        state.flip_flops[target] = !state.flip_flops[target];

                        Some(state.flip_flops[target])
                    }
                }
                ModuleKind::Conjunction => {
                    if let Some(source) = source {
                        state.conjunction_memories[target].insert(source, high);
                    }

                    Some(
                        !state.conjunction_memories[target]
                            .values()
                            .all(|&remembered| remembered),
                    )
                }
            };

            if let Some(high) = send {
                for output in &module.outputs {
                    pending.push_back((Some(target), output.clone(), high));
                }
            }
        }
    }

    fn pulse_count_product(&self) -> u64 {
        let mut state: NetworkState = self.initial_state();
        let mut low_count: u64 = 0_u64;
        let mut high_count: u64 = 0_u64;

        for _ in 0_u64..BUTTON_PRESSES {
            self.press_button(&mut state, |_, _, high| {
                if high {
                    high_count += 1_u64;
                } else {
                    low_count += 1_u64;
                }
            });
        }

        low_count * high_count
    }

    /// `rx` hangs off a single conjunction; it goes low on the first press where every feeder
    /// into that conjunction has sent a high. Each feeder fires on a fixed period, so the answer
    /// is the least common multiple of the periods. Returns 0 when nothing feeds `rx`.
    fn presses_until_rx(&self) -> u64 {
        let Some(final_conjunction) = self
            .0
            .iter()
            .find(|module| module.outputs.iter().any(|output| output == "rx"))
        else {
            return 0_u64;
        };

        let feeders: Vec<usize> = self
            .0
            .iter()
            .enumerate()
            .filter(|(_, module)| module.outputs.contains(&final_conjunction.name))
            .map(|(index, _)| index)
            .collect();

        if feeders.is_empty() {
            return 0_u64;
        }

        let mut state: NetworkState = self.initial_state();
        let mut periods: HashMap<usize, u64> = HashMap::new();

        for press in 1_u64..=100_000_u64 {
            self.press_button(&mut state, |source, target, high| {
                if high && target == final_conjunction.name {
                    if let Some(source) = source.filter(|source| feeders.contains(source)) {
                        periods.entry(source).or_insert(press);
                    }
                }
            });

            if periods.len() == feeders.len() {
                return periods.values().fold(1_u64, |lcm, &period| lcm.lcm(&period));
            }
        }

        0_u64
    }
}

impl RunSolution for Solution {
    type Answer1 = u64;
    type Answer2 = u64;

    fn from_input(input: &str) -> ParseResult<Self> {
        Ok(Self(parse(input)?))
    }

    fn part1(&mut self) -> Self::Answer1 {
        self.pulse_count_product()
    }

    fn part2(&mut self) -> Self::Answer2 {
        self.presses_until_rx()
    }

    fn test() {
        for (index, expected) in [32000000_u64, 11687500_u64].into_iter().enumerate() {
            let mut solution: Self =
                Self::from_input(SAMPLE_STRS[index]).expect("sample parses");
            let answer1: u64 = solution.part1();

            println!("Part 1: {answer1}");
            assert_eq!(answer1, expected);

            let answer2: u64 = solution.part2();

            println!("Part 2: {answer2}");
            assert_eq!(answer2, 0_u64);
        }
    }
}

const SAMPLE_STRS: &'static [&'static str] = &[
    "\
    broadcaster -> a, b, c\n\
    %a -> b\n\
    %b -> c\n\
    %c -> inv\n\
    &inv -> a\n",
    "\
    broadcaster -> a\n\
    %a -> inv, con\n\
    &inv -> b\n\
    %b -> con\n\
    &con -> output\n",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(
            PulseModule::parse("%a -> inv, con"),
            Ok((
                "",
                PulseModule {
                    name: "a".to_owned(),
                    kind: ModuleKind::FlipFlop,
                    outputs: vec!["inv".to_owned(), "con".to_owned()],
                }
            ))
        );
        assert_eq!(
            PulseModule::parse("broadcaster -> a, b, c").unwrap().1.kind,
            ModuleKind::Broadcast
        );
    }

    #[test]
    fn test_single_press_counts() {
        let solution: Solution = Solution::from_input(SAMPLE_STRS[0_usize]).unwrap();
        let mut state: NetworkState = solution.initial_state();
        let mut low_count: u64 = 0_u64;
        let mut high_count: u64 = 0_u64;

        solution.press_button(&mut state, |_, _, high| {
            if high {
                high_count += 1_u64;
            } else {
                low_count += 1_u64;
            }
        });

        assert_eq!(low_count, 8_u64);
        assert_eq!(high_count, 4_u64);
    }

    #[test]
    fn test_sample_answers() {
        Solution::test();
    }
}
