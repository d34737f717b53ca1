pub mod parse;
pub mod runner;
pub mod util;

pub use {parse::*, runner::*, util::*};

solutions![
    (
        y2023,
        [
            d1, d2, d3, d4, d5, d6, d7, d8, d9, d10, d11, d12, d13, d14, d15, d16, d18, d19, d20,
            d21, d22
        ]
    ),
    (
        y2024,
        [d1, d2, d3, d4, d5, d6, d7, d8, d9, d10, d11, d12, d14, d15, d18, d19]
    ),
];
