//! Built-in sprite art

use crate::frame::Rgba;

pub(crate) type Art = [&'static str; 16];

/// Bird blue
pub(crate) const BLUE: Rgba = Rgba::opaque(20, 154, 233);

/// Dimmed bird, text stays readable on top of it
pub(crate) const DIM_BLUE: Rgba = Rgba::opaque(8, 50, 80);

pub(crate) const RED: Rgba = Rgba::opaque(230, 20, 20);

pub(crate) const GREEN: Rgba = Rgba::opaque(20, 220, 20);

pub(crate) const AMBER: Rgba = Rgba::opaque(255, 170, 0);

pub(crate) const PALETTE: [(char, Rgba); 5] = [
    ('B', BLUE),
    ('b', DIM_BLUE),
    ('R', RED),
    ('G', GREEN),
    ('A', AMBER),
];

pub(crate) const LOGO: Art = [
    "................",
    "................",
    "..........bbb...",
    ".........bbbbbb.",
    "..b......bbbb...",
    "..bb....bbbbb...",
    "..bbbb.bbbbbb...",
    "...bbbbbbbbbb...",
    "...bbbbbbbbb....",
    "....bbbbbbbb....",
    ".....bbbbbb.....",
    "...bbbbbbb......",
    ".bbbbbbb........",
    "................",
    "................",
    "................",
];

pub(crate) const SENDING_0: Art = [
    "................",
    "..B.............",
    "..BB......BBB...",
    "..BBB....BBBBBB.",
    "...BBB...BBBB...",
    "....BBB.BBBBB...",
    ".....BBBBBBBB...",
    "......BBBBBBB...",
    ".......BBBBB....",
    ".......BBBBB....",
    "......BBBBB.....",
    "....BBBBBB......",
    "..BBBBBB........",
    "................",
    "................",
    "................",
];

pub(crate) const SENDING_1: Art = [
    "................",
    "................",
    "..........BBB...",
    ".........BBBBBB.",
    ".........BBBB...",
    "........BBBBB...",
    ".BBBBBBBBBBBB...",
    "..BBBBBBBBBBB...",
    "...BBBBBBBBB....",
    ".....BBBBBBB....",
    "......BBBBB.....",
    "....BBBBBB......",
    "..BBBBBB........",
    "................",
    "................",
    "................",
];

pub(crate) const ERROR_0: Art = [
    "RR............RR",
    "RRR..........RRR",
    ".RRR........RRR.",
    "..RRR......RRR..",
    "...RRR....RRR...",
    "....RRR..RRR....",
    ".....RRRRRR.....",
    "......RRRR......",
    "......RRRR......",
    ".....RRRRRR.....",
    "....RRR..RRR....",
    "...RRR....RRR...",
    "..RRR......RRR..",
    ".RRR........RRR.",
    "RRR..........RRR",
    "RR............RR",
];

pub(crate) const ERROR_1: Art = [
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
];

pub(crate) const ACCOUNT: Art = [
    "................",
    ".....AAAAAA.....",
    "...AA......AA...",
    "..A..........A..",
    ".A....AAAA....A.",
    ".A...A....A...A.",
    ".A..A.....A...A.",
    ".A..A....AA...A.",
    ".A..A...A.A...A.",
    ".A...AAA..AAAA..",
    ".A..............",
    "..A.............",
    "...AA......AA...",
    ".....AAAAAA.....",
    "................",
    "................",
];

pub(crate) const TICK_0: Art = [
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "................",
    "G...............",
    "GG..............",
    ".GG.............",
    "..GG............",
    "...GG...........",
    "....G...........",
    "................",
    "................",
];

pub(crate) const TICK_1: Art = [
    "................",
    "................",
    "...............G",
    "..............GG",
    ".............GG.",
    "............GG..",
    "...........GG...",
    "..........GG....",
    "G........GG.....",
    "GG......GG......",
    ".GG....GG.......",
    "..GG..GG........",
    "...GGGG.........",
    "....GG..........",
    "................",
    "................",
];
