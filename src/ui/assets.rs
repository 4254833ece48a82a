pub const GLYPH_HEIGHT: usize = 5;

// 0-9 then ':'
pub const ASCII_NUMBERS: [&str; 11] = [
    "█████\n█   █\n█   █\n█   █\n█████",
    "   █ \n  ██ \n   █ \n   █ \n  ███",
    "█████\n    █\n█████\n█    \n█████",
    "█████\n    █\n█████\n    █\n█████",
    "█   █\n█   █\n█████\n    █\n    █",
    "█████\n█    \n█████\n    █\n█████",
    "█████\n█    \n█████\n█   █\n█████",
    "█████\n    █\n   █ \n  █  \n  █  ",
    "█████\n█   █\n█████\n█   █\n█████",
    "█████\n█   █\n█████\n    █\n█████",
    "   \n █ \n   \n █ \n   ",
];
