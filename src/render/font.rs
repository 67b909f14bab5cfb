//! Six-row block font for the big clock.

/// Height of every glyph in rows.
pub const GLYPH_HEIGHT: usize = 6;

/// Columns between the left edges of adjacent glyphs.
pub const GLYPH_ADVANCE: usize = 10;

/// Glyphs for `0`-`9` followed by `:`. Each row is 9 columns wide.
pub static BIG_FONT: [[&str; GLYPH_HEIGHT]; 11] = [
    // digit 0
    [
        " ███████ ",
        "██     ██",
        "██     ██",
        "██     ██",
        "██     ██",
        " ███████ ",
    ],
    // digit 1
    [
        "   ██    ",
        " ████    ",
        "   ██    ",
        "   ██    ",
        "   ██    ",
        " ██████  ",
    ],
    // digit 2
    [
        " ███████ ",
        "██     ██",
        "      ██ ",
        "   ███   ",
        " ██      ",
        "█████████",
    ],
    // digit 3
    [
        " ███████ ",
        "       ██",
        "  ██████ ",
        "       ██",
        "       ██",
        " ███████ ",
    ],
    // digit 4
    [
        "██     ██",
        "██     ██",
        "█████████",
        "       ██",
        "       ██",
        "       ██",
    ],
    // digit 5
    [
        "█████████",
        "██       ",
        "████████ ",
        "       ██",
        "██     ██",
        " ███████ ",
    ],
    // digit 6
    [
        " ███████ ",
        "██       ",
        "████████ ",
        "██     ██",
        "██     ██",
        " ███████ ",
    ],
    // digit 7
    [
        "█████████",
        "      ██ ",
        "     ██  ",
        "    ██   ",
        "   ██    ",
        "   ██    ",
    ],
    // digit 8
    [
        " ███████ ",
        "██     ██",
        " ███████ ",
        "██     ██",
        "██     ██",
        " ███████ ",
    ],
    // digit 9
    [
        " ███████ ",
        "██     ██",
        "██     ██",
        " ████████",
        "       ██",
        " ███████ ",
    ],
    // colon
    [
        "         ",
        "   ██    ",
        "   ██    ",
        "         ",
        "   ██    ",
        "   ██    ",
    ],
];

/// Returns the glyph for a clock character.
pub fn glyph(c: char) -> Option<&'static [&'static str; GLYPH_HEIGHT]> {
    match c {
        '0'..='9' => BIG_FONT.get(c as usize - '0' as usize),
        ':' => BIG_FONT.get(10),
        _ => None,
    }
}

/// Lays out `text` as [`GLYPH_HEIGHT`] rows of big glyphs.
///
/// Unknown characters leave a blank cell.
pub fn big_rows(text: &str) -> [String; GLYPH_HEIGHT] {
    let mut rows: [String; GLYPH_HEIGHT] = Default::default();
    for c in text.chars() {
        for (row, line) in rows.iter_mut().enumerate() {
            match glyph(c) {
                Some(g) => line.push_str(g[row]),
                None => line.push_str(&" ".repeat(GLYPH_ADVANCE - 1)),
            }
            line.push(' ');
        }
    }
    rows
}
