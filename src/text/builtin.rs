use crate::text::mask::TextMask;

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 8;
const ADVANCE: u32 = GLYPH_W + 1;

/// Embedded 5x8 bitmap font for printable ASCII, scaled by an integer factor.
///
/// Always available, so caption rendering never depends on installed fonts. Characters outside
/// `' '..='~'` render as `?`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuiltinFont {
    scale: u32,
}

impl BuiltinFont {
    /// Builtin font scaled to approximate `size` pixels per em.
    pub fn new(size: f32) -> Self {
        let scale = if size.is_finite() {
            (size / GLYPH_H as f32).round().max(1.0) as u32
        } else {
            1
        };
        Self { scale }
    }

    /// Integer pixel scale applied to each glyph cell.
    pub fn scale(self) -> u32 {
        self.scale
    }

    /// Effective em size in pixels.
    pub fn size(self) -> f32 {
        (GLYPH_H * self.scale) as f32
    }

    /// Rasterize one line. The em-box top is row 0.
    pub fn rasterize(self, text: &str) -> TextMask {
        let n = text.chars().count() as u32;
        if n == 0 {
            return TextMask::empty();
        }

        let s = self.scale;
        let width = n * ADVANCE * s - s;
        let height = GLYPH_H * s;
        let mut coverage = vec![0u8; width as usize * height as usize];

        for (i, ch) in text.chars().enumerate() {
            let origin = i as u32 * ADVANCE * s;
            for (row, bits) in glyph_rows(ch).iter().enumerate() {
                for col in 0..GLYPH_W {
                    if bits & (1 << (GLYPH_W - 1 - col)) == 0 {
                        continue;
                    }
                    for dy in 0..s {
                        let y = row as u32 * s + dy;
                        let x0 = (origin + col * s) as usize;
                        let start = y as usize * width as usize + x0;
                        coverage[start..start + s as usize].fill(255);
                    }
                }
            }
        }

        TextMask::from_coverage(width, height, coverage, 0)
    }
}

/// Row bitmaps for `ch`, most significant of the low five bits is the leftmost column.
pub(crate) fn glyph_rows(ch: char) -> [u8; GLYPH_H as usize] {
    let idx = match ch {
        ' '..='~' => ch as usize - ' ' as usize,
        _ => '?' as usize - ' ' as usize,
    };
    let mut rows = [0u8; GLYPH_H as usize];
    for (row, art) in rows.iter_mut().zip(GLYPHS[idx].split('|')) {
        *row = art
            .bytes()
            .fold(0u8, |acc, b| (acc << 1) | u8::from(b == b'#'));
    }
    rows
}

/// Printable ASCII in code point order. Eight rows of five columns each, `#` is ink.
pub(crate) const GLYPHS: [&str; 95] = [
    ".....|.....|.....|.....|.....|.....|.....|.....", // ' '
    "..#..|..#..|..#..|..#..|..#..|.....|..#..|.....", // !
    ".#.#.|.#.#.|.#.#.|.....|.....|.....|.....|.....", // "
    ".#.#.|.#.#.|#####|.#.#.|#####|.#.#.|.#.#.|.....", // #
    "..#..|.####|#.#..|.###.|..#.#|####.|..#..|.....", // $
    "##...|##..#|...#.|..#..|.#...|#..##|...##|.....", // %
    ".##..|#..#.|#.#..|.#...|#.#.#|#..#.|.##.#|.....", // &
    "..#..|..#..|.#...|.....|.....|.....|.....|.....", // '
    "...#.|..#..|.#...|.#...|.#...|..#..|...#.|.....", // (
    ".#...|..#..|...#.|...#.|...#.|..#..|.#...|.....", // )
    ".....|..#..|#.#.#|.###.|#.#.#|..#..|.....|.....", // *
    ".....|..#..|..#..|#####|..#..|..#..|.....|.....", // +
    ".....|.....|.....|.....|.##..|..#..|.#...|.....", // ,
    ".....|.....|.....|#####|.....|.....|.....|.....", // -
    ".....|.....|.....|.....|.....|.##..|.##..|.....", // .
    ".....|....#|...#.|..#..|.#...|#....|.....|.....", // /
    ".###.|#...#|#..##|#.#.#|##..#|#...#|.###.|.....", // 0
    "..#..|.##..|..#..|..#..|..#..|..#..|.###.|.....", // 1
    ".###.|#...#|....#|...#.|..#..|.#...|#####|.....", // 2
    "#####|...#.|..#..|...#.|....#|#...#|.###.|.....", // 3
    "...#.|..##.|.#.#.|#..#.|#####|...#.|...#.|.....", // 4
    "#####|#....|####.|....#|....#|#...#|.###.|.....", // 5
    "..##.|.#...|#....|####.|#...#|#...#|.###.|.....", // 6
    "#####|....#|...#.|..#..|.#...|.#...|.#...|.....", // 7
    ".###.|#...#|#...#|.###.|#...#|#...#|.###.|.....", // 8
    ".###.|#...#|#...#|.####|....#|...#.|.##..|.....", // 9
    ".....|.##..|.##..|.....|.##..|.##..|.....|.....", // :
    ".....|.##..|.##..|.....|.##..|..#..|.#...|.....", // ;
    "...#.|..#..|.#...|#....|.#...|..#..|...#.|.....", // <
    ".....|.....|#####|.....|#####|.....|.....|.....", // =
    ".#...|..#..|...#.|....#|...#.|..#..|.#...|.....", // >
    ".###.|#...#|....#|...#.|..#..|.....|..#..|.....", // ?
    ".###.|#...#|....#|.##.#|#.#.#|#.#.#|.###.|.....", // @
    ".###.|#...#|#...#|#####|#...#|#...#|#...#|.....", // A
    "####.|#...#|#...#|####.|#...#|#...#|####.|.....", // B
    ".###.|#...#|#....|#....|#....|#...#|.###.|.....", // C
    "###..|#..#.|#...#|#...#|#...#|#..#.|###..|.....", // D
    "#####|#....|#....|####.|#....|#....|#####|.....", // E
    "#####|#....|#....|####.|#....|#....|#....|.....", // F
    ".###.|#...#|#....|#.###|#...#|#...#|.####|.....", // G
    "#...#|#...#|#...#|#####|#...#|#...#|#...#|.....", // H
    ".###.|..#..|..#..|..#..|..#..|..#..|.###.|.....", // I
    "..###|...#.|...#.|...#.|...#.|#..#.|.##..|.....", // J
    "#...#|#..#.|#.#..|##...|#.#..|#..#.|#...#|.....", // K
    "#....|#....|#....|#....|#....|#....|#####|.....", // L
    "#...#|##.##|#.#.#|#.#.#|#...#|#...#|#...#|.....", // M
    "#...#|#...#|##..#|#.#.#|#..##|#...#|#...#|.....", // N
    ".###.|#...#|#...#|#...#|#...#|#...#|.###.|.....", // O
    "####.|#...#|#...#|####.|#....|#....|#....|.....", // P
    ".###.|#...#|#...#|#...#|#.#.#|#..#.|.##.#|.....", // Q
    "####.|#...#|#...#|####.|#.#..|#..#.|#...#|.....", // R
    ".####|#....|#....|.###.|....#|....#|####.|.....", // S
    "#####|..#..|..#..|..#..|..#..|..#..|..#..|.....", // T
    "#...#|#...#|#...#|#...#|#...#|#...#|.###.|.....", // U
    "#...#|#...#|#...#|#...#|#...#|.#.#.|..#..|.....", // V
    "#...#|#...#|#...#|#.#.#|#.#.#|#.#.#|.#.#.|.....", // W
    "#...#|#...#|.#.#.|..#..|.#.#.|#...#|#...#|.....", // X
    "#...#|#...#|.#.#.|..#..|..#..|..#..|..#..|.....", // Y
    "#####|....#|...#.|..#..|.#...|#....|#####|.....", // Z
    ".###.|.#...|.#...|.#...|.#...|.#...|.###.|.....", // [
    ".....|#....|.#...|..#..|...#.|....#|.....|.....", // \
    ".###.|...#.|...#.|...#.|...#.|...#.|.###.|.....", // ]
    "..#..|.#.#.|#...#|.....|.....|.....|.....|.....", // ^
    ".....|.....|.....|.....|.....|.....|#####|.....", // _
    ".#...|..#..|...#.|.....|.....|.....|.....|.....", // `
    ".....|.....|.###.|....#|.####|#...#|.####|.....", // a
    "#....|#....|#.##.|##..#|#...#|#...#|####.|.....", // b
    ".....|.....|.###.|#....|#....|#...#|.###.|.....", // c
    "....#|....#|.##.#|#..##|#...#|#...#|.####|.....", // d
    ".....|.....|.###.|#...#|#####|#....|.###.|.....", // e
    "..##.|.#..#|.#...|###..|.#...|.#...|.#...|.....", // f
    ".....|.....|.####|#...#|#...#|.####|....#|.###.", // g
    "#....|#....|#.##.|##..#|#...#|#...#|#...#|.....", // h
    "..#..|.....|.##..|..#..|..#..|..#..|.###.|.....", // i
    "...#.|.....|..##.|...#.|...#.|...#.|#..#.|.##..", // j
    "#....|#....|#..#.|#.#..|##...|#.#..|#..#.|.....", // k
    ".##..|..#..|..#..|..#..|..#..|..#..|.###.|.....", // l
    ".....|.....|##.#.|#.#.#|#.#.#|#...#|#...#|.....", // m
    ".....|.....|#.##.|##..#|#...#|#...#|#...#|.....", // n
    ".....|.....|.###.|#...#|#...#|#...#|.###.|.....", // o
    ".....|.....|####.|#...#|#...#|####.|#....|#....", // p
    ".....|.....|.####|#...#|#...#|.####|....#|....#", // q
    ".....|.....|#.##.|##..#|#....|#....|#....|.....", // r
    ".....|.....|.####|#....|.###.|....#|####.|.....", // s
    ".#...|.#...|###..|.#...|.#...|.#..#|..##.|.....", // t
    ".....|.....|#...#|#...#|#...#|#..##|.##.#|.....", // u
    ".....|.....|#...#|#...#|#...#|.#.#.|..#..|.....", // v
    ".....|.....|#...#|#...#|#.#.#|#.#.#|.#.#.|.....", // w
    ".....|.....|#...#|.#.#.|..#..|.#.#.|#...#|.....", // x
    ".....|.....|#...#|#...#|#...#|.####|....#|.###.", // y
    ".....|.....|#####|...#.|..#..|.#...|#####|.....", // z
    "...#.|..#..|..#..|.#...|..#..|..#..|...#.|.....", // {
    "..#..|..#..|..#..|..#..|..#..|..#..|..#..|.....", // |
    ".#...|..#..|..#..|...#.|..#..|..#..|.#...|.....", // }
    ".....|.....|.#...|#.#.#|...#.|.....|.....|.....", // ~
];

#[cfg(test)]
#[path = "../../tests/unit/text/builtin.rs"]
mod tests;
