use super::font::{self, GLYPH_HEIGHT};
use super::{CellType, Grid};

/// A shape that can be stamped onto the grid with any cell type.
/// Offsets are relative to the pattern's top-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a new pattern from filled cell offsets
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x + 1).max().unwrap_or(0);
        let height = cells.iter().map(|(_, y)| *y + 1).max().unwrap_or(0);
        Self { name, width, height, cells }
    }

    /// Build a pattern from text art rows, `'#'` marks a filled cell
    pub fn from_rows(name: &'static str, rows: &[&str]) -> Self {
        let cells = rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.chars()
                    .enumerate()
                    .filter(|&(_, c)| c == '#')
                    .map(move |(x, _)| (x, y))
            })
            .collect();
        Self::new(name, cells)
    }

    /// Filled circle of the given radius (`dx² + dy² <= r²`)
    pub fn disc(radius: u32) -> Self {
        let r = i64::from(radius);
        let cells = (-r..=r)
            .flat_map(|dy| (-r..=r).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx * dx + dy * dy <= r * r)
            .map(|(dx, dy)| ((dx + r) as usize, (dy + r) as usize))
            .collect();
        let side = 2 * radius as usize + 1;
        Self {
            name: "Disc",
            width: side,
            height: side,
            cells,
        }
    }

    /// Rasterize text with the bitmap font, each font pixel a `scale × scale` block.
    /// The bounding box keeps trailing spaces so centring matches the measured text.
    pub fn text(text: &str, scale: u32) -> Self {
        let scale = scale as usize;
        let mut cells = Vec::new();
        let mut cursor_x = 0;

        for c in text.chars() {
            let glyph = font::glyph(c);
            for (gx, gy) in font::lit_pixels(glyph) {
                for sy in 0..scale {
                    for sx in 0..scale {
                        cells.push((cursor_x + gx * scale + sx, gy * scale + sy));
                    }
                }
            }
            cursor_x += (font::glyph_width(glyph) + 1) * scale;
        }

        let (width, height) = measure_text(text, scale as u32);
        Self {
            name: "Text",
            width,
            height,
            cells,
        }
    }

    /// Write `cell` at every offset, anchored at the top-left corner `(x, y)`.
    /// Parts that fall outside the grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, x: i32, y: i32, cell: CellType) {
        for &(dx, dy) in &self.cells {
            grid.set(x + dx as i32, y + dy as i32, cell);
        }
    }

    /// Place the pattern with its centre on `(cx, cy)`
    pub fn place_centered(&self, grid: &mut Grid, cx: i32, cy: i32, cell: CellType) {
        let x = cx - (self.width / 2) as i32;
        let y = cy - (self.height / 2) as i32;
        self.place_on(grid, x, y, cell);
    }
}

/// Size in grid cells that `text` occupies at `scale`.
/// Each glyph advances `(width + 1) * scale`; the final gap is dropped.
pub fn measure_text(text: &str, scale: u32) -> (usize, usize) {
    let scale = scale as usize;
    let (width, height) = text.chars().fold((0, 0), |(w, h), c| {
        let glyph = font::glyph(c);
        (w + (font::glyph_width(glyph) + 1) * scale, h.max(GLYPH_HEIGHT * scale))
    });
    (width.saturating_sub(if width > 0 { scale } else { 0 }), height)
}

/// Stamp `text` with its top-left corner at `(x, y)`
pub fn stamp_text(grid: &mut Grid, text: &str, x: i32, y: i32, scale: u32, cell: CellType) {
    Pattern::text(text, scale).place_on(grid, x, y, cell);
}

/// Stamp `text` centred on the grid; the start corner never goes negative
pub fn stamp_centered(grid: &mut Grid, text: &str, scale: u32, cell: CellType) {
    let pattern = Pattern::text(text, scale);
    let (gw, gh) = grid.dimensions();
    let x = ((gw as i64 - pattern.width as i64) / 2).max(0) as i32;
    let y = ((gh as i64 - pattern.height as i64) / 2).max(0) as i32;
    pattern.place_on(grid, x, y, cell);
}

/// Paint a filled circle centred on `(cx, cy)`
pub fn paint_circle(grid: &mut Grid, cx: i32, cy: i32, radius: u32, cell: CellType) {
    Pattern::disc(radius).place_centered(grid, cx, cy, cell);
}

/// Ready-made shapes
pub mod presets {
    use super::*;

    /// Heart outline filled solid, dropped as sand
    pub fn heart() -> Pattern {
        Pattern::from_rows(
            "Heart",
            &[
                ".##...##.",
                "####.####",
                "#########",
                "#########",
                ".#######.",
                "..#####..",
                "...###...",
                "....#....",
            ],
        )
    }

}
