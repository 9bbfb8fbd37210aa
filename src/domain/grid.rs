use super::CellType;

/// Grid owns the 2D cell array in row-major order.
/// All coordinate arithmetic lives here; out-of-bounds writes are no-ops
/// and out-of-bounds reads return `CellType::Empty`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellType>,
}

impl Grid {
    /// Create a new grid with every cell empty
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellType::Empty; width * height],
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to a linear index, `None` when out of bounds
    pub fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Get cell at position; `Empty` outside the grid
    pub fn get(&self, x: i32, y: i32) -> CellType {
        self.idx(x, y)
            .map_or(CellType::Empty, |i| self.cells[i])
    }

    /// Get cell by linear index; `Empty` past the end
    pub fn get_index(&self, i: usize) -> CellType {
        self.cells.get(i).copied().unwrap_or_default()
    }

    /// Overwrite a cell. Coordinates outside the grid are ignored so brush
    /// and glyph code can write past the edges without checking.
    pub fn set(&mut self, x: i32, y: i32, cell: CellType) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Exchange two cells by linear index. Invalid indices leave the grid untouched.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a < self.cells.len() && b < self.cells.len() {
            self.cells.swap(a, b);
        }
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(CellType::Empty);
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: CellType) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Cell counts indexed by `CellType::id`
    pub fn counts(&self) -> [usize; 4] {
        self.cells.iter().fold([0; 4], |mut acc, c| {
            acc[c.id() as usize] += 1;
            acc
        })
    }

    /// Read-only row-major view of the backing storage
    pub fn cells(&self) -> &[CellType] {
        &self.cells
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellType)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (i % self.width, i / self.width, c))
    }
}
