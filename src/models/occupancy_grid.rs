use rand::Rng;

/// Coarse occupancy map of the word-cloud canvas.
///
/// The canvas is divided into square cells; a summed-area table over the cells answers
/// "is this rectangle free?" in constant time.
pub struct OccupancyGrid {
    cols: usize,
    rows: usize,
    cell_size: u32,
    occupied: Vec<bool>,
    // (rows + 1) x (cols + 1), first row and column are zero
    integral: Vec<u32>,
}

impl OccupancyGrid {
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        let cell_size = cell_size.max(1);
        let cols = (width / cell_size) as usize;
        let rows = (height / cell_size) as usize;

        Self {
            cols,
            rows,
            cell_size,
            occupied: vec![false; cols * rows],
            integral: vec![0; (cols + 1) * (rows + 1)],
        }
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Number of cells needed to cover `pixels`.
    pub fn cells_for(&self, pixels: u32) -> usize {
        pixels.div_ceil(self.cell_size) as usize
    }

    pub fn is_free(&self, col: usize, row: usize, width: usize, height: usize) -> bool {
        if col + width > self.cols || row + height > self.rows {
            return false;
        }

        let stride = self.cols + 1;
        let (x0, y0, x1, y1) = (col, row, col + width, row + height);

        let sum = self.integral[y1 * stride + x1] + self.integral[y0 * stride + x0]
            - self.integral[y0 * stride + x1]
            - self.integral[y1 * stride + x0];

        sum == 0
    }

    /// Picks a free position for a `width` x `height` cell rectangle uniformly at random.
    ///
    /// Returns the top-left cell, or `None` if the rectangle fits nowhere.
    pub fn sample_position<R: Rng>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Option<(usize, usize)> {
        if width == 0 || height == 0 || width > self.cols || height > self.rows {
            return None;
        }

        let free_count = self.free_positions(width, height).count();
        if free_count == 0 {
            return None;
        }

        let pick = rng.gen_range(0..free_count);
        self.free_positions(width, height).nth(pick)
    }

    /// Marks a cell rectangle as occupied. Parts outside the grid are ignored.
    pub fn occupy(&mut self, col: usize, row: usize, width: usize, height: usize) {
        let col_end = (col + width).min(self.cols);
        let row_end = (row + height).min(self.rows);

        for y in row.min(self.rows)..row_end {
            for x in col.min(self.cols)..col_end {
                self.occupied[y * self.cols + x] = true;
            }
        }

        self.rebuild_integral();
    }

    fn free_positions(
        &self,
        width: usize,
        height: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..=self.rows - height).flat_map(move |row| {
            (0..=self.cols - width)
                .filter(move |&col| self.is_free(col, row, width, height))
                .map(move |col| (col, row))
        })
    }

    fn rebuild_integral(&mut self) {
        let stride = self.cols + 1;

        for y in 0..self.rows {
            let mut row_sum = 0;
            for x in 0..self.cols {
                row_sum += self.occupied[y * self.cols + x] as u32;
                self.integral[(y + 1) * stride + x + 1] = self.integral[y * stride + x + 1] + row_sum;
            }
        }
    }
}
