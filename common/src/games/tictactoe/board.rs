use super::types::{CELL_COUNT, Mark, Player};

/// Row-major 3x3 grid. Cell `i` sits at row `i / 3`, column `i % 3`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [Mark; CELL_COUNT],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied()
    }

    /// Cells outside `0..9` are left alone; callers validate with
    /// [`Grid::is_valid_move`] first.
    pub fn set(&mut self, cell: usize, mark: Mark) {
        if let Some(slot) = self.cells.get_mut(cell) {
            *slot = mark;
        }
    }

    pub fn clear(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn is_valid_move(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Mark::Empty))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn cells_of(&self, player: Player) -> Vec<usize> {
        let mark = player.mark();
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m == mark)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

/// Builds a grid from a compact layout such as `"OO.XX...."`.
/// `O` is the human, `X` the computer, anything else empty.
#[cfg(test)]
pub fn grid_from_str(layout: &str) -> Grid {
    let mut cells = [Mark::Empty; CELL_COUNT];
    for (i, ch) in layout.chars().take(CELL_COUNT).enumerate() {
        cells[i] = match ch {
            'O' => Mark::Human,
            'X' => Mark::Computer,
            _ => Mark::Empty,
        };
    }
    Grid::from_cells(cells)
}
