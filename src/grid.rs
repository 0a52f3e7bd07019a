use crate::cell::Cell;
use crossterm::{
    cursor::{Hide, MoveTo},
    execute,
    style::{Color, Print, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use regex::Regex;
use std::io::{stdout, Write};

/// A square grid of cells.
///
/// Cells are stored in a flat `Vec` in row-major order. All access is by
/// `(row, col)` with `0 <= row, col < size`; indexing outside the grid is a
/// programming defect and panics.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: usize) -> Grid {
        Grid {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Parses a grid from its string representation.
    ///
    /// The format is a `size N` header followed by one `g <cells>` line per
    /// row, using the same characters `Cell::from_char` accepts:
    ///
    /// ```text
    /// size 3
    /// g .T.
    /// g T1T
    /// g .T.
    /// ```
    pub fn parse(contents: &str) -> Grid {
        let size = Regex::new(r"size (\d+)")
            .unwrap()
            .captures(contents)
            .unwrap()
            .get(1)
            .unwrap()
            .as_str()
            .parse()
            .unwrap();

        let mut grid = Grid::new(size);

        Regex::new(r"g (.*)")
            .unwrap()
            .captures_iter(contents)
            .map(|captures| captures.get(1).unwrap().as_str().trim())
            .enumerate()
            .for_each(|(row, line)| {
                line.chars().enumerate().for_each(|(col, value)| {
                    grid.set(row, col, Cell::from_char(value));
                });
            });

        grid
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        self.cells[row * self.size + col] = value;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Counts the cells in each relevant neighbor state around `(row, col)`.
    ///
    /// Inspects the 8-connected Moore neighborhood and returns
    /// `(tree_neighbors, fire_neighbors)`. Neighbors outside the grid are
    /// simply absent, so corner cells see 3 neighbors and edge cells 5.
    pub fn neighbor_counts(&self, row: usize, col: usize) -> (usize, usize) {
        let mut trees = 0;
        let mut fires = 0;

        // For each coordinate around the given one in all 8 directions
        for i in -1..=1 {
            for j in -1..=1 {
                if i == 0 && j == 0 {
                    continue;
                }

                let n_row = row as i32 + i;
                let n_col = col as i32 + j;

                // Skip if the coordinate is out of bounds
                if n_row < 0
                    || n_row >= self.size as i32
                    || n_col < 0
                    || n_col >= self.size as i32
                {
                    continue;
                }

                match self.get(n_row as usize, n_col as usize) {
                    Cell::Tree => trees += 1,
                    Cell::Burning(_) => fires += 1,
                    _ => {}
                }
            }
        }

        (trees, fires)
    }

    pub fn count(&self, filter: fn(&Cell) -> bool) -> usize {
        self.cells.iter().filter(|cell| filter(cell)).count()
    }

    /// Renders the grid as one string per row, used by the replay log.
    pub fn render_rows(&self) -> Vec<String> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| self.get(row, col).char())
                    .collect()
            })
            .collect()
    }

    /// Draws the grid to the console.
    pub fn draw(&self, cycle: usize, changes: usize, cumulative_changes: usize) {
        let mut stdout = stdout();

        // Display information about the simulation
        execute!(
            stdout,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Hide,
            Print("Cycle: "),
            Print(cycle.to_string()),
            Print(", Changes: "),
            Print(changes.to_string()),
            Print(", Cumulative: "),
            Print(cumulative_changes.to_string()),
            Print(", Burning: "),
            Print(self.count(Cell::is_burning).to_string()),
            Print("\n\n")
        )
        .unwrap();

        // Display the grid
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = self.get(row, col);
                execute!(
                    stdout,
                    SetForegroundColor(cell.color()),
                    Print(cell.char()),
                    SetForegroundColor(Color::Reset)
                )
                .unwrap();
            }
            execute!(stdout, Print("\n")).unwrap();
        }

        stdout.flush().unwrap();
    }
}
