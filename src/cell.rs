use crossterm::style::Color;

/// How long a cell has been on fire.
///
/// A fire always ages `First` -> `Second` -> burnt out, one step per cycle,
/// regardless of what happens around it. This bounds every fire to exactly
/// two cycles.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FireAge {
    First,
    Second,
}

/// The state of a single grid cell.
///
/// `Burnt` is terminal: a burnt cell never transitions again.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cell {
    Empty,
    Tree,
    Burning(FireAge),
    Burnt,
}

impl Cell {
    pub fn from_char(value: char) -> Cell {
        match value {
            '.' => Cell::Empty,
            'T' => Cell::Tree,
            '1' => Cell::Burning(FireAge::First),
            '2' => Cell::Burning(FireAge::Second),
            'x' => Cell::Burnt,
            _ => panic!("Invalid character value: {}", value),
        }
    }

    pub fn char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Tree => 'T',
            Cell::Burning(FireAge::First) => '1',
            Cell::Burning(FireAge::Second) => '2',
            Cell::Burnt => 'x',
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Cell::Empty => Color::DarkGrey,
            Cell::Tree => Color::Green,
            Cell::Burning(FireAge::First) => Color::Yellow,
            Cell::Burning(FireAge::Second) => Color::Red,
            Cell::Burnt => Color::Grey,
        }
    }

    pub fn is_burning(&self) -> bool {
        matches!(self, Cell::Burning(_))
    }
}
