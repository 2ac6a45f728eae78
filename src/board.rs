use crate::snake::Direction;

/// A board coordinate. Signed so a step off the edge is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Position { x: self.x + dx, y: self.y + dy }
    }
}

/// One board square. `snake` is the remaining lifetime of a body segment in
/// ticks, 0 meaning vacant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub snake: u32,
    pub food: bool,
}

/// What a renderer should draw for a cell. Snake takes precedence over food.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Snake,
    Food,
}

impl Cell {
    pub fn has_snake(&self) -> bool {
        self.snake > 0
    }

    /// Eligible for food placement.
    pub fn is_free(&self) -> bool {
        !self.has_snake() && !self.food
    }

    pub fn kind(&self) -> CellKind {
        if self.has_snake() {
            CellKind::Snake
        } else if self.food {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }
}

/// Fixed-size grid stored row-major: `id = x + y * width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Board { width, height, cells: vec![Cell::default(); width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[cfg(test)]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn cell_id(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.x as usize + pos.y as usize * self.width)
        } else {
            None
        }
    }

    pub fn position_of(&self, cell_id: usize) -> Position {
        Position::new((cell_id % self.width) as i32, (cell_id / self.width) as i32)
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.cell_id(pos).map(|id| &self.cells[id])
    }

    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        match self.cell_id(pos) {
            Some(id) => Some(&mut self.cells[id]),
            None => None,
        }
    }

    /// Decrement every live segment by one tick.
    pub fn age_segments(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| c.has_snake()) {
            cell.snake -= 1;
        }
    }

    pub fn free_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_free())
            .map(|(id, _)| self.position_of(id))
            .collect()
    }

    pub fn food_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.food)
            .map(|(id, _)| self.position_of(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_id_round_trip_uses_width() {
        let board = Board::new(14, 16);
        let pos = Position::new(13, 2);
        let id = board.cell_id(pos).unwrap();

        assert_eq!(id, 13 + 2 * 14);
        assert_eq!(board.position_of(id), pos);
        assert_eq!(board.position_of(14), Position::new(0, 1));
    }

    #[test]
    fn test_bounds() {
        let board = Board::new(14, 16);

        assert!(board.in_bounds(Position::new(0, 0)));
        assert!(board.in_bounds(Position::new(13, 15)));
        assert!(!board.in_bounds(Position::new(-1, 0)));
        assert!(!board.in_bounds(Position::new(0, -1)));
        assert!(!board.in_bounds(Position::new(14, 0)));
        assert!(!board.in_bounds(Position::new(0, 16)));
        assert_eq!(board.cell_id(Position::new(14, 0)), None);
    }

    #[test]
    fn test_cell_kind_prefers_snake() {
        assert_eq!(Cell::default().kind(), CellKind::Empty);
        assert_eq!(Cell { snake: 0, food: true }.kind(), CellKind::Food);
        assert_eq!(Cell { snake: 2, food: true }.kind(), CellKind::Snake);
        assert!(!Cell { snake: 0, food: true }.is_free());
        assert!(Cell { snake: 0, food: false }.is_free());
    }

    #[test]
    fn test_age_segments_stops_at_zero() {
        let mut board = Board::new(3, 1);
        board.get_mut(Position::new(0, 0)).unwrap().snake = 2;
        board.get_mut(Position::new(1, 0)).unwrap().snake = 1;

        board.age_segments();
        assert_eq!(board.cells()[0].snake, 1);
        assert_eq!(board.cells()[1].snake, 0);
        assert_eq!(board.cells()[2].snake, 0);

        board.age_segments();
        board.age_segments();
        assert!(board.cells().iter().all(|c| c.snake == 0));
    }

    #[test]
    fn test_free_positions() {
        let mut board = Board::new(2, 2);
        board.get_mut(Position::new(0, 0)).unwrap().snake = 1;
        board.get_mut(Position::new(1, 1)).unwrap().food = true;

        assert_eq!(board.free_positions(), vec![Position::new(1, 0), Position::new(0, 1)]);
        assert_eq!(board.food_positions(), vec![Position::new(1, 1)]);
    }
}
