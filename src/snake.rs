use crate::board::Position;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Unit step (dx, dy). y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn head_char(self) -> char {
        match self {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfHit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Walking,
    HitWall,
    HitSelf,
    /// Food was eaten but no free cell was left for the next one.
    BoardFull,
}

impl Status {
    pub fn is_walking(self) -> bool {
        self == Status::Walking
    }

    pub fn collision(self) -> Option<Collision> {
        match self {
            Status::HitWall => Some(Collision::Wall),
            Status::HitSelf => Some(Collision::SelfHit),
            _ => None,
        }
    }
}

impl From<Collision> for Status {
    fn from(collision: Collision) -> Self {
        match collision {
            Collision::Wall => Status::HitWall,
            Collision::SelfHit => Status::HitSelf,
        }
    }
}

/// What a single tick did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Moved { head: Position },
    /// `food` is where the replacement was placed, `None` if the board is full.
    Ate { head: Position, food: Option<Position> },
    Crashed(Collision),
    /// The game was already over; nothing changed.
    Halted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        assert_eq!(Up.opposite(), Down);
        assert_eq!(Down.opposite(), Up);
        assert_eq!(Left.opposite(), Right);
        assert_eq!(Right.opposite(), Left);

        for d in Direction::ALL.iter() {
            assert_eq!(d.opposite().opposite(), *d);
        }
    }

    #[test]
    fn test_deltas_cancel_with_opposite() {
        for d in Direction::ALL.iter() {
            let (dx, dy) = d.delta();
            let (ox, oy) = d.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn test_status_from_collision() {
        assert_eq!(Status::from(Collision::Wall), Status::HitWall);
        assert_eq!(Status::from(Collision::SelfHit), Status::HitSelf);
        assert_eq!(Status::HitSelf.collision(), Some(Collision::SelfHit));
        assert_eq!(Status::BoardFull.collision(), None);
        assert!(Status::Walking.is_walking());
        assert!(!Status::BoardFull.is_walking());
    }
}
