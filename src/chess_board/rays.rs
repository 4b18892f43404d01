use super::model::{Direction, ALL_DIRECTIONS, DIAGONAL_DIRECTIONS, KNIGHT_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use super::{ChessField, Color, Piece, PieceType};

/// A direction together with the squares a piece passes through along it, nearest first.
pub type Ray = (Direction, Vec<ChessField>);

impl Piece {
    /// Candidate destinations from `origin`, grouped per direction and cut at the board edge.
    ///
    /// Occupancy is not considered here; the board truncates rays at blockers.
    pub fn movable_rays(&self, origin: ChessField) -> Vec<Ray> {
        match self.kind {
            PieceType::King => step_rays(origin, &ALL_DIRECTIONS, 1),
            PieceType::Queen => step_rays(origin, &ALL_DIRECTIONS, 7),
            PieceType::Rook => step_rays(origin, &ORTHOGONAL_DIRECTIONS, 7),
            PieceType::Bishop => step_rays(origin, &DIAGONAL_DIRECTIONS, 7),
            PieceType::Knight => step_rays(origin, &KNIGHT_DIRECTIONS, 1),
            PieceType::Pawn => pawn_rays(origin, self.color),
        }
    }

    /// Whether `direction` is the non-capturing push of this pawn.
    pub fn is_pawn_forward(&self, direction: Direction) -> bool {
        self.kind == PieceType::Pawn && direction == pawn_forward(self.color)
    }
}

fn step_rays(origin: ChessField, directions: &[Direction], max_steps: usize) -> Vec<Ray> {
    directions
        .iter()
        .map(|&direction| (direction, walk(origin, direction, max_steps)))
        .filter(|(_, ray)| !ray.is_empty())
        .collect()
}

fn walk(origin: ChessField, direction: Direction, max_steps: usize) -> Vec<ChessField> {
    std::iter::successors(origin.translate(direction), |field| field.translate(direction))
        .take(max_steps)
        .collect()
}

fn pawn_forward(color: Color) -> Direction {
    match color {
        Color::White => Direction::North,
        Color::Black => Direction::South,
    }
}

fn pawn_captures(color: Color) -> [Direction; 2] {
    match color {
        Color::White => [Direction::NorthEast, Direction::NorthWest],
        Color::Black => [Direction::SouthEast, Direction::SouthWest],
    }
}

fn pawn_rays(origin: ChessField, color: Color) -> Vec<Ray> {
    let steps = if origin.row == color.pawn_start_row() { 2 } else { 1 };
    let mut rays = step_rays(origin, &[pawn_forward(color)], steps);
    rays.extend(step_rays(origin, &pawn_captures(color), 1));
    rays
}

#[cfg(test)]
mod tests {
    use super::super::coordinate::ALL_FIELDS;
    use super::super::test_utils::{assert_fields, field};
    use super::*;

    fn ray(piece: Piece, origin: &str, direction: Direction) -> Vec<ChessField> {
        piece
            .movable_rays(field(origin))
            .into_iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, fields)| fields)
            .unwrap_or_default()
    }

    #[test]
    fn test_king_rays() {
        let king = Piece::new(Color::Black, PieceType::King);
        let rays = king.movable_rays(field("d4"));
        assert_eq!(rays.len(), 8);
        assert!(rays.iter().all(|(_, fields)| fields.len() == 1));
        assert_fields(
            rays.into_iter().flat_map(|(_, fields)| fields),
            vec!["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"],
        );
        assert_eq!(king.movable_rays(field("a1")).len(), 3);
    }

    #[test]
    fn test_queen_rays() {
        let queen = Piece::new(Color::White, PieceType::Queen);
        assert_fields(ray(queen, "d4", Direction::North).into_iter(), vec!["d5", "d6", "d7", "d8"]);
        assert_eq!(ray(queen, "d4", Direction::North)[0], field("d5"));
        assert_fields(ray(queen, "d4", Direction::SouthWest).into_iter(), vec!["c3", "b2", "a1"]);
        assert_eq!(ray(queen, "a1", Direction::NorthEast).len(), 7);
        let total: usize = queen.movable_rays(field("d4")).iter().map(|(_, f)| f.len()).sum();
        assert_eq!(total, 27);
    }

    #[test]
    fn test_rook_and_bishop_rays() {
        let rook = Piece::new(Color::White, PieceType::Rook);
        let directions: Vec<_> = rook.movable_rays(field("d4")).into_iter().map(|(d, _)| d).collect();
        assert_eq!(directions, ORTHOGONAL_DIRECTIONS.to_vec());
        let total: usize = rook.movable_rays(field("h8")).iter().map(|(_, f)| f.len()).sum();
        assert_eq!(total, 14);

        let bishop = Piece::new(Color::Black, PieceType::Bishop);
        assert!(bishop.movable_rays(field("c1")).iter().all(|(d, _)| d.is_diagonal()));
        let total: usize = bishop.movable_rays(field("c1")).iter().map(|(_, f)| f.len()).sum();
        assert_eq!(total, 7);
    }

    #[test]
    fn test_knight_rays() {
        let knight = Piece::new(Color::White, PieceType::Knight);
        assert_fields(
            knight.movable_rays(field("b1")).into_iter().flat_map(|(_, f)| f),
            vec!["a3", "c3", "d2"],
        );
        assert_eq!(knight.movable_rays(field("d4")).len(), 8);
    }

    #[test]
    fn test_pawn_rays() {
        let white = Piece::new(Color::White, PieceType::Pawn);
        assert_fields(ray(white, "e2", Direction::North).into_iter(), vec!["e3", "e4"]);
        assert_fields(ray(white, "e3", Direction::North).into_iter(), vec!["e4"]);
        assert_fields(ray(white, "e2", Direction::NorthEast).into_iter(), vec!["f3"]);
        assert!(ray(white, "a2", Direction::NorthWest).is_empty());

        let black = Piece::new(Color::Black, PieceType::Pawn);
        assert_fields(ray(black, "d7", Direction::South).into_iter(), vec!["d6", "d5"]);
        assert_fields(ray(black, "d6", Direction::South).into_iter(), vec!["d5"]);
        assert_fields(ray(black, "d7", Direction::SouthWest).into_iter(), vec!["c6"]);
        assert!(black.movable_rays(field("d1")).is_empty());
        assert!(black.is_pawn_forward(Direction::South));
        assert!(!white.is_pawn_forward(Direction::South));
    }

    #[test]
    fn test_rays_stay_on_board() {
        let kinds = [
            PieceType::King,
            PieceType::Queen,
            PieceType::Rook,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Pawn,
        ];
        for color in [Color::White, Color::Black] {
            for kind in kinds {
                let piece = Piece::new(color, kind);
                for origin in ALL_FIELDS.iter() {
                    for (direction, fields) in piece.movable_rays(*origin) {
                        assert!(!fields.contains(origin));
                        let mut previous = *origin;
                        for f in fields {
                            assert_eq!(previous.translate(direction), Some(f));
                            previous = f;
                        }
                    }
                }
            }
        }
    }
}
