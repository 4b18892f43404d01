use super::coordinate::ALL_FIELDS;
use super::layout::{self, LayoutProvider, StandardLayout};
use super::model::Direction;
use super::{ChessField, Color, Piece, PieceType, Square};
use crate::error::ChessError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessBoard {
    /// Indexed as `squares[row][col]`, every square always holds a value.
    pub squares: [[Square; 8]; 8],
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new(&StandardLayout)
    }
}

impl ChessBoard {
    /// Builds a board from `provider`, filling every square it leaves out with `Square::Empty`.
    pub fn new(provider: &impl LayoutProvider) -> Self {
        let mut board = Self::empty();
        for (field, piece) in provider.layout() {
            board.squares[field.row as usize][field.col as usize] = Square::Occupied(piece);
        }
        board
    }

    pub fn empty() -> Self {
        Self {
            squares: [[Square::Empty; 8]; 8],
        }
    }

    /// Delegates placement parsing to the `layout` module.
    pub fn from_placement(placement: &str) -> Result<Self, ChessError> {
        layout::PlacementLayout::parse(placement).map(|provider| Self::new(&provider))
    }

    pub fn to_placement(&self) -> String {
        layout::to_placement(self)
    }

    pub fn select(&self, field: ChessField) -> Square {
        self.squares[field.row as usize][field.col as usize]
    }

    fn set(&mut self, field: ChessField, square: Square) {
        self.squares[field.row as usize][field.col as usize] = square;
    }

    /// Returns all pieces on the board together with their squares, a1 first.
    pub fn pieces_with_coordinates(&self) -> impl Iterator<Item = (ChessField, Piece)> + '_ {
        ALL_FIELDS
            .iter()
            .filter_map(move |field| self.select(*field).piece().map(|piece| (*field, piece)))
    }

    /// Checks a move without applying it and returns the piece that would move.
    pub fn validate_move(&self, from: ChessField, to: ChessField) -> Result<Piece, ChessError> {
        let piece = self.select(from).piece().ok_or(ChessError::EmptySource(from))?;

        let rays = piece.movable_rays(from);
        let angle = from.angle_between(&to);
        let (direction, ray) = Direction::with_angle(angle, rays.iter().map(|(d, _)| *d))
            .and_then(|direction| rays.iter().find(|(d, _)| *d == direction))
            .filter(|(_, ray)| ray.contains(&to))
            .ok_or(ChessError::IllegalDestination { from, to })?;

        if piece.kind.is_sliding() || piece.is_pawn_forward(*direction) {
            if let Some(blocker) = ray
                .iter()
                .take_while(|field| **field != to)
                .find(|field| !self.select(**field).is_empty())
            {
                return Err(ChessError::PathBlocked { from, to, blocker: *blocker });
            }
        }

        let target = self.select(to);
        if target.is_color(piece.color) {
            return Err(ChessError::FriendlyCapture { to });
        }

        if piece.kind == PieceType::Pawn {
            let pushes = piece.is_pawn_forward(*direction);
            if pushes != target.is_empty() {
                return Err(ChessError::InvalidPawnMove { from, to });
            }
        }

        Ok(piece)
    }

    /// Moves the piece on `from` to `to` and returns whatever it captured.
    ///
    /// Either the move is fully applied or the board is left untouched.
    pub fn move_piece(&mut self, from: ChessField, to: ChessField) -> Result<Option<Piece>, ChessError> {
        let piece = self.validate_move(from, to)?;
        let captured = self.select(to).piece();
        self.set(to, Square::Occupied(piece));
        self.set(from, Square::Empty);
        Ok(captured)
    }

    /// The part of the piece's ray in `direction` it can actually travel, including a blocking square.
    pub fn reachable_ray(&self, from: ChessField, direction: Direction) -> Vec<ChessField> {
        let Some(piece) = self.select(from).piece() else {
            return Vec::new();
        };
        let mut reachable = Vec::new();
        if let Some((_, ray)) = piece.movable_rays(from).into_iter().find(|(d, _)| *d == direction) {
            for field in ray {
                reachable.push(field);
                if !self.select(field).is_empty() {
                    break;
                }
            }
        }
        reachable
    }

    /// Every (from, to) pair `move_piece` would accept for `color`.
    pub fn legal_moves(&self, color: Color) -> Vec<(ChessField, ChessField)> {
        let mut moves = Vec::with_capacity(64);
        for (from, piece) in self.pieces_with_coordinates().filter(|(_, p)| p.color == color) {
            for (direction, _) in piece.movable_rays(from) {
                for to in self.reachable_ray(from, direction) {
                    if self.validate_move(from, to).is_ok() {
                        moves.push((from, to));
                    }
                }
            }
        }
        moves
    }

    pub fn king_count(&self) -> usize {
        self.pieces_with_coordinates()
            .filter(|(_, piece)| piece.kind == PieceType::King)
            .count()
    }

    /// The game is over once a single king is left.
    pub fn is_end(&self) -> bool {
        self.king_count() == 1
    }

    /// Color of the only remaining king.
    ///
    /// # Panics
    /// When the board does not hold exactly one king; check [`ChessBoard::is_end`] first.
    pub fn winner(&self) -> Color {
        let kings: Vec<Color> = self
            .pieces_with_coordinates()
            .filter(|(_, piece)| piece.kind == PieceType::King)
            .map(|(_, piece)| piece.color)
            .collect();
        match kings.as_slice() {
            [color] => *color,
            _ => panic!("winner() needs exactly one king on the board, found {}", kings.len()),
        }
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in (0..8).rev() {
            board_representation.push_str(&format!("{} │", row + 1));
            for col in 0..8 {
                let square = match &self.squares[row][col] {
                    Square::Empty => ' ',
                    Square::Occupied(piece) => piece.to_char(),
                };
                board_representation.push_str(&format!(" {} │", square));
            }
            board_representation.push_str(&format!(" {}\n", row + 1));

            if row > 0 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

        board_representation
    }
}
