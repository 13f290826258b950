use shakmaty::{
    Bitboard, CastlingMode, Chess, Color, EnPassantMode, Move, MoveList, Piece, Position,
    PositionError, Role, Square,
    fen::{Fen, ParseFenError},
};
use thiserror::Error;

/// Errors when constructing a [`GameEngine`] from external input.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid FEN: {0}")]
    Fen(#[from] ParseFenError),
    #[error("illegal position: {0}")]
    Position(#[from] PositionError<Chess>),
}

/// Thin adapter over the rules library.
///
/// Owns the logical position. Every rules question (occupancy, side to move,
/// legal moves, check) is answered by `shakmaty`.
#[derive(Clone, Default)]
pub struct GameEngine {
    position: Chess,
}

impl GameEngine {
    #[inline]
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    /// Creates a GameEngine from an existing chess position.
    pub fn from_position(position: Chess) -> Self {
        Self { position }
    }

    /// Creates a GameEngine from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        let position: Chess = fen
            .trim()
            .parse::<Fen>()?
            .into_position(CastlingMode::Standard)?;
        Ok(Self::from_position(position))
    }

    #[inline]
    pub fn position(&self) -> &Chess {
        &self.position
    }

    #[inline]
    pub fn board(&self) -> &shakmaty::Board {
        self.position.board()
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    /// Get the piece at a given square, if any
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    /// Whether a piece of the side to move stands on `square`.
    #[inline]
    pub fn is_own_piece(&self, square: Square) -> bool {
        self.piece_at(square)
            .is_some_and(|piece| piece.color == self.turn())
    }

    /// Legal moves starting on `from`.
    pub fn moves_from(&self, from: Square) -> MoveList {
        let mut moves = self.position.legal_moves();
        moves.retain(|mv| mv.from() == Some(from));
        moves
    }

    /// Squares a piece on `from` can legally move to.
    ///
    /// Castling is reported on the king's target square.
    pub fn legal_destinations(&self, from: Square) -> Bitboard {
        self.moves_from(from)
            .iter()
            .map(|mv| destination(mv, self.turn()))
            .collect()
    }

    /// Play the legal move `from → to`, if there is one.
    ///
    /// Promotions always pick a queen. Returns the played move, or `None`
    /// with the position untouched.
    pub fn play(&mut self, from: Square, to: Square) -> Option<Move> {
        let turn = self.turn();
        let mv = self
            .moves_from(from)
            .into_iter()
            .filter(|mv| mv.promotion().is_none_or(|role| role == Role::Queen))
            .find(|mv| destination(mv, turn) == to)?;
        self.position.play_unchecked(mv);
        Some(mv)
    }

    /// Pieces giving check to the side to move.
    #[inline]
    pub fn checkers(&self) -> Bitboard {
        self.position.checkers()
    }

    /// Square of the side to move's king.
    #[inline]
    pub fn king_square(&self) -> Option<Square> {
        self.position.board().king_of(self.turn())
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }
}

/// Square the player clicks to complete `mv`.
///
/// The rules library encodes castling as king-takes-rook; on the board the
/// king lands on the g- or c-file.
pub fn destination(mv: &Move, turn: Color) -> Square {
    match mv.castling_side() {
        Some(side) => side.king_to(turn),
        None => mv.to(),
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fen = Fen::from_position(&self.position, EnPassantMode::Legal);
        f.debug_struct("GameEngine")
            .field("position", &format_args!("{fen}"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn assert_piece(engine: &GameEngine, square: &str, role: Role, color: Color) {
        let sq: Square = square.parse().expect("asserted square is invalid");
        let expected = Piece { role, color };
        assert_eq!(
            engine.piece_at(sq),
            Some(expected),
            "Expected {:?} at {}, found {:?}",
            expected,
            square,
            engine.piece_at(sq)
        );
    }

    fn assert_empty(engine: &GameEngine, square: &str) {
        let sq: Square = square.parse().expect("asserted square is invalid");
        assert_eq!(
            engine.piece_at(sq),
            None,
            "Expected empty at {}, found {:?}",
            square,
            engine.piece_at(sq)
        );
    }

    fn engine(fen: &str) -> GameEngine {
        GameEngine::from_fen(fen).expect("test FEN should be valid")
    }

    #[test]
    fn start_position_pawn_destinations() {
        let engine = GameEngine::new();

        let dests = engine.legal_destinations(Square::E2);

        assert_eq!(dests, Bitboard::from_iter([Square::E3, Square::E4]));
    }

    #[test]
    fn start_position_knight_destinations() {
        let engine = GameEngine::new();

        let dests = engine.legal_destinations(Square::G1);

        assert_eq!(dests, Bitboard::from_iter([Square::F3, Square::H3]));
    }

    #[test_case("e4"; "empty square")]
    #[test_case("e7"; "opponent piece")]
    #[test_case("a1"; "blocked rook")]
    fn no_destinations(square: &str) {
        let engine = GameEngine::new();
        let sq: Square = square.parse().expect("valid square");

        assert!(engine.legal_destinations(sq).is_empty());
    }

    #[test]
    fn own_piece_follows_side_to_move() {
        let mut engine = GameEngine::new();
        assert!(engine.is_own_piece(Square::E2));
        assert!(!engine.is_own_piece(Square::E7));
        assert!(!engine.is_own_piece(Square::E4));

        engine.play(Square::E2, Square::E4).expect("legal move");

        assert!(engine.is_own_piece(Square::E7));
        assert!(!engine.is_own_piece(Square::E4));
    }

    #[test]
    fn play_simple_move() {
        let mut engine = GameEngine::new();

        let mv = engine.play(Square::E2, Square::E4);

        assert!(mv.is_some());
        assert_empty(&engine, "e2");
        assert_piece(&engine, "e4", Role::Pawn, Color::White);
        assert_eq!(engine.turn(), Color::Black);
    }

    #[test]
    fn play_illegal_move_leaves_position() {
        let mut engine = GameEngine::new();

        assert_eq!(engine.play(Square::E2, Square::E5), None);

        assert_piece(&engine, "e2", Role::Pawn, Color::White);
        assert_eq!(engine.turn(), Color::White);
    }

    #[test]
    fn castling_destination_is_king_target() {
        let mut engine =
            engine("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1");

        let dests = engine.legal_destinations(Square::E1);
        assert!(dests.contains(Square::G1));
        assert!(!dests.contains(Square::H1));

        engine.play(Square::E1, Square::G1).expect("castling is legal");
        assert_piece(&engine, "g1", Role::King, Color::White);
        assert_piece(&engine, "f1", Role::Rook, Color::White);
        assert_empty(&engine, "h1");
    }

    #[test]
    fn queen_side_castling() {
        let mut engine =
            engine("r1bqkbnr/ppp3pp/2n1pp2/3p4/3P1B2/2NQ4/PPP1PPPP/R3KBNR w KQkq - 0 1");

        engine.play(Square::E1, Square::C1).expect("castling is legal");

        assert_piece(&engine, "c1", Role::King, Color::White);
        assert_piece(&engine, "d1", Role::Rook, Color::White);
        assert_empty(&engine, "a1");
    }

    #[test]
    fn promotion_picks_queen() {
        let mut engine =
            engine("r1bqkbnr/pPpppppp/2n5/8/8/8/PP1PPPPP/RNBQKBNR w KQkq - 0 1");

        let dests = engine.legal_destinations(Square::B7);
        assert_eq!(
            dests,
            Bitboard::from_iter([Square::A8, Square::B8, Square::C8])
        );

        engine.play(Square::B7, Square::B8).expect("promotion is legal");
        assert_piece(&engine, "b8", Role::Queen, Color::White);
    }

    #[test]
    fn en_passant_removes_captured_pawn() {
        let mut engine =
            engine("rnbqkbnr/1pp1pppp/p7/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");

        engine.play(Square::E5, Square::D6).expect("en passant is legal");

        assert_piece(&engine, "d6", Role::Pawn, Color::White);
        assert_empty(&engine, "d5");
        assert_empty(&engine, "e5");
    }

    #[test]
    fn check_queries() {
        // Scholar's mate
        let engine =
            engine("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");

        assert_eq!(engine.checkers(), Bitboard::from_square(Square::F7));
        assert_eq!(engine.king_square(), Some(Square::E8));
        assert!(engine.is_checkmate());
        assert!(engine.is_game_over());
        assert!(!engine.is_stalemate());
    }

    #[test_case("not a fen"; "garbage")]
    #[test_case("8/8/8/8/8/8/8/8 w - - 0 1"; "no kings")]
    fn from_fen_rejects(fen: &str) {
        assert!(GameEngine::from_fen(fen).is_err());
    }

    #[test]
    fn debug_shows_fen() {
        let engine = GameEngine::new();

        let debug = format!("{engine:?}");

        assert!(debug.contains("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"));
    }
}
