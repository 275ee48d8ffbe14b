//! Core value types shared by every subsystem.
//!
//! Squares, colors, piece kinds, castling rights and the enumerations used to
//! tag special moves and terminal results. All of them are small `Copy`
//! values so the board and history can hold them by value.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank holding this side's king and rooks at the start of the game.
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank step a pawn of this color takes when advancing.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank a pawn must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_capture_rank(self) -> u8 {
        match self {
            Color::White => 4,
            Color::Black => 3,
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Kinds a pawn may become on the last rank.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Uppercase notation letter.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parses a notation letter in either case.
    #[inline]
    pub const fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Board letter: uppercase for white, lowercase for black.
    #[inline]
    pub const fn to_char(self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }

    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };
        match PieceKind::from_letter(ch) {
            Some(kind) => Some(Piece { color, kind }),
            None => None,
        }
    }
}

/// A square on the board. File 0 is the a-file, rank 0 is the first rank.
///
/// The fields are private so a `Square` can only be built on the board;
/// raw coordinates go through [`Square::from_coords`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_coords(file: i8, rank: i8) -> Option<Self> {
        if file < 0 || rank < 0 {
            return None;
        }
        Self::new(file as u8, rank as u8)
    }

    /// `0 == a1`, `7 == h1`, `63 == h8`.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Self {
                file: index % 8,
                rank: index / 8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn index(self) -> usize {
        (self.rank as usize) * 8 + self.file as usize
    }

    #[inline]
    pub const fn coords(self) -> (i8, i8) {
        (self.file as i8, self.rank as i8)
    }

    /// Steps by `(d_file, d_rank)`; `None` when the step leaves the board.
    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        Self::from_coords(self.file as i8 + d_file, self.rank as i8 + d_rank)
    }

    /// Iterates a1, b1, ..., h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file),
            char::from(b'1' + self.rank)
        )
    }
}

/// The four castling permissions. Once cleared, a right never returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub const ALL: Self = Self {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    pub const NONE: Self = Self {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };

    #[inline]
    pub const fn king_side(self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_side,
            Color::Black => self.black_king_side,
        }
    }

    #[inline]
    pub const fn queen_side(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queen_side,
            Color::Black => self.black_queen_side,
        }
    }

    pub fn clear_king_side(&mut self, color: Color) {
        match color {
            Color::White => self.white_king_side = false,
            Color::Black => self.black_king_side = false,
        }
    }

    pub fn clear_queen_side(&mut self, color: Color) {
        match color {
            Color::White => self.white_queen_side = false,
            Color::Black => self.black_queen_side = false,
        }
    }

    pub fn clear_both(&mut self, color: Color) {
        self.clear_king_side(color);
        self.clear_queen_side(color);
    }

    /// Clears the right tied to a rook home corner, if `square` is one.
    pub fn clear_for_corner(&mut self, square: Square) {
        for color in [Color::White, Color::Black] {
            if square.rank() != color.home_rank() {
                continue;
            }
            match square.file() {
                0 => self.clear_queen_side(color),
                7 => self.clear_king_side(color),
                _ => {}
            }
        }
    }

    #[inline]
    pub const fn any(self) -> bool {
        self.white_king_side || self.white_queen_side || self.black_king_side || self.black_queen_side
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

/// Tag attached to generated candidates and recorded plies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SpecialMove {
    #[default]
    Normal,
    DoublePush,
    EnPassantCapture,
    Promotion,
    KingSideCastle,
    QueenSideCastle,
}

impl SpecialMove {
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            SpecialMove::Normal => 0,
            SpecialMove::DoublePush => 1,
            SpecialMove::EnPassantCapture => 2,
            SpecialMove::Promotion => 3,
            SpecialMove::KingSideCastle => 4,
            SpecialMove::QueenSideCastle => 5,
        }
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, SpecialMove::KingSideCastle | SpecialMove::QueenSideCastle)
    }
}

/// Terminal outcome of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Stalemate,
    FiftyMoveLimit,
    ThreefoldRepetition,
}

impl GameResult {
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            GameResult::WhiteWins => 8,
            GameResult::BlackWins => 9,
            GameResult::Stalemate => 10,
            GameResult::FiftyMoveLimit => 11,
            GameResult::ThreefoldRepetition => 12,
        }
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            8 => Some(GameResult::WhiteWins),
            9 => Some(GameResult::BlackWins),
            10 => Some(GameResult::Stalemate),
            11 => Some(GameResult::FiftyMoveLimit),
            12 => Some(GameResult::ThreefoldRepetition),
            _ => None,
        }
    }

    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWins => Some(Color::White),
            GameResult::BlackWins => Some(Color::Black),
            _ => None,
        }
    }

    /// Upper-case name used in logs and reports.
    pub const fn name(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "WHITE_WIN",
            GameResult::BlackWins => "BLACK_WIN",
            GameResult::Stalemate => "STALEMATE",
            GameResult::FiftyMoveLimit => "STASIS_COUNT_LIMIT_RULE",
            GameResult::ThreefoldRepetition => "THREE_REPETITION_RULE",
        }
    }

    /// PGN result token.
    pub const fn pgn_token(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            _ => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check annotation on a recorded ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckMark {
    Check,
    Checkmate,
}

impl CheckMark {
    #[inline]
    pub const fn suffix(self) -> char {
        match self {
            CheckMark::Check => '+',
            CheckMark::Checkmate => '#',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_index_matches_a1_origin() {
        let d4 = Square::new(3, 3).expect("d4 is on the board");
        assert_eq!(d4.index(), 27);
        assert_eq!(Square::from_index(27), Some(d4));
        assert_eq!(d4.to_string(), "d4");
    }

    #[test]
    fn off_board_coordinates_are_rejected() {
        assert_eq!(Square::from_coords(-1, 0), None);
        assert_eq!(Square::from_coords(0, 8), None);
        let h8 = Square::new(7, 7).expect("h8 is on the board");
        assert_eq!(h8.offset(1, 0), None);
        assert_eq!(h8.offset(-1, -1), Square::new(6, 6));
    }

    #[test]
    fn piece_letters_round_trip_with_case() {
        let knight = Piece::new(Color::Black, PieceKind::Knight);
        assert_eq!(knight.to_char(), 'n');
        assert_eq!(Piece::from_char('n'), Some(knight));
        assert_eq!(Piece::from_char('K'), Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(Piece::from_char(' '), None);
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn corner_clearing_only_touches_matching_right() {
        let mut rights = CastlingRights::ALL;
        rights.clear_for_corner(Square::new(7, 7).expect("h8"));
        assert!(!rights.black_king_side);
        assert!(rights.black_queen_side);
        assert!(rights.white_king_side);

        rights.clear_for_corner(Square::new(4, 0).expect("e1"));
        assert!(rights.white_king_side && rights.white_queen_side);
    }

    #[test]
    fn result_codes_round_trip() {
        for result in [
            GameResult::WhiteWins,
            GameResult::BlackWins,
            GameResult::Stalemate,
            GameResult::FiftyMoveLimit,
            GameResult::ThreefoldRepetition,
        ] {
            assert_eq!(GameResult::from_code(result.code()), Some(result));
        }
        assert_eq!(GameResult::from_code(0), None);
    }
}
