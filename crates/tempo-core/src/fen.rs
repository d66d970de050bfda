//! FEN string parsing and serialization for [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse the piece placement field, rank 8 first.
fn parse_placement(field: &str) -> Result<[Option<Piece>; Square::COUNT], FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut squares = [None; Square::COUNT];
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_index as u8;
        let mut file: usize = 0;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file += run as usize;
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let sq = Square::from_coords(file as u8, rank).ok_or(FenError::BadRankLength {
                rank_index,
                length: file + 1,
            })?;
            squares[sq.index()] = Some(piece);
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRankLength { rank_index, length: file });
        }
    }
    Ok(squares)
}

fn parse_counter(field: &'static str, value: &str) -> Result<u16, FenError> {
    value.parse().map_err(|_| FenError::InvalidMoveCounter {
        field,
        found: value.to_string(),
    })
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let [placement, color, castling, en_passant, halfmove, fullmove] = fields[..] else {
            return Err(FenError::WrongFieldCount { found: fields.len() });
        };

        let squares = parse_placement(placement)?;

        let side_to_move = match color {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = CastleRights::from_fen(castling)?;

        let en_passant = match en_passant {
            "-" => None,
            text => {
                let target_rank = side_to_move.flip().pawn_rank() as i8 + side_to_move.flip().forward();
                let sq = Square::from_algebraic(text)
                    .filter(|sq| sq.rank() as i8 == target_rank)
                    .ok_or_else(|| FenError::InvalidEnPassant {
                        found: text.to_string(),
                    })?;
                Some(sq)
            }
        };

        let halfmove_clock = parse_counter("halfmove clock", halfmove)?;
        let fullmove_number = parse_counter("fullmove number", fullmove)?;

        Board::from_parts(
            squares,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        )
        .map_err(FenError::from)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty = 0u8;
            for file in 0u8..8 {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        let en_passant = self.en_passant().map_or_else(|| "-".to_string(), |sq| sq.to_string());
        write!(
            f,
            " {} {} {} {} {}",
            self.side_to_move(),
            self.castling(),
            en_passant,
            self.halfmove_clock(),
            self.fullmove_number()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::FenError;
    use crate::square::Square;

    #[test]
    fn starting_fen_matches_starting_position() {
        let board: Board = STARTING_FEN.parse().unwrap();
        assert_eq!(board, Board::starting_position());
        assert_eq!(board.to_string(), STARTING_FEN);
    }

    #[test]
    fn roundtrip_positions() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2",
            "4k3/8/8/8/8/8/8/4K3 b - - 37 80",
        ] {
            let board: Board = fen.parse().unwrap();
            assert_eq!(board.to_string(), fen);
        }
    }

    #[test]
    fn parsed_fields() {
        let board: Board = "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2"
            .parse()
            .unwrap();
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.en_passant(), Square::from_algebraic("c6"));
        assert_eq!(board.fullmove_number(), 2);
        assert_eq!(board.king_square(Color::Black), Square::E8);
    }

    #[test]
    fn rejects_malformed_fens() {
        assert_eq!(
            "8/8/8/8 w - - 0 1".parse::<Board>().unwrap_err(),
            FenError::WrongRankCount { found: 4 }
        );
        assert_eq!(
            "4k3/8/8/8/8/8/8/4K3 w - -".parse::<Board>().unwrap_err(),
            FenError::WrongFieldCount { found: 4 }
        );
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K4 w - - 0 1".parse::<Board>(),
            Err(FenError::BadRankLength { rank_index: 7, .. })
        ));
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4X3 w - - 0 1".parse::<Board>(),
            Err(FenError::InvalidPieceChar { character: 'X' })
        ));
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1".parse::<Board>(),
            Err(FenError::InvalidColor { .. })
        ));
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 w - e4 0 1".parse::<Board>(),
            Err(FenError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            "4k3/8/8/8/8/8/8/4K3 w - - x 1".parse::<Board>(),
            Err(FenError::InvalidMoveCounter { field: "halfmove clock", .. })
        ));
        assert!(matches!(
            "4kP2/8/8/8/8/8/8/4K3 w - - 0 1".parse::<Board>(),
            Err(FenError::InvalidBoard { .. })
        ));
    }
}
