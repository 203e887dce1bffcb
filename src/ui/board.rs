use std::fmt::Write;

use crate::entity::game::component::{
    chess_match::{AppliedMove, ChessMatch, EndGame},
    history::History,
    square::{Color, Switch},
};

/// Board with a header naming the players and the side to move.
pub fn format_match(chess_match: &ChessMatch) -> String {
    let mut s = String::new();
    let white = chess_match.player(Color::White);
    let black = chess_match.player(Color::Black);
    let _ = writeln!(s, "Match {}", chess_match.id());
    let _ = writeln!(s, "White: {}  Black: {}", white.id(), black.id());
    let _ = write!(s, "{}", chess_match.board());
    match chess_match.end_game() {
        EndGame::None => {
            let _ = write!(s, "{} to move", chess_match.current_turn());
            if chess_match.is_in_check(chess_match.current_turn()) {
                let _ = write!(s, " (check)");
            }
            let _ = writeln!(s);
        }
        end_game => {
            let _ = writeln!(s, "{}", format_end_game(chess_match, end_game));
        }
    }
    for color in [Color::White, Color::Black] {
        let captures = chess_match.player(color).captures();
        if !captures.is_empty() {
            let symbols: String = captures.iter().map(|p| p.symbol()).collect();
            let _ = writeln!(s, "{} captured: {}", color, symbols);
        }
    }
    s
}

fn format_end_game(chess_match: &ChessMatch, end_game: EndGame) -> String {
    match end_game {
        EndGame::None => String::new(),
        EndGame::KingCaptured(winner) => format!(
            "{} ({}) captured the king and wins",
            chess_match.player(winner).id(),
            winner
        ),
        EndGame::Resigned(winner) => format!(
            "{} resigned, {} wins",
            chess_match.player(winner.switch()).id(),
            chess_match.player(winner).id()
        ),
    }
}

/// One line describing an applied move.
pub fn format_applied_move(applied: &AppliedMove) -> String {
    let piece = applied.piece();
    let mut s = format!(
        "{} {} {} -> {}",
        piece.color(),
        piece.type_piece(),
        applied.from(),
        applied.to()
    );
    if let Some(captured) = applied.captured() {
        let _ = write!(s, ", captures {} {}", captured.color(), captured.type_piece());
        if applied.is_en_passant() {
            let _ = write!(s, " en passant");
        }
    }
    match applied.end_game() {
        EndGame::KingCaptured(winner) => {
            let _ = write!(s, ". {} wins", winner);
        }
        _ if applied.opponent_in_check() => {
            let _ = write!(s, ". {} is in check", piece.color().switch());
        }
        _ => {}
    }
    s
}

pub fn format_history(history: &History) -> String {
    if history.is_empty() {
        return "No move played yet".to_string();
    }
    history
        .moves()
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{}. {}", i + 1, m))
        .collect::<Vec<String>>()
        .join("\n")
}
