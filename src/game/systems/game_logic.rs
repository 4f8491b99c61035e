//! Game logic for phase updates after each turn

use tracing::{debug, info, warn};

use crate::game::components::GamePhase;
use crate::game::events::GameEvent;
use crate::game::resources::{CurrentGamePhase, CurrentTurn, GameOverState};
use crate::game::rules::{check, BoardState, CheckStatus};

/// Update the game phase for the side now to move
///
/// Runs after each applied move to detect:
/// - Check: the king stands on a square the opponent attacks
/// - Checkmate: in check and the king has no square left to go to
/// - A captured king, which ends the game like a mate
///
/// Returns the check evaluation so the caller can keep its danger map, or
/// `None` when the side to move has no king left.
pub fn update_game_phase(
    board_state: &BoardState,
    current_turn: &CurrentTurn,
    game_phase: &mut CurrentGamePhase,
    game_over: &mut GameOverState,
    events: &mut Vec<GameEvent>,
) -> Option<CheckStatus> {
    let previous_phase = game_phase.0;
    let side = current_turn.color;

    let status = match check::evaluate(board_state, side) {
        Ok(status) => status,
        Err(e) => {
            let winner = side.opponent();
            warn!("[GAME] {}", e);
            game_phase.0 = GamePhase::Checkmate;
            *game_over = GameOverState::won_by(winner);
            events.push(GameEvent::KingCaptured { side, winner });
            info!("[GAME] {:?} King was captured - {}", side, game_over.message());
            return None;
        }
    };

    if status.is_checkmate() {
        let winner = side.opponent();
        game_phase.0 = GamePhase::Checkmate;
        *game_over = GameOverState::won_by(winner);
        events.push(GameEvent::Check { side });
        events.push(GameEvent::Checkmate { side, winner });
        info!("[GAME] ========== CHECKMATE! ==========");
        info!(
            "[GAME] {:?} King at {} is in checkmate! {}",
            side,
            status.king,
            game_over.message()
        );
        info!("[GAME] Final Move: #{}", current_turn.move_number);
    } else if status.in_check {
        game_phase.0 = GamePhase::Check;
        events.push(GameEvent::Check { side });
        if previous_phase != GamePhase::Check {
            info!("[GAME] ========== CHECK DETECTED ==========");
        }
        info!(
            "[GAME] {:?} King at {} is under attack, {} escape square(s)",
            side, status.king, status.king_mobility
        );
    } else {
        if previous_phase == GamePhase::Check {
            info!("[GAME] Check escaped! Game continues normally");
        }
        game_phase.0 = GamePhase::Playing;
        debug!("[GAME] {:?} to move, king safe at {}", side, status.king);
    }

    Some(status)
}
