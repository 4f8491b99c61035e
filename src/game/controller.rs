//! Selection/turn controller
//!
//! [`ChessGame`] owns the board together with the turn, selection, phase and
//! history resources, and turns square clicks into moves. The flow mirrors a
//! two-click UI:
//!
//! ```text
//! click own piece  → try_select → highlights (quiet + attack destinations)
//! click highlight  → try_apply  → move applied, turn switched, phase updated
//! click elsewhere  → try_apply  → IllegalDestination, selection cleared
//! ```
//!
//! Selection is one-shot: a second click always consumes it, even when that
//! click lands on another friendly piece.

use tracing::{debug, info};

use crate::game::components::{GamePhase, MoveRecord, PieceColor, PossibleMove};
use crate::game::error::{GameError, GameResult};
use crate::game::events::GameEvent;
use crate::game::resources::{CurrentGamePhase, CurrentTurn, GameOverState, MoveHistory, Selection};
use crate::game::rules::{self, apply_move, get_possible_moves, AppliedMove, BoardState, CheckStatus, DangerMap};
use crate::game::setup::InitialSetup;
use crate::game::systems::update_game_phase;
use crate::game::types::Square;

/// What a single [`ChessGame::click`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece was selected; these are its highlighted destinations
    Selected(Vec<PossibleMove>),
    /// The selected piece moved
    Moved(AppliedMove),
}

#[derive(Debug, Clone)]
pub struct ChessGame {
    board: BoardState,
    current_turn: CurrentTurn,
    game_phase: CurrentGamePhase,
    game_over: GameOverState,
    selection: Selection,
    /// Squares the side to move must keep its king off
    danger: DangerMap,
    move_history: MoveHistory,
    events: Vec<GameEvent>,
}

impl ChessGame {
    /// Start a game from `setup` with White to move
    ///
    /// The setup is validated first. The starting position is evaluated for
    /// White right away, so a setup with White already in check begins in
    /// [`GamePhase::Check`].
    pub fn new(setup: &InitialSetup) -> GameResult<Self> {
        let board = setup.build()?;
        let size = board.size();
        let mut game = Self {
            board,
            current_turn: CurrentTurn::default(),
            game_phase: CurrentGamePhase::default(),
            game_over: GameOverState::default(),
            selection: Selection::default(),
            danger: DangerMap::new(size),
            move_history: MoveHistory::default(),
            events: Vec::new(),
        };
        game.refresh_phase();
        info!(
            "[GAME] New game on a {}x{} board, {:?} to move",
            size.ranks, size.files, game.current_turn.color
        );
        Ok(game)
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.current_turn.color
    }

    pub fn current_turn(&self) -> CurrentTurn {
        self.current_turn
    }

    pub fn phase(&self) -> GamePhase {
        self.game_phase.0
    }

    pub fn game_over(&self) -> GameOverState {
        self.game_over
    }

    /// False once the game has ended by mate or king capture
    pub fn is_running(&self) -> bool {
        !self.game_over.is_game_over()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn danger_map(&self) -> &DangerMap {
        &self.danger
    }

    pub fn history(&self) -> &MoveHistory {
        &self.move_history
    }

    /// Select the piece on `square` for `side` and return its highlights
    ///
    /// Rejected when the game is over, a selection is already active, it is
    /// not `side`'s turn, or the square does not hold one of `side`'s pieces.
    /// King highlights avoid every square in the current danger map.
    pub fn try_select(&mut self, square: Square, side: PieceColor) -> GameResult<&[PossibleMove]> {
        self.ensure_running()?;

        if let Some(selected) = self.selection.selected_position {
            return Err(GameError::SelectionActive { selected });
        }

        if side != self.current_turn.color {
            return Err(GameError::IllegalSelection {
                square,
                message: format!("it is {:?}'s turn", self.current_turn.color),
            });
        }

        let piece = self.board.get_piece_at(square).ok_or_else(|| GameError::IllegalSelection {
            square,
            message: "square is empty".to_string(),
        })?;

        if piece.color != side {
            return Err(GameError::IllegalSelection {
                square,
                message: format!("piece belongs to {:?}", piece.color),
            });
        }

        let moves = get_possible_moves(&self.board, square, &self.danger).into_vec();
        debug!(
            "[SELECT] {:?} {:?} at {} selected, {} destination(s)",
            piece.color,
            piece.piece_type,
            square,
            moves.len()
        );
        self.selection.select(square, moves);
        Ok(self.selection.possible_moves.as_slice())
    }

    /// Move the selected piece to `to`
    ///
    /// The selection is consumed either way. A destination that was not
    /// highlighted yields [`GameError::IllegalDestination`] and leaves the
    /// board and turn untouched.
    pub fn try_apply(&mut self, to: Square) -> GameResult<AppliedMove> {
        self.ensure_running()?;

        let from = self.selection.selected_position.ok_or(GameError::NoSelection)?;
        let target = self.selection.target(to);
        self.clear_selection();

        let Some(target) = target else {
            debug!("[SELECT] {} is not a destination for {}", to, from);
            return Err(GameError::IllegalDestination { from, to });
        };

        let applied = apply_move(&mut self.board, from, target)?;
        let mover = self.current_turn.color;
        self.current_turn.switch();

        self.events.push(GameEvent::TurnComplete {
            applied,
            next: self.current_turn.color,
        });

        let status = self.refresh_phase();
        self.move_history.add_move(MoveRecord {
            piece: applied.piece,
            from: applied.from,
            to: applied.to,
            kind: applied.kind,
            captured: applied.captured.map(|(_, piece)| piece),
            rook_move: applied.rook_move,
            is_check: status.as_ref().is_some_and(|s| s.in_check),
            is_checkmate: status.as_ref().is_some_and(CheckStatus::is_checkmate),
        });

        info!(
            "[GAME] {:?} played {} -> {} ({:?}), {:?} to move",
            mover, applied.from, applied.to, applied.kind, self.current_turn.color
        );
        Ok(applied)
    }

    /// Route a click the way a board UI would
    ///
    /// With nothing selected the click selects for the side to move;
    /// otherwise it is taken as the destination of the active selection.
    pub fn click(&mut self, square: Square) -> GameResult<ClickOutcome> {
        if self.selection.is_selected() {
            self.try_apply(square).map(ClickOutcome::Moved)
        } else {
            let side = self.current_turn.color;
            self.try_select(square, side)
                .map(|moves| ClickOutcome::Selected(moves.to_vec()))
        }
    }

    /// Drop the active selection, if any
    pub fn deselect(&mut self) {
        self.clear_selection();
    }

    pub fn is_in_check(&self, side: PieceColor) -> GameResult<bool> {
        rules::is_in_check(&self.board, side)
    }

    /// Full check evaluation for `side` on the current board
    pub fn check_status(&self, side: PieceColor) -> GameResult<CheckStatus> {
        rules::evaluate(&self.board, side)
    }

    /// Take every event raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn ensure_running(&self) -> GameResult<()> {
        if self.game_over.is_game_over() {
            return Err(GameError::GameOver {
                message: self.game_over.message().to_string(),
            });
        }
        Ok(())
    }

    fn clear_selection(&mut self) {
        if self.selection.is_selected() {
            debug!("[SELECT] Selection cleared");
        }
        self.selection.clear();
    }

    /// Re-evaluate the side to move and keep its danger map
    fn refresh_phase(&mut self) -> Option<CheckStatus> {
        let status = update_game_phase(
            &self.board,
            &self.current_turn,
            &mut self.game_phase,
            &mut self.game_over,
            &mut self.events,
        );
        match &status {
            Some(status) => self.danger = status.danger.clone(),
            None => self.danger.clear(),
        }
        status
    }
}
