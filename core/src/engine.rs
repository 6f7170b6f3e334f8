use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// At least one shape in hand still fits somewhere.
    Active,
    /// No shape in hand fits anywhere. Terminal until restart: every further
    /// attempt is an invalid placement, so no mutation can leave this state.
    Blocked,
}

impl EngineState {
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }
}

/// One run of the game: board, hand, and score. The blocked/game-over flag is
/// derived from board and hand, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    board: Board,
    hand: Hand,
    score: Score,
    last_sweep: ClearSweep,
}

impl PlayEngine {
    pub fn new(source: &mut dyn ShapeSource) -> Self {
        Self {
            board: Board::new(),
            hand: source.draw_hand(),
            score: 0,
            last_sweep: Default::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn shape_in_slot(&self, slot: usize) -> Option<&'static Shape> {
        self.hand.get(slot).copied().flatten().map(ShapeId::shape)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Units cleared by the most recent successful placement, for hosts that
    /// animate disappearing cells.
    pub fn last_sweep(&self) -> &ClearSweep {
        &self.last_sweep
    }

    pub fn state(&self) -> EngineState {
        let any_fits = self
            .hand
            .iter()
            .flatten()
            .any(|&id| self.board.can_place_anywhere(id.shape()));
        let any_shape = self.hand.iter().any(Option::is_some);
        if any_shape && !any_fits {
            EngineState::Blocked
        } else {
            EngineState::Active
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.state().is_blocked()
    }

    /// Preview predicate for drop highlighting. Pure; hosts recompute it on
    /// every candidate origin instead of caching.
    pub fn can_place_at(&self, slot: usize, origin: Coord2) -> bool {
        match self.shape_in_slot(slot) {
            Some(shape) => self.board.can_place(shape, origin),
            None => false,
        }
    }

    /// Places the shape held in `slot` at `origin`, clears every completed
    /// row/column/block, and scores one point per cleared unit. Emptying the
    /// last slot redraws the whole hand in the same step. Any failure leaves
    /// the engine untouched.
    pub fn attempt_placement(
        &mut self,
        slot: usize,
        origin: Coord2,
        source: &mut dyn ShapeSource,
    ) -> Result<PlaceOutcome> {
        let id = self
            .hand
            .get(slot)
            .copied()
            .ok_or(GameError::InvalidSlot)?
            .ok_or(GameError::SlotEmpty)?;
        let shape = id.shape();

        self.board.place(shape, origin)?;
        let sweep = self.board.clear_completed();
        let cleared = sweep.count();
        self.score += Score::from(cleared);
        self.last_sweep = sweep;
        self.hand[slot] = None;
        log::debug!("placed {} at {:?}, cleared {}", shape.name, origin, cleared);

        let refilled = if self.hand.iter().all(Option::is_none) {
            self.hand = source.draw_hand();
            log::debug!("hand exhausted, redrew all {} slots", HAND_SIZE);
            true
        } else {
            false
        };

        let game_over = self.is_game_over();
        if game_over {
            log::debug!("no shape in hand fits, run over at score {}", self.score);
        }

        Ok(PlaceOutcome {
            cleared,
            refilled,
            game_over,
        })
    }
}
