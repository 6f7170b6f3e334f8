use crate::*;

/// Read/report interface over the host's best-score storage (local storage,
/// remote table, …). `report_best` is fire-and-forget; the host may fulfill
/// it asynchronously without the core waiting on it.
pub trait BestScoreStore {
    fn read_best(&self) -> Option<Score>;
    fn report_best(&mut self, score: Score);
}

/// Store for hosts that do not track a best score.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoBestScore;

impl BestScoreStore for NoBestScore {
    fn read_best(&self) -> Option<Score> {
        None
    }

    fn report_best(&mut self, _score: Score) {}
}

/// One playable run plus the collaborators that survive restarts.
#[derive(Clone, Debug)]
pub struct Session<S, B> {
    engine: PlayEngine,
    source: S,
    best: B,
}

impl<S: ShapeSource, B: BestScoreStore> Session<S, B> {
    pub fn new(mut source: S, best: B) -> Self {
        let engine = PlayEngine::new(&mut source);
        Self {
            engine,
            source,
            best,
        }
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn score(&self) -> Score {
        self.engine.score()
    }

    pub fn best_score(&self) -> Option<Score> {
        self.best.read_best()
    }

    pub fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    /// Forwards to the engine; on the placement that ends the run, reports the
    /// score iff it beats the previously known best.
    pub fn attempt_placement(&mut self, slot: usize, origin: Coord2) -> Result<PlaceOutcome> {
        let outcome = self
            .engine
            .attempt_placement(slot, origin, &mut self.source)?;
        if outcome.game_over {
            let score = self.engine.score();
            if score > self.best.read_best().unwrap_or(0) {
                log::debug!("reporting new best score {}", score);
                self.best.report_best(score);
            }
        }
        Ok(outcome)
    }

    /// Fresh board, fresh hand, score 0. The best-score store is untouched.
    pub fn restart(&mut self) {
        self.engine = PlayEngine::new(&mut self.source);
    }
}
