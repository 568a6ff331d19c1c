use super::*;
use crate::*;

impl RunState {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_shuffle(config, Box::new(RngState::from_seed(seed)))
    }

    pub fn with_shuffle(config: GameConfig, shuffle: Box<dyn Shuffle>) -> Self {
        let player = Player::with_money(config.rules.starting_money);
        Self {
            config,
            player,
            state: GameState::new(),
            round: RoundState::default(),
            shuffle,
        }
    }

    pub fn current_hole(&self) -> Option<&HoleConfig> {
        self.config.hole(self.state.hole_index)
    }

    pub fn view(&self) -> Result<TableView<'_>, RunError> {
        let hole = self
            .current_hole()
            .ok_or(RunError::MissingHole(self.state.hole_index))?;
        Ok(TableView {
            hole,
            hole_count: self.config.hole_count(),
            phase: self.state.phase,
            grid: &self.player.grid,
            discard_top: self.round.discard_top().copied(),
            stock_left: self.round.deck.len(),
            money: self.player.money,
            reveals_left: self.state.reveals_left,
            caddies: &self.player.caddies,
        })
    }

    pub fn legal_draws(&self) -> Vec<DrawSource> {
        let mut sources = Vec::with_capacity(2);
        if !self.round.deck.is_empty() {
            sources.push(DrawSource::Stock);
        }
        if !self.round.discard.is_empty() {
            sources.push(DrawSource::Discard);
        }
        sources
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        match self.state.phase {
            Phase::Complete => Some(RunOutcome::Completed {
                earnings: self.state.earnings,
            }),
            Phase::Failed => {
                let hole = self.current_hole();
                Some(RunOutcome::Failed {
                    hole: hole.map(|hole| hole.hole).unwrap_or_default(),
                    score: self.state.last_score.unwrap_or_default(),
                    target: hole.map(|hole| hole.target).unwrap_or_default(),
                })
            }
            _ => None,
        }
    }

    pub(super) fn expect_phase(&self, phase: Phase) -> Result<(), RunError> {
        if self.state.phase == phase {
            Ok(())
        } else {
            Err(RunError::InvalidPhase(self.state.phase))
        }
    }

    pub(super) fn set_phase(&mut self, phase: Phase, events: &mut EventBus) {
        if self.state.phase == phase {
            return;
        }
        log::debug!("phase {:?} -> {:?}", self.state.phase, phase);
        self.state.phase = phase;
        events.push(Event::PhaseChanged { phase });
    }

    pub(super) fn shuffled_deck(&mut self) -> Deck {
        Deck::shuffled(&mut *self.shuffle)
    }
}
