use super::*;
use crate::*;
use log::{debug, info, warn};

impl RunState {
    /// Sets up the current hole: fresh deck, dealt grid, seeded discard pile, then
    /// every owned caddie's setup hook.
    pub fn start_hole(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        if !matches!(self.state.phase, Phase::Setup | Phase::Shop) {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        let hole = self
            .current_hole()
            .cloned()
            .ok_or(RunError::MissingHole(self.state.hole_index))?;

        self.round = RoundState {
            deck: self.shuffled_deck(),
            discard: Vec::new(),
            drawn: None,
        };
        let placed = self.player.setup_grid(&mut self.round.deck);
        if placed < CELL_COUNT {
            warn!("stock ran out while dealing: {placed} of {CELL_COUNT} cells filled");
        }
        if let Some(card) = self.round.deck.deal() {
            self.round.discard.push(card);
        }
        self.state.phase = Phase::Setup;
        self.state.turns = 0;
        self.state.last_score = None;
        self.player.extra_reveals = 0;
        self.invoke_setup_hooks(events);

        let quota = self
            .config
            .rules
            .initial_reveals
            .saturating_add(self.player.extra_reveals);
        let hidden = self.player.grid.hidden_cells().len();
        self.state.reveals_left = quota.min(hidden as u8);

        info!(
            "hole {} started: target {}, boss {}, {} reveals",
            hole.hole, hole.target, hole.boss, self.state.reveals_left
        );
        events.push(Event::HoleStarted {
            hole: hole.hole,
            target: hole.target,
            boss: hole.boss,
            reveals: self.state.reveals_left,
        });
        if self.state.reveals_left > 0 {
            self.set_phase(Phase::Reveal, events);
        } else {
            self.enter_play_or_scoring(events);
        }
        Ok(())
    }

    pub fn reveal(&mut self, cell: Cell, events: &mut EventBus) -> Result<(), RunError> {
        self.expect_phase(Phase::Reveal)?;
        self.player.grid.reveal(cell)?;
        self.state.reveals_left = self.state.reveals_left.saturating_sub(1);
        let card = self.player.grid.card(cell);
        debug!("revealed {cell}: {card:?}");
        events.push(Event::CardRevealed { cell, card });
        if self.state.reveals_left == 0 || self.player.grid.all_revealed() {
            self.enter_play_or_scoring(events);
        }
        Ok(())
    }

    /// Takes the top card of `source`. Discard-pile draws fire every owned caddie's
    /// discard hook before the card can be placed.
    pub fn draw(&mut self, source: DrawSource, events: &mut EventBus) -> Result<Card, RunError> {
        self.expect_phase(Phase::Play)?;
        if self.round.drawn.is_some() {
            return Err(RunError::CardAlreadyDrawn);
        }
        let card = match source {
            DrawSource::Stock => self.round.deck.deal().ok_or(RunError::StockEmpty)?,
            DrawSource::Discard => {
                let card = self.round.discard.pop().ok_or(RunError::DiscardEmpty)?;
                self.invoke_discard_hooks(events);
                card
            }
        };
        self.state.turns = self.state.turns.saturating_add(1);
        self.round.drawn = Some(DrawnCard { card, source });
        debug!("turn {}: drew {card} from {source:?}", self.state.turns);
        events.push(Event::CardDrawn { source, card });
        Ok(card)
    }

    pub fn swap_drawn(
        &mut self,
        cell: Cell,
        events: &mut EventBus,
    ) -> Result<Option<Card>, RunError> {
        self.expect_phase(Phase::Play)?;
        let drawn = self.round.drawn.ok_or(RunError::NoCardDrawn)?;
        let displaced = self.player.grid.swap(cell, drawn.card)?;
        self.round.drawn = None;
        if let Some(old) = displaced {
            self.round.discard.push(old);
        }
        debug!("swapped {} into {cell}, displaced {displaced:?}", drawn.card);
        events.push(Event::CardSwapped {
            cell,
            placed: drawn.card,
            displaced,
        });
        if self.player.grid.all_revealed() {
            self.set_phase(Phase::Scoring, events);
        }
        Ok(displaced)
    }

    pub fn discard_drawn(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        self.expect_phase(Phase::Play)?;
        let drawn = self.round.drawn.ok_or(RunError::NoCardDrawn)?;
        if drawn.source == DrawSource::Discard {
            return Err(RunError::MustSwap);
        }
        self.round.drawn = None;
        self.round.discard.push(drawn.card);
        debug!("discarded {}", drawn.card);
        events.push(Event::CardDiscarded { card: drawn.card });
        Ok(())
    }

    pub fn score_hole(&mut self, events: &mut EventBus) -> Result<HoleReport, RunError> {
        self.expect_phase(Phase::Scoring)?;
        let hole = self
            .current_hole()
            .cloned()
            .ok_or(RunError::MissingHole(self.state.hole_index))?;
        let breakdown = self.player.calculate_score();
        let score = breakdown.total;
        self.state.last_score = Some(score);
        events.push(Event::HoleScored {
            base: breakdown.base,
            cancelled: breakdown.cancelled(),
            bonus: breakdown.bonus_total(),
            total: score,
        });

        let success = score <= hole.target;
        let earnings = if success {
            let reward = self.config.earnings_for(hole.target, score);
            self.player.money += reward;
            self.state.earnings += reward;
            self.state.hole_index += 1;
            info!(
                "hole {} cleared with {score} (target {}), earned {reward}",
                hole.hole, hole.target
            );
            events.push(Event::HoleCleared {
                score,
                reward,
                money: self.player.money,
            });
            if self.state.hole_index >= self.config.hole_count() {
                self.set_phase(Phase::Complete, events);
                events.push(Event::RunCompleted {
                    earnings: self.state.earnings,
                    money: self.player.money,
                });
            } else {
                self.set_phase(Phase::Shop, events);
                events.push(Event::ShopEntered {
                    offers: self.shop_offers().len(),
                    money: self.player.money,
                });
            }
            Some(reward)
        } else {
            info!(
                "hole {} failed with {score} (target {})",
                hole.hole, hole.target
            );
            events.push(Event::HoleFailed {
                score,
                target: hole.target,
            });
            self.set_phase(Phase::Failed, events);
            None
        };

        Ok(HoleReport {
            result: HoleResult {
                hole: hole.hole,
                target: hole.target,
                score,
                success,
                earnings,
            },
            breakdown,
        })
    }

    fn enter_play_or_scoring(&mut self, events: &mut EventBus) {
        if self.player.grid.all_revealed() {
            self.set_phase(Phase::Scoring, events);
        } else {
            self.set_phase(Phase::Play, events);
        }
    }
}
