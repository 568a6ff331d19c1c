use crate::{
    DrawSource, EventBus, HoleReport, Interaction, Phase, RunError, RunOutcome, RunState,
};
use log::{info, warn};

pub fn play_hole(
    run: &mut RunState,
    io: &mut dyn Interaction,
    events: &mut EventBus,
) -> Result<HoleReport, RunError> {
    if matches!(run.state.phase, Phase::Setup | Phase::Shop) {
        run.start_hole(events)?;
        io.on_hole_started(&run.view()?);
    }

    while run.state.phase == Phase::Reveal {
        let cell = io.choose_reveal_target(&run.view()?);
        match run.reveal(cell, events) {
            Ok(()) => io.on_grid_changed(&run.view()?),
            Err(err) => reject(io, err)?,
        }
    }

    while run.state.phase == Phase::Play {
        play_turn(run, io, events)?;
    }

    let report = run.score_hole(events)?;
    io.on_score_computed(&report.breakdown);
    io.on_hole_result(&report.result);
    Ok(report)
}

/// Plays holes in order, visiting the shop between cleared holes, until the run is
/// completed or a hole is failed.
pub fn play_run(
    run: &mut RunState,
    io: &mut dyn Interaction,
    events: &mut EventBus,
) -> Result<RunOutcome, RunError> {
    loop {
        if let Some(outcome) = run.outcome() {
            info!("run finished: {outcome:?}");
            return Ok(outcome);
        }
        if run.state.phase == Phase::Shop {
            visit_shop(run, io, events)?;
        }
        play_hole(run, io, events)?;
    }
}

/// Offers the shop once. A successful purchase or `None` ends the visit.
pub fn visit_shop(
    run: &mut RunState,
    io: &mut dyn Interaction,
    events: &mut EventBus,
) -> Result<(), RunError> {
    if run.state.phase != Phase::Shop {
        return Err(RunError::InvalidPhase(run.state.phase));
    }
    loop {
        let choice = {
            let shop = run.shop_view();
            if shop.offers.is_empty() {
                io.on_shop_empty(&shop);
                return Ok(());
            }
            io.choose_shop_purchase(&shop)
        };
        let Some(index) = choice else {
            return Ok(());
        };
        match run.buy_caddie(index, events) {
            Ok(caddie) => {
                io.on_purchase(&caddie, run.player.money);
                return Ok(());
            }
            Err(err) => reject(io, err)?,
        }
    }
}

fn play_turn(
    run: &mut RunState,
    io: &mut dyn Interaction,
    events: &mut EventBus,
) -> Result<(), RunError> {
    let (card, source) = match run.round.drawn {
        Some(drawn) => (drawn.card, drawn.source),
        None => {
            if run.legal_draws().is_empty() {
                return Err(RunError::NoLegalDraw);
            }
            loop {
                let source = io.choose_turn_action(&run.view()?);
                match run.draw(source, events) {
                    Ok(card) => break (card, source),
                    Err(err) => reject(io, err)?,
                }
            }
        }
    };
    io.on_card_drawn(source, card);

    let swap = source == DrawSource::Discard || io.choose_swap_or_keep(&run.view()?, card);
    if swap {
        loop {
            let cell = io.choose_swap_target(&run.view()?, card);
            match run.swap_drawn(cell, events) {
                Ok(_) => break,
                Err(err) => reject(io, err)?,
            }
        }
    } else {
        run.discard_drawn(events)?;
    }
    io.on_grid_changed(&run.view()?);
    Ok(())
}

fn reject(io: &mut dyn Interaction, err: RunError) -> Result<(), RunError> {
    if !err.is_recoverable() {
        return Err(err);
    }
    warn!("rejected choice: {err}");
    io.on_rejected(&err);
    Ok(())
}
