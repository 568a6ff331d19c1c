use crate::{AutoPlayer, AutoplayConfig, AutoplayError, AutoplayReport};
use cosmic_golf_core::{play_run, EventBus, GameConfig, RunState};

/// Plays a whole run with the greedy player, seeding the deck from `autoplay.seed`.
pub fn run_autoplay(
    config: GameConfig,
    autoplay: AutoplayConfig,
) -> Result<AutoplayReport, AutoplayError> {
    let mut run = RunState::new(config, autoplay.seed);
    autoplay_run(&mut run, autoplay)
}

/// Plays `run` to its outcome. The run may carry any shuffle.
pub fn autoplay_run(
    run: &mut RunState,
    autoplay: AutoplayConfig,
) -> Result<AutoplayReport, AutoplayError> {
    let mut player = AutoPlayer::new(autoplay);
    let mut events = EventBus::default();
    let outcome = play_run(run, &mut player, &mut events)?;
    log::info!(
        "autoplay finished after {} decisions and {} events: {outcome:?}",
        player.trace().len(),
        events.events().len()
    );
    let (trace, holes) = player.into_parts();
    Ok(AutoplayReport {
        seed: autoplay.seed,
        outcome,
        holes_cleared: holes.iter().filter(|hole| hole.success).count(),
        money: run.player.money,
        caddies: run
            .player
            .caddies
            .iter()
            .map(|caddie| caddie.name.clone())
            .collect(),
        holes,
        trace,
    })
}
