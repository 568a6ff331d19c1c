use super::*;
use crate::*;

impl RunState {
    pub(super) fn invoke_setup_hooks(&mut self, events: &mut EventBus) {
        let caddies = self.player.caddies.clone();
        for caddie in &caddies {
            let snapshot = self.hook_snapshot();
            caddie.on_setup(&mut self.player);
            self.note_trigger(caddie, HookPoint::Setup, snapshot, events);
        }
    }

    pub(super) fn invoke_discard_hooks(&mut self, events: &mut EventBus) {
        let caddies = self.player.caddies.clone();
        for caddie in &caddies {
            let snapshot = self.hook_snapshot();
            caddie.on_discard_draw(&mut self.player);
            self.note_trigger(caddie, HookPoint::DiscardDraw, snapshot, events);
        }
    }

    fn hook_snapshot(&self) -> (i64, u8) {
        (self.player.money, self.player.extra_reveals)
    }

    fn note_trigger(
        &self,
        caddie: &Caddie,
        hook: HookPoint,
        (money, reveals): (i64, u8),
        events: &mut EventBus,
    ) {
        let money_delta = self.player.money - money;
        let reveal_delta = i64::from(self.player.extra_reveals) - i64::from(reveals);
        if money_delta == 0 && reveal_delta == 0 {
            return;
        }
        log::debug!(
            "{} fired on {hook:?}: money {money_delta:+}, reveals {reveal_delta:+}",
            caddie.name
        );
        events.push(Event::CaddieTriggered {
            name: caddie.name.clone(),
            hook,
            money_delta,
            reveal_delta,
        });
    }
}
