//! Entry, cash-out and terminal round transitions
//!
//! Invariant maintained here: the pot is nonzero exactly while a round is
//! active, and it is zeroed in the same transition that deactivates the
//! round (credited on victory/cash-out, forfeited on defeat).

use crate::consts::*;
use crate::format_money;

use super::state::{CashOut, GameState, Overlay};

pub const INTRO_TITLE: &str = "Pot Shot Arena";
pub const INTRO_MESSAGE: &str = "Drop $1 to enter the arena and fight the house turrets for the pot. \
Land your shots, stay off the barrier, and either clear the field or hold G to cash out with the money.";

impl GameState {
    /// Entry preconditions: sufficient wallet and no round in flight. The
    /// insert control is also disabled by the driver while this is false.
    #[inline]
    pub fn can_enter(&self) -> bool {
        self.wallet >= ENTRY_COST && !self.active
    }

    /// Debit the entry fee, seed the pot with the turret contributions and
    /// start a fresh round. A no-op when preconditions fail.
    pub fn insert_and_spawn(&mut self, now_ms: f64) {
        if !self.can_enter() {
            return;
        }
        self.wallet -= ENTRY_COST;
        self.pot = ENTRY_COST + BOT_COUNT as f64 * BOT_CONTRIBUTION;
        self.overlay = None;
        self.active = true;
        self.game_over = false;
        self.reset_round(now_ms);
        log::info!(
            "round started: pot {}, wallet {}",
            format_money(self.pot),
            format_money(self.wallet)
        );
    }

    /// Voluntary round end: the hold completed, the pot goes to the wallet.
    pub(crate) fn complete_cash_out(&mut self) {
        let winnings = self.pot;
        self.wallet += winnings;
        self.pot = 0.0;
        self.active = false;
        self.game_over = true;
        self.cash_out = CashOut::Idle;
        self.bot_bullets.clear();
        self.barrier_damage_buffer = 0.0;
        log::info!("cash out complete: {}", format_money(winnings));
        self.overlay = Some(Overlay {
            title: "Cash Out Complete".into(),
            message: format!("You extracted {} from the arena.", format_money(winnings)),
            show_list: false,
        });
    }

    /// Health exhausted: the pot is forfeited.
    pub(crate) fn handle_defeat(&mut self) {
        let loss = self.pot;
        self.pot = 0.0;
        self.active = false;
        self.game_over = true;
        self.bot_bullets.clear();
        self.barrier_damage_buffer = 0.0;
        log::info!("defeat: forfeited {}", format_money(loss));
        let message = if loss > 0.0 {
            format!("You were eliminated and lost the {} pot.", format_money(loss))
        } else {
            "You were eliminated.".into()
        };
        self.overlay = Some(Overlay {
            title: "Defeat".into(),
            message,
            show_list: false,
        });
    }

    /// Last turret destroyed: the pot goes to the wallet.
    pub(crate) fn handle_victory(&mut self) {
        let winnings = self.pot;
        self.wallet += winnings;
        self.pot = 0.0;
        self.active = false;
        self.game_over = true;
        log::info!("victory: collected {}", format_money(winnings));
        self.overlay = Some(Overlay {
            title: "Victory!".into(),
            message: format!(
                "You cleared the arena and collected {}.",
                format_money(winnings)
            ),
            show_list: false,
        });
    }

    /// Pre-round modal with the instructional list
    pub fn show_intro_overlay(&mut self) {
        self.overlay = Some(Overlay {
            title: INTRO_TITLE.into(),
            message: INTRO_MESSAGE.into(),
            show_list: true,
        });
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::{VIEW_HEIGHT, VIEW_WIDTH};

    fn fresh() -> GameState {
        GameState::new(42, Vec2::new(VIEW_WIDTH, VIEW_HEIGHT))
    }

    #[test]
    fn test_entry_arithmetic() {
        let mut state = fresh();
        assert_eq!(state.wallet, 10.0);
        state.insert_and_spawn(0.0);
        assert_eq!(state.wallet, 9.0);
        assert_eq!(state.pot, 4.0);
        assert!(state.active);
        assert!(state.overlay.is_none());
    }

    #[test]
    fn test_entry_is_noop_while_active() {
        let mut state = fresh();
        state.insert_and_spawn(0.0);
        let (wallet, pot) = (state.wallet, state.pot);
        state.insert_and_spawn(1.0);
        assert_eq!(state.wallet, wallet);
        assert_eq!(state.pot, pot);
    }

    #[test]
    fn test_entry_is_noop_when_broke() {
        let mut state = fresh();
        state.wallet = 0.5;
        state.insert_and_spawn(0.0);
        assert!(!state.active);
        assert_eq!(state.pot, 0.0);
        assert_eq!(state.wallet, 0.5);
    }

    #[test]
    fn test_defeat_forfeits_pot() {
        let mut state = fresh();
        state.insert_and_spawn(0.0);
        state.handle_defeat();
        assert!(!state.active);
        assert_eq!(state.pot, 0.0);
        assert_eq!(state.wallet, 9.0);
        let overlay = state.overlay.expect("defeat overlay");
        assert!(overlay.message.contains("$4.00"));
    }

    #[test]
    fn test_defeat_with_empty_pot_has_plain_message() {
        let mut state = fresh();
        state.insert_and_spawn(0.0);
        state.pot = 0.0;
        state.handle_defeat();
        let overlay = state.overlay.expect("defeat overlay");
        assert!(!overlay.message.contains('$'));
    }

    #[test]
    fn test_victory_credits_pot() {
        let mut state = fresh();
        state.insert_and_spawn(0.0);
        state.handle_victory();
        assert_eq!(state.wallet, 13.0);
        assert_eq!(state.pot, 0.0);
        assert!(!state.active);
        let overlay = state.overlay.expect("victory overlay");
        assert!(overlay.message.contains("$4.00"));
    }

    #[test]
    fn test_cash_out_credits_pot_and_clears_turret_fire() {
        let mut state = fresh();
        state.insert_and_spawn(0.0);
        state
            .bot_bullets
            .push(crate::sim::BotBullet::new(Vec2::ZERO, Vec2::X));
        state.complete_cash_out();
        assert_eq!(state.wallet, 13.0);
        assert_eq!(state.pot, 0.0);
        assert!(state.bot_bullets.is_empty());
        let overlay = state.overlay.expect("cash out overlay");
        assert!(overlay.message.contains("$4.00"));
    }

    #[test]
    fn test_reentry_after_round_end() {
        let mut state = fresh();
        state.insert_and_spawn(0.0);
        state.handle_victory();
        assert!(state.can_enter());
        state.insert_and_spawn(10_000.0);
        assert_eq!(state.wallet, 12.0);
        assert_eq!(state.pot, 4.0);
        assert_eq!(state.bots.len(), crate::consts::BOT_COUNT);
    }
}
