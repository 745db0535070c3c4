/// Minimal finite-state-machine container.
///
/// `S` is the state type (usually an enum). The machine tracks the current
/// state, the previous state, and how many simulation ticks it has spent in
/// the current state. **Transition logic is intentionally kept out of the
/// machine itself** — it lives in the system (or an `impl S` method) that
/// drives it.
///
/// # Usage
/// ```ignore
/// let mut fsm = StateMachine::new(MyState::Idle);
/// // Each tick:
/// if let Some(next) = fsm.state.next(&ctx) { fsm.go(next); }
/// fsm.tick();
/// ```
pub struct StateMachine<S: Clone> {
    pub state: S,
    pub previous: S,
    /// Ticks spent in the current state. Reset to 0 on each transition.
    pub ticks: u32,
    entered_this_tick: bool,
}

impl<S: Clone> StateMachine<S> {
    /// Create a new machine starting in `initial`.
    /// `just_entered()` returns `true` on the first tick.
    pub fn new(initial: S) -> Self {
        Self {
            previous: initial.clone(),
            state: initial,
            ticks: 0,
            entered_this_tick: true,
        }
    }

    /// Transition to `next` only if it is a **different variant** from the
    /// current state (compared by discriminant — no `PartialEq` required).
    /// Resets `ticks` to 0 and sets `just_entered()` for one tick.
    pub fn go(&mut self, next: S) {
        if std::mem::discriminant(&self.state) != std::mem::discriminant(&next) {
            self.previous = std::mem::replace(&mut self.state, next);
            self.ticks = 0;
            self.entered_this_tick = true;
        }
    }

    /// Like [`Self::go`], but **always** transitions even if the variant is
    /// the same. Use when the variant carries data that changes (e.g. a
    /// patrol leg restarting in the opposite direction).
    pub fn force_go(&mut self, next: S) {
        self.previous = std::mem::replace(&mut self.state, next);
        self.ticks = 0;
        self.entered_this_tick = true;
    }

    /// Advance the ticks-in-state counter and clear the `just_entered`
    /// flag. Call once per tick **after** processing transitions.
    pub fn tick(&mut self) {
        self.ticks += 1;
        self.entered_this_tick = false;
    }

    /// Returns `true` only on the first tick after entering this state.
    pub fn just_entered(&self) -> bool {
        self.entered_this_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    enum Phase {
        A,
        B(u32),
    }

    #[test]
    fn go_ignores_same_variant() {
        let mut fsm = StateMachine::new(Phase::B(1));
        fsm.tick();
        fsm.go(Phase::B(2));
        assert!(!fsm.just_entered());
        assert!(matches!(fsm.state, Phase::B(1)));
    }

    #[test]
    fn force_go_replaces_same_variant() {
        let mut fsm = StateMachine::new(Phase::B(1));
        fsm.tick();
        fsm.force_go(Phase::B(2));
        assert!(fsm.just_entered());
        assert!(matches!(fsm.state, Phase::B(2)));
        assert_eq!(fsm.ticks, 0);
    }

    #[test]
    fn tick_counts_and_clears_entry_flag() {
        let mut fsm = StateMachine::new(Phase::A);
        assert!(fsm.just_entered());
        fsm.tick();
        fsm.tick();
        assert!(!fsm.just_entered());
        assert_eq!(fsm.ticks, 2);
        fsm.go(Phase::B(0));
        assert_eq!(fsm.ticks, 0);
        assert!(matches!(fsm.previous, Phase::A));
    }
}
