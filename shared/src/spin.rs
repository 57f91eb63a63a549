use serde::{Deserialize, Serialize};

/// Where the widget currently sits in its one-shot interaction loop.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    FormOpen,
    Spinning,
    Resolved,
}

/// The state machine around a single play. The prize is decided the moment
/// the form is submitted; the spin animation only dramatizes it. Once a
/// play resolves, `has_played` locks the flow for this browser profile.
///
/// Transition methods return whether they fired, so repeated triggers
/// (double clicks, clicks mid-spin, clicks after playing) are ignored
/// without any caller-side bookkeeping.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SpinFlow {
    pub phase: SpinPhase,
    pub has_played: bool,
}

impl SpinFlow {
    pub fn new(has_played: bool) -> Self {
        Self { phase: SpinPhase::Idle, has_played }
    }

    /// Spin request from the visitor. Opens the contact form unless the
    /// profile has already played or a play is in progress.
    pub fn request_spin(&mut self) -> bool {
        if self.has_played || self.phase != SpinPhase::Idle {
            return false;
        }
        self.phase = SpinPhase::FormOpen;
        true
    }

    /// Visitor backed out of the form without spinning.
    pub fn cancel_form(&mut self) -> bool {
        if self.phase != SpinPhase::FormOpen {
            return false;
        }
        self.phase = SpinPhase::Idle;
        true
    }

    /// Contact details validated: the caller selects the prize and starts
    /// the animation at this instant.
    pub fn begin_spin(&mut self) -> bool {
        if self.phase != SpinPhase::FormOpen {
            return false;
        }
        self.phase = SpinPhase::Spinning;
        true
    }

    /// Animation timer elapsed: the lead is recorded and the profile is
    /// locked at this transition.
    pub fn resolve(&mut self) -> bool {
        if self.phase != SpinPhase::Spinning {
            return false;
        }
        self.phase = SpinPhase::Resolved;
        self.has_played = true;
        true
    }

    /// Win modal dismissed; the flow returns to an idle that no longer
    /// accepts spin requests.
    pub fn dismiss(&mut self) -> bool {
        if self.phase != SpinPhase::Resolved {
            return false;
        }
        self.phase = SpinPhase::Idle;
        true
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_play_runs_once() {
        let mut flow = SpinFlow::new(false);
        assert!(flow.request_spin());
        assert!(flow.begin_spin());
        assert!(flow.is_spinning());
        assert!(flow.resolve());
        assert!(flow.has_played);
        assert!(flow.dismiss());
        assert_eq!(flow.phase, SpinPhase::Idle);
    }

    #[test]
    fn test_locked_flow_ignores_spin_requests() {
        let mut flow = SpinFlow::new(true);
        for _ in 0..3 {
            assert!(!flow.request_spin());
            assert_eq!(flow.phase, SpinPhase::Idle);
        }
    }

    #[test]
    fn test_played_profile_stays_locked_after_dismiss() {
        let mut flow = SpinFlow::new(false);
        flow.request_spin();
        flow.begin_spin();
        flow.resolve();
        flow.dismiss();
        assert!(!flow.request_spin());
    }

    #[test]
    fn test_triggers_out_of_order_do_nothing() {
        let mut flow = SpinFlow::new(false);
        assert!(!flow.begin_spin());
        assert!(!flow.resolve());
        assert!(!flow.dismiss());
        assert_eq!(flow, SpinFlow::new(false));

        flow.request_spin();
        flow.begin_spin();
        // Mid-spin, another spin request must not restart the flow.
        assert!(!flow.request_spin());
        assert!(flow.is_spinning());
    }

    #[test]
    fn test_cancel_returns_to_idle_without_locking() {
        let mut flow = SpinFlow::new(false);
        flow.request_spin();
        assert!(flow.cancel_form());
        assert!(!flow.has_played);
        assert!(flow.request_spin(), "cancelling keeps the spin available");
    }
}
