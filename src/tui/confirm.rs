//! Confirmation workflow for destructive operations
//!
//! A single confirmation slot holding a deferred action. The flow moves
//! between idle, awaiting, and running. Confirmed actions run off the UI
//! thread and report back through a settle ticket; settlements whose
//! ticket no longer matches the running request are stale and dropped.

use std::fmt;
use std::sync::Arc;

/// Visual category of a confirmation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmKind {
    /// Destructive removal, the common case
    #[default]
    Delete,
    /// Risky but recoverable operation
    Warning,
    /// Informational acknowledgement
    Info,
}

/// Emphasis applied to the confirm button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmEmphasis {
    Plain,
    #[default]
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

/// The deferred operation behind a confirmation
///
/// Runs at most once per confirm press, off the UI thread. The closure
/// owns its own error reporting; the flow only reacts to Ok or Err.
pub type ConfirmAction = Arc<dyn Fn() -> Result<(), String> + Send + Sync>;

/// One confirmation request: what to show and what to run
#[derive(Clone)]
pub struct ConfirmOptions {
    /// Dialog title
    pub title: String,
    /// Explanatory text under the title
    pub description: String,
    /// Label on the confirm button
    pub confirm_label: String,
    /// Label on the cancel button
    pub cancel_label: String,
    /// Visual category
    pub kind: ConfirmKind,
    /// Confirm button emphasis
    pub emphasis: ConfirmEmphasis,
    action: Option<ConfirmAction>,
}

impl ConfirmOptions {
    /// Create a request with the default labels and styling
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            confirm_label: "Delete".to_string(),
            cancel_label: "Cancel".to_string(),
            kind: ConfirmKind::default(),
            emphasis: ConfirmEmphasis::default(),
            action: None,
        }
    }

    /// Set the confirm button label
    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    /// Set the cancel button label
    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    /// Set the visual category
    pub fn with_kind(mut self, kind: ConfirmKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the confirm button emphasis
    pub fn with_emphasis(mut self, emphasis: ConfirmEmphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    /// Attach the operation to run on confirm
    pub fn with_action(
        mut self,
        action: impl Fn() -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    /// The attached action, if any
    pub fn action(&self) -> Option<ConfirmAction> {
        self.action.clone()
    }
}

impl fmt::Debug for ConfirmOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmOptions")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("confirm_label", &self.confirm_label)
            .field("cancel_label", &self.cancel_label)
            .field("kind", &self.kind)
            .field("emphasis", &self.emphasis)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// Identifies one run of a confirmed action
///
/// Each confirm press allocates a fresh ticket; a settlement applies only
/// while its ticket is still the running one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionTicket(u64);

/// Where the confirmation slot currently stands
#[derive(Debug, Clone, Default)]
pub enum ConfirmState {
    /// No confirmation requested
    #[default]
    Idle,
    /// Waiting for the user to confirm or dismiss
    Awaiting { options: ConfirmOptions },
    /// The confirmed action is executing
    Running {
        options: ConfirmOptions,
        ticket: ActionTicket,
    },
}

/// The confirmation slot and its state transitions
#[derive(Debug, Default)]
pub struct ConfirmFlow {
    state: ConfirmState,
    next_ticket: u64,
}

impl ConfirmFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> &ConfirmState {
        &self.state
    }

    /// Whether the confirmation surface should be visible
    pub fn is_active(&self) -> bool {
        !matches!(self.state, ConfirmState::Idle)
    }

    /// Whether a confirmed action is currently executing
    pub fn is_pending(&self) -> bool {
        matches!(self.state, ConfirmState::Running { .. })
    }

    /// The options currently occupying the slot
    pub fn options(&self) -> Option<&ConfirmOptions> {
        match &self.state {
            ConfirmState::Idle => None,
            ConfirmState::Awaiting { options } => Some(options),
            ConfirmState::Running { options, .. } => Some(options),
        }
    }

    /// Put a request in the slot, replacing whatever was there
    ///
    /// A replaced request's action is never run. Replacing while an action
    /// executes leaves that action running; its settlement will no longer
    /// match and gets dropped.
    pub fn request(&mut self, options: ConfirmOptions) {
        self.state = ConfirmState::Awaiting { options };
    }

    /// Dismiss the awaiting request
    ///
    /// Does nothing when the slot is empty, and nothing while the action
    /// runs: a press mid-flight must not yank the dialog away.
    pub fn dismiss(&mut self) {
        if matches!(self.state, ConfirmState::Awaiting { .. }) {
            self.state = ConfirmState::Idle;
        }
    }

    /// Start the confirmed action
    ///
    /// Returns the ticket and the action for the caller to execute. Returns
    /// None when nothing awaits confirmation, when the request carries no
    /// action, or when a run is already in flight.
    pub fn begin_confirm(&mut self) -> Option<(ActionTicket, ConfirmAction)> {
        let ConfirmState::Awaiting { options } = &self.state else {
            return None;
        };
        let action = options.action()?;

        let ticket = ActionTicket(self.next_ticket);
        self.next_ticket += 1;

        let options = options.clone();
        self.state = ConfirmState::Running { options, ticket };
        Some((ticket, action))
    }

    /// Apply the outcome of a finished action
    ///
    /// Success closes the slot; failure returns it to awaiting with the
    /// same options so the user can retry or dismiss. The error reason is
    /// not surfaced here, the action reports its own failures. Returns
    /// false for a stale settlement, one whose ticket is not the running
    /// one because the request was replaced in the meantime.
    pub fn settle(&mut self, ticket: ActionTicket, outcome: Result<(), String>) -> bool {
        let ConfirmState::Running {
            options,
            ticket: running,
        } = &self.state
        else {
            return false;
        };
        if *running != ticket {
            return false;
        }

        match outcome {
            Ok(()) => {
                self.state = ConfirmState::Idle;
            }
            Err(_) => {
                let options = options.clone();
                self.state = ConfirmState::Awaiting { options };
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counted_options(title: &str, counter: Arc<AtomicUsize>) -> ConfirmOptions {
        ConfirmOptions::new(title, "irreversible").with_action(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    }

    #[test]
    fn test_default_labels_and_styling() {
        let options = ConfirmOptions::new("Delete Department", "Gone for good");
        assert_eq!(options.confirm_label, "Delete");
        assert_eq!(options.cancel_label, "Cancel");
        assert_eq!(options.kind, ConfirmKind::Delete);
        assert_eq!(options.emphasis, ConfirmEmphasis::Destructive);
        assert!(options.action().is_none());
    }

    #[test]
    fn test_request_fills_slot() {
        let mut flow = ConfirmFlow::new();
        assert!(!flow.is_active());

        flow.request(ConfirmOptions::new("Delete Asset", "No undo"));

        assert!(flow.is_active());
        assert!(!flow.is_pending());
        assert_eq!(flow.options().unwrap().title, "Delete Asset");
    }

    #[test]
    fn test_dismiss_when_idle_does_nothing() {
        let mut flow = ConfirmFlow::new();
        flow.dismiss();
        assert!(!flow.is_active());
    }

    #[test]
    fn test_dismiss_clears_awaiting_request() {
        let mut flow = ConfirmFlow::new();
        flow.request(ConfirmOptions::new("Delete Asset", "No undo"));

        flow.dismiss();

        assert!(!flow.is_active());
        assert!(flow.options().is_none());
    }

    #[test]
    fn test_confirm_without_action_does_nothing() {
        let mut flow = ConfirmFlow::new();
        flow.request(ConfirmOptions::new("Heads up", "Nothing to run"));

        assert!(flow.begin_confirm().is_none());

        // The dialog stays up
        assert!(flow.is_active());
        assert!(!flow.is_pending());
    }

    #[test]
    fn test_successful_run_closes_slot() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut flow = ConfirmFlow::new();
        flow.request(
            ConfirmOptions::new(
                "Delete Department",
                "Are you sure you want to delete \"Marketing\"?",
            )
            .with_action({
                let counter = Arc::clone(&counter);
                move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            }),
        );

        let (ticket, action) = flow.begin_confirm().unwrap();
        assert!(flow.is_pending());

        let outcome = action();
        assert!(flow.settle(ticket, outcome));

        assert!(!flow.is_active());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_run_returns_to_awaiting() {
        let mut flow = ConfirmFlow::new();
        flow.request(
            ConfirmOptions::new("Delete Asset", "Removes the asset")
                .with_action(|| Err("network error".to_string())),
        );

        let (ticket, action) = flow.begin_confirm().unwrap();
        let outcome = action();
        assert!(flow.settle(ticket, outcome));

        // Same request, ready to retry; not closed, not pending
        assert!(flow.is_active());
        assert!(!flow.is_pending());
        assert_eq!(flow.options().unwrap().title, "Delete Asset");
    }

    #[test]
    fn test_dismiss_blocked_while_running() {
        let mut flow = ConfirmFlow::new();
        flow.request(ConfirmOptions::new("Delete", "gone").with_action(|| Ok(())));
        let (ticket, _action) = flow.begin_confirm().unwrap();

        flow.dismiss();

        assert!(flow.is_pending());
        assert!(flow.settle(ticket, Ok(())));
        assert!(!flow.is_active());
    }

    #[test]
    fn test_second_request_replaces_first() {
        let first_runs = Arc::new(AtomicUsize::new(0));
        let second_runs = Arc::new(AtomicUsize::new(0));

        let mut flow = ConfirmFlow::new();
        flow.request(counted_options("First", Arc::clone(&first_runs)));
        flow.request(counted_options("Second", Arc::clone(&second_runs)));

        assert_eq!(flow.options().unwrap().title, "Second");

        let (ticket, action) = flow.begin_confirm().unwrap();
        let outcome = action();
        flow.settle(ticket, outcome);

        // Only the surviving request's action ever ran
        assert_eq!(first_runs.load(Ordering::SeqCst), 0);
        assert_eq!(second_runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_begin_confirm_twice_yields_once() {
        let mut flow = ConfirmFlow::new();
        flow.request(ConfirmOptions::new("Delete", "gone").with_action(|| Ok(())));

        assert!(flow.begin_confirm().is_some());
        assert!(flow.begin_confirm().is_none());
    }

    #[test]
    fn test_stale_settlement_dropped_after_replacement() {
        let mut flow = ConfirmFlow::new();
        flow.request(ConfirmOptions::new("First", "slow").with_action(|| Ok(())));
        let (stale_ticket, _action) = flow.begin_confirm().unwrap();

        // A new request lands while the first action is still in flight
        flow.request(ConfirmOptions::new("Second", "fresh").with_action(|| Ok(())));

        // The first run finally settles; it must not touch the new request
        assert!(!flow.settle(stale_ticket, Ok(())));
        assert!(flow.is_active());
        assert!(!flow.is_pending());
        assert_eq!(flow.options().unwrap().title, "Second");

        // The new request still confirms normally with a fresh ticket
        let (ticket, action) = flow.begin_confirm().unwrap();
        assert_ne!(ticket, stale_ticket);
        let outcome = action();
        assert!(flow.settle(ticket, outcome));
        assert!(!flow.is_active());
    }

    #[test]
    fn test_stale_failure_leaves_replacement_untouched() {
        let mut flow = ConfirmFlow::new();
        flow.request(ConfirmOptions::new("First", "slow").with_action(|| Ok(())));
        let (stale_ticket, _action) = flow.begin_confirm().unwrap();

        flow.request(ConfirmOptions::new("Second", "fresh").with_action(|| Ok(())));

        // The first run fails late; the failure must not re-arm the slot
        assert!(!flow.settle(stale_ticket, Err("network error".to_string())));
        assert!(!flow.is_pending());
        assert_eq!(flow.options().unwrap().title, "Second");

        // Nor may it interfere once the replacement itself is running
        let (ticket, _action) = flow.begin_confirm().unwrap();
        assert!(!flow.settle(stale_ticket, Err("network error".to_string())));
        assert!(flow.is_pending());
        assert!(flow.settle(ticket, Ok(())));
        assert!(!flow.is_active());
    }

    #[test]
    fn test_settle_when_idle_is_dropped() {
        let mut flow = ConfirmFlow::new();
        flow.request(ConfirmOptions::new("Delete", "gone").with_action(|| Ok(())));
        let (ticket, _action) = flow.begin_confirm().unwrap();

        assert!(flow.settle(ticket, Ok(())));
        // A duplicate settlement for the same ticket has nothing to apply to
        assert!(!flow.settle(ticket, Ok(())));
        assert!(!flow.is_active());
    }

    #[test]
    fn test_failure_keeps_labels_and_emphasis() {
        let mut flow = ConfirmFlow::new();
        flow.request(
            ConfirmOptions::new("Remove Record", "Removes the maintenance entry")
                .with_confirm_label("Remove")
                .with_cancel_label("Keep")
                .with_kind(ConfirmKind::Warning)
                .with_emphasis(ConfirmEmphasis::Outline)
                .with_action(|| Err("disk full".to_string())),
        );

        let (ticket, action) = flow.begin_confirm().unwrap();
        let outcome = action();
        flow.settle(ticket, outcome);

        let options = flow.options().unwrap();
        assert_eq!(options.confirm_label, "Remove");
        assert_eq!(options.cancel_label, "Keep");
        assert_eq!(options.kind, ConfirmKind::Warning);
        assert_eq!(options.emphasis, ConfirmEmphasis::Outline);
    }
}
