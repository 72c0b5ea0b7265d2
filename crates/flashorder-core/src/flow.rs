//! Order flow controller
//!
//! [`OrderFlow`] owns everything the order modal needs: which package is
//! selected, whether the dialog is visible, the form fields, the inline
//! validation error, the submit control and the outcome notifications.
//!
//! ## Submission lifecycle
//!
//! ```text
//! prepare_submission()   validate, disable submit control, mark pending
//!         │
//!   submitter.submit()   async, no borrow of the flow held
//!         │
//! finish_submission()    restore submit control, push notification,
//!                        close on success / keep dialog on failure
//! ```
//!
//! When the pending task is dropped before it finishes, `abort_submission`
//! restores the submit control instead. [`SubmitGuard`] wires that up for
//! callers that hold the flow by `&mut`.
//!
//! ## Timers
//!
//! Inline errors and success overlays expire on their own. The flow only
//! records deadlines; a driver sleeps until [`OrderFlow::next_deadline`]
//! and then calls [`OrderFlow::expire_due`].

use std::ops::{Deref, DerefMut};

use tokio::time::Instant;

use crate::catalog::{Catalog, Package, PackageId, PackageSummary};
use crate::config::FlowConfig;
use crate::error::{FlowError, SubmissionError};
use crate::notification::{NotificationId, NotificationStack};
use crate::order::{OrderForm, OrderSubmission};
use crate::submission::{OrderReceipt, OrderSubmitter};

/// Ways the user can dismiss the order dialog.
///
/// They all lead to the same state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    CancelButton,
    Overlay,
    Escape,
}

/// Label and enabled state of the form's submit button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: &'static str,
    pub enabled: bool,
}

impl SubmitControl {
    pub const IDLE_LABEL: &'static str = "Complete Order";
    pub const PROCESSING_LABEL: &'static str = "Processing...";

    pub const fn idle() -> Self {
        Self {
            label: Self::IDLE_LABEL,
            enabled: true,
        }
    }

    pub const fn processing() -> Self {
        Self {
            label: Self::PROCESSING_LABEL,
            enabled: false,
        }
    }

    /// Whether the loading indicator should be shown
    pub fn is_busy(&self) -> bool {
        !self.enabled
    }
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::idle()
    }
}

/// The single field-level error shown under the modal header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineError {
    /// Increases with every error shown; used to ignore stale dismiss timers
    pub serial: u64,
    pub message: String,
}

/// Terminal result of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Confirmed {
        receipt: OrderReceipt,
        notification: NotificationId,
    },
    Failed {
        error: SubmissionError,
        notification: NotificationId,
    },
}

impl SubmitOutcome {
    pub fn notification(&self) -> NotificationId {
        match self {
            SubmitOutcome::Confirmed { notification, .. }
            | SubmitOutcome::Failed { notification, .. } => *notification,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, SubmitOutcome::Confirmed { .. })
    }
}

/// State of the package order modal and its submission
#[derive(Debug, Clone)]
pub struct OrderFlow {
    catalog: Catalog,
    config: FlowConfig,
    visible: bool,
    scroll_locked: bool,
    selected: Option<PackageId>,
    form: OrderForm,
    inline_error: Option<InlineError>,
    inline_error_expires: Option<Instant>,
    error_serial: u64,
    submit: SubmitControl,
    /// Package of the submission in flight
    pending: Option<PackageId>,
    notifications: NotificationStack,
}

impl OrderFlow {
    pub fn new(config: FlowConfig) -> Self {
        Self::with_catalog(Catalog::standard(), config)
    }

    pub fn with_catalog(catalog: Catalog, config: FlowConfig) -> Self {
        Self {
            catalog,
            config,
            visible: false,
            scroll_locked: false,
            selected: None,
            form: OrderForm::default(),
            inline_error: None,
            inline_error_expires: None,
            error_serial: 0,
            submit: SubmitControl::idle(),
            pending: None,
            notifications: NotificationStack::new(),
        }
    }

    // ---- accessors -------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// Whether background page scrolling is suppressed
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn selected(&self) -> Option<PackageId> {
        self.selected
    }

    pub fn selected_package(&self) -> Option<&Package> {
        self.selected.and_then(|id| self.catalog.package(id))
    }

    /// Summary of the selected package for the modal header
    pub fn summary(&self) -> Option<PackageSummary> {
        self.selected_package().map(Package::summary)
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut OrderForm {
        &mut self.form
    }

    /// Update a form field by its markup name
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.form.set_field(name, value);
    }

    pub fn inline_error(&self) -> Option<&InlineError> {
        self.inline_error.as_ref()
    }

    pub fn submit_control(&self) -> SubmitControl {
        self.submit
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn notifications(&self) -> &NotificationStack {
        &self.notifications
    }

    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    // ---- modal lifecycle -------------------------------------------------

    /// Open the dialog for `package_id`.
    ///
    /// Unknown identifiers are ignored and leave every piece of state as it
    /// was. Returns whether the dialog was opened.
    pub fn open(&mut self, package_id: &str) -> bool {
        let Some(package) = self.catalog.get(package_id) else {
            tracing::warn!(package_id, "Ignoring unknown package");
            return false;
        };
        let id = package.id;

        tracing::debug!(package = %id, "Opening order dialog");
        self.selected = Some(id);
        self.visible = true;
        self.scroll_locked = true;
        true
    }

    /// Hide the dialog, restore scrolling and clear the form
    pub fn close(&mut self, trigger: CloseTrigger) {
        tracing::debug!(?trigger, "Closing order dialog");
        self.hide();
    }

    /// Keyboard handling while the page has focus.
    ///
    /// Escape closes an open dialog. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.visible {
            self.close(CloseTrigger::Escape);
            return true;
        }
        false
    }

    fn hide(&mut self) {
        self.visible = false;
        self.scroll_locked = false;
        self.selected = None;
        self.form.reset();
        self.drop_inline_error();
    }

    // ---- inline errors ---------------------------------------------------

    /// Show `message` as the inline error, replacing any current one
    pub fn show_inline_error(&mut self, message: impl Into<String>) -> u64 {
        self.error_serial += 1;
        let serial = self.error_serial;
        self.inline_error = Some(InlineError {
            serial,
            message: message.into(),
        });
        self.inline_error_expires = Some(Instant::now() + self.config.inline_error_duration());
        serial
    }

    /// Dismiss the inline error if it is still the one tagged `serial`
    pub fn clear_inline_error(&mut self, serial: u64) -> bool {
        match &self.inline_error {
            Some(err) if err.serial == serial => {
                self.drop_inline_error();
                true
            }
            _ => false,
        }
    }

    fn drop_inline_error(&mut self) {
        self.inline_error = None;
        self.inline_error_expires = None;
    }

    // ---- timers ----------------------------------------------------------

    /// When the next inline error or overlay is due to disappear
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.inline_error_expires, self.notifications.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Remove everything whose deadline is at or before `now`.
    ///
    /// Returns whether any state changed.
    pub fn expire_due(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.inline_error_expires.is_some_and(|at| at <= now) {
            tracing::debug!("Inline error expired");
            self.drop_inline_error();
            changed = true;
        }
        for id in self.notifications.expire(now) {
            tracing::debug!(id, "Notification auto-dismissed");
            changed = true;
        }
        changed
    }

    /// Sleep until the next deadline and expire what is due.
    ///
    /// Returns `false` without waiting when nothing is scheduled.
    pub async fn expire_next(&mut self) -> bool {
        let Some(deadline) = self.next_deadline() else {
            return false;
        };
        tokio::time::sleep_until(deadline).await;
        self.expire_due(Instant::now())
    }

    // ---- submission ------------------------------------------------------

    /// Validate the form and mark a submission as in flight.
    ///
    /// On success the submit control is disabled and shows the processing
    /// label until [`finish_submission`](Self::finish_submission) or
    /// [`abort_submission`](Self::abort_submission) is called.
    pub fn prepare_submission(&mut self) -> Result<OrderSubmission, FlowError> {
        if self.pending.is_some() {
            return Err(FlowError::AlreadySubmitting);
        }
        let package = match self.selected {
            Some(id) if self.visible => id,
            _ => return Err(FlowError::NoSelection),
        };

        let order = match self.form.to_submission(package) {
            Ok(order) => order,
            Err(e) => {
                tracing::warn!(error = %e, "Order form rejected");
                self.show_inline_error(e.to_string());
                return Err(e.into());
            }
        };

        self.drop_inline_error();
        self.submit = SubmitControl::processing();
        self.pending = Some(package);
        tracing::info!(package = %package, "Submitting order");
        Ok(order)
    }

    /// Record the submitter's result.
    ///
    /// The submit control is restored before anything else. A confirmed
    /// order closes the dialog; a failed one leaves it open for correction.
    pub fn finish_submission(
        &mut self,
        result: Result<OrderReceipt, SubmissionError>,
    ) -> SubmitOutcome {
        self.submit = SubmitControl::idle();
        let pending = self.pending.take();

        match result {
            Ok(receipt) => {
                let package_id = pending.unwrap_or(receipt.package);
                let auto_dismiss = self.config.success_dismiss();
                let notification = match self.catalog.package(package_id) {
                    Some(package) => self.notifications.push_success(package, auto_dismiss),
                    None => self.notifications.push_error("Order confirmed for an unknown package"),
                };
                tracing::info!(package = %package_id, "Order confirmed");
                self.hide();
                SubmitOutcome::Confirmed {
                    receipt,
                    notification,
                }
            }
            Err(error) => {
                tracing::info!(%error, "Order failed");
                let notification = self.notifications.push_error(error.to_string());
                SubmitOutcome::Failed {
                    error,
                    notification,
                }
            }
        }
    }

    /// Restore the submit control without reporting an outcome
    pub fn abort_submission(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("Pending submission dropped");
        }
        self.submit = SubmitControl::idle();
    }

    /// Prepare a submission and return a guard that aborts it on drop
    pub fn begin_submission(&mut self) -> Result<SubmitGuard<'_>, FlowError> {
        let order = self.prepare_submission()?;
        Ok(SubmitGuard {
            flow: self,
            order,
            finished: false,
        })
    }

    /// Run one full submission against `submitter`
    pub async fn submit_with<S>(&mut self, submitter: &S) -> Result<SubmitOutcome, FlowError>
    where
        S: OrderSubmitter + ?Sized,
    {
        let guard = self.begin_submission()?;
        let result = submitter.submit(guard.order()).await;
        Ok(guard.finish(result))
    }
}

/// A prepared submission bound to its flow.
///
/// Dropping it without calling [`finish`](Self::finish) restores the submit
/// control, so every exit path leaves the form usable.
#[derive(Debug)]
pub struct SubmitGuard<'a> {
    flow: &'a mut OrderFlow,
    order: OrderSubmission,
    finished: bool,
}

impl SubmitGuard<'_> {
    pub fn order(&self) -> &OrderSubmission {
        &self.order
    }

    pub fn finish(mut self, result: Result<OrderReceipt, SubmissionError>) -> SubmitOutcome {
        self.finished = true;
        self.flow.finish_submission(result)
    }
}

impl Deref for SubmitGuard<'_> {
    type Target = OrderFlow;

    fn deref(&self) -> &OrderFlow {
        self.flow
    }
}

impl DerefMut for SubmitGuard<'_> {
    fn deref_mut(&mut self) -> &mut OrderFlow {
        self.flow
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.flow.abort_submission();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::ValidationError;
    use crate::order::{FIELD_EMAIL, FIELD_WALLET};

    const WALLET: &str = "0x1234567890123456789012345678901234567890";

    fn open_filled(id: &str) -> OrderFlow {
        let mut flow = OrderFlow::new(FlowConfig::default());
        assert!(flow.open(id));
        flow.set_field(FIELD_WALLET, WALLET);
        flow.set_field(FIELD_EMAIL, "user@example.com");
        flow
    }

    #[test]
    fn test_open_unknown_is_noop() {
        let mut flow = OrderFlow::new(FlowConfig::default());
        assert!(!flow.open("diamond"));
        assert!(!flow.is_open());
        assert!(!flow.is_scroll_locked());
        assert_eq!(flow.selected(), None);
    }

    #[test]
    fn test_open_unknown_keeps_current_selection() {
        let mut flow = open_filled("mega");
        assert!(!flow.open("diamond"));
        assert_eq!(flow.selected(), Some(PackageId::Mega));
        assert_eq!(flow.form().email, "user@example.com");
    }

    #[test]
    fn test_open_sets_summary_and_locks_scroll() {
        let mut flow = OrderFlow::new(FlowConfig::default());
        assert!(flow.open("mega"));
        assert!(flow.is_open());
        assert!(flow.is_scroll_locked());
        let summary = flow.summary().unwrap();
        assert_eq!(summary.name, "Mega Package");
        assert_eq!(summary.original_price.as_deref(), Some("$149"));
    }

    #[test]
    fn test_escape_only_when_open() {
        let mut flow = OrderFlow::new(FlowConfig::default());
        assert!(!flow.handle_key("Escape"));
        flow.open("basic");
        assert!(!flow.handle_key("Enter"));
        assert!(flow.is_open());
        assert!(flow.handle_key("Escape"));
        assert!(!flow.is_open());
    }

    #[test]
    fn test_validation_failure_sets_inline_error() {
        let mut flow = open_filled("basic");
        flow.set_field(FIELD_WALLET, "0x12");
        let err = flow.prepare_submission().unwrap_err();
        assert_eq!(err, FlowError::Invalid(ValidationError::InvalidWallet));
        assert_eq!(
            flow.inline_error().unwrap().message,
            "Please enter a valid ETH wallet address starting with 0x"
        );
        assert_eq!(flow.submit_control(), SubmitControl::idle());
        assert!(!flow.is_submitting());
    }

    #[test]
    fn test_new_inline_error_replaces_old_and_ignores_stale_clear() {
        let mut flow = OrderFlow::new(FlowConfig::default());
        let first = flow.show_inline_error("one");
        let second = flow.show_inline_error("two");
        assert!(!flow.clear_inline_error(first));
        assert_eq!(flow.inline_error().unwrap().message, "two");
        assert!(flow.clear_inline_error(second));
        assert!(flow.inline_error().is_none());
    }

    #[test]
    fn test_submit_without_selection() {
        let mut flow = OrderFlow::new(FlowConfig::default());
        assert_eq!(flow.prepare_submission(), Err(FlowError::NoSelection));
    }

    #[test]
    fn test_second_prepare_is_rejected() {
        let mut flow = open_filled("popular");
        flow.prepare_submission().unwrap();
        assert_eq!(flow.submit_control(), SubmitControl::processing());
        assert_eq!(flow.prepare_submission(), Err(FlowError::AlreadySubmitting));
    }

    #[test]
    fn test_success_closes_and_notifies() {
        let mut flow = open_filled("popular");
        flow.prepare_submission().unwrap();
        let outcome = flow.finish_submission(Ok(OrderReceipt::new(PackageId::Popular)));

        assert!(outcome.is_confirmed());
        assert!(!flow.is_open());
        assert!(flow.form().is_empty());
        assert_eq!(flow.submit_control(), SubmitControl::idle());
        let n = flow.notifications().get(outcome.notification()).unwrap();
        assert!(n.message.contains("Popular Package"));
    }

    #[test]
    fn test_failure_keeps_dialog_and_fields() {
        let mut flow = open_filled("popular");
        flow.prepare_submission().unwrap();
        let outcome = flow.finish_submission(Err(SubmissionError::Rejected("nope".into())));

        assert!(!outcome.is_confirmed());
        assert!(flow.is_open());
        assert_eq!(flow.form().wallet_address, WALLET);
        assert_eq!(flow.submit_control(), SubmitControl::idle());
        assert_eq!(flow.notifications().len(), 1);
    }

    #[test]
    fn test_dropped_guard_restores_control() {
        let mut flow = open_filled("basic");
        {
            let guard = flow.begin_submission().unwrap();
            assert!(guard.is_submitting());
        }
        assert!(!flow.is_submitting());
        assert_eq!(flow.submit_control(), SubmitControl::idle());
        assert!(flow.notifications().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_inline_error_expires_after_configured_duration() {
        let mut flow = open_filled("basic");
        flow.set_field(FIELD_WALLET, "");
        flow.prepare_submission().unwrap_err();

        tokio::time::advance(Duration::from_millis(2999)).await;
        assert!(!flow.expire_due(Instant::now()));
        assert!(flow.inline_error().is_some());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(flow.expire_due(Instant::now()));
        assert!(flow.inline_error().is_none());
        assert_eq!(flow.next_deadline(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_inline_error_outlives_older_deadline() {
        let mut flow = OrderFlow::new(FlowConfig::default());
        flow.show_inline_error("one");
        tokio::time::advance(Duration::from_millis(2000)).await;
        flow.show_inline_error("two");

        tokio::time::advance(Duration::from_millis(1000)).await;
        assert!(!flow.expire_due(Instant::now()));
        assert_eq!(flow.inline_error().unwrap().message, "two");

        assert!(flow.expire_next().await);
        assert!(flow.inline_error().is_none());
    }
}
