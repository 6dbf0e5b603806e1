use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{field::display, Span};

use crate::configuration::FormSettings;
use crate::domain::{FormFields, FormSubmission, SubmissionStatus};
use crate::form_view::{FormView, StatusKind};
use crate::scheduler::{self, CancelHandle};
use crate::submission_client::{HttpSubmissionClient, SubmissionTransport};

struct ControllerState {
    status: SubmissionStatus,
    view: FormView,
    pending_hide: Option<CancelHandle>,
    // Bumped on every displayed message so a late auto-hide cannot hide a newer one.
    display_seq: u64,
}

impl ControllerState {
    fn cancel_pending_hide(&mut self) {
        if let Some(handle) = self.pending_hide.take() {
            handle.cancel();
        }
    }
}

fn lock(state: &Mutex<ControllerState>) -> MutexGuard<'_, ControllerState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Restores the submit control when a send attempt ends, however it ends.
struct SendingGuard {
    state: Arc<Mutex<ControllerState>>,
    original_label: Option<String>,
}

impl Drop for SendingGuard {
    fn drop(&mut self) {
        let mut state = lock(&self.state);
        if let Some(label) = self.original_label.take() {
            state.view.submit_control.restore(label);
        }
        if state.status.is_sending() {
            state.status = SubmissionStatus::Idle;
        }
    }
}

/// Drives one contact form from submit intent to a rendered outcome.
///
/// Clones share the same form, so a clone can be handed to whatever delivers
/// submit events while another one observes the view.
pub struct FormController<T> {
    transport: Arc<T>,
    settings: Arc<FormSettings>,
    state: Arc<Mutex<ControllerState>>,
}

impl<T> Clone for FormController<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            settings: Arc::clone(&self.settings),
            state: Arc::clone(&self.state),
        }
    }
}

impl FormController<HttpSubmissionClient> {
    pub fn from_settings(
        settings: FormSettings,
        submit_label: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let client = settings.client()?;
        Ok(Self::new(client, settings, submit_label))
    }
}

impl<T> FormController<T>
where
    T: SubmissionTransport + 'static,
{
    pub fn new(transport: T, settings: FormSettings, submit_label: impl Into<String>) -> Self {
        Self {
            transport: Arc::new(transport),
            settings: Arc::new(settings),
            state: Arc::new(Mutex::new(ControllerState {
                status: SubmissionStatus::Idle,
                view: FormView::new(submit_label),
                pending_hide: None,
                display_seq: 0,
            })),
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        lock(&self.state).status.clone()
    }

    /// A snapshot of the form as the user currently sees it.
    pub fn view(&self) -> FormView {
        lock(&self.state).view.clone()
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    /// Types `value` into the field `name`.
    pub fn fill(&self, name: &str, value: &str) {
        lock(&self.state).view.fields.insert(name, value);
    }

    /// Submits whatever is currently typed into the form.
    pub async fn submit(&self) -> SubmissionStatus {
        let fields = lock(&self.state).view.fields.clone();
        self.on_submit_intent(fields).await
    }

    /// Handles the form's `submit` event. The browser's default navigation is
    /// always pre-empted; nothing here navigates.
    #[tracing::instrument(
        name = "Handling contact form submission",
        skip_all,
        fields(
            form_id = %self.settings.form_id,
            attempt_id = tracing::field::Empty,
            contact_email = tracing::field::Empty,
        )
    )]
    pub async fn on_submit_intent(&self, raw_fields: FormFields) -> SubmissionStatus {
        let submission = {
            let mut state = lock(&self.state);
            if state.status.is_sending() || !state.view.submit_control.enabled {
                tracing::debug!("A submission is already in flight. Ignoring the submit intent.");
                return state.status.clone();
            }
            state.cancel_pending_hide();
            state.view.status_region.hide();
            state.status = SubmissionStatus::Idle;
            state.view.fields = raw_fields.clone();
            let submission = FormSubmission::new(raw_fields);

            let span = Span::current();
            span.record("attempt_id", &display(submission.id));
            if let Some(email) = submission.fields().get("email") {
                span.record("contact_email", &display(email));
            }

            // Rejected under the same lock as the in-flight check, so a
            // concurrent send cannot be overwritten with this failure.
            if let Err(e) = submission.validated() {
                tracing::warn!("The form was not sent: {e}");
                let reason = e.to_string();
                state.status = SubmissionStatus::Failed(reason.clone());
                self.show_status(&mut state, &reason, StatusKind::Error);
                return state.status.clone();
            }
            submission
        };

        self.submit_to_endpoint(&submission).await
    }

    /// Sends the full payload of `submission` and renders the outcome. The
    /// submit control is disabled for the duration and restored on every exit.
    #[tracing::instrument(name = "Submitting contact form", skip_all, fields(attempt_id = %submission.id))]
    pub async fn submit_to_endpoint(&self, submission: &FormSubmission) -> SubmissionStatus {
        let _guard = match self.begin_sending() {
            Some(guard) => guard,
            None => return self.status(),
        };

        match self.transport.submit(submission.fields()).await {
            Ok(()) => {
                tracing::info!("The contact form was accepted by the endpoint.");
                let mut state = lock(&self.state);
                state.status = SubmissionStatus::Succeeded;
                state.view.reset();
                self.show_status(&mut state, &self.settings.success_message, StatusKind::Success);
            }
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, "Failed to submit the contact form. {e}");
                let reason = e.user_message(&self.settings.fallback_error_message);
                let mut state = lock(&self.state);
                state.status = SubmissionStatus::Failed(reason.clone());
                self.show_status(&mut state, &reason, StatusKind::Error);
            }
        }
        self.status()
    }

    /// Shows `message` in the status region. Success messages hide themselves
    /// after the configured delay; errors stay until the next submit intent.
    pub fn display_status(&self, message: &str, kind: StatusKind) {
        let mut state = lock(&self.state);
        self.show_status(&mut state, message, kind);
    }

    fn show_status(&self, state: &mut ControllerState, message: &str, kind: StatusKind) {
        state.cancel_pending_hide();
        state.display_seq += 1;
        state.view.status_region.show(message, kind);

        if kind != StatusKind::Success {
            return;
        }
        let seq = state.display_seq;
        let shared = Arc::clone(&self.state);
        let scheduled = scheduler::schedule(self.settings.auto_hide_delay(), move || {
            let mut state = lock(&shared);
            if state.display_seq != seq {
                return;
            }
            state.view.status_region.hide();
            state.pending_hide = None;
            if state.status == SubmissionStatus::Succeeded {
                state.status = SubmissionStatus::Idle;
            }
        });
        match scheduled {
            Ok(handle) => state.pending_hide = Some(handle),
            Err(e) => tracing::warn!("No runtime to hide the status message later, leaving it shown. {e}"),
        }
    }

    fn begin_sending(&self) -> Option<SendingGuard> {
        let mut state = lock(&self.state);
        if state.status.is_sending() {
            return None;
        }
        state.status = SubmissionStatus::Sending;
        let original_label = state
            .view
            .submit_control
            .disable(&self.settings.sending_label);
        Some(SendingGuard {
            state: Arc::clone(&self.state),
            original_label: Some(original_label),
        })
    }
}
