use crate::configuration::{Settings, SiteSettings};
use crate::controller::FormController;
use crate::site::{header_shadow, HeaderShadow, NavMenu};
use crate::submission_client::HttpSubmissionClient;

pub const DEFAULT_SUBMIT_LABEL: &str = "Send Message";

/// The contact page with everything wired up from configuration.
pub struct ContactPage {
    pub contact_form: FormController<HttpSubmissionClient>,
    pub nav_menu: NavMenu,
    site: SiteSettings,
}

impl ContactPage {
    pub fn build(configuration: Settings) -> anyhow::Result<Self> {
        Self::build_with_label(configuration, DEFAULT_SUBMIT_LABEL)
    }

    pub fn build_with_label(configuration: Settings, submit_label: &str) -> anyhow::Result<Self> {
        let contact_form = FormController::from_settings(configuration.form, submit_label)?;
        tracing::info!(
            form_id = %contact_form.settings().form_id,
            endpoint = %contact_form.settings().endpoint,
            "Contact page ready."
        );
        Ok(Self {
            contact_form,
            nav_menu: NavMenu::new(),
            site: configuration.site,
        })
    }

    pub fn header_shadow(&self, scroll_y: f64) -> HeaderShadow {
        header_shadow(scroll_y, self.site.header_shadow_threshold)
    }
}
