use once_cell::sync::Lazy;
use wiremock::MockServer;
use ysn_site::configuration::{get_configuration, Settings};
use ysn_site::domain::FormFields;
use ysn_site::startup::ContactPage;
use ysn_site::telemetry::init_subscriber;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    let configuration = get_configuration().expect("Failed to read configuration.");

    let initialised = if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout,
            &configuration.telemetry,
        )
    } else {
        init_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink,
            &configuration.telemetry,
        )
    };
    initialised.expect("Failed to initialise tracing.");
});

pub struct TestPage {
    pub page: ContactPage,
    pub endpoint: MockServer,
}

impl TestPage {
    pub async fn received_bodies(&self) -> Vec<String> {
        self.endpoint
            .received_requests()
            .await
            .expect("Request recording is disabled.")
            .iter()
            .map(|r| String::from_utf8_lossy(&r.body).into_owned())
            .collect()
    }
}

pub fn valid_fields() -> FormFields {
    FormFields::new()
        .with("name", "Ada")
        .with("email", "ada@example.org")
        .with("status", "student")
        .with("message", "I would like to join the reading group.")
}

fn test_configuration(endpoint: String) -> Settings {
    let mut c = get_configuration().expect("Failed to read configuration.");
    c.form.endpoint = endpoint;
    c.form.timeout_millis = None;
    c.telemetry.enabled = false;
    c
}

pub async fn spawn_page() -> TestPage {
    Lazy::force(&TRACING);

    let endpoint = MockServer::start().await;
    let configuration = test_configuration(format!("{}/f/contact", endpoint.uri()));
    let page = ContactPage::build(configuration).expect("Failed to build the contact page.");

    TestPage { page, endpoint }
}

/// A page whose endpoint refuses connections.
pub fn spawn_page_without_endpoint() -> ContactPage {
    Lazy::force(&TRACING);

    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
        listener.local_addr().expect("local addr not found").port()
    };
    let configuration = test_configuration(format!("http://127.0.0.1:{port}/f/contact"));
    ContactPage::build(configuration).expect("Failed to build the contact page.")
}

pub async fn spawn_page_with_auto_hide(millis: u64) -> TestPage {
    Lazy::force(&TRACING);

    let endpoint = MockServer::start().await;
    let mut configuration = test_configuration(format!("{}/f/contact", endpoint.uri()));
    configuration.form.auto_hide_millis = millis;
    let page = ContactPage::build(configuration).expect("Failed to build the contact page.");

    TestPage { page, endpoint }
}
