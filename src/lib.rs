pub mod configuration;
pub mod controller;
pub mod domain;
pub mod form_view;
pub mod scheduler;
pub mod site;
pub mod startup;
pub mod submission_client;
pub mod telemetry;
