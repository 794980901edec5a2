use super::*;

mod form_payloads;
mod html_and_selectors;
mod scroll_and_timers;
mod server_responses;
mod translation_and_config;
