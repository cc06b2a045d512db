//! BDD step definitions for the widget lifecycle and its rendered view

use std::sync::Arc;

use chrono::{DateTime, Utc};
use cucumber::{then, when};
use greeting_widget::greeting::format_timestamp;
use greeting_widget::io::ReqwestHttpClient;
use greeting_widget::view::render_in;
use greeting_widget::{EndpointConfig, GreetingWidget};

use crate::world::WidgetWorld;

fn view(world: &WidgetWorld) -> String {
    let widget = world.widget();
    render_in(&widget.state(), widget.config(), &Utc)
}

#[when("the widget is mounted")]
fn mount_widget(world: &mut WidgetWorld) {
    let base_url = world.base_url.clone().expect("endpoint not configured");
    world.widget = Some(GreetingWidget::new(
        EndpointConfig::new(base_url),
        Arc::new(ReqwestHttpClient::default()),
    ));
}

#[when("the greeting is loaded")]
async fn load_greeting(world: &mut WidgetWorld) {
    world.widget().load_greeting().await;
}

#[when("the user activates the visible control")]
async fn activate_control(world: &mut WidgetWorld) {
    let widget = world.widget();
    let control = widget.state().control().expect("no control visible");
    widget.activate(control).await;
}

#[when(expr = "the user activates the visible control {int} times")]
async fn activate_control_times(world: &mut WidgetWorld, times: usize) {
    let widget = world.widget();
    for _ in 0..times {
        let control = widget.state().control().expect("no control visible");
        widget.activate(control).await;
    }
}

fn assert_view_contains(world: &WidgetWorld, expected: &str) {
    let view = view(world);
    assert!(
        view.contains(expected),
        "Expected view to contain '{}', but it didn't.\nView:\n{}",
        expected,
        view
    );
}

#[then(expr = "the view should show {string}")]
fn view_shows(world: &mut WidgetWorld, expected: String) {
    assert_view_contains(world, &expected);
}

#[then(expr = "the view should not show {string}")]
fn view_does_not_show(world: &mut WidgetWorld, unexpected: String) {
    let view = view(world);
    assert!(
        !view.contains(&unexpected),
        "Expected view not to contain '{}'.\nView:\n{}",
        unexpected,
        view
    );
}

#[then(expr = "the view should show the timestamp {string} formatted for display")]
fn view_shows_timestamp(world: &mut WidgetWorld, timestamp: String) {
    let parsed = DateTime::parse_from_rfc3339(&timestamp)
        .unwrap()
        .with_timezone(&Utc);
    let expected = format!("Timestamp: {}", format_timestamp(&parsed, &Utc));
    assert_view_contains(world, &expected);
}

#[then("the widget should be loading")]
fn widget_loading(world: &mut WidgetWorld) {
    assert!(world.widget().state().is_loading());
}
