//! BDD test world for the greeting widget

use cucumber::World;
use greeting_widget::GreetingWidget;
use tokio_util::sync::CancellationToken;

use crate::stub_api::StubApi;

#[derive(Debug, Default, World)]
pub struct WidgetWorld {
    // Endpoint under test
    pub base_url: Option<String>,
    pub stub_api: Option<StubApi>,
    pub hello_api_cancel: Option<CancellationToken>,

    // Widget under test
    pub widget: Option<GreetingWidget>,
}

impl WidgetWorld {
    pub fn widget(&self) -> &GreetingWidget {
        self.widget.as_ref().expect("widget not mounted")
    }

    pub fn stub_api(&self) -> &StubApi {
        self.stub_api.as_ref().expect("stub API not started")
    }
}

impl Drop for WidgetWorld {
    fn drop(&mut self) {
        if let Some(stub) = &self.stub_api {
            stub.stop();
        }
        if let Some(cancel) = &self.hello_api_cancel {
            cancel.cancel();
        }
    }
}
