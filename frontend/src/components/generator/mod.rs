//! Generator screen: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Collect the prompt, images and options and start a generation run.
//! - Feed job snapshots and the final result into `GenerationState`,
//!   dropping anything that arrives for a superseded run.
//! - Show the model, the result controls and the account dialogs.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use helpers::{lock_scroll, MobileWatcher};
pub use messages::Msg;
pub use props::GeneratorProps;
pub use state::GeneratorComponent;

impl Component for GeneratorComponent {
    type Message = Msg;
    type Properties = GeneratorProps;

    fn create(ctx: &Context<Self>) -> Self {
        let watcher = MobileWatcher::new(ctx.link().callback(Msg::MobileChanged));
        let component = GeneratorComponent::new(watcher);
        lock_scroll(component.is_mobile);
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.generation.cancel();
        self.mobile_watcher = None;
        lock_scroll(false);
    }
}
