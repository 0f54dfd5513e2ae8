//! Chemical watch-list page: root module wiring the Yew `Component`
//! implementation with submodules for state, messages, update logic, and
//! view rendering.
//!
//! The page logic itself lives in `common::watch_list::page::WatchListPage`;
//! this component feeds it browser events and runs the commands it returns.
//! On first render it requests the initial load.

use yew::prelude::*;

mod add_form;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::WatchListComponent;

impl Component for WatchListComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        WatchListComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Reload);
        }
    }
}
