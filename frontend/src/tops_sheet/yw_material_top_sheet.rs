//! Sheet that slides in from the top over a dimmed backdrop.
//!
//! Every dialog of the application renders inside one. The sheet is mounted
//! only while `open` is set; the `show` class is added one tick later so the
//! CSS transition runs.

use gloo_timers::callback::Timeout;
use yew::{classes, html, Callback, Component, Context, Html, MouseEvent, Properties};

const REVEAL_DELAY_MS: u32 = 50;

pub struct YwMaterialTopSheet {
    shown: bool,
    reveal: Option<Timeout>,
}

pub enum Msg {
    Reveal,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: Option<String>,
    /// Extra class for the panel, e.g. the theme.
    #[prop_or_default]
    pub class: Option<String>,
    #[prop_or_default]
    pub children: Html,
}

impl YwMaterialTopSheet {
    fn schedule_reveal(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.reveal = Some(Timeout::new(REVEAL_DELAY_MS, move || link.send_message(Msg::Reveal)));
    }
}

impl Component for YwMaterialTopSheet {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let mut sheet = Self {
            shown: false,
            reveal: None,
        };
        if ctx.props().open {
            sheet.schedule_reveal(ctx);
        }
        sheet
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Reveal => {
                self.reveal = None;
                self.shown = true;
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let open = ctx.props().open;
        if open && !old_props.open {
            self.schedule_reveal(ctx);
        } else if !open {
            self.reveal = None;
            self.shown = false;
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let close = props.on_close.clone();
        let on_backdrop = Callback::from(move |_: MouseEvent| close.emit(()));
        let close = props.on_close.clone();
        let on_close_button = Callback::from(move |_: MouseEvent| close.emit(()));
        let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

        html! {
            <div class="top-sheet-backdrop" onclick={on_backdrop}>
                <div
                    class={classes!("top-sheet", self.shown.then_some("show"), props.class.clone())}
                    onclick={keep_open}
                    role="dialog"
                >
                    <div class="top-sheet-header">
                        if let Some(title) = &props.title {
                            <h2>{ title }</h2>
                        }
                        <button class="icon-button" onclick={on_close_button} aria-label="Close">
                            { "✕" }
                        </button>
                    </div>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
