use crate::app::App;

mod app;
mod components;
mod config;
mod contexts;
mod services;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
