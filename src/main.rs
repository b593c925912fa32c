mod app;
mod config;
mod magnetic;
mod router;
mod viewer;
mod wheel;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
