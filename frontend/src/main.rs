mod analyzer;
mod env_variable_utils;
mod models;
mod router;
mod utils;

use crate::env_variable_utils::ENV_CONFIG;
use crate::router::{switch, Route};
use web_sys::console;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    if ENV_CONFIG.debug {
        console::log_1(&format!("Starting {:?}", *ENV_CONFIG).into());
    }

    yew::Renderer::<App>::new().render();
}
