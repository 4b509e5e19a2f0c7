use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod dom;
mod error;
mod hooks;
mod state;
mod behavior {
    pub mod contact;
    pub mod counter;
    pub mod konami;
    pub mod menu;
    pub mod notification;
    pub mod scroll;
    pub mod theme;
}
mod components {
    pub mod contact_form;
    pub mod easter_egg;
    pub mod hero;
    pub mod nav;
    pub mod notification;
    pub mod reveal;
    pub mod stats;
}
mod pages {
    pub mod landing;
}

use components::notification::NotificationCenter;
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <NotificationCenter>
                <Switch<Route> render={switch} />
            </NotificationCenter>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
