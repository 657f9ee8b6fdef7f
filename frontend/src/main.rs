use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact {
    pub mod form;
    pub mod models;
    pub mod newsletter;
    pub mod notice;
}
mod pages {
    pub mod contact;
    pub mod faq;
    pub mod services;
}
mod utils {
    pub mod phone;
    pub mod whatsapp;
}

use pages::contact::ContactPage;
use utils::whatsapp::Composer;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contato")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Contact => html! { <ContactPage /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"Página não encontrada"}</h1>
                <Link<Route> to={Route::Contact}>{"Voltar para o contato"}</Link<Route>>
            </div>
        },
    }
}

#[function_component]
fn App() -> Html {
    let composer = use_memo(|_| Composer::new(config::get_chat_config()), ());

    html! {
        <ContextProvider<Composer> context={(*composer).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Composer>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    gloo_console::log!("Starting contact page");
    yew::Renderer::<App>::new().render();
}
