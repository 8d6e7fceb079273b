pub mod client;
pub mod session;
pub mod storage;

use self::{client::Client, session::Session};
use leptos::prelude::*;
use tango_core::Language;

pub fn initialise_context() {
    tracing::trace!("initialising context");

    leptos_meta::provide_meta_context();
    let session = Session::new();
    leptos::context::provide_context(session);
    leptos::context::provide_context(RwSignal::new(Language::default()));

    // stored state is only readable in the browser, so the stored user
    // name is resolved after hydration
    Effect::new(move |_| session.restore());
}

pub fn get_client() -> Client {
    Client::new()
}

pub fn get_session() -> Session {
    if cfg!(feature = "ssr") {
        // returning a "dummy" session within the server
        Session::empty()
    } else {
        let owner = Owner::current().unwrap();
        owner.with(move || leptos::prelude::expect_context::<Session>())
    }
}

pub fn get_language() -> RwSignal<Language> {
    let owner = Owner::current().unwrap();
    owner.with(move || leptos::prelude::expect_context::<RwSignal<Language>>())
}
