use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Alerts, Dashboard, Inventory, IssueCreate, Issues, NotFound, Reports, Users},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Dashboard {},

    #[route("/inventory")]
    Inventory {},

    #[route("/issues")]
    Issues {},

    #[route("/issues/create")]
    IssueCreate {},

    #[route("/alerts")]
    Alerts {},

    #[route("/reports")]
    Reports {},

    #[route("/users")]
    Users {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
