//! Server-rendered HTML pages (Askama + htmx)

pub mod handlers;
