//! ClickUp tool handlers
//!
//! One module per ClickUp resource. Each exposes `register`, which adds its
//! descriptors and handlers to the catalogue.

use super::catalogue::Catalogue;

mod checklists;
mod comments;
mod custom_fields;
mod dependencies;
mod folders;
mod goals;
mod guests;
mod lists;
mod members;
mod spaces;
mod tags;
mod tasks;
mod teams;
mod time_tracking;
mod webhooks;


/// The complete ClickUp tool catalogue, in listing order.
pub fn catalogue() -> Catalogue {
    let mut catalogue = Catalogue::new();
    teams::register(&mut catalogue);
    spaces::register(&mut catalogue);
    folders::register(&mut catalogue);
    lists::register(&mut catalogue);
    tasks::register(&mut catalogue);
    comments::register(&mut catalogue);
    checklists::register(&mut catalogue);
    tags::register(&mut catalogue);
    custom_fields::register(&mut catalogue);
    time_tracking::register(&mut catalogue);
    dependencies::register(&mut catalogue);
    members::register(&mut catalogue);
    guests::register(&mut catalogue);
    goals::register(&mut catalogue);
    webhooks::register(&mut catalogue);
    catalogue
}
