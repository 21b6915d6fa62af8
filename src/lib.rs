// Module layout (Clean Architecture style)
// - bootstrap: configuration and dependency wiring
// - infrastructure: storage adapters (Postgres, in-memory)
// - presentation: HTTP handlers, envelope and routing
// - application: auth context, ports and use cases
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
