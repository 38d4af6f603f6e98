// Composition root for the employees service.
//
// Responsibilities
// - Read config from environment.
// - Open the document store and wire the store adapter into the handlers.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
