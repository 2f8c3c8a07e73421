// Adapters layer: concrete clients for the external systems the gateway
// relays to (payment provider, issue tracker, mail relay).

pub mod github;
pub mod smtp;
pub mod stripe;
