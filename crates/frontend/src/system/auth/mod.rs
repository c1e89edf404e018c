pub mod api;
pub mod guard;
pub mod provider;

pub use provider::{AuthBackend, AuthError, AuthProvider, Credentials, DemoAuthProvider, ServerAuthProvider};
