pub mod errors;
pub mod registry;
pub mod token_store;

pub use errors::ServiceError;
pub use registry::{AdminAction, ClientRegistry};
pub use token_store::TokenStore;
