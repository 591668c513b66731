pub mod apps;
pub mod buildpacks;
pub mod error;
pub mod models;
pub mod organizations;
pub mod releases;
pub mod spaces;
mod transport;

pub use self::error::ApiError;
pub use self::transport::ApiTransport;
