pub mod bulk;
pub mod constants;
pub mod deleter;
pub mod errors;
pub mod logging;
pub mod params;

pub mod prelude {
    pub use kn_api::v1::Revision;

    pub use crate::constants::*;
    pub use crate::errors::EmptyResult;
}

#[cfg(test)]
mod tests;
