mod constants;
mod fake;
mod kubeconfig;
mod revision;

pub use constants::*;
pub use fake::*;
pub use kubeconfig::*;
pub use revision::*;
