pub mod config;
mod constants;
pub mod dars_unpack;
pub mod error;
pub mod extract;
pub mod load;
pub mod pipeline;
#[cfg(test)]
mod test_suite;
pub mod transform;
pub mod unpack;
mod validation;

pub use dars_unpack::DarsUnpack;
pub use pipeline::Pipeline;
