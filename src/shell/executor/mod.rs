#[allow(clippy::module_inception)]
mod executor;
mod process;
mod redirect;

pub use executor::{Executor, Outcome};
