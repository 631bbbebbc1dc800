pub mod error;
pub mod http;
pub mod id;
pub mod model;
pub mod parse;
pub mod source;
pub use reqwest::Url;

#[macro_use]
extern crate log;
