pub mod convert;
pub mod parse;
pub mod request;
pub mod runtime;
