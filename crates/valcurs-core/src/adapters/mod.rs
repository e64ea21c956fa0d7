//! Feed source adapters.

mod cbr;

pub use cbr::CbrAdapter;
