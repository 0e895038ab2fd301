#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Language data for English, French, Portuguese and German, and the
//! registry that composes it into shared configurations.

pub mod english;
pub mod french;
pub mod german;
pub mod host;
pub mod portuguese;
pub mod registry;

pub use english::English;
pub use french::French;
pub use german::German;
pub use host::reference_host;
pub use portuguese::Portuguese;
pub use registry::{LocaleRegistry, LocaleRequest, compose, locale_data};
