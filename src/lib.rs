//! paperscope: faceted explorer for biomedical conference papers.
//!
//! The binary attaches a [`paperscope_core::Explorer`] either to the
//! terminal UI or, with `--headless`, to a recording surface whose final
//! view is printed. The library half holds the headless runner so
//! integration tests can drive it without spawning the binary.
//!
//! # Architecture
//!
//! ```text
//! paperscope-data ──► paperscope-core ──► paperscope-tui
//!   (sources)          (explorer)    └──► headless (text / json / html)
//! ```

pub mod headless;
