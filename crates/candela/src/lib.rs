#![doc(html_no_source)]

mod logging;
pub use logging::init_logging;

// Reexport all crates
pub use candela_radiometry;
pub use candela_spectrum;
