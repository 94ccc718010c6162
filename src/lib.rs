//! amareh turns short calculator expressions into a value.
//!
//! ```
//! assert_eq!(amareh::solve("2 + 3").unwrap(), "5");
//! assert_eq!(amareh::solve("2 + 3 * 4").unwrap(), "20"); // no precedence
//! assert!(amareh::solve("1,,2").is_err());
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;

pub use calculator::solve;
pub use error::{Error, Result};
