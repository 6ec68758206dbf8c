//! Configuration section definitions.
//!
//! Each module corresponds to a section in `readme.toml`:
//!
//! | Module     | TOML Section   | Purpose                            |
//! |------------|----------------|------------------------------------|
//! | `readme`   | `[readme]`     | Target file and rewrite strategy   |
//! | `seasonal` | `[seasonal]`   | Calendar keys to header images     |
//! | `quotes`   | `[quotes]`     | Quotes file and fallback quote     |
//! | `clock`    | `[clock]`      | UTC offset used for "today"        |

mod clock;
mod quotes;
mod readme;
mod seasonal;

pub use clock::ClockConfig;
pub use quotes::QuotesConfig;
pub use readme::{ReadmeConfig, SpliceStrategy};
pub use seasonal::SeasonalConfig;
