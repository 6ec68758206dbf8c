//! Common utilities shared across CLI commands.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::DayArgs;
use crate::config::{ProfileConfig, SpliceStrategy};
use crate::utils::date::CivilDate;
use crate::{debug, quote, season};

/// What a run would put into the README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub date: CivilDate,
    pub image: String,
    /// `None` when the rewrite strategy does not write a quote.
    pub quote: Option<String>,
}

/// The date to resolve: `--date` if given, else today at the configured offset.
pub fn pick_date(config: &ProfileConfig, args: &DayArgs) -> CivilDate {
    args.date
        .unwrap_or_else(|| CivilDate::today(config.clock.utc_offset_minutes))
}

/// Random source for quote picks, seeded when `--seed` is given.
pub fn quote_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Resolve image and quote for the requested day.
pub fn select(config: &ProfileConfig, args: &DayArgs) -> Selection {
    let date = pick_date(config, args);
    let today = date.day_of_year();
    debug!("season"; "resolving for {} ({})", date, today);

    let image = season::resolve(today, &config.seasonal.images, &config.seasonal.default);

    let quote = match config.readme.strategy {
        SpliceStrategy::Lines => {
            let mut rng = quote_rng(args.seed);
            Some(quote::daily_quote(
                &config.quotes.path,
                today,
                &config.quotes.fallback,
                &mut rng,
            ))
        }
        SpliceStrategy::Substitute => None,
    };

    Selection {
        date,
        image: image.to_string(),
        quote,
    }
}
