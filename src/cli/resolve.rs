//! `resolve` command: show what `update` would pick for a day.

use anyhow::Result;

use crate::cli::DayArgs;
use crate::cli::common::select;
use crate::config::ProfileConfig;

pub fn run_resolve(config: &ProfileConfig, args: &DayArgs) -> Result<()> {
    config.validate()?;
    let selection = select(config, args);

    println!("date:  {}", selection.date);
    println!("image: {}", selection.image);
    if let Some(quote) = &selection.quote {
        println!("quote: {quote}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::utils::date::CivilDate;
    use std::fs;
    use tempfile::TempDir;

    const README: &str = "![HEADER](dependencies/header.png?raw=true)\n2\n3\n4\n5\n> old\n";

    fn setup(toml: &str) -> (TempDir, ProfileConfig) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), README).unwrap();
        fs::write(
            dir.path().join("quotes.json"),
            r#"{"special_days": {"10-31": "Boo!"}, "random_quotes": ["Keep going."]}"#,
        )
        .unwrap();

        let mut config = test_parse_config(toml);
        config.set_root(dir.path());
        config.readme.path = dir.path().join("README.md");
        config.quotes.path = dir.path().join("quotes.json");
        (dir, config)
    }

    fn args(date: &str) -> DayArgs {
        DayArgs {
            date: CivilDate::parse(date),
            seed: Some(1),
        }
    }

    #[test]
    fn test_resolve_leaves_files_untouched() {
        let (dir, config) = setup("");
        run_resolve(&config, &args("2024-10-31")).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("README.md")).unwrap(), README);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_resolve_rejects_invalid_config() {
        let (_dir, config) = setup("[seasonal]\ndefault = \"\"");
        assert!(run_resolve(&config, &args("2024-06-15")).is_err());
    }
}
