use clap::Parser;

use common_min::{CommonMinError, Config, Finder, Strategy};

/// Comma-separated list of positive integers, e.g. `6,2,3`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Values(Vec<i32>);

fn parse_array(raw: &str) -> common_min::Result<Values> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .map_err(|e| CommonMinError::InvalidArray(format!("{:?}: {}", s, e)))
        })
        .collect::<common_min::Result<Vec<i32>>>()
        .map(Values)
}

/// Find the smallest value common to three arrays.
#[derive(Debug, Parser)]
#[command(name = "common-min", version, about)]
struct Args {
    /// Strategy to use (merge, binary_search, counting). Overrides the configuration.
    #[arg(short, long)]
    strategy: Option<Strategy>,

    /// Run every strategy and print each result.
    #[arg(long)]
    compare: bool,

    /// First array.
    #[arg(value_parser = parse_array)]
    a: Values,

    /// Second array.
    #[arg(value_parser = parse_array)]
    b: Values,

    /// Third array.
    #[arg(value_parser = parse_array)]
    c: Values,
}

fn main() {
    let args = Args::parse();

    common_min::init_logging();
    common_min::init_metrics();

    if let Err(e) = run(args) {
        tracing::error!("common-min error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    tracing::debug!("Loaded configuration: {:?}", config);

    if let Some(strategy) = args.strategy {
        config.finder.strategy = strategy;
    }

    let finder = Finder::new(config.finder);
    let (a, b, c) = (&args.a.0, &args.b.0, &args.c.0);

    if args.compare {
        let comparison = finder.compare(a, b, c)?;
        for (strategy, result) in &comparison.results {
            println!("{}: {}", strategy, result);
        }
        if !comparison.agree() {
            anyhow::bail!("strategies returned different results");
        }
    } else {
        println!("{}", finder.find(a, b, c)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_array() {
        assert_eq!(parse_array("6, 2,3").unwrap(), Values(vec![6, 2, 3]));
        assert_eq!(parse_array("").unwrap(), Values(Vec::new()));
        assert!(parse_array("1,x").is_err());
    }

    #[test]
    fn test_parse_args() {
        let args =
            Args::try_parse_from(["common-min", "-s", "counting", "1,2", "2", "2,3"]).unwrap();
        assert_eq!(args.strategy, Some(Strategy::Counting));
        assert!(!args.compare);
        assert_eq!(args.a, Values(vec![1, 2]));
        assert_eq!(args.b, Values(vec![2]));
        assert_eq!(args.c, Values(vec![2, 3]));
    }

    #[test]
    fn test_parse_args_compare_and_legacy_name() {
        let args = Args::try_parse_from([
            "common-min",
            "--compare",
            "--strategy",
            "optimal",
            "1",
            "1",
            "1",
        ])
        .unwrap();
        assert!(args.compare);
        assert_eq!(args.strategy, Some(Strategy::Merge));

        let args = Args::try_parse_from(["common-min", "1", "1", "1"]).unwrap();
        assert_eq!(args.strategy, None);
    }

    #[test]
    fn test_parse_args_rejects_bad_input() {
        let err = Args::try_parse_from(["common-min", "1", "2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        assert!(Args::try_parse_from(["common-min", "--strategy"]).is_err());

        let err =
            Args::try_parse_from(["common-min", "--strategy", "fast", "1", "1", "1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = Args::try_parse_from(["common-min", "1,x", "1", "1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        assert!(Args::try_parse_from(["common-min", "1", "1", "1", "1"]).is_err());
    }

    #[test]
    fn test_args_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
