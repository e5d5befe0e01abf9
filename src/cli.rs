//! CLI interface for pace.
//!
//! - `pace calc` computes once and prints the result.
//! - `pace session` keeps a live session open, reading `field=value` edits
//!   from stdin and printing fresh results after each one.
//! - `pace overview` and `pace challenges` fetch from the fitness platform
//!   configured in `~/.pace/config.toml`.
//!
//! Input flags override config defaults, which override built-in defaults.

mod calc;
mod format;
mod platform;
mod session;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned, civil};

use crate::config::Config;
use crate::model::{Field, GoalInputs};

/// Pace: minutes per workout to reach your yearly goal.
#[derive(Debug, Parser)]
#[command(name = "pace", version, after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Config file. Defaults to `~/.pace/config.toml`.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const USAGE_HELP: &str = r"Examples:
  pace calc --worked 2400 --goal 6000 --workouts 4
  pace calc --now 2025-07-01 --json
  printf 'goal=7000\nskipped=2\n' | pace session

Session edits use the fields worked, goal, workouts, skipped.";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the pace once.
    Calc {
        #[command(flatten)]
        inputs: InputArgs,

        /// Compute as of this moment instead of the current time.
        /// Accepts `2025-07-01`, `2025-07-01T08:00Z` or a zoned datetime.
        #[arg(long)]
        now: Option<String>,

        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Keep a session open, recomputing after every `field=value` line on stdin.
    ///
    /// `refresh` re-reads the clock, `show` prints the inputs, `quit` exits.
    Session {
        #[command(flatten)]
        inputs: InputArgs,

        /// Pin the session clock to this moment.
        #[arg(long)]
        now: Option<String>,
    },

    /// Fetch the workout overview from the fitness platform.
    Overview,

    /// Fetch current challenges from the fitness platform.
    Challenges,
}

/// The four goal inputs as optional flags.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Minutes worked out this year.
    #[arg(long, allow_negative_numbers = true)]
    worked: Option<f64>,

    /// Minutes goal for the year.
    #[arg(long, allow_negative_numbers = true)]
    goal: Option<f64>,

    /// Goal workouts per week.
    #[arg(long, allow_negative_numbers = true)]
    workouts: Option<f64>,

    /// Number of weeks you may miss.
    #[arg(long, allow_negative_numbers = true)]
    skipped: Option<f64>,
}

impl InputArgs {
    /// Overlay the flags that were given onto `base`.
    fn resolve(&self, base: GoalInputs) -> GoalInputs {
        let mut inputs = base;
        for (field, value) in [
            (Field::MinutesWorked, self.worked),
            (Field::MinutesGoal, self.goal),
            (Field::WorkoutsPerWeek, self.workouts),
            (Field::WeeksSkipped, self.skipped),
        ] {
            if let Some(value) = value {
                inputs.set(field, value);
            }
        }
        inputs
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    let defaults = config.defaults.resolve();

    match cli.command {
        Command::Calc { inputs, now, json } => {
            let now = parse_now(now.as_deref())?;
            calc::cmd_calc(&inputs.resolve(defaults), &now, json)
        }
        Command::Session { inputs, now } => {
            let now = now.as_deref().map(|raw| parse_now(Some(raw))).transpose()?;
            session::cmd_session(inputs.resolve(defaults), now)
        }
        Command::Overview => platform::cmd_overview(&config),
        Command::Challenges => platform::cmd_challenges(&config),
    }
}

/// Parse a `--now` value, or read the clock when absent.
///
/// Tries a zoned datetime, then a timestamp, then a bare date at midnight
/// in the system time zone.
fn parse_now(raw: Option<&str>) -> Result<Zoned, String> {
    let Some(raw) = raw else {
        return Ok(Zoned::now());
    };

    if let Ok(zoned) = raw.parse::<Zoned>() {
        return Ok(zoned);
    }
    if let Ok(ts) = raw.parse::<Timestamp>() {
        return Ok(ts.to_zoned(TimeZone::system()));
    }
    raw.parse::<civil::Date>()
        .and_then(|date| date.to_zoned(TimeZone::system()))
        .map_err(|e| format!("invalid --now '{raw}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from(["pace", "calc", "--goal", "9000", "--skipped", "2"]).unwrap();
        let Command::Calc { inputs, .. } = cli.command else {
            panic!("expected calc");
        };
        let resolved = inputs.resolve(GoalInputs::default());
        assert_eq!(resolved.minutes_goal, 9000.0);
        assert_eq!(resolved.weeks_skipped, 2.0);
        assert_eq!(resolved.workouts_per_week, 3.0);
    }

    #[test]
    fn negative_flag_values_reach_validation() {
        let cli = Cli::try_parse_from(["pace", "calc", "--worked", "-5"]).unwrap();
        let Command::Calc { inputs, .. } = cli.command else {
            panic!("expected calc");
        };
        assert_eq!(inputs.resolve(GoalInputs::default()).minutes_worked, -5.0);
    }

    #[test]
    fn parses_zoned_now() {
        let now = parse_now(Some("2025-06-01T12:00:00-05:00[-05:00]")).unwrap();
        assert_eq!(now.hour(), 12);
        assert_eq!(now.offset(), jiff::tz::offset(-5));
    }

    #[test]
    fn parses_timestamp_now() {
        let now = parse_now(Some("2025-01-01T00:00:00Z")).unwrap();
        assert_eq!(
            now.timestamp(),
            "2025-01-01T00:00:00Z".parse::<Timestamp>().unwrap()
        );
    }

    #[test]
    fn parses_date_now() {
        let now = parse_now(Some("2025-07-01")).unwrap();
        assert_eq!(now.date(), civil::date(2025, 7, 1));
        assert_eq!(now.hour(), 0);
    }

    #[test]
    fn rejects_garbage_now() {
        let err = parse_now(Some("next tuesday")).unwrap_err();
        assert!(err.starts_with("invalid --now 'next tuesday'"));
    }
}
