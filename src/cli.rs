use clap::Parser;

use crate::bulb::Action;

#[derive(Parser)]
#[command(
    name = "light",
    version,
    about = "Control Tuya smart bulbs over the local network"
)]
pub struct Cli {
    /// Device name from ~/.config/light/light.json
    #[arg(long)]
    pub name: String,

    /// Turn off the bulb
    #[arg(long)]
    pub off: bool,

    /// Turn on the bulb
    #[arg(long)]
    pub on: bool,

    /// Set the bulb to purple
    #[arg(long)]
    pub purple: bool,

    /// Set the bulb to yellow
    #[arg(long)]
    pub yellow: bool,

    /// Dim the bulb
    #[arg(long)]
    pub dim: bool,

    /// Brighten the bulb
    #[arg(long)]
    pub bright: bool,

    /// Enable debug logging, including protocol traces
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The selected action, if any.
    ///
    /// When several action flags are set, the first in the fixed precedence
    /// order off, on, purple, yellow, dim, bright wins. With no action flag
    /// the run only queries and prints status.
    pub fn action(&self) -> Option<Action> {
        if self.off {
            Some(Action::Off)
        } else if self.on {
            Some(Action::On)
        } else if self.purple {
            Some(Action::Purple)
        } else if self.yellow {
            Some(Action::Yellow)
        } else if self.dim {
            Some(Action::Dim)
        } else if self.bright {
            Some(Action::Bright)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("light").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_single_action_flag() {
        let cli = parse(&["--name", "bedroom", "--purple"]);
        assert_eq!(cli.action(), Some(Action::Purple));
        assert_eq!(cli.name, "bedroom");
    }

    #[test]
    fn test_no_action_flag() {
        let cli = parse(&["--name", "bedroom"]);
        assert_eq!(cli.action(), None);
    }

    #[test]
    fn test_precedence_when_multiple_flags_set() {
        let cli = parse(&["--name", "bedroom", "--bright", "--yellow", "--on"]);
        assert_eq!(cli.action(), Some(Action::On));

        let cli = parse(&["--name", "bedroom", "--off", "--on"]);
        assert_eq!(cli.action(), Some(Action::Off));

        let cli = parse(&["--name", "bedroom", "--dim", "--bright"]);
        assert_eq!(cli.action(), Some(Action::Dim));
    }

    #[test]
    fn test_name_is_required() {
        let result = Cli::try_parse_from(["light", "--on"]);
        assert!(result.is_err());
    }
}
