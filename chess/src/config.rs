use anyhow::{bail, Context, Result};
use skak_core::Color;

/// Options for an interactive game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlayConfig {
    /// The side the computer plays.
    pub ai_color: Color,
    /// Seed for the computer's random choices; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            ai_color: Color::Black,
            seed: None,
        }
    }
}

impl PlayConfig {
    /// Parses `[--ai white|black] [--seed N]`.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut config = Self::default();
        let mut args = args.iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--ai" => {
                    let value = args.next().context("--ai needs a color")?;
                    config.ai_color = parse_color(value)?;
                }
                "--seed" => {
                    let value = args.next().context("--seed needs a number")?;
                    let seed = value
                        .parse()
                        .with_context(|| format!("invalid seed '{value}'"))?;
                    config.seed = Some(seed);
                }
                other => bail!("unknown option '{other}'"),
            }
        }

        Ok(config)
    }

    pub fn human_color(&self) -> Color {
        self.ai_color.opponent()
    }
}

fn parse_color(value: &str) -> Result<Color> {
    match value.to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        _ => bail!("invalid color '{value}', expected white or black"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = PlayConfig::from_args(&[]).unwrap();
        assert_eq!(config, PlayConfig::default());
        assert_eq!(config.ai_color, Color::Black);
        assert_eq!(config.human_color(), Color::White);
    }

    #[test]
    fn test_options() {
        let config = PlayConfig::from_args(&args(&["--seed", "99", "--ai", "White"])).unwrap();
        assert_eq!(config.ai_color, Color::White);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_bad_options() {
        assert!(PlayConfig::from_args(&args(&["--seed"])).is_err());
        assert!(PlayConfig::from_args(&args(&["--seed", "x"])).is_err());
        assert!(PlayConfig::from_args(&args(&["--ai", "red"])).is_err());
        assert!(PlayConfig::from_args(&args(&["--fast"])).is_err());
    }
}
