//! Command line arguments and match setup assembly.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use boxclash_core::enums::{ArenaId, PowerUpKind};
use boxclash_core::setup::{MatchSetup, TeamConfig};
use boxclash_core::types::{SideId, TeamId};

/// Real-time box battle simulation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load the full match setup from a JSON file
    #[arg(long, conflicts_with_all = ["blue", "red", "team"])]
    pub setup: Option<PathBuf>,

    /// Agents on the blue team
    #[arg(long, default_value_t = 5)]
    pub blue: u32,

    /// Agents on the red team
    #[arg(long, default_value_t = 5)]
    pub red: u32,

    /// Custom team as `name:color:members:side`; repeat for more teams
    #[arg(long, value_parser = parse_team)]
    pub team: Vec<TeamArg>,

    /// Arena layout (empty, center_pillar, simple_maze, fortress, two_pillars, asteroid_field)
    #[arg(short, long)]
    pub arena: Option<ArenaId>,

    /// Enable power-ups; a bare flag enables every kind
    #[arg(long, num_args = 0.., value_delimiter = ',')]
    pub power_ups: Option<Vec<PowerUpKind>>,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Initial time scale
    #[arg(long, default_value_t = 1.0)]
    pub time_scale: f64,

    /// Stop a headless run after this many ticks
    #[arg(long, default_value_t = 216_000)]
    pub max_ticks: u64,

    /// Run at 60 Hz on a loop thread and read console commands
    #[arg(long)]
    pub realtime: bool,

    /// Print the final snapshot as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// One `--team` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamArg {
    pub name: String,
    pub color: String,
    pub members: u32,
    pub side: u32,
}

/// Parse `name:color:members:side`.
pub fn parse_team(s: &str) -> Result<TeamArg, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [name, color, members, side] = parts.as_slice() else {
        return Err(format!("expected name:color:members:side, got `{s}`"));
    };
    if name.is_empty() {
        return Err("team name must not be empty".into());
    }

    Ok(TeamArg {
        name: name.to_string(),
        color: color.to_string(),
        members: members
            .parse()
            .map_err(|_| format!("bad member count `{members}`"))?,
        side: side.parse().map_err(|_| format!("bad side `{side}`"))?,
    })
}

impl Cli {
    /// Assemble and validate the match setup the arguments describe.
    pub fn build_setup(&self) -> Result<MatchSetup> {
        let mut setup = if let Some(path) = &self.setup {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading setup file {}", path.display()))?;
            serde_json::from_str::<MatchSetup>(&text)
                .with_context(|| format!("parsing setup file {}", path.display()))?
        } else if !self.team.is_empty() {
            MatchSetup {
                teams: self
                    .team
                    .iter()
                    .enumerate()
                    .map(|(i, t)| TeamConfig {
                        id: TeamId(i as u32),
                        name: t.name.clone(),
                        color: t.color.clone(),
                        members: t.members,
                        side: SideId(t.side),
                    })
                    .collect(),
                arena: ArenaId::default(),
                power_ups: None,
            }
        } else {
            MatchSetup::two_teams(self.blue, self.red, ArenaId::default())
        };

        if let Some(arena) = self.arena {
            setup.arena = arena;
        }
        if let Some(kinds) = &self.power_ups {
            setup.power_ups = Some(if kinds.is_empty() {
                PowerUpKind::ALL.to_vec()
            } else {
                kinds.clone()
            });
        }
        if !self.time_scale.is_finite() || self.time_scale <= 0.0 {
            bail!("time scale must be a positive number, got {}", self.time_scale);
        }

        setup.validate()?;
        Ok(setup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("boxclash").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_is_classic_five_on_five() {
        let setup = cli(&[]).build_setup().unwrap();
        assert_eq!(setup, MatchSetup::two_teams(5, 5, ArenaId::Empty));
    }

    #[test]
    fn test_arena_and_power_ups() {
        let setup = cli(&["--blue", "3", "--red", "7", "--arena", "fortress", "--power-ups", "heal,triple_shot"])
            .build_setup()
            .unwrap();
        assert_eq!(setup.total_agents(), 10);
        assert_eq!(setup.arena, ArenaId::Fortress);
        assert_eq!(
            setup.power_ups,
            Some(vec![PowerUpKind::Heal, PowerUpKind::TripleShot])
        );
    }

    #[test]
    fn test_bare_power_ups_flag_enables_all() {
        let setup = cli(&["--power-ups"]).build_setup().unwrap();
        assert_eq!(setup.enabled_power_ups(), &PowerUpKind::ALL);
    }

    #[test]
    fn test_custom_teams() {
        let setup = cli(&[
            "--team", "Wolves:#888888:4:0",
            "--team", "Hawks:#ffaa00:2:0",
            "--team", "Bears:#663300:6:1",
        ])
        .build_setup()
        .unwrap();
        assert_eq!(setup.teams.len(), 3);
        assert_eq!(setup.sides(), vec![SideId(0), SideId(1)]);
        assert_eq!(setup.team_names(SideId(0)), vec!["Wolves", "Hawks"]);
        assert_eq!(setup.teams[2].id, TeamId(2));
    }

    #[test]
    fn test_single_side_rejected() {
        let err = cli(&["--team", "Solo:#fff:3:0"]).build_setup().unwrap_err();
        assert!(err.to_string().contains("two sides"), "{err}");
    }

    #[test]
    fn test_bad_values_rejected_by_parser() {
        let args = ["boxclash", "--arena", "moon"];
        assert!(Cli::try_parse_from(args).is_err());
        assert!(parse_team("a:b:c").is_err());
        assert!(parse_team("a:b:many:0").is_err());
        assert!(parse_team(":b:1:0").is_err());
        assert_eq!(
            parse_team("Blue:#00f:3:1").unwrap(),
            TeamArg {
                name: "Blue".into(),
                color: "#00f".into(),
                members: 3,
                side: 1,
            }
        );
    }

    #[test]
    fn test_setup_conflicts_with_roster_flags() {
        let args = ["boxclash", "--setup", "match.json", "--blue", "3"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
