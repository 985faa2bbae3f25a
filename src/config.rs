use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TITLE: &str = "GDG Scoreboard";
pub const DEFAULT_LINK: &str =
    "https://gdg.community.dev/gdg-on-campus-raghu-engineering-college-visakhapatnam-india/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub title: String,
    pub link: String,
    pub tick_rate: Duration,
    pub demo: bool,
    pub export_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            link: DEFAULT_LINK.to_string(),
            tick_rate: Duration::from_millis(250),
            demo: false,
            export_path: None,
        }
    }
}

impl Config {
    /// Reads `.env.local` and `.env` (if present) into the environment, then
    /// builds the config from it.
    pub fn load() -> Self {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let title = lookup("SCOREBOARD_TITLE")
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .unwrap_or(defaults.title);
        let link = lookup("SCOREBOARD_LINK")
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .unwrap_or(defaults.link);
        let tick_ms = lookup("SCOREBOARD_TICK_MS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(250)
            .max(50);
        let demo = lookup("SCOREBOARD_DEMO")
            .map(|val| parse_flag(&val))
            .unwrap_or(false);
        let export_path = lookup("SCOREBOARD_EXPORT")
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .map(PathBuf::from);

        Self {
            title,
            link,
            tick_rate: Duration::from_millis(tick_ms),
            demo,
            export_path,
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
