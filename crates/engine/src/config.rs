use std::time::{SystemTime, UNIX_EPOCH};

/// Default terminal columns per board cell
pub const DEFAULT_CELL_WIDTH: u16 = 2;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub seed: u32,
    pub log_path: Option<String>,
    pub cell_width: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: time_seed(),
            log_path: None,
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`], reading values through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup("BLOCK_BLAST_SEED").map(|s| s.trim().to_string()) {
            Some(s) if !s.is_empty() => s.parse::<u32>().unwrap_or_else(|_| {
                eprintln!("[Config] BLOCK_BLAST_SEED={s:?} is not a u32; using a time seed");
                time_seed()
            }),
            _ => time_seed(),
        };

        let log_path = lookup("BLOCK_BLAST_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let cell_width = match lookup("BLOCK_BLAST_CELL_WIDTH") {
            Some(s) => match s.trim().parse::<u16>() {
                Ok(w) if (1..=4).contains(&w) => w,
                _ => {
                    eprintln!(
                        "[Config] BLOCK_BLAST_CELL_WIDTH={s:?} must be 1..=4; using {DEFAULT_CELL_WIDTH}"
                    );
                    DEFAULT_CELL_WIDTH
                }
            },
            None => DEFAULT_CELL_WIDTH,
        };

        Self {
            seed,
            log_path,
            cell_width,
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
