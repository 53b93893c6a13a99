/// External configuration loader.
///
/// Reads `config.toml` from the executable's directory (or CWD).
/// Falls back to sensible defaults if the file is missing or incomplete.
/// The level sequences are compile-time constants in `content`; only
/// timing and presentation knobs live here.

use serde::Deserialize;
use std::path::PathBuf;

// ── Public Config Structs ──

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub timing: TimingConfig,
    pub sound_enabled: bool,
    pub frame_sleep_ms: u64,
}

/// Pace of a run. Easy gets the longer round limit, Hard the shorter one.
#[derive(Clone, Debug)]
pub struct TimingConfig {
    pub easy_time_limit_ms: u64,
    pub hard_time_limit_ms: u64,
    pub countdown_steps: u8,
    pub countdown_step_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            easy_time_limit_ms: default_easy_limit(),
            hard_time_limit_ms: default_hard_limit(),
            countdown_steps: default_countdown_steps(),
            countdown_step_ms: default_countdown_step(),
        }
    }
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    timing: TomlTiming,
    #[serde(default)]
    general: TomlGeneral,
}

#[derive(Deserialize, Debug)]
struct TomlTiming {
    #[serde(default = "default_easy_limit")]
    easy_time_limit_ms: u64,
    #[serde(default = "default_hard_limit")]
    hard_time_limit_ms: u64,
    #[serde(default = "default_countdown_steps")]
    countdown_steps: u8,
    #[serde(default = "default_countdown_step")]
    countdown_step_ms: u64,
}

#[derive(Deserialize, Debug)]
struct TomlGeneral {
    #[serde(default = "default_sound")]
    sound: bool,
    #[serde(default = "default_frame_sleep")]
    frame_sleep_ms: u64,
}

// ── Defaults ──

fn default_easy_limit() -> u64 { 3000 }
fn default_hard_limit() -> u64 { 2000 }
fn default_countdown_steps() -> u8 { 3 }
fn default_countdown_step() -> u64 { 500 }
fn default_sound() -> bool { true }
fn default_frame_sleep() -> u64 { 20 }   // 50 fps: the timer bar stays smooth

impl Default for TomlTiming {
    fn default() -> Self {
        TomlTiming {
            easy_time_limit_ms: default_easy_limit(),
            hard_time_limit_ms: default_hard_limit(),
            countdown_steps: default_countdown_steps(),
            countdown_step_ms: default_countdown_step(),
        }
    }
}

impl Default for TomlGeneral {
    fn default() -> Self {
        TomlGeneral {
            sound: default_sound(),
            frame_sleep_ms: default_frame_sleep(),
        }
    }
}

// ── Loading ──

impl GameConfig {
    /// Load config from `config.toml`.
    /// Search order: (1) exe directory, (2) current working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        let toml_cfg = load_toml(&candidate_dirs());

        GameConfig {
            timing: TimingConfig {
                easy_time_limit_ms: toml_cfg.timing.easy_time_limit_ms,
                hard_time_limit_ms: toml_cfg.timing.hard_time_limit_ms,
                countdown_steps: toml_cfg.timing.countdown_steps.max(1),
                countdown_step_ms: toml_cfg.timing.countdown_step_ms,
            },
            sound_enabled: toml_cfg.general.sound,
            frame_sleep_ms: toml_cfg.general.frame_sleep_ms.max(1),
        }
    }
}

/// Candidate directories to search: exe dir + CWD + system paths (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    // 1. Directory of the running executable
    if let Ok(exe) = std::env::current_exe() {
        // Resolve symlinks so a packaged binary still finds its data.
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    // 2. Current working directory
    if let Ok(cwd) = std::env::current_dir() {
        if !dirs.iter().any(|d| d == &cwd) {
            dirs.push(cwd);
        }
    }

    // 3. XDG data home (~/.local/share/tobpid)
    if let Ok(home) = std::env::var("HOME") {
        let xdg = PathBuf::from(&home).join(".local/share/tobpid");
        if xdg.is_dir() && !dirs.iter().any(|d| d == &xdg) {
            dirs.push(xdg);
        }
    }

    // 4. Fallback
    if dirs.is_empty() {
        dirs.push(PathBuf::from("."));
    }

    dirs
}

/// Search for config.toml in candidate directories.
fn load_toml(search_dirs: &[PathBuf]) -> TomlConfig {
    for dir in search_dirs {
        let path = dir.join("config.toml");
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        eprintln!("Warning: config.toml parse error: {e}");
                        eprintln!("Using default settings.");
                        return TomlConfig::default();
                    }
                },
                Err(e) => {
                    eprintln!("Warning: could not read {}: {e}", path.display());
                }
            }
        }
    }
    TomlConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_intended_pacing() {
        let t = TimingConfig::default();
        assert_eq!(t.easy_time_limit_ms, 3000);
        assert_eq!(t.hard_time_limit_ms, 2000);
        assert_eq!(t.countdown_steps, 3);
        assert_eq!(t.countdown_step_ms, 500);
    }

    #[test]
    fn partial_toml_fills_missing_keys() {
        let cfg: TomlConfig =
            toml::from_str("[timing]\nhard_time_limit_ms = 1500\n").unwrap();
        assert_eq!(cfg.timing.hard_time_limit_ms, 1500);
        assert_eq!(cfg.timing.easy_time_limit_ms, 3000);
        assert!(cfg.general.sound);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let cfg: TomlConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.timing.countdown_steps, 3);
        assert_eq!(cfg.general.frame_sleep_ms, 20);
    }
}
