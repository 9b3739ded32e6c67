// High score persistence and config overrides in localStorage. Every
// browser failure reads as "nothing stored" and writes are best effort.

use crate::config::GameConfig;

pub fn parse_high_score(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(0)
}

/// Only a strictly higher score is written; ties and the loaded value are not.
pub fn should_persist(last_saved: u64, high: u64) -> bool {
    high > last_saved
}

pub fn load_high_score(key: &str) -> u64 {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(raw) = store.get_item(key) {
                return parse_high_score(raw.as_deref());
            }
        }
    }
    0
}

pub fn save_high_score(key: &str, value: u64) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if store.set_item(key, &value.to_string()).is_err() {
                log::warn!("could not persist high score under {}", key);
            }
        }
    }
}

/// A stored JSON config replacing a variant's preset. Invalid JSON is logged
/// and ignored.
pub fn parse_config_override(raw: Option<&str>) -> Option<GameConfig> {
    let raw = raw?;
    match GameConfig::from_json(raw) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            log::warn!("ignoring stored config: {}", e);
            None
        }
    }
}

pub fn load_config_override(key: &str) -> Option<GameConfig> {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(raw) = store.get_item(key) {
                return parse_config_override(raw.as_deref());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_garbage_values_read_as_zero() {
        assert_eq!(parse_high_score(None), 0);
        assert_eq!(parse_high_score(Some("")), 0);
        assert_eq!(parse_high_score(Some("abc")), 0);
        assert_eq!(parse_high_score(Some("-5")), 0);
        assert_eq!(parse_high_score(Some("120")), 120);
        assert_eq!(parse_high_score(Some(" 75\n")), 75);
    }

    #[test]
    fn only_strictly_higher_scores_are_written() {
        assert!(!should_persist(40, 40));
        assert!(!should_persist(40, 30));
        assert!(should_persist(40, 41));
        assert!(!should_persist(0, 0));
    }

    #[test]
    fn stored_config_overrides_parse_or_fall_back() {
        assert!(parse_config_override(None).is_none());
        assert!(parse_config_override(Some("not json")).is_none());
        let raw = r##"{
            "grid": { "width": 3, "height": 2 },
            "catalog": [
                { "points": 1, "hits": 1, "color": "#111" },
                { "points": 2, "hits": 1, "color": "#222" },
                { "points": 3, "hits": 1, "color": "#333" },
                { "points": 4, "hits": 1, "color": "#444" }
            ],
            "initial": { "density": 1.0, "weights": [1, 0, 0, 0] },
            "refill": { "density": 1.0, "weights": [1, 0, 0, 0] },
            "respawn_delay_ms": 250
        }"##;
        let cfg = parse_config_override(Some(raw)).unwrap();
        assert_eq!(cfg.grid.cells(), 6);
        assert_eq!(cfg.respawn_delay_ms, Some(250));
    }
}
