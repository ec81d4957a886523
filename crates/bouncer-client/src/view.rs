//! Text and style values written into the page, kept free of `web_sys` so
//! they can be unit tested natively.

/// CSS pixel length.
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Material icon name and label for the play/pause button.
pub fn play_pause_label(animating: bool) -> (&'static str, &'static str) {
    if animating {
        ("pause", "Pause")
    } else {
        ("play_arrow", "Play")
    }
}

pub fn trail_label(enabled: bool) -> &'static str {
    if enabled { "Trail on" } else { "Trail off" }
}

/// Bound keys whose default action would scroll the page.
pub fn prevents_scroll(key: &str) -> bool {
    matches!(key, " " | "ArrowUp" | "ArrowDown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_formats_fractions() {
        assert_eq!(px(12.0), "12px");
        assert_eq!(px(12.5), "12.5px");
        assert_eq!(px(0.0), "0px");
    }

    #[test]
    fn play_pause_reflects_state() {
        assert_eq!(play_pause_label(true), ("pause", "Pause"));
        assert_eq!(play_pause_label(false), ("play_arrow", "Play"));
    }

    #[test]
    fn trail_label_reflects_state() {
        assert_eq!(trail_label(true), "Trail on");
        assert_eq!(trail_label(false), "Trail off");
    }

    #[test]
    fn only_scrolling_keys_are_suppressed() {
        assert!(prevents_scroll(" "));
        assert!(prevents_scroll("ArrowUp"));
        assert!(prevents_scroll("ArrowDown"));
        assert!(!prevents_scroll("t"));
        assert!(!prevents_scroll("ArrowLeft"));
    }
}
