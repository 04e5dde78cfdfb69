//! Hidden/revealed presentation of an animated region

/// Length of the reveal transition
pub const REVEAL_DURATION_MS: u32 = 1000;

#[cfg(test)]
const TRANSITION: &str = "transition-all duration-1000";
const HIDDEN: &str = "transition-all duration-1000 opacity-0 translate-y-10";
const REVEALED: &str = "transition-all duration-1000 opacity-100 translate-y-0";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl From<bool> for RevealState {
    fn from(visible: bool) -> Self {
        if visible {
            RevealState::Revealed
        } else {
            RevealState::Hidden
        }
    }
}

impl RevealState {
    /// Value of the `data-reveal` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealState::Hidden => "hidden",
            RevealState::Revealed => "revealed",
        }
    }

    /// Transition and end-state classes. Only these two strings are ever produced.
    pub fn classes(&self) -> &'static str {
        match self {
            RevealState::Hidden => HIDDEN,
            RevealState::Revealed => REVEALED,
        }
    }
}

/// Full class attribute for a region: reveal classes followed by `extra`
pub fn region_class(visible: bool, extra: &str) -> String {
    let base = RevealState::from(visible).classes();
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_classes() {
        let class = RevealState::Hidden.classes();
        assert!(class.contains("opacity-0"));
        assert!(class.contains("translate-y-10"));
        assert!(!class.contains("opacity-100"));
    }

    #[test]
    fn test_revealed_classes() {
        let class = RevealState::Revealed.classes();
        assert!(class.contains("opacity-100"));
        assert!(class.contains("translate-y-0"));
        assert!(!class.contains("opacity-0 "));
    }

    #[test]
    fn test_both_states_share_transition() {
        assert!(HIDDEN.starts_with(TRANSITION));
        assert!(REVEALED.starts_with(TRANSITION));
        assert!(TRANSITION.contains(&format!("duration-{REVEAL_DURATION_MS}")));
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(RevealState::from(false), RevealState::Hidden);
        assert_eq!(RevealState::from(true), RevealState::Revealed);
        assert_eq!(RevealState::default(), RevealState::Hidden);
    }

    #[test]
    fn test_region_class_appends_extra() {
        assert_eq!(
            region_class(true, "w-full md:w-1/4"),
            format!("{REVEALED} w-full md:w-1/4")
        );
        assert_eq!(region_class(false, "  "), HIDDEN);
    }

    #[test]
    fn test_only_two_class_sets() {
        let outputs: Vec<_> = [false, true, false, true]
            .into_iter()
            .map(|v| region_class(v, ""))
            .collect();
        assert!(outputs.iter().all(|c| c == HIDDEN || c == REVEALED));
    }
}
