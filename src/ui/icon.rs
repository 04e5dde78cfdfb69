use leptos::prelude::*;

/// Outline icons drawn inline (24x24 grid, stroke-based)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    BookOpen,
    Users,
    MessageSquare,
    Home,
    ChevronDown,
    Menu,
    X,
}

impl IconKind {
    fn paths(&self) -> &'static [&'static str] {
        match self {
            IconKind::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            IconKind::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconKind::MessageSquare => {
                &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"]
            }
            IconKind::Home => &[
                "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z",
                "M9 22V12h6v10",
            ],
            IconKind::ChevronDown => &["m6 9 6 6 6-6"],
            IconKind::Menu => &["M4 12h16", "M4 6h16", "M4 18h16"],
            IconKind::X => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

impl From<crate::core::FeatureIcon> for IconKind {
    fn from(icon: crate::core::FeatureIcon) -> Self {
        use crate::core::FeatureIcon;
        match icon {
            FeatureIcon::BookOpen => IconKind::BookOpen,
            FeatureIcon::Users => IconKind::Users,
            FeatureIcon::MessageSquare => IconKind::MessageSquare,
            FeatureIcon::Home => IconKind::Home,
        }
    }
}

#[component]
pub fn Icon(
    kind: IconKind,
    /// CSS classes for sizing and color
    #[prop(default = "w-6 h-6")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {kind.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeatureIcon;

    #[test]
    fn test_every_icon_has_paths() {
        let all = [
            IconKind::BookOpen,
            IconKind::Users,
            IconKind::MessageSquare,
            IconKind::Home,
            IconKind::ChevronDown,
            IconKind::Menu,
            IconKind::X,
        ];
        for kind in all {
            assert!(!kind.paths().is_empty(), "{kind:?}");
        }
    }

    #[test]
    fn test_feature_icon_mapping() {
        assert_eq!(IconKind::from(FeatureIcon::Home), IconKind::Home);
        assert_eq!(IconKind::from(FeatureIcon::Users), IconKind::Users);
    }
}
