//! Inline SVG icons (Lucide outlines).

use kindmap_types::{AchievementIcon, Tab};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Award,
    Bell,
    Clock,
    Heart,
    Map,
    MapPin,
    Plus,
    Star,
    TrendingUp,
    User,
    Users,
}

impl From<Tab> for IconKind {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Map => IconKind::Map,
            Tab::Alerts => IconKind::Bell,
            Tab::Create => IconKind::Plus,
            Tab::Profile => IconKind::User,
        }
    }
}

impl From<AchievementIcon> for IconKind {
    fn from(icon: AchievementIcon) -> Self {
        match icon {
            AchievementIcon::Heart => IconKind::Heart,
            AchievementIcon::Users => IconKind::Users,
            AchievementIcon::TrendingUp => IconKind::TrendingUp,
        }
    }
}

/// Properties for Icon component.
#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or(AttrValue::Static("icon"))]
    pub class: AttrValue,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let shapes = match props.kind {
        IconKind::Award => html! {
            <>
                <circle cx="12" cy="8" r="6" />
                <path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" />
            </>
        },
        IconKind::Bell => html! {
            <>
                <path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" />
                <path d="M10.3 21a1.94 1.94 0 0 0 3.4 0" />
            </>
        },
        IconKind::Clock => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <polyline points="12 6 12 12 16 14" />
            </>
        },
        IconKind::Heart => html! {
            <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" />
        },
        IconKind::Map => html! {
            <>
                <polygon points="3 6 9 3 15 6 21 3 21 18 15 21 9 18 3 21" />
                <line x1="9" x2="9" y1="3" y2="18" />
                <line x1="15" x2="15" y1="6" y2="21" />
            </>
        },
        IconKind::MapPin => html! {
            <>
                <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
                <circle cx="12" cy="10" r="3" />
            </>
        },
        IconKind::Plus => html! {
            <>
                <path d="M5 12h14" />
                <path d="M12 5v14" />
            </>
        },
        IconKind::Star => html! {
            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
        },
        IconKind::TrendingUp => html! {
            <>
                <polyline points="22 7 13.5 15.5 8.5 10.5 2 17" />
                <polyline points="16 7 22 7 22 13" />
            </>
        },
        IconKind::User => html! {
            <>
                <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
                <circle cx="12" cy="7" r="4" />
            </>
        },
        IconKind::Users => html! {
            <>
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
                <circle cx="9" cy="7" r="4" />
                <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
                <path d="M16 3.13a4 4 0 0 1 0 7.75" />
            </>
        },
    };

    html! {
        <svg
            class={props.class.clone()}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { shapes }
        </svg>
    }
}
