//! 英文界面文案

use super::dictionary::{
    AboutPageText, AboutSection, CardText, DetailText, LanguageNames, ListText, NavText,
    PlatformFilters, PlatformLabels, SidebarText, TagsPageText, UiDictionary,
};
use super::locale::Locale;

pub static DICTIONARY: UiDictionary = UiDictionary {
    locale: Locale::En,
    site_title: "huyixi's Apps",
    site_description: "Curated app stack featuring minimalist, high-signal tools for building digital products.",
    tagline: "Minimalist catalogue of app building blocks and product stacks.",
    nav: NavText {
        menu: "Menu",
        close_menu: "Close menu",
        about: "About",
        rss: "RSS",
        rss_description: "Subscribe via RSS",
        bookmark: "⌘+D to Bookmark",
        bookmark_description: "Save this catalogue for quick reference",
        bookmark_notice: "Link copied — press Ctrl + D (⌘ + D on macOS) to bookmark.",
        bookmark_fallback: "Press Ctrl + D (⌘ + D on macOS) to add a bookmark manually.",
        theme_toggle: "Toggle theme",
        language: "Language",
        language_names: LanguageNames { en: "EN", zh: "中文" },
        skip_to_content: "Skip to content",
    },
    sidebar: SidebarText {
        title: "Stacks",
        filters_heading: "Platforms",
        links_heading: "Links",
        platform_filters: PlatformFilters {
            all: "All",
            platforms: PlatformLabels {
                web: "Web",
                ios: "iOS",
                android: "Android",
                desktop: "Desktop",
            },
        },
        about: "About the project",
        github: "GitHub",
    },
    card: CardText {
        open_detail: "View details",
        website: "Website",
        repository: "Repository",
        updated_prefix: "Updated",
    },
    list: ListText {
        empty: "No apps match this view yet.",
        count_label: "apps",
        filtered_by: "Filtered by",
        all_platforms: "All platforms",
    },
    detail: DetailText {
        summary: "Overview",
        platforms: "Platforms",
        tags: "Tags",
        website: "Website",
        repo: "Repository",
        similar: "Similar apps",
        similar_empty: "No similar apps surfaced yet.",
        share: "Share",
        share_copy: "Copy link",
        share_copied: "Link copied to clipboard.",
        share_failed: "Sharing is not supported in this browser.",
    },
    tags_page: TagsPageText {
        heading: "Apps tagged",
        description: "Curated tools filed under",
    },
    about_page: AboutPageText {
        title: "About this catalogue",
        intro: "This showcase follows the App Stacks format — pairing a left-hand platform filter with a right-hand catalogue so you can scan quickly and dive deeper when something resonates.",
        sections: &[
            AboutSection {
                title: "Principles",
                points: &[
                    "Border-first interface: segments use lines, not shadows.",
                    "Minimal typography: small type sizes with clear hierarchy.",
                    "Accessible by default: keyboard, focus styles, and semantic regions.",
                ],
            },
            AboutSection {
                title: "Why it exists",
                points: &[
                    "Help founders compare lightweight tools across platforms.",
                    "Showcase product stacks with just enough context.",
                    "Provide a starting point for future API-backed catalogues.",
                ],
            },
        ],
    },
    platform_labels: PlatformLabels {
        web: "Web apps",
        ios: "iOS apps",
        android: "Android apps",
        desktop: "Desktop apps",
    },
};
