//! 中文界面文案

use super::dictionary::{
    AboutPageText, AboutSection, CardText, DetailText, LanguageNames, ListText, NavText,
    PlatformFilters, PlatformLabels, SidebarText, TagsPageText, UiDictionary,
};
use super::locale::Locale;

pub static DICTIONARY: UiDictionary = UiDictionary {
    locale: Locale::Zh,
    site_title: "huyixi 的应用栈",
    site_description: "面向产品团队的精选工具清单，聚焦极简而高价值的数字产品组件。",
    tagline: "极简「应用栈」陈列：快速筛选、深入了解每个工具的独特之处。",
    nav: NavText {
        menu: "菜单",
        close_menu: "关闭菜单",
        about: "关于",
        rss: "RSS",
        rss_description: "订阅 RSS",
        bookmark: "收藏",
        bookmark_description: "把这个清单加入浏览器书签",
        bookmark_notice: "链接已复制 —— 按 Ctrl + D（macOS 上按 ⌘ + D）收藏。",
        bookmark_fallback: "请手动按 Ctrl + D 或 ⌘ + D 来添加书签。",
        theme_toggle: "切换主题",
        language: "语言",
        language_names: LanguageNames { en: "EN", zh: "中文" },
        skip_to_content: "跳转到正文",
    },
    sidebar: SidebarText {
        title: "应用栈",
        filters_heading: "平台筛选",
        links_heading: "更多",
        platform_filters: PlatformFilters {
            all: "全部",
            platforms: PlatformLabels {
                web: "Web",
                ios: "iOS",
                android: "Android",
                desktop: "桌面端",
            },
        },
        about: "项目简介",
        github: "GitHub",
    },
    card: CardText {
        open_detail: "查看详情",
        website: "官网",
        repository: "仓库",
        updated_prefix: "更新",
    },
    list: ListText {
        empty: "暂无符合条件的应用。",
        count_label: "个应用",
        filtered_by: "筛选",
        all_platforms: "全部平台",
    },
    detail: DetailText {
        summary: "概要",
        platforms: "平台",
        tags: "标签",
        website: "官网",
        repo: "仓库",
        similar: "相似应用",
        similar_empty: "还没有找到相似的应用。",
        share: "分享",
        share_copy: "复制链接",
        share_copied: "链接已复制到剪贴板。",
        share_failed: "当前浏览器暂不支持分享功能。",
    },
    tags_page: TagsPageText {
        heading: "标签",
        description: "属于此标签的工具",
    },
    about_page: AboutPageText {
        title: "关于本项目",
        intro: "站点遵循 App Stacks 展示方式：左栏即时筛选，右栏按“线框分割”风格陈列，便于快速横向比较。",
        sections: &[
            AboutSection {
                title: "设计原则",
                points: &[
                    "以边框和留白建立层级，尽量避免阴影。",
                    "紧凑的排版比例，强调重要信息的对比。",
                    "默认可访问：语义标签、键盘焦点状态、无障碍支持。",
                ],
            },
            AboutSection {
                title: "项目意义",
                points: &[
                    "帮助团队查找轻量级应用组合。",
                    "为未来接入 API 数据的目录做基础。",
                    "展示多语言界面与 SvelteKit + Tailwind 的结合。",
                ],
            },
        ],
    },
    platform_labels: PlatformLabels {
        web: "Web 应用",
        ios: "iOS 应用",
        android: "Android 应用",
        desktop: "桌面应用",
    },
};
