//! 国际化模块：界面语言、文案字典、日期格式化
pub mod locale;
pub mod dictionary;
pub mod date;
mod en;
mod zh;

pub use self::locale::{is_locale, Locale, DEFAULT_LOCALE};
pub use self::dictionary::{
    get_dictionary, get_dictionary_for_code, AboutPageText, AboutSection, CardText, DetailText,
    LanguageNames, ListText, NavText, PlatformFilters, PlatformLabels, SidebarText, TagsPageText,
    UiDictionary,
};
pub use self::date::{date_pattern, format_updated_at};
