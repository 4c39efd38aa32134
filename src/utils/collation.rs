//! 按语言规则比较字符串（ICU 排序器）
//! 排序器构建失败时退化为按码点比较，不会报错
//! 每种语言只构建一次，进程内共享

use std::cmp::Ordering;

use icu::collator::options::CollatorOptions;
use icu::collator::{Collator, CollatorBorrowed, CollatorPreferences};
use icu::locale::locale;
use once_cell::sync::Lazy;
use tracing::warn;

use crate::i18n::Locale;

/// 文本排序规则
pub enum TextOrder {
    /// ICU 语言排序
    Collated(CollatorBorrowed<'static>),
    /// 码点顺序（兜底）
    Binary,
}

static EN_ORDER: Lazy<TextOrder> = Lazy::new(|| TextOrder::build(Locale::En));
static ZH_ORDER: Lazy<TextOrder> = Lazy::new(|| TextOrder::build(Locale::Zh));

impl TextOrder {
    /// 界面语言对应的共享排序器（en 使用英文排序规则，zh 使用中文拼音排序规则）
    pub fn for_locale(locale: Locale) -> &'static TextOrder {
        match locale {
            Locale::En => &EN_ORDER,
            Locale::Zh => &ZH_ORDER,
        }
    }

    fn build(locale: Locale) -> Self {
        let prefs: CollatorPreferences = match locale {
            Locale::En => locale!("en").into(),
            Locale::Zh => locale!("zh").into(),
        };

        match Collator::try_new(prefs, CollatorOptions::default()) {
            Ok(collator) => Self::Collated(collator),
            Err(e) => {
                warn!("[{}] 排序器构建失败，退化为码点排序：{}", locale.code(), e);
                Self::Binary
            }
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Collated(collator) => collator.compare(a, b),
            Self::Binary => a.cmp(b),
        }
    }

    /// 排序器认为相等时再按码点区分，保证结果全序
    pub fn compare_total(&self, a: &str, b: &str) -> Ordering {
        self.compare(a, b).then_with(|| a.cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_collation_ignores_case_at_primary_level() {
        let order = TextOrder::for_locale(Locale::En);
        // 码点顺序下 'Z' < 'a'，英文排序规则下 apple 在 Zebra 之前
        assert_eq!(order.compare("apple", "Zebra"), Ordering::Less);
        assert_eq!(order.compare("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_english_collation_places_accented_letters_near_base() {
        let order = TextOrder::for_locale(Locale::En);
        assert_eq!(order.compare("éclair", "fig"), Ordering::Less);
    }

    #[test]
    fn test_collator_is_shared_per_locale() {
        let en = TextOrder::for_locale(Locale::En);
        assert!(std::ptr::eq(en, TextOrder::for_locale(Locale::En)));
        assert!(!std::ptr::eq(en, TextOrder::for_locale(Locale::Zh)));
        assert!(matches!(en, TextOrder::Collated(_)));
    }

    #[test]
    fn test_binary_fallback() {
        assert_eq!(TextOrder::Binary.compare("Z", "a"), Ordering::Less);
    }

    #[test]
    fn test_compare_total_never_equal_for_distinct_strings() {
        let order = TextOrder::for_locale(Locale::En);
        assert_ne!(order.compare_total("a", "A"), Ordering::Equal);
        assert_eq!(order.compare_total("a", "a"), Ordering::Equal);
    }
}
