//! 标签聚合：去重 + 按语言排序

use std::collections::HashSet;

use super::model::AppItem;
use crate::i18n::Locale;
use crate::utils::TextOrder;

/// 汇总目录中出现过的全部标签（精确去重，按 locale 排序规则升序）
/// 结果与输入应用顺序无关
pub fn collect_tags(items: &[AppItem], locale: Locale) -> Vec<String> {
    let unique: HashSet<&str> = items
        .iter()
        .flat_map(|app| app.tags.iter().map(String::as_str))
        .collect();

    let order = TextOrder::for_locale(locale);
    let mut tags: Vec<String> = unique.into_iter().map(str::to_string).collect();
    tags.sort_by(|a, b| order.compare_total(a, b));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(id: u64, tags: &[&str]) -> AppItem {
        AppItem::new(id, format!("s{}", id), format!("N{}", id)).with_tags(tags.iter().copied())
    }

    #[test]
    fn test_dedup_and_sort() {
        let items = vec![
            app(1, &["notes", "AI", "notes"]),
            app(2, &["design", "ai"]),
            app(3, &[]),
        ];
        let tags = collect_tags(&items, Locale::En);
        assert_eq!(tags, vec!["ai", "AI", "design", "notes"]);
    }

    #[test]
    fn test_insensitive_to_input_order() {
        let forward = vec![app(1, &["b", "a"]), app(2, &["c", "B"])];
        let backward = vec![app(2, &["c", "B"]), app(1, &["a", "b"])];
        assert_eq!(collect_tags(&forward, Locale::En), collect_tags(&backward, Locale::En));
    }

    #[test]
    fn test_zh_collation_keeps_all_tags() {
        let items = vec![app(1, &["效率", "笔记", "AI"])];
        let tags = collect_tags(&items, Locale::Zh);
        // zh 规则下汉字排在拉丁字母之前；拼音 bi (笔记) 在 xiao (效率) 之前
        assert_eq!(tags, vec!["笔记", "效率", "AI"]);
    }

    #[test]
    fn test_zh_mixed_tags_han_first() {
        let items = vec![app(1, &["design", "效率", "ai"]), app(2, &["笔记", "AI"])];
        let tags = collect_tags(&items, Locale::Zh);
        assert_eq!(tags, vec!["笔记", "效率", "ai", "AI", "design"]);
    }

    #[test]
    fn test_empty_catalogue() {
        assert!(collect_tags(&[], Locale::En).is_empty());
    }
}
