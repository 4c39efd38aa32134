//! 目录规范展示顺序
//! 权重降序 → 更新时间降序 → 名称升序（英文排序规则），稳定排序

use std::cmp::Ordering;

use super::model::AppItem;
use crate::i18n::Locale;
use crate::utils::{epoch_millis, TextOrder};

/// 按规范顺序排序，返回新的序列（不修改输入）
pub fn sort_apps(items: &[AppItem]) -> Vec<AppItem> {
    let order = TextOrder::for_locale(Locale::En);
    let mut keyed: Vec<(i64, &AppItem)> = items
        .iter()
        .map(|app| (epoch_millis(app.updated_at.as_deref()), app))
        .collect();

    // Vec::sort_by 为稳定排序，三个键都相等时保持原相对顺序
    keyed.sort_by(|(date_a, a), (date_b, b)| {
        compare_weight_desc(a, b)
            .then_with(|| date_b.cmp(date_a))
            .then_with(|| order.compare(&a.name, &b.name))
    });

    keyed.into_iter().map(|(_, app)| app.clone()).collect()
}

/// 权重降序（缺失视为 0）
pub(crate) fn compare_weight_desc(a: &AppItem, b: &AppItem) -> Ordering {
    b.weight_or_zero()
        .partial_cmp(&a.weight_or_zero())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::model::Platform;

    fn names(items: &[AppItem]) -> Vec<&str> {
        items.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_weight_first() {
        let items = vec![
            AppItem::new(1u64, "a", "Alpha").with_weight(1.0),
            AppItem::new(2u64, "b", "Beta").with_weight(5.0),
        ];
        assert_eq!(names(&sort_apps(&items)), vec!["Beta", "Alpha"]);
        // 输入未被修改
        assert_eq!(names(&items), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_missing_weight_is_zero() {
        let items = vec![
            AppItem::new(1u64, "neg", "Negative").with_weight(-1.0),
            AppItem::new(2u64, "none", "None"),
            AppItem::new(3u64, "pos", "Positive").with_weight(0.5),
        ];
        assert_eq!(names(&sort_apps(&items)), vec!["Positive", "None", "Negative"]);
    }

    #[test]
    fn test_newer_updated_at_first_and_invalid_is_oldest() {
        let items = vec![
            AppItem::new(1u64, "bad", "Bad").with_updated_at("yesterday"),
            AppItem::new(2u64, "old", "Old").with_updated_at("2023-01-01T00:00:00Z"),
            AppItem::new(3u64, "new", "New").with_updated_at("2024-06-01T00:00:00Z"),
            AppItem::new(4u64, "none", "Absent"),
        ];
        let sorted = sort_apps(&items);
        assert_eq!(names(&sorted[..2]), vec!["New", "Old"]);
        // 无效与缺失都视为 epoch 0，按名称排序
        assert_eq!(names(&sorted[2..]), vec!["Absent", "Bad"]);
    }

    #[test]
    fn test_reduced_precision_updated_at_is_not_oldest() {
        let items = vec![
            AppItem::new(1u64, "absent", "Absent"),
            AppItem::new(2u64, "month", "Month").with_updated_at("2024-03"),
            AppItem::new(3u64, "zulu", "Zulu").with_updated_at("2024-03-05T10:00Z"),
            AppItem::new(4u64, "year", "Year").with_updated_at("2024"),
        ];
        assert_eq!(names(&sort_apps(&items)), vec!["Zulu", "Month", "Year", "Absent"]);
    }

    #[test]
    fn test_name_uses_english_collation() {
        let items = vec![
            AppItem::new(1u64, "z", "Zed"),
            AppItem::new(2u64, "b", "bear"),
            AppItem::new(3u64, "a", "Apple"),
        ];
        assert_eq!(names(&sort_apps(&items)), vec!["Apple", "bear", "Zed"]);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let items = vec![
            AppItem::new(1u64, "first", "Same").with_platforms([Platform::Web]),
            AppItem::new(2u64, "second", "Same").with_platforms([Platform::Ios]),
        ];
        let sorted = sort_apps(&items);
        assert_eq!(sorted[0].slug, "first");
        assert_eq!(sorted[1].slug, "second");
    }

    #[test]
    fn test_idempotent() {
        let items = vec![
            AppItem::new(1u64, "c", "Charlie").with_updated_at("2024-01-01"),
            AppItem::new(2u64, "a", "alpha").with_weight(2.0),
            AppItem::new(3u64, "b", "Bravo"),
            AppItem::new(4u64, "d", "Delta").with_weight(2.0).with_updated_at("2022-05-05"),
            AppItem::new(5u64, "e", "Echo").with_updated_at("not-a-date"),
        ];
        let once = sort_apps(&items);
        let twice = sort_apps(&once);
        assert_eq!(once, twice);
    }
}
