//! 相似应用推荐：按共享标签数量排序

use std::collections::HashSet;

use super::model::AppItem;
use super::sorter::compare_weight_desc;

/// 默认推荐数量
pub const DEFAULT_SIMILAR_LIMIT: usize = 6;

/// 查找与 current 相似的应用
/// 排除自身（按 id 判断）与无共享标签的应用；共享标签数降序，其次权重降序；最多 limit 个
pub fn find_similar<'a>(items: &'a [AppItem], current: &AppItem, limit: usize) -> Vec<&'a AppItem> {
    let tag_set: HashSet<&str> = current.tags.iter().map(String::as_str).collect();

    let mut candidates: Vec<(usize, &AppItem)> = items
        .iter()
        .filter(|item| item.id != current.id)
        .map(|item| {
            let shared = item.tags.iter().filter(|tag| tag_set.contains(tag.as_str())).count();
            (shared, item)
        })
        .filter(|(shared, _)| *shared > 0)
        .collect();

    candidates.sort_by(|(shared_a, a), (shared_b, b)| {
        shared_b.cmp(shared_a).then_with(|| compare_weight_desc(a, b))
    });

    candidates.into_iter().take(limit).map(|(_, item)| item).collect()
}
