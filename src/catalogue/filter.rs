//! 平台 / 分类 / 标签筛选
//! 查询参数解析均为全函数：不识别的取值不报错，按「不筛选」或「无匹配」处理

use super::model::{AppItem, Category, Platform};

/// 解析平台查询参数：仅精确匹配四个平台值时返回 Some
pub fn parse_platform(raw: Option<&str>) -> Option<Platform> {
    raw.and_then(Platform::from_exact)
}

/// 按平台筛选；未指定平台时原样返回全部（保持顺序）
pub fn filter_by_platform(items: &[AppItem], platform: Option<Platform>) -> Vec<&AppItem> {
    match platform {
        Some(platform) => items.iter().filter(|app| app.has_platform(platform)).collect(),
        None => items.iter().collect(),
    }
}

/// 解析分类查询参数
/// 缺失/空串 → None（不筛选）；「Mobile apps」→ Mobile；平台值 → Platform；其余 → Unmatched
pub fn parse_category(raw: Option<&str>) -> Option<Category> {
    let raw = raw.filter(|r| !r.is_empty())?;
    if raw == Category::MOBILE {
        return Some(Category::Mobile);
    }
    Some(match Platform::from_exact(raw) {
        Some(platform) => Category::Platform(platform),
        None => Category::Unmatched(raw.to_string()),
    })
}

/// 按分类筛选；未指定分类时原样返回全部
pub fn filter_by_category<'a>(items: &'a [AppItem], category: Option<&Category>) -> Vec<&'a AppItem> {
    match category {
        Some(category) => items.iter().filter(|app| category.matches(app)).collect(),
        None => items.iter().collect(),
    }
}

/// 按标签精确筛选（区分大小写）
pub fn filter_by_tag<'a>(items: &'a [AppItem], tag: &str) -> Vec<&'a AppItem> {
    items.iter().filter(|app| app.has_tag(tag)).collect()
}
