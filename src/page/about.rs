//! 关于页（只用文案，不加载目录）

use serde::Serialize;

use super::layout::{LayoutData, PageMeta};

#[derive(Debug, Clone, Serialize)]
pub struct AboutPage {
    pub meta: PageMeta,
}

pub fn load_about(layout: &LayoutData) -> AboutPage {
    let dictionary = layout.dictionary;
    AboutPage {
        meta: PageMeta {
            title: layout.titled(dictionary.nav.about),
            description: dictionary.about_page.intro.to_string(),
        },
    }
}
