//! Navigation manifest construction.

use coursegen_shared::{Outline, SidebarCategory, SidebarConfig};

/// Build the sidebar manifest: one category per module, document
/// references in input order.
pub fn build_sidebar(outline: &Outline) -> SidebarConfig {
    let docs = outline
        .modules
        .iter()
        .map(|module| SidebarCategory {
            kind: "category".into(),
            label: module.module_name.clone(),
            items: module
                .chapters
                .iter()
                .map(|c| format!("{}/chapter-{}", module.module_slug, c.chapter_number))
                .collect(),
        })
        .collect();

    SidebarConfig { docs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursegen_shared::{Chapter, OutlineModule};

    #[test]
    fn one_category_per_module_in_order() {
        let outline = Outline {
            topic: "T".into(),
            language: "en".into(),
            audience: "beginner".into(),
            modules: vec![
                OutlineModule {
                    module_number: 1,
                    module_name: "Basics".into(),
                    module_slug: "module-1".into(),
                    description: "".into(),
                    chapters: vec![
                        Chapter {
                            chapter_number: 2,
                            title: "B".into(),
                            description: "".into(),
                            sections: vec![],
                            learning_objectives: vec![],
                        },
                        Chapter {
                            chapter_number: 1,
                            title: "A".into(),
                            description: "".into(),
                            sections: vec![],
                            learning_objectives: vec![],
                        },
                    ],
                },
                OutlineModule {
                    module_number: 2,
                    module_name: "Advanced".into(),
                    module_slug: "module-2".into(),
                    description: "".into(),
                    chapters: vec![],
                },
            ],
        };

        let sidebar = build_sidebar(&outline);
        assert_eq!(sidebar.docs.len(), 2);
        assert_eq!(sidebar.docs[0].kind, "category");
        assert_eq!(sidebar.docs[0].label, "Basics");
        // Input order, not re-sorted
        assert_eq!(
            sidebar.docs[0].items,
            vec!["module-1/chapter-2", "module-1/chapter-1"]
        );
        assert!(sidebar.docs[1].items.is_empty());
    }
}
