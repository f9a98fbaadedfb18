//! Grouping of the visible list into per-section buckets.

use super::visibility::VisibleQuestion;

/// Visible questions of one section, for sidebar navigation.
#[derive(Debug, Clone)]
pub struct SectionGroup<'a> {
    pub section_number: u32,
    pub section_title: &'a str,
    pub questions: Vec<VisibleQuestion<'a>>,
}

/// Groups the visible list by `(section_number, section_title)`.
///
/// Insertion order is the contract: groups appear in first-seen order,
/// which equals catalog order since `visible` is already catalog-ordered.
/// No numeric or alphabetic resorting happens.
pub fn group_by_section<'a>(visible: &[VisibleQuestion<'a>]) -> Vec<SectionGroup<'a>> {
    let mut groups: Vec<SectionGroup<'a>> = Vec::new();

    for entry in visible {
        let key = (entry.section_number, entry.section_title);
        match groups
            .iter_mut()
            .find(|g| (g.section_number, g.section_title) == key)
        {
            Some(group) => group.questions.push(*entry),
            None => groups.push(SectionGroup {
                section_number: entry.section_number,
                section_title: entry.section_title,
                questions: vec![*entry],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::AnswerMap;
    use crate::domain::catalog::{Catalog, Question, QuestionType, Section};
    use crate::domain::questionnaire::build_visible;

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            label: id.to_string(),
            kind: QuestionType::ShortText,
            parameters: None,
            conditional_on: None,
            mandatory: false,
            slider: false,
            default_slider_value: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            sections: vec![
                Section {
                    section_number: 3,
                    title: "Damages".to_string(),
                    questions: vec![question("a"), question("b")],
                },
                Section {
                    section_number: 1,
                    title: "Intake".to_string(),
                    questions: vec![question("c")],
                },
            ],
        }
    }

    #[test]
    fn groups_preserve_first_seen_order_not_numeric_order() {
        let catalog = catalog();
        let visible = build_visible(&catalog, &AnswerMap::new());
        let groups = group_by_section(&visible);

        // Section 3 is declared first in the catalog and must stay first.
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].section_number, 3);
        assert_eq!(groups[0].section_title, "Damages");
        assert_eq!(groups[1].section_number, 1);
    }

    #[test]
    fn questions_land_in_their_section_bucket() {
        let catalog = catalog();
        let visible = build_visible(&catalog, &AnswerMap::new());
        let groups = group_by_section(&visible);

        let ids: Vec<&str> = groups[0].questions.iter().map(|v| v.id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(groups[1].questions.len(), 1);
        // Display indices keep running across section boundaries.
        assert_eq!(groups[1].questions[0].index, 2);
    }

    #[test]
    fn empty_visible_list_yields_no_groups() {
        assert!(group_by_section(&[]).is_empty());
    }
}
