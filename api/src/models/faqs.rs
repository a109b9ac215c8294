use std::collections::HashMap;

use serde::Serialize;
use sqlx::PgPool;
use sqlx::prelude::FromRow;

#[derive(Debug, FromRow)]
struct FaqRow {
    category_id: i32,
    name: String,
    title: Option<String>,
    text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FaqCategory {
    pub name: String,
    pub items: Vec<FaqEntry>,
}

#[derive(Debug, Serialize)]
pub struct FaqEntry {
    pub title: String,
    pub text: String,
}

pub async fn list_grouped(pool: &PgPool) -> sqlx::Result<Vec<FaqCategory>> {
    let rows: Vec<FaqRow> = sqlx::query_as(
        "SELECT cf.id AS category_id, cf.name, f.title, f.text \
         FROM category_faq cf \
         LEFT JOIN faq f ON f.category_faq_id = cf.id",
    )
    .fetch_all(pool)
    .await?;

    Ok(group_rows(rows))
}

// Categories keep their first-seen position in the join; a category with no
// FAQs still produces one row, with NULL title and text.
fn group_rows(rows: Vec<FaqRow>) -> Vec<FaqCategory> {
    let mut categories: Vec<FaqCategory> = Vec::new();
    let mut slots: HashMap<i32, usize> = HashMap::new();

    for row in rows {
        let slot = match slots.get(&row.category_id) {
            Some(&slot) => slot,
            None => {
                slots.insert(row.category_id, categories.len());
                categories.push(FaqCategory {
                    name: row.name,
                    items: Vec::new(),
                });
                categories.len() - 1
            }
        };

        if let (Some(title), Some(text)) = (row.title, row.text) {
            categories[slot].items.push(FaqEntry { title, text });
        }
    }

    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category_id: i32, name: &str, faq: Option<(&str, &str)>) -> FaqRow {
        FaqRow {
            category_id,
            name: name.to_string(),
            title: faq.map(|(title, _)| title.to_string()),
            text: faq.map(|(_, text)| text.to_string()),
        }
    }

    #[test]
    fn groups_faqs_under_their_category() {
        let grouped = group_rows(vec![
            row(1, "Ordering", Some(("Do you deliver?", "Yes, city-wide."))),
            row(1, "Ordering", Some(("Minimum order?", "None."))),
            row(2, "Allergies", None),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].name, "Ordering");
        assert_eq!(grouped[0].items.len(), 2);
        assert_eq!(grouped[0].items[0].title, "Do you deliver?");
        assert_eq!(grouped[1].name, "Allergies");
        assert!(grouped[1].items.is_empty());
    }

    #[test]
    fn categories_stay_in_first_seen_order_when_rows_interleave() {
        let grouped = group_rows(vec![
            row(7, "Hours", Some(("Open late?", "Until midnight."))),
            row(3, "Parking", Some(("Valet?", "Weekends only."))),
            row(7, "Hours", Some(("Holidays?", "Closed on holidays."))),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].name, "Hours");
        assert_eq!(grouped[0].items.len(), 2);
        assert_eq!(grouped[0].items[1].title, "Holidays?");
        assert_eq!(grouped[1].name, "Parking");
    }

    #[test]
    fn entries_expose_only_title_and_text() {
        let grouped = group_rows(vec![row(
            1,
            "Ordering",
            Some(("Do you deliver?", "Yes, city-wide.")),
        )]);

        let value = serde_json::to_value(&grouped).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "name": "Ordering",
                "items": [{ "title": "Do you deliver?", "text": "Yes, city-wide." }],
            }])
        );
    }
}
