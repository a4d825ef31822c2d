//! Style quiz: maps a shopper's answers to collection affinities and
//! recommends matching products.

use std::collections::HashMap;

use harlow_core::Product;

use crate::catalog::Catalog;

/// Maximum number of recommended products.
const QUIZ_RECOMMENDATION_LIMIT: usize = 6;

/// One selectable answer, tagged with the collections it signals.
#[derive(Debug, Clone)]
pub struct QuizOption {
    /// Display label.
    pub label: &'static str,
    /// Collection slugs this answer counts toward.
    pub collections: &'static [&'static str],
}

/// One quiz question.
#[derive(Debug, Clone)]
pub struct QuizQuestion {
    /// Display prompt.
    pub prompt: &'static str,
    /// Selectable answers.
    pub options: &'static [QuizOption],
}

/// The style quiz.
#[derive(Debug, Clone)]
pub struct StyleQuiz {
    questions: &'static [QuizQuestion],
}

/// The fixed question set.
static QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        prompt: "What does a typical weekend look like?",
        options: &[
            QuizOption {
                label: "Coffee runs and errands",
                collections: &["tees", "knitwear"],
            },
            QuizOption {
                label: "Out of the city entirely",
                collections: &["outerwear", "trousers"],
            },
            QuizOption {
                label: "Dinners that run late",
                collections: &["dresses", "shirts"],
            },
        ],
    },
    QuizQuestion {
        prompt: "Pick a palette",
        options: &[
            QuizOption {
                label: "Warm neutrals",
                collections: &["knitwear", "summer"],
            },
            QuizOption {
                label: "Black on black",
                collections: &["outerwear", "trousers"],
            },
            QuizOption {
                label: "Washed pastels",
                collections: &["dresses", "summer"],
            },
        ],
    },
    QuizQuestion {
        prompt: "How do you want clothes to fit?",
        options: &[
            QuizOption {
                label: "Relaxed, lived-in",
                collections: &["tees", "summer"],
            },
            QuizOption {
                label: "Structured and sharp",
                collections: &["shirts", "trousers"],
            },
            QuizOption {
                label: "Somewhere in between",
                collections: &["knitwear", "shirts"],
            },
        ],
    },
];

impl StyleQuiz {
    /// The built-in question set.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            questions: QUESTIONS,
        }
    }

    /// The questions, in presentation order.
    #[must_use]
    pub const fn questions(&self) -> &'static [QuizQuestion] {
        self.questions
    }

    /// Recommend products for a set of answers.
    ///
    /// `answers[i]` is the chosen option index for question `i`;
    /// out-of-range indices (and extra answers) are ignored. Products are
    /// scored by how many affinity points their collections collect across
    /// the answers; ties break by rating, then catalog order. Only
    /// purchasable products are recommended. With no usable answers the
    /// featured products stand in, so the results page is never empty.
    #[must_use]
    pub fn recommend(&self, answers: &[usize], catalog: &Catalog) -> Vec<Product> {
        let mut affinity: HashMap<&str, u32> = HashMap::new();
        for (question, &choice) in self.questions.iter().zip(answers) {
            let Some(option) = question.options.get(choice) else {
                tracing::warn!(choice, "Ignoring out-of-range quiz answer");
                continue;
            };
            for collection in option.collections {
                *affinity.entry(collection).or_insert(0) += 1;
            }
        }

        if affinity.is_empty() {
            return catalog
                .featured()
                .into_iter()
                .filter(|p| p.in_stock)
                .take(QUIZ_RECOMMENDATION_LIMIT)
                .cloned()
                .collect();
        }

        let mut scored: Vec<(u32, &Product)> = catalog
            .products()
            .iter()
            .filter(|p| p.in_stock)
            .filter_map(|product| {
                let score: u32 = product
                    .collections
                    .iter()
                    .filter_map(|c| affinity.get(c.as_str()))
                    .sum();
                (score > 0).then_some((score, product))
            })
            .collect();

        // Stable sort: catalog order is the final tiebreak
        scored.sort_by(|(score_a, a), (score_b, b)| {
            score_b.cmp(score_a).then_with(|| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        });

        scored
            .into_iter()
            .take(QUIZ_RECOMMENDATION_LIMIT)
            .map(|(_, product)| product.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use harlow_core::ProductId;
    use rust_decimal::Decimal;

    fn product(id: &str, collections: &[&str], rating: f64, in_stock: bool) -> Product {
        Product {
            id: ProductId::new(id),
            slug: id.to_owned(),
            name: format!("Product {id}"),
            description: String::new(),
            price: Decimal::new(3000, 2),
            sale_price: None,
            images: vec![format!("/images/{id}.jpg")],
            sizes: Vec::new(),
            collections: collections.iter().map(|&c| c.to_owned()).collect(),
            in_stock,
            is_new: false,
            is_sale: false,
            is_featured: true,
            rating,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_products(vec![
            product("tee", &["tees"], 4.0, true),
            product("coat", &["outerwear"], 4.8, true),
            product("trouser", &["trousers"], 4.5, true),
            product("sold-out-parka", &["outerwear", "trousers"], 5.0, false),
        ])
    }

    #[test]
    fn test_recommendations_follow_affinity() {
        let quiz = StyleQuiz::builtin();
        // "Out of the city" + "Black on black" both signal outerwear and
        // trousers; the third answer is out of range and ignored
        let recommended = quiz.recommend(&[1, 1, 9], &catalog());

        let ids: Vec<&str> = recommended.iter().map(|p| p.id.as_str()).collect();
        // The coat outranks the trouser on rating; the tee scores zero and
        // the sold-out parka is excluded despite the best score
        assert_eq!(ids, ["coat", "trouser"]);
    }

    #[test]
    fn test_no_usable_answers_falls_back_to_featured() {
        let quiz = StyleQuiz::builtin();
        let recommended = quiz.recommend(&[], &catalog());
        assert!(!recommended.is_empty());
        assert!(recommended.iter().all(|p| p.in_stock));
    }

    #[test]
    fn test_every_option_tags_known_collections() {
        // Keeps the question set honest against the mock catalog
        let catalog = Catalog::builtin().expect("builtin data must parse");
        let known = catalog.collections();
        for question in StyleQuiz::builtin().questions() {
            for option in question.options {
                for collection in option.collections {
                    assert!(
                        known.iter().any(|c| c == collection),
                        "quiz references unknown collection {collection}"
                    );
                }
            }
        }
    }
}
