use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::Product;

static TERM_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"[a-z0-9]+").ok());

const STOPWORDS: &[&str] = &[
    "a", "as", "o", "os", "e", "de", "da", "do", "das", "dos", "com", "sem", "um", "uma", "para",
    "pra", "por", "no", "na", "nos", "nas", "que", "tem", "voces", "vcs", "quero", "qual", "quais",
    "me", "eu", "the", "and", "with", "of",
];

const NAME_WEIGHT: u32 = 3;
const CATEGORY_WEIGHT: u32 = 2;
const DESCRIPTION_WEIGHT: u32 = 1;

/// Lowercases and strips Portuguese diacritics so "Açaí" and "acai" compare equal.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// Splits text into normalized search terms, dropping stopwords and single letters.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let Some(pattern) = TERM_PATTERN.as_ref() else {
        return Vec::new();
    };
    pattern
        .find_iter(&normalized)
        .map(|m| m.as_str())
        .filter(|t| t.len() > 1 && !STOPWORDS.contains(t))
        .map(str::to_string)
        .collect()
}

// Equal, or one is a prefix of the other with at least three shared chars ("pizza"/"pizzas").
fn term_matches(indexed: &str, query: &str) -> bool {
    if indexed == query {
        return true;
    }
    let (shorter, longer) = if indexed.len() <= query.len() {
        (indexed, query)
    } else {
        (query, indexed)
    };
    shorter.len() >= 3 && longer.starts_with(shorter)
}

#[derive(Debug, Clone)]
struct IndexedProduct {
    product: Product,
    name_terms: Vec<String>,
    category_terms: Vec<String>,
    description_terms: Vec<String>,
}

impl IndexedProduct {
    fn score(&self, query_terms: &[String]) -> u32 {
        query_terms
            .iter()
            .map(|q| {
                if self.name_terms.iter().any(|t| term_matches(t, q)) {
                    NAME_WEIGHT
                } else if self.category_terms.iter().any(|t| term_matches(t, q)) {
                    CATEGORY_WEIGHT
                } else if self.description_terms.iter().any(|t| term_matches(t, q)) {
                    DESCRIPTION_WEIGHT
                } else {
                    0
                }
            })
            .sum()
    }
}

/// Keyword index over the available catalog, rebuilt when older than its TTL.
#[derive(Debug, Clone)]
pub struct ProductIndex {
    entries: Vec<IndexedProduct>,
    built_at: Instant,
}

impl ProductIndex {
    pub fn build(products: Vec<Product>) -> Self {
        let entries = products
            .into_iter()
            .filter(|p| p.is_available)
            .map(|product| IndexedProduct {
                name_terms: tokenize(&product.name),
                category_terms: tokenize(&product.category),
                description_terms: product
                    .description
                    .as_deref()
                    .map(tokenize)
                    .unwrap_or_default(),
                product,
            })
            .collect();

        Self {
            entries,
            built_at: Instant::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_older_than(&self, ttl: Duration) -> bool {
        self.built_at.elapsed() >= ttl
    }

    /// Returns up to `limit` products ranked by matched terms; name hits outrank
    /// category hits, which outrank description hits. Ties are broken by name.
    pub fn search(&self, query: &str, limit: usize) -> Vec<Product> {
        let terms = tokenize(query);
        if terms.is_empty() || limit == 0 {
            return vec![];
        }

        let mut scored: Vec<(u32, &IndexedProduct)> = self
            .entries
            .iter()
            .map(|e| (e.score(&terms), e))
            .filter(|(score, _)| *score > 0)
            .collect();

        scored.sort_by(|(sa, a), (sb, b)| {
            sb.cmp(sa)
                .then_with(|| normalize(&a.product.name).cmp(&normalize(&b.product.name)))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(_, e)| e.product.clone())
            .collect()
    }
}
