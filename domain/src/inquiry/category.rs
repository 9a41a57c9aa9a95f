//! Inquiry category taxonomy and normalization
//!
//! The category set is closed: every classified inquiry ends up as exactly
//! one of the five values below, never raw model text. [`Category::from_raw`]
//! extracts a category from free-form LLM output by scanning the canonical
//! labels in a fixed priority order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five canonical inquiry categories (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// A question about services or facilities
    Question,
    /// A request to improve something
    ImprovementRequest,
    /// Positive feedback
    Positive,
    /// Negative feedback or a complaint
    Negative,
    /// Anything that fits none of the above
    Other,
}

impl Category {
    /// All categories in priority order.
    ///
    /// When a raw model response mentions more than one label, the earliest
    /// entry here wins — the order resolves ambiguous multi-label outputs
    /// and must not be reordered.
    pub const CANONICAL: [Category; 5] = [
        Category::Question,
        Category::ImprovementRequest,
        Category::Positive,
        Category::Negative,
        Category::Other,
    ];

    /// Stable identifier, also the value persisted in the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Question => "Question",
            Category::ImprovementRequest => "ImprovementRequest",
            Category::Positive => "Positive",
            Category::Negative => "Negative",
            Category::Other => "Other",
        }
    }

    /// Japanese label used in the classification prompt. Models typically
    /// echo this form back.
    pub fn label_ja(&self) -> &'static str {
        match self {
            Category::Question => "質問",
            Category::ImprovementRequest => "改善要望",
            Category::Positive => "ポジティブ",
            Category::Negative => "ネガティブ",
            Category::Other => "その他",
        }
    }

    /// Short definition used in the classification prompt taxonomy.
    pub fn definition_ja(&self) -> &'static str {
        match self {
            Category::Question => "サービスや設備、手続きについて回答を求めている問い合わせ",
            Category::ImprovementRequest => "サービスや設備の改善・変更を求める要望",
            Category::Positive => "満足・感謝など肯定的な感想が中心の投稿",
            Category::Negative => "不満・苦情など否定的な感想が中心の投稿",
            Category::Other => "上記のいずれにも当てはまらない投稿",
        }
    }

    /// Normalize raw model output into a category.
    ///
    /// Scans [`Category::CANONICAL`] in order and returns the first category
    /// whose Japanese label or English name occurs as a substring of the
    /// (trimmed) response. Tolerates models that wrap the label in extra
    /// words or punctuation. Falls back to [`Category::Other`] when nothing
    /// matches, so the result is always a closed-set value.
    pub fn from_raw(response: &str) -> Category {
        let response = response.trim();
        for category in Category::CANONICAL {
            if response.contains(category.label_ja()) || response.contains(category.as_str()) {
                return category;
            }
        }
        Category::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Question" => Ok(Category::Question),
            "ImprovementRequest" => Ok(Category::ImprovementRequest),
            "Positive" => Ok(Category::Positive),
            "Negative" => Ok(Category::Negative),
            "Other" => Ok(Category::Other),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}
