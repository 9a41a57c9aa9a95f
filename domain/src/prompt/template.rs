//! Prompt templates for answer generation and classification
//!
//! Pure string assembly — the composer never queries configuration or a
//! retriever itself. Callers pass the passages they already retrieved (or
//! an empty slice when retrieval is disabled or returned nothing), which
//! keeps these functions deterministic and testable without live services.

use crate::inquiry::category::Category;

/// Output token budget for answer generation. Replies are full prose.
pub const ANSWER_MAX_TOKENS: u32 = 1000;

/// Output token budget for classification. The expected response is a
/// single category label.
pub const CLASSIFICATION_MAX_TOKENS: u32 = 100;

/// Templates for the two prompt variants of the enrichment pipeline
pub struct PromptTemplate;

impl PromptTemplate {
    /// Build the answer-generation prompt.
    ///
    /// With passages, the prompt grounds the reply in the supplied hotel
    /// information; without them it falls back to general hotel-service
    /// knowledge. Both variants carry the same politeness and
    /// escalate-if-unknown guidance.
    pub fn answer_prompt(review_text: &str, passages: &[String]) -> String {
        if passages.is_empty() {
            return format!(
                r#"お客様の問い合わせに対して、丁寧で親切な回答を生成してください。
お客様の問い合わせ：
{}
回答は以下の点を考慮してください：
- 丁寧で親切な言葉遣いを使用する
- 一般的なホテルサービスに関する回答を提供する
- 具体的な情報が必要な場合は、直接お問い合わせいただくよう案内する
回答："#,
                review_text
            );
        }

        let context_text = passages.join("\n");
        format!(
            r#"以下の情報を基に、お客様の問い合わせに丁寧で親切な回答を生成してください。
ホテル情報：
{}
お客様の問い合わせ：
{}
回答は以下の点を考慮してください：
- 丁寧で親切な言葉遣いを使用する
- 具体的で役立つ情報を提供する
- ホテル情報に基づいて正確に回答する
- 不明な点があれば、直接お問い合わせいただくよう案内する
回答："#,
            context_text, review_text
        )
    }

    /// Build the classification prompt.
    ///
    /// Embeds the full five-category taxonomy with definitions, the
    /// single-selection rule, the tie-break rule, and an output-format
    /// constraint asking for exactly one label.
    pub fn classification_prompt(review_text: &str) -> String {
        let mut taxonomy = String::new();
        for category in Category::CANONICAL {
            taxonomy.push_str(&format!(
                "- {} ({}): {}\n",
                category.label_ja(),
                category.as_str(),
                category.definition_ja()
            ));
        }

        format!(
            r#"以下のお客様の問い合わせを、次の5つのカテゴリのいずれか1つに分類してください。
カテゴリ定義：
{}
お客様の問い合わせ：
{}
分類のルール：
- 必ず1つのカテゴリだけを選択する
- 複数のカテゴリに当てはまる場合は、最も強い要素を持つカテゴリを選択する
- 回答にはカテゴリ名のみを出力する
カテゴリ："#,
            taxonomy, review_text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_prompt_embeds_passages_and_query() {
        let passages = vec![
            "Checkout is at 11am.".to_string(),
            "Breakfast served 7-9am.".to_string(),
        ];
        let prompt = PromptTemplate::answer_prompt("What time is checkout?", &passages);

        assert!(prompt.contains("Checkout is at 11am."));
        assert!(prompt.contains("Breakfast served 7-9am."));
        assert!(prompt.contains("What time is checkout?"));
        assert!(prompt.contains("ホテル情報"));
        // Passages are newline-separated, in order
        assert!(prompt.contains("Checkout is at 11am.\nBreakfast served 7-9am."));
    }

    #[test]
    fn test_answer_prompt_without_passages_omits_context_section() {
        let prompt = PromptTemplate::answer_prompt("チェックアウトは何時ですか？", &[]);

        assert!(prompt.contains("チェックアウトは何時ですか？"));
        assert!(!prompt.contains("ホテル情報"));
        assert!(prompt.contains("一般的なホテルサービス"));
        // Escalation guidance is present in both variants
        assert!(prompt.contains("直接お問い合わせいただくよう案内する"));
    }

    #[test]
    fn test_classification_prompt_lists_all_five_categories() {
        let prompt = PromptTemplate::classification_prompt("部屋が狭かったです");

        for category in Category::CANONICAL {
            assert!(prompt.contains(category.label_ja()));
            assert!(prompt.contains(category.as_str()));
        }
        assert!(prompt.contains("部屋が狭かったです"));
        assert!(prompt.contains("最も強い要素"));
        assert!(prompt.contains("カテゴリ名のみ"));
    }

    #[test]
    fn test_token_budgets_differ_by_expected_output_length() {
        assert!(ANSWER_MAX_TOKENS > CLASSIFICATION_MAX_TOKENS);
        assert_eq!(ANSWER_MAX_TOKENS, 1000);
        assert_eq!(CLASSIFICATION_MAX_TOKENS, 100);
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let a = PromptTemplate::classification_prompt("質問です");
        let b = PromptTemplate::classification_prompt("質問です");
        assert_eq!(a, b);
    }
}
