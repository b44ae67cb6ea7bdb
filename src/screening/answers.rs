const PREAMBLE: &str = "I understand your question about the screening results. ";

/// Topic a follow-up question is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerTopic {
    NegativeNews,
    Legal,
    WorkHistory,
    Clarify,
}

impl AnswerTopic {
    /// First matching keyword group wins
    pub fn classify(user_query: &str) -> Self {
        let query = user_query.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|w| query.contains(w));

        if mentions(&["controversy", "negative"]) {
            AnswerTopic::NegativeNews
        } else if mentions(&["legal", "lawsuit"]) {
            AnswerTopic::Legal
        } else if mentions(&["work", "employment"]) {
            AnswerTopic::WorkHistory
        } else {
            AnswerTopic::Clarify
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerTopic::NegativeNews => "negative_news",
            AnswerTopic::Legal => "legal",
            AnswerTopic::WorkHistory => "work_history",
            AnswerTopic::Clarify => "clarify",
        }
    }

    fn body(&self) -> &'static str {
        match self {
            AnswerTopic::NegativeNews => "Based on our comprehensive screening, no controversies or negative news were found regarding this Network Member. All sources confirm a clean professional record.",
            AnswerTopic::Legal => "Our legal database search revealed no lawsuits, legal issues, or pending cases associated with this Network Member.",
            AnswerTopic::WorkHistory => "The work history verification shows consistent employment at reputable companies with no reported issues or controversies at any of the positions held.",
            AnswerTopic::Clarify => "Could you please be more specific about what aspect of the screening results you'd like me to clarify? I can provide details about legal issues, work history, or any negative news findings.",
        }
    }
}

/// Canned answer for a follow-up question
pub fn answer_for(user_query: &str) -> (AnswerTopic, String) {
    let topic = AnswerTopic::classify(user_query);
    (topic, format!("{}{}", PREAMBLE, topic.body()))
}
