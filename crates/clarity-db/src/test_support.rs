//! Shared test utilities for clarity-db unit tests.

pub(crate) mod helpers {
    use clarity_core::entities::{QuestionnaireAnswers, Solution, StructuredInsight, User};
    use clarity_core::enums::Topic;

    use crate::ClarityDb;
    use crate::service::ClarityService;

    /// Create an in-memory service.
    pub async fn test_service() -> ClarityService {
        let db = ClarityDb::open_local(":memory:").await.unwrap();
        ClarityService::from_db(db)
    }

    /// Register a user and return it.
    pub async fn test_user(svc: &ClarityService, username: &str) -> User {
        svc.create_user(username).await.unwrap()
    }

    pub fn sample_answers() -> QuestionnaireAnswers {
        let mut answers = QuestionnaireAnswers::default();
        for (i, topic) in Topic::ALL.into_iter().enumerate() {
            answers.set(topic, format!("{topic} answer"), u8::try_from(i % 5 + 1).unwrap());
        }
        answers
    }

    pub fn sample_insight(tag: &str) -> StructuredInsight {
        StructuredInsight {
            title: format!("{tag} title"),
            insight: format!("{tag} insight\n\nsecond paragraph"),
            solutions: [
                Solution::new(format!("{tag} s1"), format!("{tag} d1")),
                Solution::new(format!("{tag} s2"), format!("{tag} d2")),
                Solution::new(format!("{tag} s3"), format!("{tag} d3")),
            ],
            challenge: format!("{tag} challenge?"),
        }
    }
}
