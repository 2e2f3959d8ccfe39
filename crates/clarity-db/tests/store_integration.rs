//! Store integration tests: on-disk persistence, config-driven opening, and
//! the full register -> submit -> adjust -> bookmark -> delete lifecycle.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use clarity_config::DatabaseConfig;
use clarity_core::entities::{QuestionnaireAnswers, Solution, StructuredInsight};
use clarity_core::enums::Topic;
use clarity_db::error::DatabaseError;
use clarity_db::service::ClarityService;

fn answers() -> QuestionnaireAnswers {
    let mut answers = QuestionnaireAnswers::default();
    answers.set(Topic::Decision, "Take the job in Berlin?", 5);
    answers.set(Topic::Emotion, "Nervous \"but\" curious", 4);
    answers.set(Topic::Today, "Comfortable, bored", 3);
    answers.set(Topic::Fear, "Failing publicly", 5);
    answers.set(Topic::Future, "Leading a team", 4);
    answers.set(Topic::Friend, "You'd regret not trying", 3);
    answers.set(Topic::Assumption, "I need to be ready first", 2);
    answers
}

fn insight(title: &str) -> StructuredInsight {
    StructuredInsight {
        title: title.into(),
        insight: "Readiness follows action.".into(),
        solutions: [
            Solution::new("Trial", "Ask for a 3-month trial."),
            Solution::new("Mentor", "Find someone who made the move."),
            Solution::new("Savings", "Build a six-month buffer."),
        ],
        challenge: "What would you do if you were ready?".into(),
    }
}

#[tokio::test]
async fn data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clarity.db");
    let path = path.to_str().unwrap();

    let entry_id = {
        let svc = ClarityService::new_local(path).await.unwrap();
        let user = svc.create_user("persistent").await.unwrap();
        svc.create_history(&user.id, &answers(), &insight("Berlin"))
            .await
            .unwrap()
            .id
    };

    let svc = ClarityService::new_local(path).await.unwrap();
    let user = svc.find_user_by_username("persistent").await.unwrap().unwrap();
    let entry = svc.get_history(&user.id, &entry_id).await.unwrap();
    assert_eq!(entry.answers, answers());
    assert_eq!(entry.insight.title, "Berlin");
}

#[tokio::test]
async fn from_config_creates_parent_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("nested").join("deeper").join("clarity.db");
    let config = DatabaseConfig {
        path: nested.to_string_lossy().into_owned(),
        ..Default::default()
    };

    let svc = ClarityService::from_config(&config).await.unwrap();
    svc.create_user("someone").await.unwrap();
    assert!(nested.exists());
}

#[tokio::test]
async fn from_config_in_memory() {
    let config = DatabaseConfig {
        path: ":memory:".into(),
        ..Default::default()
    };
    let svc = ClarityService::from_config(&config).await.unwrap();
    assert!(svc.list_history("usr-nobody", 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn full_lifecycle() {
    let svc = ClarityService::new_local(":memory:").await.unwrap();
    let user = svc.create_user("lifecycle_user").await.unwrap();

    let entry = svc
        .create_history(&user.id, &answers(), &insight("First pass"))
        .await
        .unwrap();

    let adjusted = svc
        .replace_insight(&user.id, &entry.id, &insight("Second pass"))
        .await
        .unwrap();
    assert_eq!(adjusted.id, entry.id);
    assert_eq!(adjusted.insight.title, "Second pass");

    let solution = &adjusted.insight.solutions[1];
    let card = svc
        .save_card(&user.id, &solution.title, &solution.description, Some(&entry.id))
        .await
        .unwrap();
    assert_eq!(card.title, "Mentor");

    let history = svc.list_history(&user.id, 50).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].insight.title, "Second pass");

    svc.delete_history(&user.id, &entry.id).await.unwrap();
    let cards = svc.list_cards(&user.id).await.unwrap();
    assert_eq!(cards.len(), 1);
    assert!(cards[0].history_id.is_none());
}

#[tokio::test]
async fn history_for_unknown_user_fails() {
    let svc = ClarityService::new_local(":memory:").await.unwrap();
    let err = svc
        .create_history("usr-0000000000000000", &answers(), &insight("orphan"))
        .await
        .unwrap_err();
    assert!(matches!(err, DatabaseError::LibSql(_)));
}
