use gurukul_server::models::domain::{
    FinalAssessment, LearnerType, Module, ModuleStatus, QuizQuestion, VideoRef,
};

#[test]
fn quiz_question_round_trips_through_json() {
    let question = QuizQuestion {
        question: "Which planet is known as the Red Planet?".to_string(),
        options: vec![
            "Venus".to_string(),
            "Mars".to_string(),
            "Jupiter".to_string(),
            "Mercury".to_string(),
        ],
        answer: "Mars".to_string(),
    };

    let json_str = serde_json::to_string(&question).unwrap();
    let deserialized: QuizQuestion = serde_json::from_str(&json_str).unwrap();

    assert_eq!(question, deserialized);
}

#[test]
fn module_serializes_status_and_videos() {
    let module = Module {
        topic: "Electricity".to_string(),
        description: "Current, voltage and resistance.".to_string(),
        key_points: vec!["Ohm's law".to_string()],
        youtube_videos: vec![VideoRef {
            title: "Ohm's Law in 10 minutes".to_string(),
            channel: "Circuit Basics".to_string(),
            thumbnail_url: "https://i.ytimg.com/vi/abc/mqdefault.jpg".to_string(),
            video_url: VideoRef::watch_url("abc"),
            embed_url: VideoRef::embed_url("abc"),
        }],
        status: ModuleStatus::Unlocked,
    };

    let json = serde_json::to_value(&module).unwrap();
    assert_eq!(json["status"], "unlocked");
    assert_eq!(
        json["youtube_videos"][0]["video_url"],
        "https://www.youtube.com/watch?v=abc"
    );
    assert_eq!(
        json["youtube_videos"][0]["embed_url"],
        "https://www.youtube.com/embed/abc"
    );
}

#[test]
fn fallback_assessment_shape() {
    let json = serde_json::to_value(FinalAssessment::fallback("Science", "10")).unwrap();

    assert_eq!(json["quiz_title"], "Sample Science Assessment");
    assert_eq!(json["is_fallback"], true);
    assert!(json["questions"].as_array().unwrap().is_empty());
}

#[test]
fn learner_type_thresholds() {
    assert_eq!(LearnerType::from_score(40).label(), "Slow Learner");
    assert_eq!(LearnerType::from_score(41).label(), "Intermediate Learner");
    assert_eq!(LearnerType::from_score(75).label(), "Intermediate Learner");
    assert_eq!(LearnerType::from_score(76).label(), "Fast Learner");
}
