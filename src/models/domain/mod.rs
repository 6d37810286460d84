pub mod assessment;
pub mod learner;
pub mod module;
pub mod quiz_question;
pub mod video;
pub use assessment::{AssessmentQuestion, FinalAssessment};
pub use learner::LearnerType;
pub use module::{Module, ModuleOutline, ModuleStatus};
pub use quiz_question::QuizQuestion;
pub use video::VideoRef;
