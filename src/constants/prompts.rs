//! Prompt templates for the inference endpoint. Pure string formatting;
//! inputs are embedded as-is.

pub fn quiz_prompt(subject: &str, grade: &str) -> String {
    format!(
        r#"Create 5 multiple choice questions for {subject} suitable for Grade {grade}.
Return ONLY valid JSON in this format:
[
  {{
    "question": "string",
    "options": ["A", "B", "C", "D"],
    "answer": "Correct option text"
  }}
]
Do not include explanations."#
    )
}

pub fn modules_prompt(subject: &str, grade: &str, learner_type: &str) -> String {
    format!(
        r#"Create 4 structured learning modules for {subject} Grade {grade}
for a {learner_type}.
Return ONLY valid JSON array with fields:
topic, description, key_points (array)."#
    )
}

pub fn final_assessment_prompt(subject: &str, grade: &str, learner_type: &str) -> String {
    format!(
        r#"Create a 10-question final assessment for {subject} Grade {grade}
for a {learner_type}.
Return ONLY valid JSON object with:
quiz_title, subject, grade, questions[]
Each question must include:
question, options (4), answer, explanation."#
    )
}

pub fn chat_prompt(context: &str, message: &str) -> String {
    format!(
        r#"You are a helpful learning assistant.
Context: {context}
Question: {message}
Answer clearly and simply."#
    )
}
