pub mod generate_handler;
pub mod page_handler;

pub use generate_handler::{chat, generate_final_assessment, generate_modules, generate_quiz};
pub use page_handler::{
    final_assessment_page, health_check, index, login, modules_page, quiz_page, report, signup,
    streams, streams11_12,
};
