pub const APP_TITLE: &str = "AI Resume Analyzer";
pub const APP_TAGLINE: &str = "Upload your resume and a job description to get tailored feedback.";
pub const COPYRIGHT_OWNER: &str = "ResumeAI Analyzer Pro";
pub const RULE_WIDTH: usize = 64;
pub const ITEM_INDENT: &str = "  ";
pub const BODY_INDENT: &str = "      ";
