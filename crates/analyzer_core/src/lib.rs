//! Analyzer core: pure submission state machine, result formatter and
//! view-model helpers.
mod effect;
mod format;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use format::{
    classify_line, format_result, Block, FormattedOutline, Item, LineRule, LINE_RULES,
    SECTION_KEYWORDS,
};
pub use msg::{AnalysisReply, Msg};
pub use state::{
    AppState, AvailabilityStatus, ErrorKind, Phase, ResumeFile, SubmissionError, SubmissionId,
    PDF_MEDIA_TYPE,
};
pub use update::{messages, update};
pub use view_model::{AppViewModel, StatusIndicator, SubmitButton};
