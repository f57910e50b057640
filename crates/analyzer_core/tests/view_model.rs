use analyzer_core::{
    update, AnalysisReply, AppState, AvailabilityStatus, Block, Effect, Msg, Phase, ResumeFile,
};

fn with_status(status: AvailabilityStatus) -> AppState {
    update(AppState::new(), Msg::AvailabilityChanged(status)).0
}

#[test]
fn status_labels_follow_availability() {
    let cases = [
        (AvailabilityStatus::Checking, "Checking..."),
        (AvailabilityStatus::Live, "Server Live"),
        (AvailabilityStatus::Waking, "Server Waking"),
        (AvailabilityStatus::Offline, "Server Offline"),
    ];
    for (status, label) in cases {
        let view = with_status(status).view();
        assert_eq!(view.status.label, label);
        assert_eq!(view.status.status, status);
    }
}

#[test]
fn submit_button_reflects_status() {
    let cases = [
        (AvailabilityStatus::Checking, "Analyze Resume", true),
        (AvailabilityStatus::Live, "Analyze Resume", true),
        (AvailabilityStatus::Waking, "Server Waking Up...", false),
        (AvailabilityStatus::Offline, "Server Offline", false),
    ];
    for (status, label, enabled) in cases {
        let view = with_status(status).view();
        assert_eq!(view.submit.label, label, "{status:?}");
        assert_eq!(view.submit.enabled, enabled, "{status:?}");
    }
}

#[test]
fn inputs_enabled_only_when_live_or_waking() {
    assert!(with_status(AvailabilityStatus::Live).view().inputs_enabled);
    assert!(with_status(AvailabilityStatus::Waking).view().inputs_enabled);
    assert!(!with_status(AvailabilityStatus::Offline).view().inputs_enabled);
    assert!(!with_status(AvailabilityStatus::Checking).view().inputs_enabled);
}

#[test]
fn in_flight_disables_submit_and_counts_chars() {
    let state = with_status(AvailabilityStatus::Live);
    let (state, _) = update(
        state,
        Msg::FileSelected(ResumeFile::new("cv.pdf", "application/pdf", b"%PDF".to_vec())),
    );
    let (state, _) = update(state, Msg::JobDescriptionChanged("Développeur".to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(effects.len(), 1);

    let view = state.view();
    assert_eq!(view.phase, Phase::InFlight);
    assert_eq!(view.submit.label, "Analyzing...");
    assert!(!view.submit.enabled);
    assert_eq!(view.file_name.as_deref(), Some("cv.pdf"));
    assert_eq!(view.job_description_chars, 11);
    assert!(view.dirty);
}

#[test]
fn outline_is_built_from_successful_result() {
    let state = with_status(AvailabilityStatus::Live);
    let (state, _) = update(
        state,
        Msg::FileSelected(ResumeFile::new("cv.pdf", "application/pdf", b"%PDF".to_vec())),
    );
    let (state, _) = update(state, Msg::JobDescriptionChanged("SRE".to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked);
    let id = match effects.as_slice() {
        [Effect::SubmitAnalysis { id, .. }] => *id,
        other => panic!("unexpected effects {other:?}"),
    };

    let (state, _) = update(
        state,
        Msg::AnalysisReplied {
            id,
            reply: AnalysisReply::Payload {
                result: Some("Strengths\n- Clear layout".to_string()),
                analysis: None,
                error: None,
            },
        },
    );

    let view = state.view();
    let outline = view.outline.expect("outline");
    assert!(matches!(
        outline.blocks.as_slice(),
        [Block::MainSection { title, .. }] if title == "Strengths"
    ));
    assert_eq!(view.result_text.as_deref(), Some("Strengths\n- Clear layout"));
}
