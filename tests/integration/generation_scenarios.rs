//! End-to-end orchestration runs against a scripted client.

use super::test_utils::{campaign, ScriptedClient};
use adcraft::error::{ApiError, GenerationError, ValidationError};
use adcraft::generation::{GenerationOrchestrator, OutcomeStatus};
use adcraft::progress::ProgressLog;
use adcraft::types::{JobKind, Variation};

#[tokio::test]
async fn two_image_platforms_both_succeed() {
    let client = ScriptedClient::new();
    let log = ProgressLog::new();
    let outcome = GenerationOrchestrator::new()
        .run(
            &campaign(&["X (formerly Twitter)", "Instagram Story"], false),
            &client,
            &log,
        )
        .await
        .unwrap();

    let names: Vec<_> = outcome.creatives.iter().map(|c| c.platform_name()).collect();
    assert_eq!(names, vec!["Instagram Story", "X (formerly Twitter)"]);
    assert!(outcome.failures.is_empty());
    assert_eq!(outcome.status(), OutcomeStatus::Complete);
    assert!(outcome.error_summary().is_none());
    assert_eq!(client.calls_of("image:"), 2);
    assert_eq!(log.matching("Generating image creative for").len(), 2);
}

#[tokio::test]
async fn quota_failure_on_variation_b_keeps_variation_a() {
    let client = ScriptedClient::new().fail_image(
        "TikTok Poster",
        Some(Variation::B),
        GenerationError::QuotaExhausted("429 RESOURCE_EXHAUSTED".to_string()),
    );
    let outcome = GenerationOrchestrator::new()
        .run(&campaign(&["TikTok Poster"], true), &client, &ProgressLog::new())
        .await
        .unwrap();

    assert_eq!(outcome.creatives.len(), 1);
    assert_eq!(outcome.creatives[0].variation(), Some(Variation::A));
    assert_eq!(outcome.failures.len(), 1);
    assert!(outcome.has_quota_failure());
    assert!(outcome.failures[0].reason.contains("quota"));
    assert!(outcome.failures[0]
        .reason
        .starts_with("Image for TikTok Poster (variation B) failed"));
    let summary = outcome.error_summary().unwrap();
    assert!(summary.starts_with("Generation finished with 1 error(s): "));
    assert_eq!(outcome.status(), OutcomeStatus::Partial);
}

#[tokio::test(start_paused = true)]
async fn video_polls_until_done() {
    let client = ScriptedClient::new().with_polls(&[false, false, true]);
    let log = ProgressLog::new();
    let started = tokio::time::Instant::now();
    let outcome = GenerationOrchestrator::new()
        .run(&campaign(&["Promotional Video"], false), &client, &log)
        .await
        .unwrap();

    let attempts = log.matching("Checking video status for Promotional Video");
    assert_eq!(
        attempts,
        vec![
            "Checking video status for Promotional Video... (Attempt 1)",
            "Checking video status for Promotional Video... (Attempt 2)",
            "Checking video status for Promotional Video... (Attempt 3)",
        ]
    );
    // Three fixed waits on the paused clock.
    assert!(started.elapsed() >= std::time::Duration::from_secs(45));
    assert_eq!(outcome.creatives.len(), 1);
    assert_eq!(outcome.creatives[0].kind(), JobKind::Video);
    assert_eq!(outcome.creatives[0].variation(), None);
    assert_eq!(client.calls_of("fetch:"), 1);
    assert_eq!(
        log.matching("Video for Promotional Video is ready!").len(),
        1
    );
}

#[tokio::test]
async fn validation_failure_dispatches_nothing() {
    let client = ScriptedClient::new();
    let mut config = campaign(&["LinkedIn Banner"], false);
    config.campaign.product_photo = None;

    let err = GenerationOrchestrator::new()
        .run(&config, &client, &ProgressLog::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::MissingImageAssets { .. })
    ));
    assert!(client.calls().is_empty());

    let err = GenerationOrchestrator::new()
        .run(&campaign(&[], false), &client, &ProgressLog::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(ValidationError::NoPlatforms)));
    assert!(client.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn mixed_run_accounts_for_every_job() {
    let client = ScriptedClient::new()
        .fail_image(
            "Billboard/OOH",
            Some(Variation::A),
            GenerationError::ContentRejected("blocked by safety filter".to_string()),
        )
        .fail_video_start(
            "Promotional Video",
            GenerationError::Transport("connection reset".to_string()),
        );
    let config = campaign(
        &["LinkedIn Banner", "Promotional Video", "Billboard/OOH"],
        true,
    );
    let outcome = GenerationOrchestrator::new()
        .run(&config, &client, &ProgressLog::new())
        .await
        .unwrap();

    assert_eq!(outcome.total_jobs(), 5);
    assert_eq!(outcome.creatives.len(), 3);
    let order: Vec<_> = outcome
        .creatives
        .iter()
        .map(|c| (c.platform_name().to_string(), c.variation()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Billboard/OOH".to_string(), Some(Variation::B)),
            ("LinkedIn Banner".to_string(), Some(Variation::A)),
            ("LinkedIn Banner".to_string(), Some(Variation::B)),
        ]
    );

    // Failures stay in dispatch order: the video job was planned before the billboard.
    let failed: Vec<_> = outcome.failures.iter().map(|f| f.platform_name.as_str()).collect();
    assert_eq!(failed, vec!["Promotional Video", "Billboard/OOH"]);
    assert!(outcome.failures[0].reason.starts_with("Video for Promotional Video failed"));
    assert!(!outcome.has_quota_failure());
    assert!(outcome
        .error_summary()
        .unwrap()
        .starts_with("Generation finished with 2 error(s)"));
}

#[tokio::test]
async fn total_failure_reports_no_creatives() {
    let client = ScriptedClient::new().fail_image(
        "Instagram Story",
        None,
        GenerationError::Provider("model overloaded".to_string()),
    );
    let outcome = GenerationOrchestrator::new()
        .run(&campaign(&["Instagram Story"], false), &client, &ProgressLog::new())
        .await
        .unwrap();

    assert!(outcome.is_total_failure());
    assert!(outcome.creatives.is_empty());
    assert_eq!(outcome.failures.len(), 1);
}

#[tokio::test]
async fn image_jobs_are_dispatched_concurrently() {
    let client = ScriptedClient::new();
    GenerationOrchestrator::new()
        .run(
            &campaign(&["X (formerly Twitter)", "Instagram Story", "TikTok Poster"], false),
            &client,
            &ProgressLog::new(),
        )
        .await
        .unwrap();

    // Every job reaches the backend before any of them returns.
    let calls = client.calls();
    assert_eq!(
        &calls[..3],
        &[
            "image:X (formerly Twitter):-",
            "image:Instagram Story:-",
            "image:TikTok Poster:-",
        ]
    );
    assert_eq!(calls.len(), 6);
    assert!(calls[3..].iter().all(|c| c.starts_with("image_done:")));
}

#[tokio::test(start_paused = true)]
async fn image_job_settles_while_video_is_still_polling() {
    let client = ScriptedClient::new()
        .with_polls(&[false, false, true])
        .fail_video_fetch(GenerationError::Transport("download interrupted".to_string()))
        .fail_image(
            "Instagram Story",
            None,
            GenerationError::InvalidInput("photo too small".to_string()),
        );
    let log = ProgressLog::new();
    let started = tokio::time::Instant::now();
    let outcome = GenerationOrchestrator::new()
        .run(
            &campaign(&["Promotional Video", "Instagram Story"], false),
            &client,
            &log,
        )
        .await
        .unwrap();
    assert!(started.elapsed() >= std::time::Duration::from_secs(45));

    let messages = log.messages();
    let position = |needle: &str| {
        messages
            .iter()
            .position(|m| m.contains(needle))
            .unwrap_or_else(|| panic!("no message containing {:?}", needle))
    };
    let image_started = position("Generating image creative for Instagram Story");
    let first_check = position("Checking video status for Promotional Video... (Attempt 1)");
    let second_check = position("Checking video status for Promotional Video... (Attempt 2)");
    assert!(image_started < second_check);
    assert!(first_check < second_check);

    // The image finished first in time, yet failures follow dispatch order.
    let calls = client.calls();
    let image_done = calls.iter().position(|c| c == "image_done:Instagram Story:-").unwrap();
    let first_poll = calls.iter().position(|c| c.starts_with("poll:")).unwrap();
    assert!(image_done < first_poll);
    let failed: Vec<_> = outcome.failures.iter().map(|f| f.platform_name.as_str()).collect();
    assert_eq!(failed, vec!["Promotional Video", "Instagram Story"]);
    assert!(outcome.is_total_failure());
}
