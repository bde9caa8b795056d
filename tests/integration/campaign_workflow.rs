//! Campaign file to creatives on disk, and studio editing sessions.

use super::test_utils::{write_campaign_file, ScriptedClient};
use adcraft::campaign_file;
use adcraft::catalog;
use adcraft::cli::RunContext;
use adcraft::config::AdcraftConfig;
use adcraft::error::{ApiError, GenerationError};
use adcraft::generation::{plan, PlanSummary};
use adcraft::history::ConfigStore;
use adcraft::studio::{apply_edit, StudioEdit};
use adcraft::suggestions;
use adcraft::types::Variation;
use tempfile::TempDir;

#[test]
fn campaign_file_generates_files_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_campaign_file(dir.path(), &["LinkedIn Banner", "Billboard/OOH"], true);
    let config = campaign_file::load(&path).unwrap();
    assert_eq!(
        config.campaign.product_photo.as_ref().unwrap().mime_type,
        "image/webp"
    );

    let context = RunContext::with_config(dir.path().to_path_buf(), AdcraftConfig::default()).unwrap();
    let client = ScriptedClient::new();
    let out = dir.path().join("out");
    let rendered = context
        .handle_generate(&config, &client, Some(&out), "json")
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["status"], "complete");
    let creatives = value["creatives"].as_array().unwrap();
    assert_eq!(creatives.len(), 4);
    assert_eq!(creatives[0]["platform"], "Billboard/OOH");
    assert_eq!(creatives[0]["variation"], "A");

    let mut files: Vec<_> = std::fs::read_dir(&out)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    files.sort();
    assert_eq!(files.len(), 4);
    assert!(files.iter().all(|f| f.ends_with(".png")));
    assert!(files[0].starts_with("Billboard_OOH-A-"));
}

#[test]
fn run_without_creatives_is_an_error_with_summary() {
    let dir = TempDir::new().unwrap();
    let path = write_campaign_file(dir.path(), &["Instagram Story"], false);
    let config = campaign_file::load(&path).unwrap();
    let context = RunContext::with_config(dir.path().to_path_buf(), AdcraftConfig::default()).unwrap();
    let client = ScriptedClient::new().fail_image(
        "Instagram Story",
        None,
        GenerationError::QuotaExhausted("quota".to_string()),
    );

    let err = context
        .handle_generate(&config, &client, Some(&dir.path().join("out")), "text")
        .unwrap_err();
    match err {
        ApiError::NoCreatives(summary) => {
            assert!(summary.contains("1 error(s)"));
            assert!(summary.contains("API quota exceeded"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.path().join("out").exists());
}

#[test]
fn studio_session_edits_undo_and_plan() {
    let dir = TempDir::new().unwrap();
    let path = write_campaign_file(dir.path(), &["TikTok Poster"], false);
    let mut store = ConfigStore::new(campaign_file::load(&path).unwrap());

    apply_edit(&mut store, StudioEdit::SetAbTest(true));
    apply_edit(
        &mut store,
        StudioEdit::TogglePlatform(catalog::find_platform("Promotional Video").unwrap()),
    );
    let jobs = plan(store.current()).unwrap();
    assert_eq!(
        PlanSummary::of(&jobs),
        PlanSummary {
            image_jobs: 2,
            video_jobs: 1
        }
    );
    assert_eq!(jobs[1].variation, Some(Variation::B));

    assert!(store.undo());
    assert!(store.undo());
    assert!(!store.can_undo());
    assert_eq!(plan(store.current()).unwrap().len(), 1);

    apply_edit(&mut store, StudioEdit::SetTagline("Own the night".to_string()));
    assert!(!store.can_redo());
    campaign_file::save(store.current(), &path).unwrap();
    let reloaded = campaign_file::load(&path).unwrap();
    assert_eq!(reloaded.campaign.tagline, "Own the night");
    assert!(!reloaded.campaign.ab_test);
}

#[tokio::test]
async fn tagline_suggestions_come_from_client() {
    let client = ScriptedClient::new();
    let picks = suggestions::tagline_suggestions(&client, "Carbon running shoe")
        .await
        .unwrap();
    assert_eq!(picks, vec!["Run the city", "Own the night"]);
    assert_eq!(client.calls(), vec!["suggest_taglines"]);
}
