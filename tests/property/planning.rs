//! Planner and outcome ordering properties

use adcraft::catalog;
use adcraft::generation::outcome::{creative_id, sort_creatives, Creative, ImageCreative};
use adcraft::generation::{plan, PlanSummary};
use adcraft::types::{AssetRef, CampaignConfig, JobKind, MediaPayload, Variation};
use proptest::prelude::*;

fn campaign(selection: &[usize], ab_test: bool) -> CampaignConfig {
    let platforms = catalog::platforms();
    let mut config = CampaignConfig::default();
    config.brand.logo = Some(AssetRef::new("logo.png", "image/png", vec![1]));
    config.campaign.product_photo = Some(AssetRef::new("shoe.png", "image/png", vec![2]));
    config.campaign.ab_test = ab_test;
    config.campaign.platforms = selection
        .iter()
        .map(|i| platforms[i % platforms.len()].clone())
        .collect();
    config
}

/// Job count is 2 per image platform with A/B on, 1 without, plus 1 per video platform.
#[test]
fn test_job_count_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(proptest::collection::vec(0usize..6, 1..10), any::<bool>()),
            |(selection, ab_test)| {
                let config = campaign(&selection, ab_test);
                let jobs = plan(&config).unwrap();

                let mut distinct: Vec<_> = config.campaign.platforms.clone();
                let mut seen = std::collections::HashSet::new();
                distinct.retain(|p| seen.insert(p.name.clone()));
                let images = distinct.iter().filter(|p| !p.is_video).count();
                let videos = distinct.len() - images;

                let summary = PlanSummary::of(&jobs);
                let per_image = if ab_test { 2 } else { 1 };
                prop_assert_eq!(summary.image_jobs, images * per_image);
                prop_assert_eq!(summary.video_jobs, videos);
                prop_assert!(jobs
                    .iter()
                    .filter(|j| j.kind == JobKind::Video)
                    .all(|j| j.variation.is_none()));
                Ok(())
            },
        )
        .unwrap();
}

/// Planning the same configuration twice yields the same job list.
#[test]
fn test_plan_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(proptest::collection::vec(0usize..6, 1..8), any::<bool>()),
            |(selection, ab_test)| {
                let config = campaign(&selection, ab_test);
                prop_assert_eq!(plan(&config).unwrap(), plan(&config).unwrap());
                Ok(())
            },
        )
        .unwrap();
}

fn variation_strategy() -> impl Strategy<Value = Option<Variation>> {
    prop_oneof![
        Just(None),
        Just(Some(Variation::A)),
        Just(Some(Variation::B)),
    ]
}

/// Sorted creatives are ordered by platform name, then variation with absent ranking as A.
#[test]
fn test_sort_order_property() {
    let mut runner = proptest::test_runner::TestRunner::default();
    let names = ["Alpha", "Beta", "Gamma"];

    runner
        .run(
            &proptest::collection::vec((0usize..3, variation_strategy()), 0..12),
            |entries| {
                let mut creatives: Vec<Creative> = entries
                    .iter()
                    .enumerate()
                    .map(|(i, (name, variation))| {
                        Creative::Image(ImageCreative {
                            id: creative_id(names[*name], *variation, JobKind::Image, i as i64),
                            platform_name: names[*name].to_string(),
                            dimensions: "1x1".to_string(),
                            payload: MediaPayload::new("image/png", vec![i as u8]),
                            variation: *variation,
                        })
                    })
                    .collect();
                sort_creatives(&mut creatives);

                for pair in creatives.windows(2) {
                    let key = |c: &Creative| {
                        (
                            c.platform_name().to_string(),
                            c.variation().unwrap_or(Variation::A),
                        )
                    };
                    prop_assert!(key(&pair[0]) <= key(&pair[1]));
                }
                prop_assert_eq!(creatives.len(), entries.len());
                Ok(())
            },
        )
        .unwrap();
}
