//! Studio session: a dialoguer menu loop over a `ConfigStore`. Every change goes through
//! `apply_edit`, so each one is a single undoable snapshot.

use super::RunContext;
use crate::assets;
use crate::campaign_file;
use crate::catalog;
use crate::cli::map_error;
use crate::cli::presentation::{format_plan_text, format_studio_state};
use crate::error::ApiError;
use crate::generation::plan;
use crate::history::ConfigStore;
use crate::provider::{CreativeGenerationClient, HttpCreativeClient};
use crate::studio::{apply_edit, StudioEdit};
use crate::suggestions;
use crate::types::AssetRef;
use dialoguer::{Input, Select};
use std::ffi::OsStr;
use std::path::Path;

const ACTIONS: &[&str] = &[
    "Edit brand name",
    "Edit tone",
    "Choose font style",
    "Edit product description",
    "Suggest campaign concepts",
    "Edit tagline",
    "Suggest taglines",
    "Choose preset",
    "Edit call to action",
    "Edit seasonal overlay",
    "Choose video aspect ratio",
    "Toggle platform",
    "Toggle A/B test",
    "Remove product photo background",
    "Stylize product photo",
    "Suggest logos",
    "Suggest mascots",
    "Undo",
    "Redo",
    "Discard all edits",
    "Show plan",
    "Save campaign",
    "Generate",
    "Quit",
];

fn input_error(e: dialoguer::Error) -> ApiError {
    ApiError::ConfigError(format!("Failed to get user input: {}", e))
}

fn prompt_text(prompt: &str, current: &str) -> Result<String, ApiError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .map_err(input_error)
}

fn select<T: ToString>(prompt: &str, items: &[T], default: usize) -> Result<usize, ApiError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(input_error)
}

/// Pick one of `options`; the extra last entry keeps the current value.
fn pick_text(prompt: &str, options: Vec<String>, keep: &str) -> Result<Option<String>, ApiError> {
    let mut items = options.clone();
    items.push(keep.to_string());
    let picked = select(prompt, &items, 0)?;
    Ok(options.into_iter().nth(picked))
}

fn commit(store: &mut ConfigStore, edit: StudioEdit) {
    let description = edit.describe();
    apply_edit(store, edit);
    eprintln!("Updated {}.", description);
}

impl RunContext {
    pub(super) fn handle_studio(&self, campaign: &Path) -> Result<String, ApiError> {
        let client = HttpCreativeClient::from_config(&self.config.provider)?;
        let mut store = ConfigStore::new(campaign_file::load(campaign)?);

        loop {
            eprintln!("\n{}\n", format_studio_state(&store));
            let choice = select("Action", ACTIONS, 0)?;
            match ACTIONS[choice] {
                "Quit" => break,
                action => self.studio_action(action, &mut store, &client, campaign)?,
            }
        }

        Ok(format!(
            "Studio closed after {} edit(s).",
            store.len().saturating_sub(1)
        ))
    }

    fn studio_action<C>(
        &self,
        action: &str,
        store: &mut ConfigStore,
        client: &C,
        campaign: &Path,
    ) -> Result<(), ApiError>
    where
        C: CreativeGenerationClient + ?Sized,
    {
        match action {
            "Edit brand name" => {
                let name = prompt_text("Brand name", &store.current().brand.name)?;
                commit(store, StudioEdit::SetBrandName(name));
            }
            "Edit tone" => {
                let tone = prompt_text("Tone", &store.current().brand.tone)?;
                commit(store, StudioEdit::SetTone(tone));
            }
            "Choose font style" => {
                let current = &store.current().brand.font_style;
                let default = catalog::FONT_STYLES
                    .iter()
                    .position(|(name, _)| *name == current.as_str())
                    .unwrap_or(0);
                let items: Vec<String> = catalog::FONT_STYLES
                    .iter()
                    .map(|(name, description)| format!("{} ({})", name, description))
                    .collect();
                let picked = select("Font style", &items, default)?;
                let (name, _) = catalog::FONT_STYLES[picked];
                commit(store, StudioEdit::SetFontStyle(name.to_string()));
            }
            "Edit product description" => {
                let description = prompt_text(
                    "Product description",
                    &store.current().campaign.product_description,
                )?;
                commit(store, StudioEdit::SetProductDescription(description));
            }
            "Suggest campaign concepts" => {
                let brand = &store.current().brand;
                let result = self.runtime.block_on(suggestions::campaign_prompt_suggestions(
                    client,
                    &brand.name,
                    &brand.tone,
                ));
                match result {
                    Ok(options) if options.is_empty() => eprintln!("No concepts were returned."),
                    Ok(options) => {
                        if let Some(concept) =
                            pick_text("Campaign concepts", options, "Keep current description")?
                        {
                            commit(store, StudioEdit::SetProductDescription(concept));
                        }
                    }
                    Err(e) => eprintln!("Could not fetch campaign concepts: {}", map_error(&e)),
                }
            }
            "Edit tagline" => {
                let tagline = prompt_text("Tagline", &store.current().campaign.tagline)?;
                commit(store, StudioEdit::SetTagline(tagline));
            }
            "Suggest taglines" => {
                let description = store.current().campaign.product_description.clone();
                let result = self
                    .runtime
                    .block_on(suggestions::tagline_suggestions(client, &description));
                match result {
                    Ok(options) if options.is_empty() => {
                        eprintln!("Add a product description to get tagline suggestions.")
                    }
                    Ok(options) => {
                        if let Some(tagline) =
                            pick_text("Suggested taglines", options, "Keep current tagline")?
                        {
                            commit(store, StudioEdit::SetTagline(tagline));
                        }
                    }
                    Err(e) => eprintln!("Could not fetch suggestions: {}", map_error(&e)),
                }
            }
            "Choose preset" => {
                let current = &store.current().campaign.preset;
                let default = catalog::PRESETS
                    .iter()
                    .position(|p| *p == current.as_str())
                    .unwrap_or(0);
                let picked = select("Visual preset", catalog::PRESETS, default)?;
                let preset = catalog::PRESETS[picked].to_string();
                if preset == catalog::CUSTOM_PRESET {
                    let custom = prompt_text(
                        "Describe the custom style",
                        &store.current().campaign.custom_preset,
                    )?;
                    commit(store, StudioEdit::SetCustomPreset(custom));
                } else {
                    commit(store, StudioEdit::SetPreset(preset));
                }
            }
            "Edit call to action" => {
                let current = store.current().campaign.cta.clone().unwrap_or_default();
                let cta = prompt_text("Call to action (blank to clear)", &current)?;
                commit(store, StudioEdit::SetCta(cta));
            }
            "Edit seasonal overlay" => {
                let overlay = prompt_text(
                    "Seasonal overlay (blank for none)",
                    &store.current().campaign.seasonal_overlay,
                )?;
                commit(store, StudioEdit::SetSeasonalOverlay(overlay));
            }
            "Choose video aspect ratio" => {
                let current = &store.current().campaign.video_aspect_ratio;
                let default = catalog::VIDEO_ASPECT_RATIOS
                    .iter()
                    .position(|(_, ratio)| *ratio == current.as_str())
                    .unwrap_or(0);
                let items: Vec<String> = catalog::VIDEO_ASPECT_RATIOS
                    .iter()
                    .map(|(label, ratio)| format!("{} ({})", label, ratio))
                    .collect();
                let picked = select("Video aspect ratio", &items, default)?;
                let (_, ratio) = catalog::VIDEO_ASPECT_RATIOS[picked];
                commit(store, StudioEdit::SetVideoAspectRatio(ratio.to_string()));
            }
            "Toggle platform" => {
                let platforms = catalog::platforms();
                let items: Vec<String> = platforms
                    .iter()
                    .map(|p| {
                        let mark = if store.current().has_platform(&p.name) {
                            "[x]"
                        } else {
                            "[ ]"
                        };
                        format!("{} {}", mark, p.name)
                    })
                    .collect();
                let picked = select("Platform", &items, 0)?;
                commit(store, StudioEdit::TogglePlatform(platforms[picked].clone()));
            }
            "Toggle A/B test" => {
                let on = !store.current().campaign.ab_test;
                commit(store, StudioEdit::SetAbTest(on));
            }
            "Remove product photo background" => {
                let result = self
                    .runtime
                    .block_on(assets::remove_product_background(client, store.current()));
                match result {
                    Ok(photo) => commit(store, StudioEdit::SetProductPhoto(photo)),
                    Err(e) => eprintln!("Could not remove the background: {}", map_error(&e)),
                }
            }
            "Stylize product photo" => {
                let result = self
                    .runtime
                    .block_on(assets::stylize_product_photo(client, store.current()));
                match result {
                    Ok(photo) => commit(store, StudioEdit::SetProductPhoto(photo)),
                    Err(e) => eprintln!("Could not stylize the product photo: {}", map_error(&e)),
                }
            }
            "Suggest logos" => {
                let brand_name = store.current().brand.name.clone();
                match self
                    .runtime
                    .block_on(assets::logo_variations(client, &brand_name))
                {
                    Ok(options) if options.is_empty() => {
                        eprintln!("Add a brand name to get logo variations.")
                    }
                    Ok(options) => {
                        if let Some(logo) = self.pick_asset("Logo variations", options)? {
                            commit(store, StudioEdit::SetLogo(logo));
                        }
                    }
                    Err(e) => eprintln!("Could not fetch logo variations: {}", map_error(&e)),
                }
            }
            "Suggest mascots" => {
                match self
                    .runtime
                    .block_on(assets::mascot_suggestions(client, store.current()))
                {
                    Ok(options) if options.is_empty() => eprintln!("No mascots were returned."),
                    Ok(options) => {
                        if let Some(mascot) = self.pick_asset("Mascot suggestions", options)? {
                            commit(store, StudioEdit::SetMascot(mascot));
                        }
                    }
                    Err(e) => eprintln!("Could not fetch mascot suggestions: {}", map_error(&e)),
                }
            }
            "Undo" => {
                if !store.undo() {
                    eprintln!("Nothing to undo.");
                }
            }
            "Redo" => {
                if !store.redo() {
                    eprintln!("Nothing to redo.");
                }
            }
            "Discard all edits" => {
                store.reset();
                eprintln!("Back to the campaign as loaded.");
            }
            "Show plan" => match plan(store.current()) {
                Ok(jobs) => eprintln!("{}", format_plan_text(&jobs)),
                Err(e) => eprintln!("{}", e),
            },
            "Save campaign" => {
                campaign_file::save(store.current(), campaign)?;
                eprintln!("Saved {}", campaign.display());
            }
            "Generate" => match self.handle_generate(store.current(), client, None, "text") {
                Ok(rendered) => println!("{}", rendered),
                Err(e) => eprintln!("{}", map_error(&e)),
            },
            _ => {}
        }
        Ok(())
    }

    /// Write candidates under `<output dir>/studio` so they can be viewed, then let the user
    /// pick one. `None` keeps the current asset.
    fn pick_asset(
        &self,
        prompt: &str,
        candidates: Vec<AssetRef>,
    ) -> Result<Option<AssetRef>, ApiError> {
        let preview_dir = self.output_dir(None).join("studio");
        std::fs::create_dir_all(&preview_dir)?;
        let mut items = Vec::with_capacity(candidates.len() + 1);
        for asset in &candidates {
            let file_name = Path::new(&asset.label)
                .file_name()
                .unwrap_or_else(|| OsStr::new("candidate"));
            let preview = preview_dir.join(file_name);
            std::fs::write(&preview, &asset.data)?;
            items.push(format!("{} ({} bytes)", preview.display(), asset.len()));
        }
        items.push("Keep current".to_string());
        let picked = select(prompt, &items, 0)?;
        Ok(candidates.into_iter().nth(picked))
    }
}
