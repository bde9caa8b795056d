//! Integration tests for adcraft

mod campaign_workflow;
mod config_layers;
mod generation_scenarios;
mod test_utils;
