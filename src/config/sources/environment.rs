//! Environment source: ADCRAFT__PROVIDER__ENDPOINT maps to provider.endpoint.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("ADCRAFT")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
