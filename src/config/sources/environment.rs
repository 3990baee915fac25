//! Environment source: BOILERPLATE_<KEY> with `__` separating nested keys,
//! e.g. BOILERPLATE_PACKAGE__VERSION=1.0.0 sets `package.version`.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "BOILERPLATE";

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__"),
    )
}
