//! Environment source: DAPPQL_<SECTION>__<KEY>, e.g. DAPPQL_QUERY__NETWORK_ID=137.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("DAPPQL")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
