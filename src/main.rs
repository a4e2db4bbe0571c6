// SPDX-License-Identifier: MPL-2.0
use iced_snackbar::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();
    let config_path = args
        .opt_value_from_str::<_, PathBuf>("--config")
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --config");
            None
        });

    app::run(Flags { config_path })
}
