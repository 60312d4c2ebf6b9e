use std::{fs::File, sync::Arc};

use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

use crate::dir::SafeMedDirectory;

const GUI_LOG_FILE_NAME: &str = "safemed-gui.log";

pub fn setup_logger(
    log_level: LevelFilter,
    datadir: &SafeMedDirectory,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_path = datadir.path().join(GUI_LOG_FILE_NAME);

    let file = File::create(log_path)?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                // Reject spans and events coming from the renderer and
                // runtime internals, they drown the application logs.
                .with_filter(filter::filter_fn(|metadata| {
                    !metadata.target().starts_with("iced_wgpu")
                        && !metadata.target().starts_with("iced_winit")
                        && !metadata.target().starts_with("iced_graphics")
                        && !metadata.target().starts_with("iced_runtime")
                        && !metadata.target().starts_with("iced_core")
                        && !metadata.target().starts_with("wgpu_core")
                        && !metadata.target().starts_with("wgpu_hal")
                        && !metadata.target().starts_with("naga")
                        && !metadata.target().starts_with("winit")
                        && !metadata.target().starts_with("cosmic_text")
                        && !metadata.target().starts_with("mio")
                        && !metadata.target().starts_with("tokio")
                        && !metadata.target().starts_with("polling")
                        && !metadata.target().starts_with("calloop")
                        && !metadata.target().starts_with("async_io")
                })),
        )
        .init();

    Ok(())
}
