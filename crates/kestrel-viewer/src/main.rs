use kestrel_engine::device::GpuInit;
use kestrel_engine::logging::{LoggingConfig, init_logging};
use kestrel_engine::window::{Runtime, RuntimeConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Kestrel".to_string(),
        ..RuntimeConfig::default()
    };

    if let Err(e) = Runtime::run(config, GpuInit::default()) {
        log::error!("{e:#}");
        return Err(e);
    }

    Ok(())
}
