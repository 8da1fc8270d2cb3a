use ais_info::{
    Result, error::error::ConfigSnafu, settings::Settings, startup::App, telemetry::init_tracer,
};
use snafu::ResultExt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let settings = Settings::new().context(ConfigSnafu)?;
    init_tracer(settings.log_level);

    let app = App::build(&settings)?;

    app.run().await?;

    Ok(())
}
