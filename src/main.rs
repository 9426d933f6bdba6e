use inbox_service::api;
use inbox_service::common::init;
use inbox_service::deploy;
use inbox_service::settings::AppSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::get();
    init::initialize_logging(settings);
    match settings.app_component.as_str() {
        "api" => api::serve(settings).await,
        "deploy-check" => deploy::check(settings),
        other => anyhow::bail!("Unknown app component {other:?}"),
    }
}
