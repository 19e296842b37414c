use shorts_backend::config::{
    create_app_state, create_cors, init_logger, load_environment, Settings,
};

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    load_environment();
    init_logger();

    let settings = Settings::from_env()?;
    let state = create_app_state(&settings).await?;
    let cors = create_cors(&settings.frontend_origin)?;

    let _rocket = shorts_backend::build_rocket(state)
        .attach(cors)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket failed: {e}"))?;

    Ok(())
}
