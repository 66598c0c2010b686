use company_registry_api::Application;
use company_registry_infra::RegistryContext;
use company_registry_sdk::RegistrySDK;

// Launch the application as a background task
pub async fn spawn_app() -> (RegistrySDK, String) {
    spawn_app_with_context(RegistryContext::create_inmemory()).await
}

pub async fn spawn_app_with_context(mut ctx: RegistryContext) -> (RegistrySDK, String) {
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let sdk = RegistrySDK::new(address.clone());
    (sdk, address)
}
