use hello_api::{config::Config, proxy, routes, state::AppState};
use lambda_http::{run, service_fn, tracing, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let app = routes::router(AppState::new(Config::from_env()));

    run(service_fn(move |event| proxy::handle(app.clone(), event))).await
}
