//! Spin/WASI entry point: server-side render plus server functions.

use leptos::config::{get_configuration, LeptosOptions};
use leptos::task::Executor;
use leptos_wasi::executor::Mode;
use leptos_wasi::handler::HandlerError;
use leptos_wasi::prelude::{Handler, IncomingRequest, ResponseOutparam, WasiExecutor};
use shopfront_observability::LogFormat;
use wasi::exports::http::incoming_handler::Guest;
use wasi::http::proxy::export;

use crate::app::{shell, App, GetProducts};

struct ShopfrontServer;

export!(ShopfrontServer with_types_in wasi);

impl Guest for ShopfrontServer {
    fn handle(request: IncomingRequest, response_out: ResponseOutparam) {
        shopfront_observability::init(LogFormat::Json);

        // Leptos resources need a local executor; one per request.
        let executor = WasiExecutor::new(Mode::Stalled);
        if let Err(e) = Executor::init_local_custom_executor(executor.clone()) {
            tracing::error!(error = ?e, "Executor init error");
            return;
        }

        executor.run_until(async {
            if let Err(e) = render_page(request, response_out).await {
                tracing::error!(error = ?e, "Render failed");
            }
        })
    }
}

/// Options from `Cargo.toml`'s `[package.metadata.leptos]`, as baked in by
/// cargo-leptos.
fn page_options() -> Option<LeptosOptions> {
    match get_configuration(None) {
        Ok(conf) => Some(conf.leptos_options),
        Err(e) => {
            tracing::error!(error = %e, "Leptos configuration error");
            None
        }
    }
}

async fn render_page(
    request: IncomingRequest,
    response_out: ResponseOutparam,
) -> Result<(), HandlerError> {
    let Some(options) = page_options() else {
        return Ok(());
    };

    Handler::build(request, response_out)?
        .with_server_fn::<GetProducts>()
        .generate_routes(App)
        .handle_with_context(move || shell(options.clone()), || {})
        .await?;
    Ok(())
}
