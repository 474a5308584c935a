// HTTP face of the dashboard: axum serves the LiveView glue page on `/` and
// the event websocket on `/ws`. Each websocket connection gets its own
// VirtualDom over the same read-only dataset.
use crate::app::{App, AppProps};
use anyhow::Context;
use axum::extract::ws::WebSocketUpgrade;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use dioxus::prelude::VirtualDom;
use reshape::config::Settings;
use shared::models::CombinedDataset;
use std::sync::Arc;
use tracing::info;

pub async fn serve(settings: &Settings, dataset: Arc<CombinedDataset>) -> anyhow::Result<()> {
    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    let view = Arc::new(dioxus_liveview::LiveViewPool::new());
    let index = index_page(&addr);

    let router = Router::new()
        .route(
            "/",
            get(move || {
                let page = index.clone();
                async move { Html(page) }
            }),
        )
        .route(
            "/ws",
            get(move |ws: WebSocketUpgrade| {
                let view = view.clone();
                let dataset = dataset.clone();
                async move {
                    ws.on_upgrade(move |socket| async move {
                        _ = view
                            .launch_virtualdom(dioxus_liveview::axum_socket(socket), move || {
                                VirtualDom::new_with_props(App, AppProps { dataset })
                            })
                            .await;
                    })
                }
            }),
        );

    info!("dashboard listening on http://{addr}");
    axum::serve(listener, router.into_make_service())
        .await
        .context("server error")?;
    Ok(())
}

fn index_page(addr: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <title>Costs and Revenue Dashboard</title>
  <style>{STYLE}</style>
</head>
<body>
  <div id="main"></div>
  {glue}
</body>
</html>"#,
        glue = dioxus_liveview::interpreter_glue(&format!("ws://{addr}/ws"))
    )
}

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; }
.container { max-width: 1000px; margin: 0 auto; padding: 16px; }
.title { text-align: center; color: #2a3f5f; }
.controls { display: flex; gap: 24px; align-items: flex-start; margin-bottom: 12px; }
.source-selector, .line-filter { display: flex; gap: 12px; flex-wrap: wrap; }
.control-option { display: inline-flex; align-items: center; gap: 4px; }
.chart-title { color: #2a3f5f; margin: 8px 0; }
.legend { margin-top: 8px; }
.legend-entry { display: inline-flex; align-items: center; gap: 4px; margin-right: 16px; }
.legend-swatch { display: inline-block; width: 12px; height: 12px; }
.empty-note { color: #666; }
"#;
