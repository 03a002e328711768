use std::{io, path::Path, sync::Arc};

use anyhow::{anyhow, Context};
use axum::{http::Request, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    config::{OwnerSettings, RuntimeMode, Settings},
    domain::{email::EmailAddress, portfolio::Portfolio},
    email::{transport_from_settings, EmailTransport},
};

mod asset;
mod contact;
mod error;
mod health;
mod portfolio;
mod sitemap;

#[derive(Clone)]
pub struct AppState {
    email_transport: Arc<dyn EmailTransport>,
    sender: EmailAddress,
    owner: OwnerSettings,
    mode: RuntimeMode,
    portfolio: Arc<Portfolio>,
    base_url: String,
}

fn app_router(assets_dir: &Path) -> Router<AppState> {
    health::router()
        .merge(contact::router())
        .merge(portfolio::router())
        .merge(sitemap::router())
        .merge(asset::router(assets_dir))
}

pub struct App {
    listener: TcpListener,
    port: u16,
    router: Router,
}

impl App {
    /// Build the application with the mail transport selected in `config`.
    pub async fn build(config: Settings) -> anyhow::Result<Self> {
        let email_transport = transport_from_settings(&config.email_client)
            .context("The mail transport could not be configured.")?;

        Self::with_transport(config, email_transport).await
    }

    async fn with_transport(
        config: Settings,
        email_transport: Arc<dyn EmailTransport>,
    ) -> anyhow::Result<Self> {
        let sender = config
            .email_client
            .sender()
            .map_err(|e| anyhow!(e))
            .context("The sender email should be valid.")?;

        let portfolio = Portfolio::load(&config.application.portfolio_path).await?;

        let listener = TcpListener::bind(format!(
            "{}:{}",
            config.application.host, config.application.port
        ))
        .await
        .context("The listener should be able to bind the address.")?;
        let port = listener.local_addr()?.port();

        let state = AppState {
            email_transport,
            sender,
            owner: config.owner,
            mode: config.runtime_mode,
            portfolio: Arc::new(portfolio),
            base_url: config.application.base_url,
        };

        let router = app_router(&config.application.assets_dir)
            .with_state(state)
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let id = uuid::Uuid::new_v4();
                    tracing::info_span!(
                        "request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        %id,
                    )
                }),
            );

        Ok(Self {
            listener,
            port,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn serve(self) -> Result<(), io::Error> {
        axum::serve(self.listener, self.router.into_make_service()).await
    }
}
