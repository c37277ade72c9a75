//! CLI command implementations.

pub mod balance;
pub mod history;
pub mod run;
pub mod symbols;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use xtb_client::{ApiClient, StreamHandle, StreamingClient, TcpTransport};
use xtb_config::Settings;
use xtb_exchange::{ExchangeState, XtbExchange};

/// A logged-in exchange plus what the streaming socket needs to attach.
pub(crate) struct Session {
    pub exchange: XtbExchange<TcpTransport>,
    pub state: Arc<ExchangeState>,
    pub stream_session_id: String,
    pub sandbox: bool,
}

/// Connect, log in and build the exchange adapter.
pub(crate) fn open_session(settings: &Settings) -> Result<Session> {
    let keys_path = Path::new(&settings.xtb.keys_path);
    let credentials = xtb_config::load_credentials(keys_path)
        .with_context(|| format!("reading credentials from {}", keys_path.display()))?;

    let transport = TcpTransport::connect_main(credentials.sandbox)?;
    let mut api = ApiClient::new(transport);
    let stream_session_id = api.login(
        &credentials.account_id,
        &credentials.password,
        &settings.xtb.app_name,
    )?;

    let state = Arc::new(ExchangeState::new());
    let exchange = XtbExchange::new(api, Arc::clone(&state))?;

    Ok(Session {
        exchange,
        state,
        stream_session_id,
        sandbox: credentials.sandbox,
    })
}

/// Attach the balance subscription, feeding the shared state cell.
pub(crate) fn subscribe_balance(session: &Session) -> Result<StreamHandle> {
    let currency = session.exchange.account_currency().to_string();
    let state = Arc::clone(&session.state);

    let stream =
        StreamingClient::connect_main(session.sandbox, session.stream_session_id.clone())?;
    let handle = stream.subscribe_balance(move |balance| {
        state.balance.set(balance.into_snapshot(currency.clone()));
    })?;
    Ok(handle)
}
