//! Typed command surface over the request/response socket.

use serde_json::{json, Value};
use tracing::error;
use xtb_core::error::ClientError;

use crate::transport::Transport;
use crate::wire::{
    ChartRangeData, CommissionDef, MarginLevelRecord, StreamingBalance, SymbolRecord,
    TickPricesData, TradeStatusRecord, TradeTransInfo, TradeTransactionResponse, UserDataRecord,
};

/// Typed client for the vendor command set.
///
/// Every command funnels through [`ApiClient::command`], which turns the
/// vendor's loose `status`/`returnData` pair into a tagged result: call sites
/// get either the payload or a [`ClientError::Rejected`], never a raw
/// mapping to inspect.
pub struct ApiClient<T: Transport> {
    transport: T,
}

fn rejection(command: &str, response: &Value) -> ClientError {
    let code = response
        .get("errorCode")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();
    let description = response
        .get("errorDescr")
        .and_then(Value::as_str)
        .unwrap_or(command)
        .to_string();
    ClientError::Rejected { code, description }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The single dispatch funnel: run a command, check `status`, return the
    /// `returnData` payload.
    fn command(&mut self, name: &str, arguments: Option<Value>) -> Result<Value, ClientError> {
        let response = self.transport.request(name, arguments)?;
        let status = response
            .get("status")
            .and_then(Value::as_bool)
            .ok_or_else(|| {
                ClientError::Malformed(format!("{name} response carries no status field"))
            })?;
        if !status {
            return Err(rejection(name, &response));
        }
        Ok(response.get("returnData").cloned().unwrap_or(Value::Null))
    }

    /// Log in and return the stream session id.
    ///
    /// The session id lives at the top level of the login response rather
    /// than in `returnData`, so this is the one command read outside the
    /// funnel. A rejected login is logged and aborts session setup.
    pub fn login(
        &mut self,
        account_id: &str,
        password: &str,
        app_name: &str,
    ) -> Result<String, ClientError> {
        let arguments = json!({
            "userId": account_id,
            "password": password,
            "appName": app_name,
        });
        let response = self.transport.request("login", Some(arguments))?;
        let status = response
            .get("status")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if !status {
            let err = rejection("login", &response);
            error!("Login failed: {err}");
            return Err(err);
        }
        response
            .get("streamSessionId")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| {
                ClientError::Malformed("login response carries no streamSessionId".into())
            })
    }

    /// Fetch the full vendor symbol list.
    pub fn get_all_symbols(&mut self) -> Result<Vec<SymbolRecord>, ClientError> {
        Ok(serde_json::from_value(
            self.command("getAllSymbols", None)?,
        )?)
    }

    /// Fetch a single symbol record with current prices.
    pub fn get_symbol(&mut self, symbol: &str) -> Result<SymbolRecord, ClientError> {
        let arguments = json!({ "symbol": symbol });
        Ok(serde_json::from_value(
            self.command("getSymbol", Some(arguments))?,
        )?)
    }

    /// Fetch the current account margin state.
    pub fn get_margin_level(&mut self) -> Result<MarginLevelRecord, ClientError> {
        Ok(serde_json::from_value(
            self.command("getMarginLevel", None)?,
        )?)
    }

    /// Fetch account metadata (currency, group, leverage).
    pub fn get_current_user_data(&mut self) -> Result<UserDataRecord, ClientError> {
        Ok(serde_json::from_value(
            self.command("getCurrentUserData", None)?,
        )?)
    }

    /// Fetch candles for a time range.
    ///
    /// `period` is in minutes, `start`/`end` in millisecond epochs, matching
    /// the vendor contract.
    pub fn get_chart_range(
        &mut self,
        symbol: &str,
        period: u64,
        start: i64,
        end: i64,
    ) -> Result<ChartRangeData, ClientError> {
        let arguments = json!({
            "info": {
                "symbol": symbol,
                "period": period,
                "start": start,
                "end": end,
            }
        });
        Ok(serde_json::from_value(
            self.command("getChartRangeRequest", Some(arguments))?,
        )?)
    }

    /// Fetch current tick prices for a symbol.
    ///
    /// An empty quotation list is logged as missing data but still returned;
    /// the caller decides what an empty series means.
    pub fn get_tick_prices(
        &mut self,
        symbol: &str,
        timestamp: i64,
    ) -> Result<TickPricesData, ClientError> {
        let arguments = json!({
            "symbols": [symbol],
            "timestamp": timestamp,
            "level": 0,
        });
        let data: TickPricesData =
            serde_json::from_value(self.command("getTickPrices", Some(arguments))?)?;
        if data.quotations.is_empty() {
            error!("Data was not found for {symbol}");
        }
        Ok(data)
    }

    /// Fetch the commission definition for a symbol and volume.
    pub fn get_commission_def(
        &mut self,
        symbol: &str,
        volume: f64,
    ) -> Result<CommissionDef, ClientError> {
        let arguments = json!({ "symbol": symbol, "volume": volume });
        Ok(serde_json::from_value(
            self.command("getCommissionDef", Some(arguments))?,
        )?)
    }

    /// Fetch the account balance on the request/response socket.
    pub fn get_balance(&mut self) -> Result<StreamingBalance, ClientError> {
        Ok(serde_json::from_value(self.command("getBalance", None)?)?)
    }

    /// Submit a trade transaction.
    pub fn trade_transaction(
        &mut self,
        info: &TradeTransInfo,
    ) -> Result<TradeTransactionResponse, ClientError> {
        let arguments = json!({ "tradeTransInfo": info });
        Ok(serde_json::from_value(
            self.command("tradeTransaction", Some(arguments))?,
        )?)
    }

    /// Query the status of a submitted trade transaction.
    pub fn trade_transaction_status(
        &mut self,
        order: i64,
    ) -> Result<TradeStatusRecord, ClientError> {
        let arguments = json!({ "order": order });
        Ok(serde_json::from_value(
            self.command("tradeTransactionStatus", Some(arguments))?,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Scripted transport: pops one canned response per request.
    struct ScriptedTransport {
        responses: VecDeque<Value>,
        requests: Vec<(String, Option<Value>)>,
    }

    impl ScriptedTransport {
        fn new(responses: Vec<Value>) -> Self {
            Self {
                responses: responses.into(),
                requests: Vec::new(),
            }
        }
    }

    impl Transport for ScriptedTransport {
        fn request(
            &mut self,
            command: &str,
            arguments: Option<Value>,
        ) -> Result<Value, ClientError> {
            self.requests.push((command.to_string(), arguments));
            self.responses
                .pop_front()
                .ok_or_else(|| ClientError::Transport("no scripted response".into()))
        }
    }

    #[test]
    fn test_command_funnel_success() {
        let transport = ScriptedTransport::new(vec![json!({
            "status": true,
            "returnData": { "balance": 100.0, "credit": 0.0, "currency": "USD",
                            "equity": 100.0, "margin": 0.0, "margin_free": 100.0,
                            "margin_level": 0.0 }
        })]);
        let mut client = ApiClient::new(transport);
        let level = client.get_margin_level().unwrap();
        assert_eq!(level.currency, "USD");
        assert_eq!(level.margin_free, 100.0);
    }

    #[test]
    fn test_command_funnel_rejection() {
        let transport = ScriptedTransport::new(vec![json!({
            "status": false,
            "errorCode": "BE004",
            "errorDescr": "no access"
        })]);
        let mut client = ApiClient::new(transport);
        match client.get_margin_level() {
            Err(ClientError::Rejected { code, description }) => {
                assert_eq!(code, "BE004");
                assert_eq!(description, "no access");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_command_funnel_missing_status() {
        let transport = ScriptedTransport::new(vec![json!({ "returnData": [] })]);
        let mut client = ApiClient::new(transport);
        assert!(matches!(
            client.get_all_symbols(),
            Err(ClientError::Malformed(_))
        ));
    }

    #[test]
    fn test_login_reads_top_level_session_id() {
        let transport = ScriptedTransport::new(vec![json!({
            "status": true,
            "streamSessionId": "8469308861804289383"
        })]);
        let mut client = ApiClient::new(transport);
        let ssid = client.login("1000", "hunter2", "").unwrap();
        assert_eq!(ssid, "8469308861804289383");
    }

    #[test]
    fn test_login_rejection_aborts() {
        let transport = ScriptedTransport::new(vec![json!({
            "status": false,
            "errorCode": "BE005",
            "errorDescr": "userPasswordCheck: Invalid login or password"
        })]);
        let mut client = ApiClient::new(transport);
        assert!(matches!(
            client.login("1000", "wrong", ""),
            Err(ClientError::Rejected { .. })
        ));
    }

    #[test]
    fn test_chart_range_arguments_shape() {
        let transport = ScriptedTransport::new(vec![json!({
            "status": true,
            "returnData": { "digits": 4, "rateInfos": [] }
        })]);
        let mut client = ApiClient::new(transport);
        let data = client
            .get_chart_range("EURUSD", 60, 1_389_362_640_000, 1_389_366_240_000)
            .unwrap();
        assert!(data.rate_infos.is_empty());

        let (command, arguments) = client.transport.requests.pop().unwrap();
        assert_eq!(command, "getChartRangeRequest");
        let info = &arguments.unwrap()["info"];
        assert_eq!(info["symbol"], "EURUSD");
        assert_eq!(info["period"], 60);
        assert_eq!(info["start"], 1_389_362_640_000i64);
    }

    #[test]
    fn test_empty_tick_prices_still_returned() {
        let transport = ScriptedTransport::new(vec![json!({
            "status": true,
            "returnData": { "quotations": [] }
        })]);
        let mut client = ApiClient::new(transport);
        let data = client.get_tick_prices("EURUSD", 1_389_362_640_000).unwrap();
        assert!(data.quotations.is_empty());
    }
}
