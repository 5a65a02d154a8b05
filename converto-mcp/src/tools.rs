//! Tool handlers
//!
//! Stateless tools read the registry. The session tools drive one
//! `ConverterSession` shared by the connection.

use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use tracing::debug;
use converto_core::{format_result, parse_magnitude, ConvertoError};
use converto_units::{ConverterSession, UnitRegistry};
use crate::protocol::McpError;

/// State shared by tool calls on one connection
pub struct ToolContext {
    registry: &'static UnitRegistry,
    history_limit: usize,
    session: Option<ConverterSession<'static>>,
}

impl ToolContext {
    pub fn new(registry: &'static UnitRegistry, history_limit: usize) -> Self {
        ToolContext {
            registry,
            history_limit,
            session: None,
        }
    }

    pub fn call(&mut self, name: &str, args: &JsonValue) -> Result<JsonValue, McpError> {
        debug!(tool = name, "tool call");
        match name {
            "convert" => tool_convert(self.registry, args),
            "query" => tool_query(self.registry, args),
            "list_categories" => tool_list_categories(self.registry),
            "get_category" => tool_get_category(self.registry, args),
            "session_open" => self.tool_session_open(args),
            "session_update" => self.tool_session_update(args),
            "session_swap" => self.tool_session_swap(),
            "session_state" => self.tool_session_state(),
            _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
        }
    }

    fn tool_session_open(&mut self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let category = required_str("session_open", args, "category")?;
        match ConverterSession::open(self.registry, category) {
            Ok(session) => {
                let session = session.with_history_limit(self.history_limit);
                let result = session_result(&session);
                self.session = Some(session);
                result
            }
            Err(e) => Ok(error_result(e.into())),
        }
    }

    fn tool_session_update(&mut self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let from = optional_str("session_update", args, "from")?;
        let to = optional_str("session_update", args, "to")?;
        let value = optional_text("session_update", args, "value")?;

        let Some(session) = self.session.as_mut() else {
            return Ok(error_result(ConvertoError::no_session()));
        };

        // Check both keys first so a bad one changes nothing
        for key in from.iter().chain(to.iter()) {
            if !session.category().contains(key) {
                return Ok(error_result(ConvertoError::unit_not_found(&session.category().key, key)));
            }
        }

        if let Some(from) = from {
            if let Err(e) = session.set_from(from) {
                return Ok(error_result(e.into()));
            }
        }
        if let Some(to) = to {
            if let Err(e) = session.set_to(to) {
                return Ok(error_result(e.into()));
            }
        }
        if let Some(value) = value {
            session.set_input(&value);
        }

        session_result(session)
    }

    fn tool_session_swap(&mut self) -> Result<JsonValue, McpError> {
        match self.session.as_mut() {
            Some(session) => {
                session.swap();
                session_result(session)
            }
            None => Ok(error_result(ConvertoError::no_session())),
        }
    }

    fn tool_session_state(&self) -> Result<JsonValue, McpError> {
        match &self.session {
            Some(session) => session_result(session),
            None => Ok(error_result(ConvertoError::no_session())),
        }
    }
}

/// Tool descriptors for tools/list
pub fn tool_definitions() -> JsonValue {
    json!([
        {
            "name": "convert",
            "description": "Convert a value between two units of one category. An unparseable value gives an empty result.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "category": { "type": "string", "description": "Category key, e.g. 'length'" },
                    "from": { "type": "string", "description": "Source unit key, e.g. 'kilometer'" },
                    "to": { "type": "string", "description": "Target unit key, e.g. 'mile'" },
                    "value": { "type": ["string", "number"], "description": "Magnitude to convert" }
                },
                "required": ["category", "from", "to", "value"]
            }
        },
        {
            "name": "query",
            "description": "Convert a textual query such as '5 kilometer to mile' or 'temperature: 98.6 fahrenheit -> celsius'.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "text": { "type": "string", "description": "Conversion query" }
                },
                "required": ["text"]
            }
        },
        {
            "name": "list_categories",
            "description": "List all unit categories in declaration order.",
            "inputSchema": { "type": "object", "properties": {} }
        },
        {
            "name": "get_category",
            "description": "List the units of a category.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "category": { "type": "string", "description": "Category key" }
                },
                "required": ["category"]
            }
        },
        {
            "name": "session_open",
            "description": "Open an interactive converter on a category, with its default unit pair selected.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "category": { "type": "string", "description": "Category key" }
                },
                "required": ["category"]
            }
        },
        {
            "name": "session_update",
            "description": "Change the input value and/or units of the open converter. Each change recomputes the result.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "value": { "type": ["string", "number"], "description": "Raw input text" },
                    "from": { "type": "string", "description": "Source unit key" },
                    "to": { "type": "string", "description": "Target unit key" }
                }
            }
        },
        {
            "name": "session_swap",
            "description": "Swap the source and target units of the open converter.",
            "inputSchema": { "type": "object", "properties": {} }
        },
        {
            "name": "session_state",
            "description": "Show the open converter: units, input, result and recent conversions.",
            "inputSchema": { "type": "object", "properties": {} }
        }
    ])
}

fn tool_convert(registry: &UnitRegistry, args: &JsonValue) -> Result<JsonValue, McpError> {
    let category = required_str("convert", args, "category")?;
    let from = required_str("convert", args, "from")?;
    let to = required_str("convert", args, "to")?;
    let input = optional_text("convert", args, "value")?
        .ok_or_else(|| McpError::from_error(ConvertoError::arg_missing("convert", "value")))?;

    // An unusable magnitude still goes through so key errors are reported first
    let magnitude = parse_magnitude(&input).unwrap_or(f64::NAN);

    match registry.convert(magnitude, from, to, category) {
        Ok(value) => {
            let display = format_result(value);
            let symbol = |key: &str| registry.unit(category, key)
                .map(|u| u.symbol.clone())
                .unwrap_or_else(|| key.to_string());
            let text = format!("{} {} = {} {}", input, symbol(from), display, symbol(to));
            Ok(text_result(text, json!({
                "category": category,
                "from": from,
                "to": to,
                "input": input,
                "value": value,
                "display": display,
            })))
        }
        Err(e) => {
            let err = ConvertoError::from(e);
            if err.is_silent() {
                Ok(text_result(String::new(), json!({
                    "category": category,
                    "from": from,
                    "to": to,
                    "input": input,
                    "value": null,
                    "display": "",
                })))
            } else {
                Ok(error_result(err))
            }
        }
    }
}

fn tool_query(registry: &UnitRegistry, args: &JsonValue) -> Result<JsonValue, McpError> {
    let text = required_str("query", args, "text")?;
    match registry.run_query(text) {
        Ok(resolved) => {
            let display = resolved.display();
            let summary = format!("{} {} = {} {}", resolved.input, resolved.from.symbol, display, resolved.to.symbol);
            Ok(text_result(summary, json!({
                "category": resolved.category.key,
                "from": resolved.from.key,
                "to": resolved.to.key,
                "input": resolved.input,
                "value": resolved.result,
                "display": display,
            })))
        }
        Err(e) => Ok(error_result(e.into())),
    }
}

fn tool_list_categories(registry: &UnitRegistry) -> Result<JsonValue, McpError> {
    let mut lines = Vec::new();
    let mut data = Vec::new();

    for category in registry.categories() {
        lines.push(format!("{}: {} ({} units)", category.key, category.display_name, category.len()));
        let default_pair = category.default_pair().map(|(from, to)| [from.key.as_str(), to.key.as_str()]);
        data.push(json!({
            "key": category.key,
            "display_name": category.display_name,
            "policy": category.policy,
            "units": category.len(),
            "default_pair": default_pair,
        }));
    }

    Ok(text_result(lines.join("\n"), JsonValue::Array(data)))
}

fn tool_get_category(registry: &UnitRegistry, args: &JsonValue) -> Result<JsonValue, McpError> {
    let key = required_str("get_category", args, "category")?;
    let Some(category) = registry.category(key) else {
        return Ok(error_result(ConvertoError::category_not_found(key)));
    };

    let labels: Vec<String> = category.units().iter()
        .map(|u| format!("{} = {}", u.key, u.label()))
        .collect();
    let text = format!("{} ({} units)\n{}", category.display_name, category.len(), labels.join("\n"));
    Ok(text_result(text, to_json(category)?))
}

fn session_result(session: &ConverterSession<'_>) -> Result<JsonValue, McpError> {
    Ok(text_result(session.summary(), to_json(&session.snapshot())?))
}

fn text_result(text: String, data: JsonValue) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": text }],
        "data": data,
        "isError": false
    })
}

fn error_result(err: ConvertoError) -> JsonValue {
    debug!(code = %err.code, "tool error");
    json!({
        "content": [{ "type": "text", "text": err.to_string() }],
        "error": err,
        "isError": true
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<JsonValue, McpError> {
    serde_json::to_value(value)
        .map_err(|e| McpError::from_error(ConvertoError::internal(e.to_string())))
}

fn required_str<'a>(tool: &str, args: &'a JsonValue, name: &str) -> Result<&'a str, McpError> {
    optional_str(tool, args, name)?
        .ok_or_else(|| McpError::from_error(ConvertoError::arg_missing(tool, name)))
}

fn optional_str<'a>(tool: &str, args: &'a JsonValue, name: &str) -> Result<Option<&'a str>, McpError> {
    match args.get(name) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(McpError::from_error(ConvertoError::arg_type(tool, name, "a string"))),
    }
}

/// A magnitude argument: strings are taken as typed, numbers as printed
fn optional_text(tool: &str, args: &JsonValue, name: &str) -> Result<Option<String>, McpError> {
    match args.get(name) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.clone())),
        Some(JsonValue::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(McpError::from_error(ConvertoError::arg_type(tool, name, "a string or a number"))),
    }
}
