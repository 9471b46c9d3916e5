use serde_json::Value;
use shared::{ApiResponse, Payload};
use yew::prelude::*;

/// What the shared output region is currently showing. Every action
/// resolves to one of these; nothing is fatal.
#[derive(Clone, PartialEq)]
pub enum OutputState {
    Idle,
    /// Feedback text shown synchronously before a call goes out
    Pending(String),
    /// Local validation or transport failure
    Error(String),
    /// Success text with no body worth showing (deletes, logout)
    Notice(String),
    /// A normalized response, optionally headed by a success message
    Response {
        message: Option<String>,
        response: ApiResponse,
    },
}

/// CSS class for a leaf JSON value. Containers carry no class of
/// their own; only their contents are colored.
fn scalar_class(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "json-string",
        Value::Number(_) => "json-number",
        Value::Bool(_) => "json-bool",
        Value::Null => "json-null",
        Value::Object(_) | Value::Array(_) => "",
    }
}

/// JSON source text for a leaf value. Strings come back quoted and
/// escaped, everything else prints as-is.
fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => serde_json::to_string(s).unwrap_or_else(|_| format!("{:?}", s)),
        other => other.to_string(),
    }
}

/// Pretty-print a JSON value into classed spans, mirroring the plain
/// two-space indentation of serde_json's pretty printer. Keys and leaf
/// values get a span each so the stylesheet can color them.
fn render_json(value: &Value, indent: usize) -> Html {
    let pad = "  ".repeat(indent);
    let inner_pad = "  ".repeat(indent + 1);
    match value {
        Value::Object(map) if map.is_empty() => html! { {"{}"} },
        Value::Object(map) => html! {
            <>
                {"{\n"}
                {for map.iter().enumerate().map(|(i, (key, val))| {
                    let comma = if i + 1 < map.len() { ",\n" } else { "\n" };
                    html! {
                        <>
                            {inner_pad.clone()}
                            <span class="json-key">
                                {serde_json::to_string(key).unwrap_or_else(|_| format!("{:?}", key))}
                            </span>
                            {": "}
                            {render_json(val, indent + 1)}
                            {comma}
                        </>
                    }
                })}
                {format!("{}}}", pad)}
            </>
        },
        Value::Array(items) if items.is_empty() => html! { {"[]"} },
        Value::Array(items) => html! {
            <>
                {"[\n"}
                {for items.iter().enumerate().map(|(i, val)| {
                    let comma = if i + 1 < items.len() { ",\n" } else { "\n" };
                    html! {
                        <>
                            {inner_pad.clone()}
                            {render_json(val, indent + 1)}
                            {comma}
                        </>
                    }
                })}
                {format!("{}]", pad)}
            </>
        },
        scalar => html! {
            <span class={scalar_class(scalar)}>{format_scalar(scalar)}</span>
        },
    }
}

fn render_payload(payload: &Payload) -> Html {
    match payload {
        Payload::Json(value) => render_json(value, 0),
        Payload::Text(text) => html! { {text.clone()} },
        Payload::Empty => html! { {"(no content)"} },
    }
}

#[derive(Properties, PartialEq)]
pub struct OutputPanelProps {
    pub state: OutputState,
}

#[function_component(OutputPanel)]
pub fn output_panel(props: &OutputPanelProps) -> Html {
    html! {
        <section class="output-section">
            <h2>{"Response"}</h2>
            <pre class="output">
                {match &props.state {
                    OutputState::Idle => html! {
                        <span class="placeholder">{"Response will appear here..."}</span>
                    },
                    OutputState::Pending(message) => html! {
                        <span class="pending">{message}</span>
                    },
                    OutputState::Error(message) => html! {
                        <span class="error">{format!("❌ Error: {}", message)}</span>
                    },
                    OutputState::Notice(message) => html! {
                        <span class="success">{format!("✅ {}", message)}</span>
                    },
                    OutputState::Response { message, response } => html! {
                        <>
                            {if let Some(message) = message {
                                html! { <div class="success">{format!("✅ {}", message)}</div> }
                            } else {
                                html! {}
                            }}
                            <div class={if response.ok { "status ok" } else { "status err" }}>
                                {format!("HTTP {}", response.status)}
                            </div>
                            <code>{render_payload(&response.data)}</code>
                        </>
                    },
                }}
            </pre>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_class_matches_value_kind() {
        assert_eq!(scalar_class(&json!("lunch")), "json-string");
        assert_eq!(scalar_class(&json!(12.5)), "json-number");
        assert_eq!(scalar_class(&json!(true)), "json-bool");
        assert_eq!(scalar_class(&json!(null)), "json-null");
    }

    #[test]
    fn test_scalar_class_leaves_containers_unclassed() {
        assert_eq!(scalar_class(&json!({})), "");
        assert_eq!(scalar_class(&json!([])), "");
    }

    #[test]
    fn test_format_scalar_quotes_and_escapes_strings() {
        assert_eq!(format_scalar(&json!("plain")), "\"plain\"");
        assert_eq!(format_scalar(&json!("a \"quoted\" word")), "\"a \\\"quoted\\\" word\"");
    }

    #[test]
    fn test_format_scalar_prints_other_leaves_as_json() {
        assert_eq!(format_scalar(&json!(42)), "42");
        assert_eq!(format_scalar(&json!(12.5)), "12.5");
        assert_eq!(format_scalar(&json!(false)), "false");
        assert_eq!(format_scalar(&json!(null)), "null");
    }
}
