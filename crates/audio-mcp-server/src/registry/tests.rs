//! Unit tests for tool discovery and argument validation.

use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;

#[fixture]
fn registry() -> ToolRegistry {
    ToolRegistry::new()
}

#[rstest]
fn tools_are_described_in_stable_order(registry: ToolRegistry) {
    let names: Vec<&str> = registry
        .describe()
        .iter()
        .map(|tool| tool.name.as_str())
        .collect();
    assert_eq!(
        names,
        ["speak_text", "play_audio_file", "stop_audio", "get_audio_status"]
    );
}

#[rstest]
fn speak_text_schema_matches_published_shape(registry: ToolRegistry) {
    let definition = registry
        .definition(ToolName::SpeakText)
        .expect("speak_text registered");
    let rendered = serde_json::to_string(definition).expect("serialise");
    assert_eq!(
        rendered,
        concat!(
            r#"{"name":"speak_text","#,
            r#""description":"Convert text to speech and play it through the system audio","#,
            r#""inputSchema":{"type":"object","properties":{"#,
            r#""text":{"type":"string","description":"The text to convert to speech and play"},"#,
            r#""rate":{"type":"integer","description":"Speech rate (words per minute, default: 150)","minimum":50,"maximum":300},"#,
            r#""volume":{"type":"number","description":"Volume level (0.0 to 1.0, default: 0.8)","minimum":0.0,"maximum":1.0}"#,
            r#"},"required":["text"]}}"#
        )
    );
}

#[rstest]
fn parameterless_tools_publish_empty_schema(registry: ToolRegistry) {
    let definition = registry
        .definition(ToolName::StopAudio)
        .expect("stop_audio registered");
    let value = serde_json::to_value(definition).expect("serialise");
    assert_eq!(
        value.get("inputSchema"),
        Some(&json!({"type": "object", "properties": {}, "required": []}))
    );
}

#[rstest]
fn every_required_parameter_is_enforced(registry: ToolRegistry) {
    for tool in registry.describe() {
        for required in tool.required() {
            let error = registry
                .validate(tool.name.as_str(), Some(&json!({})))
                .expect_err("missing required parameter");
            assert_eq!(
                error,
                ValidationError::MissingParameter {
                    tool: tool.name,
                    parameter: required,
                }
            );
        }
    }
}

#[rstest]
fn speak_arguments_are_typed(registry: ToolRegistry) {
    let call = registry
        .validate(
            "speak_text",
            Some(&json!({"text": "hi", "rate": 400, "volume": 1.5})),
        )
        .expect("valid");
    assert_eq!(
        call,
        ToolCall::Speak(SpeakArgs {
            text: String::from("hi"),
            rate: Some(400),
            volume: Some(1.5),
        })
    );
}

#[rstest]
fn optional_nulls_are_treated_as_absent(registry: ToolRegistry) {
    let call = registry
        .validate(
            "play_audio_file",
            Some(&json!({"file_path": "a.wav", "volume": null})),
        )
        .expect("valid");
    assert_eq!(
        call,
        ToolCall::PlayFile(PlayFileArgs {
            file_path: "a.wav".into(),
            volume: None,
        })
    );
}

#[rstest]
#[case::empty_text(json!({"text": ""}), "text")]
#[case::null_text(json!({"text": null}), "text")]
#[case::absent_text(json!({"rate": 120}), "text")]
fn empty_or_absent_text_is_missing(
    registry: ToolRegistry,
    #[case] arguments: Value,
    #[case] parameter: &'static str,
) {
    let error = registry
        .validate("speak_text", Some(&arguments))
        .expect_err("missing text");
    assert_eq!(
        error,
        ValidationError::MissingParameter {
            tool: ToolName::SpeakText,
            parameter,
        }
    );
    assert_eq!(error.to_string(), "missing required parameter 'text'");
}

#[rstest]
#[case::numeric_text(json!({"text": 5}), "text", ParamKind::String, "number")]
#[case::string_rate(json!({"text": "x", "rate": "fast"}), "rate", ParamKind::Integer, "string")]
#[case::fractional_rate(json!({"text": "x", "rate": 1.5}), "rate", ParamKind::Integer, "fractional number")]
#[case::boolean_volume(json!({"text": "x", "volume": true}), "volume", ParamKind::Number, "boolean")]
fn wrong_kinds_are_rejected(
    registry: ToolRegistry,
    #[case] arguments: Value,
    #[case] parameter: &'static str,
    #[case] expected: ParamKind,
    #[case] found: &'static str,
) {
    let error = registry
        .validate("speak_text", Some(&arguments))
        .expect_err("wrong kind");
    assert_eq!(
        error,
        ValidationError::InvalidParameter {
            tool: ToolName::SpeakText,
            parameter,
            expected,
            found,
        }
    );
}

#[rstest]
fn integer_volume_is_accepted_as_number(registry: ToolRegistry) {
    let call = registry
        .validate("play_audio_file", Some(&json!({"file_path": "a.wav", "volume": 1})))
        .expect("valid");
    assert!(matches!(
        call,
        ToolCall::PlayFile(PlayFileArgs { volume: Some(v), .. }) if v == 1.0
    ));
}

#[rstest]
fn unknown_tool_is_reported_by_name(registry: ToolRegistry) {
    let error = registry
        .validate("sing_song", None)
        .expect_err("unknown tool");
    assert_eq!(error.to_string(), "Unknown tool 'sing_song'");
}

#[rstest]
fn non_object_arguments_are_rejected(registry: ToolRegistry) {
    let error = registry
        .validate("stop_audio", Some(&json!([1, 2])))
        .expect_err("array arguments");
    assert_eq!(
        error,
        ValidationError::InvalidArguments {
            tool: ToolName::StopAudio,
            found: "array",
        }
    );
}

#[rstest]
#[case::absent(None)]
#[case::null(Some(Value::Null))]
#[case::without_name(Some(json!({"arguments": {}})))]
fn params_without_name_are_rejected(registry: ToolRegistry, #[case] params: Option<Value>) {
    let error = registry
        .validate_params(params.as_ref())
        .expect_err("no tool name");
    assert_eq!(error, ValidationError::MissingToolName);
}

#[rstest]
fn params_must_be_an_object(registry: ToolRegistry) {
    let error = registry
        .validate_params(Some(&json!("speak_text")))
        .expect_err("string params");
    assert_eq!(error, ValidationError::InvalidParams { found: "string" });
}

#[rstest]
fn params_without_arguments_validate_parameterless_tools(registry: ToolRegistry) {
    let call = registry
        .validate_params(Some(&json!({"name": "get_audio_status"})))
        .expect("valid");
    assert_eq!(call, ToolCall::Status);
}

#[rstest]
fn non_string_tool_name_is_unknown(registry: ToolRegistry) {
    let error = registry
        .validate_params(Some(&json!({"name": 42})))
        .expect_err("numeric name");
    assert_eq!(error.to_string(), "Unknown tool '42'");
}

#[rstest]
#[case::integral_float(json!(150.0), 150)]
#[case::exponent(json!(2e2), 200)]
#[case::beyond_i64(json!(1e20), i64::MAX)]
#[case::beyond_i64_negative(json!(-1e20), i64::MIN)]
#[case::large_unsigned(json!(u64::MAX), i64::MAX)]
fn integral_rates_are_accepted(
    registry: ToolRegistry,
    #[case] rate: Value,
    #[case] expected: i64,
) {
    let call = registry
        .validate("speak_text", Some(&json!({"text": "hi", "rate": rate})))
        .expect("integral rate");
    assert_eq!(
        call,
        ToolCall::Speak(SpeakArgs {
            text: String::from("hi"),
            rate: Some(expected),
            volume: None,
        })
    );
}
