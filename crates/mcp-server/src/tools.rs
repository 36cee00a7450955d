//! The relay tool façade.
//!
//! Four tools, each assembling a small JSON payload from typed arguments and
//! delegating to the upstream executor against one fixed endpoint. A tool
//! call never fails at the MCP layer: argument and payload problems are
//! normalized into the same envelope shape the executor returns, with the
//! fault kind preserved under `details.exception_type`.

use profiler_upstream::envelope::Envelope;
use profiler_upstream::executor::{RequestMethod, UpstreamClient, UpstreamRequest};
use rmcp::model::{CallToolResult, Content, JsonObject, Tool, ToolAnnotations};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

const PROFILES_ENDPOINT: &str = "/profiles";
const COMPANIES_ENDPOINT: &str = "/companies";
const COMPANY_POSTS_ENDPOINT: &str = "/company_posts";
const PERSON_ENDPOINT: &str = "/person";

const DEFAULT_POST_COUNT: i64 = 1;

#[derive(Debug, Deserialize)]
struct LinksArgs {
    links: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CompanyPostsArgs {
    links: Vec<String>,
    #[serde(default = "default_post_count")]
    count: i64,
}

fn default_post_count() -> i64 {
    DEFAULT_POST_COUNT
}

#[derive(Debug, Deserialize)]
struct PersonArgs {
    link: String,
}

/// The four relay tools over one shared upstream client.
#[derive(Clone)]
pub struct RelayTools {
    client: UpstreamClient,
}

impl RelayTools {
    #[must_use]
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    /// List the MCP `Tool`s exposed by the relay.
    #[must_use]
    pub fn list_tools(&self) -> Vec<Tool> {
        vec![
            relay_tool(
                "profiles",
                "Fetch full LinkedIn profile data for one or more profile URLs.",
                link_list_schema("LinkedIn profile URLs"),
            ),
            relay_tool(
                "companies",
                "Fetch LinkedIn company data for one or more company URLs.",
                link_list_schema("LinkedIn company URLs"),
            ),
            relay_tool(
                "company_posts",
                "Fetch recent posts for one or more LinkedIn company URLs.",
                company_posts_schema(),
            ),
            relay_tool(
                "person",
                "Fetch LinkedIn profile data for a single person URL.",
                person_schema(),
            ),
        ]
    }

    /// Execute a relay tool by name. Returns `None` for unknown names so the
    /// caller can raise a protocol-level error; every known tool returns a
    /// result, never an error.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Option<CallToolResult> {
        let args = Value::Object(arguments.unwrap_or_default());
        let envelope = match name {
            "profiles" => self.post_links(PROFILES_ENDPOINT, args).await,
            "companies" => self.post_links(COMPANIES_ENDPOINT, args).await,
            "company_posts" => self.post_company_posts(args).await,
            "person" => self.post_person(args).await,
            _ => return None,
        };
        Some(envelope_result(&envelope))
    }

    async fn post_links(&self, endpoint: &'static str, args: Value) -> Envelope {
        let args: LinksArgs = match serde_json::from_value(args) {
            Ok(a) => a,
            Err(e) => return invalid_arguments(&e),
        };
        self.post(endpoint, &json!({ "links": args.links })).await
    }

    async fn post_company_posts(&self, args: Value) -> Envelope {
        let args: CompanyPostsArgs = match serde_json::from_value(args) {
            Ok(a) => a,
            Err(e) => return invalid_arguments(&e),
        };
        self.post(
            COMPANY_POSTS_ENDPOINT,
            &json!({ "links": args.links, "count": args.count }),
        )
        .await
    }

    async fn post_person(&self, args: Value) -> Envelope {
        let args: PersonArgs = match serde_json::from_value(args) {
            Ok(a) => a,
            Err(e) => return invalid_arguments(&e),
        };
        self.post(PERSON_ENDPOINT, &json!({ "link": args.link })).await
    }

    async fn post(&self, endpoint: &'static str, payload: &Value) -> Envelope {
        let payload = match serde_json::to_string(payload) {
            Ok(p) => p,
            Err(e) => {
                return Envelope::failure_with_details(
                    400,
                    "Failed to serialize tool payload",
                    json!({
                        "error": e.to_string(),
                        "exception_type": "payload_serialization",
                    }),
                );
            }
        };

        self.client
            .execute(&UpstreamRequest {
                method: RequestMethod::Post,
                endpoint,
                payload: Some(payload),
            })
            .await
    }
}

fn invalid_arguments(e: &serde_json::Error) -> Envelope {
    Envelope::failure_with_details(
        400,
        "Invalid tool arguments",
        json!({
            "error": e.to_string(),
            "exception_type": "invalid_arguments",
        }),
    )
}

/// Render an envelope as a tool result. The envelope JSON is the tool's
/// entire output; `is_error` mirrors the success flag.
fn envelope_result(envelope: &Envelope) -> CallToolResult {
    let text = serde_json::to_string(envelope).unwrap_or_else(|_| {
        r#"{"success":false,"status":500,"message":"Failed to serialize envelope"}"#.to_string()
    });
    CallToolResult {
        content: vec![Content::text(text)],
        structured_content: None,
        is_error: Some(!envelope.is_success()),
        meta: None,
    }
}

fn relay_tool(name: &'static str, description: &'static str, schema: Value) -> Tool {
    let schema_obj = schema.as_object().cloned().unwrap_or_else(JsonObject::new);
    let mut tool = Tool::new(name, description, Arc::new(schema_obj));
    tool.annotations = Some(relay_annotations());
    tool
}

/// POST semantics per RFC 9110: not read-only, not destructive, not
/// idempotent; always open-world (external system).
fn relay_annotations() -> ToolAnnotations {
    ToolAnnotations {
        title: None,
        read_only_hint: Some(false),
        destructive_hint: Some(false),
        idempotent_hint: Some(false),
        open_world_hint: Some(true),
    }
}

fn link_list_schema(items_description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "links": {
                "type": "array",
                "items": { "type": "string" },
                "description": items_description,
            }
        },
        "required": ["links"]
    })
}

fn company_posts_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "links": {
                "type": "array",
                "items": { "type": "string" },
                "description": "LinkedIn company URLs",
            },
            "count": {
                "type": "integer",
                "description": "Number of posts to fetch per company",
                "default": DEFAULT_POST_COUNT,
            }
        },
        "required": ["links"]
    })
}

fn person_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "link": {
                "type": "string",
                "description": "LinkedIn profile URL",
            }
        },
        "required": ["link"]
    })
}
