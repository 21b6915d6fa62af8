use utoipa::OpenApi;

use crate::presentation::http::{health, markdowns};

#[derive(OpenApi)]
#[openapi(
        paths(
            markdowns::create_markdown,
            markdowns::get_markdown,
            markdowns::list_user_markdowns,
            markdowns::update_markdown,
            markdowns::delete_markdown,
            health::health,
        ),
        components(schemas(
            markdowns::Markdown,
            markdowns::MarkdownPayload,
            markdowns::MarkdownListPayload,
            markdowns::MarkdownBody,
            health::HealthResp,
        )),
        tags(
            (name = "Markdowns", description = "Markdown documents; every body is wrapped in { success, code, data }"),
            (name = "Health", description = "System health checks")
        )
    )]
pub struct ApiDoc;
