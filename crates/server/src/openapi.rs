use models::{User, UserInput};
use utoipa::openapi::{
    tag::TagBuilder, ContactBuilder, InfoBuilder, LicenseBuilder, OpenApi as OpenApiDoc,
};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::negotiate::{MIME_JSON, MIME_XML};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Static descriptive metadata applied after the routes are collected.
pub struct UserServiceInfo;

impl Modify for UserServiceInfo {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        openapi.info = InfoBuilder::new()
            .title("UserService")
            .description(Some("Resource for managing Users"))
            .contact(Some(
                ContactBuilder::new()
                    .name(Some("john"))
                    .email(Some("john@doe.rp"))
                    .url(Some("http://johndoe.org"))
                    .build(),
            ))
            .license(Some(LicenseBuilder::new().name("MIT").url(Some("http://mit.org")).build()))
            .version("1.0.0")
            .build();
        openapi.tags = Some(vec![TagBuilder::new()
            .name("users")
            .description(Some("Managing users"))
            .build()]);
    }
}

/// Every users operation consumes and produces XML as well as JSON.
pub struct XmlMediaTypes;

impl Modify for XmlMediaTypes {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        for (path, item) in openapi.paths.paths.iter_mut() {
            if !path.starts_with("/users") {
                continue;
            }
            for op in item.operations.values_mut() {
                if let Some(body) = op.request_body.as_mut() {
                    if let Some(json) = body.content.get(MIME_JSON).cloned() {
                        body.content.insert(MIME_XML.to_string(), json);
                    }
                }
                for response in op.responses.responses.values_mut() {
                    if let utoipa::openapi::RefOr::T(response) = response {
                        if let Some(json) = response.content.get(MIME_JSON).cloned() {
                            response.content.insert(MIME_XML.to_string(), json);
                        }
                    }
                }
            }
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::update,
        crate::routes::users::create,
        crate::routes::users::create_with_id,
        crate::routes::users::delete,
    ),
    components(
        schemas(
            HealthResponse,
            User,
            UserInput,
        )
    ),
    modifiers(&UserServiceInfo, &XmlMediaTypes)
)]
pub struct ApiDoc;
