use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use scholarlink_core::ErrorResponse;
use scholarlink_models::{
    Application, ApplicationCreatedResponse, CreateApplicationDto, CreateResearchDto, Discussion,
    DiscussionWithCreator, Eligibility, Research, ResearchStatus, ResearchWithProfessor, User,
    UserContact, UserRole, UserSummary,
};

use crate::modules::health::controller::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health_check,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::get_professors,
        crate::modules::users::controller::get_students,
        crate::modules::users::controller::get_users,
        crate::modules::research::controller::create_research,
        crate::modules::research::controller::list_research,
        crate::modules::applications::controller::apply,
        crate::modules::discussions::controller::list_discussions,
    ),
    components(
        schemas(
            User,
            UserRole,
            UserSummary,
            UserContact,
            Research,
            ResearchStatus,
            Eligibility,
            ResearchWithProfessor,
            CreateResearchDto,
            Application,
            CreateApplicationDto,
            ApplicationCreatedResponse,
            Discussion,
            DiscussionWithCreator,
            HealthResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Authentication", description = "Login with an identity provider token"),
        (name = "Users", description = "Role-scoped user directories"),
        (name = "Research", description = "Research opportunities"),
        (name = "Applications", description = "Student applications"),
        (name = "Discussions", description = "Discussion threads")
    ),
    info(
        title = "ScholarLink API",
        version = "0.1.0",
        description = "Connects students with professors' research opportunities.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
