use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::articles::{dto as articles_dto, handler as articles_handler};
use crate::features::careers::{dto as careers_dto, handler as careers_handler};
use crate::features::countries::{dto as countries_dto, handler as countries_handler};
use crate::features::design_categories::{
    dto as design_categories_dto, handler as design_categories_handler,
};
use crate::features::discounts::{dto as discounts_dto, handler as discounts_handler};
use crate::features::newsletters::{dto as newsletters_dto, handler as newsletters_handler};
use crate::features::podcasts::{dto as podcasts_dto, handler as podcasts_handler};
use crate::features::roles::{dto as roles_dto, handler as roles_handler};
use crate::features::tutorials::{dto as tutorials_dto, handler as tutorials_handler};
use crate::features::users::{dto as users_dto, handler as users_handler};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Articles
        articles_handler::list_articles,
        articles_handler::get_article,
        articles_handler::create_article,
        articles_handler::update_article,
        articles_handler::publish_article,
        articles_handler::unpublish_article,
        articles_handler::set_featured_article,
        articles_handler::delete_article,
        // Podcasts
        podcasts_handler::list_podcasts,
        podcasts_handler::get_podcast,
        podcasts_handler::create_podcast,
        podcasts_handler::update_podcast,
        podcasts_handler::publish_podcast,
        podcasts_handler::unpublish_podcast,
        podcasts_handler::set_featured_podcast,
        podcasts_handler::delete_podcast,
        // Tutorials
        tutorials_handler::list_tutorials,
        tutorials_handler::get_tutorial,
        tutorials_handler::create_tutorial,
        tutorials_handler::update_tutorial,
        tutorials_handler::publish_tutorial,
        tutorials_handler::unpublish_tutorial,
        tutorials_handler::set_featured_tutorial,
        tutorials_handler::delete_tutorial,
        // Discounts
        discounts_handler::list_discounts,
        discounts_handler::get_discount,
        discounts_handler::create_discount,
        discounts_handler::update_discount,
        discounts_handler::publish_discount,
        discounts_handler::unpublish_discount,
        discounts_handler::set_featured_discount,
        discounts_handler::delete_discount,
        // Design categories
        design_categories_handler::list_design_categories,
        design_categories_handler::get_design_category,
        design_categories_handler::create_design_category,
        design_categories_handler::update_design_category,
        design_categories_handler::publish_design_category,
        design_categories_handler::unpublish_design_category,
        design_categories_handler::delete_design_category,
        // Countries
        countries_handler::list_countries,
        countries_handler::get_country,
        countries_handler::create_country,
        countries_handler::update_country,
        countries_handler::delete_country,
        // Roles
        roles_handler::list_roles,
        roles_handler::get_role,
        roles_handler::create_role,
        roles_handler::update_role,
        roles_handler::delete_role,
        // Newsletters
        newsletters_handler::list_newsletters,
        newsletters_handler::get_newsletter,
        newsletters_handler::create_newsletter,
        newsletters_handler::update_newsletter,
        newsletters_handler::delete_newsletter,
        // Careers
        careers_handler::list_careers,
        careers_handler::get_career,
        careers_handler::create_career,
        careers_handler::update_career,
        careers_handler::publish_career,
        careers_handler::unpublish_career,
        careers_handler::set_featured_career,
        careers_handler::delete_career,
        // Users
        users_handler::register_user,
        users_handler::list_users,
        users_handler::get_user,
        users_handler::update_user,
        users_handler::delete_user,
    ),
    components(
        schemas(
            // Articles
            articles_dto::CreateArticleDto,
            articles_dto::UpdateArticleDto,
            articles_dto::ArticleResponseDto,
            ApiResponse<articles_dto::ArticleResponseDto>,
            ApiResponse<Vec<articles_dto::ArticleResponseDto>>,
            // Podcasts
            podcasts_dto::CreatePodcastDto,
            podcasts_dto::UpdatePodcastDto,
            podcasts_dto::PodcastResponseDto,
            ApiResponse<podcasts_dto::PodcastResponseDto>,
            ApiResponse<Vec<podcasts_dto::PodcastResponseDto>>,
            // Tutorials
            tutorials_dto::CreateTutorialDto,
            tutorials_dto::UpdateTutorialDto,
            tutorials_dto::TutorialResponseDto,
            ApiResponse<tutorials_dto::TutorialResponseDto>,
            ApiResponse<Vec<tutorials_dto::TutorialResponseDto>>,
            // Discounts
            discounts_dto::CreateDiscountDto,
            discounts_dto::UpdateDiscountDto,
            discounts_dto::DiscountResponseDto,
            ApiResponse<discounts_dto::DiscountResponseDto>,
            ApiResponse<Vec<discounts_dto::DiscountResponseDto>>,
            // Design categories
            design_categories_dto::CreateDesignCategoryDto,
            design_categories_dto::UpdateDesignCategoryDto,
            design_categories_dto::DesignCategoryResponseDto,
            ApiResponse<design_categories_dto::DesignCategoryResponseDto>,
            ApiResponse<Vec<design_categories_dto::DesignCategoryResponseDto>>,
            // Countries
            countries_dto::CreateCountryDto,
            countries_dto::UpdateCountryDto,
            countries_dto::CountryResponseDto,
            ApiResponse<countries_dto::CountryResponseDto>,
            ApiResponse<Vec<countries_dto::CountryResponseDto>>,
            // Roles
            roles_dto::CreateRoleDto,
            roles_dto::UpdateRoleDto,
            roles_dto::RoleResponseDto,
            ApiResponse<roles_dto::RoleResponseDto>,
            ApiResponse<Vec<roles_dto::RoleResponseDto>>,
            // Newsletters
            newsletters_dto::CreateNewsletterDto,
            newsletters_dto::UpdateNewsletterDto,
            newsletters_dto::NewsletterResponseDto,
            ApiResponse<newsletters_dto::NewsletterResponseDto>,
            ApiResponse<Vec<newsletters_dto::NewsletterResponseDto>>,
            // Careers
            careers_dto::CreateCareerDto,
            careers_dto::UpdateCareerDto,
            careers_dto::CareerResponseDto,
            ApiResponse<careers_dto::CareerResponseDto>,
            ApiResponse<Vec<careers_dto::CareerResponseDto>>,
            // Users
            users_dto::RegisterUserDto,
            users_dto::UpdateUserDto,
            users_dto::UserResponseDto,
            users_dto::RegisterResponseDto,
            ApiResponse<users_dto::RegisterResponseDto>,
            ApiResponse<users_dto::UserResponseDto>,
            ApiResponse<Vec<users_dto::UserResponseDto>>,
        )
    ),
    tags(
        (name = "articles", description = "Articles with publish and feature lifecycle"),
        (name = "podcasts", description = "Podcast episodes"),
        (name = "tutorials", description = "Video tutorials"),
        (name = "discounts", description = "Discount campaigns"),
        (name = "design-categories", description = "Design content categories"),
        (name = "countries", description = "Country reference data"),
        (name = "roles", description = "User roles"),
        (name = "newsletters", description = "Newsletter subscriptions"),
        (name = "careers", description = "Career postings"),
        (name = "users", description = "User registration and management"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "ContentHub API",
        version = "0.1.0",
        description = "API documentation for ContentHub",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
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
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
