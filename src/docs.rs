use utoipa::OpenApi;

use crate::common::response::ResponseStatus;
use crate::editing::color::Mood;
use crate::editing::resolution::Resolution;
use crate::modules::reel::dto::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::reel::handler::create_reel,
    ),
    components(
        schemas(
            ReelParams, ReelUploadForm, ReelResponse, Mood, Resolution, ResponseStatus,
        )
    ),
    tags(
        (name = "Reels", description = "Captioned, beat-synced reel generation")
    )
)]
pub struct ApiDoc;
