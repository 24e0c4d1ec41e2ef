use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::meta::healthz,
        crate::api::meta::about,
        crate::api::meta::openapi_json,
        crate::api::events::events_sse,
        crate::api::classes::classes_list,
        crate::api::classes::classes_distribution,
        crate::api::players::players_list,
        crate::api::players::players_create,
        crate::api::players::players_get,
        crate::api::players::players_update,
        crate::api::players::players_delete,
        crate::api::players::players_import,
        crate::api::groups::groups_list,
        crate::api::groups::groups_create,
        crate::api::groups::groups_get,
        crate::api::groups::groups_update,
        crate::api::groups::groups_delete,
        crate::api::groups::members_add,
        crate::api::groups::members_remove,
    ),
    components(schemas(
        crate::api::players::PlayerCreateReq,
        crate::api::players::PlayerUpdateReq,
        crate::api::groups::GroupCreateReq,
        crate::api::groups::GroupUpdateReq,
        crate::api::groups::MemberAddReq,
    )),
    tags(
        (name = "Meta", description = "Service metadata and health"),
        (name = "Players", description = "Player registry"),
        (name = "Groups", description = "Group registry and membership"),
        (name = "Classes", description = "Class catalog and distribution"),
        (name = "Events", description = "Server-Sent Events stream")
    )
)]
pub struct ApiDoc;
