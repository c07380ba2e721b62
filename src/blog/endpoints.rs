//! Descriptors for the blog service endpoints.

use crate::endpoint::{Endpoint, Param, Payload};
use crate::http::HttpMethod;

const POST_QUERY: &[Param] = &[
    Param::query("searchInput").optional(),
    Param::query("pageNumber").optional(),
    Param::query("pageSize").optional(),
    Param::query("sortBy"),
    Param::query("asc"),
];

pub static NEW_POST: Endpoint = Endpoint {
    name: "newpost",
    method: HttpMethod::Post,
    path: "/blog/newpost",
    params: &[],
    body: Payload::Json,
    response: Payload::Json,
};

pub static EDIT: Endpoint = Endpoint {
    name: "edit",
    method: HttpMethod::Put,
    path: "/blog/edit",
    params: &[],
    body: Payload::Json,
    response: Payload::Json,
};

pub static ACTIVATE: Endpoint = Endpoint {
    name: "activate",
    method: HttpMethod::Put,
    path: "/blog/activate/{blogId}",
    params: &[Param::path("blogId")],
    body: Payload::None,
    response: Payload::None,
};

pub static DEACTIVATE: Endpoint = Endpoint {
    name: "deactivate",
    method: HttpMethod::Put,
    path: "/blog/deactivate/{blogId}",
    params: &[Param::path("blogId")],
    body: Payload::None,
    response: Payload::None,
};

pub static FIND_POST_BY_TITLE: Endpoint = Endpoint {
    name: "findPostByTitle",
    method: HttpMethod::Get,
    path: "/blog/findpostbytitle",
    params: POST_QUERY,
    body: Payload::None,
    response: Payload::Json,
};

pub static GET_ACTIVE_POST: Endpoint = Endpoint {
    name: "getActivePost",
    method: HttpMethod::Get,
    path: "/blog/getactivepost",
    params: POST_QUERY,
    body: Payload::None,
    response: Payload::Json,
};

pub static GET_POST_BY_ID: Endpoint = Endpoint {
    name: "getPostById",
    method: HttpMethod::Get,
    path: "/blog/getpostbyid/{blogId}",
    params: &[Param::path("blogId").optional()],
    body: Payload::None,
    response: Payload::Json,
};

// The service really spells it "lastest".
pub static GET_LATEST_POST: Endpoint = Endpoint {
    name: "getLastestPost",
    method: HttpMethod::Get,
    path: "/blog/getlastestpost/",
    params: &[],
    body: Payload::None,
    response: Payload::Json,
};

pub static GET_POST_BY_FRIENDLY_URL: Endpoint = Endpoint {
    name: "getPostByFriendlyUrl",
    method: HttpMethod::Get,
    path: "/blog/getpostbyfriendlyurl/{friendlyUrl}",
    params: &[Param::path("friendlyUrl").optional()],
    body: Payload::None,
    response: Payload::Json,
};

/// Every blog endpoint.
pub static ALL: [&Endpoint; 9] = [
    &NEW_POST,
    &EDIT,
    &ACTIVATE,
    &DEACTIVATE,
    &FIND_POST_BY_TITLE,
    &GET_ACTIVE_POST,
    &GET_POST_BY_ID,
    &GET_LATEST_POST,
    &GET_POST_BY_FRIENDLY_URL,
];
