//! HTTP API handlers for albums-api

pub mod albums;
pub mod buildinfo;
pub mod health;
pub mod json;

pub use albums::{
    album_routes, create_album, get_album_by_id, get_album_by_title, get_albums_by_artist,
    list_albums,
};
pub use buildinfo::get_build_info;
pub use health::{health_check, health_routes};
pub use json::PrettyJson;
