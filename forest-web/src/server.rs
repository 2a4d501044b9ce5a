//! Minimal HTTP front end for the forest generator.
//!
//! Two routes: `/` serves the embedded page, `/forest` composes and
//! serves a fresh SVG. Route resolution is a plain function over the
//! request path so it can be tested without opening a socket.

use crate::{page, svg};
use forest_core::config::ForestConfig;
use forest_core::forest::compose_forest;
use log::{error, info};
use rand::Rng;
use tiny_http::{Header, Response, Server};

/// A resolved route, ready to be written to the socket.
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

/// Resolves a request path to a reply. `/forest` draws a new scene from
/// `rng` on every call; unknown paths get a 404.
pub fn respond(path: &str, rng: &mut impl Rng) -> Reply {
    match path {
        "/" => Reply {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: page::HOME_PAGE.to_string(),
        },
        "/forest" => Reply {
            status: 200,
            content_type: "image/svg+xml",
            body: svg::render_svg(&compose_forest(&ForestConfig::default(), rng)),
        },
        _ => Reply {
            status: 404,
            content_type: "text/plain; charset=utf-8",
            body: "Not Found".to_string(),
        },
    }
}

/// Accepts requests forever, generating one independent forest per
/// `/forest` hit. Transport errors are logged and the loop moves on.
pub fn run(server: &Server) {
    let mut rng = rand::rng();

    for request in server.incoming_requests() {
        let reply = respond(request.url(), &mut rng);
        info!("{} {} -> {}", request.method(), request.url(), reply.status);

        let mut response = Response::from_string(reply.body).with_status_code(reply.status);
        if let Ok(header) = format!("Content-Type: {}", reply.content_type).parse::<Header>() {
            response = response.with_header(header);
        }

        if let Err(e) = request.respond(response) {
            error!("failed to write response: {e}");
        }
    }
}
