use crate::errors::ServerError;
use crate::handlers::{api, leads, pages};
use crate::responses::{text_response, ResultResp};
use crate::state::AppState;
use astra::Request;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) => pages::home(&req, state),
        ("GET", ["properties"]) => pages::properties(&req, state),
        ("GET", ["property", id]) => pages::property_detail(&req, state, id),

        ("POST", ["property", id, "enquiry"]) => leads::enquiry(&mut req, state, id),
        ("POST", ["leads", "ebook"]) => leads::ebook(&mut req, state),
        ("POST", ["leads", "newsletter"]) => leads::newsletter(&mut req, state),
        ("POST", ["leads", "report"]) => leads::report(&mut req, state),

        ("GET", ["api", "properties"]) => api::properties(&req, state),
        ("GET", ["api", "clusters"]) => api::clusters(&req, state),

        ("GET", ["health"]) => text_response("ok"),

        ("GET", _) => pages::not_found(&req, state),
        _ => Err(ServerError::NotFound),
    }
}
