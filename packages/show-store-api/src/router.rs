//! Matchit routing configuration.

use std::sync::Arc;

use hyper::{body::Bytes, Method, Request, Response};
use matchit::Router as MatchitRouter;
use thiserror::Error;

use crate::handlers::{self, request_utils::QueryArgs, Envelope, EnvelopeError};
use show_store_core::{ShowStore, StoreError};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Record store backing the show endpoints
    pub store: Arc<dyn ShowStore>,
}

/// HTTP request router.
pub struct Router {
    inner: MatchitRouter<RouteHandler>,
    state: AppState,
}

impl Router {
    /// Creates a new router with default routes.
    pub fn new(store: Arc<dyn ShowStore>) -> Self {
        let mut router = MatchitRouter::new();

        router
            .insert("/", RouteHandler::Index)
            .expect("Failed to insert / route");
        router
            .insert("/mirror/{name}", RouteHandler::Mirror)
            .expect("Failed to insert /mirror/{name} route");

        // Show CRUD endpoints
        router
            .insert("/shows", RouteHandler::Shows)
            .expect("Failed to insert /shows route");
        router
            .insert("/shows/{id}", RouteHandler::Show)
            .expect("Failed to insert /shows/{id} route");

        Self {
            inner: router,
            state: AppState { store },
        }
    }

    /// Routes an incoming request and always produces an enveloped response.
    ///
    /// Failures that escape a handler are logged and answered according to
    /// [`RouterError::status`].
    pub fn route<B>(&self, req: &Request<B>) -> Response<Bytes> {
        let method = req.method();
        let path = req.uri().path();

        let response = match self.dispatch(method, path, req.uri().query()) {
            Ok(response) => response,
            Err(err) => {
                if err.status() >= 500 {
                    tracing::error!("Error handling {} {}: {}", method, path, err);
                } else {
                    tracing::debug!("Rejected {} {}: {}", method, path, err);
                }
                Response::from(err)
            }
        };
        tracing::debug!(
            method = %method,
            path = %path,
            status = response.status().as_u16(),
            "request handled"
        );
        response
    }

    /// Matches a path and method to a handler and runs it.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Raw (still percent-encoded) request path
    /// * `query` - Raw query string, if any
    ///
    /// # Returns
    /// `Result<Response<Bytes>, RouterError>` containing the response or an error.
    pub fn dispatch(
        &self,
        method: &Method,
        path: &str,
        query: Option<&str>,
    ) -> Result<Response<Bytes>, RouterError> {
        match self.inner.at(path) {
            Ok(matched) => {
                let query = QueryArgs::parse(query);
                matched
                    .value
                    .handle(method, &matched.params, &query, &self.state)
            }
            Err(_) => Err(RouterError::NotFound(format!("No route found for {}", path))),
        }
    }
}

/// Route handler function.
enum RouteHandler {
    Index,
    Mirror,
    Shows,
    Show,
}

impl RouteHandler {
    /// Handles a request with the given route parameters.
    fn handle(
        &self,
        method: &Method,
        params: &matchit::Params<'_, '_>,
        query: &QueryArgs,
        state: &AppState,
    ) -> Result<Response<Bytes>, RouterError> {
        // HEAD runs the GET handler; the server drops the body
        let method = if *method == Method::HEAD {
            Method::GET
        } else {
            method.clone()
        };
        match (self, &method) {
            (RouteHandler::Index, &Method::GET) => handlers::hello_world(),
            (RouteHandler::Mirror, &Method::GET) => handlers::mirror(params),
            (RouteHandler::Shows, &Method::GET) => handlers::list_shows(query, state),
            (RouteHandler::Shows, &Method::POST) => handlers::create_show(query, state),
            (RouteHandler::Show, &Method::GET) => handlers::get_show(params, state),
            (RouteHandler::Show, &Method::PUT) => handlers::update_show(params, query, state),
            (RouteHandler::Show, &Method::DELETE) => handlers::delete_show(params, state),
            _ => Err(RouterError::MethodNotAllowed),
        }
    }
}

/// Router error type.
///
/// These are failures a handler did not turn into a reply itself. Missing
/// records and missing arguments are ordinary replies, not errors.
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Not Found: {0}")]
    NotFound(String),

    /// Path or query value that does not parse as an integer
    #[error("Invalid value '{value}' for parameter '{name}'")]
    InvalidParameter { name: &'static str, value: String },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Handler tried to envelope data that is not a keyed object
    #[error("Envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    #[error("Internal Error: {0}")]
    InternalError(String),
}

impl RouterError {
    /// HTTP status used when answering with this error.
    ///
    /// Unparsable parameters answer 500 rather than 400, matching how
    /// existing clients observe them.
    pub fn status(&self) -> u16 {
        match self {
            RouterError::MethodNotAllowed => 405,
            RouterError::NotFound(_) => 404,
            RouterError::InvalidParameter { .. }
            | RouterError::Store(_)
            | RouterError::Envelope(_)
            | RouterError::InternalError(_) => 500,
        }
    }
}

impl From<RouterError> for Response<Bytes> {
    fn from(err: RouterError) -> Self {
        let status = err.status();
        let message = match &err {
            RouterError::MethodNotAllowed => "Method Not Allowed",
            RouterError::NotFound(_) => "Not Found",
            _ => "Internal Server Error",
        };

        let envelope = Envelope::from_map(None, status, message);
        let body = serde_json::to_vec(&envelope).unwrap_or_else(|_| {
            format!(
                "{{\"code\":{},\"success\":false,\"message\":\"{}\",\"result\":null}}",
                status, message
            )
            .into_bytes()
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Bytes::from(body))
            .unwrap_or_else(|_| {
                let mut fallback = Response::new(Bytes::from_static(b"Internal Server Error"));
                *fallback.status_mut() = hyper::StatusCode::INTERNAL_SERVER_ERROR;
                fallback
            })
    }
}
