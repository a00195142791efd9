mod create;
mod delete;
mod error;
mod payload;
mod read;
mod update;

use actix_web::{web, HttpRequest, HttpResponse};
use userfn_db::users::store::UserStore;

use crate::invocation::Invocation;

pub use create::create;
pub use delete::delete;
pub use error::InvocationError;
pub use payload::{parse_new_user, parse_user_update, required_user_id};
pub use read::{read, read_all_users, read_user};
pub use update::update;

///
/// Entry point for every request outside of the fixed routes.
///
pub async fn invoke<S: UserStore>(
    request: HttpRequest,
    body: web::Bytes,
    store: web::Data<S>,
) -> Result<HttpResponse, InvocationError> {
    let invocation = Invocation::from_request(&request, body);

    dispatch(store.get_ref(), &invocation).await
}

///
/// Route an invocation to the handler for its method.
///
/// Failures are logged here and returned unchanged.
///
#[tracing::instrument(name = "Dispatch invocation", skip(store, invocation), fields(method = %invocation.method(), request_url = %invocation.request_url()))]
pub async fn dispatch<S: UserStore + ?Sized>(
    store: &S,
    invocation: &Invocation,
) -> Result<HttpResponse, InvocationError> {
    let result = match invocation.method().as_str() {
        "POST" => create(store, invocation).await,
        "GET" => read(store, invocation).await,
        "PUT" => update(store, invocation).await,
        "DELETE" => delete(store, invocation).await,
        _ => Err(InvocationError::UnsupportedMethod(
            invocation.method().clone(),
        )),
    };

    if let Err(e) = &result {
        tracing::error!(error.cause_chain = ?e, error.message = %e, "Invocation failed");
    }

    result
}
