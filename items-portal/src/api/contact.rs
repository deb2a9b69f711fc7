use axum::{
    extract::{rejection::{FormRejection, JsonRejection}, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use maud::Markup;
use std::sync::Arc;

use crate::domain::models::contact::{ContactReceipt, ContactSubmission, SEND_FAILED};
use crate::domain::services::contact_service::ContactService;
use crate::server::AppState;
use crate::views::{self, urls};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(urls::API_CONTACT, post(relay))
        .route(urls::CONTACT, get(contact_form).post(submit_form))
        .route(urls::CONTACT_THANK_YOU, get(thank_you))
}

/// JSON 接口：请求体无法解析时同样返回通用失败
async fn relay(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Json<ContactReceipt> {
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(e) => {
            tracing::warn!("Malformed contact payload: {}", e);
            return Json(ContactReceipt::failed(SEND_FAILED));
        }
    };

    let receipt = ContactService::new(state.mailer.clone()).relay(&submission).await;
    Json(receipt)
}

async fn contact_form() -> Markup {
    views::contact::form(&ContactSubmission::default(), None)
}

/// 表单提交成功后跳转到感谢页，失败时回显表单
async fn submit_form(
    State(state): State<Arc<AppState>>,
    form: Result<Form<ContactSubmission>, FormRejection>,
) -> Response {
    let submission = match form {
        Ok(Form(submission)) => submission,
        Err(e) => {
            tracing::warn!("Malformed contact form: {}", e);
            ContactSubmission::default()
        }
    };

    let receipt = ContactService::new(state.mailer.clone()).relay(&submission).await;
    if receipt.success {
        Redirect::to(urls::CONTACT_THANK_YOU).into_response()
    } else {
        views::contact::form(&submission, receipt.error.as_deref()).into_response()
    }
}

async fn thank_you() -> Markup {
    views::contact::thank_you()
}
