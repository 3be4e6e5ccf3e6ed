use super::API;
use super::ApiError;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::ResponseError;
use actix_web::web;
use gtl_core::QuestionId;
use gtl_dto::*;

pub async fn banner() -> impl Responder {
    HttpResponse::Ok().json(ApiBanner {
        message: String::from("GTO Learner API is running"),
    })
}
pub async fn health(api: web::Data<API>) -> impl Responder {
    HttpResponse::Ok().json(ApiHealth {
        status: String::from("ok"),
        scenarios: api.store().len(),
    })
}
pub async fn question(api: web::Data<API>, query: web::Query<ModeQuery>) -> impl Responder {
    match API::mode(query.mode.as_deref())
        .and_then(|mode| api.fetch(mode))
        .inspect_err(ApiError::log)
    {
        Err(e) => e.error_response(),
        Ok(question) => HttpResponse::Ok().json(question),
    }
}
pub async fn next(
    api: web::Data<API>,
    path: web::Path<QuestionId>,
    query: web::Query<ModeQuery>,
) -> impl Responder {
    match API::mode(query.mode.as_deref())
        .and_then(|mode| api.fetch_next(path.into_inner(), mode))
        .inspect_err(ApiError::log)
    {
        Err(e) => e.error_response(),
        Ok(question) => HttpResponse::Ok().json(question),
    }
}
pub async fn judge(api: web::Data<API>, req: web::Json<JudgeRequest>) -> impl Responder {
    match api
        .judge(req.question_id, &req.user_action, req.size.as_deref())
        .inspect_err(ApiError::log)
    {
        Err(e) => e.error_response(),
        Ok(judgment) => HttpResponse::Ok().json(ApiJudgment::from(&judgment)),
    }
}
pub async fn explain(api: web::Data<API>, req: web::Json<JudgeRequest>) -> impl Responder {
    match api
        .explain(req.question_id, &req.user_action, req.size.as_deref())
        .inspect_err(ApiError::log)
    {
        Err(e) => e.error_response(),
        Ok(explanation) => HttpResponse::Ok().json(ApiExplanation { explanation }),
    }
}
